//! # Features
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

pub mod reminders;

pub use reminders::{Reminder, ReminderScheduler, ReminderStore, TimeUnit};
