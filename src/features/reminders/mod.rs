//! # Reminders Feature
//!
//! In-memory reminder store with one deferred delivery task per reminder.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod format;
pub mod reminder;
pub mod scheduler;
pub mod store;

pub use format::{format_clock, format_remaining};
pub use reminder::{Reminder, ReminderId, TimeUnit};
pub use scheduler::ReminderScheduler;
pub use store::ReminderStore;
