// Core layer - configuration and message utilities
pub mod core;

// Features layer - reminder store and scheduler
pub mod features;

// Transport layer - outbound delivery seam and the Discord client adapter
pub mod transport;

// Application layer
pub mod command_handler;
pub mod commands;

pub use crate::core::Config;

pub use features::{Reminder, ReminderScheduler, ReminderStore, TimeUnit};

pub use transport::{DiscordOutbox, MessageKind, Outbox};
