//! # Command System
//!
//! Plain-text chat commands: `help`, `list`, `cancel <n>`, `remind <n><h|m> <text>`.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod parser;
pub mod replies;

// Re-export the CommandHandler from the handler module
pub use crate::command_handler::CommandHandler;

pub use parser::Command;
