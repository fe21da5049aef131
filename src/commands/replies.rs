//! User-facing reply text

pub const HELP_TEXT: &str = "Available commands:
- remind <time><h|m> <message>: Set a reminder (e.g., 'remind 1.5h take out laundry')
- list: Show all active reminders
- cancel <number>: Cancel reminder by number (get number from list command)
- help: Show this help message";

pub const NO_REMINDERS: &str = "No active reminders.";

pub const LIST_HEADER: &str = "Active reminders:\n";

pub const INVALID_NUMBER: &str =
    "Invalid reminder number. Use 'list' to see available reminders.";

pub const UNRECOGNIZED: &str =
    "I didn't understand that command. Type 'help' to see available commands.";

pub fn cancelled(message: &str) -> String {
    format!("Cancelled reminder: {message}")
}

pub fn scheduled(message: &str, clock: &str) -> String {
    format!("I'll remind you about '{message}' at {clock}")
}

pub fn list_entry(position: usize, message: &str, remaining: &str) -> String {
    format!("{position}. {message} (in {remaining})\n")
}
