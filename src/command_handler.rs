use chrono::{DateTime, Local};
use log::{debug, info};
use uuid::Uuid;

use crate::commands::parser::Command;
use crate::commands::replies;
use crate::features::reminders::{format_clock, format_remaining, ReminderScheduler};
use crate::transport::MessageKind;

/// Routes inbound chat messages to the reminder scheduler
///
/// Every handled command produces exactly one reply for the sender; the
/// caller delivers it through the transport.
#[derive(Clone)]
pub struct CommandHandler {
    scheduler: ReminderScheduler,
}

impl CommandHandler {
    pub fn new(scheduler: ReminderScheduler) -> Self {
        Self { scheduler }
    }

    pub fn scheduler(&self) -> &ReminderScheduler {
        &self.scheduler
    }

    /// Handle one inbound message, returning the reply if it was a command
    ///
    /// Group traffic is ignored and yields `None`.
    pub fn handle_message(&self, owner: &str, body: &str, kind: MessageKind) -> Option<String> {
        let request_id = Uuid::new_v4();

        if !kind.is_direct() {
            debug!("[{request_id}] Ignoring {kind:?} message from {owner}");
            return None;
        }

        let command = Command::parse(body);
        info!("[{request_id}] 📥 '{}' command from {owner}", command.name());

        let reply = self.handle_command(owner, command);
        debug!("[{request_id}] ✅ Reply ready ({} bytes)", reply.len());
        Some(reply)
    }

    pub fn handle_command(&self, owner: &str, command: Command) -> String {
        match command {
            Command::Help => replies::HELP_TEXT.to_string(),
            Command::List => self.handle_list(owner, Local::now()),
            Command::Cancel(position) => self.handle_cancel(owner, position),
            Command::Remind { amount, unit, text } => {
                match self.scheduler.schedule(owner, amount, unit, &text) {
                    Ok(reminder) => {
                        replies::scheduled(&reminder.message, &format_clock(reminder.fire_at))
                    }
                    Err(e) => {
                        debug!("Rejected reminder from {owner}: {e}");
                        replies::UNRECOGNIZED.to_string()
                    }
                }
            }
            Command::Unrecognized => replies::UNRECOGNIZED.to_string(),
        }
    }

    fn handle_list(&self, owner: &str, now: DateTime<Local>) -> String {
        let reminders = self.scheduler.list(owner);
        if reminders.is_empty() {
            return replies::NO_REMINDERS.to_string();
        }

        let mut list = String::from(replies::LIST_HEADER);
        for (i, reminder) in reminders.iter().enumerate() {
            let remaining = format_remaining(reminder.fire_at, now);
            list.push_str(&replies::list_entry(i + 1, &reminder.message, &remaining));
        }
        list
    }

    fn handle_cancel(&self, owner: &str, position: usize) -> String {
        match self.scheduler.cancel(owner, position) {
            Some(reminder) => replies::cancelled(&reminder.message),
            None => replies::INVALID_NUMBER.to_string(),
        }
    }
}
