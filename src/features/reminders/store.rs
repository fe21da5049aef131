//! # Reminder Store
//!
//! Per-owner ordered reminder lists. Uses DashMap so every mutation of one
//! owner's list happens under that key's shard lock: a cancel and a firing
//! timer on the same owner can never interleave.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use dashmap::DashMap;

use super::reminder::{Reminder, ReminderId};

#[derive(Default)]
pub struct ReminderStore {
    reminders: DashMap<String, Vec<Reminder>>,
}

impl ReminderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a reminder to the end of its owner's list
    pub fn push(&self, reminder: Reminder) {
        self.reminders
            .entry(reminder.owner.clone())
            .or_default()
            .push(reminder);
    }

    /// Snapshot of an owner's reminders in display order
    pub fn list(&self, owner: &str) -> Vec<Reminder> {
        self.reminders
            .get(owner)
            .map(|entry| entry.value().clone())
            .unwrap_or_default()
    }

    /// Number of pending reminders for one owner
    pub fn len(&self, owner: &str) -> usize {
        self.reminders.get(owner).map_or(0, |entry| entry.len())
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self, owner: &str) -> bool {
        self.len(owner) == 0
    }

    /// Remove the reminder at a 1-based display position
    ///
    /// Later reminders shift down by one. Out-of-range positions leave the
    /// list untouched.
    pub fn remove_at_position(&self, owner: &str, position: usize) -> Option<Reminder> {
        let removed = {
            let mut entry = self.reminders.get_mut(owner)?;
            if position == 0 || position > entry.len() {
                return None;
            }
            entry.remove(position - 1)
        };
        self.prune(owner);
        Some(removed)
    }

    /// Remove the reminder with the given id, wherever it currently sits
    pub fn remove_by_id(&self, owner: &str, id: ReminderId) -> Option<Reminder> {
        let removed = {
            let mut entry = self.reminders.get_mut(owner)?;
            let index = entry.iter().position(|r| r.id == id)?;
            entry.remove(index)
        };
        self.prune(owner);
        Some(removed)
    }

    /// Number of owners with at least one pending reminder
    #[cfg(test)]
    pub(crate) fn owner_count(&self) -> usize {
        self.reminders.len()
    }

    fn prune(&self, owner: &str) {
        self.reminders.remove_if(owner, |_, list| list.is_empty());
    }
}
