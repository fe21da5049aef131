//! # Feature: Reminder Scheduler
//!
//! One tokio task per pending reminder. Each task sleeps until its fire time,
//! removes its reminder from the store by id and delivers the notification.
//! Cancelling a reminder aborts its task, so a cancelled reminder never fires.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Match fired timers by reminder id instead of message text
//! - 1.0.0: Initial release with per-reminder sleep tasks

use anyhow::{anyhow, Result};
use chrono::Local;
use dashmap::DashMap;
use log::{debug, info, warn};
use std::sync::Arc;
use tokio::sync::oneshot;
use tokio::task::AbortHandle;

use super::reminder::{Reminder, ReminderId, TimeUnit};
use super::store::ReminderStore;
use crate::transport::Outbox;

pub const NOTIFICATION_PREFIX: &str = "🔔 REMINDER: ";

#[derive(Clone)]
pub struct ReminderScheduler {
    store: Arc<ReminderStore>,
    outbox: Arc<dyn Outbox>,
    timers: Arc<DashMap<ReminderId, AbortHandle>>,
}

impl ReminderScheduler {
    pub fn new(store: Arc<ReminderStore>, outbox: Arc<dyn Outbox>) -> Self {
        Self {
            store,
            outbox,
            timers: Arc::new(DashMap::new()),
        }
    }

    pub fn store(&self) -> &ReminderStore {
        &self.store
    }

    /// Create a reminder due `amount` units from now and arm its timer
    ///
    /// Fails when the delay is too large to be represented as a wall-clock
    /// time. Must be called from within a tokio runtime.
    pub fn schedule(
        &self,
        owner: &str,
        amount: f64,
        unit: TimeUnit,
        message: &str,
    ) -> Result<Reminder> {
        let delay = unit
            .delay(amount)
            .ok_or_else(|| anyhow!("Reminder delay of {amount}{unit:?} is out of range"))?;
        let fire_at = chrono::Duration::from_std(delay)
            .ok()
            .and_then(|d| Local::now().checked_add_signed(d))
            .ok_or_else(|| {
                anyhow!("Reminder fire time {amount}{unit:?} from now is out of range")
            })?;

        let reminder = Reminder::new(owner, fire_at, message);
        self.store.push(reminder.clone());

        let scheduler = self.clone();
        let task_owner = reminder.owner.clone();
        let id = reminder.id;
        let (armed_tx, armed_rx) = oneshot::channel::<()>();
        let task = tokio::spawn(async move {
            // The timer only starts once its abort handle is registered
            let _ = armed_rx.await;
            tokio::time::sleep(delay).await;
            scheduler.fire(&task_owner, id).await;
        });
        self.timers.insert(id, task.abort_handle());
        let _ = armed_tx.send(());

        info!(
            "Scheduled reminder {id} for {owner} in {:.0}s (at {}), {} pending for owner",
            delay.as_secs_f64(),
            fire_at.format("%Y-%m-%d %H:%M:%S"),
            self.store.len(owner)
        );
        Ok(reminder)
    }

    /// Remove the reminder at a 1-based display position and stop its timer
    pub fn cancel(&self, owner: &str, position: usize) -> Option<Reminder> {
        let reminder = self.store.remove_at_position(owner, position)?;
        if let Some((_, handle)) = self.timers.remove(&reminder.id) {
            handle.abort();
        }
        info!("Cancelled reminder {} for {owner}", reminder.id);
        Some(reminder)
    }

    /// Owner's pending reminders in display order
    pub fn list(&self, owner: &str) -> Vec<Reminder> {
        self.store.list(owner)
    }

    /// Number of armed timers across all owners
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    async fn fire(&self, owner: &str, id: ReminderId) {
        self.timers.remove(&id);

        let Some(reminder) = self.store.remove_by_id(owner, id) else {
            warn!("Reminder {id} for {owner} fired but is no longer pending");
            return;
        };

        info!("Firing reminder {id} for {owner}");
        let body = format!("{NOTIFICATION_PREFIX}{}", reminder.message);
        self.outbox.send_message(owner, &body).await;
        debug!(
            "Reminder {id} delivered, {} timers still armed",
            self.pending_timers()
        );
    }
}
