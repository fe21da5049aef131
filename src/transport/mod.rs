//! # Transport
//!
//! The seam between the reminder core and the chat protocol client.
//! The core only ever sees an [`Outbox`]; inbound traffic arrives as plain
//! `(sender, body, kind)` triples from whichever client drives the bot.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod discord;

use async_trait::async_trait;

pub use discord::DiscordOutbox;

/// Kind of an inbound message, as reported by the protocol client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// One-to-one conversation (Discord DM)
    Chat,
    /// Direct message without a conversation thread
    Normal,
    /// Multi-user room traffic (Discord guild channels)
    Group,
}

impl MessageKind {
    /// Whether the bot should treat this message as a command
    pub fn is_direct(self) -> bool {
        matches!(self, MessageKind::Chat | MessageKind::Normal)
    }
}

/// Outbound side of the protocol client
///
/// Delivery is fire-and-forget: implementations log their own failures and
/// never report them back to the caller.
#[async_trait]
pub trait Outbox: Send + Sync {
    async fn send_message(&self, to: &str, body: &str);
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::Mutex;

    /// Outbox double that records every delivery
    #[derive(Default)]
    pub struct RecordingOutbox {
        sent: Mutex<Vec<(String, String)>>,
    }

    impl RecordingOutbox {
        pub fn sent(&self) -> Vec<(String, String)> {
            self.sent.lock().unwrap().clone()
        }

        pub fn bodies_for(&self, to: &str) -> Vec<String> {
            self.sent()
                .into_iter()
                .filter(|(recipient, _)| recipient == to)
                .map(|(_, body)| body)
                .collect()
        }
    }

    #[async_trait]
    impl Outbox for RecordingOutbox {
        async fn send_message(&self, to: &str, body: &str) {
            self.sent
                .lock()
                .unwrap()
                .push((to.to_string(), body.to_string()));
        }
    }
}
