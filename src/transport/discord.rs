//! Discord delivery through serenity's HTTP client
//!
//! Owner addresses are Discord user ids; every reply and notification goes to
//! the user's DM channel.

use async_trait::async_trait;
use log::{debug, error};
use serenity::http::Http;
use serenity::model::id::UserId;
use std::sync::Arc;

use super::{MessageKind, Outbox};
use crate::core::chunk_for_message;

#[derive(Clone)]
pub struct DiscordOutbox {
    http: Arc<Http>,
}

impl DiscordOutbox {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }

    /// Classify a Discord message: guild traffic is group chat, DMs are chat
    pub fn message_kind(in_guild: bool) -> MessageKind {
        if in_guild {
            MessageKind::Group
        } else {
            MessageKind::Chat
        }
    }

    fn parse_owner(to: &str) -> Option<UserId> {
        to.parse::<u64>().ok().map(UserId)
    }
}

#[async_trait]
impl Outbox for DiscordOutbox {
    async fn send_message(&self, to: &str, body: &str) {
        let Some(user_id) = Self::parse_owner(to) else {
            error!("Cannot deliver message: '{to}' is not a Discord user id");
            return;
        };

        let channel = match user_id.create_dm_channel(&*self.http).await {
            Ok(channel) => channel,
            Err(e) => {
                error!("Failed to open DM channel with {to}: {e}");
                return;
            }
        };

        for chunk in chunk_for_message(body) {
            if let Err(e) = channel.id.say(&self.http, &chunk).await {
                error!("Failed to send message to {to}: {e}");
                return;
            }
        }
        debug!("Delivered {} bytes to {to}", body.len());
    }
}
