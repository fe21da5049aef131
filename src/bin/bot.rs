use anyhow::Result;
use dotenvy::dotenv;
use log::{debug, error, info};
use serenity::async_trait;
use serenity::http::Http;
use serenity::model::channel::Message;
use serenity::model::gateway::{Activity, Ready};
use serenity::prelude::*;
use std::sync::Arc;

use robominder::commands::CommandHandler;
use robominder::core::{chunk_for_message, Config};
use robominder::features::reminders::{ReminderScheduler, ReminderStore};
use robominder::transport::{DiscordOutbox, Outbox};

struct Handler {
    command_handler: CommandHandler,
}

impl Handler {
    fn new(command_handler: CommandHandler) -> Self {
        Handler { command_handler }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }

        let owner = msg.author.id.0.to_string();
        let kind = DiscordOutbox::message_kind(msg.guild_id.is_some());

        let Some(reply) = self.command_handler.handle_message(&owner, &msg.content, kind) else {
            return;
        };

        for chunk in chunk_for_message(&reply) {
            if let Err(why) = msg.channel_id.say(&ctx.http, &chunk).await {
                error!("Failed to send reply to {owner}: {why}");
                return;
            }
        }
        debug!("Replied to {owner} in channel {}", msg.channel_id);
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("🎉 {} is connected and ready!", ready.user.name);
        info!("🔗 Gateway session ID: {:?}", ready.session_id);
        info!("🤖 Bot ID: {}", ready.user.id);

        ctx.set_activity(Activity::listening("help")).await;
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Starting Robominder...");

    // Notifications fire outside any gateway event, so they get their own REST client
    let http = Arc::new(Http::new(&config.password));
    let outbox: Arc<dyn Outbox> = Arc::new(DiscordOutbox::new(http));
    let scheduler = ReminderScheduler::new(Arc::new(ReminderStore::new()), outbox);
    let handler = Handler::new(CommandHandler::new(scheduler));

    let intents = GatewayIntents::DIRECT_MESSAGES | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(&config.password, intents)
        .application_id(config.account)
        .event_handler(handler)
        .await
        .map_err(|e| {
            error!("Failed to create Discord client: {e}");
            error!("This could indicate:");
            error!("  - Invalid bot token format");
            error!("  - Network issues reaching Discord API");
            anyhow::anyhow!("Client creation failed: {}", e)
        })?;

    info!("Bot configured successfully. Connecting to Discord gateway...");
    info!("Gateway intents: {intents:?}");

    if let Err(why) = client.start().await {
        error!("Gateway connection failed: {why:?}");
        error!("This could be due to:");
        error!("  - Invalid bot token");
        error!("  - Network connectivity issues");
        error!("  - Discord API outage");
        return Err(anyhow::anyhow!(
            "Failed to establish gateway connection: {}",
            why
        ));
    }

    Ok(())
}
