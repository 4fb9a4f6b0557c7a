use serenity::all::{Client, GatewayIntents};

use crate::server::{
    bot::handler::Handler, config::Config, error::AppError, state::AppState,
};

/// Builds the Discord bot client.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
/// - `state` - Shared application state handed to the event handler
///
/// # Returns
/// - `Ok(Some(Client))` - Client ready to start
/// - `Ok(None)` - No bot token configured
/// - `Err(AppError::DiscordErr)` - Client construction failed
pub async fn init_bot(config: &Config, state: AppState) -> Result<Option<Client>, AppError> {
    let Some(token) = config.discord_bot_token.as_deref() else {
        tracing::warn!("DISCORD_BOT_TOKEN not set, Discord bot disabled");
        return Ok(None);
    };

    let intents = GatewayIntents::GUILDS;

    let client = Client::builder(token, intents)
        .event_handler(Handler::new(state))
        .await?;

    Ok(Some(client))
}

/// Runs the bot until its shards shut down.
///
/// Should be called from within a `tokio::spawn` task since it does not return while the
/// bot is connected.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
