//! Ready event handler for bot initialization.
//!
//! Fired once per gateway connection after the handshake. Registers the global slash
//! commands and sets the bot's activity.

use serenity::all::{ActivityData, Command, Context, Ready};

use crate::server::bot::command::commands;

/// Handles the ready event when the bot connects to Discord.
///
/// Command registration overwrites the full global command set, so repeated ready events
/// are harmless.
///
/// # Arguments
/// - `ctx` - Discord context for registering commands and setting activity status
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord ({} guilds)",
        ready.user.name,
        ready.guilds.len()
    );

    match Command::set_global_commands(&ctx.http, commands()).await {
        Ok(registered) => tracing::info!("Registered {} slash commands", registered.len()),
        Err(e) => tracing::error!("Failed to register slash commands: {}", e),
    }

    ctx.set_activity(Some(ActivityData::custom("/bump to boost your server")));
}
