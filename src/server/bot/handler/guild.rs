//! Guild lifecycle handlers.
//!
//! `guild_create` fires on startup for every guild the bot is in and whenever it joins a
//! new one. Registered communities get their name, icon and member count refreshed from
//! the gateway snapshot; unregistered guilds are only logged.

use chrono::Utc;
use serenity::all::{Context, Guild, UnavailableGuild};

use crate::server::{
    model::community::GuildSnapshotParam, service::community::CommunityService, state::AppState,
};

/// Handles the guild_create event when a guild becomes available or the bot joins a new guild.
///
/// # Arguments
/// - `state` - Application state holding the database connection
/// - `_ctx` - Discord context (unused)
/// - `guild` - Guild data from Discord
/// - `is_new` - Whether the bot just joined the guild
pub async fn handle_guild_create(
    state: &AppState,
    _ctx: Context,
    guild: Guild,
    is_new: Option<bool>,
) {
    let guild_id = guild.id.get();

    if is_new.unwrap_or(false) {
        tracing::info!("Joined guild {} ({})", guild.name, guild_id);
    } else {
        tracing::debug!("Guild available: {} ({})", guild.name, guild_id);
    }

    let snapshot = GuildSnapshotParam {
        external_id: guild_id,
        icon_url: guild.icon_url(),
        member_count: i32::try_from(guild.member_count).unwrap_or(i32::MAX),
        name: guild.name,
    };

    let service = CommunityService::new(&state.db);
    match service.refresh_guild(snapshot, Utc::now()).await {
        Ok(true) => tracing::debug!("Refreshed metadata of community {}", guild_id),
        Ok(false) => {}
        Err(e) => tracing::error!("Failed to refresh metadata of guild {}: {}", guild_id, e),
    }
}

/// Handles the guild_delete event.
///
/// The community listing is left untouched; owners deactivate listings themselves and
/// idle listings are swept by the scheduler.
pub async fn handle_guild_delete(_ctx: Context, incomplete: UnavailableGuild, full: Option<Guild>) {
    let name = full
        .map(|guild| guild.name)
        .unwrap_or_else(|| "unknown".to_string());

    if incomplete.unavailable {
        tracing::warn!("Guild {} ({}) became unavailable", name, incomplete.id);
    } else {
        tracing::info!("Removed from guild {} ({})", name, incomplete.id);
    }
}
