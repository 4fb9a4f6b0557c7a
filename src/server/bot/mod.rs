//! Discord bot adapter for the bump commands.
//!
//! Registers the global slash commands, maps each interaction onto the bump, cooldown,
//! verification and registry services, and renders their results as embeds. Listing
//! management is gated on the caller owning the guild or holding `ADMINISTRATOR`, read
//! from the interaction's resolved member permissions. The bot also keeps
//! stored guild metadata fresh from `guild_create` events.
//!
//! The bot runs in its own tokio task next to the HTTP server and shares the database
//! pool through `AppState`. It is only started when `DISCORD_BOT_TOKEN` is set.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Receive guild create and delete events; slash commands need no other intent

pub mod command;
pub mod embed;
pub mod handler;
pub mod registry;
pub mod start;
