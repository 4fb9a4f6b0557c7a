//! Listing management replies for `/register`, `/edit`, `/unlist` and `/listings`.
//!
//! The interaction handler resolves the guild snapshot and the caller's capability from
//! Discord; everything after that lives here so it can run without a gateway connection.

use chrono::Utc;
use serenity::all::CreateEmbed;

use crate::server::{
    bot::embed,
    error::AppError,
    model::community::{
        CreateCommunityParam, GuildSnapshotParam, ManageCapability, UpdateCommunityParam,
    },
    service::community::CommunityService,
    state::AppState,
};

const INVITE_PREFIXES: [&str; 4] = [
    "https://discord.gg/",
    "https://discord.com/invite/",
    "discord.gg/",
    "discord.com/invite/",
];

/// Reduces an invite link to its code; bare codes pass through.
pub fn invite_code(raw: &str) -> String {
    let raw = raw.trim();

    INVITE_PREFIXES
        .iter()
        .find_map(|prefix| raw.strip_prefix(prefix))
        .unwrap_or(raw)
        .trim_end_matches('/')
        .to_string()
}

/// Splits the comma separated `tags` option. Normalization happens in the service.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',').map(str::to_string).collect()
}

/// Builds the registration parameters from the live guild snapshot and the command options.
pub fn register_param(
    snapshot: GuildSnapshotParam,
    description: &str,
    invite: &str,
    tags: Option<&str>,
) -> CreateCommunityParam {
    CreateCommunityParam {
        external_id: snapshot.external_id,
        name: snapshot.name,
        description: description.trim().to_string(),
        icon_url: snapshot.icon_url,
        invite_code: invite_code(invite),
        member_count: snapshot.member_count,
        tags: tags.map(split_tags).unwrap_or_default(),
    }
}

/// Builds an edit from the options the user actually supplied.
pub fn edit_param(
    description: Option<&str>,
    invite: Option<&str>,
    tags: Option<&str>,
) -> UpdateCommunityParam {
    UpdateCommunityParam {
        description: description.map(|d| d.trim().to_string()),
        invite_code: invite.map(invite_code),
        tags: tags.map(split_tags),
        ..Default::default()
    }
}

pub async fn register_reply(
    state: &AppState,
    owner_id: u64,
    capability: ManageCapability,
    param: CreateCommunityParam,
) -> CreateEmbed {
    let external_id = param.external_id;
    let service = CommunityService::new(&state.db);

    match service
        .register(owner_id, capability, param, Utc::now())
        .await
    {
        Ok(community) => {
            tracing::info!(
                "Community {} ({}) registered by {}",
                community.name,
                external_id,
                owner_id
            );
            embed::registered(&community)
        }
        Err(e) => rejection(e, "register", external_id),
    }
}

pub async fn edit_reply(
    state: &AppState,
    owner_id: u64,
    external_id: u64,
    param: UpdateCommunityParam,
) -> CreateEmbed {
    let service = CommunityService::new(&state.db);

    match service
        .update(owner_id, external_id, param, Utc::now())
        .await
    {
        Ok(community) => embed::listing_updated(&community),
        Err(e) => rejection(e, "edit", external_id),
    }
}

pub async fn unlist_reply(state: &AppState, owner_id: u64, external_id: u64) -> CreateEmbed {
    let service = CommunityService::new(&state.db);

    match service.deactivate(owner_id, external_id, Utc::now()).await {
        Ok(()) => {
            tracing::info!("Community {} unlisted by {}", external_id, owner_id);
            embed::unlisted()
        }
        Err(e) => rejection(e, "unlist", external_id),
    }
}

pub async fn listings_reply(state: &AppState, owner_id: u64) -> CreateEmbed {
    let service = CommunityService::new(&state.db);

    match service.list_owned(owner_id).await {
        Ok(communities) => embed::listings(&communities),
        Err(e) => {
            tracing::error!("Failed to list communities of {}: {}", owner_id, e);
            embed::internal_failure()
        }
    }
}

/// Caller mistakes are shown to the user; anything else is logged and hidden.
fn rejection(error: AppError, action: &str, external_id: u64) -> CreateEmbed {
    match error {
        AppError::BadRequest(msg)
        | AppError::Forbidden(msg)
        | AppError::Conflict(msg)
        | AppError::NotFound(msg) => embed::rejected(&msg),
        e => {
            tracing::error!("Failed to {} community {}: {}", action, external_id, e);
            embed::internal_failure()
        }
    }
}
