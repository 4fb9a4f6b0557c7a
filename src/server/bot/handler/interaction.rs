//! Slash command and button dispatch.
//!
//! Each interaction is acknowledged first (deferred) and answered once the service call
//! returns, so storage latency never trips Discord's three second acknowledgement limit.
//! Service failures are logged and rendered as a generic error embed.

use chrono::Utc;
use serenity::all::{
    CommandInteraction, ComponentInteraction, Context, CreateActionRow, CreateEmbed,
    CreateInteractionResponse, CreateInteractionResponseMessage, EditInteractionResponse,
    GuildId, Interaction, ResolvedValue,
};

use crate::server::{
    bot::{
        command::{
            BUMP, CHECK_COOLDOWN_BUTTON, COOLDOWN, DESCRIPTION_OPTION, EDIT, HELP, INFO,
            INVITE_OPTION, LISTINGS, REGISTER, TAGS_OPTION, UNLIST, VERIFY,
        },
        embed, registry,
    },
    error::AppError,
    model::{
        bump::BumpOutcome,
        community::{GuildSnapshotParam, ManageCapability},
    },
    service::{
        bump::BumpService, cooldown::CooldownService, verification::VerificationService,
    },
    state::AppState,
};

/// Handles an incoming interaction.
///
/// # Arguments
/// - `state` - Application state for service access
/// - `ctx` - Discord context for responding
/// - `interaction` - The slash command or component interaction
pub async fn handle_interaction(state: &AppState, ctx: Context, interaction: Interaction) {
    match interaction {
        Interaction::Command(command) => {
            if let Err(e) = handle_command(state, &ctx, &command).await {
                tracing::error!("Failed to answer /{}: {}", command.data.name, e);
            }
        }
        Interaction::Component(component)
            if component.data.custom_id == CHECK_COOLDOWN_BUTTON =>
        {
            if let Err(e) = handle_check_cooldown_button(state, &ctx, &component).await {
                tracing::error!("Failed to answer cooldown button: {}", e);
            }
        }
        _ => {}
    }
}

async fn handle_command(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let user_id = command.user.id.get();

    match command.data.name.as_str() {
        BUMP => {
            let Some(guild_id) = command.guild_id else {
                return respond(ctx, command, embed::guild_only(), Vec::new(), true).await;
            };

            tracing::debug!(
                "/bump from {} ({}) in guild {}",
                command.user.name,
                user_id,
                guild_id
            );

            command.defer(&ctx.http).await?;
            let (embed, components) = bump_reply(state, guild_id.get(), user_id).await;
            command
                .edit_response(
                    &ctx.http,
                    EditInteractionResponse::new()
                        .embed(embed)
                        .components(components),
                )
                .await?;
        }
        COOLDOWN => {
            let Some(guild_id) = command.guild_id else {
                return respond(ctx, command, embed::guild_only(), Vec::new(), true).await;
            };

            command.defer_ephemeral(&ctx.http).await?;
            let embed = cooldown_reply(state, guild_id.get(), user_id).await;
            command
                .edit_response(&ctx.http, EditInteractionResponse::new().embed(embed))
                .await?;
        }
        VERIFY => {
            let Some(guild_id) = command.guild_id else {
                return respond(ctx, command, embed::guild_only(), Vec::new(), true).await;
            };

            command.defer_ephemeral(&ctx.http).await?;
            let embed = verify_reply(state, guild_id.get()).await;
            command
                .edit_response(&ctx.http, EditInteractionResponse::new().embed(embed))
                .await?;
        }
        INFO => {
            respond(ctx, command, embed::info(&state.app_url), Vec::new(), false).await?;
        }
        HELP => {
            respond(ctx, command, embed::help(), Vec::new(), true).await?;
        }
        REGISTER => {
            let Some(guild_id) = command.guild_id else {
                return respond(ctx, command, embed::guild_only(), Vec::new(), true).await;
            };

            command.defer_ephemeral(&ctx.http).await?;
            let embed = register_reply(state, ctx, command, guild_id).await;
            command
                .edit_response(&ctx.http, EditInteractionResponse::new().embed(embed))
                .await?;
        }
        EDIT => {
            let Some(guild_id) = command.guild_id else {
                return respond(ctx, command, embed::guild_only(), Vec::new(), true).await;
            };

            command.defer_ephemeral(&ctx.http).await?;
            let param = registry::edit_param(
                string_option(command, DESCRIPTION_OPTION),
                string_option(command, INVITE_OPTION),
                string_option(command, TAGS_OPTION),
            );
            let embed = registry::edit_reply(state, user_id, guild_id.get(), param).await;
            command
                .edit_response(&ctx.http, EditInteractionResponse::new().embed(embed))
                .await?;
        }
        UNLIST => {
            let Some(guild_id) = command.guild_id else {
                return respond(ctx, command, embed::guild_only(), Vec::new(), true).await;
            };

            command.defer_ephemeral(&ctx.http).await?;
            let embed = registry::unlist_reply(state, user_id, guild_id.get()).await;
            command
                .edit_response(&ctx.http, EditInteractionResponse::new().embed(embed))
                .await?;
        }
        LISTINGS => {
            command.defer_ephemeral(&ctx.http).await?;
            let embed = registry::listings_reply(state, user_id).await;
            command
                .edit_response(&ctx.http, EditInteractionResponse::new().embed(embed))
                .await?;
        }
        other => {
            tracing::warn!("Received unknown command /{}", other);
        }
    }

    Ok(())
}

/// Value of a string option, if the user supplied it.
fn string_option<'a>(command: &'a CommandInteraction, name: &str) -> Option<&'a str> {
    command
        .data
        .options()
        .into_iter()
        .find_map(|option| match option.value {
            ResolvedValue::String(value) if option.name == name => Some(value),
            _ => None,
        })
}

/// Resolves the live guild and the caller's standing in it, then registers the listing.
async fn register_reply(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
    guild_id: GuildId,
) -> CreateEmbed {
    let guild = match guild_id.to_partial_guild_with_counts(&ctx.http).await {
        Ok(guild) => guild,
        Err(e) => {
            tracing::error!("Failed to fetch guild {} for /register: {}", guild_id, e);
            return embed::internal_failure();
        }
    };

    let capability = ManageCapability {
        is_owner: guild.owner_id == command.user.id,
        permissions: command
            .member
            .as_ref()
            .and_then(|member| member.permissions)
            .map_or(0, |permissions| permissions.bits()),
    };

    let snapshot = GuildSnapshotParam {
        external_id: guild_id.get(),
        icon_url: guild.icon_url(),
        member_count: guild
            .approximate_member_count
            .map_or(0, |count| i32::try_from(count).unwrap_or(i32::MAX)),
        name: guild.name,
    };

    let param = registry::register_param(
        snapshot,
        string_option(command, DESCRIPTION_OPTION).unwrap_or_default(),
        string_option(command, INVITE_OPTION).unwrap_or_default(),
        string_option(command, TAGS_OPTION),
    );

    registry::register_reply(state, command.user.id.get(), capability, param).await
}

async fn handle_check_cooldown_button(
    state: &AppState,
    ctx: &Context,
    component: &ComponentInteraction,
) -> Result<(), AppError> {
    let Some(guild_id) = component.guild_id else {
        return Ok(());
    };

    component.defer_ephemeral(&ctx.http).await?;
    let embed = cooldown_reply(state, guild_id.get(), component.user.id.get()).await;
    component
        .edit_response(&ctx.http, EditInteractionResponse::new().embed(embed))
        .await?;

    Ok(())
}

async fn respond(
    ctx: &Context,
    command: &CommandInteraction,
    embed: CreateEmbed,
    components: Vec<CreateActionRow>,
    ephemeral: bool,
) -> Result<(), AppError> {
    command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .embed(embed)
                    .components(components)
                    .ephemeral(ephemeral),
            ),
        )
        .await?;

    Ok(())
}

async fn bump_reply(
    state: &AppState,
    guild_id: u64,
    user_id: u64,
) -> (CreateEmbed, Vec<CreateActionRow>) {
    let service = BumpService::new(&state.db, state.storage_timeout);

    match service.attempt_bump(guild_id, user_id, Utc::now()).await {
        Ok(outcome) => {
            let components = match outcome {
                BumpOutcome::Bumped(_) => embed::bump_components(&state.app_url),
                BumpOutcome::Denied(_) => Vec::new(),
            };
            (embed::bump_outcome(&outcome), components)
        }
        Err(e) => {
            tracing::error!("Bump of guild {} by {} failed: {}", guild_id, user_id, e);
            (embed::internal_failure(), Vec::new())
        }
    }
}

async fn cooldown_reply(state: &AppState, guild_id: u64, user_id: u64) -> CreateEmbed {
    let service = CooldownService::new(&state.db, state.storage_timeout);

    match service.evaluate(guild_id, user_id, Utc::now()).await {
        Ok(verdict) => embed::verdict(&verdict),
        Err(e) => {
            tracing::error!("Cooldown check for guild {} failed: {}", guild_id, e);
            embed::internal_failure()
        }
    }
}

async fn verify_reply(state: &AppState, guild_id: u64) -> CreateEmbed {
    let service = VerificationService::new(&state.db, state.storage_timeout);

    match service.verify(guild_id).await {
        Ok(verification) => embed::verification(&verification),
        Err(e) => {
            tracing::error!("Verification of guild {} failed: {}", guild_id, e);
            embed::internal_failure()
        }
    }
}
