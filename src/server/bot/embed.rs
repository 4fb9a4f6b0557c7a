//! Embed and component builders for bot replies.
//!
//! The services return canonical message copy; this module wraps it in Discord markup.

use serenity::all::{
    ButtonStyle, Colour, CreateActionRow, CreateButton, CreateEmbed, CreateEmbedFooter,
};

use crate::server::{
    bot::command::CHECK_COOLDOWN_BUTTON,
    model::{
        bump::{
            BumpOutcome, Denial, Verdict, Verification, INTERNAL_FAILURE_MESSAGE, READY_MESSAGE,
        },
        community::Community,
    },
};

pub const SUCCESS_COLOUR: Colour = Colour::new(0x57F287);
pub const FAILURE_COLOUR: Colour = Colour::new(0xED4245);
pub const COOLDOWN_COLOUR: Colour = Colour::new(0xFFA500);

const FOOTER: &str = "Bumpboard";

fn base(title: &str, description: impl Into<String>, colour: Colour) -> CreateEmbed {
    CreateEmbed::new()
        .title(title)
        .description(description)
        .colour(colour)
        .footer(CreateEmbedFooter::new(FOOTER))
}

fn denial_embed(denial: &Denial) -> CreateEmbed {
    match denial {
        Denial::NotRegistered => base("Server not registered", denial.message(), FAILURE_COLOUR),
        Denial::ServerCooldown { .. } | Denial::UserCooldown { .. } => {
            base("Cooldown active", denial.message(), COOLDOWN_COLOUR)
        }
    }
}

pub fn bump_outcome(outcome: &BumpOutcome) -> CreateEmbed {
    match outcome {
        BumpOutcome::Bumped(receipt) => base("Server bumped!", receipt.message(), SUCCESS_COLOUR),
        BumpOutcome::Denied(denial) => denial_embed(denial),
    }
}

pub fn verdict(verdict: &Verdict) -> CreateEmbed {
    match verdict {
        Verdict::Allowed => base("Cooldown status", READY_MESSAGE, SUCCESS_COLOUR),
        Verdict::Denied(denial) => denial_embed(denial),
    }
}

pub fn verification(verification: &Verification) -> CreateEmbed {
    let colour = match verification.active {
        Some(true) => SUCCESS_COLOUR,
        Some(false) => COOLDOWN_COLOUR,
        None => FAILURE_COLOUR,
    };

    let mut embed = base("Server verification", verification.message(), colour);
    if let Some(name) = &verification.name {
        embed = embed.field("Server", name, true);
    }

    embed
}

fn tag_line(community: &Community) -> String {
    if community.tags.as_slice().is_empty() {
        "no tags".to_string()
    } else {
        community.tags.as_slice().join(", ")
    }
}

pub fn registered(community: &Community) -> CreateEmbed {
    base(
        "Server registered",
        format!(
            "✅ **{}** is now listed in the directory. Use `/bump` to move it to the top.",
            community.name
        ),
        SUCCESS_COLOUR,
    )
    .field("Invite", &community.invite_code, true)
    .field("Tags", tag_line(community), true)
}

pub fn listing_updated(community: &Community) -> CreateEmbed {
    base(
        "Listing updated",
        format!("✅ The listing of **{}** was updated.", community.name),
        SUCCESS_COLOUR,
    )
    .field("Tags", tag_line(community), true)
}

pub fn unlisted() -> CreateEmbed {
    base(
        "Server unlisted",
        "✅ This server was removed from the directory. Run `/register` to list it again.",
        SUCCESS_COLOUR,
    )
}

/// Owner view of every listing, unlisted ones included.
pub fn listings(communities: &[Community]) -> CreateEmbed {
    let mut embed = base(
        "Your servers",
        if communities.is_empty() {
            "You have not registered any server yet."
        } else {
            "Servers you have registered in the directory."
        },
        SUCCESS_COLOUR,
    );

    for community in communities {
        let status = if community.is_active { "Listed" } else { "Unlisted" };
        embed = embed.field(
            &community.name,
            format!("{} · {}", status, tag_line(community)),
            false,
        );
    }

    embed
}

/// A listing request refused because of the caller's input or standing.
pub fn rejected(message: &str) -> CreateEmbed {
    base("Request refused", format!("❌ {}", message), FAILURE_COLOUR)
}

pub fn internal_failure() -> CreateEmbed {
    base("Something went wrong", INTERNAL_FAILURE_MESSAGE, FAILURE_COLOUR)
}

pub fn guild_only() -> CreateEmbed {
    base(
        "Server only",
        "❌ This command can only be used inside a server.",
        FAILURE_COLOUR,
    )
}

pub fn info(app_url: &str) -> CreateEmbed {
    base(
        "About Bumpboard",
        format!(
            "Bumpboard lists Discord communities and lets members bump them back to the top.\n\n\
             Register your server at {}",
            app_url
        ),
        SUCCESS_COLOUR,
    )
    .field("Server cooldown", "1 hour", true)
    .field("User cooldown", "2 hours", true)
}

pub fn help() -> CreateEmbed {
    base(
        "Commands",
        "`/bump` - Bump this server to the top of the directory\n\
         `/cooldown` - Check when this server and you can bump again\n\
         `/verify` - Check whether this server is registered\n\
         `/register` - List this server in the directory (owner or administrator)\n\
         `/edit` - Change this server's description, invite or tags\n\
         `/unlist` - Remove this server from the directory\n\
         `/listings` - Show the servers you have registered\n\
         `/info` - About the bot\n\
         `/help` - Show this message",
        SUCCESS_COLOUR,
    )
}

/// Buttons attached to a successful bump.
pub fn bump_components(app_url: &str) -> Vec<CreateActionRow> {
    vec![CreateActionRow::Buttons(vec![
        CreateButton::new(CHECK_COOLDOWN_BUTTON)
            .label("Check cooldown")
            .style(ButtonStyle::Secondary),
        CreateButton::new_link(app_url).label("Visit website"),
    ])]
}
