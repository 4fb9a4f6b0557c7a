//! Slash command definitions.

use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption};

pub const BUMP: &str = "bump";
pub const COOLDOWN: &str = "cooldown";
pub const VERIFY: &str = "verify";
pub const INFO: &str = "info";
pub const HELP: &str = "help";
pub const REGISTER: &str = "register";
pub const EDIT: &str = "edit";
pub const UNLIST: &str = "unlist";
pub const LISTINGS: &str = "listings";

pub const DESCRIPTION_OPTION: &str = "description";
pub const INVITE_OPTION: &str = "invite";
pub const TAGS_OPTION: &str = "tags";

/// Custom ID of the button attached to successful bump replies.
pub const CHECK_COOLDOWN_BUTTON: &str = "check_cooldown";

fn description_option() -> CreateCommandOption {
    CreateCommandOption::new(
        CommandOptionType::String,
        DESCRIPTION_OPTION,
        "Short description shown in the directory",
    )
    .max_length(500)
}

fn invite_option() -> CreateCommandOption {
    CreateCommandOption::new(
        CommandOptionType::String,
        INVITE_OPTION,
        "Permanent invite link or code",
    )
}

fn tags_option() -> CreateCommandOption {
    CreateCommandOption::new(
        CommandOptionType::String,
        TAGS_OPTION,
        "Up to 5 comma separated tags, e.g. gaming, anime",
    )
}

/// Global slash commands registered on every `ready`.
pub fn commands() -> Vec<CreateCommand> {
    vec![
        CreateCommand::new(BUMP)
            .description("Bump this server to the top of the directory"),
        CreateCommand::new(COOLDOWN)
            .description("Check when this server and you can bump again"),
        CreateCommand::new(VERIFY)
            .description("Check whether this server is registered in the directory"),
        CreateCommand::new(INFO).description("About the bump bot"),
        CreateCommand::new(HELP).description("List the available commands"),
        CreateCommand::new(REGISTER)
            .description("List this server in the directory")
            .add_option(description_option().required(true))
            .add_option(invite_option().required(true))
            .add_option(tags_option()),
        CreateCommand::new(EDIT)
            .description("Change this server's directory listing")
            .add_option(description_option())
            .add_option(invite_option())
            .add_option(tags_option()),
        CreateCommand::new(UNLIST).description("Remove this server from the directory"),
        CreateCommand::new(LISTINGS).description("Show the servers you have registered"),
    ]
}
