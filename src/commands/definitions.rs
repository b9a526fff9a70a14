//! Slash command definitions registered with Discord.

use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption};

use super::Command;

fn string_option(name: &str, description: &str, required: bool) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::String, name, description).required(required)
}

fn integer_option(name: &str, description: &str, min: u64) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::Integer, name, description)
        .required(false)
        .min_int_value(min)
}

fn currency_options(command: CreateCommand) -> CreateCommand {
    // Discord rejects required options listed after optional ones
    command
        .add_option(string_option(
            "description",
            "Description of the transaction",
            true,
        ))
        .add_option(integer_option("platinum", "Platinum amount", 0))
        .add_option(integer_option("gold", "Gold amount", 0))
        .add_option(integer_option("silver", "Silver amount", 0))
        .add_option(integer_option("copper", "Copper amount", 0))
}

/// Builder for one command, or `None` for `Command::Unknown`.
pub fn definition(command: Command) -> Option<CreateCommand> {
    let builder = CreateCommand::new(command.name());

    let builder = match command {
        Command::Login => builder
            .description("Login to your Party Loot account")
            .add_option(string_option("username", "Your Party Loot username", true))
            .add_option(string_option("password", "Your Party Loot password", true)),
        Command::Funds => builder.description("View your party funds"),
        Command::AddFunds => currency_options(builder.description("Add funds to your party")),
        Command::RemoveFunds => {
            currency_options(builder.description("Remove funds from your party"))
        }
        Command::Items => builder.description("List your party items"),
        Command::AddItem => builder
            .description("Add an item to your inventory")
            .add_option(string_option("name", "Item name", true))
            .add_option(string_option("owner", "Who owns this item", true))
            .add_option(string_option("source", "Where the item came from", true))
            .add_option(integer_option("quantity", "Item quantity", 1)),
        Command::Campaigns => builder.description("List your campaigns"),
        Command::SetCampaign => builder
            .description("Set your active campaign")
            .add_option(string_option(
                "campaign_id",
                "Campaign ID to set as active",
                true,
            )),
        Command::History => builder
            .description("View recent fund history")
            .add_option(integer_option("limit", "Number of entries to show", 1)),
        Command::Unknown => return None,
    };

    Some(builder)
}

/// Every command the bot answers to.
pub fn definitions() -> Vec<CreateCommand> {
    Command::ALL.into_iter().filter_map(definition).collect()
}
