//! Discord adapter built on serenity.
//!
//! Registers the slash commands, acknowledges interactions, hands them to the
//! command dispatcher and sends the rendered replies back.

use serenity::all::{
    ActivityData, ButtonStyle, Command as ApplicationCommand, CommandDataOption,
    CommandDataOptionValue, CommandInteraction, ComponentInteraction, CreateActionRow,
    CreateButton, CreateEmbed, CreateEmbedFooter, CreateInteractionResponse,
    CreateInteractionResponseFollowup, CreateInteractionResponseMessage,
    EditInteractionResponse, GatewayIntents, Interaction, Ready,
};
use serenity::async_trait;
use serenity::prelude::*;
use tracing::{debug, error, info, warn};

use crate::commands::{self, ArgValue, Command, CommandArgs};
use crate::errors::AppError;
use crate::render::{Button, Embed, Reply, REFRESH_CAMPAIGNS};
use crate::AppState;

/// Connect to the gateway and serve interactions until the client stops.
pub async fn run(token: &str, state: AppState) -> Result<(), AppError> {
    let mut client = Client::builder(token, GatewayIntents::GUILDS)
        .event_handler(Handler { state })
        .await?;

    info!("Discord client created, connecting to gateway");
    client.start().await?;

    Ok(())
}

struct Handler {
    state: AppState,
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(
            user = %ready.user.name,
            user_id = %ready.user.id,
            "Discord bot connected"
        );
        ctx.set_activity(Some(ActivityData::playing("Party Loot")));

        info!("Started refreshing application (/) commands");
        match ApplicationCommand::set_global_commands(&ctx.http, commands::definitions()).await {
            Ok(registered) => info!(count = registered.len(), "Registered slash commands"),
            Err(e) => error!(error = %e, "Failed to register slash commands"),
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        match interaction {
            Interaction::Command(command) => self.handle_command(&ctx, &command).await,
            Interaction::Component(component) => self.handle_component(&ctx, &component).await,
            _ => {}
        }
    }
}

impl Handler {
    async fn handle_command(&self, ctx: &Context, interaction: &CommandInteraction) {
        let command = Command::from_name(&interaction.data.name);
        if command == Command::Unknown {
            debug!(name = %interaction.data.name, "Ignoring unknown command");
            return;
        }

        // Discord expects an answer within 3 seconds; the API call may take longer
        let defer = CreateInteractionResponse::Defer(
            CreateInteractionResponseMessage::new().ephemeral(command.is_ephemeral()),
        );
        if let Err(e) = interaction.create_response(&ctx.http, defer).await {
            warn!(error = %e, command = command.name(), "Failed to defer interaction");
            return;
        }

        let operator = interaction.user.id.get();
        let args = command_args(&interaction.data.options);
        debug!(operator, command = command.name(), "Dispatching command");

        let replies = commands::dispatch(&self.state, command, operator, &args).await;
        let mut replies = replies.into_iter();

        if let Some(primary) = replies.next() {
            if let Err(e) = interaction
                .edit_response(&ctx.http, edit_response(&primary))
                .await
            {
                warn!(error = %e, command = command.name(), "Failed to send reply");
                return;
            }
        }

        for reply in replies {
            if let Err(e) = interaction
                .create_followup(&ctx.http, followup(&reply))
                .await
            {
                warn!(error = %e, command = command.name(), "Failed to send follow-up");
            }
        }
    }

    async fn handle_component(&self, ctx: &Context, component: &ComponentInteraction) {
        if component.data.custom_id != REFRESH_CAMPAIGNS {
            return;
        }

        let refreshing = CreateInteractionResponse::UpdateMessage(
            CreateInteractionResponseMessage::new()
                .content("Refreshing campaigns...")
                .components(Vec::new()),
        );
        if let Err(e) = component.create_response(&ctx.http, refreshing).await {
            warn!(error = %e, "Failed to acknowledge refresh");
            return;
        }

        let operator = component.user.id.get();
        let replies = commands::campaigns(&self.state, operator).await;

        if let Some(reply) = replies.first() {
            if let Err(e) = component
                .edit_response(&ctx.http, edit_response(reply))
                .await
            {
                warn!(error = %e, "Failed to refresh campaigns");
            }
        }
    }
}

/// Flatten Discord's option list into named values.
fn command_args(options: &[CommandDataOption]) -> CommandArgs {
    let mut args = CommandArgs::new();

    for option in options {
        match &option.value {
            CommandDataOptionValue::String(value) => {
                args.insert(option.name.clone(), ArgValue::Str(value.clone()))
            }
            CommandDataOptionValue::Integer(value) => {
                args.insert(option.name.clone(), ArgValue::Int(*value))
            }
            _ => {}
        }
    }

    args
}

fn build_embed(embed: &Embed) -> CreateEmbed {
    let mut builder = CreateEmbed::new().title(&embed.title).color(embed.color);
    if let Some(ref description) = embed.description {
        builder = builder.description(description);
    }
    for field in &embed.fields {
        builder = builder.field(&field.name, &field.value, field.inline);
    }
    if let Some(ref footer) = embed.footer {
        let mut f = CreateEmbedFooter::new(&footer.text);
        if let Some(ref icon) = footer.icon_url {
            f = f.icon_url(icon);
        }
        builder = builder.footer(f);
    }
    builder
}

fn build_action_rows(buttons: &[Button]) -> Vec<CreateActionRow> {
    if buttons.is_empty() {
        return Vec::new();
    }

    let buttons = buttons
        .iter()
        .map(|button| {
            CreateButton::new(&button.custom_id)
                .label(&button.label)
                .style(ButtonStyle::Primary)
        })
        .collect();

    vec![CreateActionRow::Buttons(buttons)]
}

/// Replace the deferred (or refreshed) response with a reply.
fn edit_response(reply: &Reply) -> EditInteractionResponse {
    EditInteractionResponse::new()
        .content(reply.content.clone().unwrap_or_default())
        .embeds(reply.embeds.iter().map(build_embed).collect())
        .components(build_action_rows(&reply.buttons))
}

fn followup(reply: &Reply) -> CreateInteractionResponseFollowup {
    let mut builder = CreateInteractionResponseFollowup::new()
        .embeds(reply.embeds.iter().map(build_embed).collect())
        .components(build_action_rows(&reply.buttons))
        .ephemeral(reply.ephemeral);
    if let Some(ref content) = reply.content {
        builder = builder.content(content);
    }
    builder
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::colors;

    #[test]
    fn test_build_embed_carries_fields() {
        let embed = Embed::new("Party Funds", colors::TREASURE)
            .field("Gold", "12", true)
            .footer("Party Loot Bot", Some("https://example.com/icon.png"));

        let json = serde_json::to_value(build_embed(&embed)).unwrap();

        assert_eq!(json["title"], "Party Funds");
        assert_eq!(json["color"], colors::TREASURE);
        assert_eq!(json["fields"][0]["name"], "Gold");
        assert_eq!(json["fields"][0]["inline"], true);
        assert_eq!(json["footer"]["text"], "Party Loot Bot");
    }

    #[test]
    fn test_action_rows_only_when_buttons() {
        assert!(build_action_rows(&[]).is_empty());

        let rows = build_action_rows(&[Button {
            custom_id: REFRESH_CAMPAIGNS.to_string(),
            label: "Refresh".to_string(),
        }]);
        let json = serde_json::to_value(&rows).unwrap();
        assert_eq!(json[0]["components"][0]["custom_id"], REFRESH_CAMPAIGNS);
        assert_eq!(json[0]["components"][0]["label"], "Refresh");
    }
}
