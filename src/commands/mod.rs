//! Slash command handlers.
//!
//! Every handler takes the shared state, the invoking operator and the parsed
//! options, and returns the replies to send: the first one answers the
//! interaction, any others go out as follow-up messages.

mod args;
mod campaigns;
mod definitions;
mod funds;
mod history;
mod items;
mod login;

pub use args::*;
pub use campaigns::*;
pub use definitions::*;
pub use funds::*;
pub use history::*;
pub use items::*;
pub use login::*;

use crate::errors::AppError;
use crate::render::Reply;
use crate::session::{Credential, OperatorId};
use crate::AppState;

/// The closed set of commands the bot registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Login,
    Funds,
    AddFunds,
    RemoveFunds,
    Items,
    AddItem,
    Campaigns,
    SetCampaign,
    History,
    /// Anything else; handled as a no-op
    Unknown,
}

impl Command {
    pub const ALL: [Command; 9] = [
        Command::Login,
        Command::Funds,
        Command::AddFunds,
        Command::RemoveFunds,
        Command::Items,
        Command::AddItem,
        Command::Campaigns,
        Command::SetCampaign,
        Command::History,
    ];

    pub fn from_name(name: &str) -> Self {
        match name {
            "login" => Command::Login,
            "funds" => Command::Funds,
            "addfunds" => Command::AddFunds,
            "removefunds" => Command::RemoveFunds,
            "items" => Command::Items,
            "additem" => Command::AddItem,
            "campaigns" => Command::Campaigns,
            "setcampaign" => Command::SetCampaign,
            "history" => Command::History,
            _ => Command::Unknown,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Login => "login",
            Command::Funds => "funds",
            Command::AddFunds => "addfunds",
            Command::RemoveFunds => "removefunds",
            Command::Items => "items",
            Command::AddItem => "additem",
            Command::Campaigns => "campaigns",
            Command::SetCampaign => "setcampaign",
            Command::History => "history",
            Command::Unknown => "unknown",
        }
    }

    /// Whether the deferred response should only be shown to the operator.
    pub fn is_ephemeral(&self) -> bool {
        matches!(self, Command::Login)
    }
}

/// Route a command to its handler. `Command::Unknown` produces no replies.
pub async fn dispatch(
    state: &AppState,
    command: Command,
    operator: OperatorId,
    args: &CommandArgs,
) -> Vec<Reply> {
    match command {
        Command::Login => login(state, operator, args).await,
        Command::Funds => funds(state, operator).await,
        Command::AddFunds => change_funds(state, operator, args, FundChange::Add).await,
        Command::RemoveFunds => change_funds(state, operator, args, FundChange::Remove).await,
        Command::Items => items(state, operator).await,
        Command::AddItem => add_item(state, operator, args).await,
        Command::Campaigns => campaigns(state, operator).await,
        Command::SetCampaign => set_campaign(state, operator, args).await,
        Command::History => history(state, operator, args).await,
        Command::Unknown => Vec::new(),
    }
}

/// Look up the operator's credential, or the reply to send when there is none.
async fn require_session(state: &AppState, operator: OperatorId) -> Result<Credential, Vec<Reply>> {
    state
        .sessions
        .get(operator)
        .await
        .ok_or_else(|| vec![Reply::text(AppError::NotAuthenticated.message())])
}

/// "Error fetching funds: <server message>" with an "Unknown error" fallback.
fn failure_text(action: &str, err: &AppError) -> String {
    format!(
        "Error {}: {}",
        action,
        err.server_message().unwrap_or("Unknown error")
    )
}
