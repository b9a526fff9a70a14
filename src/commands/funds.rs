//! `/funds`, `/addfunds` and `/removefunds`.

use crate::models::NewFundHistoryEntry;
use crate::render::{self, Reply};
use crate::session::OperatorId;
use crate::AppState;

use super::{failure_text, require_session, CommandArgs};

/// Substring the API uses when a withdrawal exceeds the party balance.
const INSUFFICIENT_FUNDS: &str = "Insufficient funds";

/// Direction of a funds change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FundChange {
    Add,
    Remove,
}

impl FundChange {
    fn subtract(self) -> bool {
        self == FundChange::Remove
    }

    fn action(self) -> &'static str {
        match self {
            FundChange::Add => "adding funds",
            FundChange::Remove => "removing funds",
        }
    }

    fn retry_text(self) -> &'static str {
        match self {
            FundChange::Add => "Failed to add funds. Please try again.",
            FundChange::Remove => "Failed to remove funds. Please try again.",
        }
    }
}

/// Show the party's current totals.
pub async fn funds(state: &AppState, operator: OperatorId) -> Vec<Reply> {
    let credential = match require_session(state, operator).await {
        Ok(credential) => credential,
        Err(replies) => return replies,
    };

    match state.api.funds(&credential.token).await {
        Ok(rows) => match rows.first() {
            Some(totals) => vec![Reply::embed(render::funds_embed(totals))],
            None => vec![Reply::text("No funds found for your campaign.")],
        },
        Err(e) => {
            tracing::error!(operator, "Funds error: {}", e);
            vec![Reply::text(failure_text("fetching funds", &e))]
        }
    }
}

/// Record a deposit or withdrawal in the active campaign.
pub async fn change_funds(
    state: &AppState,
    operator: OperatorId,
    args: &CommandArgs,
    change: FundChange,
) -> Vec<Reply> {
    let credential = match require_session(state, operator).await {
        Ok(credential) => credential,
        Err(replies) => return replies,
    };

    let amount = match args.currency_amount() {
        Ok(amount) => amount,
        Err(e) => return vec![Reply::text(e.message())],
    };
    let description = match args.required_str("description") {
        Ok(description) => description,
        Err(e) => return vec![Reply::text(e.message())],
    };

    let entry = NewFundHistoryEntry {
        user_id: credential.user_id,
        amount,
        description: description.to_string(),
        subtract: change.subtract(),
        user_group_id: credential.user_group_id,
        campaign_id: credential.campaign_id,
    };

    match state.api.record_fund_change(&credential.token, &entry).await {
        Ok(result) if result.success => vec![Reply::embed(render::funds_change_embed(
            &amount,
            description,
            change.subtract(),
        ))],
        Ok(_) => vec![Reply::text(change.retry_text())],
        Err(e) => {
            tracing::error!(operator, ?change, "Fund change error: {}", e);

            let insufficient = change == FundChange::Remove
                && e.server_message()
                    .is_some_and(|msg| msg.contains(INSUFFICIENT_FUNDS));
            if insufficient {
                vec![Reply::text("Insufficient funds for this transaction.")]
            } else {
                vec![Reply::text(failure_text(change.action(), &e))]
            }
        }
    }
}
