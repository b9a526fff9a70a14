//! `/history` - recent fund history entries.

use crate::render::{self, Reply, MAX_EMBED_FIELDS};
use crate::session::OperatorId;
use crate::AppState;

use super::{failure_text, require_session, CommandArgs};

/// Entries shown when no limit is given.
pub const DEFAULT_HISTORY_LIMIT: i64 = 5;

pub async fn history(state: &AppState, operator: OperatorId, args: &CommandArgs) -> Vec<Reply> {
    let credential = match require_session(state, operator).await {
        Ok(credential) => credential,
        Err(replies) => return replies,
    };

    let limit = usize::try_from(args.positive_int_or("limit", DEFAULT_HISTORY_LIMIT))
        .unwrap_or(MAX_EMBED_FIELDS)
        .min(MAX_EMBED_FIELDS);

    match state.api.fund_history(&credential.token).await {
        Ok(entries) if entries.is_empty() => {
            vec![Reply::text("No fund history found for your campaign.")]
        }
        Ok(entries) => {
            let recent = &entries[..limit.min(entries.len())];
            vec![Reply::embed(render::history_embed(recent))]
        }
        Err(e) => {
            tracing::error!(operator, "History error: {}", e);
            vec![Reply::text(failure_text("fetching history", &e))]
        }
    }
}
