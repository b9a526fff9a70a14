//! `/items` and `/additem`.

use crate::models::NewItem;
use crate::render::{self, Reply};
use crate::session::OperatorId;
use crate::AppState;

use super::{failure_text, require_session, CommandArgs};

const NO_ITEMS: &str = "No items found for your campaign.";

/// List the inventory, one message per owner.
pub async fn items(state: &AppState, operator: OperatorId) -> Vec<Reply> {
    let credential = match require_session(state, operator).await {
        Ok(credential) => credential,
        Err(replies) => return replies,
    };

    match state.api.items(&credential.token).await {
        Ok(items) => {
            let replies: Vec<Reply> = render::item_embeds(&items)
                .into_iter()
                .map(Reply::embed)
                .collect();

            if replies.is_empty() {
                vec![Reply::text(NO_ITEMS)]
            } else {
                replies
            }
        }
        Err(e) => {
            tracing::error!(operator, "Items error: {}", e);
            vec![Reply::text(failure_text("fetching items", &e))]
        }
    }
}

pub async fn add_item(state: &AppState, operator: OperatorId, args: &CommandArgs) -> Vec<Reply> {
    let credential = match require_session(state, operator).await {
        Ok(credential) => credential,
        Err(replies) => return replies,
    };

    let fields = (
        args.required_str("name"),
        args.required_str("owner"),
        args.required_str("source"),
    );
    let (name, owner, source) = match fields {
        (Ok(name), Ok(owner), Ok(source)) => (name, owner, source),
        (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => return vec![Reply::text(e.message())],
    };
    let quantity = args.positive_int_or("quantity", 1);

    let item = NewItem {
        user_id: credential.user_id,
        name: name.to_string(),
        owner: owner.to_string(),
        quantity,
        source: source.to_string(),
        user_group_id: credential.user_group_id,
        campaign_id: credential.campaign_id,
    };

    match state.api.add_item(&credential.token, &item).await {
        Ok(result) if result.success => vec![Reply::embed(render::item_added_embed(
            name, owner, source, quantity,
        ))],
        Ok(_) => vec![Reply::text("Failed to add item. Please try again.")],
        Err(e) => {
            tracing::error!(operator, "Add item error: {}", e);
            vec![Reply::text(failure_text("adding item", &e))]
        }
    }
}
