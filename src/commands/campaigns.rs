//! `/campaigns` and `/setcampaign`.

use crate::models::{ApiId, SetDefaultCampaignRequest};
use crate::render::{self, Reply, REFRESH_CAMPAIGNS};
use crate::session::OperatorId;
use crate::AppState;

use super::{failure_text, require_session, CommandArgs};

/// List campaigns with a refresh button. Also run when that button is clicked.
pub async fn campaigns(state: &AppState, operator: OperatorId) -> Vec<Reply> {
    let credential = match require_session(state, operator).await {
        Ok(credential) => credential,
        Err(replies) => return replies,
    };

    match state.api.campaigns(&credential.token).await {
        Ok(campaigns) if campaigns.is_empty() => {
            vec![Reply::text("No campaigns found for your account.")]
        }
        Ok(campaigns) => vec![
            Reply::embed(render::campaigns_embed(&campaigns)).button(REFRESH_CAMPAIGNS, "Refresh"),
        ],
        Err(e) => {
            tracing::error!(operator, "Campaigns error: {}", e);
            vec![Reply::text(failure_text("fetching campaigns", &e))]
        }
    }
}

/// Make a campaign the default and remember it for later commands.
pub async fn set_campaign(state: &AppState, operator: OperatorId, args: &CommandArgs) -> Vec<Reply> {
    let credential = match require_session(state, operator).await {
        Ok(credential) => credential,
        Err(replies) => return replies,
    };

    let campaign_id = match args.required_str("campaign_id") {
        Ok(id) => id,
        Err(e) => return vec![Reply::text(e.message())],
    };

    let request = SetDefaultCampaignRequest {
        campaign_id: ApiId::from(campaign_id),
    };

    match state
        .api
        .set_default_campaign(&credential.token, &request)
        .await
    {
        Ok(result) if result.success => {
            state
                .sessions
                .set_campaign(operator, request.campaign_id)
                .await;
            vec![Reply::embed(render::campaign_changed_embed(campaign_id))]
        }
        Ok(_) => vec![Reply::text("Failed to set campaign. Please try again.")],
        Err(e) => {
            tracing::error!(operator, campaign_id, "Set campaign error: {}", e);
            vec![Reply::text(failure_text("setting campaign", &e))]
        }
    }
}
