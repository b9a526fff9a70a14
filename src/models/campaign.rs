//! Campaign model.

use serde::{Deserialize, Serialize};

use super::ApiId;

/// A named game context that scopes funds, items and history.
#[derive(Debug, Clone, Deserialize)]
pub struct Campaign {
    pub id: ApiId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_default: bool,
}

/// Request body for POST /api/campaigns/set-default.
#[derive(Debug, Clone, Serialize)]
pub struct SetDefaultCampaignRequest {
    pub campaign_id: ApiId,
}
