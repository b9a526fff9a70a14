//! Login request and response bodies.

use serde::{Deserialize, Serialize};

use super::ApiId;

/// Request body for POST /api/login.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response body of POST /api/login.
///
/// A missing `token` means the login was refused.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub id: Option<ApiId>,
    #[serde(default)]
    pub user_group_id: Option<ApiId>,
    #[serde(default)]
    pub default_campaign_id: Option<ApiId>,
}
