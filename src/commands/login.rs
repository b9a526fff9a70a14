//! `/login` - authenticate against the API and cache the session.

use crate::models::LoginRequest;
use crate::render::Reply;
use crate::session::{Credential, OperatorId};
use crate::AppState;

use super::CommandArgs;

pub async fn login(state: &AppState, operator: OperatorId, args: &CommandArgs) -> Vec<Reply> {
    let (username, password) = match (args.required_str("username"), args.required_str("password")) {
        (Ok(username), Ok(password)) => (username, password),
        (Err(e), _) | (_, Err(e)) => return vec![Reply::text(e.message()).ephemeral()],
    };

    let request = LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    };

    match state.api.login(&request).await {
        Ok(response) => match response.token.filter(|t| !t.is_empty()) {
            Some(token) => {
                state
                    .sessions
                    .put(
                        operator,
                        Credential {
                            token,
                            user_id: response.id,
                            user_group_id: response.user_group_id,
                            campaign_id: response.default_campaign_id,
                        },
                    )
                    .await;
                let sessions = state.sessions.count().await;
                tracing::info!(operator, sessions, "Operator logged in");

                vec![Reply::text("Successfully logged in to Party Loot!").ephemeral()]
            }
            None => {
                tracing::warn!(operator, "Login response did not contain a token");
                vec![Reply::text("Login failed. Please check your credentials.").ephemeral()]
            }
        },
        Err(e) => {
            tracing::error!(operator, "Login error: {}", e);
            let message = e.server_message().unwrap_or("Unknown error");
            vec![Reply::text(format!("Login failed: {}", message)).ephemeral()]
        }
    }
}
