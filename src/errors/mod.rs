//! Error handling module for the Party Loot bot.
//!
//! Provides a centralized error type covering local validation, calls to the
//! Party Loot API and the Discord side of the bot.

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const NOT_AUTHENTICATED: &str = "NOT_AUTHENTICATED";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const API_ERROR: &str = "API_ERROR";
    pub const TRANSPORT_ERROR: &str = "TRANSPORT_ERROR";
    pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
    pub const DISCORD_ERROR: &str = "DISCORD_ERROR";
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// No credential cached for the invoking operator
    NotAuthenticated,
    /// Command arguments rejected before any request was made
    Validation(String),
    /// The API answered with a non-success status
    Api {
        status: u16,
        message: Option<String>,
    },
    /// The request never produced a usable response
    Transport(String),
    /// Invalid process configuration
    Config(String),
    /// Discord gateway or REST failure
    Discord(String),
}

impl AppError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::NotAuthenticated => codes::NOT_AUTHENTICATED,
            AppError::Validation(_) => codes::VALIDATION_ERROR,
            AppError::Api { .. } => codes::API_ERROR,
            AppError::Transport(_) => codes::TRANSPORT_ERROR,
            AppError::Config(_) => codes::CONFIG_ERROR,
            AppError::Discord(_) => codes::DISCORD_ERROR,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            AppError::NotAuthenticated => "You must be logged in. Use `/login` first.".to_string(),
            AppError::Validation(msg) => msg.clone(),
            AppError::Api { status, message } => match message {
                Some(msg) => format!("HTTP {}: {}", status, msg),
                None => format!("HTTP {}", status),
            },
            AppError::Transport(msg) => msg.clone(),
            AppError::Config(msg) => msg.clone(),
            AppError::Discord(msg) => msg.clone(),
        }
    }

    /// The `error` string the API put in its response body, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            AppError::Api { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for AppError {}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        tracing::debug!("HTTP transport error: {:?}", err);
        AppError::Transport(format!("HTTP error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        tracing::debug!("JSON error: {:?}", err);
        AppError::Transport(format!("JSON error: {}", err))
    }
}

impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::Discord(format!("Discord error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_only_for_api_errors() {
        let api = AppError::Api {
            status: 400,
            message: Some("Insufficient funds in party".to_string()),
        };
        assert_eq!(api.server_message(), Some("Insufficient funds in party"));

        let transport = AppError::Transport("connection refused".to_string());
        assert_eq!(transport.server_message(), None);
    }

    #[test]
    fn test_display_includes_code() {
        let err = AppError::Api {
            status: 500,
            message: None,
        };
        assert_eq!(err.to_string(), "API_ERROR: HTTP 500");
        assert_eq!(
            AppError::NotAuthenticated.to_string(),
            "NOT_AUTHENTICATED: You must be logged in. Use `/login` first."
        );
    }
}
