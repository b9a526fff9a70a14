//! Configuration module for the Party Loot bot.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;

use crate::errors::AppError;

/// Default location of the Party Loot API.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Discord bot token
    pub discord_token: String,
    /// Base URL of the Party Loot API, without trailing slash
    pub api_base_url: String,
    /// Address for the health endpoint (disabled when unset)
    pub health_bind_addr: Option<SocketAddr>,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let discord_token = env::var("DISCORD_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| AppError::Config("DISCORD_TOKEN is not set".to_string()))?;

        let api_base_url = normalize_base_url(
            &env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
        );

        let health_bind_addr = match env::var("HEALTH_BIND_ADDR") {
            Ok(addr) if !addr.trim().is_empty() => {
                let parsed = addr.trim().parse::<SocketAddr>().map_err(|_| {
                    AppError::Config(format!("Invalid HEALTH_BIND_ADDR format: {}", addr))
                })?;
                Some(parsed)
            }
            _ => None,
        };

        let log_level = env::var("PARTY_LOOT_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            discord_token,
            api_base_url,
            health_bind_addr,
            log_level,
        })
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        // Single test touching the environment so runs do not race each other
        env::set_var("DISCORD_TOKEN", "test-token");
        env::remove_var("API_BASE_URL");
        env::remove_var("HEALTH_BIND_ADDR");
        env::remove_var("PARTY_LOOT_LOG_LEVEL");

        let config = Config::from_env().unwrap();

        assert_eq!(config.discord_token, "test-token");
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert!(config.health_bind_addr.is_none());
        assert_eq!(config.log_level, "info");

        env::set_var("API_BASE_URL", "https://loot.example.com/");
        env::set_var("HEALTH_BIND_ADDR", "127.0.0.1:8081");

        let config = Config::from_env().unwrap();
        assert_eq!(config.api_base_url, "https://loot.example.com");
        assert_eq!(
            config.health_bind_addr.map(|a| a.to_string()),
            Some("127.0.0.1:8081".to_string())
        );

        env::set_var("HEALTH_BIND_ADDR", "not-an-address");
        assert!(matches!(Config::from_env(), Err(AppError::Config(_))));

        env::remove_var("HEALTH_BIND_ADDR");
        env::set_var("DISCORD_TOKEN", "  ");
        assert!(matches!(Config::from_env(), Err(AppError::Config(_))));

        env::remove_var("DISCORD_TOKEN");
        env::remove_var("API_BASE_URL");
    }

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(normalize_base_url("http://a:3000//"), "http://a:3000");
        assert_eq!(normalize_base_url(" http://a "), "http://a");
    }
}
