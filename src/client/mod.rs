//! HTTP client for the Party Loot API.
//!
//! One method per endpoint, one request per call. Failures are returned to the
//! caller as-is; nothing is retried.

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::models::{
    Campaign, FundHistoryEntry, Funds, Item, LoginRequest, LoginResponse, NewFundHistoryEntry,
    NewItem, SetDefaultCampaignRequest, WriteResult,
};

/// Error envelope the API returns alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<Value>,
}

/// Client bound to one API base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST /api/login - Exchange username and password for a token.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AppError> {
        self.send(self.http.post(self.url("/api/login")).json(request))
            .await
    }

    /// GET /api/funds - Current party totals.
    pub async fn funds(&self, token: &str) -> Result<Vec<Funds>, AppError> {
        self.send(self.http.get(self.url("/api/funds")).bearer_auth(token))
            .await
    }

    /// POST /api/fund-history - Record a deposit or withdrawal.
    pub async fn record_fund_change(
        &self,
        token: &str,
        entry: &NewFundHistoryEntry,
    ) -> Result<WriteResult, AppError> {
        self.send(
            self.http
                .post(self.url("/api/fund-history"))
                .bearer_auth(token)
                .json(entry),
        )
        .await
    }

    /// GET /api/fund-history - Ledger entries, newest first as sent by the API.
    pub async fn fund_history(&self, token: &str) -> Result<Vec<FundHistoryEntry>, AppError> {
        self.send(self.http.get(self.url("/api/fund-history")).bearer_auth(token))
            .await
    }

    /// GET /api/items - Party inventory.
    pub async fn items(&self, token: &str) -> Result<Vec<Item>, AppError> {
        self.send(self.http.get(self.url("/api/items")).bearer_auth(token))
            .await
    }

    /// POST /api/items - Add an item to the inventory.
    pub async fn add_item(&self, token: &str, item: &NewItem) -> Result<WriteResult, AppError> {
        self.send(
            self.http
                .post(self.url("/api/items"))
                .bearer_auth(token)
                .json(item),
        )
        .await
    }

    /// GET /api/campaigns - Campaigns visible to the user.
    pub async fn campaigns(&self, token: &str) -> Result<Vec<Campaign>, AppError> {
        self.send(self.http.get(self.url("/api/campaigns")).bearer_auth(token))
            .await
    }

    /// POST /api/campaigns/set-default - Make a campaign the active one.
    pub async fn set_default_campaign(
        &self,
        token: &str,
        request: &SetDefaultCampaignRequest,
    ) -> Result<WriteResult, AppError> {
        self.send(
            self.http
                .post(self.url("/api/campaigns/set-default"))
                .bearer_auth(token)
                .json(request),
        )
        .await
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, AppError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(AppError::Api {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        Ok(serde_json::from_slice(&body)?)
    }
}

/// Pull the `error` string out of an error body, if there is one.
fn error_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .and_then(|e| e.as_str().map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_from_body() {
        assert_eq!(
            error_message(br#"{"error":"Insufficient funds"}"#),
            Some("Insufficient funds".to_string())
        );
    }

    #[test]
    fn test_error_message_ignores_other_shapes() {
        assert_eq!(error_message(b"<html>Bad Gateway</html>"), None);
        assert_eq!(error_message(br#"{"error":{"code":1}}"#), None);
        assert_eq!(error_message(br#"{"message":"nope"}"#), None);
        assert_eq!(error_message(b""), None);
    }
}
