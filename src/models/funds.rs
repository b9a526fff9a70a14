//! Currency, fund totals and the fund history ledger.

use serde::{Deserialize, Serialize};

use super::ApiId;

/// An amount in the four-tier party currency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CurrencyAmount {
    pub platinum: u64,
    pub gold: u64,
    pub silver: u64,
    pub copper: u64,
}

impl CurrencyAmount {
    pub fn is_zero(&self) -> bool {
        self.platinum == 0 && self.gold == 0 && self.silver == 0 && self.copper == 0
    }
}

/// Current party totals, one row of GET /api/funds.
#[derive(Debug, Clone, Deserialize)]
pub struct Funds {
    #[serde(default)]
    pub platinum: i64,
    #[serde(default)]
    pub gold: i64,
    #[serde(default)]
    pub silver: i64,
    #[serde(default)]
    pub copper: i64,
}

/// One ledger record from GET /api/fund-history.
#[derive(Debug, Clone, Deserialize)]
pub struct FundHistoryEntry {
    #[serde(default)]
    pub platinum: i64,
    #[serde(default)]
    pub gold: i64,
    #[serde(default)]
    pub silver: i64,
    #[serde(default)]
    pub copper: i64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub subtract: bool,
    #[serde(default)]
    pub transaction_date: String,
}

/// Request body for POST /api/fund-history.
#[derive(Debug, Clone, Serialize)]
pub struct NewFundHistoryEntry {
    pub user_id: Option<ApiId>,
    #[serde(flatten)]
    pub amount: CurrencyAmount,
    pub description: String,
    pub subtract: bool,
    pub user_group_id: Option<ApiId>,
    pub campaign_id: Option<ApiId>,
}
