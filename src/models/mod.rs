//! Data models for the Party Loot API.
//!
//! These models mirror the JSON bodies the API sends and accepts; field names
//! follow the API's snake_case wire format.

mod campaign;
mod funds;
mod id;
mod item;
mod login;

pub use campaign::*;
pub use funds::*;
pub use id::*;
pub use item::*;
pub use login::*;

use serde::Deserialize;

/// Body returned by the API's write endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WriteResult {
    #[serde(default)]
    pub success: bool,
}
