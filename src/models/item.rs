//! Inventory item model.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::ApiId;

/// An item held by a party member.
#[derive(Debug, Clone, Deserialize)]
pub struct Item {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub owner: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub source: String,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
    /// The API sends numbers or numeric strings here
    #[serde(default)]
    pub value: Option<Value>,
    #[serde(default)]
    pub value_type: Option<String>,
}

fn default_quantity() -> i64 {
    1
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Request body for POST /api/items.
#[derive(Debug, Clone, Serialize)]
pub struct NewItem {
    pub user_id: Option<ApiId>,
    pub name: String,
    pub owner: String,
    pub quantity: i64,
    pub source: String,
    pub user_group_id: Option<ApiId>,
    pub campaign_id: Option<ApiId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_tolerates_missing_owner_and_name() {
        let items: Vec<Item> = serde_json::from_str(
            r#"[
                {"name": "Rope", "owner": null, "quantity": 2},
                {"owner": "Aria"}
            ]"#,
        )
        .unwrap();

        assert_eq!(items[0].owner, "");
        assert_eq!(items[0].name, "Rope");
        assert_eq!(items[1].name, "");
        assert_eq!(items[1].quantity, 1);
    }
}
