//! Response rendering.
//!
//! Turns API payloads into platform-neutral replies. The Discord adapter
//! converts these into serenity builders; keeping them plain data lets the
//! command handlers be tested without a gateway connection.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

use crate::models::{Campaign, CurrencyAmount, FundHistoryEntry, Funds, Item};

/// Discord rejects embeds with more fields than this.
pub const MAX_EMBED_FIELDS: usize = 25;
/// Owner groups rendered by `/items`.
pub const MAX_OWNER_GROUPS: usize = 10;
/// Items rendered per owner group.
pub const MAX_ITEMS_PER_OWNER: usize = 10;

/// Custom id of the campaigns refresh button.
pub const REFRESH_CAMPAIGNS: &str = "refresh_campaigns";

const FOOTER_TEXT: &str = "Party Loot Bot";
const FOOTER_ICON: &str = "https://i.imgur.com/wSTFkRM.png";

/// Embed colours.
pub mod colors {
    pub const TREASURE: u32 = 0xBD9A00;
    pub const SUCCESS: u32 = 0x00BB00;
    pub const DANGER: u32 = 0xBB0000;
    pub const INFO: u32 = 0x0099FF;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl EmbedField {
    pub fn new(name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footer {
    pub text: String,
    pub icon_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Embed {
    pub title: String,
    pub description: Option<String>,
    pub color: u32,
    pub fields: Vec<EmbedField>,
    pub footer: Option<Footer>,
}

impl Embed {
    pub fn new(title: impl Into<String>, color: u32) -> Self {
        Self {
            title: title.into(),
            description: None,
            color,
            fields: Vec::new(),
            footer: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.fields.push(EmbedField::new(name, value, inline));
        self
    }

    pub fn fields(mut self, fields: impl IntoIterator<Item = EmbedField>) -> Self {
        self.fields.extend(fields);
        self
    }

    pub fn footer(mut self, text: impl Into<String>, icon_url: Option<&str>) -> Self {
        self.footer = Some(Footer {
            text: text.into(),
            icon_url: icon_url.map(str::to_string),
        });
        self
    }
}

/// A clickable button attached below a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub custom_id: String,
    pub label: String,
}

/// One message sent back to the operator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    pub content: Option<String>,
    pub embeds: Vec<Embed>,
    pub buttons: Vec<Button>,
    pub ephemeral: bool,
}

impl Reply {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Default::default()
        }
    }

    pub fn embed(embed: Embed) -> Self {
        Self {
            embeds: vec![embed],
            ..Default::default()
        }
    }

    pub fn button(mut self, custom_id: impl Into<String>, label: impl Into<String>) -> Self {
        self.buttons.push(Button {
            custom_id: custom_id.into(),
            label: label.into(),
        });
        self
    }

    /// Only visible to the operator who ran the command.
    pub fn ephemeral(mut self) -> Self {
        self.ephemeral = true;
        self
    }
}

fn currency_fields(platinum: String, gold: String, silver: String, copper: String) -> Vec<EmbedField> {
    vec![
        EmbedField::new("Platinum", platinum, true),
        EmbedField::new("Gold", gold, true),
        EmbedField::new("Silver", silver, true),
        EmbedField::new("Copper", copper, true),
    ]
}

pub fn funds_embed(funds: &Funds) -> Embed {
    Embed::new("Party Funds", colors::TREASURE)
        .fields(currency_fields(
            funds.platinum.to_string(),
            funds.gold.to_string(),
            funds.silver.to_string(),
            funds.copper.to_string(),
        ))
        .footer(FOOTER_TEXT, Some(FOOTER_ICON))
}

/// Confirmation for `/addfunds` and `/removefunds`.
pub fn funds_change_embed(amount: &CurrencyAmount, description: &str, subtract: bool) -> Embed {
    let embed = if subtract {
        Embed::new("Funds Removed", colors::DANGER)
            .description(format!("Successfully removed funds: {}", description))
    } else {
        Embed::new("Funds Added", colors::SUCCESS)
            .description(format!("Successfully added funds: {}", description))
    };

    embed.fields(currency_fields(
        amount.platinum.to_string(),
        amount.gold.to_string(),
        amount.silver.to_string(),
        amount.copper.to_string(),
    ))
}

/// Group items by owner, keeping the order in which owners first appear.
pub fn group_by_owner(items: &[Item]) -> Vec<(&str, Vec<&Item>)> {
    let mut groups: Vec<(&str, Vec<&Item>)> = Vec::new();

    for item in items {
        match groups.iter().position(|(owner, _)| *owner == item.owner) {
            Some(index) => groups[index].1.push(item),
            None => groups.push((item.owner.as_str(), vec![item])),
        }
    }

    groups
}

/// "12 gp", "3 sp" or "No Value".
pub fn item_value_text(item: &Item) -> String {
    let value = match &item.value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => return "No Value".to_string(),
        Some(Value::String(s)) if s.is_empty() => return "No Value".to_string(),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => return "No Value".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    };

    let unit = item
        .value_type
        .as_deref()
        .filter(|t| !t.is_empty())
        .unwrap_or("gp");
    format!("{} {}", value, unit)
}

/// One embed per owner, at most `MAX_OWNER_GROUPS` of them.
pub fn item_embeds(items: &[Item]) -> Vec<Embed> {
    group_by_owner(items)
        .into_iter()
        .take(MAX_OWNER_GROUPS)
        .map(|(owner, owned)| {
            let fields = owned.into_iter().take(MAX_ITEMS_PER_OWNER).map(|item| {
                EmbedField::new(
                    format!("{} x{}", item.name, item.quantity),
                    format!("Source: {}\nValue: {}", item.source, item_value_text(item)),
                    true,
                )
            });

            Embed::new(format!("Items owned by {}", owner), colors::INFO).fields(fields)
        })
        .collect()
}

pub fn item_added_embed(name: &str, owner: &str, source: &str, quantity: i64) -> Embed {
    Embed::new("Item Added", colors::SUCCESS)
        .description(format!("Successfully added {}x {}", quantity, name))
        .field("Owner", owner, true)
        .field("Source", source, true)
}

pub fn campaigns_embed(campaigns: &[Campaign]) -> Embed {
    let fields = campaigns.iter().take(MAX_EMBED_FIELDS).map(|campaign| {
        let description = campaign
            .description
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or("No description");
        let active = if campaign.is_default { "**ACTIVE**" } else { "" };

        EmbedField::new(
            campaign.name.clone(),
            format!("ID: {}\nDescription: {}\n{}", campaign.id, description, active),
            false,
        )
    });

    Embed::new("Your Campaigns", colors::INFO).fields(fields)
}

pub fn campaign_changed_embed(campaign_id: &str) -> Embed {
    Embed::new("Campaign Changed", colors::SUCCESS)
        .description(format!("Successfully set campaign {} as active.", campaign_id))
}

/// Non-zero components with unit suffixes, e.g. "2P 15G".
pub fn format_amount(platinum: i64, gold: i64, silver: i64, copper: i64) -> String {
    [(platinum, 'P'), (gold, 'G'), (silver, 'S'), (copper, 'C')]
        .into_iter()
        .filter(|(value, _)| *value > 0)
        .map(|(value, unit)| format!("{}{}", value, unit))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render an ISO-8601 timestamp as M/D/YYYY. Unparseable input is returned unchanged.
pub fn format_date(raw: &str) -> String {
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.naive_utc().date())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));

    match date {
        Ok(date) => date.format("%-m/%-d/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

pub fn history_embed(entries: &[FundHistoryEntry]) -> Embed {
    let fields = entries.iter().take(MAX_EMBED_FIELDS).map(|entry| {
        let amount = format_amount(entry.platinum, entry.gold, entry.silver, entry.copper);
        let arrow = if entry.subtract { "🔻" } else { "🔺" };

        EmbedField::new(
            format!("{} {}", arrow, amount),
            format!(
                "{}\nDate: {}",
                entry.description,
                format_date(&entry.transaction_date)
            ),
            false,
        )
    });

    Embed::new("Recent Fund History", colors::INFO).fields(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ApiId;
    use serde_json::json;

    fn item(name: &str, owner: &str) -> Item {
        Item {
            name: name.to_string(),
            owner: owner.to_string(),
            source: "Dragon hoard".to_string(),
            quantity: 1,
            value: None,
            value_type: None,
        }
    }

    #[test]
    fn test_format_amount_skips_zero_components() {
        assert_eq!(format_amount(0, 3, 0, 5), "3G 5C");
        assert_eq!(format_amount(2, 15, 1, 0), "2P 15G 1S");
        assert_eq!(format_amount(0, 0, 0, 0), "");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-07T18:30:00.000Z"), "3/7/2024");
        assert_eq!(format_date("2024-11-23T08:00:00"), "11/23/2024");
        assert_eq!(format_date("2024-01-02 10:11:12"), "1/2/2024");
        assert_eq!(format_date("2024-12-25"), "12/25/2024");
        assert_eq!(format_date("yesterday"), "yesterday");
    }

    #[test]
    fn test_group_by_owner_keeps_encounter_order() {
        let items = vec![
            item("Rope", "Zed"),
            item("Torch", "Ann"),
            item("Potion", "Zed"),
            item("Map", "42"),
        ];

        let groups = group_by_owner(&items);
        let owners: Vec<&str> = groups.iter().map(|(owner, _)| *owner).collect();

        assert_eq!(owners, vec!["Zed", "Ann", "42"]);
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[0].1[1].name, "Potion");
    }

    #[test]
    fn test_item_value_text() {
        let mut sword = item("Sword", "Ann");
        assert_eq!(item_value_text(&sword), "No Value");

        sword.value = Some(json!(0));
        assert_eq!(item_value_text(&sword), "No Value");

        sword.value = Some(json!(15));
        assert_eq!(item_value_text(&sword), "15 gp");

        sword.value = Some(json!("12.50"));
        sword.value_type = Some("sp".to_string());
        assert_eq!(item_value_text(&sword), "12.50 sp");
    }

    #[test]
    fn test_item_embeds_cap_items_per_owner() {
        let items: Vec<Item> = (0..14).map(|i| item(&format!("Arrow {}", i), "Ann")).collect();

        let embeds = item_embeds(&items);
        assert_eq!(embeds.len(), 1);
        assert_eq!(embeds[0].title, "Items owned by Ann");
        assert_eq!(embeds[0].fields.len(), MAX_ITEMS_PER_OWNER);
        assert_eq!(embeds[0].fields[0].name, "Arrow 0 x1");
        assert_eq!(
            embeds[0].fields[0].value,
            "Source: Dragon hoard\nValue: No Value"
        );
    }

    #[test]
    fn test_campaigns_embed_marks_active() {
        let campaigns = vec![
            Campaign {
                id: ApiId::Int(1),
                name: "Curse of Strahd".to_string(),
                description: None,
                is_default: true,
            },
            Campaign {
                id: ApiId::Int(2),
                name: "Tomb of Annihilation".to_string(),
                description: Some("Jungle crawl".to_string()),
                is_default: false,
            },
        ];

        let embed = campaigns_embed(&campaigns);
        assert_eq!(
            embed.fields[0].value,
            "ID: 1\nDescription: No description\n**ACTIVE**"
        );
        assert_eq!(embed.fields[1].value, "ID: 2\nDescription: Jungle crawl\n");
        assert!(!embed.fields[0].inline);
    }

    #[test]
    fn test_history_embed_direction() {
        let entries = vec![
            FundHistoryEntry {
                platinum: 0,
                gold: 3,
                silver: 0,
                copper: 5,
                description: "Tavern tab".to_string(),
                subtract: true,
                transaction_date: "2024-03-07T18:30:00Z".to_string(),
            },
            FundHistoryEntry {
                platinum: 1,
                gold: 0,
                silver: 0,
                copper: 0,
                description: "Quest reward".to_string(),
                subtract: false,
                transaction_date: "2024-03-01T09:00:00Z".to_string(),
            },
        ];

        let embed = history_embed(&entries);
        assert_eq!(embed.fields[0].name, "🔻 3G 5C");
        assert_eq!(embed.fields[0].value, "Tavern tab\nDate: 3/7/2024");
        assert_eq!(embed.fields[1].name, "🔺 1P");
    }

    #[test]
    fn test_funds_change_embed() {
        let amount = CurrencyAmount {
            gold: 10,
            ..Default::default()
        };

        let added = funds_change_embed(&amount, "Loot", false);
        assert_eq!(added.title, "Funds Added");
        assert_eq!(added.color, colors::SUCCESS);
        assert_eq!(added.fields[1], EmbedField::new("Gold", "10", true));

        let removed = funds_change_embed(&amount, "Rent", true);
        assert_eq!(removed.title, "Funds Removed");
        assert_eq!(
            removed.description.as_deref(),
            Some("Successfully removed funds: Rent")
        );
    }
}
