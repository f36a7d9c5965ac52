//! Pantry Item Entity
//!
//! A single physical unit in the pantry. Rows live in the remote table
//! whose columns are `id`, `nome` and `validade`; the serde renames keep
//! that wire shape while the Rust side uses English names.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use super::entity::{DomainError, DomainResult};

/// Server-assigned identifier
///
/// Hosted tables hand out either integer or UUID keys, so both JSON
/// numbers and strings are accepted and held as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => ItemId(s),
            RawId::Signed(n) => ItemId(n.to_string()),
            RawId::Unsigned(n) => ItemId(n.to_string()),
        })
    }
}

/// A stored pantry entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PantryItem {
    pub id: ItemId,
    #[serde(rename = "nome")]
    pub name: String,
    /// Serialized as ISO `YYYY-MM-DD`
    #[serde(rename = "validade")]
    pub expires_on: NaiveDate,
}

impl PantryItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, expires_on: NaiveDate) -> Self {
        Self {
            id: ItemId::new(id),
            name: name.into(),
            expires_on,
        }
    }
}

/// Insert payload; the server assigns the id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPantryItem {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "validade")]
    pub expires_on: NaiveDate,
}

/// What the add form submits: one name and date, repeated `quantity` times
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    pub expires_on: NaiveDate,
    pub quantity: u32,
}

impl ItemDraft {
    pub fn new(name: impl Into<String>, expires_on: NaiveDate, quantity: u32) -> Self {
        Self {
            name: name.into(),
            expires_on,
            quantity,
        }
    }

    /// Expand into the batch sent to the repository
    ///
    /// The name is trimmed; blank names and a zero quantity are rejected.
    pub fn to_batch(&self) -> DomainResult<Vec<NewPantryItem>> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidInput("item name is empty".to_string()));
        }
        if self.quantity == 0 {
            return Err(DomainError::InvalidInput("quantity must be at least 1".to_string()));
        }

        Ok((0..self.quantity)
            .map(|_| NewPantryItem {
                name: name.to_string(),
                expires_on: self.expires_on,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_item_wire_format() {
        let item = PantryItem::new("7", "Milk", date("2024-01-10"));
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": "7", "nome": "Milk", "validade": "2024-01-10" })
        );
    }

    #[test]
    fn test_item_id_accepts_numbers_and_strings() {
        let numeric: PantryItem =
            serde_json::from_str(r#"{"id": 42, "nome": "Eggs", "validade": "2024-01-08"}"#).unwrap();
        assert_eq!(numeric.id.as_str(), "42");

        let uuid: PantryItem = serde_json::from_str(
            r#"{"id": "0b9f4c1e-2a51-4f5e-9d0e-3c7f7b8a1d22", "nome": "Eggs", "validade": "2024-01-08"}"#,
        )
        .unwrap();
        assert_eq!(uuid.id.as_str(), "0b9f4c1e-2a51-4f5e-9d0e-3c7f7b8a1d22");
    }

    #[test]
    fn test_draft_expands_to_quantity() {
        let draft = ItemDraft::new("  Rice ", date("2025-03-01"), 3);
        let batch = draft.to_batch().unwrap();
        assert_eq!(batch.len(), 3);
        assert!(batch.iter().all(|i| i.name == "Rice" && i.expires_on == date("2025-03-01")));
    }

    #[test]
    fn test_draft_rejects_blank_name() {
        let draft = ItemDraft::new("   ", date("2025-03-01"), 1);
        assert!(matches!(draft.to_batch(), Err(DomainError::InvalidInput(_))));
    }

    #[test]
    fn test_draft_rejects_zero_quantity() {
        let draft = ItemDraft::new("Rice", date("2025-03-01"), 0);
        assert!(matches!(draft.to_batch(), Err(DomainError::InvalidInput(_))));
    }
}
