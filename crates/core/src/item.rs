//! The catalog item and its draft/patch shapes.

use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CatalogError, CatalogResult};

/// Opaque identifier of a catalog item.
///
/// Assigned by the active storage backend on creation and immutable
/// thereafter. Remote backends hand out their own id format, so this is a
/// string newtype rather than a UUID wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Generate a fresh identifier (UUIDv7, time-ordered).
    ///
    /// Used by backends that assign ids locally; remote backends return
    /// their own.
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl FromStr for ItemId {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

/// Competitive rank attached to a listing. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
    Crown,
    Ace,
    Conqueror,
}

impl Rank {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::Bronze => "Bronze",
            Rank::Silver => "Silver",
            Rank::Gold => "Gold",
            Rank::Platinum => "Platinum",
            Rank::Diamond => "Diamond",
            Rank::Crown => "Crown",
            Rank::Ace => "Ace",
            Rank::Conqueror => "Conqueror",
        }
    }
}

impl core::fmt::Display for Rank {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single catalog entry (game-account listing).
///
/// `id` and `created_at` are assigned at creation and never mutated; every
/// other field changes only through an [`ItemPatch`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    /// Non-negative, currency-agnostic.
    pub price: f64,
    /// URL or embedded data; may be the repository's placeholder default.
    pub image: String,
    pub level: u32,
    /// Cosmetic labels; insertion order preserved for display only.
    pub skins: Vec<String>,
    pub rank: Rank,
    pub kd: f64,
    pub matches: u32,
    /// True until the listing is sold or deleted.
    pub available: bool,
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied shape for creating an item: everything except the
/// backend-assigned `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub title: String,
    pub description: String,
    pub price: f64,
    /// `None` means "use the placeholder image".
    pub image: Option<String>,
    pub level: u32,
    pub skins: Vec<String>,
    pub rank: Rank,
    pub kd: f64,
    pub matches: u32,
    pub available: bool,
}

impl ItemDraft {
    /// Reject malformed drafts before any backend call is made.
    pub fn validate(&self) -> CatalogResult<()> {
        if self.title.trim().is_empty() {
            return Err(CatalogError::validation("title cannot be empty"));
        }
        validate_non_negative("price", self.price)?;
        validate_non_negative("kd", self.kd)?;
        Ok(())
    }
}

/// Partial update of an item: `None` fields are left unchanged.
///
/// `id` and `created_at` are absent by construction, so a patch can never
/// touch them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skins: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<Rank>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kd: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
}

impl ItemPatch {
    /// The "mark sold" patch: flips `available` off, touches nothing else.
    pub fn sold() -> Self {
        Self {
            available: Some(false),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn validate(&self) -> CatalogResult<()> {
        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err(CatalogError::validation("title cannot be empty"));
            }
        }
        if let Some(price) = self.price {
            validate_non_negative("price", price)?;
        }
        if let Some(kd) = self.kd {
            validate_non_negative("kd", kd)?;
        }
        Ok(())
    }

    /// Apply the patch to an in-memory item (backend write already
    /// confirmed by the caller).
    pub fn apply(&self, item: &mut Item) {
        if let Some(title) = &self.title {
            item.title = title.clone();
        }
        if let Some(description) = &self.description {
            item.description = description.clone();
        }
        if let Some(price) = self.price {
            item.price = price;
        }
        if let Some(image) = &self.image {
            item.image = image.clone();
        }
        if let Some(level) = self.level {
            item.level = level;
        }
        if let Some(skins) = &self.skins {
            item.skins = skins.clone();
        }
        if let Some(rank) = self.rank {
            item.rank = rank;
        }
        if let Some(kd) = self.kd {
            item.kd = kd;
        }
        if let Some(matches) = self.matches {
            item.matches = matches;
        }
        if let Some(available) = self.available {
            item.available = available;
        }
    }
}

fn validate_non_negative(field: &str, value: f64) -> CatalogResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(CatalogError::validation(format!(
            "{field} must be a non-negative number"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn draft() -> ItemDraft {
        ItemDraft {
            title: "Conqueror account".to_string(),
            description: "Season 12 veteran".to_string(),
            price: 1500.0,
            image: None,
            level: 72,
            skins: vec!["Glacier M416".to_string()],
            rank: Rank::Conqueror,
            kd: 3.4,
            matches: 2100,
            available: true,
        }
    }

    fn item() -> Item {
        Item {
            id: ItemId::new("it-1"),
            title: "Ace account".to_string(),
            description: String::new(),
            price: 800.0,
            image: "img".to_string(),
            level: 60,
            skins: vec![],
            rank: Rank::Ace,
            kd: 2.1,
            matches: 900,
            available: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn empty_title_rejected() {
        let mut d = draft();
        d.title = "   ".to_string();
        assert!(matches!(d.validate(), Err(CatalogError::Validation(_))));
    }

    #[test]
    fn negative_price_rejected() {
        let mut d = draft();
        d.price = -1.0;
        assert!(matches!(d.validate(), Err(CatalogError::Validation(_))));
    }

    #[test]
    fn non_finite_kd_rejected() {
        let mut d = draft();
        d.kd = f64::NAN;
        assert!(matches!(d.validate(), Err(CatalogError::Validation(_))));
    }

    #[test]
    fn patch_applies_only_set_fields() {
        let mut it = item();
        let before = it.clone();
        let patch = ItemPatch {
            price: Some(650.0),
            available: Some(false),
            ..ItemPatch::default()
        };
        patch.apply(&mut it);

        assert_eq!(it.price, 650.0);
        assert!(!it.available);
        assert_eq!(it.title, before.title);
        assert_eq!(it.created_at, before.created_at);
        assert_eq!(it.id, before.id);
    }

    #[test]
    fn sold_patch_only_touches_availability() {
        let patch = ItemPatch::sold();
        assert_eq!(patch.available, Some(false));
        let mut cleared = patch.clone();
        cleared.available = None;
        assert!(cleared.is_empty());
    }

    #[test]
    fn patch_validation_rejects_negative_price() {
        let patch = ItemPatch {
            price: Some(-5.0),
            ..ItemPatch::default()
        };
        assert!(matches!(patch.validate(), Err(CatalogError::Validation(_))));
    }

    #[test]
    fn patch_serializes_only_set_fields() {
        let patch = ItemPatch {
            available: Some(false),
            ..ItemPatch::default()
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({ "available": false }));
    }

    #[test]
    fn rank_round_trips_as_plain_name() {
        let json = serde_json::to_string(&Rank::Conqueror).unwrap();
        assert_eq!(json, "\"Conqueror\"");
        let back: Rank = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Rank::Conqueror);
    }

    #[test]
    fn item_created_at_uses_camel_case_on_the_wire() {
        let json = serde_json::to_value(item()).unwrap();
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn generated_ids_are_unique() {
        let a = ItemId::generate();
        let b = ItemId::generate();
        assert_ne!(a, b);
    }
}
