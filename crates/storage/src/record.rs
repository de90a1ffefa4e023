//! Stored-record shapes exchanged with the backends.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use idbazaar_core::{ItemPatch, Rank};

/// A persisted catalog record: every item field plus the backend-managed
/// `created`/`updated` timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    pub level: u32,
    pub skins: Vec<String>,
    pub rank: Rank,
    pub kd: f64,
    pub matches: u32,
    pub available: bool,
    #[serde(with = "backend_time")]
    pub created: DateTime<Utc>,
    #[serde(with = "backend_time")]
    pub updated: DateTime<Utc>,
}

impl ItemRecord {
    /// Materialize a record from a create payload. Used by backends that
    /// assign ids and timestamps locally.
    pub fn from_new(id: String, new: NewItemRecord, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: new.title,
            description: new.description,
            price: new.price,
            image: new.image,
            level: new.level,
            skins: new.skins,
            rank: new.rank,
            kd: new.kd,
            matches: new.matches,
            available: new.available,
            created: now,
            updated: now,
        }
    }

    /// Fold a patch into the stored record, bumping `updated`.
    ///
    /// `id` and `created` are untouchable by construction of [`ItemPatch`].
    pub fn apply_patch(&mut self, patch: &ItemPatch, now: DateTime<Utc>) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(image) = &patch.image {
            self.image = image.clone();
        }
        if let Some(level) = patch.level {
            self.level = level;
        }
        if let Some(skins) = &patch.skins {
            self.skins = skins.clone();
        }
        if let Some(rank) = patch.rank {
            self.rank = rank;
        }
        if let Some(kd) = patch.kd {
            self.kd = kd;
        }
        if let Some(matches) = patch.matches {
            self.matches = matches;
        }
        if let Some(available) = patch.available {
            self.available = available;
        }
        self.updated = now;
    }
}

/// Create payload: a record without the backend-assigned id/timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItemRecord {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    pub level: u32,
    pub skins: Vec<String>,
    pub rank: Rank,
    pub kd: f64,
    pub matches: u32,
    pub available: bool,
}

/// Timestamp codec tolerant of the remote store's wire format.
///
/// PocketBase emits `"2025-08-17 09:12:30.123Z"` (space separator) where
/// chrono expects RFC 3339. Accept both on read, emit RFC 3339 on write.
mod backend_time {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(dt: &DateTime<Utc>, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&dt.to_rfc3339())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(de)?;
        let candidate = match raw.split_once(' ') {
            Some((date, time)) => format!("{date}T{time}"),
            None => raw.clone(),
        };
        DateTime::parse_from_rfc3339(&candidate)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| serde::de::Error::custom(format!("invalid timestamp {raw:?}: {e}")))
    }
}
