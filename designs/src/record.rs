//! Design records: named, timestamped snapshots as stored in the library.

#[cfg(test)]
#[path = "record_test.rs"]
mod record_test;

use scene::model::DesignData;
use serde::{Deserialize, Deserializer, Serialize};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use uuid::Uuid;

/// Display name given to records created without an explicit name.
pub const DEFAULT_NAME: &str = "New Room Design";

/// Thumbnail URL for records that have never rendered one.
pub const PLACEHOLDER_THUMBNAIL: &str = "/placeholder.svg?height=100&width=200";

/// One saved design in the library.
///
/// Field names are part of the stored format. Timestamps are RFC 3339
/// strings and pass through loads and saves byte for byte.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignRecord {
    /// Opaque unique id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Creation time, RFC 3339.
    pub created_at: String,
    /// Time of the last save or rename, RFC 3339.
    pub updated_at: String,
    /// Thumbnail URL shown in the library.
    pub thumbnail: String,
    /// The layout snapshot itself. A malformed or missing snapshot falls
    /// back to the default design instead of failing the whole record.
    #[serde(default, deserialize_with = "lenient_design_data")]
    pub data: DesignData,
}

impl DesignRecord {
    /// Create a record with default data, fresh timestamps, and a new id.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), name)
    }

    /// Create a record under a caller-chosen id, e.g. when opening a link
    /// to a design that does not exist yet.
    #[must_use]
    pub fn with_id(id: String, name: &str) -> Self {
        let now = now_rfc3339();
        Self {
            id,
            name: name.to_string(),
            created_at: now.clone(),
            updated_at: now,
            thumbnail: PLACEHOLDER_THUMBNAIL.to_string(),
            data: DesignData::default(),
        }
    }

    /// Copy this record into a new one with its own id, a `" (Copy)"` name
    /// suffix, and fresh timestamps. Data and thumbnail carry over.
    #[must_use]
    pub fn duplicated(&self) -> Self {
        let now = now_rfc3339();
        Self {
            id: Uuid::new_v4().to_string(),
            name: format!("{} (Copy)", self.name),
            created_at: now.clone(),
            updated_at: now,
            thumbnail: self.thumbnail.clone(),
            data: self.data.clone(),
        }
    }

    /// Stamp the record as just modified.
    pub fn touch(&mut self) {
        self.updated_at = now_rfc3339();
    }

    /// The update timestamp parsed for ordering; records with timestamps
    /// that do not parse sort as oldest.
    #[must_use]
    pub fn updated_at_time(&self) -> OffsetDateTime {
        OffsetDateTime::parse(&self.updated_at, &Rfc3339).unwrap_or(OffsetDateTime::UNIX_EPOCH)
    }
}

/// Current wall-clock time as an RFC 3339 string.
#[must_use]
pub fn now_rfc3339() -> String {
    OffsetDateTime::now_utc().format(&Rfc3339).unwrap_or_default()
}

fn lenient_design_data<'de, D>(deserializer: D) -> Result<DesignData, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}
