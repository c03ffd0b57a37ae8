//! Video library types.

use serde::{Deserialize, Serialize};

use super::common::{materialize_opt, null_as_default, DateValue};
use crate::errors::BunnyResult;
use crate::normalize::Normalize;

/// A Stream video library.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct VideoLibrary {
    /// Library ID.
    pub id: u64,
    /// Library name.
    #[serde(default)]
    pub name: Option<String>,
    /// Number of videos.
    #[serde(default, deserialize_with = "null_as_default")]
    pub video_count: u64,
    /// Traffic used in bytes.
    #[serde(default, deserialize_with = "null_as_default")]
    pub traffic_usage: u64,
    /// Storage used in bytes.
    #[serde(default, deserialize_with = "null_as_default")]
    pub storage_usage: u64,
    /// When the library was created.
    #[serde(default)]
    pub date_created: Option<DateValue>,
    /// Storage replication regions.
    #[serde(default, deserialize_with = "null_as_default")]
    pub replication_regions: Vec<String>,
    /// Library API key. Only present when requested.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Read-only library API key. Only present when requested.
    #[serde(default)]
    pub read_only_api_key: Option<String>,
    /// Whether a watermark is configured.
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_watermark: bool,
    /// Comma-separated list of enabled encoding resolutions.
    #[serde(default)]
    pub enabled_resolutions: Option<String>,
    /// Hostnames allowed to embed the player.
    #[serde(default, deserialize_with = "null_as_default")]
    pub allowed_referrers: Vec<String>,
    /// Hostnames blocked from embedding the player.
    #[serde(default, deserialize_with = "null_as_default")]
    pub blocked_referrers: Vec<String>,
    /// Backing pull zone ID.
    #[serde(default)]
    pub pull_zone_id: Option<u64>,
    /// Backing storage zone ID.
    #[serde(default)]
    pub storage_zone_id: Option<u64>,
}

impl Normalize for VideoLibrary {
    fn materialize_dates(&mut self) -> BunnyResult<()> {
        materialize_opt(&mut self.date_created, "DateCreated")
    }
}

/// Body of the referrer list mutations.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ReferrerRequest {
    /// Hostname to add or remove.
    pub hostname: String,
}
