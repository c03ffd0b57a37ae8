//! Region types.

use serde::{Deserialize, Serialize};

use super::common::null_as_default;
use crate::normalize::Normalize;

/// A pricing and routing region.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Region {
    /// Region ID.
    pub id: u64,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Traffic price in USD per gigabyte.
    #[serde(default)]
    pub price_per_gigabyte: Option<f64>,
    /// Region code, e.g. `DE`.
    #[serde(default)]
    pub region_code: Option<String>,
    /// Continent code, e.g. `EU`.
    #[serde(default)]
    pub continent_code: Option<String>,
    /// Country code.
    #[serde(default)]
    pub country_code: Option<String>,
    /// Latitude of the region.
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Longitude of the region.
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Whether latency-based routing may send traffic here.
    #[serde(default, deserialize_with = "null_as_default")]
    pub allow_latency_routing: bool,
}

impl Normalize for Region {}
