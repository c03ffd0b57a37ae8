//! Country types.

use serde::{Deserialize, Serialize};

use super::common::null_as_default;
use crate::normalize::Normalize;

/// A country as known to bunny.net billing.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Country {
    /// Country name.
    pub name: String,
    /// ISO 3166-1 alpha-2 code.
    #[serde(default)]
    pub iso_code: Option<String>,
    /// Whether the country is an EU member.
    #[serde(rename = "IsEU", default, deserialize_with = "null_as_default")]
    pub is_eu: bool,
    /// VAT rate applied to this country.
    #[serde(default)]
    pub tax_rate: Option<f64>,
    /// VAT number prefix.
    #[serde(default)]
    pub tax_prefix: Option<String>,
    /// URL of the flag image.
    #[serde(default)]
    pub flag_url: Option<String>,
    /// Points of presence located in this country.
    #[serde(default, deserialize_with = "null_as_default")]
    pub pop_list: Vec<String>,
}

impl Normalize for Country {}
