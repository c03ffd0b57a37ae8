//! Abuse case types.

use serde::{Deserialize, Serialize};

use super::common::{materialize_opt, null_as_default, DateValue};
use crate::errors::BunnyResult;
use crate::normalize::Normalize;

/// An abuse report filed against a pull zone.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AbuseCase {
    /// Abuse case ID.
    pub id: u64,
    /// The reported URL.
    #[serde(default)]
    pub actual_url: Option<String>,
    /// When the case was opened.
    #[serde(default)]
    pub date_created: Option<DateValue>,
    /// When the case was last updated.
    #[serde(default)]
    pub date_updated: Option<DateValue>,
    /// Resolution deadline.
    #[serde(default)]
    pub deadline: Option<DateValue>,
    /// Affected pull zone ID.
    #[serde(default)]
    pub pull_zone_id: Option<u64>,
    /// Affected pull zone name.
    #[serde(default)]
    pub pull_zone_name: Option<String>,
    /// Reported path.
    #[serde(default)]
    pub path: Option<String>,
    /// Message from the reporter.
    #[serde(default)]
    pub message: Option<String>,
    /// Case status code (1 to 4).
    #[serde(default)]
    pub status: Option<i32>,
    /// All URLs listed in the report.
    #[serde(default, deserialize_with = "null_as_default")]
    pub urls: Vec<AbuseCaseUrl>,
}

/// A URL listed in an abuse case.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AbuseCaseUrl {
    /// The URL.
    pub url: String,
    /// URL status code (1 or 2).
    #[serde(default)]
    pub status: Option<i32>,
}

impl Normalize for AbuseCase {
    fn materialize_dates(&mut self) -> BunnyResult<()> {
        materialize_opt(&mut self.date_created, "DateCreated")?;
        materialize_opt(&mut self.date_updated, "DateUpdated")?;
        materialize_opt(&mut self.deadline, "Deadline")
    }
}
