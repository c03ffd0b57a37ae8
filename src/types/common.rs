//! Common types shared across the bunny.net API.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{BunnyError, BunnyResult};
use crate::normalize::Normalize;

/// A timestamp field as returned by the API.
///
/// Deserialization always yields [`DateValue::Raw`]; the response normalizer
/// turns it into [`DateValue::Parsed`] when date parsing is enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateValue {
    /// The string exactly as the API sent it.
    Raw(String),
    /// The parsed instant.
    Parsed(DateTime<Utc>),
}

impl DateValue {
    /// Returns the parsed instant, if materialized.
    pub fn as_datetime(&self) -> Option<&DateTime<Utc>> {
        match self {
            DateValue::Parsed(value) => Some(value),
            DateValue::Raw(_) => None,
        }
    }

    /// Returns the raw string, if not materialized.
    pub fn raw(&self) -> Option<&str> {
        match self {
            DateValue::Raw(value) => Some(value),
            DateValue::Parsed(_) => None,
        }
    }

    /// Parses a raw value in place. Already parsed values are left alone.
    pub fn materialize(&mut self, field: &str) -> BunnyResult<()> {
        if let DateValue::Raw(raw) = self {
            let parsed = parse_timestamp(raw)
                .ok_or_else(|| BunnyError::parse(field, format!("malformed timestamp {:?}", raw)))?;
            *self = DateValue::Parsed(parsed);
        }
        Ok(())
    }
}

impl From<&str> for DateValue {
    fn from(value: &str) -> Self {
        DateValue::Raw(value.to_string())
    }
}

impl From<DateTime<Utc>> for DateValue {
    fn from(value: DateTime<Utc>) -> Self {
        DateValue::Parsed(value)
    }
}

impl Serialize for DateValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DateValue::Raw(raw) => serializer.serialize_str(raw),
            DateValue::Parsed(value) => serializer.serialize_str(&value.to_rfc3339()),
        }
    }
}

impl<'de> Deserialize<'de> for DateValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(DateValue::Raw)
    }
}

/// Parses an API timestamp.
///
/// Accepts RFC 3339 and the offset-less `YYYY-MM-DDTHH:MM:SS[.fff]` form,
/// which the API uses for UTC values.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(value) = DateTime::parse_from_rfc3339(raw) {
        return Some(value.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Deserializes an explicit `null` as the type's default value.
///
/// Pair with `#[serde(default)]` so a missing key behaves the same way.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Materializes an optional timestamp field.
pub(crate) fn materialize_opt(value: &mut Option<DateValue>, field: &str) -> BunnyResult<()> {
    match value {
        Some(date) => date.materialize(field),
        None => Ok(()),
    }
}

/// A page of a paginated listing.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    /// Items on this page.
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<T>,
    /// One-based page number.
    #[serde(default, deserialize_with = "null_as_default")]
    pub current_page: u32,
    /// Total number of items across all pages.
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_items: u64,
    /// Whether another page follows.
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_more_items: bool,
}

impl<T> Page<T> {
    /// Returns the number of items on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the page holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns an iterator over the items.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// The page number to request next, if the server reports more items.
    pub fn next_page(&self) -> Option<u32> {
        if self.has_more_items {
            self.current_page.checked_add(1)
        } else {
            None
        }
    }
}

impl<T: Normalize> Normalize for Page<T> {
    fn materialize_dates(&mut self) -> BunnyResult<()> {
        self.items.materialize_dates()
    }

    fn populate_fields(&mut self) -> BunnyResult<()> {
        self.items.populate_fields()
    }
}
