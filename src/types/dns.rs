//! DNS zone types.

use serde::{Deserialize, Serialize};

use super::common::{materialize_opt, null_as_default, DateValue};
use crate::errors::BunnyResult;
use crate::normalize::Normalize;

/// A DNS zone hosted on bunny.net.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DnsZone {
    /// Zone ID.
    pub id: u64,
    /// Zone apex domain.
    pub domain: String,
    /// Records in the zone.
    #[serde(default, deserialize_with = "null_as_default")]
    pub records: Vec<DnsRecord>,
    /// When the zone was last modified.
    #[serde(default)]
    pub date_modified: Option<DateValue>,
    /// When the zone was created.
    #[serde(default)]
    pub date_created: Option<DateValue>,
    /// Whether bunny.net nameservers were detected at the registrar.
    #[serde(default, deserialize_with = "null_as_default")]
    pub nameservers_detected: bool,
    /// Whether custom nameservers are enabled.
    #[serde(default, deserialize_with = "null_as_default")]
    pub custom_nameservers_enabled: bool,
    /// First nameserver.
    #[serde(default)]
    pub nameserver1: Option<String>,
    /// Second nameserver.
    #[serde(default)]
    pub nameserver2: Option<String>,
    /// SOA contact address.
    #[serde(default)]
    pub soa_email: Option<String>,
    /// Next scheduled nameserver check.
    #[serde(default)]
    pub nameservers_next_check: Option<DateValue>,
    /// Whether query logging is enabled.
    #[serde(default, deserialize_with = "null_as_default")]
    pub logging_enabled: bool,
}

/// A DNS record.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DnsRecord {
    /// Record ID.
    pub id: u64,
    /// Numeric record type.
    #[serde(rename = "Type", default)]
    pub record_type: Option<i32>,
    /// Time to live in seconds.
    #[serde(default)]
    pub ttl: Option<u32>,
    /// Record value.
    #[serde(default)]
    pub value: Option<String>,
    /// Record name relative to the zone.
    #[serde(default)]
    pub name: Option<String>,
    /// Weight, for weighted records.
    #[serde(default)]
    pub weight: Option<u32>,
    /// Priority, for MX and SRV records.
    #[serde(default)]
    pub priority: Option<u32>,
    /// Port, for SRV records.
    #[serde(default)]
    pub port: Option<u32>,
    /// Whether the record is disabled.
    #[serde(default, deserialize_with = "null_as_default")]
    pub disabled: bool,
}

impl Normalize for DnsRecord {}

impl Normalize for DnsZone {
    fn materialize_dates(&mut self) -> BunnyResult<()> {
        materialize_opt(&mut self.date_modified, "DateModified")?;
        materialize_opt(&mut self.date_created, "DateCreated")?;
        materialize_opt(&mut self.nameservers_next_check, "NameserversNextCheck")
    }
}
