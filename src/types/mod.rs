//! Type definitions for the bunny.net API.
//!
//! Field names follow the API's PascalCase JSON. Everything the API may omit
//! is optional; timestamps are [`DateValue`]s so the normalizer can parse
//! them in place.

pub mod abuse;
pub mod billing;
pub mod common;
pub mod countries;
pub mod dns;
pub mod regions;
pub mod support;
pub mod video_library;

pub use abuse::{AbuseCase, AbuseCaseUrl};
pub use billing::{
    AffiliateDetails, BillingDetails, BillingRecord, BillingRecordType, BillingSummaryItem,
};
pub use common::{parse_timestamp, DateValue, Page};
pub use countries::Country;
pub use dns::{DnsRecord, DnsZone};
pub use regions::Region;
pub use support::{Ticket, TicketComment};
pub use video_library::{ReferrerRequest, VideoLibrary};
