//! bunny.net API Client Library
//!
//! An async Rust client for the bunny.net account API. Covers abuse cases,
//! billing, countries, regions, support tickets, Stream video libraries and
//! DNS zones.
//!
//! # Features
//!
//! - **Replaceable credential**: the `AccessKey` can be set after the client
//!   is built; operations fail locally until it is
//! - **Normalization**: optional timestamp parsing and billing type labels
//! - **Typed errors**: one [`BunnyError`] variant per failure class
//! - **Observability**: `tracing` spans and events, per-client metrics
//! - **Testability**: pluggable transport and a recording mock
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use bunnycdn_client::{BunnyClient, OptionsUpdate};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = BunnyClient::builder().build()?;
//!     client.set_api_key("your-account-api-key")?;
//!     client.set_options(OptionsUpdate::new().parse_dates(true).populate_fields(true));
//!
//!     let billing = client.billing().details().await?;
//!     for record in &billing.billing_records {
//!         println!("{} {:?}", record.amount, record.type_name);
//!     }
//!
//!     client.support().close_ticket(1234).await?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod auth;
pub mod client;
pub mod config;
pub mod errors;
pub mod normalize;
pub mod observability;
pub mod services;
pub mod transport;
pub mod types;

// Re-exports for convenience
pub use client::{BunnyClient, BunnyClientBuilder};
pub use config::{BunnyConfig, ClientOptions, OptionsUpdate};
pub use errors::{BunnyError, BunnyResult, ErrorKind};

// Type re-exports
pub use types::{
    AbuseCase, AbuseCaseUrl, AffiliateDetails, BillingDetails, BillingRecord, BillingRecordType,
    BillingSummaryItem, Country, DateValue, DnsRecord, DnsZone, Page, Region, Ticket,
    TicketComment, VideoLibrary,
};

/// Mock implementations for testing.
#[cfg(any(test, feature = "mocks"))]
pub mod mocks;
