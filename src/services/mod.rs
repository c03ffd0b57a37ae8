//! Service implementations for the bunny.net API.
//!
//! Each service groups the operations of one API area. All of them validate
//! their arguments first and then hand an [`Endpoint`] to the shared
//! [`Dispatcher`].

mod abuse;
mod billing;
mod countries;
pub mod dispatcher;
mod dns;
mod regions;
mod support;
pub mod validation;
mod video_library;

pub use abuse::AbuseCaseService;
pub use billing::BillingService;
pub use countries::CountryService;
pub use dispatcher::{classify, Dispatcher, Endpoint};
pub use dns::DnsZoneService;
pub use regions::RegionService;
pub use support::SupportService;
pub use video_library::VideoLibraryService;
