//! DNS zone service.

use std::sync::Arc;
use tracing::instrument;

use super::dispatcher::{Dispatcher, Endpoint};
use super::validation::{validate_page, validate_page_size, MAX_PER_PAGE, MIN_PER_PAGE};
use crate::errors::BunnyResult;
use crate::types::{DnsZone, Page};

/// DNS zones.
pub struct DnsZoneService {
    dispatcher: Arc<Dispatcher>,
}

impl DnsZoneService {
    /// Creates a new DNS zone service.
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Lists DNS zones. `per_page` must be in `5..=1000`.
    #[instrument(skip(self))]
    pub async fn list(&self, page: u32, per_page: u32) -> BunnyResult<Page<DnsZone>> {
        validate_page(page)?;
        validate_page_size("perPage", per_page, MIN_PER_PAGE, MAX_PER_PAGE)?;

        let endpoint = Endpoint::get("dns_zone.list", "/dnszone")
            .query("page", page)
            .query("perPage", per_page)
            .with_not_found();
        self.dispatcher.fetch(endpoint).await
    }
}

impl std::fmt::Debug for DnsZoneService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DnsZoneService").finish()
    }
}
