//! Region service.

use std::sync::Arc;
use tracing::instrument;

use super::dispatcher::{Dispatcher, Endpoint};
use crate::errors::BunnyResult;
use crate::types::Region;

/// Pricing and routing regions.
pub struct RegionService {
    dispatcher: Arc<Dispatcher>,
}

impl RegionService {
    /// Creates a new region service.
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Lists all regions.
    #[instrument(skip(self))]
    pub async fn list(&self) -> BunnyResult<Vec<Region>> {
        self.dispatcher
            .fetch(Endpoint::get("region.list", "/region"))
            .await
    }
}

impl std::fmt::Debug for RegionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegionService").finish()
    }
}
