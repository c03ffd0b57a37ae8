//! Country service.

use std::sync::Arc;
use tracing::instrument;

use super::dispatcher::{Dispatcher, Endpoint};
use crate::errors::BunnyResult;
use crate::types::Country;

/// Country list used for billing and tax.
pub struct CountryService {
    dispatcher: Arc<Dispatcher>,
}

impl CountryService {
    /// Creates a new country service.
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Lists all countries.
    #[instrument(skip(self))]
    pub async fn list(&self) -> BunnyResult<Vec<Country>> {
        self.dispatcher
            .fetch(Endpoint::get("country.list", "/country"))
            .await
    }
}

impl std::fmt::Debug for CountryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CountryService").finish()
    }
}
