//! Abuse case service.

use std::sync::Arc;
use tracing::instrument;

use super::dispatcher::{Dispatcher, Endpoint};
use super::validation::{require_id, validate_page, validate_page_size, MAX_PER_PAGE, MIN_PER_PAGE};
use crate::errors::BunnyResult;
use crate::types::{AbuseCase, Page};

/// Abuse case listing and resolution checks.
pub struct AbuseCaseService {
    dispatcher: Arc<Dispatcher>,
}

impl AbuseCaseService {
    /// Creates a new abuse case service.
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Lists abuse cases.
    ///
    /// `page` must be in `1..=2147483647` and `per_page` in `5..=1000`.
    #[instrument(skip(self))]
    pub async fn list(&self, page: u32, per_page: u32) -> BunnyResult<Page<AbuseCase>> {
        validate_page(page)?;
        validate_page_size("perPage", per_page, MIN_PER_PAGE, MAX_PER_PAGE)?;

        let endpoint = Endpoint::get("abuse_case.list", "/abusecase")
            .query("page", page)
            .query("perPage", per_page);
        self.dispatcher.fetch(endpoint).await
    }

    /// Asks bunny.net to re-check an abuse case.
    #[instrument(skip(self))]
    pub async fn check(&self, id: u64) -> BunnyResult<AbuseCase> {
        require_id("id", id)?;

        let endpoint = Endpoint::post("abuse_case.check", format!("/abusecase/{}/check", id));
        self.dispatcher.fetch(endpoint).await
    }
}

impl std::fmt::Debug for AbuseCaseService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AbuseCaseService").finish()
    }
}
