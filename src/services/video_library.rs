//! Video library service.

use std::sync::Arc;
use tracing::instrument;

use super::dispatcher::{Dispatcher, Endpoint, OK_OR_NO_CONTENT};
use super::validation::{
    require_id, require_str, validate_page, validate_page_size, MAX_PER_PAGE, MIN_PER_PAGE,
};
use crate::errors::BunnyResult;
use crate::types::{Page, ReferrerRequest, VideoLibrary};

/// Stream video libraries and their referrer lists.
pub struct VideoLibraryService {
    dispatcher: Arc<Dispatcher>,
}

impl VideoLibraryService {
    /// Creates a new video library service.
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Lists video libraries.
    ///
    /// `page_size` must be in `5..=1000`. Library API keys are only included
    /// when `include_access_key` is set.
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        page: u32,
        page_size: u32,
        include_access_key: bool,
    ) -> BunnyResult<Page<VideoLibrary>> {
        validate_page(page)?;
        validate_page_size("pageSize", page_size, MIN_PER_PAGE, MAX_PER_PAGE)?;

        let endpoint = Endpoint::get("video_library.list", "/videolibrary")
            .query("page", page)
            .query("pageSize", page_size)
            .query("includeAccessKey", include_access_key);
        self.dispatcher.fetch(endpoint).await
    }

    /// Returns a video library.
    #[instrument(skip(self))]
    pub async fn get(&self, id: u64) -> BunnyResult<VideoLibrary> {
        require_id("id", id)?;

        let endpoint =
            Endpoint::get("video_library.get", format!("/videolibrary/{}", id)).with_not_found();
        self.dispatcher.fetch(endpoint).await
    }

    /// Allows `hostname` to embed the library's player.
    #[instrument(skip(self))]
    pub async fn add_allowed_referrer(&self, id: u64, hostname: &str) -> BunnyResult<()> {
        self.mutate_referrers("video_library.add_allowed_referrer", "addAllowedReferrer", id, hostname)
            .await
    }

    /// Removes `hostname` from the allowed referrers.
    #[instrument(skip(self))]
    pub async fn remove_allowed_referrer(&self, id: u64, hostname: &str) -> BunnyResult<()> {
        self.mutate_referrers(
            "video_library.remove_allowed_referrer",
            "removeAllowedReferrer",
            id,
            hostname,
        )
        .await
    }

    /// Blocks `hostname` from embedding the library's player.
    #[instrument(skip(self))]
    pub async fn add_blocked_referrer(&self, id: u64, hostname: &str) -> BunnyResult<()> {
        self.mutate_referrers("video_library.add_blocked_referrer", "addBlockedReferrer", id, hostname)
            .await
    }

    /// Removes `hostname` from the blocked referrers.
    #[instrument(skip(self))]
    pub async fn remove_blocked_referrer(&self, id: u64, hostname: &str) -> BunnyResult<()> {
        self.mutate_referrers(
            "video_library.remove_blocked_referrer",
            "removeBlockedReferrer",
            id,
            hostname,
        )
        .await
    }

    async fn mutate_referrers(
        &self,
        operation: &'static str,
        action: &str,
        id: u64,
        hostname: &str,
    ) -> BunnyResult<()> {
        require_id("id", id)?;
        let hostname = require_str("hostname", hostname)?;

        let endpoint = Endpoint::post(operation, format!("/videolibrary/{}/{}", id, action))
            .json_body(&ReferrerRequest {
                hostname: hostname.to_string(),
            })?
            .accept(OK_OR_NO_CONTENT)
            .with_not_found();
        self.dispatcher.send_empty(endpoint).await
    }
}

impl std::fmt::Debug for VideoLibraryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VideoLibraryService").finish()
    }
}
