//! Support ticket service.

use std::sync::Arc;
use tracing::instrument;

use super::dispatcher::{Dispatcher, Endpoint, OK_OR_NO_CONTENT};
use super::validation::{require_id, validate_page};
use crate::errors::BunnyResult;
use crate::types::{Page, Ticket};

/// Support tickets.
pub struct SupportService {
    dispatcher: Arc<Dispatcher>,
}

impl SupportService {
    /// Creates a new support service.
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Lists tickets. `page_size` is passed through unchecked.
    #[instrument(skip(self))]
    pub async fn list_tickets(&self, page: u32, page_size: u32) -> BunnyResult<Page<Ticket>> {
        validate_page(page)?;

        let endpoint = Endpoint::get("support.list_tickets", "/support/ticket/list")
            .query("page", page)
            .query("pageSize", page_size);
        self.dispatcher.fetch(endpoint).await
    }

    /// Returns a ticket with its comments.
    #[instrument(skip(self))]
    pub async fn ticket(&self, id: u64) -> BunnyResult<Ticket> {
        require_id("id", id)?;

        let endpoint = Endpoint::get("support.ticket", format!("/support/ticket/details/{}", id))
            .with_not_found();
        self.dispatcher.fetch(endpoint).await
    }

    /// Closes a ticket.
    #[instrument(skip(self))]
    pub async fn close_ticket(&self, id: u64) -> BunnyResult<()> {
        require_id("id", id)?;

        let endpoint = Endpoint::post("support.close_ticket", format!("/support/ticket/{}/close", id))
            .accept(OK_OR_NO_CONTENT);
        self.dispatcher.send_empty(endpoint).await
    }
}

impl std::fmt::Debug for SupportService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupportService").finish()
    }
}
