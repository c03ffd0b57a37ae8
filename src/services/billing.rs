//! Billing service.

use std::sync::Arc;
use tracing::instrument;

use super::dispatcher::{Dispatcher, Endpoint};
use crate::errors::BunnyResult;
use crate::types::{AffiliateDetails, BillingDetails, BillingSummaryItem};

/// Account billing, affiliate and usage summary.
pub struct BillingService {
    dispatcher: Arc<Dispatcher>,
}

impl BillingService {
    /// Creates a new billing service.
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Returns balance, charges and billing records.
    #[instrument(skip(self))]
    pub async fn details(&self) -> BunnyResult<BillingDetails> {
        self.dispatcher
            .fetch(Endpoint::get("billing.details", "/billing"))
            .await
    }

    /// Returns affiliate program details.
    #[instrument(skip(self))]
    pub async fn affiliate(&self) -> BunnyResult<AffiliateDetails> {
        self.dispatcher
            .fetch(Endpoint::get("billing.affiliate", "/billing/affiliate"))
            .await
    }

    /// Moves the affiliate balance into the account balance.
    #[instrument(skip(self))]
    pub async fn claim_affiliate_credits(&self) -> BunnyResult<()> {
        self.dispatcher
            .send_empty(Endpoint::post(
                "billing.claim_affiliate_credits",
                "/billing/affiliate/claim",
            ))
            .await
    }

    /// Returns this month's usage per pull zone.
    #[instrument(skip(self))]
    pub async fn summary(&self) -> BunnyResult<Vec<BillingSummaryItem>> {
        self.dispatcher
            .fetch(Endpoint::get("billing.summary", "/billing/summary"))
            .await
    }
}

impl std::fmt::Debug for BillingService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BillingService").finish()
    }
}
