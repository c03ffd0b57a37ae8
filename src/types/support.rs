//! Support ticket types.

use serde::{Deserialize, Serialize};

use super::common::{materialize_opt, null_as_default, DateValue};
use crate::errors::BunnyResult;
use crate::normalize::Normalize;

/// A support ticket with its conversation.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Ticket {
    /// Internal ticket ID.
    pub id: u64,
    /// Public ticket number.
    #[serde(default)]
    pub ticket_id: Option<u64>,
    /// Ticket subject.
    #[serde(default)]
    pub subject: Option<String>,
    /// Ticket status, e.g. `Open` or `Closed`.
    #[serde(default)]
    pub status: Option<String>,
    /// When the ticket was opened.
    #[serde(default)]
    pub date_created: Option<DateValue>,
    /// When the ticket was last updated.
    #[serde(default)]
    pub date_updated: Option<DateValue>,
    /// Pull zone the ticket refers to.
    #[serde(default)]
    pub linked_pull_zone: Option<String>,
    /// Storage zone the ticket refers to.
    #[serde(default)]
    pub linked_storage_zone: Option<String>,
    /// Messages on the ticket, oldest first.
    #[serde(default, deserialize_with = "null_as_default")]
    pub comments: Vec<TicketComment>,
}

/// A message posted on a ticket.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TicketComment {
    /// Comment ID.
    pub id: u64,
    /// Message body (HTML).
    #[serde(default)]
    pub body: Option<String>,
    /// Author display name.
    #[serde(default)]
    pub author: Option<String>,
    /// When the comment was posted.
    #[serde(default)]
    pub date_created: Option<DateValue>,
}

impl Normalize for TicketComment {
    fn materialize_dates(&mut self) -> BunnyResult<()> {
        materialize_opt(&mut self.date_created, "Comments.DateCreated")
    }
}

impl Normalize for Ticket {
    fn materialize_dates(&mut self) -> BunnyResult<()> {
        materialize_opt(&mut self.date_created, "DateCreated")?;
        materialize_opt(&mut self.date_updated, "DateUpdated")?;
        self.comments.materialize_dates()
    }
}
