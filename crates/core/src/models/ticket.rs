//! Support ticket records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Email, TicketId, TicketStatus};

/// A customer support request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: TicketId,
    pub name: String,
    pub email: Email,
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub status: TicketStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<DateTime<Utc>>,
}

impl Ticket {
    /// Whether the ticket still awaits an admin response.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.status == TicketStatus::Open
    }
}
