//! Support ticket submission.

use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, instrument};

use wighub_core::{Email, EmailError, Ticket, TicketId, TicketStatus};
use wighub_store::repo::TicketRepository;
use wighub_store::{KeyValueStore, RepositoryError};

/// Errors from ticket submission.
#[derive(Debug, Error)]
pub enum SupportError {
    /// A required field was left blank.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// The contact email does not parse.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Storage failure.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Contact form contents.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TicketForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Support service.
pub struct SupportService<'a> {
    tickets: TicketRepository<'a>,
}

impl<'a> SupportService<'a> {
    /// Create a new support service.
    #[must_use]
    pub const fn new(store: &'a dyn KeyValueStore) -> Self {
        Self {
            tickets: TicketRepository::new(store),
        }
    }

    /// Open a ticket from a contact form.
    ///
    /// # Errors
    ///
    /// Returns `SupportError::MissingField` for a blank field and
    /// `SupportError::InvalidEmail` for a malformed email.
    #[instrument(skip(self, form), fields(email = %form.email))]
    pub fn submit_ticket(&self, form: TicketForm) -> Result<Ticket, SupportError> {
        for (field, value) in [
            ("name", &form.name),
            ("email", &form.email),
            ("subject", &form.subject),
            ("message", &form.message),
        ] {
            if value.trim().is_empty() {
                return Err(SupportError::MissingField(field));
            }
        }
        let email = Email::parse(&form.email)?;

        let ticket = Ticket {
            id: TicketId::generate(),
            name: form.name.trim().to_owned(),
            email,
            subject: form.subject.trim().to_owned(),
            message: form.message.trim().to_owned(),
            status: TicketStatus::Open,
            created_at: Utc::now(),
            response: None,
            resolved_at: None,
        };

        let mut tickets = self.tickets.load()?;
        tickets.push(ticket.clone());
        self.tickets.save(&tickets)?;

        info!(ticket = %ticket.id, "Support ticket opened");
        Ok(ticket)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use wighub_store::MemoryStore;

    use super::*;

    fn form() -> TicketForm {
        TicketForm {
            name: "Grace".to_owned(),
            email: "grace@wighub.com".to_owned(),
            subject: "Sizing".to_owned(),
            message: "Which cap size fits 22 inches?".to_owned(),
        }
    }

    #[test]
    fn test_submit_ticket_appends_open_ticket() {
        let store = MemoryStore::new();
        let service = SupportService::new(&store);

        let first = service.submit_ticket(form()).unwrap();
        service.submit_ticket(form()).unwrap();

        let tickets = TicketRepository::new(&store).load().unwrap();
        assert_eq!(tickets.len(), 2);
        assert_eq!(tickets[0], first);
        assert!(first.is_open());
    }

    #[test]
    fn test_submit_ticket_requires_fields() {
        let store = MemoryStore::new();
        let service = SupportService::new(&store);

        let blank_subject = TicketForm {
            subject: " ".to_owned(),
            ..form()
        };
        assert!(matches!(
            service.submit_ticket(blank_subject),
            Err(SupportError::MissingField("subject"))
        ));

        let bad_email = TicketForm {
            email: "grace".to_owned(),
            ..form()
        };
        assert!(matches!(
            service.submit_ticket(bad_email),
            Err(SupportError::InvalidEmail(_))
        ));
        assert!(TicketRepository::new(&store).load().unwrap().is_empty());
    }
}
