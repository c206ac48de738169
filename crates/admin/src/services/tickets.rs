//! Support ticket management.

use chrono::Utc;
use tracing::{info, instrument};

use wighub_core::{Ticket, TicketId, TicketStatus};
use wighub_store::KeyValueStore;
use wighub_store::repo::TicketRepository;

use super::AdminError;

/// Ticket management service.
pub struct TicketAdminService<'a> {
    tickets: TicketRepository<'a>,
}

impl<'a> TicketAdminService<'a> {
    /// Create a new ticket management service.
    #[must_use]
    pub const fn new(store: &'a dyn KeyValueStore) -> Self {
        Self {
            tickets: TicketRepository::new(store),
        }
    }

    /// All tickets, open ones first, otherwise in submission order.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::Repository` if the tickets cannot be read.
    pub fn list(&self) -> Result<Vec<Ticket>, AdminError> {
        let mut tickets = self.tickets.load()?;
        tickets.sort_by_key(|ticket| !ticket.is_open());
        Ok(tickets)
    }

    /// Number of tickets still open.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::Repository` if the tickets cannot be read.
    pub fn open_count(&self) -> Result<usize, AdminError> {
        Ok(self.tickets.load()?.iter().filter(|t| t.is_open()).count())
    }

    /// Resolve a ticket with a response. Resolving again replaces the response.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::MissingField` for a blank response and
    /// `AdminError::TicketNotFound` for an unknown ticket.
    #[instrument(skip(self, response))]
    pub fn resolve(&self, id: TicketId, response: &str) -> Result<Ticket, AdminError> {
        let response = response.trim();
        if response.is_empty() {
            return Err(AdminError::MissingField("response"));
        }

        let mut tickets = self.tickets.load()?;
        let ticket = tickets
            .iter_mut()
            .find(|ticket| ticket.id == id)
            .ok_or(AdminError::TicketNotFound(id))?;
        ticket.status = TicketStatus::Resolved;
        ticket.response = Some(response.to_owned());
        ticket.resolved_at = Some(Utc::now());
        let ticket = ticket.clone();
        self.tickets.save(&tickets)?;

        info!(ticket = %id, "Ticket resolved");
        Ok(ticket)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use wighub_store::MemoryStore;
    use wighub_storefront::services::{SupportService, TicketForm};

    use super::*;

    fn submit(store: &MemoryStore, subject: &str) -> Ticket {
        SupportService::new(store)
            .submit_ticket(TicketForm {
                name: "Grace".to_owned(),
                email: "grace@wighub.com".to_owned(),
                subject: subject.to_owned(),
                message: "Hello".to_owned(),
            })
            .unwrap()
    }

    #[test]
    fn test_list_puts_open_tickets_first() {
        let store = MemoryStore::new();
        let first = submit(&store, "first");
        let second = submit(&store, "second");
        let third = submit(&store, "third");
        let service = TicketAdminService::new(&store);
        service.resolve(first.id, "Done").unwrap();

        let ids: Vec<_> = service.list().unwrap().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![second.id, third.id, first.id]);
        assert_eq!(service.open_count().unwrap(), 2);
    }

    #[test]
    fn test_resolve_records_response() {
        let store = MemoryStore::new();
        let ticket = submit(&store, "sizing");
        let service = TicketAdminService::new(&store);

        let resolved = service.resolve(ticket.id, "  Size M fits 22in  ").unwrap();
        assert_eq!(resolved.status, TicketStatus::Resolved);
        assert_eq!(resolved.response.as_deref(), Some("Size M fits 22in"));
        assert!(resolved.resolved_at.is_some());
    }

    #[test]
    fn test_resolve_failures() {
        let store = MemoryStore::new();
        let ticket = submit(&store, "sizing");
        let service = TicketAdminService::new(&store);

        assert!(matches!(
            service.resolve(ticket.id, " "),
            Err(AdminError::MissingField("response"))
        ));
        assert!(matches!(
            service.resolve(TicketId::generate(), "ok"),
            Err(AdminError::TicketNotFound(_))
        ));
        assert!(service.list().unwrap()[0].is_open());
    }
}
