//! Ticket operations.
//!
//! Every mutating operation follows the same shape: check the request
//! against the current state, apply it to the store, write the whole store
//! to disk. If any step fails the in-memory store is put back the way it
//! was, so memory and file agree after every call, successful or not.

use chrono::{Local, NaiveDate};
use std::path::Path;
use tracing::{info, warn};

use crate::error::{HelpdeskError, Result};
use crate::model::{Status, Ticket};
use crate::query::{ListFilters, NewTicket, Statistics, TicketEdit};
use crate::store::TicketStore;
use crate::validation::TicketValidator;

/// Owns the ticket store and performs operations on behalf of a shell.
#[derive(Debug)]
pub struct Controller {
    store: TicketStore,
}

impl Controller {
    #[must_use]
    pub const fn new(store: TicketStore) -> Self {
        Self { store }
    }

    /// Open the store at `path` and wrap it.
    ///
    /// # Errors
    ///
    /// Returns `StorageCorrupt` or `Io` if the file cannot be loaded.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        TicketStore::open(path).map(Self::new)
    }

    #[must_use]
    pub const fn store(&self) -> &TicketStore {
        &self.store
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// All tickets in insertion order.
    #[must_use]
    pub fn list(&self) -> &[Ticket] {
        self.store.tickets()
    }

    #[must_use]
    pub fn list_filtered(&self, filters: &ListFilters) -> Vec<&Ticket> {
        self.store
            .tickets()
            .iter()
            .filter(|t| filters.matches(t))
            .collect()
    }

    /// Get a single ticket by ID.
    ///
    /// # Errors
    ///
    /// Returns `TicketNotFound` if the ticket doesn't exist.
    pub fn show(&self, id: &str) -> Result<&Ticket> {
        self.store.get(id).ok_or_else(|| not_found(id))
    }

    /// Tickets whose first and last names both equal the query, ignoring case.
    ///
    /// Empty strings are legitimate queries; only a missing name is an error.
    ///
    /// # Errors
    ///
    /// Returns `Validation` if either name was not supplied.
    pub fn search(&self, first_name: Option<&str>, last_name: Option<&str>) -> Result<Vec<&Ticket>> {
        let (first_name, last_name) = match (first_name, last_name) {
            (Some(first), Some(last)) => (first, last),
            (None, _) => return Err(HelpdeskError::validation("first_name", "is required")),
            (_, None) => return Err(HelpdeskError::validation("last_name", "is required")),
        };

        Ok(self
            .store
            .tickets()
            .iter()
            .filter(|t| t.matches_name(first_name, last_name))
            .collect())
    }

    #[must_use]
    pub fn stats(&self) -> Statistics {
        Statistics::from_tickets(self.store.tickets())
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Create a ticket dated today.
    ///
    /// # Errors
    ///
    /// Returns `Validation`/`ValidationErrors` if a field is empty, or
    /// `StorageWriteFailed` if the store cannot be saved.
    pub fn create(&mut self, new: NewTicket) -> Result<Ticket> {
        self.create_on(new, Local::now().date_naive())
    }

    /// Create a ticket with an explicit creation date.
    ///
    /// # Errors
    ///
    /// Same as [`Controller::create`].
    pub fn create_on(&mut self, new: NewTicket, date: NaiveDate) -> Result<Ticket> {
        let priority =
            TicketValidator::validate(&new).map_err(HelpdeskError::from_validation_errors)?;

        let ticket = self.commit("create", |store| {
            let ticket = Ticket {
                id: store.allocate_id(),
                first_name: new.first_name,
                last_name: new.last_name,
                issue: new.issue,
                date,
                priority,
                status: Status::Open,
            };
            store.insert(ticket.clone());
            Ok(ticket)
        })?;

        info!(id = %ticket.id, priority = %ticket.priority, "created ticket");
        Ok(ticket)
    }

    /// Move an open ticket to `Closed`.
    ///
    /// # Errors
    ///
    /// Returns `TicketNotFound`, `InvalidTransition` if it is already closed,
    /// or `StorageWriteFailed`.
    pub fn close(&mut self, id: &str) -> Result<Ticket> {
        self.transition(id, Status::Closed)
    }

    /// Move a closed ticket back to `Open`.
    ///
    /// # Errors
    ///
    /// Returns `TicketNotFound`, `InvalidTransition` if it is already open,
    /// or `StorageWriteFailed`.
    pub fn reopen(&mut self, id: &str) -> Result<Ticket> {
        self.transition(id, Status::Open)
    }

    fn transition(&mut self, id: &str, to: Status) -> Result<Ticket> {
        let from = self.show(id)?.status;
        if from == to {
            return Err(HelpdeskError::InvalidTransition {
                id: id.to_string(),
                from,
                to,
            });
        }

        let ticket = self.commit("transition", |store| {
            let ticket = store.get_mut(id).ok_or_else(|| not_found(id))?;
            ticket.status = to;
            Ok(ticket.clone())
        })?;

        info!(id, %from, %to, "changed ticket status");
        Ok(ticket)
    }

    /// Overwrite the name, issue and priority of a ticket.
    ///
    /// The new values are written as given, empty strings included. The
    /// ticket's ID, date and status do not change.
    ///
    /// # Errors
    ///
    /// Returns `TicketNotFound` or `StorageWriteFailed`.
    pub fn edit(&mut self, id: &str, edit: TicketEdit) -> Result<Ticket> {
        let ticket = self.commit("edit", |store| {
            let ticket = store.get_mut(id).ok_or_else(|| not_found(id))?;
            ticket.first_name = edit.first_name;
            ticket.last_name = edit.last_name;
            ticket.issue = edit.issue;
            ticket.priority = edit.priority;
            Ok(ticket.clone())
        })?;

        info!(id, "edited ticket");
        Ok(ticket)
    }

    /// Delete a ticket once the caller confirms.
    ///
    /// `confirm` is asked only after the ticket is known to exist. When it
    /// declines, nothing changes and `Ok(None)` is returned.
    ///
    /// # Errors
    ///
    /// Returns `TicketNotFound` or `StorageWriteFailed`.
    pub fn delete(
        &mut self,
        id: &str,
        confirm: impl FnOnce(&Ticket) -> bool,
    ) -> Result<Option<Ticket>> {
        if !confirm(self.show(id)?) {
            info!(id, "delete cancelled");
            return Ok(None);
        }

        let removed = self.commit("delete", |store| {
            store.remove(id).ok_or_else(|| not_found(id))
        })?;

        info!(id, "deleted ticket");
        Ok(Some(removed))
    }

    /// Apply `change` to the store and persist it, undoing the change if
    /// either step fails.
    fn commit<T>(
        &mut self,
        op: &'static str,
        change: impl FnOnce(&mut TicketStore) -> Result<T>,
    ) -> Result<T> {
        let snapshot = self.store.snapshot();

        let value = match change(&mut self.store) {
            Ok(value) => value,
            Err(err) => {
                self.store.restore(snapshot);
                return Err(err);
            }
        };

        if let Err(err) = self.store.save() {
            warn!(op, error = %err, "save failed; discarding change");
            self.store.restore(snapshot);
            return Err(err);
        }

        Ok(value)
    }
}

fn not_found(id: &str) -> HelpdeskError {
    HelpdeskError::TicketNotFound { id: id.to_string() }
}
