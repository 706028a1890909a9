//! In-memory ticket store bound to its backing file.
//!
//! Tickets are kept in insertion order. The store never writes on its own;
//! [`crate::Controller`] calls [`TicketStore::save`] after each mutation.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::jsonfile;
use crate::model::Ticket;

/// The mapping of ticket ID to ticket, plus the file it persists to.
#[derive(Debug)]
pub struct TicketStore {
    tickets: Vec<Ticket>,
    path: PathBuf,
    /// Next numeric ID to hand out. Only ever grows while the store lives.
    next_number: u64,
}

/// Copy of the mutable state, taken before a change so it can be undone.
#[derive(Debug, Clone)]
pub(crate) struct Snapshot {
    tickets: Vec<Ticket>,
    next_number: u64,
}

impl TicketStore {
    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Open the store backed by `path`, loading every ticket in it.
    ///
    /// A missing file yields an empty store; the file is created on the
    /// first save.
    ///
    /// # Errors
    ///
    /// Returns `StorageCorrupt` if the file cannot be parsed, or `Io` if it
    /// cannot be read.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let tickets = jsonfile::load(path)?;
        let saved_next = jsonfile::load_sequence(path)?;
        Ok(Self::from_tickets(path, tickets, saved_next))
    }

    fn from_tickets(path: &Path, tickets: Vec<Ticket>, saved_next: Option<u64>) -> Self {
        let next_number = first_free_number(&tickets).max(saved_next.unwrap_or(0));
        Self {
            tickets,
            path: path.to_path_buf(),
            next_number,
        }
    }

    /// The backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the whole mapping to the backing file, and the ID counter to
    /// its sidecar.
    ///
    /// # Errors
    ///
    /// Returns `StorageWriteFailed` if the file cannot be written.
    pub fn save(&self) -> Result<()> {
        // Counter first: a counter ahead of the tickets only skips numbers.
        jsonfile::save_sequence(&self.path, self.next_number)?;
        jsonfile::save(&self.path, &self.tickets)
    }

    /// Re-read the backing file, as a fresh process would see it.
    ///
    /// # Errors
    ///
    /// Same as [`TicketStore::open`].
    pub fn reload(&self) -> Result<Self> {
        Self::open(&self.path)
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// All tickets in insertion order.
    #[must_use]
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    // ========================================================================
    // Mutations (controller only)
    // ========================================================================

    /// Hand out the next ticket ID.
    ///
    /// IDs come from a counter that starts above the ticket count, the
    /// largest numeric ID on file and the saved counter, and skips anything
    /// still in use.
    pub(crate) fn allocate_id(&mut self) -> String {
        let mut number = self.next_number;
        while self.contains(&number.to_string()) {
            number += 1;
        }
        self.next_number = number + 1;
        number.to_string()
    }

    /// Append a ticket. The ID must come from [`TicketStore::allocate_id`].
    pub(crate) fn insert(&mut self, ticket: Ticket) {
        debug_assert!(!self.contains(&ticket.id), "duplicate id {}", ticket.id);
        self.tickets.push(ticket);
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut Ticket> {
        self.tickets.iter_mut().find(|t| t.id == id)
    }

    pub(crate) fn remove(&mut self, id: &str) -> Option<Ticket> {
        let pos = self.tickets.iter().position(|t| t.id == id)?;
        Some(self.tickets.remove(pos))
    }

    pub(crate) fn snapshot(&self) -> Snapshot {
        Snapshot {
            tickets: self.tickets.clone(),
            next_number: self.next_number,
        }
    }

    pub(crate) fn restore(&mut self, snapshot: Snapshot) {
        self.tickets = snapshot.tickets;
        self.next_number = snapshot.next_number;
    }
}

impl PartialEq for TicketStore {
    /// Stores are equal when they hold the same tickets in the same order.
    fn eq(&self, other: &Self) -> bool {
        self.tickets == other.tickets
    }
}

fn first_free_number(tickets: &[Ticket]) -> u64 {
    let highest = tickets
        .iter()
        .filter_map(|t| t.id.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    let count = u64::try_from(tickets.len()).unwrap_or(u64::MAX);
    highest.max(count).saturating_add(1)
}
