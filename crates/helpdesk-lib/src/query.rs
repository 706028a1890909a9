//! Input and filter types for ticket operations.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::{Priority, Status, Ticket};

/// Field values for a new ticket, as collected by the shell.
///
/// `priority` is optional so that an unselected priority is reported as a
/// validation error alongside any empty text fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTicket {
    pub first_name: String,
    pub last_name: String,
    pub issue: String,
    pub priority: Option<Priority>,
}

impl NewTicket {
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        issue: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            issue: issue.into(),
            priority: Some(priority),
        }
    }
}

/// Replacement values for the four mutable fields of a ticket.
///
/// Every field is written; there is no "leave unchanged" state. Shells that
/// want partial edits start from [`TicketEdit::from_ticket`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketEdit {
    pub first_name: String,
    pub last_name: String,
    pub issue: String,
    pub priority: Priority,
}

impl TicketEdit {
    /// Pre-fill an edit with the ticket's current values.
    #[must_use]
    pub fn from_ticket(ticket: &Ticket) -> Self {
        Self {
            first_name: ticket.first_name.clone(),
            last_name: ticket.last_name.clone(),
            issue: ticket.issue.clone(),
            priority: ticket.priority,
        }
    }
}

/// Filter options for listing tickets.
#[derive(Debug, Clone, Default)]
pub struct ListFilters {
    pub status: Option<Status>,
    pub priority: Option<Priority>,
}

impl ListFilters {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.status.is_none() && self.priority.is_none()
    }

    #[must_use]
    pub fn matches(&self, ticket: &Ticket) -> bool {
        self.status.is_none_or(|s| ticket.status == s)
            && self.priority.is_none_or(|p| ticket.priority == p)
    }
}

/// Aggregate counts over the whole store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub total: usize,
    pub open: usize,
    pub closed: usize,
    /// Every priority is present, zero counts included.
    pub by_priority: BTreeMap<Priority, usize>,
}

impl Statistics {
    #[must_use]
    pub fn from_tickets<'a>(tickets: impl IntoIterator<Item = &'a Ticket>) -> Self {
        let mut stats = Self {
            by_priority: Priority::ALL.iter().map(|p| (*p, 0)).collect(),
            ..Self::default()
        };
        for ticket in tickets {
            stats.total += 1;
            match ticket.status {
                Status::Open => stats.open += 1,
                Status::Closed => stats.closed += 1,
            }
            *stats.by_priority.entry(ticket.priority).or_insert(0) += 1;
        }
        stats
    }
}
