use helpdesk_lib::Ticket;
use serde::Serialize;

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_false(b: &bool) -> bool {
    !*b
}

/// Result of a command that changes (or was asked to change) the store.
#[derive(Debug, Clone, Serialize)]
pub struct ActionOutput<'a> {
    /// `created`, `closed`, `reopened`, `updated` or `deleted`.
    pub action: &'a str,
    pub id: &'a str,
    /// The ticket after the change; for `deleted`, the removed record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket: Option<&'a Ticket>,
    /// Set when the user declined the delete prompt.
    #[serde(skip_serializing_if = "is_false")]
    pub cancelled: bool,
}

impl<'a> ActionOutput<'a> {
    #[must_use]
    pub fn done(action: &'a str, ticket: &'a Ticket) -> Self {
        Self {
            action,
            id: &ticket.id,
            ticket: Some(ticket),
            cancelled: false,
        }
    }

    #[must_use]
    pub const fn cancelled(action: &'a str, id: &'a str) -> Self {
        Self {
            action,
            id,
            ticket: None,
            cancelled: true,
        }
    }
}
