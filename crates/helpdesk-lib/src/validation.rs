//! Validation helpers for new tickets.
//!
//! These routines return structured validation errors without touching the
//! store.

use crate::error::ValidationError;
use crate::model::Priority;
use crate::query::NewTicket;

/// Validates the fields a ticket needs at creation.
pub struct TicketValidator;

impl TicketValidator {
    /// Validate a new ticket and return all validation errors found.
    ///
    /// Text fields must be non-empty and a priority must be chosen. Values
    /// are not trimmed, so whitespace counts as content.
    ///
    /// # Errors
    ///
    /// Returns a `Vec<ValidationError>` if any field is missing.
    pub fn validate(new: &NewTicket) -> Result<Priority, Vec<ValidationError>> {
        let mut errors = Vec::new();

        for (field, value) in [
            ("first_name", &new.first_name),
            ("last_name", &new.last_name),
            ("issue", &new.issue),
        ] {
            if value.is_empty() {
                errors.push(ValidationError::new(field, "cannot be empty"));
            }
        }

        match new.priority {
            Some(priority) if errors.is_empty() => Ok(priority),
            Some(_) => Err(errors),
            None => {
                errors.push(ValidationError::new("priority", "cannot be empty"));
                Err(errors)
            }
        }
    }
}
