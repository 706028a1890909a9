//! `helpdesk-lib`: support ticket records backed by one JSON file.
//!
//! The whole ticket mapping lives in memory and is written back in full
//! after every change.
//!
//! # Quick Start
//!
//! ```no_run
//! use helpdesk_lib::{Controller, NewTicket, Priority};
//!
//! let mut desk = Controller::open("tickets.json").unwrap();
//!
//! let ticket = desk
//!     .create(NewTicket::new("Alice", "Smith", "Printer jammed", Priority::High))
//!     .unwrap();
//!
//! desk.close(&ticket.id).unwrap();
//! let found = desk.search(Some("alice"), Some("smith")).unwrap();
//! assert_eq!(found.len(), 1);
//!
//! desk.delete(&ticket.id, |_| true).unwrap();
//! ```

pub mod controller;
pub mod error;
pub mod jsonfile;
pub mod model;
pub mod query;
pub mod store;
pub mod validation;

pub use controller::Controller;
pub use error::{HelpdeskError, Result, ValidationError};
pub use model::{Priority, Status, Ticket};
pub use query::{ListFilters, NewTicket, Statistics, TicketEdit};
pub use store::TicketStore;
