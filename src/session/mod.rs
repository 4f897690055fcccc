//! Session state machine: name entry, then play.
//!
//! Data flows one way: the shell feeds an [`Event`] to [`reduce`], takes
//! the returned [`Session`], and renders its [`Snapshot`].

mod event;
mod name_entry;
mod reducer;
mod settings;
mod snapshot;
mod state;

pub use event::{Edit, Event};
pub use name_entry::{Confirmation, LAST_FIELD, NameEntry};
pub use reducer::{Flow, Step, reduce};
pub use settings::{DEFAULT_NAME_CHAR_LIMIT, SessionSettings};
pub use snapshot::Snapshot;
pub use state::{Phase, PhaseKind, Session};
