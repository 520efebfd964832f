//! Business logic sitting between the controllers and the repositories.
//!
//! Services own transaction boundaries: every mutation runs inside a transaction that is
//! only committed once all of its writes succeed.

pub mod area;
pub mod artist;
pub mod listing;
pub mod show;
pub mod venue;

use crate::model::form::FormErrors;

/// Result of a mutation the user can be told about.
#[derive(Debug, PartialEq)]
pub enum CommitOutcome<T> {
    /// The transaction was committed.
    Committed(T),
    /// The submission refers to records that do not exist; nothing was written.
    Rejected(FormErrors),
    /// A write or the commit failed and the transaction was rolled back.
    RolledBack,
}
