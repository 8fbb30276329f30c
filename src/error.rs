//! Error kinds surfaced across the crate (see spec §7: error handling design).
//!
//! The core itself almost never returns an error: inputs to operators are
//! trusted (pre-validated by the caller) and a malformed delta between
//! operators is a bug in the upstream operator, not a runtime condition.
//! `Error` exists for the handful of cases spec §7 calls out explicitly:
//! an operator refusing a non-canonical input it cannot recover from, and
//! the CRUD-style collaborator operations (`insert`/`update`/`remove`) that
//! *do* need to surface "duplicate key" / "missing key" to their caller.
//!
//! Weight overflow is deliberately not a variant here: per spec §7 it is a
//! programmer error, not a recoverable condition, and is handled by
//! [`crate::algebra::checked_int::CheckedInt`] panicking instead.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An operator was handed a Z-set that was not in canonical form where
    /// canonical form is required, and it cannot safely recover. Callers
    /// should `reset()` the offending stateful operator and abort the
    /// current batch of processing.
    InvariantViolation(String),
    /// A collaborator-facing insert found an existing record for the key.
    /// The core's own operators never enforce uniqueness; this is raised by
    /// the CRUD collaborator shim, not by `StatefulJoin`/`StatefulTopK`.
    DuplicateKey(String),
    /// A collaborator-facing update/remove found no record for the key.
    KeyNotFound(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvariantViolation(msg) => write!(f, "invariant violation: {msg}"),
            Error::DuplicateKey(key) => write!(f, "duplicate key: {key}"),
            Error::KeyNotFound(key) => write!(f, "key not found: {key}"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
