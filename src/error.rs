//! # Error Types
//!
//! This module provides the crate-wide `Error` enum and `Result` alias.
//! Every failure in the record model is local and synchronous: an operation
//! either succeeds or returns one of the variants below at the call that
//! violated the contract. Nothing is retried or recovered internally.
//!
//! ## Error Categories
//!
//! | Variant | Raised by |
//! |---------|-----------|
//! | `InvalidSchema` | Schema construction with malformed input |
//! | `IndexOutOfRange` | Positional access outside `[0, field_count())` |
//! | `NameNotFound` | Name lookup with no matching field |
//! | `TypeMismatch` | Setting a value whose kind differs from the declared type |
//! | `SchemaMismatch` | Rebinding a record to a schema with a different field count |
//!
//! ## No Partial Mutation
//!
//! A rejected `set_field` or `rebind` leaves the record in its prior valid
//! state. Callers can rely on this when deciding whether a failure is a bug
//! on their side or a legitimate runtime condition to surface upward.

use crate::types::DataType;
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by schema and record operations.
///
/// Variants carry the context a caller needs to match on the failure and
/// report it without re-deriving state from the schema or record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Schema construction input was malformed (empty type list, or a name
    /// list whose length differs from the type list).
    #[error("invalid schema: {reason}")]
    InvalidSchema { reason: String },

    /// Positional access outside the valid index range.
    #[error("field index {index} out of range for {field_count} fields")]
    IndexOutOfRange { index: usize, field_count: usize },

    /// Name lookup found no matching field.
    #[error("no field named {name:?}")]
    NameNotFound { name: String },

    /// A value's kind does not match the type declared at its position.
    #[error("type mismatch at field {index}: expected {expected}, got {actual}")]
    TypeMismatch {
        index: usize,
        expected: DataType,
        actual: DataType,
    },

    /// Rebind target schema has a different field count than the record.
    #[error("cannot rebind a {record_fields}-field record to a {schema_fields}-field schema")]
    SchemaMismatch {
        record_fields: usize,
        schema_fields: usize,
    },
}
