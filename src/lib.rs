//! # rowcore - In-Memory Record Model for a Relational Engine
//!
//! rowcore is the foundational data model a storage engine, access methods,
//! and a query executor build on: the typed schema descriptor for a row
//! shape, and the record that carries values conforming to one schema plus
//! a back-reference to the row's on-disk location.
//!
//! ## Quick Start
//!
//! ```
//! use rowcore::{DataType, Record, RecordId, Schema, Value};
//! use std::sync::Arc;
//!
//! let schema = Arc::new(Schema::with_names(
//!     &[DataType::Int4, DataType::Char],
//!     &["id", "name"],
//! )?);
//!
//! let mut record = Record::new(Arc::clone(&schema));
//! record.set_field(0, Value::Int4(7))?;
//! record.set_field(1, Value::Char("alice".into()))?;
//!
//! assert_eq!(record.get_field(0)?, &Value::Int4(7));
//! assert_eq!(schema.index_of("name")?, 1);
//! assert_eq!(schema.byte_size(), 132);
//!
//! // the storage layer attaches the location after placing the record
//! record.set_location(RecordId::new(4, 0));
//! # Ok::<(), rowcore::Error>(())
//! ```
//!
//! ## Architecture
//!
//! This crate is the record-model layer of a larger engine:
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │     Query Execution (external)       │  get_field / iter / merge
//! ├─────────────────────────────────────┤
//! │  Storage & Access Methods (external) │  byte_size / RecordId
//! ├─────────────────────────────────────┤
//! │      Record Model (this crate)       │  Schema + Record
//! └─────────────────────────────────────┘
//! ```
//!
//! A catalog constructs a [`Schema`] once; every record of that shape then
//! shares the descriptor by reference. The storage layer fills record slots
//! from decoded bytes, attaches a [`RecordId`] after placement, and uses
//! [`Schema::byte_size`] to compute per-record offsets within a page. The
//! executor reads slots to evaluate predicates and calls [`Schema::merge`]
//! when combining the shapes of joined inputs.
//!
//! ## Concurrency
//!
//! Schemas are immutable after construction and safe to share read-only
//! across threads. Records are single-owner mutable state; concurrent
//! mutation must be serialized by the caller.
//!
//! ## Module Overview
//!
//! - [`types`]: `DataType` discriminants with fixed byte widths, `Value`
//! - [`records`]: `Schema` descriptors, `Record` containers, `RecordId`
//! - [`error`]: typed error kinds for every contract violation

pub mod error;
pub mod records;
pub mod types;

pub use error::{Error, Result};
pub use records::{ColumnDef, Record, RecordId, Schema};
pub use types::{DataType, Value, CHAR_WIDTH};
