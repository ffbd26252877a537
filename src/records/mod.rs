//! # Schema Descriptors and Records
//!
//! This module provides the in-memory row model: `Schema` describes the
//! shape of a row as an ordered list of typed, optionally named columns,
//! and `Record` carries one value slot per column plus the record's
//! storage location once it has been placed.
//!
//! ## Data Flow
//!
//! A schema is constructed once (by a catalog or access-method layer) and
//! shared by reference among every record of that shape. A record is
//! created against a schema with all slots unset, filled positionally, and
//! later read back by the storage and execution layers:
//!
//! ```text
//! catalog ──builds──> Schema (immutable, Arc-shared)
//!                        │
//!          ┌─────────────┼─────────────┐
//!       Record         Record        Record   (one slot per field)
//!          │
//!   storage layer attaches RecordId after placement
//! ```
//!
//! ## Module Structure
//!
//! - `schema`: `ColumnDef` and `Schema` with cached row byte size
//! - `record`: `Record` value container and `RecordId` location handle

pub mod record;
pub mod schema;


pub use record::{Record, RecordId};
pub use schema::{ColumnDef, Schema};
