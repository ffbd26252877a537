//! # Record - Mutable Row Container
//!
//! This module provides `Record`, a mutable row of values shaped by exactly
//! one [`Schema`], and `RecordId`, the opaque page/slot coordinates the
//! storage layer attaches once a record has been placed.
//!
//! ## Record Internals
//!
//! - `schema`: shared descriptor (`Arc`); many records reference one schema
//! - `values`: one slot per schema field, `Value::Null` until written
//! - `location`: `None` until the storage layer places the record
//!
//! ## Slot Discipline
//!
//! `values.len() == schema.field_count()` holds at all times, and a set
//! slot's kind always matches the type declared at its position. Both
//! invariants are enforced at the setter: a rejected write leaves the slot
//! untouched.
//!
//! ## Thread Safety
//!
//! A record is single-owner mutable state. Shared read access is safe; any
//! mutation requires `&mut` and must be serialized by the caller (typically
//! the storage layer holding the enclosing page latch).

use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::records::schema::Schema;
use crate::types::Value;

/// Opaque location of a stored record: page number and slot within the page.
///
/// Assigned by the storage layer after placement; this core never interprets
/// the coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId {
    page_no: u32,
    slot: u16,
}

impl RecordId {
    /// Creates a record id from page/slot coordinates.
    pub fn new(page_no: u32, slot: u16) -> Self {
        Self { page_no, slot }
    }

    /// Returns the page number.
    pub fn page_no(self) -> u32 {
        self.page_no
    }

    /// Returns the slot within the page.
    pub fn slot(self) -> u16 {
        self.slot
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.page_no, self.slot)
    }
}

/// A mutable row of values conforming to one schema.
#[derive(Debug, Clone)]
pub struct Record {
    schema: Arc<Schema>,
    values: Vec<Value>,
    location: Option<RecordId>,
}

impl Record {
    /// Creates a record bound to `schema` with every slot unset.
    pub fn new(schema: Arc<Schema>) -> Self {
        let values = vec![Value::Null; schema.field_count()];
        Self {
            schema,
            values,
            location: None,
        }
    }

    /// Returns the bound schema.
    ///
    /// The descriptor is immutable, so the reference is safe to hold while
    /// other records share the same schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Returns the storage location, or `None` if the record has not been
    /// placed.
    pub fn location(&self) -> Option<RecordId> {
        self.location
    }

    /// Attaches the storage location. Called by the storage layer after
    /// placement.
    pub fn set_location(&mut self, location: RecordId) {
        self.location = Some(location);
    }

    /// Detaches the storage location. Called when the record is removed
    /// from storage.
    pub fn clear_location(&mut self) {
        self.location = None;
    }

    /// Writes `value` into the slot at `index`.
    ///
    /// Writing `Value::Null` clears the slot back to unset; any other value
    /// must match the type declared at that position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index` is not a valid field
    /// position, or [`Error::TypeMismatch`] if the value's kind differs
    /// from the declared type. The slot is unchanged on failure.
    pub fn set_field(&mut self, index: usize, value: Value) -> Result<()> {
        let expected = self.schema.field_type(index)?;
        if let Some(actual) = value.data_type() {
            if actual != expected {
                return Err(Error::TypeMismatch {
                    index,
                    expected,
                    actual,
                });
            }
        }
        self.values[index] = value;
        Ok(())
    }

    /// Returns the value at `index`. Unset slots yield `Value::Null`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index` is not a valid field
    /// position.
    pub fn get_field(&self, index: usize) -> Result<&Value> {
        if index >= self.values.len() {
            return Err(Error::IndexOutOfRange {
                index,
                field_count: self.values.len(),
            });
        }
        Ok(&self.values[index])
    }

    /// Returns all value slots in field order. Unset slots are `Null`.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Returns an iterator over the value slots in field order.
    ///
    /// The iterator is finite and can be restarted by calling `iter` again.
    /// Unset slots yield `Value::Null`.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }

    /// Renders the record's values as a single tab-separated line terminated
    /// by a newline. Unset slots render empty.
    ///
    /// This is a debugging/export aid; it emits the values, not the schema.
    pub fn render(&self) -> String {
        format!("{}\n", self)
    }

    /// Replaces the bound schema with `schema`.
    ///
    /// Existing slot values are retained positionally. A retained value
    /// whose kind no longer matches the type declared at its position in
    /// the new schema is reset to unset; the call itself only fails on a
    /// field-count mismatch.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SchemaMismatch`] if the new schema's field count
    /// differs from the record's. The record is unchanged on failure.
    pub fn rebind(&mut self, schema: Arc<Schema>) -> Result<()> {
        if schema.field_count() != self.values.len() {
            return Err(Error::SchemaMismatch {
                record_fields: self.values.len(),
                schema_fields: schema.field_count(),
            });
        }
        for (slot, column) in self.values.iter_mut().zip(schema.columns()) {
            if !slot.matches_type(column.data_type) {
                *slot = Value::Null;
            }
        }
        self.schema = schema;
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, "\t")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}
