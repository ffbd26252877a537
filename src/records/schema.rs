//! # Schema Definition
//!
//! This module provides `ColumnDef` and `Schema`, the descriptor for the
//! shape of a record. A schema is an ordered list of `(type, name)` entries
//! with the total row byte size pre-computed at construction.
//!
//! ## Schema Internals
//!
//! - `columns`: ordered column definitions; order defines positional indices
//! - `byte_size`: sum of the fixed per-type widths, cached at construction
//!
//! ## Immutability and Sharing
//!
//! A schema never changes after construction: there is no mutation API, so
//! one descriptor can be shared by reference (`Arc<Schema>`) among any
//! number of records and concurrent readers. Records that need a different
//! shape are rebound to a new descriptor, never the other way around.
//!
//! ## Equality and Hashing
//!
//! `PartialEq`/`Eq`/`Hash` compare the full ordered `(type, name)` sequence,
//! so a schema can key a map and equal schemas always hash alike. The looser
//! question "do two schemas describe the same positional types?" is answered
//! by [`Schema::same_types`], which ignores names.

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{Error, Result};
use crate::types::DataType;

/// A single `(type, name)` schema entry.
///
/// An empty name marks an anonymous field. Anonymous fields participate in
/// positional access and sizing like any other, but cannot be found by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnDef {
    pub name: String,
    pub data_type: DataType,
}

impl ColumnDef {
    /// Creates a named column definition.
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }

    /// Creates an anonymous column definition.
    pub fn anonymous(data_type: DataType) -> Self {
        Self {
            name: String::new(),
            data_type,
        }
    }

    /// Returns true if this column has no name.
    pub fn is_anonymous(&self) -> bool {
        self.name.is_empty()
    }
}

impl fmt::Display for ColumnDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.data_type, self.name)
    }
}

/// Ordered, immutable descriptor of a row shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Schema {
    columns: Vec<ColumnDef>,
    byte_size: usize,
}

impl Schema {
    /// Creates a schema from column definitions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSchema`] if `columns` is empty.
    pub fn new(columns: Vec<ColumnDef>) -> Result<Self> {
        if columns.is_empty() {
            return Err(Error::InvalidSchema {
                reason: "schema must have at least one field".to_string(),
            });
        }
        let byte_size = columns.iter().map(|c| c.data_type.byte_width()).sum();
        Ok(Self { columns, byte_size })
    }

    /// Creates a schema of anonymous fields from a type list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSchema`] if `types` is empty.
    pub fn from_types(types: &[DataType]) -> Result<Self> {
        Self::new(types.iter().map(|&ty| ColumnDef::anonymous(ty)).collect())
    }

    /// Creates a schema from parallel type and name lists.
    ///
    /// An empty string leaves that field anonymous.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSchema`] if `types` is empty or the lists
    /// have different lengths.
    pub fn with_names(types: &[DataType], names: &[&str]) -> Result<Self> {
        if types.len() != names.len() {
            return Err(Error::InvalidSchema {
                reason: format!(
                    "type list has {} entries but name list has {}",
                    types.len(),
                    names.len()
                ),
            });
        }
        Self::new(
            types
                .iter()
                .zip(names)
                .map(|(&ty, &name)| ColumnDef::new(name, ty))
                .collect(),
        )
    }

    /// Returns the number of fields. Always at least 1.
    pub fn field_count(&self) -> usize {
        self.columns.len()
    }

    /// Returns the name of the field at `index`. Empty for anonymous fields.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index` is not a valid field
    /// position.
    pub fn field_name(&self, index: usize) -> Result<&str> {
        self.check_index(index)?;
        Ok(&self.columns[index].name)
    }

    /// Returns the type of the field at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index` is not a valid field
    /// position.
    pub fn field_type(&self, index: usize) -> Result<DataType> {
        self.check_index(index)?;
        Ok(self.columns[index].data_type)
    }

    /// Returns the column definition at `index`, or `None` out of range.
    pub fn column(&self, index: usize) -> Option<&ColumnDef> {
        self.columns.get(index)
    }

    /// Returns all column definitions in field order.
    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    /// Returns the index of the first field named `name`.
    ///
    /// Lookup is a linear scan in field order; duplicate names are legal and
    /// the first match wins. The empty string never matches, so anonymous
    /// fields are unaddressable by name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NameNotFound`] if no field matches.
    pub fn index_of(&self, name: &str) -> Result<usize> {
        if !name.is_empty() {
            if let Some(index) = self.columns.iter().position(|c| c.name == name) {
                return Ok(index);
            }
        }
        Err(Error::NameNotFound {
            name: name.to_string(),
        })
    }

    /// Returns the total row size in bytes: the sum of each field's fixed
    /// width. Computed once at construction.
    pub fn byte_size(&self) -> usize {
        self.byte_size
    }

    /// Returns a new schema with `self`'s fields followed by `other`'s.
    ///
    /// Neither input is modified. The result's field count is the sum of
    /// the input field counts.
    pub fn merge(&self, other: &Schema) -> Schema {
        let mut columns = Vec::with_capacity(self.columns.len() + other.columns.len());
        columns.extend_from_slice(&self.columns);
        columns.extend_from_slice(&other.columns);
        Schema {
            columns,
            byte_size: self.byte_size + other.byte_size,
        }
    }

    /// Returns true if `other` has the same field count and the same type at
    /// every position, ignoring names.
    ///
    /// Two schemas related this way are interchangeable for sizing and slot
    /// layout. Full equality (`==`) additionally compares names.
    pub fn same_types(&self, other: &Schema) -> bool {
        self.columns.len() == other.columns.len()
            && self
                .columns
                .iter()
                .zip(&other.columns)
                .all(|(a, b)| a.data_type == b.data_type)
    }

    /// Returns an iterator over the column definitions in field order.
    ///
    /// The iterator is finite and can be restarted by calling `iter` again.
    pub fn iter(&self) -> std::slice::Iter<'_, ColumnDef> {
        self.columns.iter()
    }

    /// Returns a stable structural hash of the ordered `(type, name)`
    /// sequence.
    ///
    /// Equal schemas always produce equal hashes, so the value can key
    /// caching structures such as per-shape record pools. Stability holds
    /// within a process; the value is not a persistence format.
    pub fn content_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.columns.hash(&mut hasher);
        hasher.finish()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.columns.len() {
            return Err(Error::IndexOutOfRange {
                index,
                field_count: self.columns.len(),
            });
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Schema {
    type Item = &'a ColumnDef;
    type IntoIter = std::slice::Iter<'a, ColumnDef>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, column) in self.columns.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", column)?;
        }
        Ok(())
    }
}
