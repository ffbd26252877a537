//! # Runtime Value Representation
//!
//! This module provides `Value`, the tagged runtime representation for a
//! single field. There is one variant per [`DataType`] plus `Null`.
//!
//! ## Value Variants
//!
//! | Variant | Rust Type | Declared type |
//! |---------|-----------|---------------|
//! | Null | - | matches any (unset sentinel) |
//! | Bool | bool | bool |
//! | Int2 | i16 | int2 |
//! | Int4 | i32 | int4 |
//! | Int8 | i64 | int8 |
//! | Float4 | f32 | float4 |
//! | Float8 | f64 | float8 |
//! | Uuid | [u8; 16] | uuid |
//! | Char | String | char |
//!
//! ## The Unset Sentinel
//!
//! `Value::Null` doubles as the unset sentinel: every record slot starts
//! out as `Null`, and reading a never-written slot yields `Null` rather
//! than an error. A `Null` matches every declared type, so writing it into
//! a slot clears that slot back to unset.
//!
//! ## Text Rendering
//!
//! `Display` renders the value itself (`Null` as the empty string, uuids in
//! dashed hex). Record rendering joins these per-field renderings; it never
//! emits field names.

use std::fmt;

use super::DataType;

/// A single typed field value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int2(i16),
    Int4(i32),
    Int8(i64),
    Float4(f32),
    Float8(f64),
    Uuid([u8; 16]),
    Char(String),
}

impl Value {
    /// Returns the declared type this value's kind corresponds to, or
    /// `None` for `Null`.
    pub fn data_type(&self) -> Option<DataType> {
        match self {
            Value::Null => None,
            Value::Bool(_) => Some(DataType::Bool),
            Value::Int2(_) => Some(DataType::Int2),
            Value::Int4(_) => Some(DataType::Int4),
            Value::Int8(_) => Some(DataType::Int8),
            Value::Float4(_) => Some(DataType::Float4),
            Value::Float8(_) => Some(DataType::Float8),
            Value::Uuid(_) => Some(DataType::Uuid),
            Value::Char(_) => Some(DataType::Char),
        }
    }

    /// Returns true if this value is the unset sentinel.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this value may occupy a slot declared as `ty`.
    ///
    /// `Null` matches every declared type.
    pub fn matches_type(&self, ty: DataType) -> bool {
        match self.data_type() {
            None => true,
            Some(actual) => actual == ty,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int2(n) => write!(f, "{}", n),
            Value::Int4(n) => write!(f, "{}", n),
            Value::Int8(n) => write!(f, "{}", n),
            Value::Float4(n) => write!(f, "{}", n),
            Value::Float8(n) => write!(f, "{}", n),
            Value::Uuid(bytes) => {
                for (i, byte) in bytes.iter().enumerate() {
                    if matches!(i, 4 | 6 | 8 | 10) {
                        write!(f, "-")?;
                    }
                    write!(f, "{:02x}", byte)?;
                }
                Ok(())
            }
            Value::Char(s) => f.write_str(s),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Value::Int2(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int4(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int8(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float4(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float8(v)
    }
}

impl From<[u8; 16]> for Value {
    fn from(v: [u8; 16]) -> Self {
        Value::Uuid(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Char(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Char(v)
    }
}
