//! # Record Schemas
//!
//! The binary layout of every section is positional and carries no type tags.
//! Each format version therefore publishes its field order as plain data: a
//! slice of [`Field`]s per section (see `format::v1007::schema` and
//! `format::v0701::schema`).
//!
//! [`decode_fields`] walks raw entry bytes with such a table and produces a
//! generic [`Record`]. It is independent of the typed segment readers, which
//! makes it useful for inspecting unknown archives and for checking that the
//! writers emit exactly the tabled layout.


use std::io::Read;

use crate::codec::{ReadFormatExt, MAX_PREALLOCATION};
use crate::reader::ReaderError;

/// Wire type of a field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldType {
    /// 4-byte signed integer
    Int32,
    /// 8-byte signed integer
    Int64,
    /// 4-byte float
    Float32,
    /// 8-byte float
    Float64,
    /// Single byte, 0 or 1
    Boolean,
    /// Length-prefixed UTF-16 string
    String,
    /// Fields inlined without a prefix
    Group(&'static [Field]),
    /// int32 count followed by that many groups
    List(&'static [Field]),
    /// Boolean flag followed by the group when set
    Optional(&'static [Field]),
}

/// A named field of a record
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    /// Field name
    pub name: &'static str,
    /// Wire type
    pub field_type: FieldType,
}

impl Field {
    /// Create a field
    pub const fn new(name: &'static str, field_type: FieldType) -> Self {
        Self { name, field_type }
    }

    /// Fixed encoded size in bytes, if the field has no variable-length parts
    pub fn fixed_size(&self) -> Option<usize> {
        match self.field_type {
            FieldType::Int32 | FieldType::Float32 => Some(4),
            FieldType::Int64 | FieldType::Float64 => Some(8),
            FieldType::Boolean => Some(1),
            FieldType::Group(fields) => fixed_size(fields),
            FieldType::String | FieldType::List(_) | FieldType::Optional(_) => None,
        }
    }
}

/// Fixed encoded size of a field sequence, if it has no variable-length parts
pub fn fixed_size(fields: &[Field]) -> Option<usize> {
    fields.iter().map(Field::fixed_size).sum()
}

/// A decoded field value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// int32
    Int32(i32),
    /// int64
    Int64(i64),
    /// float32
    Float32(f32),
    /// float64
    Float64(f64),
    /// boolean
    Boolean(bool),
    /// string
    String(String),
    /// inlined group
    Group(Record),
    /// repeated group
    List(Vec<Record>),
    /// optional group
    Optional(Option<Record>),
}

/// Field values in schema order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    /// (field name, value) pairs
    pub fields: Vec<(&'static str, Value)>,
}

impl Record {
    /// Value of a field by name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }

    /// Field names in decode order
    pub fn names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|(name, _)| *name).collect()
    }

    /// int32 field
    pub fn int(&self, name: &str) -> Option<i32> {
        match self.get(name) {
            Some(Value::Int32(value)) => Some(*value),
            _ => None,
        }
    }

    /// float32 field
    pub fn float(&self, name: &str) -> Option<f32> {
        match self.get(name) {
            Some(Value::Float32(value)) => Some(*value),
            _ => None,
        }
    }

    /// float64 field
    pub fn double(&self, name: &str) -> Option<f64> {
        match self.get(name) {
            Some(Value::Float64(value)) => Some(*value),
            _ => None,
        }
    }

    /// string field
    pub fn string(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(Value::String(value)) => Some(value),
            _ => None,
        }
    }

    /// list field
    pub fn list(&self, name: &str) -> Option<&[Record]> {
        match self.get(name) {
            Some(Value::List(records)) => Some(records),
            _ => None,
        }
    }

    /// group field
    pub fn group(&self, name: &str) -> Option<&Record> {
        match self.get(name) {
            Some(Value::Group(record)) => Some(record),
            _ => None,
        }
    }
}

/// Decode one record following a field table
pub fn decode_fields<R: Read>(input: &mut R, fields: &[Field]) -> Result<Record, ReaderError> {
    let mut record = Record {
        fields: Vec::with_capacity(fields.len()),
    };
    for field in fields {
        let value = decode_value(input, field.field_type)?;
        record.fields.push((field.name, value));
    }
    Ok(record)
}

fn decode_value<R: Read>(input: &mut R, field_type: FieldType) -> Result<Value, ReaderError> {
    let value = match field_type {
        FieldType::Int32 => Value::Int32(input.read_int()?),
        FieldType::Int64 => Value::Int64(input.read_long()?),
        FieldType::Float32 => Value::Float32(input.read_float()?),
        FieldType::Float64 => Value::Float64(input.read_double()?),
        FieldType::Boolean => Value::Boolean(input.read_boolean()?),
        FieldType::String => Value::String(input.read_string()?),
        FieldType::Group(fields) => Value::Group(decode_fields(input, fields)?),
        FieldType::List(fields) => {
            let count = input.read_count()?;
            let mut records = Vec::with_capacity(count.min(MAX_PREALLOCATION));
            for _ in 0..count {
                records.push(decode_fields(input, fields)?);
            }
            Value::List(records)
        }
        FieldType::Optional(fields) => {
            if input.read_boolean()? {
                Value::Optional(Some(decode_fields(input, fields)?))
            } else {
                Value::Optional(None)
            }
        }
    };
    Ok(value)
}
