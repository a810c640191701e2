//! Contains the [`Value`] tagged union: one variant per TOML value kind.

#[cfg(test)]
#[path = "./value_tests.rs"]
mod tests;

use std::fmt;

/// A toml array
pub use crate::array::Array;
/// A toml table: flat list of key-value pairs in lexicographic key order
pub use crate::table::Table;
/// A toml date-time literal
pub use crate::time::DateTime;

/// A parsed TOML value.
///
/// Every value kind has its own variant; dispatch is by matching on the tag.
/// Numeric literals written with a decimal point or exponent parse into
/// [`DescribedFloat`] so their original notation survives serialization,
/// while the special forms `inf` and `nan` parse into plain [`Float`].
///
/// [`Float`]: Value::Float
#[derive(Clone, PartialEq)]
pub enum Value {
    /// A string, already unescaped
    String(String),
    /// A 64-bit signed integer
    Integer(i64),
    /// A 64-bit float; produced only by the special forms `inf` and `nan`
    Float(f64),
    /// A finite float paired with its original textual form
    DescribedFloat(DescribedFloat),
    /// A boolean
    Boolean(bool),
    /// A date-time literal, kept as text
    DateTime(DateTime),
    /// An array
    Array(Array),
    /// A table
    Table(Table),
}

/// A finite float paired with the literal it was parsed from.
///
/// The description is the source text with underscores removed and any
/// leading `+` stripped; parsing it back as an `f64` yields `value` exactly.
#[derive(Clone, PartialEq)]
pub struct DescribedFloat {
    /// The parsed value
    pub value: f64,
    /// The normalized source text
    pub description: String,
}

impl Value {
    /// Gets the type of the value as a string.
    #[inline]
    pub fn type_str(&self) -> &'static str {
        match self {
            Self::String(..) => "string",
            Self::Integer(..) => "integer",
            Self::Float(..) | Self::DescribedFloat(..) => "float",
            Self::Boolean(..) => "boolean",
            Self::DateTime(..) => "date-time",
            Self::Array(..) => "array",
            Self::Table(..) => "table",
        }
    }

    /// Returns `true` if `self` and `other` carry the same variant tag.
    ///
    /// [`Float`](Value::Float) and [`DescribedFloat`](Value::DescribedFloat)
    /// are distinct tags: `[1.5, inf]` is a mixed-type array.
    #[inline]
    pub fn same_kind(&self, other: &Value) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    /// Returns a borrowed string if this is a string value.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns an `i64` if this is an integer value.
    #[inline]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns an `f64` if this is a float value of either flavor.
    #[inline]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::DescribedFloat(d) => Some(d.value),
            _ => None,
        }
    }

    /// Returns a `bool` if this is a boolean value.
    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the literal text if this is a date-time value.
    #[inline]
    pub fn as_datetime(&self) -> Option<&str> {
        match self {
            Self::DateTime(dt) => Some(&dt.text),
            _ => None,
        }
    }

    /// Returns a borrowed array if this is an array value.
    #[inline]
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Returns a borrowed table if this is a table value.
    #[inline]
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Self::Table(t) => Some(t),
            _ => None,
        }
    }

    /// Returns a mutable array reference.
    #[inline]
    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Returns a mutable table reference.
    #[inline]
    pub fn as_table_mut(&mut self) -> Option<&mut Table> {
        match self {
            Self::Table(t) => Some(t),
            _ => None,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => s.fmt(f),
            Self::Integer(i) => i.fmt(f),
            Self::Float(v) => v.fmt(f),
            Self::DescribedFloat(d) => d.fmt(f),
            Self::Boolean(b) => b.fmt(f),
            Self::DateTime(dt) => dt.fmt(f),
            Self::Array(a) => a.fmt(f),
            Self::Table(t) => t.fmt(f),
        }
    }
}

impl fmt::Debug for DescribedFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Value {
    fn serialize<S>(&self, ser: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Value::String(s) => ser.serialize_str(s),
            Value::Integer(i) => ser.serialize_i64(*i),
            Value::Float(f) => ser.serialize_f64(*f),
            Value::DescribedFloat(d) => ser.serialize_f64(d.value),
            Value::Boolean(b) => ser.serialize_bool(*b),
            Value::DateTime(dt) => ser.serialize_str(&dt.text),
            Value::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = ser.serialize_seq(Some(arr.len()))?;
                for ele in arr {
                    seq.serialize_element(ele)?;
                }
                seq.end()
            }
            Value::Table(tab) => {
                use serde::ser::SerializeMap;
                let mut map = ser.serialize_map(Some(tab.len()))?;
                for (k, v) in tab {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Table {
    fn serialize<S>(&self, ser: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = ser.serialize_map(Some(self.len()))?;
        for (k, v) in self {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Array {
    fn serialize<S>(&self, ser: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = ser.serialize_seq(Some(self.len()))?;
        for ele in self {
            seq.serialize_element(ele)?;
        }
        seq.end()
    }
}
