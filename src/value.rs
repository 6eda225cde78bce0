//! Bound value model.
//!
//! A [`Value`] is destined to replace one positional `?` placeholder at
//! execution time; it is never inlined into the SQL text. [`Bind`] is the
//! zero/one/many slot a fragment carries its values in.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A value for a positional placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// SQL NULL
    Null,
    /// Boolean
    Bool(bool),
    /// Signed integer
    Int(i64),
    /// Unsigned integer
    UInt(u64),
    /// Double-precision float
    Float(f64),
    /// Text
    Text(String),
    /// Raw bytes (BLOB/VARBINARY)
    Bytes(Vec<u8>),
    /// Fixed-point decimal
    Decimal(Decimal),
    /// UUID value
    Uuid(Uuid),
    /// Timestamp with time zone
    DateTime(DateTime<Utc>),
    /// Calendar date
    Date(NaiveDate),
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::UInt(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::Text(s) => write!(f, "'{}'", s),
            Value::Bytes(b) => write!(f, "<{} bytes>", b.len()),
            Value::Decimal(d) => write!(f, "{}", d),
            Value::Uuid(u) => write!(f, "'{}'", u),
            Value::DateTime(t) => write!(f, "'{}'", t),
            Value::Date(d) => write!(f, "'{}'", d),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::UInt(n as u64)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::UInt(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Bytes(b)
    }
}

impl From<Decimal> for Value {
    fn from(d: Decimal) -> Self {
        Value::Decimal(d)
    }
}

impl From<Uuid> for Value {
    fn from(u: Uuid) -> Self {
        Value::Uuid(u)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(t: DateTime<Utc>) -> Self {
        Value::DateTime(t)
    }
}

impl From<NaiveDate> for Value {
    fn from(d: NaiveDate) -> Self {
        Value::Date(d)
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Value::UInt(u)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::Text(s),
            // Arrays and objects bind as serialized JSON text.
            other => Value::Text(other.to_string()),
        }
    }
}

/// The bound-value slot attached to one fragment: nothing, a scalar, or
/// an ordered sequence (one value per `?` in the fragment).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum Bind {
    /// No bound values
    #[default]
    None,
    /// Single scalar
    One(Value),
    /// Ordered sequence, flattened at render time
    Many(Vec<Value>),
}

impl Bind {
    /// Number of values this slot contributes to the argument list.
    pub fn len(&self) -> usize {
        match self {
            Bind::None => 0,
            Bind::One(_) => 1,
            Bind::Many(values) => values.len(),
        }
    }

    /// Check if the slot carries no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append the carried values to `args`, preserving order.
    pub(crate) fn append_to(&self, args: &mut Vec<Value>) {
        match self {
            Bind::None => {}
            Bind::One(value) => args.push(value.clone()),
            Bind::Many(values) => args.extend(values.iter().cloned()),
        }
    }
}
