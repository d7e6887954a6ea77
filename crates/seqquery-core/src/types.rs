//! Dynamic values flowing through the operators.
//!
//! `Value` is the element model for record sequences. Scalars are the
//! "primitive" shape, `Record` is the record shape and `List` is the only
//! sequence-typed value.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::schema::{DataType, Record};

/// A dynamically typed value.
///
/// `PartialEq` is strict equality: same kind and same value. Numbers are one
/// kind, so `Int(1) == Float(1.0)`; `Float(NaN)` never equals anything and
/// `0.0 == -0.0`.
///
/// Serializes as plain JSON (`1`, `"a"`, `{"k": [1, 2]}`), not as a tagged
/// enum.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "serde_json::Value", into = "serde_json::Value")]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Record(Record),
}

impl Value {
    pub fn data_type(&self) -> DataType {
        match self {
            Value::Null => DataType::Null,
            Value::Bool(_) => DataType::Boolean,
            Value::Int(_) | Value::Float(_) => DataType::Number,
            Value::Str(_) => DataType::Utf8,
            Value::List(_) => DataType::List,
            Value::Record(_) => DataType::Record,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Value::List(_))
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(rec) => Some(rec),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Field lookup; `None` for anything that is not a record.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.as_record().and_then(|r| r.get(name))
    }

    /// Three-way comparison used by ordering and min/max.
    ///
    /// Nulls sort first. Ints and floats compare numerically, NaN sorts after
    /// every other number. Mixed types order by type rank.
    pub fn total_cmp(&self, other: &Value) -> Ordering {
        value_cmp(self, other)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        use Value::*;

        match (self, other) {
            (Null, Null) => true,
            (Bool(x), Bool(y)) => x == y,
            (Int(x), Int(y)) => x == y,
            (Float(x), Float(y)) => x == y,
            (Int(i), Float(f)) | (Float(f), Int(i)) => int_eq_float(*i, *f),
            (Str(x), Str(y)) => x == y,
            (List(x), List(y)) => x == y,
            (Record(x), Record(y)) => x == y,
            _ => false,
        }
    }
}

/// Exact numeric equality: `f` must be integral and convert back to `i`
/// without rounding.
pub(crate) fn int_eq_float(i: i64, f: f64) -> bool {
    integral_f64(f) == Some(i)
}

/// `f` as an `i64` when it holds an integer in range; `None` otherwise
/// (fractions, NaN, infinities, out of range).
pub(crate) fn integral_f64(f: f64) -> Option<i64> {
    // 2^63 is exactly representable; anything at or above it overflows i64.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if f.is_finite() && f.fract() == 0.0 && f >= -LIMIT && f < LIMIT {
        Some(f as i64)
    } else {
        None
    }
}

fn value_cmp(a: &Value, b: &Value) -> Ordering {
    use Value::*;

    match (a, b) {
        (Null, Null) => Ordering::Equal,
        (Null, _) => Ordering::Less,
        (_, Null) => Ordering::Greater,
        (Bool(x), Bool(y)) => x.cmp(y),
        (Int(x), Int(y)) => x.cmp(y),
        (Int(x), Float(y)) => float_cmp(*x as f64, *y),
        (Float(x), Int(y)) => float_cmp(*x, *y as f64),
        (Float(x), Float(y)) => float_cmp(*x, *y),
        (Str(x), Str(y)) => x.cmp(y),
        (List(x), List(y)) => {
            for (l, r) in x.iter().zip(y.iter()) {
                match value_cmp(l, r) {
                    Ordering::Equal => continue,
                    other => return other,
                }
            }
            x.len().cmp(&y.len())
        }
        // Records have no natural order.
        (Record(_), Record(_)) => Ordering::Equal,
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

fn float_cmp(x: f64, y: f64) -> Ordering {
    if x.is_nan() && y.is_nan() {
        Ordering::Equal
    } else if x.is_nan() {
        Ordering::Greater
    } else if y.is_nan() {
        Ordering::Less
    } else {
        x.partial_cmp(&y).unwrap_or(Ordering::Equal)
    }
}

/// Assign a numeric order to value types for mixed-type comparisons.
pub(crate) fn type_rank(v: &Value) -> u8 {
    match v {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Int(_) | Value::Float(_) => 2,
        Value::Str(_) => 3,
        Value::List(_) => 4,
        Value::Record(_) => 5,
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<Record> for Value {
    fn from(v: Record) -> Self {
        Value::Record(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

/// JSON objects become records (in the map's iteration order), arrays become
/// lists. Integers that fit `i64` stay integral; everything else numeric is a
/// float.
impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        use serde_json::Value as J;

        match v {
            J::Null => Value::Null,
            J::Bool(b) => Value::Bool(b),
            J::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            J::String(s) => Value::Str(s),
            J::Array(items) => Value::List(items.into_iter().map(Value::from).collect()),
            J::Object(map) => Value::Record(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect()),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(v: Value) -> Self {
        serde_json::Value::from(&v)
    }
}

impl From<&Value> for serde_json::Value {
    fn from(v: &Value) -> Self {
        use serde_json::Value as J;

        match v {
            Value::Null => J::Null,
            Value::Bool(b) => J::Bool(*b),
            Value::Int(i) => J::from(*i),
            Value::Float(f) => serde_json::Number::from_f64(*f)
                .map(J::Number)
                .unwrap_or(J::Null),
            Value::Str(s) => J::String(s.clone()),
            Value::List(items) => J::Array(items.iter().map(J::from).collect()),
            Value::Record(rec) => J::Object(
                rec.fields
                    .iter()
                    .map(|f| (f.name.clone(), J::from(&f.value)))
                    .collect(),
            ),
        }
    }
}

impl Value {
    /// Convert a JSON array into a list of values; any other JSON value
    /// becomes a single-element list.
    pub fn list_from_json(v: serde_json::Value) -> Vec<Value> {
        match v {
            serde_json::Value::Array(items) => items.into_iter().map(Value::from).collect(),
            other => vec![Value::from(other)],
        }
    }

    /// Parse JSON text into a value.
    pub fn parse_json(text: &str) -> crate::error::Result<Value> {
        let json: serde_json::Value = serde_json::from_str(text)?;
        Ok(Value::from(json))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", serde_json::Value::from(self))
    }
}
