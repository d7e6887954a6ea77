//! Record shape types. Pure data; no operator logic here.
//!
//! A `Record` is an ordered list of named fields. Field order is insertion
//! order and is what error messages enumerate when a key cannot be found.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    Null,
    Boolean,
    /// Integers and floats alike.
    Number,
    Utf8,
    List,
    Record,
}

impl DataType {
    pub fn is_sequence(&self) -> bool {
        matches!(self, DataType::List)
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DataType::Null => "null",
            DataType::Boolean => "boolean",
            DataType::Number => "number",
            DataType::Utf8 => "utf8",
            DataType::List => "list",
            DataType::Record => "record",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub value: Value,
}

impl Field {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn data_type(&self) -> DataType {
        self.value.data_type()
    }
}

/// Serializes as a plain JSON object in field order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(into = "serde_json::Value", try_from = "serde_json::Value")]
pub struct Record {
    pub fields: Vec<Field>,
}

impl Record {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Builder-style insert. An existing field of the same name is replaced
    /// in place so field order stays stable.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        match self.index_of(&name) {
            Some(idx) => self.fields[idx].value = value,
            None => self.fields.push(Field { name, value }),
        }
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.iter().find(|f| f.name == name).map(|f| &f.value)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Records are equal when they carry the same field names with equal values,
/// regardless of field order.
impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.fields.len() == other.fields.len()
            && self
                .fields
                .iter()
                .all(|f| other.get(&f.name).is_some_and(|v| *v == f.value))
    }
}

impl From<Record> for serde_json::Value {
    fn from(rec: Record) -> Self {
        serde_json::Value::from(&Value::Record(rec))
    }
}

impl TryFrom<serde_json::Value> for Record {
    type Error = Error;

    fn try_from(json: serde_json::Value) -> Result<Self> {
        match Value::from(json) {
            Value::Record(rec) => Ok(rec),
            other => Err(Error::Value(format!(
                "expected a JSON object, got {}",
                other.data_type()
            ))),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut rec = Record::default();
        for (k, v) in iter {
            rec.insert(k, v);
        }
        rec
    }
}
