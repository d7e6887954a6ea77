//! The `Element` seam: how operators look inside a sequence element.
//!
//! Records expose their own field names and values. Primitives expose none
//! and are compared as a whole through `as_value`.

use std::borrow::Cow;

use crate::schema::Record;
use crate::types::Value;

pub trait Element {
    /// Own field names in declaration order. Empty for primitives.
    fn field_names(&self) -> Vec<&str> {
        Vec::new()
    }

    fn field(&self, _name: &str) -> Option<&Value> {
        None
    }

    /// The element as a single value, used whenever it has no fields.
    fn as_value(&self) -> Cow<'_, Value>;

    fn has_fields(&self) -> bool {
        !self.field_names().is_empty()
    }
}

impl Element for Value {
    fn field_names(&self) -> Vec<&str> {
        match self {
            Value::Record(rec) => rec.names().collect(),
            _ => Vec::new(),
        }
    }

    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }

    fn as_value(&self) -> Cow<'_, Value> {
        Cow::Borrowed(self)
    }
}

impl Element for Record {
    fn field_names(&self) -> Vec<&str> {
        self.names().collect()
    }

    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }

    fn as_value(&self) -> Cow<'_, Value> {
        Cow::Owned(Value::Record(self.clone()))
    }
}

macro_rules! primitive_element {
    ($ty:ty) => {
        impl Element for $ty {
            fn as_value(&self) -> Cow<'_, Value> {
                Cow::Owned(Value::from(self.clone()))
            }
        }
    };
}

primitive_element!(bool);
primitive_element!(i32);
primitive_element!(i64);
primitive_element!(f64);
primitive_element!(String);

impl Element for &str {
    fn as_value(&self) -> Cow<'_, Value> {
        Cow::Owned(Value::from(*self))
    }
}
