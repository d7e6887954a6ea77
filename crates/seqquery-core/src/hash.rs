//! Stable fingerprints for key values.
//!
//! Values that are strictly equal always share a fingerprint. The converse
//! does not hold (NaN keys share one but are never equal), so callers must
//! confirm a fingerprint hit with `==`.

use blake3::Hasher;

use crate::types::{integral_f64, type_rank, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Hash256(pub [u8; 32]);

impl Hash256 {
    pub fn to_hex(&self) -> String {
        // blake3 hex(32b) is 64 hex chars
        let mut s = String::with_capacity(64);
        for b in &self.0 {
            use std::fmt::Write as _;
            let _ = write!(&mut s, "{:02x}", b);
        }
        s
    }
}

impl std::fmt::Display for Hash256 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

pub fn fingerprint(value: &Value) -> Hash256 {
    let mut h = Hasher::new();
    hash_value(value, &mut h);
    Hash256(h.finalize().into())
}

fn hash_value(value: &Value, hasher: &mut Hasher) {
    hasher.update(&[type_rank(value)]);

    match value {
        Value::Null => {}
        Value::Bool(b) => {
            hasher.update(&[*b as u8]);
        }
        // Numbers that compare equal must hash equal: integral floats take
        // the integer encoding.
        Value::Int(i) => hash_int(*i, hasher),
        Value::Float(f) => match integral_f64(*f) {
            Some(i) => hash_int(i, hasher),
            None => {
                hasher.update(&[1]);
                hasher.update(&f.to_bits().to_le_bytes());
            }
        },
        Value::Str(s) => {
            hasher.update(&(s.len() as u64).to_le_bytes());
            hasher.update(s.as_bytes());
        }
        Value::List(items) => {
            hasher.update(&(items.len() as u64).to_le_bytes());
            for item in items {
                hash_value(item, hasher);
            }
        }
        Value::Record(rec) => {
            // Record equality ignores field order, so hash in name order.
            let mut fields: Vec<_> = rec.fields.iter().collect();
            fields.sort_by(|a, b| a.name.cmp(&b.name));
            hasher.update(&(fields.len() as u64).to_le_bytes());
            for field in fields {
                hasher.update(&(field.name.len() as u64).to_le_bytes());
                hasher.update(field.name.as_bytes());
                hash_value(&field.value, hasher);
            }
        }
    }
}

fn hash_int(i: i64, hasher: &mut Hasher) {
    hasher.update(&[0]);
    hasher.update(&i.to_le_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Record;

    #[test]
    fn equal_values_share_fingerprint() {
        assert_eq!(fingerprint(&Value::Float(0.0)), fingerprint(&Value::Float(-0.0)));
        let a = Record::default().with("x", 1).with("y", "b");
        let b = Record::default().with("y", "b").with("x", 1);
        assert_eq!(
            fingerprint(&Value::Record(a)),
            fingerprint(&Value::Record(b))
        );
    }

    #[test]
    fn equal_numbers_share_fingerprint() {
        assert_eq!(fingerprint(&Value::Int(1)), fingerprint(&Value::Float(1.0)));
        assert_eq!(fingerprint(&Value::Int(0)), fingerprint(&Value::Float(-0.0)));
        assert_ne!(fingerprint(&Value::Int(1)), fingerprint(&Value::Float(1.5)));
        assert_ne!(fingerprint(&Value::Int(1)), fingerprint(&Value::from("1")));
        assert_eq!(fingerprint(&Value::Int(7)).to_hex().len(), 64);
    }
}
