//! Key selectors and their resolution against a representative element.
//!
//! A `KeySelector` is either a field accessor or the identity (pass-through
//! for primitive sequences). It can be built directly or parsed once from an
//! accessor path such as `x => x.id`, `x.id` or `x => x`.
//!
//! Resolution checks the selector against a sample element, normally the
//! first element of the sequence. Empty sequences are never resolved.

use std::borrow::Cow;
use std::fmt;

use seqquery_core::element::Element;
use seqquery_core::types::Value;

use crate::traits::{OpError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeySelector {
    /// Read one field of a record element.
    Field(String),
    /// Use the element itself.
    Identity,
}

impl KeySelector {
    /// Explicit property name; no parsing or validation of the name itself.
    pub fn field(name: impl Into<String>) -> Self {
        KeySelector::Field(name.into())
    }

    pub fn identity() -> Self {
        KeySelector::Identity
    }

    /// Parse an accessor path: `[param =>] ident ('.' ident)*`.
    ///
    /// With at least one `.` the selector reads the last segment as a field.
    /// A bare identifier is the identity, and when a parameter is named it
    /// must be that parameter.
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        let trimmed = trimmed.strip_suffix(';').unwrap_or(trimmed).trim_end();

        let (param, body) = match trimmed.split_once("=>") {
            Some((p, b)) => {
                let p = p.trim();
                let p = p
                    .strip_prefix('(')
                    .and_then(|s| s.strip_suffix(')'))
                    .map(str::trim)
                    .unwrap_or(p);
                if !is_identifier(p) {
                    return Err(malformed(text));
                }
                (Some(p), b.trim())
            }
            None => (None, trimmed),
        };

        let segments: Vec<&str> = body.split('.').map(str::trim).collect();
        if segments.iter().any(|s| !is_identifier(s)) {
            return Err(malformed(text));
        }

        match (param, segments.as_slice()) {
            (Some(p), [only]) if *only != p => Err(malformed(text)),
            (_, [_]) => Ok(KeySelector::Identity),
            (Some(p), [head, ..]) if *head != p => Err(malformed(text)),
            (_, [.., last]) => Ok(KeySelector::Field((*last).to_string())),
            (_, []) => Err(malformed(text)),
        }
    }

    pub fn field_name(&self) -> Option<&str> {
        match self {
            KeySelector::Field(name) => Some(name),
            KeySelector::Identity => None,
        }
    }

    /// Resolve against a sample element.
    ///
    /// Records need a field selector naming one of their own fields. Elements
    /// without fields always resolve, and are compared as a whole.
    pub fn resolve<E: Element + ?Sized>(&self, sample: &E) -> Result<ResolvedKey<'_>> {
        let names = sample.field_names();
        if names.is_empty() {
            return Ok(match self {
                KeySelector::Field(name) => ResolvedKey::Field(name),
                KeySelector::Identity => ResolvedKey::Element,
            });
        }

        match self {
            KeySelector::Identity => Err(OpError::MalformedSelector(
                "a record element needs a field accessor, e.g. x => x.id".into(),
            )),
            KeySelector::Field(name) if names.iter().any(|n| *n == name.as_str()) => {
                Ok(ResolvedKey::Field(name))
            }
            KeySelector::Field(name) => Err(OpError::UnknownProperty {
                property: name.clone(),
                available: names.into_iter().map(str::to_string).collect(),
            }),
        }
    }

    /// Label used in error messages.
    pub(crate) fn label(&self) -> &str {
        self.field_name().unwrap_or("<element>")
    }
}

impl fmt::Display for KeySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeySelector::Field(name) => write!(f, "x => x.{}", name),
            KeySelector::Identity => f.write_str("x => x"),
        }
    }
}

impl std::str::FromStr for KeySelector {
    type Err = OpError;

    fn from_str(s: &str) -> Result<Self> {
        KeySelector::parse(s)
    }
}

/// A selector that passed resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedKey<'a> {
    Field(&'a str),
    Element,
}

impl<'a> ResolvedKey<'a> {
    /// Key value of one element, by that element's own shape: a record reads
    /// the resolved field (`Null` if missing), anything else is itself.
    pub fn extract<'e, E: Element + ?Sized>(&self, element: &'e E) -> Cow<'e, Value> {
        self.lookup(element).unwrap_or(Cow::Owned(Value::Null))
    }

    /// Like [`ResolvedKey::extract`], but `None` when a record does not have
    /// the resolved field at all.
    pub fn lookup<'e, E: Element + ?Sized>(&self, element: &'e E) -> Option<Cow<'e, Value>> {
        match self {
            ResolvedKey::Field(name) if element.has_fields() => {
                element.field(name).map(Cow::Borrowed)
            }
            _ => Some(element.as_value()),
        }
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

fn malformed(text: &str) -> OpError {
    OpError::MalformedSelector(format!(
        "'{}' is not a property accessor; expected something like x => x.id",
        text.trim()
    ))
}
