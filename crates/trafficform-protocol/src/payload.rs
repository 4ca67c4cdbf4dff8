use crate::kind::TrafficKind;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// A single collected input value after type coercion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl FieldValue {
    /// Numeric view of the value. Text is never numeric, even if it looks like a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Int(v) => Some(*v as f64),
            FieldValue::Float(v) => Some(*v),
            FieldValue::Text(_) => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Int(v) => write!(f, "{}", v),
            FieldValue::Float(v) => write!(f, "{}", v),
            FieldValue::Text(s) => write!(f, "'{}'", s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PayloadEntry {
    Range([FieldValue; 2]),
    Scalar(FieldValue),
}

/// JSON body for one `/update_*_traffic` endpoint.
///
/// Entries keep the order their profile declares them in. Only the entries are
/// serialized; the kind selects the endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Payload {
    kind: TrafficKind,
    entries: IndexMap<String, PayloadEntry>,
}

impl Payload {
    pub fn new(kind: TrafficKind, entries: IndexMap<String, PayloadEntry>) -> Self {
        Self { kind, entries }
    }

    pub fn endpoint(&self) -> String {
        self.kind.endpoint()
    }

    pub fn get(&self, key: &str) -> Option<&PayloadEntry> {
        self.entries.get(key)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &PayloadEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

impl Serialize for Payload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}
