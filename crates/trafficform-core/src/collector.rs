//! Field Collector: reads the declared inputs of one form and coerces them.

use crate::error::{CollectionError, ConfigError};
use crate::profiles::{FieldType, FormProfile};
use indexmap::IndexMap;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, error};
use trafficform_protocol::FieldValue;

/// Field id -> coerced value, in profile declaration order.
pub type RawFieldMap = IndexMap<String, FieldValue>;

/// Anything that can answer "what is the current value of input `id`".
/// `None` means the element does not exist at all.
pub trait FieldSource {
    fn value(&self, id: &str) -> Option<&str>;
}

/// Snapshot of a form's input values, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormSnapshot {
    values: IndexMap<String, String>,
}

impl FormSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: &str, value: &str) -> Self {
        self.insert(id, value);
        self
    }

    pub fn insert(&mut self, id: &str, value: &str) {
        self.values.insert(id.to_string(), value.to_string());
    }

    /// Parses `id=value`. The value may be empty or contain further `=`.
    pub fn insert_assignment(&mut self, assignment: &str) -> Result<(), ConfigError> {
        let (id, value) = assignment.split_once('=').ok_or_else(|| {
            ConfigError::Invalid(format!("Expected id=value, got '{}'", assignment))
        })?;
        let id = id.trim();
        if id.is_empty() {
            return Err(ConfigError::Invalid(format!(
                "Missing field id in '{}'",
                assignment
            )));
        }
        self.insert(id, value);
        Ok(())
    }

    /// Loads a flat JSON object of input values. Numbers and booleans are kept
    /// as their JSON text, the way an input element would hold them.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(&path)?;
        let parsed: IndexMap<String, Value> = serde_json::from_str(&content)?;

        let mut snapshot = Self::new();
        for (id, value) in parsed {
            let text = match value {
                Value::String(s) => s,
                Value::Null => String::new(),
                Value::Array(_) | Value::Object(_) => {
                    return Err(ConfigError::Invalid(format!(
                        "Input '{}' must be a string or number",
                        id
                    )))
                }
                other => other.to_string(),
            };
            snapshot.values.insert(id, text);
        }
        Ok(snapshot)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FieldSource for FormSnapshot {
    fn value(&self, id: &str) -> Option<&str> {
        self.values.get(id).map(String::as_str)
    }
}

/// Integer input that is still a number but not an `i64` (`10.5`, `1e1`,
/// anything past `i64::MAX`). Whole values in range become `Int`; the rest stay
/// `Float` so the validator can say what is actually wrong with them.
fn coerce_integer(raw: &str, trimmed: &str) -> FieldValue {
    match trimmed.parse::<f64>() {
        Ok(v)
            if v.is_finite()
                && v.fract() == 0.0
                && v >= i64::MIN as f64
                && v < i64::MAX as f64 =>
        {
            FieldValue::Int(v as i64)
        }
        Ok(v) => FieldValue::Float(v),
        Err(_) => FieldValue::Text(raw.to_string()),
    }
}

/// Coerces one raw input. Numeric text that does not parse is kept as text so
/// the validator can report it; collection never rejects user input.
pub fn coerce(raw: &str, ty: FieldType) -> FieldValue {
    let trimmed = raw.trim();
    match ty {
        FieldType::Integer => trimmed
            .parse::<i64>()
            .map(FieldValue::Int)
            .unwrap_or_else(|_| coerce_integer(raw, trimmed)),
        FieldType::Float => trimmed
            .parse::<f64>()
            .map(FieldValue::Float)
            .unwrap_or_else(|_| FieldValue::Text(raw.to_string())),
        FieldType::Text => FieldValue::Text(raw.to_string()),
    }
}

pub fn collect<S: FieldSource + ?Sized>(
    profile: &FormProfile,
    source: &S,
) -> Result<RawFieldMap, CollectionError> {
    let mut raw = RawFieldMap::new();

    for (id, ty) in profile.fields() {
        let Some(value) = source.value(id) else {
            error!(
                "Form '{}' is missing declared input '{}'",
                profile.form_id(),
                id
            );
            return Err(CollectionError::MissingField {
                form: profile.form_id(),
                field: id.to_string(),
            });
        };
        raw.insert(id.to_string(), coerce(value, ty));
    }

    debug!("Collected {} fields from {}", raw.len(), profile.form_id());
    Ok(raw)
}
