//! Validator: checks a shaped payload against its profile's constraints.
//!
//! Every violation is reported. Nothing short-circuits, so a user fixing a form
//! sees all of its problems in one pass.

use crate::profiles::{Constraint, FieldType, FormProfile, Rule};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use trafficform_protocol::{FieldValue, Payload, PayloadEntry, TrafficKind};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    messages: Vec<String>,
}

impl ValidationResult {
    pub fn from_messages(messages: Vec<String>) -> Self {
        Self { messages }
    }

    /// Valid exactly when there is nothing to report.
    pub fn is_valid(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// All messages as one user notice, one violation per line.
    pub fn notice_text(&self) -> String {
        self.messages.join("\n")
    }
}

impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("ValidationResult", 2)?;
        s.serialize_field("isValid", &self.is_valid())?;
        s.serialize_field("messages", &self.messages)?;
        s.end()
    }
}

fn traffic_name(kind: TrafficKind) -> &'static str {
    match kind {
        TrafficKind::Voice => "voice",
        TrafficKind::Video => "video",
        TrafficKind::Gaming => "gaming",
        TrafficKind::Iot => "IoT",
        TrafficKind::Data => "data",
    }
}

fn lower_first(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(c) => c.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

struct Checker {
    traffic: &'static str,
    messages: Vec<String>,
}

impl Checker {
    /// Returns the value when it is a finite number of the right kind, whether
    /// or not it is in bounds.
    fn number(
        &mut self,
        name: &str,
        value: &FieldValue,
        ty: FieldType,
        constraint: &Constraint,
    ) -> Option<f64> {
        let Some(v) = value.as_f64() else {
            self.messages.push(format!(
                "{} for {} traffic must be a number (got {}).",
                name, self.traffic, value
            ));
            return None;
        };

        if !v.is_finite() {
            self.messages.push(format!(
                "{} for {} traffic must be a finite number (got {}).",
                name, self.traffic, value
            ));
            return None;
        }

        // Out-of-range whole numbers fall through to the bounds message.
        if ty == FieldType::Integer && v.fract() != 0.0 {
            self.messages.push(format!(
                "{} for {} traffic must be a whole number (got {}).",
                name, self.traffic, value
            ));
            return None;
        }

        if let Some(bounds) = constraint.bounds {
            if !bounds.contains(v) {
                let unit = if constraint.unit.is_empty() {
                    String::new()
                } else {
                    format!(" {}", constraint.unit)
                };
                self.messages.push(format!(
                    "{} for {} traffic must be between {} and {}{} (got {}).",
                    name, self.traffic, bounds.min, bounds.max, unit, value
                ));
            }
        }
        Some(v)
    }

    fn range(&mut self, ty: FieldType, constraint: &Constraint, pair: &[FieldValue; 2]) {
        let label = lower_first(constraint.label);
        let lo = self.number(&format!("Minimum {}", label), &pair[0], ty, constraint);
        let hi = self.number(&format!("Maximum {}", label), &pair[1], ty, constraint);

        if let (Some(lo), Some(hi)) = (lo, hi) {
            if lo > hi {
                self.messages.push(format!(
                    "{} range for {} traffic must have minimum <= maximum (got [{}, {}]).",
                    constraint.label, self.traffic, pair[0], pair[1]
                ));
            }
        }
    }

    fn missing(&mut self, key: &str) {
        self.messages
            .push(format!("Payload for {} traffic has no '{}'.", self.traffic, key));
    }

    fn mismatched(&mut self, key: &str, expected: &str) {
        self.messages.push(format!(
            "'{}' for {} traffic must be a {}.",
            key, self.traffic, expected
        ));
    }
}

pub fn validate(profile: &FormProfile, payload: &Payload) -> ValidationResult {
    let mut checker = Checker {
        traffic: traffic_name(profile.kind),
        messages: Vec::new(),
    };

    for rule in profile.rules {
        let key = rule.key();
        let constraint = rule.constraint();

        match (rule, payload.get(key)) {
            (_, None) => checker.missing(key),
            (Rule::Range { ty, .. }, Some(PayloadEntry::Range(pair))) => {
                checker.range(*ty, constraint, pair)
            }
            (Rule::Scalar { ty, .. }, Some(PayloadEntry::Scalar(value))) => {
                if ty.is_numeric() {
                    checker.number(constraint.label, value, *ty, constraint);
                }
            }
            (Rule::Range { .. }, Some(PayloadEntry::Scalar(_))) => {
                checker.mismatched(key, "two-element range")
            }
            (Rule::Scalar { .. }, Some(PayloadEntry::Range(_))) => {
                checker.mismatched(key, "single value")
            }
        }
    }

    ValidationResult::from_messages(checker.messages)
}
