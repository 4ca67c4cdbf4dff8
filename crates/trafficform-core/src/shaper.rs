//! Payload Shaper: flat collected fields -> the nested body an endpoint expects.

use crate::collector::RawFieldMap;
use crate::profiles::{FormProfile, Rule};
use indexmap::IndexMap;
use trafficform_protocol::{FieldValue, Payload, PayloadEntry};

fn take(raw: &RawFieldMap, id: &str) -> FieldValue {
    raw.get(id)
        .cloned()
        .unwrap_or_else(|| FieldValue::Text(String::new()))
}

/// Pure and total. Ranges keep DOM order; `(5, 3)` stays `[5, 3]` for the
/// validator to reject. An id the map lacks shapes to empty text.
pub fn shape(profile: &FormProfile, raw: &RawFieldMap) -> Payload {
    let mut entries = IndexMap::with_capacity(profile.rules.len());

    for rule in profile.rules {
        let entry = match rule {
            Rule::Range {
                min_field,
                max_field,
                ..
            } => PayloadEntry::Range([take(raw, min_field), take(raw, max_field)]),
            Rule::Scalar { field, .. } => PayloadEntry::Scalar(take(raw, field)),
        };
        entries.insert(rule.key().to_string(), entry);
    }

    Payload::new(profile.kind, entries)
}
