use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use thiserror::Error;

/// Suffix every dashboard form id carries, e.g. `voiceTrafficForm`.
const FORM_SUFFIX: &str = "TrafficForm";

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TrafficKind {
    Voice,
    Video,
    Gaming,
    Iot,
    Data,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown traffic form '{0}' (expected one of: voice, video, gaming, iot, data)")]
pub struct UnknownForm(pub String);

impl TrafficKind {
    pub fn all() -> Vec<TrafficKind> {
        Self::iter().collect()
    }

    /// The id of the `<form>` element this kind is rendered as.
    pub fn form_id(&self) -> String {
        format!("{}{}", self, FORM_SUFFIX)
    }

    /// Backend route the shaped payload is POSTed to.
    pub fn endpoint(&self) -> String {
        format!("/update_{}_traffic", self)
    }

    /// Accepts either the short name (`gaming`) or the form id (`gamingTrafficForm`).
    pub fn parse_form(input: &str) -> Result<Self, UnknownForm> {
        let trimmed = input.trim();
        let short = trimmed.strip_suffix(FORM_SUFFIX).unwrap_or(trimmed);
        TrafficKind::from_str(&short.to_lowercase()).map_err(|_| UnknownForm(input.to_string()))
    }
}
