//! Declarative traffic-form profiles.
//!
//! One table drives collection, shaping and validation for every form, so the
//! five dashboard forms cannot drift apart from each other.

use serde::Serialize;
use trafficform_protocol::{TrafficKind, UnknownForm};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Integer,
    Float,
    Text,
}

impl FieldType {
    pub fn is_numeric(&self) -> bool {
        !matches!(self, FieldType::Text)
    }
}

/// Inclusive numeric bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Constraint {
    /// Human name used in messages, capitalized ("Bitrate").
    pub label: &'static str,
    pub unit: &'static str,
    pub bounds: Option<Bounds>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Rule {
    /// Two inputs collapsed into `key: [min, max]`.
    Range {
        key: &'static str,
        min_field: &'static str,
        max_field: &'static str,
        ty: FieldType,
        constraint: Constraint,
    },
    /// One input renamed to `key`. A rule whose key equals its field passes the value through.
    Scalar {
        key: &'static str,
        field: &'static str,
        ty: FieldType,
        constraint: Constraint,
    },
}

impl Rule {
    pub fn key(&self) -> &'static str {
        match self {
            Rule::Range { key, .. } | Rule::Scalar { key, .. } => *key,
        }
    }

    pub fn ty(&self) -> FieldType {
        match self {
            Rule::Range { ty, .. } | Rule::Scalar { ty, .. } => *ty,
        }
    }

    pub fn constraint(&self) -> &Constraint {
        match self {
            Rule::Range { constraint, .. } | Rule::Scalar { constraint, .. } => constraint,
        }
    }

    /// Input element ids this rule reads, in order.
    pub fn fields(&self) -> Vec<&'static str> {
        match self {
            Rule::Range {
                min_field,
                max_field,
                ..
            } => vec![*min_field, *max_field],
            Rule::Scalar { field, .. } => vec![*field],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FormProfile {
    pub kind: TrafficKind,
    pub rules: &'static [Rule],
}

impl FormProfile {
    pub fn for_kind(kind: TrafficKind) -> &'static FormProfile {
        match kind {
            TrafficKind::Voice => &VOICE,
            TrafficKind::Video => &VIDEO,
            TrafficKind::Gaming => &GAMING,
            TrafficKind::Iot => &IOT,
            TrafficKind::Data => &DATA,
        }
    }

    /// Looks a profile up by short name or form id.
    pub fn lookup(form: &str) -> Result<&'static FormProfile, UnknownForm> {
        TrafficKind::parse_form(form).map(Self::for_kind)
    }

    pub fn all() -> [&'static FormProfile; 5] {
        [&VOICE, &VIDEO, &GAMING, &IOT, &DATA]
    }

    pub fn form_id(&self) -> String {
        self.kind.form_id()
    }

    pub fn endpoint(&self) -> String {
        self.kind.endpoint()
    }

    /// Every declared input id with its type, in declaration order.
    pub fn fields(&self) -> Vec<(&'static str, FieldType)> {
        self.rules
            .iter()
            .flat_map(|rule| rule.fields().into_iter().map(move |f| (f, rule.ty())))
            .collect()
    }
}

const fn range(
    key: &'static str,
    min_field: &'static str,
    max_field: &'static str,
    label: &'static str,
    unit: &'static str,
    min: f64,
    max: f64,
) -> Rule {
    Rule::Range {
        key,
        min_field,
        max_field,
        ty: FieldType::Integer,
        constraint: Constraint {
            label,
            unit,
            bounds: Some(Bounds::new(min, max)),
        },
    }
}

const fn float(
    key: &'static str,
    field: &'static str,
    label: &'static str,
    unit: &'static str,
    min: f64,
    max: f64,
) -> Rule {
    Rule::Scalar {
        key,
        field,
        ty: FieldType::Float,
        constraint: Constraint {
            label,
            unit,
            bounds: Some(Bounds::new(min, max)),
        },
    }
}

static VOICE: FormProfile = FormProfile {
    kind: TrafficKind::Voice,
    rules: &[range(
        "bitrate_range",
        "voice_min_bitrate",
        "voice_max_bitrate",
        "Bitrate",
        "kbps",
        8.0,
        16.0,
    )],
};

static VIDEO: FormProfile = FormProfile {
    kind: TrafficKind::Video,
    rules: &[
        range(
            "num_streams_range",
            "video_min_streams",
            "video_max_streams",
            "Number of streams",
            "streams",
            1.0,
            5.0,
        ),
        range(
            "stream_bitrate_range",
            "video_min_bitrate",
            "video_max_bitrate",
            "Stream bitrate",
            "Mbps",
            3.0,
            8.0,
        ),
    ],
};

static GAMING: FormProfile = FormProfile {
    kind: TrafficKind::Gaming,
    rules: &[
        range(
            "bitrate_range",
            "gaming_min_bitrate",
            "gaming_max_bitrate",
            "Bitrate",
            "Mbps",
            30.0,
            70.0,
        ),
        float("jitter", "gaming_jitter", "Jitter", "ms", 0.0, 100.0),
        float("delay", "gaming_delay", "Delay", "ms", 0.0, 1000.0),
        float(
            "packet_loss_rate",
            "gaming_packet_loss_rate",
            "Packet loss rate",
            "",
            0.0,
            1.0,
        ),
    ],
};

static IOT: FormProfile = FormProfile {
    kind: TrafficKind::Iot,
    rules: &[
        range(
            "packet_size_range",
            "iot_min_packet_size",
            "iot_max_packet_size",
            "Packet size",
            "bytes",
            20.0,
            1500.0,
        ),
        range(
            "interval_range",
            "iot_min_interval",
            "iot_max_interval",
            "Interval",
            "seconds",
            1.0,
            60.0,
        ),
    ],
};

static DATA: FormProfile = FormProfile {
    kind: TrafficKind::Data,
    rules: &[
        range(
            "bitrate_range",
            "data_min_bitrate",
            "data_max_bitrate",
            "Bitrate",
            "Mbps",
            10.0,
            1000.0,
        ),
        range(
            "interval_range",
            "data_min_interval",
            "data_max_interval",
            "Interval",
            "seconds",
            1.0,
            60.0,
        ),
    ],
};
