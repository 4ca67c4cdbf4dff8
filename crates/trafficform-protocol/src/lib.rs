pub mod kind;
pub mod payload;

pub use kind::{TrafficKind, UnknownForm};
pub use payload::{FieldValue, Payload, PayloadEntry};
