use crate::validator::ValidationResult;
use thiserror::Error;
use trafficform_protocol::TrafficKind;

/// The form markup does not match its profile. Never caused by user input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    #[error("Form '{form}' has no input element '{field}'")]
    MissingField { form: String, field: String },
}

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("POST {endpoint} timed out")]
    Timeout { endpoint: String },

    #[error("POST {endpoint} failed: {source}")]
    Request {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("POST {endpoint} returned {status}: {body}")]
    Status {
        endpoint: String,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("POST {endpoint} returned a body that is not JSON: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
}

impl TransportError {
    pub(crate) fn from_reqwest(endpoint: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout {
                endpoint: endpoint.to_string(),
            }
        } else if err.is_decode() {
            TransportError::Decode {
                endpoint: endpoint.to_string(),
                source: err,
            }
        } else {
            TransportError::Request {
                endpoint: endpoint.to_string(),
                source: err,
            }
        }
    }
}

/// Terminal outcome of a submission attempt that did not reach the backend successfully.
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("Collection Error: {0}")]
    Collection(#[from] CollectionError),

    #[error("Validation Error for {kind} traffic: {}", .result.messages().join("; "))]
    Validation {
        kind: TrafficKind,
        result: ValidationResult,
    },

    #[error("Transport Error: {0}")]
    Transport(#[from] TransportError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Invalid(String),
}

pub type TfResult<T> = Result<T, SubmitError>;
