//! One form submission, start to finish.
//!
//! Collect -> shape -> validate -> POST. Each call is independent; nothing is
//! kept between submissions.

use crate::collector::{collect, FieldSource};
use crate::error::{SubmitError, TfResult};
use crate::profiles::FormProfile;
use crate::shaper::shape;
use crate::submitter::{SubmitReceipt, Submitter};
use crate::validator::validate;
use tracing::{error, warn};
use trafficform_protocol::{Payload, TrafficKind};

pub const SUCCESS_NOTICE: &str = "Traffic updated successfully";
pub const TRANSPORT_NOTICE: &str = "Error updating traffic";

/// The single user-facing message a submission ends with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Failure(String),
}

impl Notice {
    pub fn for_outcome(outcome: &TfResult<SubmitReceipt>) -> Notice {
        match outcome {
            Ok(_) => Notice::Success(SUCCESS_NOTICE.to_string()),
            Err(SubmitError::Validation { result, .. }) => Notice::Failure(result.notice_text()),
            Err(SubmitError::Transport(_)) => Notice::Failure(TRANSPORT_NOTICE.to_string()),
            Err(SubmitError::Collection(e)) => {
                Notice::Failure(format!("Form configuration error: {}", e))
            }
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Notice::Success(s) | Notice::Failure(s) => s,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Notice::Success(_))
    }
}

/// Where notices are shown. The dashboard raises an alert; the CLI prints.
pub trait Notifier {
    fn notify(&self, notice: &Notice);
}

pub struct FormPipeline {
    submitter: Submitter,
}

impl FormPipeline {
    pub fn new(submitter: Submitter) -> Self {
        Self { submitter }
    }

    /// Everything short of the network call.
    pub fn prepare<S: FieldSource + ?Sized>(kind: TrafficKind, source: &S) -> TfResult<Payload> {
        let profile = FormProfile::for_kind(kind);
        let raw = collect(profile, source)?;
        let payload = shape(profile, &raw);

        let result = validate(profile, &payload);
        if !result.is_valid() {
            warn!(
                "{} rejected with {} violation(s)",
                profile.form_id(),
                result.messages().len()
            );
            return Err(SubmitError::Validation { kind, result });
        }
        Ok(payload)
    }

    pub async fn run<S: FieldSource + ?Sized>(
        &self,
        kind: TrafficKind,
        source: &S,
    ) -> TfResult<SubmitReceipt> {
        let payload = Self::prepare(kind, source)?;
        let receipt = self.submitter.submit(&payload).await?;
        Ok(receipt)
    }

    /// Runs one submission and emits exactly one notice for it.
    pub async fn handle_submit<S: FieldSource + ?Sized>(
        &self,
        kind: TrafficKind,
        source: &S,
        notifier: &dyn Notifier,
    ) -> TfResult<SubmitReceipt> {
        let outcome = self.run(kind, source).await;
        // Collection and validation failures were already logged where they happened.
        if let Err(e @ SubmitError::Transport(_)) = &outcome {
            error!("Submission of {} failed: {}", kind.form_id(), e);
        }
        notifier.notify(&Notice::for_outcome(&outcome));
        outcome
    }
}
