pub mod check;
pub mod profiles;
pub mod submit;

use clap::Args;
use std::process;
use tracing::error;
use trafficform_core::collector::FormSnapshot;
use trafficform_core::error::ConfigError;
use trafficform_core::kind::TrafficKind;

/// Which form to act on and where its input values come from.
#[derive(Args, Debug, Clone)]
pub struct FormArgs {
    /// Form name (`voice`) or form id (`voiceTrafficForm`)
    pub form: String,

    /// Input value as id=value; repeatable, applied after --form-file
    #[arg(short = 'f', long = "field")]
    pub fields: Vec<String>,

    /// JSON object of input id -> value
    #[arg(long)]
    pub form_file: Option<String>,
}

impl FormArgs {
    pub fn snapshot(&self) -> Result<FormSnapshot, ConfigError> {
        let mut snapshot = match &self.form_file {
            Some(path) => FormSnapshot::load_from_file(path)?,
            None => FormSnapshot::new(),
        };
        for assignment in &self.fields {
            snapshot.insert_assignment(assignment)?;
        }
        Ok(snapshot)
    }

    /// Resolves the form and its inputs, exiting on bad arguments.
    pub fn resolve(&self) -> (TrafficKind, FormSnapshot) {
        let kind = TrafficKind::parse_form(&self.form).unwrap_or_else(|e| {
            error!("{}", e);
            process::exit(2);
        });
        let snapshot = self.snapshot().unwrap_or_else(|e| {
            error!("Failed to read form inputs: {}", e);
            process::exit(2);
        });
        (kind, snapshot)
    }
}
