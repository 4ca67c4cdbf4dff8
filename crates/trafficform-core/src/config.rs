use crate::error::ConfigError;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_BACKEND: &str = "http://localhost:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the traffic backend
    #[arg(
        global = true,
        long = "backend",
        env = "TRAFFICFORM_BACKEND",
        default_value = DEFAULT_BACKEND
    )]
    pub base_url: String,

    /// Seconds before an unanswered POST counts as a transport failure
    #[arg(global = true, long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BACKEND.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

fn explicitly_set(matches: &ArgMatches, id: &str) -> bool {
    let here = matches!(
        matches.value_source(id),
        Some(ValueSource::CommandLine) | Some(ValueSource::EnvVariable)
    );
    here || matches
        .subcommand()
        .is_some_and(|(_, sub)| explicitly_set(sub, id))
}

impl ClientConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: ClientConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Values given on the command line (or via env) win over the file.
    pub fn merge_from_cli(&mut self, cli: &ClientConfig, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident) => {
                if explicitly_set(matches, stringify!($field)) {
                    self.$field = cli.$field.clone();
                }
            };
        }

        update_if_present!(base_url);
        update_if_present!(timeout_secs);
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "timeout_secs must be at least 1".to_string(),
            ));
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "backend URL '{}' must start with http:// or https://",
                self.base_url
            )));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Base URL without a trailing slash, ready to have an endpoint appended.
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
