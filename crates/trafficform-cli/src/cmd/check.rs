use super::FormArgs;
use crate::reports;
use clap::Args;
use serde_json::json;
use std::process;
use tracing::error;
use trafficform_core::collector::collect;
use trafficform_core::profiles::FormProfile;
use trafficform_core::shaper::shape;
use trafficform_core::validator::validate;

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    #[command(flatten)]
    pub form: FormArgs,

    /// Print payload and validation result as one JSON document
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: CheckArgs) {
    let (kind, snapshot) = args.form.resolve();
    let profile = FormProfile::for_kind(kind);

    let raw = collect(profile, &snapshot).unwrap_or_else(|e| {
        error!("{}", e);
        println!("❌ Form configuration error: {}", e);
        process::exit(1);
    });

    // Shaped even when invalid so the user can see what would be sent.
    let payload = shape(profile, &raw);
    let result = validate(profile, &payload);

    if args.json {
        let doc = json!({
            "form": profile.form_id(),
            "endpoint": profile.endpoint(),
            "payload": payload,
            "validation": result,
        });
        match serde_json::to_string_pretty(&doc) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                error!("Failed to serialize report: {}", e);
                process::exit(1);
            }
        }
    } else {
        reports::print_payload(&payload);
        reports::print_validation(&result);
    }

    if !result.is_valid() {
        process::exit(1);
    }
}
