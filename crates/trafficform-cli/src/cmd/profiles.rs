use crate::reports;
use clap::Args;
use std::process;
use tracing::error;
use trafficform_core::profiles::FormProfile;

#[derive(Args, Debug, Clone)]
pub struct ProfilesArgs {
    /// Print the profile table as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: ProfilesArgs) {
    let profiles = FormProfile::all();

    if args.json {
        match serde_json::to_string_pretty(&profiles) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                error!("Failed to serialize profiles: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    reports::print_profiles(&profiles);
}
