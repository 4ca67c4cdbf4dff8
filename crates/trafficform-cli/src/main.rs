use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use trafficform_core::config::ClientConfig;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Validate and submit traffic profile updates", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    client: ClientConfig,

    /// JSON file with client settings; explicit flags override it
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Lists every traffic form with its fields, bounds and endpoint
    Profiles(cmd::profiles::ProfilesArgs),
    /// Collects, shapes and validates a form without sending it
    Check(cmd::check::CheckArgs),
    /// Validates a form and POSTs it to the backend
    Submit(cmd::submit::SubmitArgs),
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    init_tracing(cli.debug);

    let client = match &cli.config {
        Some(path) => {
            info!("⚙️  Loading client config: {}", path);
            let mut file_config = ClientConfig::load_from_file(path).unwrap_or_else(|e| {
                error!("Failed to load config '{}': {}", path, e);
                process::exit(1);
            });
            file_config.merge_from_cli(&cli.client, &matches);
            file_config
        }
        None => cli.client.clone(),
    };

    match cli.command {
        Commands::Profiles(args) => cmd::profiles::run(args),
        Commands::Check(args) => cmd::check::run(args),
        Commands::Submit(args) => cmd::submit::run(args, &client).await,
    }
}
