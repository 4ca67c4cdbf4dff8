use super::FormArgs;
use crate::reports;
use clap::Args;
use std::process;
use tracing::{error, info};
use trafficform_core::config::ClientConfig;
use trafficform_core::error::TfResult;
use trafficform_core::pipeline::{FormPipeline, Notice, Notifier};
use trafficform_core::submitter::{SubmitReceipt, Submitter};

#[derive(Args, Debug, Clone)]
pub struct SubmitArgs {
    #[command(flatten)]
    pub form: FormArgs,

    /// Validate and show the request without sending it
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

/// Prints the notice where the dashboard would raise an alert.
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: &Notice) {
        match notice {
            Notice::Success(msg) => println!("✅ {}", msg),
            Notice::Failure(msg) => {
                for line in msg.lines() {
                    println!("❌ {}", line);
                }
            }
        }
    }
}

pub async fn run(args: SubmitArgs, client: &ClientConfig) {
    let (kind, snapshot) = args.form.resolve();

    // A dry run must fail on the same settings a real submit would.
    if let Err(e) = client.validate() {
        error!("{}", e);
        process::exit(2);
    }

    if args.dry_run {
        match FormPipeline::prepare(kind, &snapshot) {
            Ok(payload) => {
                println!("POST {}{}", client.base(), payload.endpoint());
                reports::print_payload(&payload);
            }
            Err(e) => {
                let outcome: TfResult<SubmitReceipt> = Err(e);
                ConsoleNotifier.notify(&Notice::for_outcome(&outcome));
                process::exit(1);
            }
        }
        return;
    }

    let submitter = Submitter::new(client).unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(2);
    });
    info!("🚀 Submitting {} to {}", kind.form_id(), submitter.base_url());

    let pipeline = FormPipeline::new(submitter);
    match pipeline
        .handle_submit(kind, &snapshot, &ConsoleNotifier)
        .await
    {
        Ok(receipt) => {
            if !receipt.body.is_null() {
                println!("{}", receipt.body);
            }
        }
        Err(_) => process::exit(1),
    }
}
