use std::process::ExitCode;

use clap::Parser;
use post_changelog::{
    Outcome, SkipReason, Webhook,
    cli::{self, Args},
    post_changelog,
};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // Prints usage to stderr, or help/version to stdout.
            let _ = e.print();
            return ExitCode::from(cli::usage_exit_code(&e));
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let webhook = match Webhook::new(args.webhook_url, args.thread_id) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Failed to set up HTTP client: {}", e.report());
            return ExitCode::from(e.exit_code());
        }
    };

    match post_changelog(&webhook, &args.file).await {
        Ok(outcome) => {
            match &outcome {
                Outcome::Posted { status } => {
                    println!(
                        "Changelog posted to thread {} ({status})",
                        webhook.thread_id()
                    );
                }
                Outcome::Skipped(SkipReason::MissingFile(path)) => {
                    warn!("Changelog file {} not found, skipping", path.display());
                }
                Outcome::Skipped(SkipReason::EmptyFile(path)) => {
                    warn!("Changelog file {} is empty, skipping", path.display());
                }
            }
            ExitCode::from(outcome.exit_code())
        }
        Err(e) => {
            eprintln!("Failed to post changelog: {}", e.report());
            ExitCode::from(e.exit_code())
        }
    }
}
