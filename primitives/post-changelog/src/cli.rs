use std::path::PathBuf;

use clap::{
    Parser,
    builder::{NonEmptyStringValueParser, TypedValueParser},
    error::ErrorKind,
};

/// Posts a changelog fragment to a webhook thread.
#[derive(Parser, Debug, Clone)]
#[command(name = "post-changelog", version)]
#[command(about = "Posts the contents of a changelog file to a webhook thread")]
pub struct Args {
    /// Webhook endpoint to POST to.
    #[arg(allow_negative_numbers = true, value_parser = NonEmptyStringValueParser::new())]
    pub webhook_url: String,

    /// Thread the message is routed to (sent as `thread_id`).
    #[arg(allow_hyphen_values = true, value_parser = NonEmptyStringValueParser::new())]
    pub thread_id: String,

    /// Changelog file. A missing or blank file is skipped.
    #[arg(
        allow_hyphen_values = true,
        value_parser = NonEmptyStringValueParser::new().map(PathBuf::from)
    )]
    pub file: PathBuf,
}

/// Exit code for an argument parsing failure.
///
/// `--help` and `--version` are successful runs; every other parse error is a
/// usage error and exits with 1 rather than clap's default of 2.
pub fn usage_exit_code(err: &clap::Error) -> u8 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}
