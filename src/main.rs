use clap::Parser;

mod app;
mod args;
mod config;
mod driver;
mod listing;
mod percent;
mod report;
mod tally;
mod timer;

use app::BucketCopyApp;
use args::Args;
use config::AwsSettings;
use report::{Reporter, Severity};

#[tokio::main]
async fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // The environment is read here only; the app gets an explicit settings struct
    let settings = AwsSettings::from_env();

    let reporter = Reporter;
    let credential_source = if settings.has_static_credentials() {
        "AWS environment credentials"
    } else {
        "AWS default credential chain"
    };
    reporter.line(
        Severity::Info,
        &format!(
            "Using {} via region [{}]",
            credential_source, settings.region
        ),
    );
    reporter.line(
        Severity::Debug,
        &format!("S3 bucket source set to [{}]", args.source_bucket),
    );
    reporter.line(
        Severity::Info,
        &format!("S3 bucket destination set to [{}]", args.destination_bucket),
    );

    let app = BucketCopyApp::new(
        args.source_bucket,
        args.destination_bucket,
        args.threshold,
        settings,
    )
    .await;

    // Setup and listing errors are fatal; a completed run exits 0 even when
    // individual objects failed to copy.
    if let Err(error) = app.run(&reporter).await {
        reporter.detail(
            Severity::Error,
            &format!("Error occurred [{}]", error),
            &format!("{}", error.root_cause()),
        );
        std::process::exit(1);
    }
}
