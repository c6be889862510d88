use anyhow::{Context, Result};
use aws_sdk_s3::{Client, config::Region};

use crate::config::AwsSettings;
use crate::driver::{self, ObjectCopier};
use crate::listing::ObjectPages;
use crate::report::{Reporter, Severity};
use crate::tally::{CopyTally, RunSummary};
use crate::timer::RunTimer;

/// Main application structure
pub struct BucketCopyApp {
    client: Client,
    source_bucket: String,
    destination_bucket: String,
    threshold: i64,
}

impl BucketCopyApp {
    /// Create a new BucketCopyApp instance
    pub async fn new(
        source_bucket: String,
        destination_bucket: String,
        threshold: i64,
        settings: AwsSettings,
    ) -> Self {
        let mut config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(settings.region));

        // With a full static key pair the settings struct is authoritative;
        // otherwise the SDK's default provider chain applies.
        if let (Some(access_key_id), Some(secret_access_key)) =
            (settings.access_key_id, settings.secret_access_key)
        {
            config_loader = config_loader.credentials_provider(
                aws_sdk_s3::config::Credentials::new(
                    access_key_id,
                    secret_access_key,
                    None,
                    None,
                    "environment",
                ),
            );
        }

        let config = config_loader.load().await;
        let client = Client::new(&config);

        Self {
            client,
            source_bucket,
            destination_bucket,
            threshold,
        }
    }

    /// Run the enumerate-filter-copy loop and return the finished summary.
    ///
    /// A single listing pass accumulates the counts; the summary line is
    /// deferred until the sequence is exhausted. Listing errors abort the
    /// run, per-object copy failures are recorded and iteration continues.
    pub async fn run(&self, reporter: &Reporter) -> Result<RunSummary> {
        let mut timer = RunTimer::start();
        let mut tally = CopyTally::new();
        let mut pages = ObjectPages::new(&self.client, &self.source_bucket);

        while let Some(records) = pages.next().await? {
            for record in records {
                let outcome =
                    driver::process_object(self, &record, self.threshold, reporter).await;
                tally.record(outcome);
            }
        }

        timer.stop();
        let summary = RunSummary {
            tally,
            elapsed: timer.summary(),
            threshold: self.threshold,
        };
        reporter.line(Severity::Info, &summary.render());

        Ok(summary)
    }
}

impl ObjectCopier for BucketCopyApp {
    /// Server-side copy to the destination bucket under the identical key.
    /// An existing destination object is overwritten (last write wins).
    async fn copy(&self, key: &str) -> Result<()> {
        self.client
            .copy_object()
            .bucket(&self.destination_bucket)
            .key(key)
            .copy_source(format!("{}/{}", self.source_bucket, key))
            .send()
            .await
            .with_context(|| {
                format!(
                    "Failed to copy s3://{}/{} to s3://{}/{}",
                    self.source_bucket, key, self.destination_bucket, key
                )
            })?;

        Ok(())
    }
}
