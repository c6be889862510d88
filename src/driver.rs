use anyhow::Result;

use crate::listing::ObjectRecord;
use crate::report::{Reporter, Severity};
use crate::tally::CopyOutcome;

/// Seam between the copy loop and the storage client, so the loop can be
/// exercised in tests without a network.
pub trait ObjectCopier {
    /// Server-side copy of one source object to the destination bucket
    /// under the identical key.
    async fn copy(&self, key: &str) -> Result<()>;
}

/// An object is eligible for copying when strictly larger than the threshold.
pub fn eligible(size: i64, threshold: i64) -> bool {
    size > threshold
}

/// Apply the copy-or-skip decision to one object and report the result.
///
/// A copy failure is caught here; it is counted and must not abort the
/// remaining iteration.
pub async fn process_object<C: ObjectCopier>(
    copier: &C,
    record: &ObjectRecord,
    threshold: i64,
    reporter: &Reporter,
) -> CopyOutcome {
    if !eligible(record.size, threshold) {
        reporter.line(
            Severity::Warning,
            &format!(
                "S3 object [{}] with size [{} bytes] at or below threshold [{} bytes], skipped",
                record.key, record.size, threshold
            ),
        );
        return CopyOutcome::SkippedBelowThreshold;
    }

    match copier.copy(&record.key).await {
        Ok(()) => {
            reporter.line(
                Severity::Info,
                &format!(
                    "S3 object [{}] with size [{} bytes] copied to destination",
                    record.key, record.size
                ),
            );
            CopyOutcome::Copied
        }
        Err(error) => {
            reporter.detail(
                Severity::Error,
                &format!("Copy failed for S3 object [{}]", record.key),
                &format!("{error:#}"),
            );
            CopyOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::percent::percentage;
    use crate::tally::CopyTally;
    use std::cell::Cell;

    struct AlwaysSucceeds;

    impl ObjectCopier for AlwaysSucceeds {
        async fn copy(&self, _key: &str) -> Result<()> {
            Ok(())
        }
    }

    struct FailsOnKey(&'static str);

    impl ObjectCopier for FailsOnKey {
        async fn copy(&self, key: &str) -> Result<()> {
            if key == self.0 {
                anyhow::bail!("AccessDenied on [{key}]");
            }
            Ok(())
        }
    }

    struct CountingCopier {
        calls: Cell<u32>,
    }

    impl ObjectCopier for CountingCopier {
        async fn copy(&self, _key: &str) -> Result<()> {
            self.calls.set(self.calls.get() + 1);
            Ok(())
        }
    }

    fn record(key: &str, size: i64) -> ObjectRecord {
        ObjectRecord {
            key: key.to_string(),
            size,
        }
    }

    /// Verifies the strictly-greater-than threshold contract, including the
    /// boundary where size equals the threshold.
    #[test]
    fn eligibility_is_strictly_greater_than() {
        assert!(eligible(101, 100));
        assert!(!eligible(100, 100));
        assert!(!eligible(50, 100));
        assert!(eligible(1, 0));
        assert!(!eligible(0, 0));
    }

    /// Ensures a skipped object never reaches the storage client.
    #[tokio::test]
    async fn skipped_object_is_not_copied() {
        let copier = CountingCopier {
            calls: Cell::new(0),
        };

        let outcome = process_object(&copier, &record("tiny.txt", 50), 100, &Reporter).await;

        assert_eq!(outcome, CopyOutcome::SkippedBelowThreshold);
        assert_eq!(copier.calls.get(), 0);
    }

    /// Runs the 3-object scenario: sizes {50, 150, 300} with threshold 100
    /// copy 2, skip 1, for a 33.33% skip share.
    #[tokio::test]
    async fn three_object_scenario() {
        let copier = AlwaysSucceeds;
        let objects = [
            record("a.dat", 50),
            record("b.dat", 150),
            record("c.dat", 300),
        ];

        let mut tally = CopyTally::new();
        for object in &objects {
            tally.record(process_object(&copier, object, 100, &Reporter).await);
        }

        assert_eq!(tally.copied, 2);
        assert_eq!(tally.skipped, 1);
        assert_eq!(tally.failed, 0);
        assert_eq!(tally.total(), 3);
        assert_eq!(percentage(tally.skipped_or_failed(), tally.total()), "33.33%");
    }

    /// Ensures one failing copy among five is counted and does not stop the
    /// other four from being processed.
    #[tokio::test]
    async fn copy_failure_does_not_abort_the_batch() {
        let copier = FailsOnKey("c.dat");
        let keys = ["a.dat", "b.dat", "c.dat", "d.dat", "e.dat"];

        let mut tally = CopyTally::new();
        for key in keys {
            tally.record(process_object(&copier, &record(key, 500), 100, &Reporter).await);
        }

        assert_eq!(tally.copied, 4);
        assert_eq!(tally.failed, 1);
        assert_eq!(tally.skipped, 0);
        assert_eq!(tally.total(), 5);
    }

    /// Confirms a failed copy reports Failed, not Copied.
    #[tokio::test]
    async fn failed_copy_is_counted_as_failed() {
        let copier = FailsOnKey("locked.bin");

        let outcome = process_object(&copier, &record("locked.bin", 2048), 100, &Reporter).await;

        assert_eq!(outcome, CopyOutcome::Failed);
    }
}
