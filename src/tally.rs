use crate::percent::percentage;

/// Per-object result of a copy attempt.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CopyOutcome {
    Copied,
    SkippedBelowThreshold,
    Failed,
}

/// Run-level outcome counters.
///
/// Every object enumerated from the source bucket is recorded exactly once,
/// so `copied + skipped + failed` always equals the number of objects seen.
#[derive(Debug, Default)]
pub struct CopyTally {
    pub copied: u64,
    pub skipped: u64,
    pub failed: u64,
}

impl CopyTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: CopyOutcome) {
        match outcome {
            CopyOutcome::Copied => self.copied += 1,
            CopyOutcome::SkippedBelowThreshold => self.skipped += 1,
            CopyOutcome::Failed => self.failed += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.copied + self.skipped + self.failed
    }

    pub fn skipped_or_failed(&self) -> u64 {
        self.skipped + self.failed
    }
}

/// Aggregate of a finished run, built once after the listing is exhausted.
pub struct RunSummary {
    pub tally: CopyTally,
    pub elapsed: String,
    pub threshold: i64,
}

impl RunSummary {
    /// Render the single end-of-run summary line.
    pub fn render(&self) -> String {
        format!(
            "Copied {} of {} objects in {} ({} skipped or failed, threshold {} bytes, {} skipped)",
            self.tally.copied,
            self.tally.total(),
            self.elapsed,
            self.tally.skipped_or_failed(),
            self.threshold,
            percentage(self.tally.skipped_or_failed(), self.tally.total()),
        )
    }
}
