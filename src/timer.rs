use std::time::Instant;

/// Wall-clock timer for a whole run.
pub struct RunTimer {
    started: Instant,
    stopped: Option<Instant>,
}

impl RunTimer {
    /// Start timing now.
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
            stopped: None,
        }
    }

    /// Capture the end of the run. Later calls move the end point forward.
    pub fn stop(&mut self) {
        self.stopped = Some(Instant::now());
    }

    /// Elapsed seconds, measured against "now" if the timer is still running.
    pub fn elapsed(&self) -> f64 {
        let end = self.stopped.unwrap_or_else(Instant::now);
        end.duration_since(self.started).as_secs_f64()
    }

    /// Render the elapsed duration as zero-padded HH:MM:SS.
    pub fn summary(&self) -> String {
        format_clock(self.elapsed() as u64)
    }
}

/// Format whole seconds as HH:MM:SS. Durations of 24 hours or more wrap
/// per standard clock arithmetic.
pub fn format_clock(secs: u64) -> String {
    let hours = (secs / 3600) % 24;
    let minutes = (secs / 60) % 60;
    let seconds = secs % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}
