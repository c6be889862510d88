use colored::{Color, Colorize};

/// Severity tag for a console status line.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Severity {
    Debug,
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Bracketed label printed at the start of the line.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        }
    }

    /// Terminal color keyed to the severity.
    pub fn color(&self) -> Color {
        match self {
            Severity::Debug | Severity::Warning => Color::Yellow,
            Severity::Info => Color::Green,
            Severity::Error => Color::Red,
        }
    }
}

/// Build the uncolored status line. The detail suffix is omitted entirely
/// when no detail is supplied.
pub fn format_line(severity: Severity, message: &str, detail: Option<&str>) -> String {
    match detail {
        Some(detail) => format!(
            "[{}] - {} - More Details [{}]",
            severity.label(),
            message,
            detail
        ),
        None => format!("[{}] - {}", severity.label(), message),
    }
}

/// Prints categorized, color-tagged status lines to stdout.
///
/// Every call produces exactly one line; no severity is filtered out.
pub struct Reporter;

impl Reporter {
    pub fn line(&self, severity: Severity, message: &str) {
        self.print(severity, message, None);
    }

    pub fn detail(&self, severity: Severity, message: &str, detail: &str) {
        self.print(severity, message, Some(detail));
    }

    fn print(&self, severity: Severity, message: &str, detail: Option<&str>) {
        let line = format_line(severity, message, detail);
        println!("{}", line.color(severity.color()));
    }
}
