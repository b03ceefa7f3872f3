//! Operator-facing reporting sinks.

use colored::Colorize;

/// Receives operator-visible announcements from the validator.
///
/// Sinks are infallible by signature: a sink that cannot deliver must
/// swallow the problem itself, so a reporting hiccup never masks the
/// validation failure being announced.
pub trait Reporter {
    fn error(&self, message: &str);
}

/// Writes announcements to stderr, colored for terminals.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn error(&self, message: &str) {
        eprintln!("{}", message.red());
    }
}

/// Discards announcements. The default for embedding runners that report
/// through their own channels.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn error(&self, _message: &str) {}
}
