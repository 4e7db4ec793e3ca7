//! Diagnostics sink seam between rules and the surrounding framework.

use serde::{Deserialize, Serialize};

/// One reported rule violation.
///
/// A finding is a raw (position, rule id, args) tuple. Formatting it into a
/// user-facing message is the surrounding framework's job; rules never
/// produce display text themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Line of the offending token (1-indexed).
    pub line: usize,
    /// Column of the offending token (1-indexed).
    pub column: usize,
    /// Identifier of the rule that produced this finding.
    pub rule_id: String,
    /// Message arguments; for the identifier-length rule, the offending name.
    pub args: Vec<String>,
}

impl Finding {
    /// Creates a new finding.
    #[must_use]
    pub fn new(line: usize, column: usize, rule_id: impl Into<String>, args: &[&str]) -> Self {
        Self {
            line,
            column,
            rule_id: rule_id.into(),
            args: args.iter().map(|a| (*a).to_string()).collect(),
        }
    }
}

/// Destination for findings produced during a traversal.
///
/// Implemented by whatever aggregates and renders diagnostics; rules only
/// ever submit through this seam and hold nothing after reporting.
pub trait DiagnosticSink {
    /// Records one finding at the given position.
    fn report(&mut self, line: usize, column: usize, rule_id: &str, args: &[&str]);
}

/// A sink that buffers findings in memory.
///
/// The default sink for tests and for embedders that post-process findings
/// themselves.
#[derive(Debug, Default)]
pub struct CollectingSink {
    findings: Vec<Finding>,
}

impl CollectingSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the findings recorded so far, in report order.
    #[must_use]
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Consumes the sink and returns its findings.
    #[must_use]
    pub fn into_findings(self) -> Vec<Finding> {
        self.findings
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&mut self, line: usize, column: usize, rule_id: &str, args: &[&str]) {
        self.findings.push(Finding::new(line, column, rule_id, args));
    }
}
