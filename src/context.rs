//! Per-traversal context handed to rule hooks.

use crate::sink::DiagnosticSink;
use crate::trace::TraceState;

/// Context for one traversal of one file.
///
/// Carries the current file name, the diagnostics sink findings go to, and
/// the traversal's trace state. The walker creates a fresh context per file;
/// a context is never shared between files, so rule instances themselves can
/// stay immutable and be reused across traversals.
pub struct RuleContext<'a> {
    /// Name of the file whose tree is being traversed.
    pub file: &'a str,
    /// Nesting state for the optional traversal trace.
    pub trace: TraceState,
    sink: &'a mut dyn DiagnosticSink,
}

impl<'a> RuleContext<'a> {
    /// Creates a context with tracing disabled.
    #[must_use]
    pub fn new(file: &'a str, sink: &'a mut dyn DiagnosticSink) -> Self {
        Self {
            file,
            trace: TraceState::default(),
            sink,
        }
    }

    /// Enables or disables the traversal trace.
    #[must_use]
    pub fn with_trace(mut self, enabled: bool) -> Self {
        self.trace = TraceState::new(enabled);
        self
    }

    /// Submits one finding to the diagnostics sink.
    pub fn report(&mut self, line: usize, column: usize, rule_id: &str, args: &[&str]) {
        self.sink.report(line, column, rule_id, args);
    }
}

impl std::fmt::Debug for RuleContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleContext")
            .field("file", &self.file)
            .field("trace", &self.trace)
            .finish_non_exhaustive()
    }
}
