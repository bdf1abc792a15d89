//! The [`Hooks`] bundle: one diagnostic sink plus one trace sink.

use crate::diag::{DiagSink, NullSink};
use crate::trace::{NullTrace, TraceSink};

/// The pair of collaborators an instrumented component reports through.
///
/// Components own their hooks and call them internally; callers pick the
/// policy at construction time and thread the component — not a global —
/// through the call graph.
///
/// ```
/// use lantern_core::{Hooks, PanicSink};
///
/// let strict = Hooks::with_diag(Box::new(PanicSink));
/// let silent = Hooks::default();
/// # let _ = (strict, silent);
/// ```
pub struct Hooks {
    /// Where precondition violations are reported.
    pub diag: Box<dyn DiagSink>,
    /// Where operation entries are recorded.
    pub trace: Box<dyn TraceSink>,
}

impl Hooks {
    /// Bundle a diagnostic sink and a trace sink.
    pub fn new(diag: Box<dyn DiagSink>, trace: Box<dyn TraceSink>) -> Self {
        Self { diag, trace }
    }

    /// A diagnostic sink with tracing disabled.
    pub fn with_diag(diag: Box<dyn DiagSink>) -> Self {
        Self {
            diag,
            trace: Box::new(NullTrace),
        }
    }

    /// A trace sink with diagnostics disabled.
    pub fn with_trace(trace: Box<dyn TraceSink>) -> Self {
        Self {
            diag: Box::new(NullSink),
            trace,
        }
    }
}

impl Default for Hooks {
    fn default() -> Self {
        Self::new(Box::new(NullSink), Box::new(NullTrace))
    }
}
