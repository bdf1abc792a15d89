//! The diagnostic collaborator: precondition-violation reporting.
//!
//! Instrumented components call [`DiagSink::report`] whenever a
//! precondition check fails, then return a typed error to the caller. The
//! sink decides the side-effect policy — nothing ([`NullSink`]), abort
//! ([`PanicSink`]), or printing/recording (sinks in other crates). A sink
//! never suppresses the typed error; the two channels are independent.

use crate::site::CallSite;

/// Receives precondition-violation reports from instrumented components.
pub trait DiagSink {
    /// Record a violated precondition.
    ///
    /// `message` describes the violation; `site` is the call that
    /// triggered it.
    fn report(&mut self, message: &str, site: CallSite);
}

/// A sink that discards every report. The production default.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl DiagSink for NullSink {
    fn report(&mut self, _message: &str, _site: CallSite) {}
}

/// A sink that panics on the first report.
///
/// This is the stop-the-world policy of a debug build: any misuse of an
/// instrumented component halts execution at the offending call site.
#[derive(Clone, Copy, Debug, Default)]
pub struct PanicSink;

impl DiagSink for PanicSink {
    fn report(&mut self, message: &str, site: CallSite) {
        panic!("{message}\n -> {site}");
    }
}
