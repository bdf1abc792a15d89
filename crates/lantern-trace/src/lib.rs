//! Call-site tracing for the Lantern debug library.
//!
//! [`TraceRing`] keeps the last N call sites, newest first, plus per-site
//! hit counts that survive ring eviction. [`TraceLog`] wraps a ring with
//! a log-file path and rewrites the file on [`flush`](TraceLog::flush).
//! Both implement [`TraceSink`], so either can be plugged into an
//! instrumented component's hooks; [`trace_here!`] records the current
//! function manually.
//!
//! ```
//! use lantern_trace::{trace_here, TraceRing};
//!
//! fn parse(ring: &mut TraceRing) {
//!     trace_here!(ring);
//! }
//!
//! let mut ring = TraceRing::new();
//! parse(&mut ring);
//! assert_eq!(ring.len(), 1);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod log;
pub mod ring;

pub use lantern_core::{callsite, CallSite, TraceSink};
pub use log::TraceLog;
pub use ring::{TraceRing, DEFAULT_DEPTH};

/// Record the enclosing function's call site into a [`TraceSink`].
///
/// Put one at the top of a function to mirror the classic trace-on-entry
/// discipline:
///
/// ```
/// use lantern_trace::{trace_here, TraceRing};
///
/// fn load_level(ring: &mut TraceRing) {
///     trace_here!(ring);
///     // ...
/// }
/// # let mut ring = TraceRing::new();
/// # load_level(&mut ring);
/// ```
#[macro_export]
macro_rules! trace_here {
    ($sink:expr) => {{
        use $crate::TraceSink as _;
        $sink.record($crate::callsite!());
    }};
}
