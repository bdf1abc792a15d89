//! Lantern: a debug support library — styled console output, call-site
//! tracing, and arena allocation.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Lantern sub-crates. For most users, adding `lantern` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use lantern::prelude::*;
//!
//! // An arena that reports misuse to a trace ring and a panic sink.
//! let ring = TraceRing::new();
//! let mut arena = Arena::with_hooks(Hooks::with_trace(Box::new(ring)));
//!
//! arena.init(1024)?;
//! let header = arena.alloc(16)?;
//! let samples = arena.alloc_aligned(512, 8)?;
//! assert_eq!(header.offset(), 0);
//! assert_eq!(samples.offset() % 8, 0);
//!
//! // One batch done — reclaim everything at once.
//! arena.reset()?;
//! assert_eq!(arena.used(), 0);
//! # Ok::<(), ArenaError>(())
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for items not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`arena`] | `lantern-arena` | `Arena`, `FixedArena`, `Region`, `ArenaError` |
//! | [`types`] | `lantern-core` | `CallSite`, collaborator traits, `Hooks`, string helpers |
//! | [`trace`] | `lantern-trace` | `TraceRing`, `TraceLog`, `trace_here!` |
//! | [`term`] | `lantern-term` | styles, tagged printing, rules, `ConsoleSink` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Arena allocation (`lantern-arena`).
pub use lantern_arena as arena;

/// Core types and collaborator traits (`lantern-core`).
pub use lantern_core as types;

/// ANSI-styled console output (`lantern-term`).
pub use lantern_term as term;

/// Call-site tracing (`lantern-trace`).
pub use lantern_trace as trace;

pub use lantern_core::callsite;
pub use lantern_term::{pbin, perror, pinfo, pvar, pvar_dbg};
pub use lantern_trace::trace_here;

/// The most common items in one import.
pub mod prelude {
    pub use lantern_arena::{Arena, ArenaError, FixedArena, Region};
    pub use lantern_core::{
        CallSite, DiagSink, Hooks, NullSink, NullTrace, PanicSink, TraceSink,
    };
    pub use lantern_term::{paint, Bg, Color, ConsoleSink, Mode, Style};
    pub use lantern_trace::{TraceLog, TraceRing};
}
