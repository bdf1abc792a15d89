//! Core types and collaborator traits for the Lantern debug library.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! abstractions shared by the rest of the workspace: the [`CallSite`]
//! location triple, the [`DiagSink`] and [`TraceSink`] collaborator traits
//! with their null implementations, the [`Hooks`] bundle that threads both
//! through instrumented components, and a pair of string helpers.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod diag;
pub mod hooks;
pub mod site;
pub mod strutil;
pub mod trace;

pub use diag::{DiagSink, NullSink, PanicSink};
pub use hooks::Hooks;
pub use site::CallSite;
pub use trace::{NullTrace, TraceSink};
