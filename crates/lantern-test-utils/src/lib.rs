//! Test utilities and recording sinks for Lantern development.
//!
//! Provides recording implementations of the collaborator traits
//! ([`CollectingSink`], [`CollectingTrace`]) plus small call-site
//! fixtures. The recording sinks hand out cloneable handles over shared
//! storage, so a test can keep one handle and box the other into
//! [`Hooks`](lantern_core::Hooks).

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod fixtures;
mod sinks;

pub use fixtures::site;
pub use sinks::{CollectingSink, CollectingTrace, Report};
