//! Bump (arena) allocation for the Lantern debug library.
//!
//! An arena serves memory by advancing a single cursor through a
//! pre-acquired buffer:
//!
//! ```text
//! ┌────────┬────────┬──────┬──────────────────────────┐
//! │   r1   │   r2   │  r3  │          free            │
//! └────────┴────────┴──────┴──────────────────────────┘
//!                          ▲
//!                        cursor
//! ```
//!
//! Allocation is O(1) — bump the cursor — and reclamation is bulk-only:
//! `reset` rewinds the cursor, `release` returns the buffer. There is no
//! per-region metadata and no individual free. This trade is the right
//! one for short-lived batches with a common end-of-life (one frame, one
//! request, one parse pass).
//!
//! Two variants:
//!
//! - [`Arena`] — heap buffer sized at [`init`](Arena::init) time, with an
//!   explicit uninitialized/initialized lifecycle and
//!   [`release`](Arena::release).
//! - [`FixedArena`] — inline `[u8; N]` buffer, live for the life of the
//!   value, reclamation via [`reset`](FixedArena::reset) only.
//!
//! Allocations return [`Region`] descriptors rather than references;
//! [`Arena::bytes`] and [`Arena::bytes_mut`] resolve a region against the
//! buffer. Every operation records its entry with the arena's trace sink
//! and reports precondition violations to its diagnostic sink before
//! returning a typed [`ArenaError`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
mod bump;
pub mod error;
pub mod fixed;
pub mod region;

pub use arena::Arena;
pub use error::ArenaError;
pub use fixed::FixedArena;
pub use region::Region;
