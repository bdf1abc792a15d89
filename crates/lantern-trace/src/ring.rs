//! The fixed-depth, newest-first [`TraceRing`].

use std::io::{self, Write};

use indexmap::IndexMap;
use lantern_core::{CallSite, TraceSink};
use smallvec::SmallVec;

/// Default number of entries a ring retains.
pub const DEFAULT_DEPTH: usize = 20;

/// A ring of the most recent call sites, newest first.
///
/// Recording shifts existing entries down and drops the oldest once the
/// ring is at depth. Per-site hit counts are kept separately in
/// first-seen order and survive eviction, so a long run still shows
/// which sites were hit and how often after the ring itself has churned.
///
/// ```
/// use lantern_core::CallSite;
/// use lantern_core::TraceSink;
/// use lantern_trace::TraceRing;
///
/// let mut ring = TraceRing::with_depth(2);
/// ring.record(CallSite::new("a", "m.rs", 1));
/// ring.record(CallSite::new("b", "m.rs", 2));
/// ring.record(CallSite::new("c", "m.rs", 3));
/// let names: Vec<_> = ring.iter().map(|s| s.function).collect();
/// assert_eq!(names, ["c", "b"]);
/// ```
#[derive(Clone, Debug)]
pub struct TraceRing {
    depth: usize,
    /// Newest entry at index 0.
    entries: SmallVec<[CallSite; DEFAULT_DEPTH]>,
    /// Total hits per site, first-seen order, not bounded by `depth`.
    counts: IndexMap<CallSite, u64>,
}

impl TraceRing {
    /// A ring retaining [`DEFAULT_DEPTH`] entries.
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_DEPTH)
    }

    /// A ring retaining `depth` entries.
    ///
    /// # Panics
    ///
    /// Panics if `depth` is zero.
    pub fn with_depth(depth: usize) -> Self {
        assert!(depth > 0, "trace depth must be bigger than 0");
        Self {
            depth,
            entries: SmallVec::new(),
            counts: IndexMap::new(),
        }
    }

    /// Number of entries currently retained.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded since creation or [`clear`](TraceRing::clear).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of retained entries.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Iterate retained entries, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &CallSite> {
        self.entries.iter()
    }

    /// Iterate total hit counts per site, first-seen order.
    ///
    /// Counts cover every recorded site, including ones already evicted
    /// from the ring.
    pub fn hit_counts(&self) -> impl Iterator<Item = (CallSite, u64)> + '_ {
        self.counts.iter().map(|(&site, &n)| (site, n))
    }

    /// Drop all entries and hit counts.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.counts.clear();
    }

    /// Render the ring to a writer: one line per entry, newest first,
    /// then a blank line and the hit-count summary.
    pub fn write_to<W: Write>(&self, mut w: W) -> io::Result<()> {
        for site in &self.entries {
            writeln!(w, "{site}")?;
        }
        if !self.counts.is_empty() {
            writeln!(w)?;
            for (site, n) in &self.counts {
                writeln!(w, "{n}x {site}")?;
            }
        }
        Ok(())
    }
}

impl Default for TraceRing {
    fn default() -> Self {
        Self::new()
    }
}

impl TraceSink for TraceRing {
    fn record(&mut self, site: CallSite) {
        // Shift-down insert, oldest falls off the end.
        self.entries.insert(0, site);
        self.entries.truncate(self.depth);
        *self.counts.entry(site).or_insert(0) += 1;
    }
}
