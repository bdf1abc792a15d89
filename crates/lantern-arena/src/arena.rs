//! The dynamic-capacity [`Arena`] with an explicit lifecycle.

use lantern_core::{CallSite, Hooks};

use crate::bump::carve;
use crate::error::ArenaError;
use crate::region::Region;

/// A bump allocator over a heap buffer acquired at [`init`](Arena::init)
/// time.
///
/// The arena starts *uninitialized* (no buffer). `init` acquires the
/// buffer and zeroes the cursor; allocations then carve sequential,
/// non-overlapping regions until [`reset`](Arena::reset) rewinds the
/// cursor or [`release`](Arena::release) drops the buffer and returns the
/// arena to the uninitialized state. The cursor is monotonically
/// non-decreasing between `init`/`reset` and the next `reset`/`release`,
/// so no region is ever handed out twice.
///
/// Every operation records its entry with the arena's trace sink and
/// reports precondition violations to its diagnostic sink; the typed
/// error is returned in all configurations, whatever the sinks do.
///
/// There is no internal synchronization and the buffer is exclusively
/// owned by exactly one arena value; callers sharing an arena across
/// threads must provide external mutual exclusion around every operation.
///
/// ```
/// use lantern_arena::Arena;
///
/// let mut arena = Arena::new();
/// arena.init(16)?;
/// let header = arena.alloc(4)?;
/// let body = arena.alloc(8)?;
/// assert_eq!(header.offset(), 0);
/// assert_eq!(body.offset(), 4);
/// arena.reset()?;
/// assert_eq!(arena.alloc(16)?.offset(), 0);
/// # Ok::<(), lantern_arena::ArenaError>(())
/// ```
pub struct Arena {
    /// Backing storage. `Some` iff the arena is initialized.
    buffer: Option<Box<[u8]>>,
    /// Offset of the next free byte.
    cursor: usize,
    hooks: Hooks,
}

impl Arena {
    /// Create an uninitialized arena with null hooks.
    pub fn new() -> Self {
        Self::with_hooks(Hooks::default())
    }

    /// Create an uninitialized arena that reports through `hooks`.
    pub fn with_hooks(hooks: Hooks) -> Self {
        Self {
            buffer: None,
            cursor: 0,
            hooks,
        }
    }

    /// Acquire a zeroed buffer of exactly `capacity` bytes.
    ///
    /// Fails with [`ArenaError::AlreadyInitialized`] if the arena already
    /// owns a buffer and [`ArenaError::InvalidCapacity`] if `capacity` is
    /// zero. On failure no state changes.
    #[track_caller]
    pub fn init(&mut self, capacity: usize) -> Result<(), ArenaError> {
        let site = CallSite::here("init");
        self.hooks.trace.record(site);
        if self.buffer.is_some() {
            self.hooks
                .diag
                .report("arena is already initialized, release it first", site);
            return Err(ArenaError::AlreadyInitialized);
        }
        if capacity == 0 {
            self.hooks
                .diag
                .report("arena capacity must be bigger than 0", site);
            return Err(ArenaError::InvalidCapacity);
        }
        self.buffer = Some(vec![0u8; capacity].into_boxed_slice());
        self.cursor = 0;
        Ok(())
    }

    /// Carve `size` bytes starting at the current cursor.
    ///
    /// Equivalent to [`alloc_aligned`](Arena::alloc_aligned) with an
    /// alignment of 1. A zero `size` yields an empty region at the
    /// cursor.
    #[track_caller]
    pub fn alloc(&mut self, size: usize) -> Result<Region, ArenaError> {
        self.alloc_at(size, 1, CallSite::here("alloc"))
    }

    /// Carve `size` bytes at the cursor rounded up to `align`.
    ///
    /// The returned region begins at the rounded pre-update cursor — the
    /// caller's bytes start exactly where the cursor stood, never past
    /// it — and the region's offset is divisible by `align`. Skipped
    /// padding bytes are never handed out. The bounds check is inclusive:
    /// a request ending exactly at the capacity succeeds.
    ///
    /// Fails with [`ArenaError::NotInitialized`] before `init` and
    /// [`ArenaError::OutOfCapacity`] when the request does not fit; the
    /// cursor is unchanged on failure.
    ///
    /// # Panics
    ///
    /// Panics if `align` is not a power of two.
    #[track_caller]
    pub fn alloc_aligned(&mut self, size: usize, align: usize) -> Result<Region, ArenaError> {
        self.alloc_at(size, align, CallSite::here("alloc_aligned"))
    }

    /// Carve a region the size of `bytes` and copy `bytes` into it.
    #[track_caller]
    pub fn alloc_copy(&mut self, bytes: &[u8]) -> Result<Region, ArenaError> {
        let region = self.alloc_at(bytes.len(), 1, CallSite::here("alloc_copy"))?;
        self.bytes_mut(region).copy_from_slice(bytes);
        Ok(region)
    }

    fn alloc_at(
        &mut self,
        size: usize,
        align: usize,
        site: CallSite,
    ) -> Result<Region, ArenaError> {
        self.hooks.trace.record(site);
        assert!(
            align.is_power_of_two(),
            "align must be a power of two, got {align}"
        );
        let Some(buffer) = self.buffer.as_mut() else {
            self.hooks
                .diag
                .report("arena is not initialized, call init() first", site);
            return Err(ArenaError::NotInitialized);
        };
        match carve(self.cursor, buffer.len(), size, align) {
            Some((offset, new_cursor)) => {
                // Zeroed so stale bytes from before a reset never leak
                // through a fresh region. Not part of the contract.
                buffer[offset..new_cursor].fill(0);
                self.cursor = new_cursor;
                Ok(Region::new(offset, size))
            }
            None => {
                let remaining = buffer.len() - self.cursor;
                self.hooks.diag.report("arena ran out of memory", site);
                Err(ArenaError::OutOfCapacity {
                    requested: size,
                    remaining,
                })
            }
        }
    }

    /// Rewind the cursor to zero, keeping the buffer.
    ///
    /// Previously returned regions are logically invalidated — their
    /// bytes may be re-carved by subsequent allocations. The buffer is
    /// not zeroed here.
    ///
    /// Fails with [`ArenaError::NotInitialized`] before `init`.
    #[track_caller]
    pub fn reset(&mut self) -> Result<(), ArenaError> {
        let site = CallSite::here("reset");
        self.hooks.trace.record(site);
        if self.buffer.is_none() {
            self.hooks
                .diag
                .report("arena is not initialized, call init() first", site);
            return Err(ArenaError::NotInitialized);
        }
        self.cursor = 0;
        Ok(())
    }

    /// Drop the buffer and return to the uninitialized state.
    ///
    /// After `release`, `alloc` and `reset` fail with
    /// [`ArenaError::NotInitialized`] until `init` is called again. A
    /// second `release` without an intervening `init` fails the same way.
    #[track_caller]
    pub fn release(&mut self) -> Result<(), ArenaError> {
        let site = CallSite::here("release");
        self.hooks.trace.record(site);
        if self.buffer.take().is_none() {
            self.hooks
                .diag
                .report("arena is not initialized, call init() first", site);
            return Err(ArenaError::NotInitialized);
        }
        self.cursor = 0;
        Ok(())
    }

    /// Resolve a region to a shared byte slice.
    ///
    /// # Panics
    ///
    /// Panics if the arena is uninitialized or the region does not lie
    /// within the buffer.
    pub fn bytes(&self, region: Region) -> &[u8] {
        let buffer = self
            .buffer
            .as_deref()
            .expect("arena is not initialized, call init() first");
        &buffer[region.offset()..region.end()]
    }

    /// Resolve a region to a mutable byte slice.
    ///
    /// # Panics
    ///
    /// Panics if the arena is uninitialized or the region does not lie
    /// within the buffer.
    pub fn bytes_mut(&mut self, region: Region) -> &mut [u8] {
        let buffer = self
            .buffer
            .as_deref_mut()
            .expect("arena is not initialized, call init() first");
        &mut buffer[region.offset()..region.end()]
    }

    /// Whether the arena currently owns a buffer.
    pub fn is_initialized(&self) -> bool {
        self.buffer.is_some()
    }

    /// Total buffer size in bytes; zero while uninitialized.
    pub fn capacity(&self) -> usize {
        self.buffer.as_deref().map_or(0, <[u8]>::len)
    }

    /// Bytes carved so far, padding included.
    pub fn used(&self) -> usize {
        self.cursor
    }

    /// Bytes left between the cursor and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.capacity() - self.cursor
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}
