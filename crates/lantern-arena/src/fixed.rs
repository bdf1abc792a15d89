//! The fixed-capacity [`FixedArena`] with inline storage.

use lantern_core::{CallSite, Hooks};

use crate::bump::carve;
use crate::error::ArenaError;
use crate::region::Region;

/// A bump allocator over an inline `[u8; N]` buffer.
///
/// Where [`Arena`](crate::Arena) acquires its buffer at `init` time, a
/// `FixedArena` carries its buffer in the value itself: the capacity is
/// fixed at the type level, the arena is live from construction, and the
/// only reclamation is [`reset`](FixedArena::reset). This is the explicit
/// replacement for a process-wide fixed-buffer instance — construct one
/// where the batch lives and pass it down the call graph.
///
/// The value is `N` bytes plus bookkeeping, so large capacities belong in
/// a `Box` rather than on the stack.
///
/// ```
/// use lantern_arena::FixedArena;
///
/// let mut scratch = FixedArena::<64>::new();
/// let head = scratch.alloc(16)?;
/// assert_eq!(head.offset(), 0);
/// scratch.reset();
/// assert_eq!(scratch.alloc(64)?.offset(), 0);
/// # Ok::<(), lantern_arena::ArenaError>(())
/// ```
pub struct FixedArena<const N: usize> {
    buffer: [u8; N],
    cursor: usize,
    hooks: Hooks,
}

impl<const N: usize> FixedArena<N> {
    /// Create a zeroed arena with null hooks.
    pub fn new() -> Self {
        Self::with_hooks(Hooks::default())
    }

    /// Create a zeroed arena that reports through `hooks`.
    pub fn with_hooks(hooks: Hooks) -> Self {
        Self {
            buffer: [0; N],
            cursor: 0,
            hooks,
        }
    }

    /// Carve `size` bytes starting at the current cursor.
    ///
    /// Same contract as [`Arena::alloc`](crate::Arena::alloc); the only
    /// possible error is [`ArenaError::OutOfCapacity`].
    #[track_caller]
    pub fn alloc(&mut self, size: usize) -> Result<Region, ArenaError> {
        self.alloc_at(size, 1, CallSite::here("alloc"))
    }

    /// Carve `size` bytes at the cursor rounded up to `align`.
    ///
    /// Same contract as [`Arena::alloc_aligned`](crate::Arena::alloc_aligned).
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
        match carve(self.cursor, N, size, align) {
            Some((offset, new_cursor)) => {
                self.buffer[offset..new_cursor].fill(0);
                self.cursor = new_cursor;
                Ok(Region::new(offset, size))
            }
            None => {
                self.hooks.diag.report("arena ran out of memory", site);
                Err(ArenaError::OutOfCapacity {
                    requested: size,
                    remaining: N - self.cursor,
                })
            }
        }
    }

    /// Rewind the cursor to zero, keeping the buffer.
    ///
    /// Infallible: a fixed arena is live for the life of the value.
    /// Previously returned regions are logically invalidated.
    #[track_caller]
    pub fn reset(&mut self) {
        self.hooks.trace.record(CallSite::here("reset"));
        self.cursor = 0;
    }

    /// Resolve a region to a shared byte slice.
    ///
    /// # Panics
    ///
    /// Panics if the region does not lie within the buffer.
    pub fn bytes(&self, region: Region) -> &[u8] {
        &self.buffer[region.offset()..region.end()]
    }

    /// Resolve a region to a mutable byte slice.
    ///
    /// # Panics
    ///
    /// Panics if the region does not lie within the buffer.
    pub fn bytes_mut(&mut self, region: Region) -> &mut [u8] {
        &mut self.buffer[region.offset()..region.end()]
    }

    /// Total buffer size in bytes — always `N`.
    pub fn capacity(&self) -> usize {
        N
    }

    /// Bytes carved so far, padding included.
    pub fn used(&self) -> usize {
        self.cursor
    }

    /// Bytes left between the cursor and the end of the buffer.
    pub fn remaining(&self) -> usize {
        N - self.cursor
    }
}

impl<const N: usize> Default for FixedArena<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_is_the_const_parameter() {
        let arena = FixedArena::<32>::new();
        assert_eq!(arena.capacity(), 32);
        assert_eq!(arena.remaining(), 32);
    }

    #[test]
    fn sequential_allocs_do_not_overlap() {
        let mut arena = FixedArena::<16>::new();
        let a = arena.alloc(4).unwrap();
        let b = arena.alloc(8).unwrap();
        assert_eq!(a.offset(), 0);
        assert_eq!(b.offset(), 4);
        assert_eq!(arena.used(), 12);
    }

    #[test]
    fn boundary_is_inclusive() {
        let mut arena = FixedArena::<16>::new();
        arena.alloc(12).unwrap();
        assert!(arena.alloc(4).is_ok());
        assert!(matches!(
            arena.alloc(1),
            Err(ArenaError::OutOfCapacity {
                requested: 1,
                remaining: 0,
            })
        ));
    }

    #[test]
    fn reset_allows_reuse_of_the_same_buffer() {
        let mut arena = FixedArena::<16>::new();
        arena.alloc(16).unwrap();
        arena.reset();
        assert_eq!(arena.used(), 0);
        assert_eq!(arena.alloc(16).unwrap().offset(), 0);
    }

    #[test]
    fn aligned_alloc_skips_padding() {
        let mut arena = FixedArena::<32>::new();
        arena.alloc(3).unwrap();
        let r = arena.alloc_aligned(8, 4).unwrap();
        assert_eq!(r.offset(), 4);
        assert_eq!(r.offset() % 4, 0);
    }

    #[test]
    fn alloc_copy_round_trips() {
        let mut arena = FixedArena::<32>::new();
        let r = arena.alloc_copy(&[1, 2, 3]).unwrap();
        assert_eq!(arena.bytes(r), &[1, 2, 3]);
    }

    #[test]
    fn oversized_request_reports_remaining() {
        let mut arena = FixedArena::<8>::new();
        arena.alloc(5).unwrap();
        assert_eq!(
            arena.alloc(64),
            Err(ArenaError::OutOfCapacity {
                requested: 64,
                remaining: 3,
            })
        );
        assert_eq!(arena.used(), 5);
    }
}
