/*!
 * Shelf Guard
 *
 * Scoped exclusive access to the shelf with automatic cleanup
 */

use super::state::{Shelf, ShelfSnapshot};
use crate::core::types::ActorId;
use parking_lot::MutexGuard;
use tracing::warn;

/// Exclusive access to a [`Shelf`]
///
/// While a `ShelfGuard` is alive no other robot can obtain one. Dropping it
/// unlocks the shelf; if the holder never released the shelf (for example
/// because its work panicked) the drop frees it first, so the next robot never
/// finds a stale occupant.
///
/// # Example
///
/// ```rust
/// use warehouse_sim::{ActorId, Shelf};
///
/// let shelf = Shelf::new();
/// {
///     let mut guard = shelf.lock();
///     guard.occupy(ActorId(1));
///     guard.release();
/// } // unlocked here
/// assert!(shelf.is_available());
/// ```
pub struct ShelfGuard<'a> {
    shelf: &'a Shelf,
    _lock: MutexGuard<'a, ()>,
}

impl<'a> ShelfGuard<'a> {
    pub(super) fn new(shelf: &'a Shelf, lock: MutexGuard<'a, ()>) -> Self {
        Self { shelf, _lock: lock }
    }

    /// Mark the shelf occupied by `actor`
    #[inline]
    pub fn occupy(&mut self, actor: ActorId) {
        self.shelf.occupy(actor);
    }

    /// Mark the shelf free
    #[inline]
    pub fn release(&mut self) {
        self.shelf.release();
    }

    /// Consistent view of the shelf; no other robot can write while held
    #[inline]
    pub fn snapshot(&self) -> ShelfSnapshot {
        self.shelf.snapshot()
    }
}

impl Drop for ShelfGuard<'_> {
    fn drop(&mut self) {
        // Runs before `_lock` is dropped, so the shelf is freed while still exclusive
        if !self.shelf.is_available() {
            warn!(
                holder = ?self.shelf.holder(),
                "shelf guard dropped while occupied, releasing"
            );
            self.shelf.release();
        }
    }
}
