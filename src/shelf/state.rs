/*!
 * Shelf State
 * Availability flag, current holder and the exclusive-access lock
 */

use super::guard::ShelfGuard;
use crate::core::types::ActorId;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

/// Sentinel stored in `holder` while nobody occupies the shelf
const NO_HOLDER: u32 = u32::MAX;

/// Point-in-time view of the shelf
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShelfSnapshot {
    pub available: bool,
    pub holder: Option<ActorId>,
}

impl ShelfSnapshot {
    /// The state after `reset()`
    pub const FREE: Self = Self {
        available: true,
        holder: None,
    };
}

/// Shared warehouse shelf
///
/// One instance is shared through `Arc` by every robot of a run and reused
/// across runs.
///
/// # Example
///
/// ```rust
/// use warehouse_sim::{ActorId, Shelf, ShelfSnapshot};
///
/// let shelf = Shelf::new();
/// assert!(shelf.try_occupy(ActorId(0)));
/// assert!(!shelf.try_occupy(ActorId(1)));
/// shelf.release();
/// assert_eq!(shelf.snapshot(), ShelfSnapshot::FREE);
/// ```
#[derive(Debug)]
pub struct Shelf {
    available: AtomicBool,
    holder: AtomicU32,
    access: Mutex<()>,
}

impl Shelf {
    pub fn new() -> Self {
        Self {
            available: AtomicBool::new(true),
            holder: AtomicU32::new(NO_HOLDER),
            access: Mutex::new(()),
        }
    }

    /// Mark the shelf free. Called before robots start.
    pub fn reset(&self) {
        self.release();
    }

    /// Occupy the shelf if it looks free
    ///
    /// The availability check and the two writes are separate operations, so
    /// two robots can both pass the check. That window is what the
    /// unsynchronized protocol demonstrates.
    pub fn try_occupy(&self, actor: ActorId) -> bool {
        if !self.available.load(Ordering::Relaxed) {
            return false;
        }
        self.available.store(false, Ordering::Relaxed);
        self.holder.store(actor.get(), Ordering::Relaxed);
        true
    }

    /// Mark the shelf free. Idempotent.
    pub fn release(&self) {
        self.available.store(true, Ordering::Relaxed);
        self.holder.store(NO_HOLDER, Ordering::Relaxed);
    }

    #[inline]
    pub fn is_available(&self) -> bool {
        self.available.load(Ordering::Relaxed)
    }

    /// Current holder as recorded on the shelf; may be stale under races
    #[inline]
    pub fn holder(&self) -> Option<ActorId> {
        match self.holder.load(Ordering::Relaxed) {
            NO_HOLDER => None,
            id => Some(ActorId(id)),
        }
    }

    /// Read both fields. Not atomic as a pair.
    pub fn snapshot(&self) -> ShelfSnapshot {
        ShelfSnapshot {
            available: self.is_available(),
            holder: self.holder(),
        }
    }

    /// Mark the shelf occupied by `actor` without checking it first
    pub(super) fn occupy(&self, actor: ActorId) {
        self.available.store(false, Ordering::Relaxed);
        self.holder.store(actor.get(), Ordering::Relaxed);
    }

    /// Acquire the exclusive-access guard, blocking until it is free
    pub fn lock(&self) -> ShelfGuard<'_> {
        ShelfGuard::new(self, self.access.lock())
    }

    /// Run `critical_section` while holding the exclusive-access guard
    ///
    /// At most one caller runs its critical section at a time. The guard is
    /// released on every exit path, including unwinding.
    pub fn with_exclusive_access<F, R>(&self, critical_section: F) -> R
    where
        F: FnOnce(&mut ShelfGuard<'_>) -> R,
    {
        let mut guard = self.lock();
        critical_section(&mut guard)
    }
}

impl Default for Shelf {
    fn default() -> Self {
        Self::new()
    }
}
