/*!
 * Shelf
 *
 * The single exclusive resource robots contend for, plus the scoped guard the
 * synchronized protocol uses to serialize access to it.
 *
 * ## Access Paths
 *
 * - **Unsynchronized**: `try_occupy` / `release` touch the fields directly.
 *   Each field is atomic, the check-then-act sequence over them is not.
 * - **Synchronized**: `with_exclusive_access` / `lock` hand out a
 *   [`ShelfGuard`]; all reads and writes happen while it is held.
 */

mod guard;
mod state;

pub use guard::ShelfGuard;
pub use state::{Shelf, ShelfSnapshot};
