/*!
 * Synchronized Access
 * Occupy, hold and release inside the shelf's exclusive-access guard
 */

use super::{pause, ActorContext, ActorOutcome};
use crate::core::types::ActorId;
use crate::monitoring::EventKind;
use tracing::debug;

/// Move to the shelf, then take turns using it
///
/// Travel happens outside the guard so robots still move concurrently. The
/// guard is released when the critical section exits, by any path.
pub fn access_with_lock(ctx: &ActorContext, actor: ActorId) -> ActorOutcome {
    ctx.emit(actor, EventKind::Moving);
    pause(ctx.delays.travel(actor));

    ctx.shelf.with_exclusive_access(|guard| {
        ctx.emit(actor, EventKind::Accessing);
        guard.occupy(actor);

        let hold = ctx.delays.hold(actor);
        debug!(robot = %actor, hold_ms = hold.as_millis() as u64, "picking item");
        pause(hold);

        guard.release();
        ctx.emit(actor, EventKind::Finished);
    });

    ActorOutcome::Finished
}
