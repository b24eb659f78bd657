/*!
 * Unsynchronized Access
 * Check-then-act with no mutual exclusion
 */

use super::{pause, ActorContext, ActorOutcome};
use crate::core::types::ActorId;
use crate::monitoring::EventKind;
use tracing::debug;

/// Move to the shelf and try to use it without taking the lock
///
/// A robot that finds the shelf occupied reports a conflict naming the robot
/// recorded as holder and stops. That name is read after the failed check, so
/// under a race it can be stale or missing.
pub fn access_without_lock(ctx: &ActorContext, actor: ActorId) -> ActorOutcome {
    ctx.emit(actor, EventKind::Moving);
    pause(ctx.delays.travel(actor));

    if !ctx.shelf.try_occupy(actor) {
        let holder = ctx.shelf.holder();
        ctx.emit(actor, EventKind::Conflict { holder });
        return ActorOutcome::Conflict { holder };
    }

    ctx.emit(actor, EventKind::Accessing);
    let hold = ctx.delays.hold(actor);
    debug!(robot = %actor, hold_ms = hold.as_millis() as u64, "picking item");
    pause(hold);
    ctx.shelf.release();
    ctx.emit(actor, EventKind::Finished);
    ActorOutcome::Finished
}
