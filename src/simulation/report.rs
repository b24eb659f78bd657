/*!
 * Run Report
 * Summary of one simulation run, built from the joined robot outcomes
 */

use crate::core::types::ActorId;
use crate::protocol::{ActorOutcome, Protocol};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub protocol: Protocol,
    pub robots: usize,
    pub finished: usize,
    pub conflicts: usize,
    /// Per-robot outcome, ordered by robot id
    pub outcomes: Vec<(ActorId, ActorOutcome)>,
    pub elapsed: Duration,
}

impl RunReport {
    pub fn new(
        protocol: Protocol,
        mut outcomes: Vec<(ActorId, ActorOutcome)>,
        elapsed: Duration,
    ) -> Self {
        outcomes.sort_by_key(|(actor, _)| *actor);
        let conflicts = outcomes.iter().filter(|(_, o)| o.is_conflict()).count();
        Self {
            protocol,
            robots: outcomes.len(),
            finished: outcomes.len() - conflicts,
            conflicts,
            outcomes,
            elapsed,
        }
    }

    #[inline]
    pub fn has_conflicts(&self) -> bool {
        self.conflicts > 0
    }

    pub fn outcome(&self, actor: ActorId) -> Option<ActorOutcome> {
        self.outcomes
            .iter()
            .find(|(a, _)| *a == actor)
            .map(|(_, outcome)| *outcome)
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Run {}: {} robots, {} finished, {} conflicts in {:.2}s",
            self.protocol,
            self.robots,
            self.finished,
            self.conflicts,
            self.elapsed.as_secs_f64()
        )
    }
}
