/*!
 * Core Types
 * Common types used across the simulation
 */

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of one robot, unique within a run and assigned `0..N-1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorId(pub u32);

impl ActorId {
    /// Largest id a run may hand out; `u32::MAX` marks an empty shelf
    pub const MAX: u32 = u32::MAX - 1;

    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ActorId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}
