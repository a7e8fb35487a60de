use serde::{Deserialize, Serialize};

use crate::core::types::MotionStatus;

/// Snapshot of the simulated bodies at time `t`.
///
/// Index 1 is the block. Index 2 is the plank in the plank scenario. The belt scenario
/// reports the belt speed in `v2`. The single scenario leaves every index-2 field at zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    pub t: f64,
    pub x1: f64,
    pub x2: f64,
    /// Cumulative path length of the block; never decreases.
    pub s1: f64,
    pub s2: f64,
    pub v1: f64,
    pub v2: f64,
    pub a1: f64,
    pub a2: f64,
    pub status: MotionStatus,
}

impl SimulationState {
    /// Block displacement measured along the plank (or against the ground elsewhere).
    pub fn relative_displacement(&self) -> f64 {
        self.x1 - self.x2
    }
}
