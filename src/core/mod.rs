//! Core types describing scenarios, parameters, and simulated state.

pub mod params;
pub mod state;
pub mod types;

pub use params::ParameterSet;
pub use state::SimulationState;
pub use types::{ContactRegime, MotionStatus, ScenarioKind};
