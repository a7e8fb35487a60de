//! Simulation dynamics: friction resolution, scenario force models, and the fixed-step integrator.

pub mod forces;
pub mod friction;
pub mod initializer;
pub mod integrator;
pub mod trajectory;

pub use forces::{model_for, BeltModel, Dynamics, ForceModel, InclineModel, PlankModel, Velocities};
pub use friction::{resolve, FrictionResponse};
pub use initializer::initialize;
pub use integrator::step;
pub use trajectory::{run_branches, run_trajectory};
