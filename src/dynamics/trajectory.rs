#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{
    core::{params::ParameterSet, state::SimulationState, types::ScenarioKind},
    dynamics::{initializer::initialize, integrator::step},
    error::Result,
};

/// Runs `steps` kernel steps from a fresh state and returns every state, `t = 0` included.
pub fn run_trajectory(
    scenario: ScenarioKind,
    params: &ParameterSet,
    steps: usize,
) -> Result<Vec<SimulationState>> {
    let mut state = initialize(scenario, params)?;
    let mut states = Vec::with_capacity(steps + 1);
    states.push(state);
    for _ in 0..steps {
        state = step(scenario, state, params);
        states.push(state);
    }
    Ok(states)
}

/// Runs one trajectory per parameter branch, in parallel when the `parallel` feature is on.
///
/// Branches share nothing, so results match [`run_trajectory`] called one at a time.
pub fn run_branches(
    scenario: ScenarioKind,
    branches: &[ParameterSet],
    steps: usize,
) -> Vec<Result<Vec<SimulationState>>> {
    let run = |params: &ParameterSet| run_trajectory(scenario, params, steps);

    #[cfg(feature = "parallel")]
    let results = branches.par_iter().map(run).collect();
    #[cfg(not(feature = "parallel"))]
    let results = branches.iter().map(run).collect();

    results
}
