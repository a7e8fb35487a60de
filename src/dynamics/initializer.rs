use log::warn;

use crate::{
    config::PLANK_BLOCK_OFFSET,
    core::{params::ParameterSet, state::SimulationState, types::ScenarioKind},
    dynamics::forces::{model_for, Velocities},
    error::Result,
};

/// Builds the `t = 0` state for `scenario`.
///
/// The parameter set is validated here, once per run; this is the only place the kernel
/// reports an error. Initial accelerations and status come from the same force model the
/// integrator uses, so a fresh state already shows whether the bodies slide or hold.
pub fn initialize(scenario: ScenarioKind, params: &ParameterSet) -> Result<SimulationState> {
    if let Err(err) = params.validate(scenario) {
        warn!("rejected {scenario} parameters: {err}");
        return Err(err);
    }

    let (x1, velocities) = match scenario {
        ScenarioKind::Single => (0.0, Velocities::new(params.initial_velocity, 0.0)),
        ScenarioKind::Belt => (
            0.0,
            Velocities::new(params.initial_velocity, params.belt_velocity),
        ),
        ScenarioKind::Plank => (
            PLANK_BLOCK_OFFSET,
            Velocities::new(params.initial_velocity, params.plank_initial_velocity),
        ),
    };

    let model = model_for(scenario);
    let dynamics = model.evaluate(params, velocities);
    let velocities = model.hold(params, &dynamics, velocities);

    Ok(SimulationState {
        t: 0.0,
        x1,
        x2: 0.0,
        s1: 0.0,
        s2: 0.0,
        v1: velocities.v1,
        v2: velocities.v2,
        a1: dynamics.a1,
        a2: dynamics.a2,
        status: dynamics.status,
    })
}
