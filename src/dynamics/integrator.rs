use crate::{
    config::DT,
    core::{params::ParameterSet, state::SimulationState, types::ScenarioKind},
    dynamics::forces::{model_for, Velocities},
};

/// Advances `previous` by exactly one fixed timestep [`DT`].
///
/// Semi-implicit Euler: velocities are updated from the accelerations of the incoming
/// state, snapped where a contact passed its lock point, and the new velocities then move
/// the positions. Accelerations and status of the returned state are re-derived from its
/// own velocities, so they always describe the state they are stored in.
///
/// `params` is expected to have passed [`ParameterSet::validate`] for `scenario`.
pub fn step(
    scenario: ScenarioKind,
    previous: SimulationState,
    params: &ParameterSet,
) -> SimulationState {
    debug_assert!(params.mass > 0.0, "block mass must be validated before stepping");
    debug_assert!(
        scenario != ScenarioKind::Plank || params.plank_mass > 0.0,
        "plank mass must be validated before stepping"
    );

    let model = model_for(scenario);
    let before = Velocities::new(previous.v1, previous.v2);
    let dynamics = model.evaluate(params, before);

    let unsettled = Velocities::new(
        integrate_velocity(before.v1, dynamics.a1),
        integrate_velocity(before.v2, dynamics.a2),
    );
    let settled = model.settle(params, before, unsettled);
    let current = model.evaluate(params, settled);
    let velocities = model.hold(params, &current, settled);

    let mut next = SimulationState {
        t: previous.t + DT,
        x1: integrate_position(previous.x1, velocities.v1),
        x2: previous.x2,
        s1: integrate_path(previous.s1, velocities.v1),
        s2: previous.s2,
        v1: velocities.v1,
        v2: velocities.v2,
        a1: current.a1,
        a2: current.a2,
        status: current.status,
    };

    if scenario.has_secondary_body() {
        next.x2 = integrate_position(previous.x2, velocities.v2);
        next.s2 = integrate_path(previous.s2, velocities.v2);
    }

    next
}

fn integrate_velocity(velocity: f64, acceleration: f64) -> f64 {
    velocity + acceleration * DT
}

fn integrate_position(position: f64, velocity: f64) -> f64 {
    position + velocity * DT
}

fn integrate_path(path: f64, velocity: f64) -> f64 {
    path + velocity.abs() * DT
}
