use slider_lab::*;

fn main() {
    let params = ParameterSet {
        angle_deg: 35.0,
        mu_static: 0.4,
        mu_kinetic: 0.3,
        initial_velocity: -5.0,
        ..ParameterSet::preset(ScenarioKind::Single)
    };

    let states = match run_trajectory(ScenarioKind::Single, &params, 256) {
        Ok(states) => states,
        Err(err) => {
            eprintln!("invalid parameters: {err}");
            return;
        }
    };

    for state in states.iter().step_by(16) {
        println!(
            "t={:6.3}s x={:7.3} v={:7.3} a={:7.3} {}",
            state.t, state.x1, state.v1, state.a1, state.status
        );
    }
}
