use approx::assert_relative_eq;
use slider_lab::*;

fn flat(params: ParameterSet) -> ParameterSet {
    ParameterSet {
        angle_deg: 0.0,
        ..params
    }
}

#[test]
fn path_lengths_never_decrease() {
    for scenario in ScenarioKind::ALL {
        let params = ParameterSet::preset(scenario);
        let states = run_trajectory(scenario, &params, 2000).expect("preset is valid");
        for pair in states.windows(2) {
            assert!(pair[1].s1 >= pair[0].s1, "{scenario}: s1 decreased");
            assert!(pair[1].s2 >= pair[0].s2, "{scenario}: s2 decreased");
        }
    }
}

#[test]
fn time_advances_by_exactly_dt() {
    for scenario in ScenarioKind::ALL {
        let params = ParameterSet::preset(scenario);
        let mut state = initialize(scenario, &params).expect("preset is valid");
        for n in 1..=1000u32 {
            state = step(scenario, state, &params);
            assert_eq!(state.t, f64::from(n) * DT);
        }
    }
}

#[test]
fn playback_speed_does_not_change_physics() {
    let slow = ParameterSet {
        playback_speed: 0.25,
        ..ParameterSet::preset(ScenarioKind::Single)
    };
    let fast = ParameterSet {
        playback_speed: 8.0,
        ..slow
    };
    assert_eq!(
        run_trajectory(ScenarioKind::Single, &slow, 300).expect("valid"),
        run_trajectory(ScenarioKind::Single, &fast, 300).expect("valid")
    );
}

#[test]
fn flat_sliding_decelerates_and_locks_at_zero() {
    for v0 in [3.0, -3.0] {
        let params = flat(ParameterSet {
            mu_static: 0.5,
            mu_kinetic: 0.3,
            initial_velocity: v0,
            ..ParameterSet::default()
        });
        let mut state = initialize(ScenarioKind::Single, &params).expect("valid");
        assert_eq!(state.status, MotionStatus::Sliding);

        let mut stopped_at = None;
        for i in 0..500 {
            let next = step(ScenarioKind::Single, state, &params);
            assert!(next.v1.abs() <= state.v1.abs(), "speed grew at step {i}");
            assert!(next.v1 * v0.signum() >= 0.0, "velocity overshot zero at step {i}");
            if next.v1 == 0.0 && stopped_at.is_none() {
                stopped_at = Some(i);
            }
            if stopped_at.is_some() {
                assert_eq!(next.v1, 0.0);
                assert_eq!(next.a1, 0.0);
                assert_eq!(next.status, MotionStatus::AtRest);
            }
            state = next;
        }

        // v0 / (mu_k * g) is a little over one second.
        let stop = stopped_at.expect("block should stop");
        assert!((60..=70).contains(&stop), "stopped after {stop} steps");
    }
}

#[test]
fn sub_critical_incline_never_starts_moving() {
    let params = ParameterSet {
        angle_deg: 15.0,
        mu_static: 0.5,
        mu_kinetic: 0.4,
        initial_velocity: 0.0,
        ..ParameterSet::default()
    };
    let mut state = initialize(ScenarioKind::Single, &params).expect("valid");
    for _ in 0..10_000 {
        assert_eq!(state.v1, 0.0);
        assert_eq!(state.x1, 0.0);
        assert_eq!(state.status, MotionStatus::AtRest);
        state = step(ScenarioKind::Single, state, &params);
    }
}

#[test]
fn block_thrown_up_steep_incline_stops_then_slides_back() {
    let params = ParameterSet {
        angle_deg: 40.0,
        mu_static: 0.3,
        mu_kinetic: 0.2,
        initial_velocity: -4.0,
        ..ParameterSet::default()
    };
    let states = run_trajectory(ScenarioKind::Single, &params, 400).expect("valid");

    let turn = states
        .iter()
        .position(|s| s.v1 == 0.0)
        .expect("block should stop on its way up");
    assert_eq!(states[turn].status, MotionStatus::Sliding);
    assert!(states[turn].a1 > 0.0);
    assert!(states[turn + 1].v1 > 0.0);
    assert!(states[turn..].iter().all(|s| s.v1 >= 0.0));
}

#[test]
fn belt_converges_to_belt_speed_and_stays() {
    for v0 in [-1.0, 0.0, 5.0] {
        let params = ParameterSet {
            initial_velocity: v0,
            belt_velocity: 2.0,
            ..ParameterSet::preset(ScenarioKind::Belt)
        };
        let mut state = initialize(ScenarioKind::Belt, &params).expect("valid");
        let mut steps = 0;
        while state.status != MotionStatus::BeltMatched {
            state = step(ScenarioKind::Belt, state, &params);
            steps += 1;
            assert!(steps < 2000, "belt never matched from v0 = {v0}");
        }

        for _ in 0..500 {
            assert_eq!(state.v1, 2.0);
            assert_eq!(state.a1, 0.0);
            assert_eq!(state.status, MotionStatus::BeltMatched);
            state = step(ScenarioKind::Belt, state, &params);
        }
    }
}

#[test]
fn inclined_belt_matches_when_grip_exceeds_slope() {
    let params = ParameterSet {
        angle_deg: 10.0,
        mu_static: 0.5,
        mu_kinetic: 0.4,
        belt_velocity: 2.0,
        initial_velocity: 0.0,
        ..ParameterSet::default()
    };
    let states = run_trajectory(ScenarioKind::Belt, &params, 500).expect("valid");
    let last = states.last().expect("non-empty trajectory");
    assert_eq!(last.status, MotionStatus::BeltMatched);
    assert_eq!(last.v1, 2.0);
}

#[test]
fn inclined_belt_too_slippery_keeps_sliding() {
    let params = ParameterSet {
        angle_deg: 45.0,
        mu_static: 0.3,
        mu_kinetic: 0.2,
        belt_velocity: -1.0,
        initial_velocity: -1.0,
        ..ParameterSet::default()
    };
    let states = run_trajectory(ScenarioKind::Belt, &params, 200).expect("valid");
    assert_eq!(states[0].status, MotionStatus::Sliding);
    assert!(states.iter().all(|s| s.status == MotionStatus::Sliding));
    let last = states.last().expect("non-empty trajectory");
    let g = params.gravity;
    let cos = 45f64.to_radians().cos();
    let sin = 45f64.to_radians().sin();
    assert_relative_eq!(last.a1, g * (sin - 0.2 * cos), epsilon = 1e-9);
}

#[test]
fn identical_inputs_give_identical_runs() {
    for scenario in ScenarioKind::ALL {
        let params = ParameterSet::preset(scenario);
        let first = run_trajectory(scenario, &params, 1500).expect("valid");
        let second = run_trajectory(scenario, &params, 1500).expect("valid");
        assert_eq!(first, second);
    }
}

#[test]
fn malformed_parameters_rejected_before_running() {
    let params = ParameterSet {
        mass: -2.0,
        ..ParameterSet::default()
    };
    for scenario in ScenarioKind::ALL {
        assert!(matches!(
            run_trajectory(scenario, &params, 10),
            Err(ParamError::NonPositiveMass { field: "mass", .. })
        ));
    }
}
