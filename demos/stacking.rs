use slider_lab::*;

fn main() {
    let mut lab = match SliderLab::with_preset(ScenarioKind::Plank) {
        Ok(lab) => lab,
        Err(err) => {
            eprintln!("invalid preset: {err}");
            return;
        }
    };

    let pulled = ParameterSet {
        applied_force: 6.0,
        playback_speed: 4.0,
        ..*lab.params()
    };
    if let Err(err) = lab.set_params(pulled) {
        eprintln!("invalid parameters: {err}");
        return;
    }

    lab.advance_until(3.0);

    for point in lab.chart_points().iter().filter(|p| p.event.is_some()) {
        println!(
            "t={:.3}s block v={:.3} plank v={:.3} -> {:?}",
            point.time,
            point.v1,
            point.v2.unwrap_or_default(),
            point.event
        );
    }
    let state = lab.state();
    println!(
        "block {:.3} m along the plank, plank at {:.3} m, {}",
        state.relative_displacement(),
        state.x2,
        state.status
    );
}
