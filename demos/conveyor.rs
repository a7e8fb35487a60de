use slider_lab::*;

fn main() {
    let mut lab = match SliderLab::with_preset(ScenarioKind::Belt) {
        Ok(lab) => lab,
        Err(err) => {
            eprintln!("invalid preset: {err}");
            return;
        }
    };

    lab.advance_until(2.0);

    for point in lab.history().events() {
        if let Some(event) = point.event {
            println!("t={:.3}s -> {event} (v_rel {:.3})", point.time, point.v_rel);
        }
    }
    let state = lab.state();
    println!("block at {:.3} m moving {:.3} m/s", state.x1, state.v1);
}
