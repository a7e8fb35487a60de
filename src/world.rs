use std::time::Instant;

use log::{debug, info};

use crate::{
    config::CHART_SAMPLE_TARGET,
    core::{params::ParameterSet, state::SimulationState, types::ScenarioKind},
    dynamics::{initialize, step},
    error::Result,
    history::{downsample, DataPoint, HistoryRecorder},
    playback::{FramePlan, PlaybackPacer},
    utils::logging::{warn_if_frame_budget_exceeded, ScopedTimer},
};

/// Caller-side session owning the scenario, its parameters, the live state, and the
/// chart history.
///
/// The kernel stays pure; this type decides how many steps each frame runs and records
/// what the charts show.
#[derive(Debug, Clone)]
pub struct SliderLab {
    scenario: ScenarioKind,
    params: ParameterSet,
    state: SimulationState,
    history: HistoryRecorder,
    pacer: PlaybackPacer,
}

impl SliderLab {
    pub fn new(scenario: ScenarioKind, params: ParameterSet) -> Result<Self> {
        let state = initialize(scenario, &params)?;
        let mut lab = Self {
            scenario,
            params,
            state,
            history: HistoryRecorder::new(),
            pacer: PlaybackPacer::default(),
        };
        lab.restart_history();
        Ok(lab)
    }

    /// Starts `scenario` with its preset parameters.
    pub fn with_preset(scenario: ScenarioKind) -> Result<Self> {
        Self::new(scenario, ParameterSet::preset(scenario))
    }

    pub fn set_pacer(&mut self, pacer: PlaybackPacer) {
        self.pacer = pacer;
    }

    /// Replaces the parameters; the running state continues under the new values.
    pub fn set_params(&mut self, params: ParameterSet) -> Result<()> {
        params.validate(self.scenario)?;
        self.params = params;
        Ok(())
    }

    /// Switches scenario, loads its preset, and restarts from `t = 0`.
    pub fn change_scenario(&mut self, scenario: ScenarioKind) -> Result<()> {
        let params = ParameterSet::preset(scenario);
        self.state = initialize(scenario, &params)?;
        self.scenario = scenario;
        self.params = params;
        info!("switched to {scenario} scenario");
        self.restart_history();
        Ok(())
    }

    /// Restarts the current scenario from `t = 0` and clears the history.
    pub fn reset(&mut self) -> Result<()> {
        self.state = initialize(self.scenario, &self.params)?;
        self.restart_history();
        Ok(())
    }

    /// Runs one display frame worth of kernel steps and records the resulting state.
    pub fn advance_frame(&mut self) -> FramePlan {
        let plan = self.pacer.plan(self.params.playback_speed);
        let started = Instant::now();
        {
            let _timer = ScopedTimer::new("lab::advance_frame");
            for _ in 0..plan.steps {
                self.state = step(self.scenario, self.state, &self.params);
            }
        }
        warn_if_frame_budget_exceeded(started.elapsed(), self.pacer.frame_interval());

        self.history.record(self.scenario, &self.state, &self.params);
        plan
    }

    /// Runs frames until simulated time reaches `until` seconds.
    pub fn advance_until(&mut self, until: f64) {
        while self.state.t < until {
            self.advance_frame();
        }
    }

    pub fn scenario(&self) -> ScenarioKind {
        self.scenario
    }

    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn history(&self) -> &HistoryRecorder {
        &self.history
    }

    /// History thinned to the chart budget, events preserved.
    pub fn chart_points(&self) -> Vec<DataPoint> {
        downsample(self.history.points(), CHART_SAMPLE_TARGET)
    }

    fn restart_history(&mut self) {
        debug!("{} starts {} at t=0", self.scenario, self.state.status);
        self.history.reset(&self.state);
        self.history.record(self.scenario, &self.state, &self.params);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DT;
    use std::time::Duration;

    #[test]
    fn frame_runs_paced_number_of_steps() {
        let params = ParameterSet {
            playback_speed: 3.0,
            ..ParameterSet::preset(ScenarioKind::Single)
        };
        let mut lab = SliderLab::new(ScenarioKind::Single, params).expect("valid params");
        let plan = lab.advance_frame();
        assert_eq!(plan.steps, 3);
        assert_eq!(lab.state().t, 3.0 * DT);
        assert_eq!(lab.history().len(), 2);
    }

    #[test]
    fn custom_pacer_stretches_slow_frames() {
        let params = ParameterSet {
            playback_speed: 0.25,
            ..ParameterSet::preset(ScenarioKind::Belt)
        };
        let mut lab = SliderLab::new(ScenarioKind::Belt, params).expect("valid params");
        lab.set_pacer(PlaybackPacer::new(Duration::from_millis(20)));
        let plan = lab.advance_frame();
        assert_eq!(plan.steps, 1);
        assert_eq!(plan.delay, Duration::from_millis(80));
        assert_eq!(lab.state().t, DT);
    }

    #[test]
    fn reset_clears_history() {
        let mut lab = SliderLab::with_preset(ScenarioKind::Belt).expect("valid preset");
        for _ in 0..20 {
            lab.advance_frame();
        }
        lab.reset().expect("params still valid");
        assert_eq!(lab.state().t, 0.0);
        assert_eq!(lab.history().len(), 1);
    }

    #[test]
    fn invalid_params_are_refused_and_old_ones_kept() {
        let mut lab = SliderLab::with_preset(ScenarioKind::Plank).expect("valid preset");
        let bad = ParameterSet {
            plank_mass: 0.0,
            ..*lab.params()
        };
        assert!(lab.set_params(bad).is_err());
        assert_eq!(lab.params(), &ParameterSet::preset(ScenarioKind::Plank));
    }

    #[test]
    fn change_scenario_loads_preset() {
        let mut lab = SliderLab::with_preset(ScenarioKind::Single).expect("valid preset");
        lab.advance_frame();
        lab.change_scenario(ScenarioKind::Plank).expect("valid preset");
        assert_eq!(lab.scenario(), ScenarioKind::Plank);
        assert_eq!(lab.state().t, 0.0);
        assert_eq!(lab.params(), &ParameterSet::preset(ScenarioKind::Plank));
    }
}
