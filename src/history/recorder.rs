use std::collections::VecDeque;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    config::HISTORY_CAPACITY,
    core::{
        params::ParameterSet,
        state::SimulationState,
        types::{MotionStatus, ScenarioKind},
    },
};

/// One chart sample derived from a simulation state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub time: f64,
    pub x1: f64,
    pub x2: Option<f64>,
    pub s1: f64,
    pub s2: Option<f64>,
    pub v1: f64,
    /// Belt speed for the belt, plank velocity for the plank, absent otherwise.
    pub v2: Option<f64>,
    pub a1: f64,
    pub a2: Option<f64>,
    /// Block velocity relative to the surface it rests on.
    pub v_rel: f64,
    pub kinetic_energy: f64,
    /// New status when this point marks a regime change.
    pub event: Option<MotionStatus>,
}

impl DataPoint {
    pub fn from_state(
        scenario: ScenarioKind,
        state: &SimulationState,
        params: &ParameterSet,
        event: Option<MotionStatus>,
    ) -> Self {
        let plank = scenario == ScenarioKind::Plank;
        let v2 = match scenario {
            ScenarioKind::Single => None,
            ScenarioKind::Belt => Some(params.belt_velocity),
            ScenarioKind::Plank => Some(state.v2),
        };
        let mut kinetic_energy = 0.5 * params.mass * state.v1 * state.v1;
        if plank {
            kinetic_energy += 0.5 * params.plank_mass * state.v2 * state.v2;
        }

        Self {
            time: state.t,
            x1: state.x1,
            x2: plank.then_some(state.x2),
            s1: state.s1,
            s2: plank.then_some(state.s2),
            v1: state.v1,
            v2,
            a1: state.a1,
            a2: plank.then_some(state.a2),
            v_rel: state.v1 - v2.unwrap_or(0.0),
            kinetic_energy,
            event,
        }
    }
}

/// Bounded history of chart points with regime-change tagging.
#[derive(Debug, Clone)]
pub struct HistoryRecorder {
    points: VecDeque<DataPoint>,
    capacity: usize,
    last_status: Option<MotionStatus>,
}

impl Default for HistoryRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryRecorder {
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
            last_status: None,
        }
    }

    /// Clears the history; `initial` becomes the baseline status for event detection.
    pub fn reset(&mut self, initial: &SimulationState) {
        self.points.clear();
        self.last_status = Some(initial.status);
    }

    /// Appends a point for `state` and returns whether one was stored.
    ///
    /// A state whose status differs from the last seen one is tagged as an event. A
    /// `t = 0` state is ignored once history exists, and a repeated timestamp is only
    /// stored when it carries an event. The oldest point is evicted at capacity.
    pub fn record(
        &mut self,
        scenario: ScenarioKind,
        state: &SimulationState,
        params: &ParameterSet,
    ) -> bool {
        if state.t == 0.0 && !self.points.is_empty() {
            return false;
        }

        let event = match self.last_status {
            Some(last) if last == state.status => None,
            None => {
                self.last_status = Some(state.status);
                None
            }
            Some(last) => {
                debug!("t={:.4}s {scenario}: {last} -> {}", state.t, state.status);
                self.last_status = Some(state.status);
                Some(state.status)
            }
        };

        let duplicate = self.points.back().is_some_and(|last| last.time == state.t);
        if duplicate && event.is_none() {
            return false;
        }

        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points
            .push_back(DataPoint::from_state(scenario, state, params, event));
        true
    }

    pub fn points(&self) -> &VecDeque<DataPoint> {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Points tagged with a regime change.
    pub fn events(&self) -> impl Iterator<Item = &DataPoint> {
        self.points.iter().filter(|point| point.event.is_some())
    }
}
