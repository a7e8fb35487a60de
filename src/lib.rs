//! Slider Lab – friction-regime physics kernel for classic mechanics problems.
//!
//! The kernel advances a block on an incline, a block on a conveyor belt, or a block
//! stacked on a free plank by one fixed timestep at a time. Each step a Coulomb
//! friction resolver decides per contact whether the surfaces slide or move together,
//! and the resulting label is exposed as [`MotionStatus`].
//!
//! [`initialize`] and [`step`] are pure functions over plain `Copy` data. Pacing,
//! chart history, and session handling live in [`playback`], [`history`], and
//! [`SliderLab`], all layered on top of the kernel.

pub mod config;
pub mod core;
pub mod dynamics;
pub mod error;
pub mod history;
pub mod playback;
pub mod utils;
pub mod world;

pub use config::DT;
pub use crate::core::{
    params::ParameterSet,
    state::SimulationState,
    types::{ContactRegime, MotionStatus, ScenarioKind},
};
pub use dynamics::{
    friction::{resolve, FrictionResponse},
    initializer::initialize,
    integrator::step,
    trajectory::{run_branches, run_trajectory},
};
pub use error::{ParamError, Result};
pub use history::{downsample, DataPoint, HistoryRecorder};
pub use playback::{FramePlan, PlaybackPacer};
pub use world::SliderLab;
