//! Global configuration constants for the Slider Lab kernel and its caller-side helpers.

/// Fixed integration timestep (in seconds).
///
/// A power-of-two fraction of a second, so `t` accumulated over any number of steps is
/// exactly `steps * DT` with no floating-point drift. At the nominal 1x playback speed one
/// step is taken per display frame.
pub const DT: f64 = 1.0 / 64.0;

/// Relative speed (m/s) at or below which a contact is tested for static lock instead of
/// being treated as sliding.
///
/// Kinetic friction changes a relative velocity by `mu_k * g * DT` per step, which is
/// above 1e-3 m/s for any coefficient worth simulating, while f64 residue after a snap
/// or a momentum-weighted average sits near 1e-15 m/s. Placing the band between the two
/// keeps rounding noise from flipping a locked contact back to sliding on the next step.
pub(crate) const VELOCITY_EPSILON: f64 = 1e-6;

/// Default gravitational acceleration magnitude (m/s^2).
pub const DEFAULT_GRAVITY: f64 = 9.8;

/// Starting position of the block measured along the plank, so relative sliding is visible.
pub const PLANK_BLOCK_OFFSET: f64 = 1.0;

/// Largest friction coefficient accepted by parameter validation.
pub const MAX_FRICTION_COEFFICIENT: f64 = 2.0;

/// Maximum number of chart points retained by the history recorder.
pub const HISTORY_CAPACITY: usize = 3000;

/// Number of points the chart sampler aims to hand to the plotting layer.
pub const CHART_SAMPLE_TARGET: usize = 400;

/// Nominal display frame interval used by the playback pacer (in milliseconds).
pub const FRAME_INTERVAL_MS: u64 = 16;
