//! Chart history: turning kernel states into tagged data points and thinning them for display.

pub mod recorder;
pub mod sampling;

pub use recorder::{DataPoint, HistoryRecorder};
pub use sampling::downsample;
