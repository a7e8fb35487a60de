//! Utility helpers: scalar/incline math and scoped trace timing.

pub mod logging;
pub mod math;

pub use math::*;
