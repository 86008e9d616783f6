//! Animated productivity gauge.

pub mod display;
pub mod engine;

mod view;
pub use view::ProductivityGauge;
