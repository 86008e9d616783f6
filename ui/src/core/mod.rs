//! Platform-agnostic building blocks shared by the dashboard widgets.

pub mod config;
pub mod format;
pub mod lifetime;
pub mod platform;
pub mod timing;
