//! Shared UI crate for the Friday Meter dashboard. Data shaping, chart
//! geometry, the gauge animation and every view live here; the `web` and
//! `desktop` crates only launch it.

pub mod api;
pub mod chart;
pub mod core;
pub mod gauge;
pub mod i18n;
pub mod series;
pub mod views;

pub mod components {
    mod app_header;
    pub use app_header::AppHeader;

    mod info_modal;
    pub use info_modal::InfoModal;
}

/// Shared theme, embedded for launchers that inline their CSS.
pub const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));
