//! Dashboard configuration: API location, chart viewport and gauge timing.
//!
//! Every section deserializes with defaults, so a partial JSON document such
//! as `{"chart": {"variant": "line"}}` is a valid configuration.

use serde::{Deserialize, Serialize};

use super::platform;

/// Environment variable overriding the API base URL.
pub const API_BASE_ENV: &str = "FRIDAY_METER_API_BASE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DashboardConfig {
    pub api: ApiConfig,
    pub chart: ChartConfig,
    pub gauge: GaugeConfig,
}

impl DashboardConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Defaults with the API base taken from `FRIDAY_METER_API_BASE` when set.
    ///
    /// The compile-time value wins on WASM (no process environment there);
    /// native builds also honour the variable at runtime.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(base) = env_api_base() {
            config.api.base_url = Some(base);
        }
        config
    }
}

#[cfg(target_arch = "wasm32")]
fn env_api_base() -> Option<String> {
    option_env!("FRIDAY_METER_API_BASE").map(str::to_string)
}

#[cfg(not(target_arch = "wasm32"))]
fn env_api_base() -> Option<String> {
    std::env::var(API_BASE_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .or_else(|| option_env!("FRIDAY_METER_API_BASE").map(str::to_string))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Scheme + host (+ port). `None` means "same origin as the page".
    pub base_url: Option<String>,
    pub productivity_path: String,
    pub series_path: String,
}

impl ApiConfig {
    pub fn resolved_base(&self) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(platform::default_api_origin)
    }

    pub fn productivity_url(&self) -> String {
        join_url(&self.resolved_base(), &self.productivity_path)
    }

    pub fn series_url(&self) -> String {
        join_url(&self.resolved_base(), &self.series_path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            productivity_path: "/api/productivity".to_string(),
            series_path: "/api/productivity_series".to_string(),
        }
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChartVariant {
    #[default]
    Bar,
    Line,
}

/// Logical SVG viewport and windowing policy for the series chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub variant: ChartVariant,
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub bar_gap: f64,
    /// Only the most recent points up to this count are laid out.
    pub max_visible_points: usize,
}

impl ChartConfig {
    pub fn plot_width(&self) -> f64 {
        (self.width - 2.0 * self.padding).max(0.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.height - 2.0 * self.padding).max(0.0)
    }

    /// y coordinate of the zero-height bar (bottom edge of the plot).
    pub fn baseline(&self) -> f64 {
        self.height - self.padding
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            variant: ChartVariant::Bar,
            width: 450.0,
            height: 50.0,
            padding: 10.0,
            bar_gap: 1.0,
            max_visible_points: 90,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaugeConfig {
    pub duration_ms: u64,
    pub steps: u32,
}

impl GaugeConfig {
    /// Delay between animation ticks, never below 1 ms.
    pub fn step_interval_ms(&self) -> u64 {
        (self.duration_ms / u64::from(self.steps.max(1))).max(1)
    }
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self {
            duration_ms: 2000,
            steps: 60,
        }
    }
}
