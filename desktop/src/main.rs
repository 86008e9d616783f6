#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use std::path::PathBuf;

use dioxus::desktop::tao::{dpi::LogicalSize, window::WindowBuilder};
use dioxus::desktop::Config;
use dioxus::prelude::*;

use ui::core::config::DashboardConfig;
use ui::views::Dashboard;

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn main() {
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Friday Meter – v{}", env!("CARGO_PKG_VERSION")))
                        .with_inner_size(LogicalSize::new(760.0, 720.0)),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    use_context_provider(DashboardConfig::from_env);

    // AppHeader writes it on selection; widgets read it through `i18n::use_language`.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    rsx! {
        // Always inline the shared theme; desktop ships no separate stylesheet.
        document::Style { "{MAIN_CSS_INLINE}" }

        Dashboard {}
    }
}

fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}
