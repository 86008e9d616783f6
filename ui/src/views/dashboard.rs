use dioxus::prelude::*;

use crate::chart::ProductivityChart;
use crate::components::{AppHeader, InfoModal};
use crate::gauge::ProductivityGauge;

/// The whole page: header, series chart, gauge and the info modal.
///
/// Expects a [`crate::core::config::DashboardConfig`] in context.
#[component]
pub fn Dashboard() -> Element {
    let mut modal_open = use_signal(|| false);

    let lang = crate::i18n::use_language();

    rsx! {
        section { class: "page page-dashboard", lang: "{lang}",
            AppHeader { on_info: move |_| modal_open.set(true) }

            div { class: "page-dashboard__chart",
                ProductivityChart {}
            }

            div { class: "page-dashboard__gauge",
                ProductivityGauge {}
            }

            InfoModal {
                is_open: modal_open(),
                on_close: move |_| modal_open.set(false),
            }
        }
    }
}
