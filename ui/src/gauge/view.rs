use dioxus::prelude::*;

use crate::api::{FetchError, MetricClient};
use crate::core::config::DashboardConfig;
use crate::core::lifetime::use_lifetime;
use crate::core::timing;
use crate::i18n::use_language;
use crate::t;

use super::display::GaugeReadout;
use super::engine::{GaugeAnimator, GaugePhase};

#[component]
pub fn ProductivityGauge() -> Element {
    let config = use_context::<DashboardConfig>();
    let mut gauge = use_signal(|| GaugeAnimator::new(config.gauge.clone()));
    let lifetime = use_lifetime();
    // Caption and status text follow the selected language.
    let _lang = use_language();

    {
        let api = config.api.clone();
        use_future(move || {
            let api = api.clone();
            let lifetime = lifetime.clone();
            async move {
                let fetched = match MetricClient::new(&api) {
                    Ok(client) => client.fetch_productivity().await,
                    Err(err) => Err(err),
                };
                let target = target_or_zero(fetched);

                if lifetime
                    .run_if_live(|| gauge.with_mut(|g| g.start(target)))
                    .is_none()
                {
                    return;
                }

                let interval = gauge.peek().step_interval_ms();
                loop {
                    timing::sleep_ms(interval).await;
                    let Some(phase) = lifetime.run_if_live(|| gauge.with_mut(GaugeAnimator::tick))
                    else {
                        break;
                    };
                    if !matches!(phase, GaugePhase::Animating { .. }) {
                        break;
                    }
                }
            }
        });
    }

    let snapshot = gauge.read().clone();
    let readout = GaugeReadout::of(snapshot.display());
    let animating = snapshot.is_animating();
    let waiting = snapshot.phase() == GaugePhase::Idle;

    let tone_class = readout.tone.css_class();
    let arrow_class = if animating {
        "gauge__arrow gauge__arrow--bounce"
    } else {
        "gauge__arrow"
    };
    let ring_class = if animating {
        "gauge__ring gauge__ring--pulse"
    } else {
        "gauge__ring"
    };

    rsx! {
        div { class: "gauge {tone_class}",
            div { class: "gauge__card",
                div { class: "gauge__readout",
                    span { class: "gauge__value", "{readout.text}" }
                    if let Some(arrow) = readout.arrow {
                        span { class: "{arrow_class}", aria_hidden: "true", "{arrow}" }
                    }
                }
                div { class: "gauge__caption", "{readout.caption}" }
                if waiting {
                    div { class: "gauge__status", {t!("gauge-loading")} }
                }
                div { class: "{ring_class}" }
            }
        }
    }
}

/// Fetch outcome → animation target. Failures are logged and animate to 0.
pub(crate) fn target_or_zero(fetched: Result<f64, FetchError>) -> f64 {
    match fetched {
        Ok(value) => value,
        Err(err) => {
            tracing::error!("Error fetching productivity: {err}");
            0.0
        }
    }
}
