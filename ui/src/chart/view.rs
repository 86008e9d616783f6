use dioxus::prelude::*;

use crate::api::MetricClient;
use crate::core::config::{ChartVariant, DashboardConfig};
use crate::core::lifetime::use_lifetime;
use crate::core::platform;
use crate::i18n::use_language;
use crate::series::SeriesPoint;
use crate::t;

use super::layout::{Anchor, ChartLayout, PlacedPoint};
use super::tooltip::{Tooltip, TooltipState};

/// Daily productivity chart. Renders nothing until the series has loaded,
/// and nothing at all if the fetch fails or the series is empty.
#[component]
pub fn ProductivityChart() -> Element {
    let config = use_context::<DashboardConfig>();
    let mut points = use_signal(Vec::<SeriesPoint>::new);
    let mut tooltip = use_signal(TooltipState::default);
    let lifetime = use_lifetime();
    let _lang = use_language();

    {
        let api = config.api.clone();
        use_future(move || {
            let api = api.clone();
            let lifetime = lifetime.clone();
            async move {
                let fetched = match MetricClient::new(&api) {
                    Ok(client) => client.fetch_series().await,
                    Err(err) => Err(err),
                };
                match fetched {
                    Ok(series) => {
                        lifetime.run_if_live(|| {
                            tracing::info!("loaded {} series points", series.len());
                            points.set(series);
                        });
                    }
                    Err(err) => tracing::error!("Error fetching productivity series: {err}"),
                }
            }
        });
    }

    let series = points.read().clone();
    if series.is_empty() {
        return rsx! {};
    }

    let layout = ChartLayout::compute(&series, &config.chart, platform::today_local());
    let overlay = tooltip.read().tooltip().cloned().map(|tip| {
        let (left, top) = layout.anchor_percent(Anchor { x: tip.x, y: tip.y });
        (tip, left, top)
    });
    let title = t!("chart-title");

    rsx! {
        div {
            class: "chart",
            aria_label: "{title}",
            onmouseleave: move |_| tooltip.set(TooltipState::leave()),
            svg {
                class: "chart__svg",
                width: "100%",
                view_box: "{layout.view_box()}",

                if let Some(path) = layout.line_path.clone() {
                    path { class: "chart__line", d: "{path}", fill: "none" }
                }

                {layout.placed.iter().map(|placed| {
                    let point = placed.point.clone();
                    let anchor = placed.anchor();
                    let key = point.date_key();
                    let class = mark_class(placed);
                    match layout.variant {
                        ChartVariant::Bar => rsx! {
                            rect {
                                key: "{key}",
                                class: "{class}",
                                x: "{placed.x}",
                                y: "{placed.y}",
                                width: "{placed.width}",
                                height: "{placed.height}",
                                onmouseenter: move |_| tooltip.set(TooltipState::hover(&point, anchor)),
                                onmouseleave: move |_| tooltip.set(TooltipState::leave()),
                            }
                        },
                        ChartVariant::Line => rsx! {
                            circle {
                                key: "{key}",
                                class: "{class}",
                                cx: "{placed.x}",
                                cy: "{placed.y}",
                                r: "2",
                                onmouseenter: move |_| tooltip.set(TooltipState::hover(&point, anchor)),
                                onmouseleave: move |_| tooltip.set(TooltipState::leave()),
                            }
                        },
                    }
                })}

                if let Some(label) = layout.first_label.clone() {
                    text {
                        class: "chart__axis-label",
                        x: "{label.x}",
                        y: "{label.y}",
                        text_anchor: "start",
                        "{label.text}"
                    }
                }
                if let Some(label) = layout.last_label.clone() {
                    text {
                        class: "chart__axis-label",
                        x: "{label.x}",
                        y: "{label.y}",
                        text_anchor: "end",
                        "{label.text}"
                    }
                }
            }

            if let Some((tip, left, top)) = overlay {
                ChartTooltip { tooltip: tip, left, top }
            }
        }
    }
}

#[component]
fn ChartTooltip(tooltip: Tooltip, left: f64, top: f64) -> Element {
    let value = tooltip.value_text();
    let change = tooltip.percent_change_text();
    let change_class = match tooltip.percent_change {
        Some(delta) if delta < 0.0 => "chart__tooltip-change chart__tooltip-change--down",
        _ => "chart__tooltip-change chart__tooltip-change--up",
    };
    let vs_label = t!("tooltip-vs-last-week");
    let style = format!("left: {left:.2}%; top: {top:.2}%;");

    rsx! {
        div {
            class: "chart__tooltip",
            style: "{style}",
            div { class: "chart__tooltip-date", "{tooltip.date_label}" }
            div { class: "chart__tooltip-value", "{value}" }
            if let Some(change) = change {
                div { class: "{change_class}", "{change} {vs_label}" }
            }
        }
    }
}

fn mark_class(placed: &PlacedPoint) -> &'static str {
    if placed.highlighted {
        "chart__mark chart__mark--highlight"
    } else {
        "chart__mark"
    }
}
