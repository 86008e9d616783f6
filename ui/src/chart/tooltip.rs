//! Hover tooltip state for the series chart.
//!
//! Pointer-enter on a placed point shows a tooltip pinned to that point's
//! anchor; pointer-leave hides it. `Hidden` carries no data, so nothing from
//! a previous hover can leak into the next one.

use crate::core::format;
use crate::series::SeriesPoint;

use super::layout::Anchor;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum TooltipState {
    #[default]
    Hidden,
    Shown(Tooltip),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    /// Chart-local logical coordinates.
    pub x: f64,
    pub y: f64,
    pub value: f64,
    pub percent_change: Option<f64>,
    /// `"2024-06-01 (Saturday)"`
    pub date_label: String,
}

impl Tooltip {
    pub fn value_text(&self) -> String {
        format::format_percent(self.value)
    }

    pub fn percent_change_text(&self) -> Option<String> {
        self.percent_change.map(format::format_signed_percent)
    }
}

impl TooltipState {
    pub fn hover(point: &SeriesPoint, anchor: Anchor) -> Self {
        Self::Shown(Tooltip {
            x: anchor.x,
            y: anchor.y,
            value: point.value,
            percent_change: point.percent_change,
            date_label: format!("{} ({})", point.date_key(), point.day_name()),
        })
    }

    pub fn leave() -> Self {
        Self::Hidden
    }

    pub fn is_shown(&self) -> bool {
        matches!(self, Self::Shown(_))
    }

    pub fn tooltip(&self) -> Option<&Tooltip> {
        match self {
            Self::Shown(tooltip) => Some(tooltip),
            Self::Hidden => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn point(value: f64, percent_change: Option<f64>) -> SeriesPoint {
        SeriesPoint::new(date!(2024 - 06 - 01), value, percent_change)
    }

    #[test]
    fn hover_then_leave_resets_to_hidden() {
        crate::i18n::init();
        let mut state = TooltipState::hover(&point(3.2, None), Anchor { x: 120.0, y: 18.0 });
        let shown = state.tooltip().expect("tooltip shown").clone();
        assert_eq!(shown.value_text(), "3.2%");
        assert_eq!(shown.date_label, "2024-06-01 (Saturday)");
        assert_eq!((shown.x, shown.y), (120.0, 18.0));

        state = TooltipState::leave();
        assert_eq!(state, TooltipState::Hidden);
        assert!(state.tooltip().is_none());
    }

    #[test]
    fn next_hover_uses_only_its_own_anchor() {
        crate::i18n::init();
        let _first = TooltipState::hover(&point(3.2, Some(1.0)), Anchor { x: 300.0, y: 12.0 });
        let _ = TooltipState::leave();
        let second = TooltipState::hover(&point(1.0, None), Anchor { x: 40.0, y: 35.0 });

        let tooltip = second.tooltip().expect("tooltip shown");
        assert_eq!((tooltip.x, tooltip.y), (40.0, 35.0));
        assert_eq!(tooltip.percent_change_text(), None);
    }

    #[test]
    fn percent_change_is_signed() {
        crate::i18n::init();
        let state = TooltipState::hover(&point(5.0, Some(1.5)), Anchor { x: 0.0, y: 0.0 });
        let tooltip = state.tooltip().expect("tooltip shown");
        assert_eq!(tooltip.percent_change_text().as_deref(), Some("+1.5%"));
    }
}
