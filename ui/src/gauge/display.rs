//! Presentation derived from the gauge's displayed value.

use crate::core::format;
use crate::t;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaugeTone {
    Positive,
    Negative,
    Neutral,
}

impl GaugeTone {
    pub fn of(value: f64) -> Self {
        if value > 0.0 {
            Self::Positive
        } else if value < 0.0 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    /// Colour family used by the theme: green / red / blue.
    pub fn color(self) -> &'static str {
        match self {
            Self::Positive => "green",
            Self::Negative => "red",
            Self::Neutral => "blue",
        }
    }

    /// e.g. `gauge--positive`
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Positive => "gauge--positive",
            Self::Negative => "gauge--negative",
            Self::Neutral => "gauge--neutral",
        }
    }

    pub fn arrow(self) -> Option<&'static str> {
        match self {
            Self::Positive => Some("↑"),
            Self::Negative => Some("↓"),
            Self::Neutral => None,
        }
    }

    pub fn caption(self) -> String {
        match self {
            Self::Positive => t!("gauge-caption-above"),
            Self::Negative => t!("gauge-caption-below"),
            Self::Neutral => t!("gauge-caption-average"),
        }
    }
}

/// Everything the gauge view needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeReadout {
    pub tone: GaugeTone,
    /// `"+42.0%"`
    pub text: String,
    pub caption: String,
    pub arrow: Option<&'static str>,
}

impl GaugeReadout {
    pub fn of(value: f64) -> Self {
        let tone = GaugeTone::of(value);
        Self {
            tone,
            text: format::format_signed_percent(value),
            caption: tone.caption(),
            arrow: tone.arrow(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_follows_sign() {
        assert_eq!(GaugeTone::of(0.1), GaugeTone::Positive);
        assert_eq!(GaugeTone::of(-0.1), GaugeTone::Negative);
        assert_eq!(GaugeTone::of(0.0), GaugeTone::Neutral);
        assert_eq!(GaugeTone::of(0.0).color(), "blue");
        assert_eq!(GaugeTone::of(3.0).color(), "green");
        assert_eq!(GaugeTone::of(-3.0).color(), "red");
    }

    #[test]
    fn readout_for_positive_value() {
        crate::i18n::init();
        let readout = GaugeReadout::of(42.0);
        assert_eq!(readout.text, "+42.0%");
        assert_eq!(readout.caption, "Above Average Productivity");
        assert_eq!(readout.arrow, Some("↑"));
    }

    #[test]
    fn readout_for_negative_value() {
        crate::i18n::init();
        let readout = GaugeReadout::of(-17.3);
        assert_eq!(readout.text, "-17.3%");
        assert_eq!(readout.caption, "Below Average Productivity");
        assert_eq!(readout.arrow, Some("↓"));
    }

    #[test]
    fn readout_at_zero_is_average_without_arrow() {
        crate::i18n::init();
        let readout = GaugeReadout::of(0.0);
        assert_eq!(readout.text, "0.0%");
        assert_eq!(readout.caption, "Average Productivity");
        assert_eq!(readout.arrow, None);
    }
}
