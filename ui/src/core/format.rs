//! Formatting helpers for presenting productivity scores.

/// `3.25` -> `"3.3%"`. One decimal, no sign for positives.
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// `42.0` -> `"+42.0%"`, `-17.3` -> `"-17.3%"`, `0.0` -> `"0.0%"`.
pub fn format_signed_percent(value: f64) -> String {
    format!("{}{value:.1}%", sign_prefix(value))
}

/// Leading `+` for strictly positive values; negatives carry their own `-`.
pub fn sign_prefix(value: f64) -> &'static str {
    if value > 0.0 {
        "+"
    } else {
        ""
    }
}

/// Round to one decimal place; halves go up (towards +inf), so `-0.05` -> `0.0`.
pub fn round_tenths(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_percent_prefixes_positive_only() {
        assert_eq!(format_signed_percent(42.0), "+42.0%");
        assert_eq!(format_signed_percent(-17.3), "-17.3%");
        assert_eq!(format_signed_percent(0.0), "0.0%");
    }

    #[test]
    fn percent_keeps_one_decimal() {
        assert_eq!(format_percent(3.2), "3.2%");
        assert_eq!(format_percent(12.04), "12.0%");
    }

    #[test]
    fn round_tenths_handles_negatives() {
        assert_eq!(round_tenths(1.26), 1.3);
        assert_eq!(round_tenths(-1.26), -1.3);
    }

    #[test]
    fn round_tenths_sends_halves_up() {
        assert_eq!(round_tenths(1.25), 1.3);
        assert_eq!(round_tenths(-1.25), -1.2);
        assert_eq!(round_tenths(-0.05), 0.0);
    }
}
