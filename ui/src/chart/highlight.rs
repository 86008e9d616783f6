//! Which points get the accent colour: today, and the same weekday in earlier weeks.

use time::Date;

/// `true` when `date` is `today`, or lies strictly before it on the same weekday.
///
/// Both sides are plain calendar dates; callers pick which calendar "today"
/// comes from (see [`crate::core::platform::today_local`]).
pub fn is_highlighted(date: Date, today: Date) -> bool {
    date == today || (date < today && date.weekday() == today.weekday())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn same_weekday_in_the_past_is_highlighted() {
        let today = date!(2024 - 06 - 07);
        assert!(is_highlighted(date!(2024 - 05 - 31), today));
        assert!(is_highlighted(date!(2024 - 05 - 03), today));
    }

    #[test]
    fn other_weekdays_are_not() {
        let today = date!(2024 - 06 - 07);
        assert!(!is_highlighted(date!(2024 - 06 - 06), today));
        assert!(!is_highlighted(date!(2024 - 06 - 01), today));
    }

    #[test]
    fn today_is_highlighted() {
        let today = date!(2024 - 06 - 07);
        assert!(is_highlighted(today, today));
    }

    #[test]
    fn future_same_weekday_is_not() {
        let today = date!(2024 - 06 - 07);
        assert!(!is_highlighted(date!(2024 - 06 - 14), today));
    }
}
