//! Calendar anchoring for plan weeks.
//!
//! All dates are plain calendar dates (`NaiveDate`): no timezone is attached
//! and none is converted.

use chrono::{Datelike, Duration, NaiveDate};

/// Monday on or before `date`, in the same Monday-first week.
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    // 0 = Sunday .. 6 = Saturday
    let day_index = date.weekday().num_days_from_sunday() as i64;
    let back = if day_index == 0 { 6 } else { day_index - 1 };
    date - Duration::days(back)
}

/// Monday of week `week_index` (0-based) counted from `start_monday`.
pub fn week_monday(start_monday: NaiveDate, week_index: u32) -> NaiveDate {
    start_monday + Duration::days(7 * week_index as i64)
}

/// Monday of week 1 for a plan of `number_of_weeks` whose final week
/// contains `race_date`.
pub fn plan_start_for_race(race_date: NaiveDate, number_of_weeks: u32) -> NaiveDate {
    let race_monday = monday_of(race_date);
    race_monday - Duration::days(7 * number_of_weeks.saturating_sub(1) as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_monday_of_every_weekday() {
        // 2026-04-06 is a Monday
        for offset in 0..7 {
            let day = date(2026, 4, 6) + Duration::days(offset);
            assert_eq!(monday_of(day), date(2026, 4, 6), "offset {}", offset);
        }
    }

    #[test]
    fn test_monday_of_sunday_goes_back_six_days() {
        let sunday = date(2026, 4, 12);
        assert_eq!(sunday.weekday(), Weekday::Sun);
        assert_eq!(monday_of(sunday), date(2026, 4, 6));
    }

    #[test]
    fn test_monday_of_crosses_month_and_year() {
        // Thursday 1 January 2026
        assert_eq!(monday_of(date(2026, 1, 1)), date(2025, 12, 29));
    }

    #[test]
    fn test_monday_of_is_idempotent() {
        let mut day = date(2025, 12, 20);
        for _ in 0..60 {
            let monday = monday_of(day);
            assert_eq!(monday_of(monday), monday);
            assert_eq!(monday.weekday(), Weekday::Mon);
            day += Duration::days(1);
        }
    }

    #[test]
    fn test_week_monday_steps_by_seven_days() {
        let start = date(2026, 4, 6);
        assert_eq!(week_monday(start, 0), start);
        assert_eq!(week_monday(start, 11), date(2026, 6, 22));
    }

    #[test]
    fn test_plan_start_for_race_puts_race_in_final_week() {
        // Race on Sunday 2026-06-28, 12 weeks
        let start = plan_start_for_race(date(2026, 6, 28), 12);
        assert_eq!(start, date(2026, 4, 6));
        assert_eq!(week_monday(start, 11), monday_of(date(2026, 6, 28)));
    }

    #[test]
    fn test_plan_start_for_race_single_week() {
        assert_eq!(plan_start_for_race(date(2026, 4, 9), 1), date(2026, 4, 6));
    }
}
