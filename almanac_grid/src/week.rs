// Copyright 2025 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! First-day week numbering and its year-boundary correction.

use crate::Day;

/// Highest week number that is never folded back by [`correct_weeks`].
pub const LAST_REGULAR_WEEK: u32 = 52;

/// Returns the 1-based week of the year containing `day`.
///
/// Weeks start on Monday and week 1 is the (possibly partial) week that
/// contains January 1st. Late December days can therefore report week 53, or
/// week 54 in a leap year that starts on a Sunday.
///
/// ```rust
/// use almanac_grid::{Day, week_of_year};
///
/// // 2023-01-01 is a Sunday: it alone forms week 1.
/// assert_eq!(week_of_year(Day::from_ymd(2023, 1, 1).unwrap()), 1);
/// assert_eq!(week_of_year(Day::from_ymd(2023, 1, 2).unwrap()), 2);
/// ```
#[must_use]
pub fn week_of_year(day: Day) -> u32 {
    let ordinal0 = day.ordinal0();
    let weekday = day.weekday().num_days_from_monday();
    // Column of January 1st, derived backwards from this day.
    let jan1 = (weekday + 7 - ordinal0 % 7) % 7;
    (ordinal0 + jan1) / 7 + 1
}

/// Applies the year-boundary correction to a pair of week numbers.
///
/// `first_week` is the week of the month's first day and `week` the week of
/// another day in the same month, whose month is `month`. Returns the
/// corrected `(first_week, week)` pair:
///
/// - a first week above [`LAST_REGULAR_WEEK`] becomes week 1 and `week` is
///   shifted by one so their difference stays meaningful;
/// - a January `week` still above [`LAST_REGULAR_WEEK`] is forced to 1.
///
/// With first-day numbering neither case arises for real dates, since
/// January 1st is always in week 1; the correction guards the row arithmetic
/// regardless.
#[must_use]
pub fn correct_weeks(first_week: u32, week: u32, month: u32) -> (u32, u32) {
    let (mut first_week, mut week) = (first_week, week);
    if first_week > LAST_REGULAR_WEEK {
        first_week = 1;
        week += 1;
    }
    if week > LAST_REGULAR_WEEK && month == 1 {
        week = 1;
    }
    (first_week, week)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> Day {
        Day::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn january_first_is_always_week_one() {
        for year in 1990..2040 {
            assert_eq!(week_of_year(day(year, 1, 1)), 1, "year {year}");
        }
    }

    #[test]
    fn weeks_turn_over_on_monday() {
        // 2025-01-01 is a Wednesday; Monday the 6th opens week 2.
        assert_eq!(week_of_year(day(2025, 1, 5)), 1);
        assert_eq!(week_of_year(day(2025, 1, 6)), 2);
        // 2024-01-01 is a Monday; the first full week is week 1.
        assert_eq!(week_of_year(day(2024, 1, 7)), 1);
        assert_eq!(week_of_year(day(2024, 1, 8)), 2);
    }

    #[test]
    fn december_can_reach_week_fifty_four() {
        // 2012 is a leap year starting on a Sunday; Dec 31 is a Monday.
        assert_eq!(week_of_year(day(2012, 12, 30)), 53);
        assert_eq!(week_of_year(day(2012, 12, 31)), 54);
        // 2024-12-30 is a Monday in week 53.
        assert_eq!(week_of_year(day(2024, 12, 30)), 53);
    }

    #[test]
    fn regular_weeks_are_untouched() {
        assert_eq!(correct_weeks(1, 5, 1), (1, 5));
        assert_eq!(correct_weeks(49, 54, 12), (49, 54));
        assert_eq!(correct_weeks(52, 52, 12), (52, 52));
    }

    #[test]
    fn first_week_above_fifty_two_folds_to_one() {
        assert_eq!(correct_weeks(53, 2, 3), (1, 3));
        assert_eq!(correct_weeks(53, 4, 1), (1, 5));
    }

    #[test]
    fn january_week_above_fifty_two_is_forced_to_one() {
        assert_eq!(correct_weeks(53, 53, 1), (1, 1));
        assert_eq!(correct_weeks(1, 53, 1), (1, 1));
        // Outside January the late week number is kept.
        assert_eq!(correct_weeks(53, 53, 12), (1, 54));
    }

    #[test]
    fn week_advances_exactly_on_mondays() {
        let mut current = day(2012, 1, 1);
        let mut week = week_of_year(current);
        while let Some(next) = current.succ().filter(|d| d.year() == 2012) {
            let next_week = week_of_year(next);
            let expected = if next.weekday_index() == 0 { week + 1 } else { week };
            assert_eq!(next_week, expected, "{next}");
            current = next;
            week = next_week;
        }
        assert_eq!(week, 54);
    }
}
