// Copyright 2025 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Day`] value type.

use core::fmt;

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, Weekday};

/// A calendar date with no time-of-day component.
///
/// Equality, ordering, and hashing are by calendar date (year, month, day).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(NaiveDate);

/// A `(year, month, day)` triple that does not name a calendar date.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{year:04}-{month:02}-{day:02} is not a valid calendar date")]
pub struct InvalidDate {
    /// Requested year.
    pub year: i32,
    /// Requested month (1-based).
    pub month: u32,
    /// Requested day of month (1-based).
    pub day: u32,
}

impl Day {
    /// Creates a day from a year, 1-based month, and 1-based day of month.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, InvalidDate> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(InvalidDate { year, month, day })
    }

    /// Wraps a [`NaiveDate`].
    #[must_use]
    pub const fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns the underlying [`NaiveDate`].
    #[must_use]
    pub const fn naive(self) -> NaiveDate {
        self.0
    }

    /// Calendar year.
    #[must_use]
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Month of the year, 1-based.
    #[must_use]
    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// Day of the month, 1-based.
    #[must_use]
    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// Day of the week.
    #[must_use]
    pub fn weekday(self) -> Weekday {
        self.0.weekday()
    }

    /// Weekday index with Monday = 0 through Sunday = 6.
    ///
    /// This is also the day's column in a month grid.
    #[must_use]
    pub fn weekday_index(self) -> usize {
        self.0.weekday().num_days_from_monday() as usize
    }

    /// Returns `true` on Saturdays and Sundays.
    #[must_use]
    pub fn is_weekend(self) -> bool {
        self.weekday_index() >= 5
    }

    /// Returns `true` if `other` lies in the same year and month.
    #[must_use]
    pub fn same_month(self, other: Self) -> bool {
        self.year() == other.year() && self.month() == other.month()
    }

    /// Number of days in this day's month.
    #[must_use]
    pub fn days_in_month(self) -> u32 {
        self.last_of_month().day()
    }

    /// Returns `true` if this day's year is a leap year.
    #[must_use]
    pub fn is_leap_year(self) -> bool {
        self.0.leap_year()
    }

    /// The first day of this day's month.
    #[must_use]
    pub fn first_of_month(self) -> Self {
        Self(self.0.with_day(1).unwrap_or(self.0))
    }

    /// The last day of this day's month.
    #[must_use]
    pub fn last_of_month(self) -> Self {
        let first = self.first_of_month().0;
        first
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            // Only the final representable December has no following month.
            .or_else(|| first.with_day(31))
            .map_or(self, Self)
    }

    /// The first day of the month `delta` months away, or `None` outside the
    /// range chrono can represent.
    #[must_use]
    pub fn first_of_shifted_month(self, delta: i32) -> Option<Self> {
        let first = self.first_of_month().0;
        let months = Months::new(delta.unsigned_abs());
        let shifted = if delta < 0 {
            first.checked_sub_months(months)
        } else {
            first.checked_add_months(months)
        };
        shifted.map(Self)
    }

    /// The following day, or `None` at the end of the supported range.
    #[must_use]
    pub fn succ(self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }

    /// Zero-based day of the year.
    #[must_use]
    pub fn ordinal0(self) -> u32 {
        self.0.ordinal0()
    }
}

impl From<NaiveDate> for Day {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

/// Drops the time-of-day component.
impl From<NaiveDateTime> for Day {
    fn from(datetime: NaiveDateTime) -> Self {
        Self(datetime.date())
    }
}

impl From<Day> for NaiveDate {
    fn from(day: Day) -> Self {
        day.0
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn rejects_malformed_dates() {
        let err = Day::from_ymd(2023, 2, 29).unwrap_err();
        assert_eq!(
            err,
            InvalidDate {
                year: 2023,
                month: 2,
                day: 29
            }
        );
        assert!(Day::from_ymd(2024, 13, 1).is_err());
        assert!(Day::from_ymd(2024, 4, 0).is_err());
    }

    #[test]
    fn weekday_index_starts_on_monday() {
        // 2024-01-01 is a Monday.
        let monday = Day::from_ymd(2024, 1, 1).unwrap();
        let saturday = Day::from_ymd(2024, 1, 6).unwrap();
        let sunday = Day::from_ymd(2024, 1, 7).unwrap();
        assert_eq!(monday.weekday_index(), 0);
        assert_eq!(saturday.weekday_index(), 5);
        assert_eq!(sunday.weekday_index(), 6);
        assert!(!monday.is_weekend());
        assert!(saturday.is_weekend());
        assert!(sunday.is_weekend());
    }

    #[test]
    fn month_bounds() {
        let leap = Day::from_ymd(2024, 2, 10).unwrap();
        assert_eq!(leap.days_in_month(), 29);
        assert_eq!(leap.last_of_month(), Day::from_ymd(2024, 2, 29).unwrap());
        assert_eq!(leap.first_of_month(), Day::from_ymd(2024, 2, 1).unwrap());

        assert_eq!(Day::from_ymd(1900, 2, 1).unwrap().days_in_month(), 28);
        assert_eq!(Day::from_ymd(2000, 2, 1).unwrap().days_in_month(), 29);
        assert_eq!(Day::from_ymd(2025, 4, 1).unwrap().days_in_month(), 30);
        assert_eq!(Day::from_ymd(2025, 12, 1).unwrap().days_in_month(), 31);
        assert!(!Day::from_ymd(2100, 1, 1).unwrap().is_leap_year());
    }

    #[test]
    fn shifted_months_land_on_the_first() {
        let day = Day::from_ymd(2024, 1, 31).unwrap();
        assert_eq!(
            day.first_of_shifted_month(1),
            Some(Day::from_ymd(2024, 2, 1).unwrap())
        );
        assert_eq!(
            day.first_of_shifted_month(-1),
            Some(Day::from_ymd(2023, 12, 1).unwrap())
        );
        assert_eq!(
            day.first_of_shifted_month(-25),
            Some(Day::from_ymd(2021, 12, 1).unwrap())
        );
        assert_eq!(day.first_of_shifted_month(i32::MAX), None);
        assert_eq!(day.first_of_shifted_month(i32::MIN), None);
    }

    #[test]
    fn datetime_conversion_drops_time() {
        let dt = NaiveDate::from_ymd_opt(2024, 5, 6)
            .unwrap()
            .and_hms_opt(17, 45, 12)
            .unwrap();
        let day = Day::from(dt);
        assert_eq!(day, Day::from_ymd(2024, 5, 6).unwrap());
        assert_eq!(day.to_string(), "2024-05-06");
    }
}
