// Copyright 2025 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Laying a month out as weekly rows of seven columns.
//!
//! A [`MonthGrid`] is a small `Copy` description of one month: its first and
//! last day, the week number of its first day, and its row count. Cell
//! positions are derived on demand rather than stored:
//!
//! - the column of a day is its weekday index (Monday = 0);
//! - the row of a day is its corrected week number minus that of the first
//!   day of the month.
//!
//! Hosts are expected to turn the `(column, row)` pairs into pixel boxes with
//! whatever metrics they use.

use alloc::vec::Vec;

use crate::{Day, correct_weeks, week_of_year};

/// A day of the laid-out month together with its grid coordinate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GridDay {
    /// The calendar date.
    pub day: Day,
    /// Weekday column, `0..7`, Monday first.
    pub column: usize,
    /// Week row within the month, `0..weeks`.
    pub row: usize,
}

/// Week-aligned layout of a single month.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct MonthGrid {
    first: Day,
    last: Day,
    first_week: u32,
    weeks: usize,
}

/// Lays out the month containing `reference`.
///
/// Every day of the month is present exactly once, in calendar order, and no
/// two days share a `(column, row)` coordinate. There are no error cases: any
/// representable date yields a non-empty grid.
#[must_use]
pub fn layout(reference: Day) -> MonthGrid {
    let first = reference.first_of_month();
    let last = reference.last_of_month();
    let first_week = week_of_year(first);
    let mut grid = MonthGrid {
        first,
        last,
        first_week,
        weeks: 0,
    };
    grid.weeks = grid.row_of(last) + 1;
    grid
}

impl MonthGrid {
    /// Number of columns in every row.
    pub const COLUMNS: usize = 7;

    /// First day of the month.
    #[must_use]
    pub const fn first(&self) -> Day {
        self.first
    }

    /// Last day of the month.
    #[must_use]
    pub const fn last(&self) -> Day {
        self.last
    }

    /// Year of the laid-out month.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// Month of the year, 1-based.
    #[must_use]
    pub fn month(&self) -> u32 {
        self.first.month()
    }

    /// Number of week rows the month spans (4 to 6).
    #[must_use]
    pub const fn weeks(&self) -> usize {
        self.weeks
    }

    /// Number of days in the month.
    #[must_use]
    pub fn len(&self) -> usize {
        self.last.day() as usize
    }

    /// Always `false`; a month has at least 28 days.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `day` belongs to this month.
    #[must_use]
    pub fn contains(&self, day: Day) -> bool {
        day.same_month(self.first)
    }

    /// Returns the grid coordinate of `day`, or `None` if it lies in another month.
    #[must_use]
    pub fn position_of(&self, day: Day) -> Option<GridDay> {
        self.contains(day).then(|| GridDay {
            day,
            column: day.weekday_index(),
            row: self.row_of(day),
        })
    }

    /// Iterates over every day of the month in calendar order.
    #[must_use]
    pub fn iter(&self) -> Days {
        Days {
            grid: *self,
            next: Some(self.first),
        }
    }

    /// Collects [`MonthGrid::iter`] into a vector.
    #[must_use]
    pub fn cells(&self) -> Vec<GridDay> {
        self.iter().collect()
    }

    // `day` is expected to lie within this month.
    fn row_of(&self, day: Day) -> usize {
        let (first_week, week) = correct_weeks(self.first_week, week_of_year(day), day.month());
        week.saturating_sub(first_week) as usize
    }
}

impl IntoIterator for &MonthGrid {
    type Item = GridDay;
    type IntoIter = Days;

    fn into_iter(self) -> Days {
        self.iter()
    }
}

/// Iterator over the days of a [`MonthGrid`], returned by [`MonthGrid::iter`].
#[derive(Clone, Debug)]
pub struct Days {
    grid: MonthGrid,
    next: Option<Day>,
}

impl Iterator for Days {
    type Item = GridDay;

    fn next(&mut self) -> Option<GridDay> {
        let day = self.next?;
        self.next = if day < self.grid.last {
            day.succ()
        } else {
            None
        };
        Some(GridDay {
            day,
            column: day.weekday_index(),
            row: self.grid.row_of(day),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .next
            .map_or(0, |day| (self.grid.last.day() - day.day() + 1) as usize);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Days {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn day(y: i32, m: u32, d: u32) -> Day {
        Day::from_ymd(y, m, d).unwrap()
    }

    fn all_months() -> impl Iterator<Item = MonthGrid> {
        (1999..=2031).flat_map(|y| (1..=12).map(move |m| layout(day(y, m, 1))))
    }

    #[test]
    fn february_2024() {
        let grid = layout(day(2024, 2, 1));
        let cells = grid.cells();
        assert_eq!(cells.len(), 29);
        assert_eq!(grid.weeks(), 5);
        assert_eq!(cells[0].column, 3);
        assert_eq!(cells[0].row, 0);
        // Monday the 5th opens the second row.
        assert_eq!(cells[4].day, day(2024, 2, 5));
        assert_eq!((cells[4].column, cells[4].row), (0, 1));
        assert_eq!(cells[28].day, day(2024, 2, 29));
        assert_eq!((cells[28].column, cells[28].row), (3, 4));
    }

    #[test]
    fn reference_day_does_not_matter() {
        assert_eq!(layout(day(2024, 2, 1)), layout(day(2024, 2, 29)));
    }

    #[test]
    fn sunday_start_spans_six_rows() {
        // 2024-09-01 is a Sunday.
        let grid = layout(day(2024, 9, 1));
        let first = grid.iter().next().unwrap();
        assert_eq!((first.column, first.row), (6, 0));
        assert_eq!(grid.weeks(), 6);
    }

    #[test]
    fn non_leap_february_on_monday_spans_four_rows() {
        // 2021-02-01 is a Monday.
        let grid = layout(day(2021, 2, 1));
        assert_eq!(grid.len(), 28);
        assert_eq!(grid.weeks(), 4);
    }

    #[test]
    fn every_day_once_and_coordinates_unique() {
        for grid in all_months() {
            let cells = grid.cells();
            assert_eq!(cells.len(), grid.len());
            assert_eq!(cells.len() as u32, grid.first().days_in_month());

            let mut seen: Vec<(usize, usize)> = Vec::new();
            for cell in &cells {
                assert!(cell.column < MonthGrid::COLUMNS);
                assert!(cell.row < grid.weeks());
                assert!(
                    !seen.contains(&(cell.column, cell.row)),
                    "duplicate coordinate in {}-{}",
                    grid.year(),
                    grid.month()
                );
                seen.push((cell.column, cell.row));
            }
        }
    }

    #[test]
    fn weeks_match_highest_row() {
        for grid in all_months() {
            let max_row = grid.iter().map(|c| c.row).max().unwrap();
            assert_eq!(grid.weeks(), max_row + 1, "{}-{}", grid.year(), grid.month());
            assert!((4..=6).contains(&grid.weeks()));
        }
    }

    #[test]
    fn rows_advance_on_mondays() {
        for grid in all_months() {
            let cells = grid.cells();
            for pair in cells.windows(2) {
                let expected = if pair[1].column == 0 {
                    pair[0].row + 1
                } else {
                    pair[0].row
                };
                assert_eq!(pair[1].row, expected, "at {}", pair[1].day);
            }
        }
    }

    #[test]
    fn year_boundary_months() {
        // December 2012 ends in week 54 of a leap year starting on Sunday.
        let december = layout(day(2012, 12, 1));
        assert_eq!(december.weeks(), 6);
        let january = layout(day(2013, 1, 1));
        // 2013-01-01 is a Tuesday.
        assert_eq!(january.weeks(), 5);

        let december = layout(day(2024, 12, 1));
        // 2024-12-01 is a Sunday.
        assert_eq!(december.weeks(), 6);
        let january = layout(day(2025, 1, 1));
        assert_eq!(january.weeks(), 5);
    }

    #[test]
    fn position_of_other_month_is_none() {
        let grid = layout(day(2024, 2, 1));
        assert!(grid.position_of(day(2024, 3, 1)).is_none());
        let pos = grid.position_of(day(2024, 2, 14)).unwrap();
        assert_eq!((pos.column, pos.row), (2, 2));
    }

    #[test]
    fn iterator_reports_exact_size() {
        let grid = layout(day(2023, 4, 1));
        let mut days = grid.iter();
        assert_eq!(days.len(), 30);
        days.next();
        assert_eq!(days.len(), 29);
        assert_eq!(days.count(), 29);
    }
}
