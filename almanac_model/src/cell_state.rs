// Copyright 2025 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flag application over a month's cells.
//!
//! Every function here first clears its flag on all cells and then sets it on
//! the cells whose date matches. Matching is by calendar date. Dates that do
//! not fall in the cells' month find no cell and are ignored.

use almanac_grid::Day;
use hashbrown::HashSet;

use crate::{CellFlags, DayCell};

/// Sets [`CellFlags::MARKED`] on exactly the cells whose date is in `marks`.
pub fn apply_marks(cells: &mut [DayCell], marks: &[Day]) {
    apply_set(cells, CellFlags::MARKED, marks);
}

/// Sets [`CellFlags::HOLIDAY`] on exactly the cells whose date is in `holidays`.
pub fn apply_holidays(cells: &mut [DayCell], holidays: &[Day]) {
    apply_set(cells, CellFlags::HOLIDAY, holidays);
}

/// Moves [`CellFlags::SELECTED`] to the cell holding `date`.
///
/// Returns `false` when no cell matches, leaving nothing selected; callers
/// take that as the signal to lay out `date`'s month instead.
pub fn apply_selection(cells: &mut [DayCell], date: Day) -> bool {
    apply_single(cells, CellFlags::SELECTED, date)
}

/// Moves [`CellFlags::TODAY`] to the cell holding `today`, if any.
pub fn apply_today(cells: &mut [DayCell], today: Day) -> bool {
    apply_single(cells, CellFlags::TODAY, today)
}

fn apply_set(cells: &mut [DayCell], flag: CellFlags, dates: &[Day]) {
    if dates.is_empty() {
        for cell in cells.iter_mut() {
            cell.set(flag, false);
        }
        return;
    }
    let wanted: HashSet<Day> = dates.iter().copied().collect();
    for cell in cells.iter_mut() {
        let hit = wanted.contains(&cell.date());
        cell.set(flag, hit);
    }
}

fn apply_single(cells: &mut [DayCell], flag: CellFlags, date: Day) -> bool {
    let mut found = false;
    for cell in cells.iter_mut() {
        let hit = cell.date() == date;
        cell.set(flag, hit);
        found |= hit;
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use almanac_grid::layout;

    fn day(y: i32, m: u32, d: u32) -> Day {
        Day::from_ymd(y, m, d).unwrap()
    }

    fn february() -> Vec<DayCell> {
        layout(day(2024, 2, 1)).iter().map(DayCell::from).collect()
    }

    fn flagged(cells: &[DayCell], flag: CellFlags) -> Vec<Day> {
        cells
            .iter()
            .filter(|c| c.flags().contains(flag))
            .map(|c| c.date())
            .collect()
    }

    #[test]
    fn single_holiday_marks_one_cell() {
        let mut cells = february();
        apply_holidays(&mut cells, &[day(2024, 2, 14)]);
        assert_eq!(flagged(&cells, CellFlags::HOLIDAY), [day(2024, 2, 14)]);
    }

    #[test]
    fn out_of_month_marks_are_ignored() {
        let mut cells = february();
        apply_marks(&mut cells, &[day(2024, 1, 31), day(2024, 2, 3), day(2025, 2, 3)]);
        assert_eq!(flagged(&cells, CellFlags::MARKED), [day(2024, 2, 3)]);
    }

    #[test]
    fn reapplying_replaces_previous_set() {
        let mut cells = february();
        apply_marks(&mut cells, &[day(2024, 2, 1), day(2024, 2, 2)]);
        apply_marks(&mut cells, &[day(2024, 2, 9)]);
        assert_eq!(flagged(&cells, CellFlags::MARKED), [day(2024, 2, 9)]);

        apply_marks(&mut cells, &[]);
        assert!(flagged(&cells, CellFlags::MARKED).is_empty());
    }

    #[test]
    fn applying_twice_is_idempotent() {
        let marks = [day(2024, 2, 5), day(2024, 2, 20), day(2024, 2, 5)];
        let mut once = february();
        apply_marks(&mut once, &marks);
        let mut twice = february();
        apply_marks(&mut twice, &marks);
        apply_marks(&mut twice, &marks);
        assert_eq!(once, twice);
    }

    #[test]
    fn flags_are_independent() {
        let mut cells = february();
        let d = day(2024, 2, 10);
        apply_selection(&mut cells, d);
        apply_marks(&mut cells, &[d]);
        apply_holidays(&mut cells, &[d]);
        apply_marks(&mut cells, &[]);

        let cell = cells.iter().find(|c| c.date() == d).unwrap();
        assert!(cell.is_selected());
        assert!(cell.is_holiday());
        assert!(!cell.is_marked());
        // Saturday keeps its derived weekend flag.
        assert!(cell.is_weekend());
    }

    #[test]
    fn selection_moves_and_reports_misses() {
        let mut cells = february();
        assert!(apply_selection(&mut cells, day(2024, 2, 1)));
        assert!(apply_selection(&mut cells, day(2024, 2, 2)));
        assert_eq!(flagged(&cells, CellFlags::SELECTED), [day(2024, 2, 2)]);

        assert!(!apply_selection(&mut cells, day(2024, 3, 1)));
        assert!(flagged(&cells, CellFlags::SELECTED).is_empty());
    }

    #[test]
    fn today_outside_month_clears_flag() {
        let mut cells = february();
        assert!(apply_today(&mut cells, day(2024, 2, 29)));
        assert!(!apply_today(&mut cells, day(2024, 3, 1)));
        assert!(flagged(&cells, CellFlags::TODAY).is_empty());
    }
}
