// Copyright 2025 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Day cells and their state flags.

use almanac_grid::{Day, GridDay};

bitflags::bitflags! {
    /// Per-cell state consulted by renderers.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct CellFlags: u8 {
        /// The cell holds the selected date.
        const SELECTED = 0b0000_0001;
        /// The date is in the caller's mark set.
        const MARKED   = 0b0000_0010;
        /// The date is in the caller's holiday set.
        const HOLIDAY  = 0b0000_0100;
        /// The date is a Saturday or Sunday.
        const WEEKEND  = 0b0000_1000;
        /// The date is today according to the model's clock.
        const TODAY    = 0b0001_0000;
    }
}

impl Default for CellFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// One day of the viewed month.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DayCell {
    date: Day,
    column: usize,
    row: usize,
    flags: CellFlags,
}

impl DayCell {
    /// Creates a cell for a laid-out day. Only [`CellFlags::WEEKEND`] is derived;
    /// every other flag starts cleared.
    #[must_use]
    pub fn new(grid_day: GridDay) -> Self {
        let mut flags = CellFlags::empty();
        flags.set(CellFlags::WEEKEND, grid_day.day.is_weekend());
        Self {
            date: grid_day.day,
            column: grid_day.column,
            row: grid_day.row,
            flags,
        }
    }

    /// The calendar date of this cell.
    #[must_use]
    pub const fn date(&self) -> Day {
        self.date
    }

    /// Weekday column, Monday = 0.
    #[must_use]
    pub const fn column(&self) -> usize {
        self.column
    }

    /// Week row within the month.
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// All state flags.
    #[must_use]
    pub const fn flags(&self) -> CellFlags {
        self.flags
    }

    /// See [`CellFlags::SELECTED`].
    #[must_use]
    pub const fn is_selected(&self) -> bool {
        self.flags.contains(CellFlags::SELECTED)
    }

    /// See [`CellFlags::MARKED`].
    #[must_use]
    pub const fn is_marked(&self) -> bool {
        self.flags.contains(CellFlags::MARKED)
    }

    /// See [`CellFlags::HOLIDAY`].
    #[must_use]
    pub const fn is_holiday(&self) -> bool {
        self.flags.contains(CellFlags::HOLIDAY)
    }

    /// See [`CellFlags::WEEKEND`].
    #[must_use]
    pub const fn is_weekend(&self) -> bool {
        self.flags.contains(CellFlags::WEEKEND)
    }

    /// See [`CellFlags::TODAY`].
    #[must_use]
    pub const fn is_today(&self) -> bool {
        self.flags.contains(CellFlags::TODAY)
    }

    pub(crate) fn set(&mut self, flag: CellFlags, on: bool) {
        self.flags.set(flag, on);
    }
}

impl From<GridDay> for DayCell {
    fn from(grid_day: GridDay) -> Self {
        Self::new(grid_day)
    }
}
