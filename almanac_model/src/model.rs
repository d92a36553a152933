// Copyright 2025 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`CalendarModel`]: selection, marks, and the viewed month.

use alloc::vec::Vec;

use almanac_grid::{Day, MonthGrid, layout};
use smallvec::SmallVec;

use crate::{
    CalendarError, Clock, DateChanged, DayCell, Delivery, ListenerError, ListenerId, Listeners,
    cell_state,
};

/// Owns the viewed month, its cells, and the selected date.
///
/// All mutation goes through methods on this type; cells are only handed out
/// as shared slices. Exactly one cell is selected after every public call.
#[derive(Debug)]
pub struct CalendarModel<C> {
    clock: C,
    selected: Day,
    grid: MonthGrid,
    cells: SmallVec<[DayCell; 31]>,
    marks: Vec<Day>,
    holidays: Vec<Day>,
    listeners: Listeners,
}

impl<C: Clock> CalendarModel<C> {
    /// Creates a model viewing the clock's current month with today selected.
    pub fn new(clock: C) -> Self {
        let today = clock.today();
        Self::with_date(clock, today)
    }

    /// Creates a model with `initial` selected.
    ///
    /// No notification is sent, since nothing can be subscribed yet.
    pub fn with_date(clock: C, initial: Day) -> Self {
        let grid = layout(initial);
        let mut model = Self {
            clock,
            selected: initial,
            grid,
            cells: SmallVec::new(),
            marks: Vec::new(),
            holidays: Vec::new(),
            listeners: Listeners::new(),
        };
        model.rebuild(initial);
        model.apply_flags();
        model
    }

    /// Selects `date`, laying out its month first if it is not the one being
    /// viewed, and then notifies listeners.
    ///
    /// Any time-of-day component is dropped by the conversion into [`Day`].
    pub fn select_date(&mut self, date: impl Into<Day>) -> Delivery {
        let date = date.into();
        let previous = self.selected;
        let month_changed = !self.grid.contains(date);
        if month_changed {
            self.rebuild(date);
        }
        self.selected = date;
        self.apply_flags();

        self.listeners.emit(&DateChanged {
            date,
            previous,
            month_changed,
        })
    }

    /// Selects `date`, or today when `None`.
    pub fn set_date(&mut self, date: Option<Day>) -> Delivery {
        let date = date.unwrap_or_else(|| self.clock.today());
        self.select_date(date)
    }

    /// Validates and selects a `(year, month, day)` triple.
    ///
    /// An invalid triple is rejected and the model is left untouched.
    pub fn set_date_ymd(
        &mut self,
        year: i32,
        month: u32,
        day: u32,
    ) -> Result<Delivery, CalendarError> {
        let day = Day::from_ymd(year, month, day)?;
        Ok(self.select_date(day))
    }

    /// Moves the selection to the first day of the month `delta` months away
    /// from the selected one.
    ///
    /// Fails without touching the model if the target month cannot be
    /// represented.
    pub fn shift_month(&mut self, delta: i32) -> Result<Delivery, CalendarError> {
        let target = self.selected.first_of_shifted_month(delta).ok_or(
            CalendarError::MonthOutOfRange {
                year: self.selected.year(),
                month: self.selected.month(),
                delta,
            },
        )?;
        Ok(self.select_date(target))
    }

    /// Replaces the mark set and reapplies it to the current cells.
    ///
    /// Does not change the month or notify listeners.
    pub fn set_marked_dates(&mut self, dates: &[Day]) {
        self.marks.clear();
        self.marks.extend_from_slice(dates);
        cell_state::apply_marks(&mut self.cells, &self.marks);
    }

    /// Replaces the holiday set and reapplies it to the current cells.
    ///
    /// Does not change the month or notify listeners.
    pub fn set_holidays(&mut self, dates: &[Day]) {
        self.holidays.clear();
        self.holidays.extend_from_slice(dates);
        cell_state::apply_holidays(&mut self.cells, &self.holidays);
    }

    /// Re-reads the clock and moves the today flag, for hosts that keep a
    /// model alive across midnight. Returns `true` if today is in the viewed
    /// month.
    pub fn refresh_today(&mut self) -> bool {
        cell_state::apply_today(&mut self.cells, self.clock.today())
    }

    /// Today according to the model's clock.
    pub fn today(&self) -> Day {
        self.clock.today()
    }

    /// Subscribes a date-changed listener.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&DateChanged) -> Result<(), ListenerError> + 'static,
    {
        self.listeners.subscribe(listener)
    }

    /// Removes a date-changed listener.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    fn rebuild(&mut self, date: Day) {
        self.grid = layout(date);
        self.cells = self.grid.iter().map(DayCell::from).collect();
        tracing::debug!(
            year = self.grid.year(),
            month = self.grid.month(),
            weeks = self.grid.weeks(),
            "laid out month"
        );
    }

    fn apply_flags(&mut self) {
        cell_state::apply_selection(&mut self.cells, self.selected);
        cell_state::apply_marks(&mut self.cells, &self.marks);
        cell_state::apply_holidays(&mut self.cells, &self.holidays);
        cell_state::apply_today(&mut self.cells, self.clock.today());
    }
}

impl<C> CalendarModel<C> {
    /// Cells of the viewed month in calendar order.
    #[must_use]
    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    /// The cell holding `date`, if it is in the viewed month.
    #[must_use]
    pub fn cell(&self, date: Day) -> Option<&DayCell> {
        self.cells.iter().find(|cell| cell.date() == date)
    }

    /// The selected date.
    #[must_use]
    pub const fn selected_date(&self) -> Day {
        self.selected
    }

    /// Layout of the viewed month.
    #[must_use]
    pub const fn grid(&self) -> &MonthGrid {
        &self.grid
    }

    /// Number of week rows in the viewed month.
    #[must_use]
    pub const fn weeks_in_month(&self) -> usize {
        self.grid.weeks()
    }

    /// The stored mark set, in the order it was supplied.
    #[must_use]
    pub fn marked_dates(&self) -> &[Day] {
        &self.marks
    }

    /// The stored holiday set, in the order it was supplied.
    #[must_use]
    pub fn holidays(&self) -> &[Day] {
        &self.holidays
    }

    /// The clock supplying today's date.
    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Number of subscribed listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}
