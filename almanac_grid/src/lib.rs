// Copyright 2025 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Almanac Grid: month-to-grid layout for calendar widgets.
//!
//! This crate maps one calendar month onto a Monday-first weekly table. It is
//! pure computation: no rendering, no widget state, no system clock.
//!
//! The core concepts are:
//!
//! - [`Day`]: a calendar date with no time-of-day component, wrapping
//!   [`chrono::NaiveDate`]. It knows its weekday column and whether it falls on
//!   a weekend.
//! - [`week_of_year`]: week numbering with a Monday week start where week 1 is
//!   always the week containing January 1st (the "first day" rule). This is not
//!   ISO 8601 week numbering; the first partial week of a year counts.
//! - [`layout`]: given any reference date, returns a [`MonthGrid`] describing
//!   the month's first and last day, how many week rows it spans, and the
//!   `(column, row)` of every day in it.
//!
//! Only days of the reference month are laid out. There are no padding days
//! from adjacent months, so the first row may start at any column and the
//! last row may end early.
//!
//! ## Minimal example
//!
//! ```rust
//! use almanac_grid::{Day, layout};
//!
//! // February 2024 starts on a Thursday and is a leap month.
//! let grid = layout(Day::from_ymd(2024, 2, 17).unwrap());
//! assert_eq!(grid.len(), 29);
//! assert_eq!(grid.weeks(), 5);
//!
//! let first = grid.iter().next().unwrap();
//! assert_eq!((first.column, first.row), (3, 0));
//! ```
//!
//! ## Rows and the year boundary
//!
//! A day's row is `week_of_year(day) - week_of_year(first_of_month)`. Week
//! numbers of a month's first day above 52 are folded back to week 1 (and the
//! compared week shifted by one to match), and January days reporting a week
//! above 52 are forced to week 1. See [`correct_weeks`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod day;
mod layout;
mod week;

pub use day::{Day, InvalidDate};
pub use layout::{Days, GridDay, MonthGrid, layout};
pub use week::{LAST_REGULAR_WEEK, correct_weeks, week_of_year};
