// Copyright 2025 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Almanac Model: the state machine behind a month calendar widget.
//!
//! [`CalendarModel`] owns the selected date, the laid-out cells of the month
//! being viewed, and the caller-supplied mark and holiday sets. It has a
//! single state, "viewing a month"; selecting a date in another month or
//! shifting by whole months replaces the viewed month and rebuilds every cell.
//!
//! - [`DayCell`]: one day of the viewed month with its grid coordinate and
//!   [`CellFlags`] (selected, marked, holiday, weekend, today).
//! - [`cell_state`]: the flag-application rules, usable on any cell slice.
//! - [`Clock`]: the source of "today". Inject a [`FixedClock`] for
//!   deterministic behavior; with the `std` feature, [`SystemClock`] reads the
//!   local system date.
//! - [`Listeners`]: the date-changed notification channel. Listeners return a
//!   `Result`; failures are logged and counted in the returned [`Delivery`]
//!   and never reach the caller or roll back the model.
//!
//! ## Minimal example
//!
//! ```rust
//! use almanac_grid::Day;
//! use almanac_model::{CalendarModel, FixedClock};
//!
//! let today = Day::from_ymd(2024, 12, 15).unwrap();
//! let mut model = CalendarModel::new(FixedClock(today));
//!
//! model.subscribe(|change| {
//!     assert_eq!(change.date, Day::from_ymd(2025, 1, 1).unwrap());
//!     Ok(())
//! });
//!
//! let delivery = model.shift_month(1).unwrap();
//! assert_eq!(delivery.delivered, 1);
//! assert_eq!(model.selected_date(), Day::from_ymd(2025, 1, 1).unwrap());
//! assert_eq!(model.cells().len(), 31);
//! ```
//!
//! ## Ordering
//!
//! Within one call the grid is rebuilt, selection, marks, holidays, and today
//! are applied, and the selected date is committed before any listener runs.
//! Listeners observe a consistent model afterwards.
//!
//! ## Features
//!
//! - `std` (default): enables [`SystemClock`] via `chrono`'s `clock` feature.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod cell;
pub mod cell_state;
mod clock;
mod error;
mod model;
mod notify;

pub use cell::{CellFlags, DayCell};
#[cfg(feature = "std")]
pub use clock::SystemClock;
pub use clock::{Clock, FixedClock, FnClock};
pub use error::CalendarError;
pub use model::CalendarModel;
pub use notify::{DateChanged, Delivery, Listener, ListenerError, ListenerId, Listeners};
