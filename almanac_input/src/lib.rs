// Copyright 2025 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Almanac Input: turning pointer events into calendar operations.
//!
//! [`SelectionController`] sits between the host's input plumbing and a
//! [`CalendarModel`](almanac_model::CalendarModel). It resolves positions
//! with the geometry of the host's last layout pass and dispatches the
//! result: header buttons shift the month, cells select their date, and
//! anything else is ignored. A [`RedrawHost`] is asked to repaint after every
//! event.
//!
//! Hosts that only report complete clicks call
//! [`SelectionController::on_pointer`]. Hosts that report raw presses and
//! releases use [`SelectionController::on_pointer_down`] and
//! [`SelectionController::on_pointer_up`], which go through [`TapState`].
//!
//! ## Minimal example
//!
//! ```rust
//! use almanac_grid::Day;
//! use almanac_hit::{Geometry, Hit};
//! use almanac_input::SelectionController;
//! use almanac_model::{CalendarModel, FixedClock};
//! use kurbo::{Point, Size};
//!
//! let mut model = CalendarModel::new(FixedClock(Day::from_ymd(2024, 2, 10).unwrap()));
//! let mut controller = SelectionController::new();
//! controller.set_geometry(Geometry::compute(Size::new(700.0, 600.0), model.grid()));
//!
//! let hit = controller.on_pointer(&mut model, Point::new(350.0, 150.0)).unwrap();
//! assert_eq!(hit, Hit::Cell(Day::from_ymd(2024, 2, 1).unwrap()));
//! assert_eq!(model.selected_date(), Day::from_ymd(2024, 2, 1).unwrap());
//! ```
//!
//! ## Features
//!
//! - `std` (default): uses `std` float math in `kurbo`.
//! - `libm`: uses `libm` float math for `no_std` builds.

#![no_std]

extern crate alloc;

mod controller;
mod redraw;
pub mod tap;

pub use controller::SelectionController;
pub use redraw::{NoRedraw, RedrawHost};
pub use tap::{DEFAULT_SLOP, PRIMARY_POINTER, PointerId, Press, TapResult, TapState};
