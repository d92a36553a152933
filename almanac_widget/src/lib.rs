// Copyright 2025 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Almanac Widget: an embeddable month calendar.
//!
//! [`CalendarWidget`] ties the Almanac crates together behind the surface a
//! host UI needs:
//!
//! - date control: [`set_date`](CalendarWidget::set_date),
//!   [`set_marked_dates`](CalendarWidget::set_marked_dates),
//!   [`set_holidays`](CalendarWidget::set_holidays);
//! - queries: [`cells`](CalendarWidget::cells),
//!   [`weeks_in_month`](CalendarWidget::weeks_in_month),
//!   [`selected_date`](CalendarWidget::selected_date);
//! - input: [`on_pointer`](CalendarWidget::on_pointer), or the press/release
//!   pair for hosts without click synthesis;
//! - notification: [`on_date_changed`](CalendarWidget::on_date_changed);
//! - rendering: [`layout`](CalendarWidget::layout) on resize and
//!   [`paint`](CalendarWidget::paint) on redraw.
//!
//! The building blocks are re-exported for hosts that need only part of it:
//! [`almanac_grid`] (month layout), [`almanac_model`] (selection state),
//! [`almanac_hit`] (geometry and hit testing), [`almanac_input`] (pointer
//! routing), and [`almanac_paint`] (display lists).
//!
//! ## Minimal example
//!
//! ```rust
//! use almanac_widget::{CalendarWidget, Day, EnglishLabels, FixedClock, Hit};
//! use kurbo::Size;
//!
//! let mut widget = CalendarWidget::new(FixedClock(Day::from_ymd(2024, 2, 10).unwrap()));
//! widget.layout(Size::new(700.0, 600.0));
//!
//! widget.on_date_changed(|change| {
//!     assert_eq!(change.date, Day::from_ymd(2024, 2, 1).unwrap());
//!     Ok(())
//! });
//! assert_eq!(
//!     widget.on_pointer(350.0, 150.0),
//!     Ok(Hit::Cell(Day::from_ymd(2024, 2, 1).unwrap())),
//! );
//!
//! let display_list = widget.paint(&EnglishLabels);
//! assert!(!display_list.is_empty());
//! ```
//!
//! ## Features
//!
//! - `std` (default): `SystemClock` and `std` float math.
//! - `libm`: `libm` float math for `no_std` builds.
//! - `serde`: serializable `StyleConfig` and `WidgetOptions`.

#![no_std]

extern crate alloc;

mod widget;

pub use widget::CalendarWidget;

pub use almanac_grid::{self, Day, InvalidDate};
pub use almanac_hit::{self, Geometry, Hit};
pub use almanac_input::{self, NoRedraw, PointerId, RedrawHost};
#[cfg(feature = "std")]
pub use almanac_model::SystemClock;
pub use almanac_model::{
    self, CalendarError, CalendarModel, CellFlags, Clock, DateChanged, DayCell, Delivery,
    FixedClock, ListenerError, ListenerId,
};
pub use almanac_paint::{
    self, Color, DisplayList, EnglishLabels, Labels, PaintOp, Painter, StyleConfig, WidgetOptions,
};
