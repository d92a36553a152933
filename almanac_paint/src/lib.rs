// Copyright 2025 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Almanac Paint: backend-agnostic drawing for a month calendar widget.
//!
//! [`paint`] turns a [`Geometry`](almanac_hit::Geometry), the model's cells,
//! a [`StyleConfig`], [`WidgetOptions`], and [`Labels`] into calls on a
//! [`Painter`]. Backends implement [`Painter`] directly, or paint into a
//! [`DisplayList`] and [`replay`](DisplayList::replay) it later.
//!
//! Text is described by an origin and an anchor instead of measured
//! extents; the backend owns fonts and shaping.
//!
//! ## Minimal example
//!
//! ```rust
//! use almanac_grid::Day;
//! use almanac_hit::Geometry;
//! use almanac_model::{CalendarModel, FixedClock};
//! use almanac_paint::{DisplayList, EnglishLabels, StyleConfig, WidgetOptions, paint};
//! use kurbo::Size;
//!
//! let model = CalendarModel::new(FixedClock(Day::from_ymd(2024, 2, 10).unwrap()));
//! let geometry = Geometry::compute(Size::new(700.0, 600.0), model.grid());
//!
//! let mut list = DisplayList::new();
//! paint(
//!     &mut list,
//!     &geometry,
//!     model.cells(),
//!     &StyleConfig::default(),
//!     WidgetOptions::default(),
//!     &EnglishLabels,
//! );
//! assert!(!list.is_empty());
//! ```
//!
//! ## Features
//!
//! - `std` (default): uses `std` float math in `kurbo`.
//! - `libm`: uses `libm` float math for `no_std` builds.
//! - `serde`: derives `Serialize` and `Deserialize` for [`Color`],
//!   [`StyleConfig`], and [`WidgetOptions`], so themes can be loaded from
//!   configuration files.

#![no_std]

extern crate alloc;

mod display_list;
mod labels;
mod paint;
mod style;

pub use display_list::{Baseline, DisplayList, PaintOp, Painter, TextAnchor, TextRun};
pub use labels::{EnglishLabels, Labels};
pub use paint::{CORNER_RADIUS, GRID_LINE_WIDTH, TODAY_LINE_WIDTH, paint};
pub use style::{Color, StyleConfig, WidgetOptions};

pub use chrono::Weekday;
