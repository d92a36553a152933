// Copyright 2025 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Almanac Hit: pointer hit testing for a month calendar widget.
//!
//! Geometry is plain data. [`Geometry::compute`] derives the header buttons
//! and the day cell boxes from the widget size and a [`MonthGrid`], and
//! [`hit_test`] resolves a widget-space point against it. Nothing here is
//! tied to a renderer or to a drawing callback.
//!
//! ## Rules
//!
//! - Containment is strict: a point on any edge of a box is outside it.
//! - Priority is previous-month button, then next-month button, then the day
//!   cells in calendar order. The first match wins.
//! - A geometry whose [`Coverage`] differs from the caller's (a layout that
//!   was computed for another month) never yields a cell. The header buttons
//!   are still resolved, since their boxes do not depend on the month.
//!
//! ## Minimal example
//!
//! ```rust
//! use almanac_grid::{Day, layout};
//! use almanac_hit::{Coverage, Geometry, Hit, hit_test};
//! use kurbo::{Point, Size};
//!
//! let grid = layout(Day::from_ymd(2024, 2, 1).unwrap());
//! let geometry = Geometry::compute(Size::new(700.0, 600.0), &grid);
//! let coverage = Coverage::of(&grid);
//!
//! assert_eq!(hit_test(Point::new(50.0, 50.0), &geometry, coverage), Hit::PrevButton);
//! assert_eq!(
//!     hit_test(Point::new(350.0, 150.0), &geometry, coverage),
//!     Hit::Cell(Day::from_ymd(2024, 2, 1).unwrap()),
//! );
//! // Exactly on the shared edge of two cells.
//! assert_eq!(hit_test(Point::new(400.0, 150.0), &geometry, coverage), Hit::Miss);
//! ```
//!
//! ## Features
//!
//! - `std` (default): uses `std` float math in `kurbo`.
//! - `libm`: uses `libm` float math for `no_std` builds.

#![no_std]

extern crate alloc;

mod geometry;

pub use geometry::{CellBox, Coverage, Geometry, strictly_contains};

use almanac_grid::{Day, MonthGrid};
use kurbo::Point;

/// What a pointer position resolved to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Hit {
    /// The previous-month button in the header.
    PrevButton,
    /// The next-month button in the header.
    NextButton,
    /// The cell showing this date.
    Cell(Day),
    /// Nothing actionable.
    Miss,
}

/// Resolves `point` against `geometry`.
///
/// `current` is the coverage of the month the caller is showing; pass
/// [`Coverage::of`] the model's grid.
#[must_use]
pub fn hit_test(point: Point, geometry: &Geometry, current: Coverage) -> Hit {
    let hit = resolve(point, geometry, current);
    tracing::trace!(x = point.x, y = point.y, ?hit, "hit test");
    hit
}

/// [`hit_test`] against the coverage of `grid`.
#[must_use]
pub fn hit_test_grid(point: Point, geometry: &Geometry, grid: &MonthGrid) -> Hit {
    hit_test(point, geometry, Coverage::of(grid))
}

fn resolve(point: Point, geometry: &Geometry, current: Coverage) -> Hit {
    if strictly_contains(geometry.prev_button(), point) {
        return Hit::PrevButton;
    }
    if strictly_contains(geometry.next_button(), point) {
        return Hit::NextButton;
    }
    if geometry.coverage() != current {
        tracing::debug!(
            computed = ?geometry.coverage(),
            ?current,
            "geometry is stale, ignoring cells"
        );
        return Hit::Miss;
    }
    geometry
        .cells()
        .iter()
        .find(|cell| strictly_contains(cell.rect, point))
        .map_or(Hit::Miss, |cell| Hit::Cell(cell.day))
}
