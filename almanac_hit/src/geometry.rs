// Copyright 2025 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Widget-space boxes for the header buttons and day cells.

use alloc::vec::Vec;

use almanac_grid::{Day, MonthGrid};
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect, Size};

/// Fraction of the widget height reserved for the header band.
const HEADER_DIVISOR: f64 = 6.0;

/// Which month, and how many cells, a [`Geometry`] was computed for.
///
/// Compare against the coverage of the model's current grid to detect a
/// stale layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coverage {
    /// Year of the covered month.
    pub year: i32,
    /// Covered month, 1-based.
    pub month: u32,
    /// Number of day cells.
    pub cells: usize,
}

impl Coverage {
    /// Coverage of a laid-out month.
    #[must_use]
    pub fn of(grid: &MonthGrid) -> Self {
        Self {
            year: grid.year(),
            month: grid.month(),
            cells: grid.len(),
        }
    }
}

/// The box of one day cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellBox {
    /// Date shown in the cell.
    pub day: Day,
    /// Cell bounds in widget coordinates.
    pub rect: Rect,
}

/// Hit and paint geometry for one month at one widget size.
///
/// Built by [`Geometry::compute`], which is a pure function of the widget
/// size and the month layout. All metrics are floored to whole units, so the
/// cells may not reach the right and bottom edges of the widget.
#[derive(Clone, Debug, PartialEq)]
pub struct Geometry {
    size: Size,
    header_height: f64,
    column_width: f64,
    row_height: f64,
    prev_button: Rect,
    next_button: Rect,
    cells: Vec<CellBox>,
    coverage: Coverage,
}

impl Geometry {
    /// Computes the geometry of `grid` drawn at `size`.
    ///
    /// The header band is `⌊H/6⌋` tall. Columns are `⌊W/7⌋` wide and rows
    /// split the remaining height evenly, floored. The previous-month button
    /// spans the first column of the header and the next-month button the
    /// last `⌊W/7⌋` units of it.
    #[must_use]
    pub fn compute(size: Size, grid: &MonthGrid) -> Self {
        let width = size.width.max(0.0);
        let height = size.height.max(0.0);
        let header_height = (height / HEADER_DIVISOR).floor();
        let column_width = (width / MonthGrid::COLUMNS as f64).floor();
        let row_height = ((height - header_height) / grid.weeks().max(1) as f64).floor();

        let mut geometry = Self {
            size,
            header_height,
            column_width,
            row_height,
            prev_button: Rect::new(0.0, 0.0, column_width, header_height),
            next_button: Rect::new(width - column_width, 0.0, width, header_height),
            cells: Vec::with_capacity(grid.len()),
            coverage: Coverage::of(grid),
        };
        for cell in grid {
            let rect = geometry.cell_rect_at(cell.column, cell.row);
            geometry.cells.push(CellBox {
                day: cell.day,
                rect,
            });
        }
        geometry
    }

    /// Box of the grid slot at `(column, row)`, whether or not a day occupies
    /// it.
    #[must_use]
    pub fn cell_rect_at(&self, column: usize, row: usize) -> Rect {
        let x0 = column as f64 * self.column_width;
        let y0 = self.header_height + row as f64 * self.row_height;
        Rect::new(x0, y0, x0 + self.column_width, y0 + self.row_height)
    }

    /// Widget size this geometry was computed for.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Height of the header band holding the title, buttons, and weekday row.
    #[must_use]
    pub const fn header_height(&self) -> f64 {
        self.header_height
    }

    /// Width of one weekday column.
    #[must_use]
    pub const fn column_width(&self) -> f64 {
        self.column_width
    }

    /// Height of one week row.
    #[must_use]
    pub const fn row_height(&self) -> f64 {
        self.row_height
    }

    /// The header band across the full widget width.
    #[must_use]
    pub fn header(&self) -> Rect {
        Rect::new(0.0, 0.0, self.size.width.max(0.0), self.header_height)
    }

    /// Previous-month button box.
    #[must_use]
    pub const fn prev_button(&self) -> Rect {
        self.prev_button
    }

    /// Next-month button box.
    #[must_use]
    pub const fn next_button(&self) -> Rect {
        self.next_button
    }

    /// Day cell boxes in calendar order.
    #[must_use]
    pub fn cells(&self) -> &[CellBox] {
        &self.cells
    }

    /// Box of the cell showing `day`.
    #[must_use]
    pub fn cell_rect(&self, day: Day) -> Option<Rect> {
        self.cells.iter().find(|c| c.day == day).map(|c| c.rect)
    }

    /// The month and cell count this geometry covers.
    #[must_use]
    pub const fn coverage(&self) -> Coverage {
        self.coverage
    }
}

/// Returns `true` if `point` lies strictly inside `rect`.
///
/// Points on any of the four edges are outside, so two adjacent cells never
/// both contain a point.
#[must_use]
pub fn strictly_contains(rect: Rect, point: Point) -> bool {
    point.x > rect.x0 && point.x < rect.x1 && point.y > rect.y0 && point.y < rect.y1
}
