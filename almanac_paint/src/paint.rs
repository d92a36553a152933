// Copyright 2025 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The paint rules of the month view.

use alloc::string::{String, ToString};

use almanac_hit::Geometry;
use almanac_model::DayCell;
use chrono::Weekday;
use kurbo::{Circle, Point, Rect, RoundedRect};

use crate::{Baseline, Color, Labels, Painter, StyleConfig, TextAnchor, TextRun, WidgetOptions};

/// Stroke width of cell outlines.
pub const GRID_LINE_WIDTH: f64 = 2.0;

/// Corner radius of rounded cells.
pub const CORNER_RADIUS: f64 = 20.0;

/// Stroke width of the today outline.
pub const TODAY_LINE_WIDTH: f64 = GRID_LINE_WIDTH * 4.0;

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Paints the month view into `painter`.
///
/// Back to front: the widget background, the header (buttons, title,
/// weekday labels), each cell in order, and finally the today outline when
/// [`WidgetOptions::today_marker`] is set. Cells are placed by their
/// `(column, row)` in `geometry`; the title uses the month `geometry` was
/// computed for.
pub fn paint<L: Labels + ?Sized>(
    painter: &mut impl Painter,
    geometry: &Geometry,
    cells: &[DayCell],
    style: &StyleConfig,
    options: WidgetOptions,
    labels: &L,
) {
    let size = geometry.size();
    painter.fill_rect(Rect::new(0.0, 0.0, size.width, size.height), style.background);

    paint_header(painter, geometry, style, labels);

    for cell in cells {
        let rect = geometry.cell_rect_at(cell.column(), cell.row());
        paint_cell(painter, cell, rect, style, options);
    }

    if options.today_marker {
        for cell in cells.iter().filter(|c| c.is_today()) {
            let rect = geometry.cell_rect_at(cell.column(), cell.row());
            outline(painter, rect, style.today, TODAY_LINE_WIDTH, options);
        }
    }
}

fn paint_header<L: Labels + ?Sized>(
    painter: &mut impl Painter,
    geometry: &Geometry,
    style: &StyleConfig,
    labels: &L,
) {
    let header = geometry.header_height();
    let column = geometry.column_width();

    for (rect, glyph, anchor) in [
        (geometry.prev_button(), "<", TextAnchor::Start),
        (geometry.next_button(), ">", TextAnchor::End),
    ] {
        let inset = rect.width() / 6.0;
        let x = match anchor {
            TextAnchor::End => rect.x1 - inset,
            _ => rect.x0 + inset,
        };
        painter.text(&run(
            glyph.to_string(),
            Point::new(x, rect.y0 + rect.height() / 2.0),
            rect.height() / 2.0,
            style.button,
            anchor,
            Baseline::Alphabetic,
        ));
    }

    let coverage = geometry.coverage();
    painter.text(&run(
        labels.month_title(coverage.year, coverage.month),
        Point::new(geometry.size().width / 2.0, header / 4.0),
        header / 4.0,
        style.month,
        TextAnchor::Middle,
        Baseline::Middle,
    ));

    for (i, weekday) in WEEK.into_iter().enumerate() {
        painter.text(&run(
            labels.weekday_abbrev(weekday).into_owned(),
            Point::new(column * i as f64 + column / 10.0, header - header / 10.0),
            header / 4.0,
            style.weekday,
            TextAnchor::Start,
            Baseline::Alphabetic,
        ));
    }
}

fn paint_cell(
    painter: &mut impl Painter,
    cell: &DayCell,
    rect: Rect,
    style: &StyleConfig,
    options: WidgetOptions,
) {
    let width = rect.width();
    let height = rect.height();
    let half_line = GRID_LINE_WIDTH / 2.0;

    let fill = if cell.is_weekend() {
        style.weekend
    } else {
        style.cell_background
    };
    painter.fill_rect(rect.inflate(-1.0, -1.0), fill);

    outline(painter, rect, style.grid, GRID_LINE_WIDTH, options);

    if cell.is_selected() {
        if options.rounded_cells {
            let inner = Rect::new(rect.x0 + half_line, rect.y0 + half_line, rect.x1, rect.y1);
            painter.fill_rounded_rect(RoundedRect::from_rect(inner, CORNER_RADIUS), style.selection);
        } else {
            painter.fill_rect(rect.inflate(-half_line, -half_line), style.selection);
        }
    }

    if cell.is_marked() {
        if !options.small_marker {
            let bar = Rect::new(
                rect.x0 + half_line,
                rect.y1 - height / 6.0,
                rect.x1 - half_line,
                rect.y1 - height / 8.0,
            );
            painter.fill_rect(bar, style.marker);
        } else if options.rounded_cells {
            let center = Point::new(rect.x1 - width / 6.0, rect.y1 - width / 6.0);
            painter.fill_circle(Circle::new(center, width / 12.0), style.marker);
        } else {
            let corner = Rect::new(rect.x1 - width / 8.0, rect.y1 - height / 6.0, rect.x1, rect.y1);
            painter.fill_rect(corner, style.marker);
        }
    }

    let text_size = height / 3.0;
    let color = if cell.is_holiday() {
        style.holiday
    } else {
        style.cell_text
    };
    painter.text(&run(
        cell.date().day().to_string(),
        Point::new(rect.x0 + width / 6.0, rect.y0 + text_size),
        text_size,
        color,
        TextAnchor::Start,
        Baseline::Alphabetic,
    ));
}

fn outline(
    painter: &mut impl Painter,
    rect: Rect,
    color: Color,
    width: f64,
    options: WidgetOptions,
) {
    if options.rounded_cells {
        painter.stroke_rounded_rect(RoundedRect::from_rect(rect, CORNER_RADIUS), color, width);
    } else {
        painter.stroke_rect(rect, color, width);
    }
}

fn run(
    text: String,
    origin: Point,
    size: f64,
    color: Color,
    anchor: TextAnchor,
    baseline: Baseline,
) -> TextRun {
    TextRun {
        text,
        origin,
        size,
        color,
        anchor,
        baseline,
    }
}
