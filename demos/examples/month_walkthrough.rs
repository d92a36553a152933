// Copyright 2025 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drives a calendar widget through a few clicks and prints each month.
//!
//! The widget is laid out at 700x600, so every cell is 100 units square and
//! the header band is 100 units tall. Clicks go through the same hit testing
//! a real host would use; the month is printed from the model's cells and
//! the painter only counts what it is asked to draw.
//!
//! Run:
//! - `cargo run -p almanac_demos --example month_walkthrough`
//! - `RUST_LOG=debug cargo run -p almanac_demos --example month_walkthrough`

use almanac_widget::{
    CalendarWidget, Color, DayCell, EnglishLabels, FixedClock, ListenerError, Painter, SystemClock,
    WidgetOptions,
    almanac_paint::{TextRun, Weekday},
};
use almanac_widget::{Clock, Day};
use kurbo::{Circle, Rect, RoundedRect, Size};
use tracing_subscriber::EnvFilter;

/// Tallies paint calls instead of drawing.
#[derive(Debug, Default)]
struct CountingPainter {
    shapes: usize,
    texts: usize,
}

impl Painter for CountingPainter {
    fn fill_rect(&mut self, _: Rect, _: Color) {
        self.shapes += 1;
    }
    fn stroke_rect(&mut self, _: Rect, _: Color, _: f64) {
        self.shapes += 1;
    }
    fn fill_rounded_rect(&mut self, _: RoundedRect, _: Color) {
        self.shapes += 1;
    }
    fn stroke_rounded_rect(&mut self, _: RoundedRect, _: Color, _: f64) {
        self.shapes += 1;
    }
    fn fill_circle(&mut self, _: Circle, _: Color) {
        self.shapes += 1;
    }
    fn text(&mut self, _: &TextRun) {
        self.texts += 1;
    }
}

fn print_month(title: &str, cells: &[DayCell], weeks: usize) {
    println!("\n{title}");
    let header: Vec<String> = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ]
    .iter()
    .map(|w| format!("{:>4}", w.to_string()))
    .collect();
    println!("{}", header.concat());

    for row in 0..weeks {
        let mut line = String::new();
        for column in 0..7 {
            let slot = cells.iter().find(|c| c.row() == row && c.column() == column);
            let text = match slot {
                Some(cell) => {
                    let tag = if cell.is_selected() {
                        '*'
                    } else if cell.is_marked() {
                        '+'
                    } else if cell.is_holiday() {
                        '!'
                    } else {
                        ' '
                    };
                    format!("{:>3}{tag}", cell.date().day())
                }
                None => "    ".to_string(),
            };
            line.push_str(&text);
        }
        println!("{line}");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let today = SystemClock.today();
    tracing::info!(%today, "system clock");

    let start = Day::from_ymd(2024, 12, 15)?;
    let mut widget = CalendarWidget::with_date(FixedClock(today), start).with_options(
        WidgetOptions {
            today_marker: true,
            ..WidgetOptions::default()
        },
    );
    widget.layout(Size::new(700.0, 600.0));
    widget.set_marked_dates(&[Day::from_ymd(2024, 12, 3)?, Day::from_ymd(2025, 1, 20)?]);
    widget.set_holidays(&[Day::from_ymd(2024, 12, 25)?, Day::from_ymd(2025, 1, 1)?]);

    widget.on_date_changed(|change| {
        tracing::info!(date = %change.date, previous = %change.previous, "date changed");
        Ok(())
    });
    widget.on_date_changed(|change| {
        if change.month_changed {
            Err(ListenerError::new("title bar not attached"))
        } else {
            Ok(())
        }
    });

    print_month("December 2024", widget.cells(), widget.weeks_in_month());

    // Next-month button in the header's right column.
    let hit = widget.on_pointer(650.0, 50.0)?;
    tracing::info!(?hit, selected = %widget.selected_date(), "clicked next");

    let mut painter = CountingPainter::default();
    widget.paint_into(&mut painter, &EnglishLabels);
    tracing::info!(shapes = painter.shapes, texts = painter.texts, "painted");

    // Centre of the Wednesday cell in the third row.
    let hit = widget.on_pointer(250.0, 350.0)?;
    tracing::info!(?hit, "clicked cell");

    print_month("January 2025", widget.cells(), widget.weeks_in_month());

    if let Err(err) = widget.set_date_ymd(2025, 2, 30) {
        tracing::warn!(%err, "rejected");
    }
    Ok(())
}
