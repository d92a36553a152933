// Copyright 2025 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paint operations, the [`Painter`] backend seam, and a recording list.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Circle, Point, Rect, RoundedRect};

use crate::Color;

/// Horizontal placement of text relative to its origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// The origin is the left end of the text.
    #[default]
    Start,
    /// The origin is the horizontal center of the text.
    Middle,
    /// The origin is the right end of the text.
    End,
}

/// Vertical placement of text relative to its origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Baseline {
    /// The origin lies on the alphabetic baseline.
    #[default]
    Alphabetic,
    /// The origin is the vertical center of the text.
    Middle,
}

/// A run of text to draw.
#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    /// The text.
    pub text: String,
    /// Anchor point in widget coordinates.
    pub origin: Point,
    /// Font size in widget units.
    pub size: f64,
    /// Fill color.
    pub color: Color,
    /// Horizontal placement.
    pub anchor: TextAnchor,
    /// Vertical placement.
    pub baseline: Baseline,
}

/// One drawing command.
#[derive(Clone, Debug, PartialEq)]
pub enum PaintOp {
    /// Fill a rectangle.
    FillRect(Rect, Color),
    /// Outline a rectangle with a stroke centered on its edges.
    StrokeRect(Rect, Color, f64),
    /// Fill a rounded rectangle.
    FillRoundedRect(RoundedRect, Color),
    /// Outline a rounded rectangle.
    StrokeRoundedRect(RoundedRect, Color, f64),
    /// Fill a circle.
    FillCircle(Circle, Color),
    /// Draw text.
    Text(TextRun),
}

/// Drawing backend.
///
/// Each method corresponds to one [`PaintOp`] variant.
pub trait Painter {
    /// See [`PaintOp::FillRect`].
    fn fill_rect(&mut self, rect: Rect, color: Color);
    /// See [`PaintOp::StrokeRect`].
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64);
    /// See [`PaintOp::FillRoundedRect`].
    fn fill_rounded_rect(&mut self, rect: RoundedRect, color: Color);
    /// See [`PaintOp::StrokeRoundedRect`].
    fn stroke_rounded_rect(&mut self, rect: RoundedRect, color: Color, width: f64);
    /// See [`PaintOp::FillCircle`].
    fn fill_circle(&mut self, circle: Circle, color: Color);
    /// See [`PaintOp::Text`].
    fn text(&mut self, run: &TextRun);
}

/// An ordered, replayable list of [`PaintOp`]s.
///
/// A `DisplayList` is itself a [`Painter`] that records what it is asked to
/// draw, so painting into one and replaying it later gives the same calls.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisplayList {
    ops: Vec<PaintOp>,
}

impl DisplayList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded operations in paint order.
    #[must_use]
    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }

    /// Number of recorded operations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Returns `true` if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Drops every recorded operation, keeping the allocation.
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Issues every recorded operation to `painter`, in order.
    pub fn replay(&self, painter: &mut impl Painter) {
        for op in &self.ops {
            match op {
                PaintOp::FillRect(rect, color) => painter.fill_rect(*rect, *color),
                PaintOp::StrokeRect(rect, color, width) => {
                    painter.stroke_rect(*rect, *color, *width);
                }
                PaintOp::FillRoundedRect(rect, color) => painter.fill_rounded_rect(*rect, *color),
                PaintOp::StrokeRoundedRect(rect, color, width) => {
                    painter.stroke_rounded_rect(*rect, *color, *width);
                }
                PaintOp::FillCircle(circle, color) => painter.fill_circle(*circle, *color),
                PaintOp::Text(run) => painter.text(run),
            }
        }
    }
}

impl Painter for DisplayList {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(PaintOp::FillRect(rect, color));
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64) {
        self.ops.push(PaintOp::StrokeRect(rect, color, width));
    }

    fn fill_rounded_rect(&mut self, rect: RoundedRect, color: Color) {
        self.ops.push(PaintOp::FillRoundedRect(rect, color));
    }

    fn stroke_rounded_rect(&mut self, rect: RoundedRect, color: Color, width: f64) {
        self.ops.push(PaintOp::StrokeRoundedRect(rect, color, width));
    }

    fn fill_circle(&mut self, circle: Circle, color: Color) {
        self.ops.push(PaintOp::FillCircle(circle, color));
    }

    fn text(&mut self, run: &TextRun) {
        self.ops.push(PaintOp::Text(run.clone()));
    }
}

impl<'a> IntoIterator for &'a DisplayList {
    type Item = &'a PaintOp;
    type IntoIter = core::slice::Iter<'a, PaintOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn replay_reproduces_the_recording() {
        let mut list = DisplayList::new();
        list.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);
        list.stroke_rounded_rect(
            RoundedRect::new(0.0, 0.0, 10.0, 10.0, 2.0),
            Color::BLACK,
            2.0,
        );
        list.fill_circle(Circle::new((5.0, 5.0), 1.0), Color::DEEP_PINK);
        list.text(&TextRun {
            text: "7".to_string(),
            origin: Point::new(1.0, 4.0),
            size: 3.0,
            color: Color::BLACK,
            anchor: TextAnchor::Start,
            baseline: Baseline::Alphabetic,
        });

        let mut copy = DisplayList::new();
        list.replay(&mut copy);
        assert_eq!(copy, list);
        assert_eq!(copy.len(), 4);

        copy.clear();
        assert!(copy.is_empty());
    }
}
