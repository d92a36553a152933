// Copyright 2025 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Colors, the color scheme, and renderer-only options.

/// An 8-bit sRGB color with straight alpha.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha, 255 is opaque.
    pub a: u8,
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba8(0, 0, 0, 0);
    /// `#000000`.
    pub const BLACK: Self = Self::rgb8(0, 0, 0);
    /// `#FFFFFF`.
    pub const WHITE: Self = Self::rgb8(255, 255, 255);
    /// `#808080`.
    pub const GRAY: Self = Self::rgb8(128, 128, 128);
    /// `#ADD8E6`.
    pub const LIGHT_BLUE: Self = Self::rgb8(173, 216, 230);
    /// `#FF1493`.
    pub const DEEP_PINK: Self = Self::rgb8(255, 20, 147);

    /// An opaque color.
    #[must_use]
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgba8(r, g, b, 255)
    }

    /// A color with alpha.
    #[must_use]
    pub const fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Returns `true` if painting with this color has no visible effect.
    #[must_use]
    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }
}

/// Color scheme of the widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StyleConfig {
    /// Fill behind everything.
    pub background: Color,
    /// Month and year title.
    pub month: Color,
    /// Weekday labels.
    pub weekday: Color,
    /// Selected cell fill.
    pub selection: Color,
    /// Marker of marked dates.
    pub marker: Color,
    /// Fill of weekday cells.
    pub cell_background: Color,
    /// Cell outlines.
    pub grid: Color,
    /// Day numbers.
    pub cell_text: Color,
    /// The `<` and `>` glyphs.
    pub button: Color,
    /// Day numbers of holidays.
    pub holiday: Color,
    /// Fill of Saturday and Sunday cells.
    pub weekend: Color,
    /// Outline of today's cell.
    pub today: Color,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            month: Color::BLACK,
            weekday: Color::BLACK,
            selection: Color::LIGHT_BLUE,
            marker: Color::DEEP_PINK,
            cell_background: Color::TRANSPARENT,
            grid: Color::BLACK,
            cell_text: Color::BLACK,
            button: Color::BLACK,
            holiday: Color::GRAY,
            weekend: Color::TRANSPARENT,
            today: Color::GRAY,
        }
    }
}

/// Presentation switches. They only change what is painted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WidgetOptions {
    /// Draw marks as a small corner square or dot instead of a bar across
    /// the cell.
    pub small_marker: bool,
    /// Round the corners of cell outlines and the selection fill.
    pub rounded_cells: bool,
    /// Outline today's cell.
    pub today_marker: bool,
}
