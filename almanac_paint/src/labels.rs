// Copyright 2025 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::borrow::Cow;
use alloc::format;
use alloc::string::String;

use chrono::{Month, Weekday};

/// Text shown in the header, supplied by the host's locale service.
pub trait Labels {
    /// Full name of `month` (1-based).
    fn month_name(&self, month: u32) -> Cow<'_, str>;

    /// Abbreviated weekday name for the column header.
    fn weekday_abbrev(&self, weekday: Weekday) -> Cow<'_, str>;

    /// Title of the header, `"<month name> <year>"` unless overridden.
    fn month_title(&self, year: i32, month: u32) -> String {
        format!("{} {year:04}", self.month_name(month))
    }
}

/// English month names and three-letter weekday abbreviations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EnglishLabels;

impl Labels for EnglishLabels {
    fn month_name(&self, month: u32) -> Cow<'_, str> {
        u8::try_from(month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .map_or(Cow::Borrowed(""), |m| Cow::Borrowed(m.name()))
    }

    fn weekday_abbrev(&self, weekday: Weekday) -> Cow<'_, str> {
        Cow::Owned(format!("{weekday}"))
    }
}
