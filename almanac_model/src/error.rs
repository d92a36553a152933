// Copyright 2025 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use almanac_grid::InvalidDate;

/// Rejected model operations. The model keeps its previous state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// A `(year, month, day)` triple that is not a calendar date.
    #[error(transparent)]
    InvalidDate(#[from] InvalidDate),
    /// A month shift whose target lies outside the representable date range.
    #[error("shifting {year:04}-{month:02} by {delta} months leaves the supported date range")]
    MonthOutOfRange {
        /// Year of the month being shifted from.
        year: i32,
        /// Month being shifted from, 1-based.
        month: u32,
        /// Requested shift in months.
        delta: i32,
    },
}
