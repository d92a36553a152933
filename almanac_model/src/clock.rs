// Copyright 2025 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sources of "today".

use core::fmt;

use almanac_grid::Day;

/// Provides the current date to a [`CalendarModel`](crate::CalendarModel).
pub trait Clock {
    /// Returns today's date.
    fn today(&self) -> Day;
}

/// A clock frozen on one day. Useful for tests and for hosts that drive the
/// date themselves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub Day);

impl Clock for FixedClock {
    fn today(&self) -> Day {
        self.0
    }
}

/// Adapts a closure into a [`Clock`].
#[derive(Clone, Copy)]
pub struct FnClock<F>(pub F);

impl<F: Fn() -> Day> Clock for FnClock<F> {
    fn today(&self) -> Day {
        (self.0)()
    }
}

impl<F> fmt::Debug for FnClock<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnClock").finish_non_exhaustive()
    }
}

/// Reads the local system date.
#[cfg(feature = "std")]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl Clock for SystemClock {
    fn today(&self) -> Day {
        Day::from(chrono::Local::now().date_naive())
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> Day {
        (**self).today()
    }
}
