// Copyright 2025 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap recognition from raw press/release pairs.
//!
//! Hosts that deliver separate pointer-down and pointer-up events feed them
//! through [`TapState`], which decides whether the pair amounts to a tap and
//! on which target.
//!
//! ## Rules
//!
//! 1. **Same target**: press and release resolve to the same target, so the
//!    tap fires on it regardless of movement.
//! 2. **Different targets within slop**: the release lies within the slop
//!    distance of the press, so the tap fires on the press target.
//! 3. **Different targets beyond slop**, or no slop configured: suppressed.
//! 4. **No active press** for the pointer: suppressed.
//!
//! Each pointer is tracked independently.
//!
//! ```
//! use almanac_input::{TapResult, TapState};
//! use kurbo::Point;
//!
//! let mut taps: TapState<u32> = TapState::new();
//! taps.on_down(None, 7, Point::new(10.0, 10.0));
//! // Jitter across a boundary still taps the original target.
//! assert_eq!(taps.on_up(None, &8, Point::new(12.0, 11.0)), TapResult::Tap(7));
//! ```

use alloc::collections::BTreeMap;
use core::num::NonZeroU64;

use kurbo::Point;

/// Pointer identifier for tracking concurrent presses.
pub type PointerId = NonZeroU64;

/// Pointer assumed when the host does not supply one.
pub const PRIMARY_POINTER: PointerId = NonZeroU64::MIN;

/// Default slop distance, in widget units.
pub const DEFAULT_SLOP: f64 = 5.0;

/// An active press.
#[derive(Clone, Debug, PartialEq)]
pub struct Press<K> {
    /// What the press resolved to.
    pub target: K,
    /// Pointer position at press time.
    pub position: Point,
}

/// Outcome of a release.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TapResult<K> {
    /// The pair is a tap on this target.
    Tap(K),
    /// Not a tap; carries the press target if there was an active press.
    Suppressed(Option<K>),
}

/// Press/release tracking per pointer.
#[derive(Clone, Debug)]
pub struct TapState<K> {
    presses: BTreeMap<PointerId, Press<K>>,
    /// Release distance from the press within which a target change is
    /// forgiven. `None` requires press and release to hit the same target.
    pub slop: Option<f64>,
}

impl<K: PartialEq + Clone> TapState<K> {
    /// Creates a tap state with [`DEFAULT_SLOP`].
    pub fn new() -> Self {
        Self::with_slop(Some(DEFAULT_SLOP))
    }

    /// Creates a tap state with a custom slop distance.
    pub fn with_slop(slop: Option<f64>) -> Self {
        Self {
            presses: BTreeMap::new(),
            slop,
        }
    }

    /// Records a press on `target`. A second press from the same pointer
    /// replaces the first.
    pub fn on_down(&mut self, pointer: Option<PointerId>, target: K, position: Point) {
        let pointer = pointer.unwrap_or(PRIMARY_POINTER);
        self.presses.insert(pointer, Press { target, position });
    }

    /// Ends the press for `pointer` and decides whether it was a tap.
    pub fn on_up(
        &mut self,
        pointer: Option<PointerId>,
        current_target: &K,
        position: Point,
    ) -> TapResult<K> {
        let pointer = pointer.unwrap_or(PRIMARY_POINTER);
        let Some(press) = self.presses.remove(&pointer) else {
            return TapResult::Suppressed(None);
        };

        if press.target == *current_target {
            return TapResult::Tap(press.target);
        }

        let within_slop = self
            .slop
            .is_some_and(|slop| press.position.distance(position) <= slop);
        if within_slop {
            TapResult::Tap(press.target)
        } else {
            TapResult::Suppressed(Some(press.target))
        }
    }

    /// Drops the press for `pointer`. Returns `false` if none was active.
    pub fn cancel(&mut self, pointer: Option<PointerId>) -> bool {
        let pointer = pointer.unwrap_or(PRIMARY_POINTER);
        self.presses.remove(&pointer).is_some()
    }

    /// Returns `true` if `pointer` has an active press.
    #[must_use]
    pub fn is_pressed(&self, pointer: Option<PointerId>) -> bool {
        self.presses.contains_key(&pointer.unwrap_or(PRIMARY_POINTER))
    }

    /// The active press for `pointer`.
    #[must_use]
    pub fn press(&self, pointer: PointerId) -> Option<&Press<K>> {
        self.presses.get(&pointer)
    }

    /// Drops every active press.
    pub fn clear(&mut self) {
        self.presses.clear();
    }
}

impl<K: PartialEq + Clone> Default for TapState<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_target_taps_regardless_of_distance() {
        let mut taps: TapState<u32> = TapState::new();
        taps.on_down(None, 42, Point::new(10.0, 20.0));
        assert_eq!(
            taps.on_up(None, &42, Point::new(300.0, 200.0)),
            TapResult::Tap(42)
        );
        assert!(!taps.is_pressed(None));
    }

    #[test]
    fn release_without_press_is_suppressed() {
        let mut taps: TapState<u32> = TapState::new();
        assert_eq!(
            taps.on_up(None, &42, Point::new(10.0, 20.0)),
            TapResult::Suppressed(None)
        );
    }

    #[test]
    fn slop_is_inclusive() {
        let mut taps: TapState<u32> = TapState::with_slop(Some(5.0));
        taps.on_down(None, 42, Point::new(10.0, 20.0));
        assert_eq!(
            taps.on_up(None, &99, Point::new(15.0, 20.0)),
            TapResult::Tap(42)
        );
    }

    #[test]
    fn beyond_slop_is_suppressed() {
        let mut taps: TapState<u32> = TapState::with_slop(Some(5.0));
        taps.on_down(None, 42, Point::new(10.0, 20.0));
        assert_eq!(
            taps.on_up(None, &99, Point::new(20.0, 30.0)),
            TapResult::Suppressed(Some(42))
        );
    }

    #[test]
    fn no_slop_requires_same_target() {
        let mut taps: TapState<u32> = TapState::with_slop(None);
        taps.on_down(None, 42, Point::new(10.0, 20.0));
        assert_eq!(
            taps.on_up(None, &99, Point::new(10.0, 20.0)),
            TapResult::Suppressed(Some(42))
        );
    }

    #[test]
    fn pointers_are_independent() {
        let mut taps: TapState<u32> = TapState::new();
        let second = NonZeroU64::new(2).unwrap();
        taps.on_down(None, 1, Point::new(0.0, 0.0));
        taps.on_down(Some(second), 2, Point::new(100.0, 0.0));

        assert!(taps.cancel(None));
        assert!(!taps.cancel(None));
        assert_eq!(taps.press(second).map(|p| p.target), Some(2));
        assert_eq!(
            taps.on_up(Some(second), &2, Point::new(100.0, 0.0)),
            TapResult::Tap(2)
        );
    }

    #[test]
    fn clear_drops_all_presses() {
        let mut taps: TapState<u32> = TapState::new();
        taps.on_down(None, 1, Point::ZERO);
        taps.clear();
        assert!(!taps.is_pressed(None));
    }
}
