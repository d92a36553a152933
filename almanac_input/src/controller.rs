// Copyright 2025 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`SelectionController`]: pointer input to model operations.

use almanac_hit::{Geometry, Hit, hit_test_grid};
use almanac_model::{CalendarError, CalendarModel, Clock};
use kurbo::Point;

use crate::{NoRedraw, PointerId, RedrawHost, TapResult, TapState};

/// Routes pointer positions to a [`CalendarModel`].
///
/// The controller holds the geometry installed by the host's last layout
/// pass and resolves points against it:
///
/// | hit               | action                    |
/// |-------------------|---------------------------|
/// | previous button   | `shift_month(-1)`         |
/// | next button       | `shift_month(1)`          |
/// | cell              | `select_date(cell date)`  |
/// | nothing           | no-op                     |
///
/// A redraw is requested after every handled event, including no-ops and
/// rejected operations.
#[derive(Debug)]
pub struct SelectionController<R = NoRedraw> {
    geometry: Option<Geometry>,
    taps: TapState<Hit>,
    redraw: R,
}

impl SelectionController {
    /// Creates a controller for a host that redraws reactively.
    #[must_use]
    pub fn new() -> Self {
        Self::with_redraw(NoRedraw)
    }
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> SelectionController<R> {
    /// Creates a controller that reports redraw requests to `redraw`.
    pub fn with_redraw(redraw: R) -> Self {
        Self {
            geometry: None,
            taps: TapState::new(),
            redraw,
        }
    }

    /// Installs the geometry of the latest layout pass.
    pub fn set_geometry(&mut self, geometry: Geometry) {
        self.geometry = Some(geometry);
    }

    /// The installed geometry, if any.
    #[must_use]
    pub fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    /// Tap recognition state used by the press/release entry points.
    pub fn taps_mut(&mut self) -> &mut TapState<Hit> {
        &mut self.taps
    }

    /// The redraw host.
    pub fn redraw_host(&self) -> &R {
        &self.redraw
    }

    /// Resolves `point` without acting on it.
    ///
    /// Yields [`Hit::Miss`] when no geometry has been installed yet.
    #[must_use]
    pub fn hit<C>(&self, model: &CalendarModel<C>, point: Point) -> Hit {
        match &self.geometry {
            Some(geometry) => hit_test_grid(point, geometry, model.grid()),
            None => {
                tracing::debug!("pointer event before first layout");
                Hit::Miss
            }
        }
    }

    /// Records a press at `point`.
    pub fn on_pointer_down<C>(
        &mut self,
        model: &CalendarModel<C>,
        pointer: Option<PointerId>,
        point: Point,
    ) {
        let hit = self.hit(model, point);
        self.taps.on_down(pointer, hit, point);
    }

    /// Abandons the press for `pointer`, for example when the host loses
    /// pointer capture.
    pub fn cancel(&mut self, pointer: Option<PointerId>) -> bool {
        self.taps.cancel(pointer)
    }
}

impl<R: RedrawHost> SelectionController<R> {
    /// Handles a click or tap at `point` and returns what it hit.
    ///
    /// Errors from the model are returned after the redraw request; the model
    /// keeps its previous state in that case.
    pub fn on_pointer<C: Clock>(
        &mut self,
        model: &mut CalendarModel<C>,
        point: Point,
    ) -> Result<Hit, CalendarError> {
        let hit = self.hit(model, point);
        let result = apply(model, hit);
        self.redraw.request_redraw();
        result.map(|()| hit)
    }

    /// Ends a press at `point`, acting on the press target if the pair is a
    /// tap. Returns the acted-on hit, or [`Hit::Miss`] if the tap was
    /// suppressed.
    pub fn on_pointer_up<C: Clock>(
        &mut self,
        model: &mut CalendarModel<C>,
        pointer: Option<PointerId>,
        point: Point,
    ) -> Result<Hit, CalendarError> {
        let current = self.hit(model, point);
        let hit = match self.taps.on_up(pointer, &current, point) {
            TapResult::Tap(hit) => hit,
            TapResult::Suppressed(_) => Hit::Miss,
        };
        let result = apply(model, hit);
        self.redraw.request_redraw();
        result.map(|()| hit)
    }

}

fn apply<C: Clock>(model: &mut CalendarModel<C>, hit: Hit) -> Result<(), CalendarError> {
    match hit {
        Hit::PrevButton => model.shift_month(-1).map(drop),
        Hit::NextButton => model.shift_month(1).map(drop),
        Hit::Cell(day) => {
            model.select_date(day);
            Ok(())
        }
        Hit::Miss => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use almanac_grid::Day;
    use almanac_model::FixedClock;
    use kurbo::Size;

    #[derive(Debug, Default)]
    struct CountingHost(usize);

    impl RedrawHost for CountingHost {
        fn request_redraw(&mut self) {
            self.0 += 1;
        }
    }

    fn day(y: i32, m: u32, d: u32) -> Day {
        Day::from_ymd(y, m, d).unwrap()
    }

    fn setup(
        y: i32,
        m: u32,
        d: u32,
    ) -> (CalendarModel<FixedClock>, SelectionController<CountingHost>) {
        let model = CalendarModel::new(FixedClock(day(y, m, d)));
        let mut controller = SelectionController::with_redraw(CountingHost::default());
        controller.set_geometry(Geometry::compute(Size::new(700.0, 600.0), model.grid()));
        (model, controller)
    }

    #[test]
    fn cell_hit_selects_date() {
        let (mut model, mut controller) = setup(2024, 2, 1);
        let hit = controller
            .on_pointer(&mut model, Point::new(450.0, 150.0))
            .unwrap();
        assert_eq!(hit, Hit::Cell(day(2024, 2, 2)));
        assert_eq!(model.selected_date(), day(2024, 2, 2));
        assert_eq!(controller.redraw_host().0, 1);
    }

    #[test]
    fn buttons_shift_month() {
        let (mut model, mut controller) = setup(2024, 12, 15);
        let hit = controller
            .on_pointer(&mut model, Point::new(650.0, 50.0))
            .unwrap();
        assert_eq!(hit, Hit::NextButton);
        assert_eq!(model.selected_date(), day(2025, 1, 1));

        controller.set_geometry(Geometry::compute(Size::new(700.0, 600.0), model.grid()));
        controller
            .on_pointer(&mut model, Point::new(50.0, 50.0))
            .unwrap();
        controller
            .on_pointer(&mut model, Point::new(50.0, 50.0))
            .unwrap();
        assert_eq!(model.selected_date(), day(2024, 11, 1));
    }

    #[test]
    fn miss_is_a_no_op_but_still_redraws() {
        let (mut model, mut controller) = setup(2024, 2, 10);
        let hit = controller
            .on_pointer(&mut model, Point::new(400.0, 150.0))
            .unwrap();
        assert_eq!(hit, Hit::Miss);
        assert_eq!(model.selected_date(), day(2024, 2, 10));
        assert_eq!(controller.redraw_host().0, 1);
    }

    #[test]
    fn stale_geometry_ignores_cells() {
        let (mut model, mut controller) = setup(2024, 2, 10);
        model.shift_month(1).unwrap();
        // Still February's geometry.
        let hit = controller
            .on_pointer(&mut model, Point::new(450.0, 150.0))
            .unwrap();
        assert_eq!(hit, Hit::Miss);
        assert_eq!(model.selected_date(), day(2024, 3, 1));
    }

    #[test]
    fn no_geometry_misses() {
        let mut model = CalendarModel::new(FixedClock(day(2024, 2, 10)));
        let mut controller = SelectionController::new();
        assert_eq!(
            controller.on_pointer(&mut model, Point::new(50.0, 50.0)),
            Ok(Hit::Miss)
        );
    }

    #[test]
    fn press_release_on_same_cell_selects() {
        let (mut model, mut controller) = setup(2024, 2, 10);
        controller.on_pointer_down(&model, None, Point::new(310.0, 150.0));
        let hit = controller
            .on_pointer_up(&mut model, None, Point::new(390.0, 190.0))
            .unwrap();
        assert_eq!(hit, Hit::Cell(day(2024, 2, 1)));
        assert_eq!(model.selected_date(), day(2024, 2, 1));
    }

    #[test]
    fn release_just_across_boundary_taps_pressed_cell() {
        let (mut model, mut controller) = setup(2024, 2, 10);
        controller.on_pointer_down(&model, None, Point::new(398.0, 150.0));
        let hit = controller
            .on_pointer_up(&mut model, None, Point::new(402.0, 150.0))
            .unwrap();
        assert_eq!(hit, Hit::Cell(day(2024, 2, 1)));
    }

    #[test]
    fn drag_to_another_cell_is_suppressed() {
        let (mut model, mut controller) = setup(2024, 2, 10);
        controller.on_pointer_down(&model, None, Point::new(350.0, 150.0));
        let hit = controller
            .on_pointer_up(&mut model, None, Point::new(550.0, 350.0))
            .unwrap();
        assert_eq!(hit, Hit::Miss);
        assert_eq!(model.selected_date(), day(2024, 2, 10));
        assert_eq!(controller.redraw_host().0, 1);
    }

    #[test]
    fn cancelled_press_does_not_tap() {
        let (mut model, mut controller) = setup(2024, 2, 10);
        controller.on_pointer_down(&model, None, Point::new(350.0, 150.0));
        assert!(controller.cancel(None));
        let hit = controller
            .on_pointer_up(&mut model, None, Point::new(350.0, 150.0))
            .unwrap();
        assert_eq!(hit, Hit::Miss);
    }

    #[test]
    fn accessors_need_no_redraw_host() {
        let model = CalendarModel::new(FixedClock(day(2024, 2, 10)));
        // `()` does not implement `RedrawHost`.
        let mut controller = SelectionController::with_redraw(());
        assert!(controller.geometry().is_none());
        controller.set_geometry(Geometry::compute(Size::new(700.0, 600.0), model.grid()));
        assert_eq!(
            controller.hit(&model, Point::new(450.0, 150.0)),
            Hit::Cell(day(2024, 2, 2))
        );
        controller.on_pointer_down(&model, None, Point::new(450.0, 150.0));
        assert!(controller.cancel(None));
        assert_eq!(controller.redraw_host(), &());
    }
}
