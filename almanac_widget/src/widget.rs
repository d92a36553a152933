// Copyright 2025 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use almanac_grid::Day;
use almanac_hit::{Coverage, Geometry, Hit};
use almanac_input::{NoRedraw, PointerId, RedrawHost, SelectionController};
use almanac_model::{
    CalendarError, CalendarModel, Clock, DateChanged, DayCell, Delivery, ListenerError, ListenerId,
};
use almanac_paint::{DisplayList, Labels, Painter, StyleConfig, WidgetOptions, paint};
use kurbo::{Point, Size};

/// A month calendar: model, pointer routing, style, and painting.
///
/// Geometry is recomputed by [`layout`](Self::layout) and refreshed before
/// pointer handling and painting when the viewed month changed since the last
/// layout.
#[derive(Debug)]
pub struct CalendarWidget<C, R = NoRedraw> {
    model: CalendarModel<C>,
    controller: SelectionController<R>,
    size: Option<Size>,
    style: StyleConfig,
    options: WidgetOptions,
}

impl<C: Clock> CalendarWidget<C> {
    /// Creates a widget showing the clock's current month with today
    /// selected.
    pub fn new(clock: C) -> Self {
        Self::from_model(CalendarModel::new(clock), NoRedraw)
    }

    /// Creates a widget with `initial` selected.
    pub fn with_date(clock: C, initial: Day) -> Self {
        Self::from_model(CalendarModel::with_date(clock, initial), NoRedraw)
    }
}

impl<C: Clock, R: RedrawHost> CalendarWidget<C, R> {
    /// Wraps an existing model, reporting redraw requests to `redraw`.
    pub fn from_model(model: CalendarModel<C>, redraw: R) -> Self {
        Self {
            model,
            controller: SelectionController::with_redraw(redraw),
            size: None,
            style: StyleConfig::default(),
            options: WidgetOptions::default(),
        }
    }

    /// Sets the color scheme.
    #[must_use]
    pub fn with_style(mut self, style: StyleConfig) -> Self {
        self.style = style;
        self
    }

    /// Sets the presentation switches.
    #[must_use]
    pub fn with_options(mut self, options: WidgetOptions) -> Self {
        self.options = options;
        self
    }

    /// Selects `date`, or today when `None`.
    pub fn set_date(&mut self, date: Option<Day>) -> Delivery {
        self.model.set_date(date)
    }

    /// Validates and selects a `(year, month, day)` triple.
    pub fn set_date_ymd(
        &mut self,
        year: i32,
        month: u32,
        day: u32,
    ) -> Result<Delivery, CalendarError> {
        self.model.set_date_ymd(year, month, day)
    }

    /// Moves the selection to the first day of a month `delta` months away.
    pub fn shift_month(&mut self, delta: i32) -> Result<Delivery, CalendarError> {
        self.model.shift_month(delta)
    }

    /// Replaces the mark set.
    pub fn set_marked_dates(&mut self, dates: &[Day]) {
        self.model.set_marked_dates(dates);
    }

    /// Replaces the holiday set.
    pub fn set_holidays(&mut self, dates: &[Day]) {
        self.model.set_holidays(dates);
    }

    /// Subscribes a date-changed listener.
    pub fn on_date_changed<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&DateChanged) -> Result<(), ListenerError> + 'static,
    {
        self.model.subscribe(listener)
    }

    /// Removes a date-changed listener.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.model.unsubscribe(id)
    }

    /// Handles a click at `(x, y)` in widget coordinates.
    pub fn on_pointer(&mut self, x: f64, y: f64) -> Result<Hit, CalendarError> {
        self.refresh_geometry();
        self.controller.on_pointer(&mut self.model, Point::new(x, y))
    }

    /// Records a press at `(x, y)`.
    pub fn on_pointer_down(&mut self, pointer: Option<PointerId>, x: f64, y: f64) {
        self.refresh_geometry();
        self.controller
            .on_pointer_down(&self.model, pointer, Point::new(x, y));
    }

    /// Ends a press at `(x, y)`, acting on it if it was a tap.
    pub fn on_pointer_up(
        &mut self,
        pointer: Option<PointerId>,
        x: f64,
        y: f64,
    ) -> Result<Hit, CalendarError> {
        self.controller
            .on_pointer_up(&mut self.model, pointer, Point::new(x, y))
    }

    /// Abandons the press for `pointer`.
    pub fn cancel_pointer(&mut self, pointer: Option<PointerId>) -> bool {
        self.controller.cancel(pointer)
    }

    /// Computes and installs geometry for `size`.
    pub fn layout(&mut self, size: Size) {
        self.size = Some(size);
        self.controller
            .set_geometry(Geometry::compute(size, self.model.grid()));
    }

    /// Paints into a new display list.
    pub fn paint<L: Labels + ?Sized>(&mut self, labels: &L) -> DisplayList {
        let mut list = DisplayList::new();
        self.paint_into(&mut list, labels);
        list
    }

    /// Paints into `painter`, laying out again first if the viewed month
    /// changed. Paints nothing before the first [`layout`](Self::layout).
    pub fn paint_into<L: Labels + ?Sized>(&mut self, painter: &mut impl Painter, labels: &L) {
        self.refresh_geometry();
        let Some(geometry) = self.controller.geometry() else {
            tracing::debug!("paint before first layout");
            return;
        };
        paint(
            painter,
            geometry,
            self.model.cells(),
            &self.style,
            self.options,
            labels,
        );
    }

    fn refresh_geometry(&mut self) {
        let Some(size) = self.size else {
            return;
        };
        let current = Coverage::of(self.model.grid());
        let stale = self
            .controller
            .geometry()
            .is_none_or(|geometry| geometry.coverage() != current);
        if stale {
            self.layout(size);
        }
    }
}

impl<C, R> CalendarWidget<C, R> {
    /// Cells of the viewed month in calendar order.
    #[must_use]
    pub fn cells(&self) -> &[DayCell] {
        self.model.cells()
    }

    /// Number of week rows in the viewed month.
    #[must_use]
    pub fn weeks_in_month(&self) -> usize {
        self.model.weeks_in_month()
    }

    /// The selected date.
    #[must_use]
    pub fn selected_date(&self) -> Day {
        self.model.selected_date()
    }

    /// The underlying model.
    #[must_use]
    pub fn model(&self) -> &CalendarModel<C> {
        &self.model
    }

    /// The underlying model, for operations not mirrored here.
    pub fn model_mut(&mut self) -> &mut CalendarModel<C> {
        &mut self.model
    }

    /// The pointer controller.
    #[must_use]
    pub fn controller(&self) -> &SelectionController<R> {
        &self.controller
    }

    /// The installed geometry, if laid out.
    #[must_use]
    pub fn geometry(&self) -> Option<&Geometry> {
        self.controller.geometry()
    }

    /// The color scheme.
    #[must_use]
    pub const fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Replaces the color scheme.
    pub fn set_style(&mut self, style: StyleConfig) {
        self.style = style;
    }

    /// The presentation switches.
    #[must_use]
    pub const fn options(&self) -> WidgetOptions {
        self.options
    }

    /// Replaces the presentation switches.
    pub fn set_options(&mut self, options: WidgetOptions) {
        self.options = options;
    }
}
