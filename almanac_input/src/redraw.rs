// Copyright 2025 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Receives redraw requests after pointer input is handled.
pub trait RedrawHost {
    /// Asks the host to repaint the widget.
    fn request_redraw(&mut self);
}

/// A host that redraws reactively and ignores requests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoRedraw;

impl RedrawHost for NoRedraw {
    fn request_redraw(&mut self) {}
}

impl<R: RedrawHost + ?Sized> RedrawHost for &mut R {
    fn request_redraw(&mut self) {
        (**self).request_redraw();
    }
}
