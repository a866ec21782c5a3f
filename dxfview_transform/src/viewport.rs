// Copyright 2025 the dxfview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plain value types passed to every transform call.

use kurbo::{Point, Rect};

use crate::error::TransformError;
use crate::log;

/// Visible canvas size in logical (CSS) pixels.
///
/// Both dimensions must be non-zero; see [`Viewport::validate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Viewport {
    /// Creates a viewport of the given size. No validation happens here.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Rejects zero-sized viewports.
    pub fn validate(&self) -> Result<(), TransformError> {
        if self.width == 0 || self.height == 0 {
            log::debug!(width = self.width, height = self.height, "rejecting viewport");
            return Err(TransformError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Zoom and pan state of a view.
///
/// `scale` is pixels per world unit. The offsets are pan distances in pixels,
/// measured with Y pointing up from the bottom-left corner of the drawing area,
/// so increasing `offset_y` moves the drawing toward the top of the screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    /// Pixels per world unit.
    pub scale: f64,
    /// Horizontal pan in pixels.
    pub offset_x: f64,
    /// Vertical pan in pixels (positive is up).
    pub offset_y: f64,
}

impl ViewTransform {
    /// Unit scale with no pan.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0);

    /// Creates a transform. No validation happens here.
    #[must_use]
    pub const fn new(scale: f64, offset_x: f64, offset_y: f64) -> Self {
        Self {
            scale,
            offset_x,
            offset_y,
        }
    }

    /// Rejects non-finite fields and non-positive scales.
    pub fn validate(&self) -> Result<(), TransformError> {
        if !(self.scale.is_finite() && self.offset_x.is_finite() && self.offset_y.is_finite()) {
            log::debug!(
                scale = self.scale,
                offset_x = self.offset_x,
                offset_y = self.offset_y,
                "rejecting non-finite view transform"
            );
            return Err(TransformError::NonFiniteTransform {
                scale: self.scale,
                offset_x: self.offset_x,
                offset_y: self.offset_y,
            });
        }
        if self.scale <= 0.0 {
            log::debug!(scale = self.scale, "rejecting non-positive scale");
            return Err(TransformError::InvalidScale { scale: self.scale });
        }
        Ok(())
    }

    /// Returns a copy panned by a screen-space delta.
    ///
    /// `dx`/`dy` are in screen pixels (Y down), as produced by a pointer drag, so
    /// dragging downward moves the drawing down.
    #[must_use]
    pub fn pan_by_screen(self, dx: f64, dy: f64) -> Self {
        Self {
            offset_x: self.offset_x + dx,
            offset_y: self.offset_y - dy,
            ..self
        }
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Pixel insets from the viewport edges reserved for rulers and other chrome.
///
/// The drawing area is the viewport rectangle minus these insets. World
/// coordinates are laid out from the bottom-left corner of the drawing area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
    /// Inset from the left edge (vertical ruler).
    pub left: f64,
    /// Inset from the top edge.
    pub top: f64,
    /// Inset from the right edge.
    pub right: f64,
    /// Inset from the bottom edge (horizontal ruler).
    pub bottom: f64,
}

/// Default margins: a 30 px ruler along the left and bottom edges.
pub const DEFAULT_MARGINS: Margins = Margins {
    left: 30.0,
    top: 0.0,
    right: 0.0,
    bottom: 30.0,
};

impl Margins {
    /// No insets; the drawing area is the whole viewport.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates margins. No validation happens here.
    #[must_use]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Rejects negative or non-finite insets.
    pub fn validate(&self) -> Result<(), TransformError> {
        let ok = [self.left, self.top, self.right, self.bottom]
            .iter()
            .all(|m| m.is_finite() && *m >= 0.0);
        if ok {
            Ok(())
        } else {
            log::debug!(margins = ?self, "rejecting margins");
            Err(TransformError::InvalidMargins)
        }
    }

    /// Height of the drawing area inside `viewport`, never negative.
    ///
    /// This is the axis the Y flip mirrors around. Margins larger than the
    /// viewport collapse it to zero instead of going negative.
    #[must_use]
    pub fn drawing_height(&self, viewport: &Viewport) -> f64 {
        (f64::from(viewport.height) - self.top - self.bottom).max(0.0)
    }

    /// Width of the drawing area inside `viewport`, never negative.
    #[must_use]
    pub fn drawing_width(&self, viewport: &Viewport) -> f64 {
        (f64::from(viewport.width) - self.left - self.right).max(0.0)
    }

    /// The drawing area as a screen-space rectangle.
    #[must_use]
    pub fn drawing_area(&self, viewport: &Viewport) -> Rect {
        let origin = Point::new(self.left, self.top);
        Rect::from_origin_size(
            origin,
            (self.drawing_width(viewport), self.drawing_height(viewport)),
        )
    }
}

impl Default for Margins {
    fn default() -> Self {
        DEFAULT_MARGINS
    }
}

/// Rejects points with a NaN or infinite coordinate.
pub(crate) fn check_point(pt: Point) -> Result<(), TransformError> {
    if pt.is_finite() {
        Ok(())
    } else {
        log::debug!(x = pt.x, y = pt.y, "rejecting non-finite point");
        Err(TransformError::NonFinitePoint { x: pt.x, y: pt.y })
    }
}

/// Rejects results that overflowed despite finite inputs.
pub(crate) fn check_result(pt: Point) -> Result<Point, TransformError> {
    if pt.is_finite() {
        Ok(pt)
    } else {
        log::debug!(x = pt.x, y = pt.y, "transform overflowed");
        Err(TransformError::NonFiniteResult)
    }
}
