// Copyright 2025 the dxfview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Logical ↔ device pixels, and page ↔ canvas pointer positions.
//!
//! [`crate::CoordinateTransforms`] works in logical (CSS) pixels. Canvas
//! backing stores are sized in device pixels, and pointer events arrive in
//! page ("client") coordinates; these helpers bridge the two.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`
use kurbo::Point;

use crate::error::TransformError;
use crate::log;
use crate::viewport::{Viewport, check_point, check_result};

/// Ratio of device pixels to logical pixels (`window.devicePixelRatio`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DevicePixelRatio(f64);

impl DevicePixelRatio {
    /// One device pixel per logical pixel.
    pub const ONE: Self = Self(1.0);

    /// Creates a ratio, rejecting zero, negative and non-finite values.
    pub fn new(ratio: f64) -> Result<Self, TransformError> {
        if ratio.is_finite() && ratio > 0.0 {
            Ok(Self(ratio))
        } else {
            log::debug!(ratio, "rejecting device pixel ratio");
            Err(TransformError::InvalidPixelRatio { ratio })
        }
    }

    /// Returns the raw ratio.
    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }

    /// Converts a logical-pixel point to device pixels.
    pub fn to_device(self, logical: Point) -> Result<Point, TransformError> {
        check_point(logical)?;
        check_result(Point::new(logical.x * self.0, logical.y * self.0))
    }

    /// Converts a device-pixel point to logical pixels.
    pub fn to_logical(self, device: Point) -> Result<Point, TransformError> {
        check_point(device)?;
        check_result(Point::new(device.x / self.0, device.y / self.0))
    }

    /// Size of the canvas backing store for a logical viewport.
    ///
    /// Dimensions are rounded to whole pixels and never drop below 1.
    pub fn device_viewport(self, viewport: &Viewport) -> Result<Viewport, TransformError> {
        viewport.validate()?;
        Ok(Viewport::new(
            self.scale_dimension(viewport.width),
            self.scale_dimension(viewport.height),
        ))
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "saturating cast; backing stores past u32::MAX are not representable"
    )]
    fn scale_dimension(self, logical: u32) -> u32 {
        (f64::from(logical) * self.0).round().max(1.0) as u32
    }
}

impl Default for DevicePixelRatio {
    fn default() -> Self {
        Self::ONE
    }
}

/// Converts a page-relative pointer position to canvas-local screen pixels.
///
/// `canvas_origin` is the canvas's top-left corner in the same page
/// coordinates (its bounding client rect).
pub fn client_to_screen(client: Point, canvas_origin: Point) -> Result<Point, TransformError> {
    check_point(client)?;
    check_point(canvas_origin)?;
    check_result(client - canvas_origin.to_vec2())
}

/// Converts a canvas-local screen point back to page coordinates.
pub fn screen_to_client(screen: Point, canvas_origin: Point) -> Result<Point, TransformError> {
    check_point(screen)?;
    check_point(canvas_origin)?;
    check_result(screen + canvas_origin.to_vec2())
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{DevicePixelRatio, client_to_screen, screen_to_client};
    use crate::TransformError;
    use crate::viewport::Viewport;

    #[test]
    fn ratio_must_be_positive_and_finite() {
        assert_eq!(DevicePixelRatio::new(2.0).unwrap().get(), 2.0);
        assert_eq!(DevicePixelRatio::default(), DevicePixelRatio::ONE);
        assert_eq!(
            DevicePixelRatio::new(0.0),
            Err(TransformError::InvalidPixelRatio { ratio: 0.0 })
        );
        assert!(DevicePixelRatio::new(f64::NAN).is_err());
        assert!(DevicePixelRatio::new(-1.5).is_err());
    }

    #[test]
    fn logical_device_roundtrip() {
        let dpr = DevicePixelRatio::new(1.25).unwrap();
        let logical = Point::new(333.0, 17.5);
        let device = dpr.to_device(logical).unwrap();
        assert_eq!(device, Point::new(416.25, 21.875));
        let back = dpr.to_logical(device).unwrap();
        assert!((back.x - logical.x).abs() < 1e-12 && (back.y - logical.y).abs() < 1e-12);
    }

    #[test]
    fn device_viewport_rounds_and_keeps_one_pixel() {
        let dpr = DevicePixelRatio::new(1.5).unwrap();
        assert_eq!(
            dpr.device_viewport(&Viewport::new(801, 601)).unwrap(),
            Viewport::new(1202, 902)
        );
        let tiny = DevicePixelRatio::new(0.25).unwrap();
        assert_eq!(
            tiny.device_viewport(&Viewport::new(1, 1)).unwrap(),
            Viewport::new(1, 1)
        );
        assert!(dpr.device_viewport(&Viewport::new(0, 1)).is_err());
    }

    #[test]
    fn client_screen_offsets() {
        let origin = Point::new(120.0, 64.0);
        let screen = client_to_screen(Point::new(500.0, 300.0), origin).unwrap();
        assert_eq!(screen, Point::new(380.0, 236.0));
        assert_eq!(
            screen_to_client(screen, origin).unwrap(),
            Point::new(500.0, 300.0)
        );
        assert!(client_to_screen(Point::new(f64::NAN, 0.0), origin).is_err());
    }
}
