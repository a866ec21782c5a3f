// Copyright 2025 the dxfview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoom, pan-to and fit helpers that produce new [`ViewTransform`]s.
//!
//! Nothing here mutates view state. Each helper takes the current transform
//! and returns the next one, computed in closed form through
//! [`CoordinateTransforms`], so repeated zooming never feeds a previous
//! result's rounding back into the mapping itself.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round` and `powi`
use kurbo::{Point, Rect};

use crate::error::TransformError;
use crate::log;
use crate::modes::FitMode;
use crate::transforms::CoordinateTransforms;
use crate::viewport::{ViewTransform, Viewport, check_point};

/// Upper bound on zoom steps taken from a single wheel event.
const MAX_WHEEL_STEPS: f64 = 10.0;

/// Zoom limits and step sizes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomConfig {
    /// Smallest allowed scale (pixels per world unit).
    pub min_scale: f64,
    /// Largest allowed scale.
    pub max_scale: f64,
    /// Multiplier applied by one zoom-in step. Greater than one.
    pub zoom_in_factor: f64,
    /// Multiplier applied by one zoom-out step. Between zero and one.
    pub zoom_out_factor: f64,
    /// Wheel delta that counts as one zoom step.
    pub wheel_notch: f64,
}

impl Default for ZoomConfig {
    /// Scale limited to `[1e-3, 1e3]`, 20% per step, 100 delta units per notch.
    fn default() -> Self {
        Self {
            min_scale: 1e-3,
            max_scale: 1e3,
            zoom_in_factor: 1.2,
            zoom_out_factor: 1.0 / 1.2,
            wheel_notch: 100.0,
        }
    }
}

impl ZoomConfig {
    /// Checks limits and step factors for usable values.
    pub fn validate(&self) -> Result<(), TransformError> {
        let reason = if !(self.min_scale.is_finite() && self.min_scale > 0.0) {
            "min_scale must be finite and positive"
        } else if !(self.max_scale.is_finite() && self.max_scale >= self.min_scale) {
            "max_scale must be finite and at least min_scale"
        } else if !(self.zoom_in_factor.is_finite() && self.zoom_in_factor > 1.0) {
            "zoom_in_factor must be finite and greater than 1"
        } else if !(self.zoom_out_factor > 0.0 && self.zoom_out_factor < 1.0) {
            "zoom_out_factor must be between 0 and 1"
        } else if !(self.wheel_notch.is_finite() && self.wheel_notch > 0.0) {
            "wheel_notch must be finite and positive"
        } else {
            return Ok(());
        };
        log::debug!(reason, "rejecting zoom config");
        Err(TransformError::InvalidZoomConfig { reason })
    }

    /// Clamps `scale` into `[min_scale, max_scale]`.
    ///
    /// Never panics. On a config that fails [`ZoomConfig::validate`],
    /// `max_scale` wins over an inverted `min_scale`, and a NaN limit is
    /// ignored.
    #[must_use]
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        scale.max(self.min_scale).min(self.max_scale)
    }
}

/// Zoom operations bound to a margin layout and zoom limits.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Zoom {
    transforms: CoordinateTransforms,
    config: ZoomConfig,
    fit_mode: FitMode,
}

impl Zoom {
    /// Creates zoom helpers for the given transforms and limits.
    pub fn new(
        transforms: CoordinateTransforms,
        config: ZoomConfig,
    ) -> Result<Self, TransformError> {
        config.validate()?;
        Ok(Self {
            transforms,
            config,
            fit_mode: FitMode::default(),
        })
    }

    /// Sets how [`Zoom::fit_to_bounds`] positions the fitted bounds.
    #[must_use]
    pub fn with_fit_mode(mut self, mode: FitMode) -> Self {
        self.fit_mode = mode;
        self
    }

    /// Returns the zoom limits and step sizes.
    #[must_use]
    pub fn config(&self) -> ZoomConfig {
        self.config
    }

    /// Returns the current fit mode.
    #[must_use]
    pub fn fit_mode(&self) -> FitMode {
        self.fit_mode
    }

    /// Returns the coordinate transforms used for anchoring.
    #[must_use]
    pub fn transforms(&self) -> CoordinateTransforms {
        self.transforms
    }

    /// Multiplies the scale by `factor` while keeping the world point under
    /// `anchor` (a screen point) fixed on screen.
    ///
    /// The new scale is clamped into the configured limits, in which case the
    /// anchor still stays fixed but the zoom step is smaller than requested.
    pub fn zoom_at_screen_point(
        &self,
        transform: &ViewTransform,
        viewport: &Viewport,
        anchor: Point,
        factor: f64,
    ) -> Result<ViewTransform, TransformError> {
        if !(factor.is_finite() && factor > 0.0) {
            log::debug!(factor, "rejecting zoom factor");
            return Err(TransformError::InvalidZoomFactor { factor });
        }
        let world = self.transforms.screen_to_world(anchor, transform, viewport)?;
        let scale = self.config.clamp_scale(transform.scale * factor);
        let next = self.place(world, anchor, scale, viewport)?;
        log::trace!(
            from = transform.scale,
            to = next.scale,
            "zoomed about screen point"
        );
        Ok(next)
    }

    /// Zooms in by one step about the center of the drawing area.
    pub fn zoom_in(
        &self,
        transform: &ViewTransform,
        viewport: &Viewport,
    ) -> Result<ViewTransform, TransformError> {
        let center = self.transforms.drawing_area(viewport)?.center();
        self.zoom_at_screen_point(transform, viewport, center, self.config.zoom_in_factor)
    }

    /// Zooms out by one step about the center of the drawing area.
    pub fn zoom_out(
        &self,
        transform: &ViewTransform,
        viewport: &Viewport,
    ) -> Result<ViewTransform, TransformError> {
        let center = self.transforms.drawing_area(viewport)?.center();
        self.zoom_at_screen_point(transform, viewport, center, self.config.zoom_out_factor)
    }

    /// Converts a vertical wheel delta into a zoom factor.
    ///
    /// Negative deltas (wheel away from the user) zoom in. Every
    /// `wheel_notch` of delta is one step, with at least one step for any
    /// non-zero delta. A zero or non-finite delta yields `1.0`.
    #[must_use]
    pub fn wheel_factor(&self, delta_y: f64) -> f64 {
        if delta_y == 0.0 || !delta_y.is_finite() {
            return 1.0;
        }
        let steps = (delta_y.abs() / self.config.wheel_notch)
            .round()
            .clamp(1.0, MAX_WHEEL_STEPS);
        #[expect(
            clippy::cast_possible_truncation,
            reason = "steps is clamped to a small whole number"
        )]
        let steps = steps as i32;
        let base = if delta_y < 0.0 {
            self.config.zoom_in_factor
        } else {
            self.config.zoom_out_factor
        };
        base.powi(steps)
    }

    /// Applies a wheel event at the pointer position.
    pub fn zoom_wheel(
        &self,
        transform: &ViewTransform,
        viewport: &Viewport,
        pointer: Point,
        delta_y: f64,
    ) -> Result<ViewTransform, TransformError> {
        let factor = self.wheel_factor(delta_y);
        self.zoom_at_screen_point(transform, viewport, pointer, factor)
    }

    /// Returns the transform that shows `bounds` (world space) as large as
    /// possible inside the drawing area, keeping `padding` pixels free on
    /// every side.
    ///
    /// The bounds are positioned according to the [`FitMode`]. Bounds with
    /// swapped corners are normalized first, as the rect conversions do.
    pub fn fit_to_bounds(
        &self,
        bounds: Rect,
        viewport: &Viewport,
        padding: f64,
    ) -> Result<ViewTransform, TransformError> {
        let finite = bounds.origin().is_finite() && Point::new(bounds.x1, bounds.y1).is_finite();
        let bounds = bounds.abs();
        if !finite || bounds.width() <= 0.0 || bounds.height() <= 0.0 {
            log::debug!(?bounds, "rejecting bounds to fit");
            return Err(TransformError::DegenerateBounds);
        }
        if !(padding.is_finite() && padding >= 0.0) {
            log::debug!(padding, "rejecting fit padding");
            return Err(TransformError::InvalidPadding { padding });
        }
        let area = self.transforms.drawing_area(viewport)?;

        // Keep the available extent positive so tiny viewports still yield
        // a usable, if minimal, scale.
        let avail_w = (area.width() - 2.0 * padding).max(1.0);
        let avail_h = (area.height() - 2.0 * padding).max(1.0);
        let scale = self
            .config
            .clamp_scale((avail_w / bounds.width()).min(avail_h / bounds.height()));

        let next = match self.fit_mode {
            FitMode::Center => self.place(bounds.center(), area.center(), scale, viewport)?,
            FitMode::AlignMin => {
                let corner = Point::new(area.x0 + padding, area.y1 - padding);
                self.place(bounds.origin(), corner, scale, viewport)?
            }
        };
        log::trace!(scale = next.scale, "fitted bounds");
        Ok(next)
    }

    /// Returns scale `1.0` (clamped to limits) keeping the world point at the
    /// center of the drawing area where it is.
    pub fn reset_zoom(
        &self,
        transform: &ViewTransform,
        viewport: &Viewport,
    ) -> Result<ViewTransform, TransformError> {
        let center = self.transforms.drawing_area(viewport)?.center();
        let world = self.transforms.screen_to_world(center, transform, viewport)?;
        self.place(world, center, self.config.clamp_scale(1.0), viewport)
    }

    /// Pans so `world` appears at the center of the drawing area, keeping the scale.
    pub fn center_on(
        &self,
        transform: &ViewTransform,
        viewport: &Viewport,
        world: Point,
    ) -> Result<ViewTransform, TransformError> {
        check_point(world)?;
        transform.validate()?;
        let center = self.transforms.drawing_area(viewport)?.center();
        self.place(world, center, transform.scale, viewport)
    }

    /// Solves for the pan that maps `world` onto `screen` at `scale`.
    fn place(
        &self,
        world: Point,
        screen: Point,
        scale: f64,
        viewport: &Viewport,
    ) -> Result<ViewTransform, TransformError> {
        let unpanned = ViewTransform::new(scale, 0.0, 0.0);
        let at = self.transforms.world_to_screen(world, &unpanned, viewport)?;
        // Pan is added before the flip, so the vertical term changes sign.
        let next = ViewTransform::new(scale, screen.x - at.x, at.y - screen.y);
        next.validate()?;
        Ok(next)
    }
}
