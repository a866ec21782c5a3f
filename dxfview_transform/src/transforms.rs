// Copyright 2025 the dxfview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect};

use crate::error::TransformError;
use crate::stages::Pipeline;
use crate::viewport::{Margins, ViewTransform, Viewport, check_point, check_result};

/// Screen ↔ world conversion for a drawing viewed through a canvas.
///
/// `CoordinateTransforms` holds only configuration (the ruler [`Margins`]).
/// Every method takes the view state explicitly and computes its result in
/// closed form from those arguments, so calls never depend on each other and
/// the value can be shared freely across threads.
///
/// Screen space has its origin at the top-left of the viewport with Y
/// pointing down. World space has Y pointing up. See [`crate::stages`] for the
/// exact order in which scale, pan, flip and margins are applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateTransforms {
    margins: Margins,
}

impl CoordinateTransforms {
    /// Creates transforms that reserve the given margins.
    #[must_use]
    pub const fn new(margins: Margins) -> Self {
        Self { margins }
    }

    /// Returns the configured margins.
    #[must_use]
    pub fn margins(&self) -> Margins {
        self.margins
    }

    /// Converts a world-space point into screen pixels.
    ///
    /// The result may lie outside the viewport; off-screen geometry is valid.
    pub fn world_to_screen(
        &self,
        world: Point,
        transform: &ViewTransform,
        viewport: &Viewport,
    ) -> Result<Point, TransformError> {
        check_point(world)?;
        let pipeline = self.pipeline(transform, viewport)?;
        check_result(pipeline.forward(world))
    }

    /// Converts a screen-space point into world coordinates.
    ///
    /// This is the exact inverse of [`CoordinateTransforms::world_to_screen`]
    /// for the same transform and viewport.
    pub fn screen_to_world(
        &self,
        screen: Point,
        transform: &ViewTransform,
        viewport: &Viewport,
    ) -> Result<Point, TransformError> {
        check_point(screen)?;
        let pipeline = self.pipeline(transform, viewport)?;
        check_result(pipeline.inverse(screen))
    }

    /// Converts a world-space rectangle into screen pixels.
    ///
    /// The Y flip swaps the vertical edges; the returned rect is normalized
    /// so that `y0 <= y1`.
    pub fn world_to_screen_rect(
        &self,
        rect: Rect,
        transform: &ViewTransform,
        viewport: &Viewport,
    ) -> Result<Rect, TransformError> {
        check_point(rect.origin())?;
        check_point(Point::new(rect.x1, rect.y1))?;
        let pipeline = self.pipeline(transform, viewport)?;
        let p0 = check_result(pipeline.forward(Point::new(rect.x0, rect.y0)))?;
        let p1 = check_result(pipeline.forward(Point::new(rect.x1, rect.y1)))?;
        // Axis-aligned and uniformly scaled, so two opposite corners suffice.
        Ok(Rect::from_points(p0, p1))
    }

    /// Converts a screen-space rectangle into world coordinates.
    ///
    /// The returned rect is normalized so that `y0 <= y1`.
    pub fn screen_to_world_rect(
        &self,
        rect: Rect,
        transform: &ViewTransform,
        viewport: &Viewport,
    ) -> Result<Rect, TransformError> {
        check_point(rect.origin())?;
        check_point(Point::new(rect.x1, rect.y1))?;
        let pipeline = self.pipeline(transform, viewport)?;
        let p0 = check_result(pipeline.inverse(Point::new(rect.x0, rect.y0)))?;
        let p1 = check_result(pipeline.inverse(Point::new(rect.x1, rect.y1)))?;
        Ok(Rect::from_points(p0, p1))
    }

    /// Returns the world → screen mapping as a single affine.
    ///
    /// Useful for handing a whole path to a renderer at once. The affine is
    /// derived from the same stages as [`CoordinateTransforms::world_to_screen`].
    pub fn world_to_screen_affine(
        &self,
        transform: &ViewTransform,
        viewport: &Viewport,
    ) -> Result<Affine, TransformError> {
        Ok(self.pipeline(transform, viewport)?.to_affine())
    }

    /// Returns the screen → world mapping as a single affine.
    pub fn screen_to_world_affine(
        &self,
        transform: &ViewTransform,
        viewport: &Viewport,
    ) -> Result<Affine, TransformError> {
        Ok(self.pipeline(transform, viewport)?.inverse_affine())
    }

    /// Returns the drawing area: the viewport minus the margins, in screen pixels.
    pub fn drawing_area(&self, viewport: &Viewport) -> Result<Rect, TransformError> {
        viewport.validate()?;
        self.margins.validate()?;
        Ok(self.margins.drawing_area(viewport))
    }

    /// Returns the world-space rectangle visible through the drawing area.
    ///
    /// Intended for culling entities before painting.
    pub fn visible_world_rect(
        &self,
        transform: &ViewTransform,
        viewport: &Viewport,
    ) -> Result<Rect, TransformError> {
        let area = self.drawing_area(viewport)?;
        self.screen_to_world_rect(area, transform, viewport)
    }

    /// Returns how many world units one screen pixel covers.
    ///
    /// This is `1 / scale` for the uniform zoom model used here; it can be
    /// used to size hit-test tolerances or stroke widths in world units.
    pub fn world_units_per_pixel(&self, transform: &ViewTransform) -> Result<f64, TransformError> {
        transform.validate()?;
        Ok(transform.scale.recip())
    }

    fn pipeline(
        &self,
        transform: &ViewTransform,
        viewport: &Viewport,
    ) -> Result<Pipeline, TransformError> {
        transform.validate()?;
        viewport.validate()?;
        self.margins.validate()?;
        Ok(Pipeline::new(transform, viewport, &self.margins))
    }
}

impl Default for CoordinateTransforms {
    /// Transforms using [`crate::DEFAULT_MARGINS`].
    fn default() -> Self {
        Self::new(Margins::default())
    }
}

/// Converts a world-space point into screen pixels using the default margins.
///
/// Shorthand for [`CoordinateTransforms::world_to_screen`] on
/// [`CoordinateTransforms::default`].
pub fn world_to_screen(
    world: Point,
    transform: &ViewTransform,
    viewport: &Viewport,
) -> Result<Point, TransformError> {
    CoordinateTransforms::default().world_to_screen(world, transform, viewport)
}

/// Converts a screen-space point into world coordinates using the default margins.
pub fn screen_to_world(
    screen: Point,
    transform: &ViewTransform,
    viewport: &Viewport,
) -> Result<Point, TransformError> {
    CoordinateTransforms::default().screen_to_world(screen, transform, viewport)
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use super::{CoordinateTransforms, screen_to_world, world_to_screen};
    use crate::TransformError;
    use crate::viewport::{Margins, ViewTransform, Viewport};

    fn assert_close(a: Point, b: Point, tol: f64) {
        assert!(
            (a.x - b.x).abs() <= tol && (a.y - b.y).abs() <= tol,
            "{a:?} != {b:?} (tol {tol})"
        );
    }

    #[test]
    fn basic_world_screen_roundtrip() {
        let vp = Viewport::new(800, 600);
        let tf = ViewTransform::new(2.0, 100.0, 50.0);

        let world = Point::new(10.0, -5.0);
        let screen = world_to_screen(world, &tf, &vp).unwrap();
        let back = screen_to_world(screen, &tf, &vp).unwrap();
        assert_close(back, world, 1e-9);
    }

    #[test]
    fn world_y_up_is_screen_y_down() {
        let vp = Viewport::new(800, 600);
        let tf = ViewTransform::IDENTITY;
        let low = world_to_screen(Point::new(0.0, 0.0), &tf, &vp).unwrap();
        let high = world_to_screen(Point::new(0.0, 10.0), &tf, &vp).unwrap();
        assert!(high.y < low.y, "higher world Y should be nearer the top");
        assert_eq!(low.y - high.y, 10.0);
    }

    #[test]
    fn origin_sits_at_drawing_area_bottom_left_without_pan() {
        let vp = Viewport::new(800, 600);
        let screen = world_to_screen(Point::ORIGIN, &ViewTransform::IDENTITY, &vp).unwrap();
        assert_eq!(screen, Point::new(30.0, 570.0));
    }

    #[test]
    fn zero_margins_map_origin_to_viewport_bottom_left() {
        let xf = CoordinateTransforms::new(Margins::ZERO);
        let vp = Viewport::new(640, 480);
        let screen = xf
            .world_to_screen(Point::ORIGIN, &ViewTransform::IDENTITY, &vp)
            .unwrap();
        assert_eq!(screen, Point::new(0.0, 480.0));
    }

    #[test]
    fn invalid_configuration_is_rejected() {
        let vp = Viewport::new(800, 600);
        let p = Point::new(1.0, 1.0);
        assert_eq!(
            world_to_screen(p, &ViewTransform::new(0.0, 0.0, 0.0), &vp),
            Err(TransformError::InvalidScale { scale: 0.0 })
        );
        assert!(matches!(
            screen_to_world(p, &ViewTransform::IDENTITY, &Viewport::new(0, 10)),
            Err(TransformError::InvalidViewport { .. })
        ));
        let bad = CoordinateTransforms::new(Margins::new(-5.0, 0.0, 0.0, 0.0));
        assert_eq!(
            bad.world_to_screen(p, &ViewTransform::IDENTITY, &vp),
            Err(TransformError::InvalidMargins)
        );
    }

    #[test]
    fn non_finite_points_are_rejected() {
        let vp = Viewport::new(800, 600);
        let tf = ViewTransform::IDENTITY;
        assert!(matches!(
            world_to_screen(Point::new(f64::NAN, 0.0), &tf, &vp),
            Err(TransformError::NonFinitePoint { .. })
        ));
        assert!(matches!(
            screen_to_world(Point::new(0.0, f64::NEG_INFINITY), &tf, &vp),
            Err(TransformError::NonFinitePoint { .. })
        ));
    }

    #[test]
    fn overflow_is_reported() {
        let vp = Viewport::new(800, 600);
        let tf = ViewTransform::new(1e300, 0.0, 0.0);
        assert_eq!(
            world_to_screen(Point::new(1e300, 0.0), &tf, &vp),
            Err(TransformError::NonFiniteResult)
        );
    }

    #[test]
    fn inverse_overflow_is_reported() {
        let vp = Viewport::new(800, 600);
        // Subnormal scale: dividing back into world units overflows.
        let tf = ViewTransform::new(1e-320, 0.0, 0.0);
        assert_eq!(
            screen_to_world(Point::new(400.0, 300.0), &tf, &vp),
            Err(TransformError::NonFiniteResult)
        );
        let xf = CoordinateTransforms::default();
        assert_eq!(
            xf.screen_to_world_rect(Rect::new(100.0, 100.0, 400.0, 300.0), &tf, &vp),
            Err(TransformError::NonFiniteResult)
        );
    }

    #[test]
    fn rects_are_normalized_after_flip() {
        let xf = CoordinateTransforms::default();
        let vp = Viewport::new(800, 600);
        let tf = ViewTransform::new(2.0, 0.0, 0.0);
        let screen = xf
            .world_to_screen_rect(Rect::new(0.0, 0.0, 10.0, 20.0), &tf, &vp)
            .unwrap();
        assert!(screen.y0 <= screen.y1);
        assert_eq!(screen, Rect::new(30.0, 530.0, 50.0, 570.0));

        let world = xf.screen_to_world_rect(screen, &tf, &vp).unwrap();
        assert!((world.x0 - 0.0).abs() < 1e-9 && (world.y1 - 20.0).abs() < 1e-9);
    }

    #[test]
    fn affines_match_point_functions() {
        let xf = CoordinateTransforms::default();
        let vp = Viewport::new(1920, 1080);
        let tf = ViewTransform::new(0.25, -300.0, 125.0);
        let to_screen = xf.world_to_screen_affine(&tf, &vp).unwrap();
        let to_world = xf.screen_to_world_affine(&tf, &vp).unwrap();

        let world = Point::new(1234.5, -678.25);
        let screen = xf.world_to_screen(world, &tf, &vp).unwrap();
        assert_close(to_screen * world, screen, 1e-9);
        assert_close(to_world * screen, world, 1e-9);
    }

    #[test]
    fn visible_world_rect_covers_drawing_area() {
        let xf = CoordinateTransforms::default();
        let vp = Viewport::new(800, 600);
        let tf = ViewTransform::new(2.0, 0.0, 0.0);
        let visible = xf.visible_world_rect(&tf, &vp).unwrap();
        assert_close(visible.origin(), Point::ORIGIN, 1e-9);
        assert!((visible.width() - 385.0).abs() < 1e-9);
        assert!((visible.height() - 285.0).abs() < 1e-9);
    }

    #[test]
    fn world_units_per_pixel_is_inverse_scale() {
        let xf = CoordinateTransforms::default();
        let wupp = xf
            .world_units_per_pixel(&ViewTransform::new(4.0, 0.0, 0.0))
            .unwrap();
        assert_eq!(wupp, 0.25);
    }
}
