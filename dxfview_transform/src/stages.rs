// Copyright 2025 the dxfview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The four stages of the world → screen mapping and their inverses.
//!
//! World → screen applies, in order:
//!
//! 1. [`ScaleStage`]: world units to pixels, Y still pointing up.
//! 2. [`PanStage`]: add the pan offset, still Y up, relative to the
//!    bottom-left corner of the drawing area.
//! 3. [`FlipStage`]: mirror Y around the drawing-area height so Y points down.
//! 4. [`MarginInset`]: shift by the left/top margins into viewport pixels.
//!
//! Screen → world applies each stage's inverse in the reverse order. The two
//! directions share the same stage values, which is what makes them exact
//! algebraic inverses of each other.

use kurbo::{Affine, Point, Vec2};

use crate::viewport::{Margins, ViewTransform, Viewport};

/// One invertible step of the coordinate pipeline.
pub trait Stage {
    /// Applies the stage in the world → screen direction.
    fn forward(&self, pt: Point) -> Point;

    /// Undoes [`Stage::forward`].
    fn inverse(&self, pt: Point) -> Point;

    /// The forward step as an affine map.
    fn to_affine(&self) -> Affine;

    /// The inverse step as an affine map.
    fn inverse_affine(&self) -> Affine;
}

/// Uniform zoom: multiplies both axes by `scale`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleStage {
    /// Pixels per world unit. Must be positive for the inverse to exist.
    pub scale: f64,
}

impl Stage for ScaleStage {
    fn forward(&self, pt: Point) -> Point {
        Point::new(pt.x * self.scale, pt.y * self.scale)
    }

    fn inverse(&self, pt: Point) -> Point {
        Point::new(pt.x / self.scale, pt.y / self.scale)
    }

    fn to_affine(&self) -> Affine {
        Affine::scale(self.scale)
    }

    fn inverse_affine(&self) -> Affine {
        Affine::scale(self.scale.recip())
    }
}

/// Pan: translates by an offset in Y-up pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanStage {
    /// Pan offset in pixels.
    pub offset: Vec2,
}

impl Stage for PanStage {
    fn forward(&self, pt: Point) -> Point {
        pt + self.offset
    }

    fn inverse(&self, pt: Point) -> Point {
        pt - self.offset
    }

    fn to_affine(&self) -> Affine {
        Affine::translate(self.offset)
    }

    fn inverse_affine(&self) -> Affine {
        Affine::translate(-self.offset)
    }
}

/// Y flip: `y' = axis - y`. Its own inverse.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlipStage {
    /// Height of the drawing area in pixels.
    pub axis: f64,
}

impl Stage for FlipStage {
    fn forward(&self, pt: Point) -> Point {
        Point::new(pt.x, self.axis - pt.y)
    }

    fn inverse(&self, pt: Point) -> Point {
        self.forward(pt)
    }

    fn to_affine(&self) -> Affine {
        Affine::new([1.0, 0.0, 0.0, -1.0, 0.0, self.axis])
    }

    fn inverse_affine(&self) -> Affine {
        self.to_affine()
    }
}

/// Margin inset: moves the drawing-area origin to its place in the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarginInset {
    /// Left margin in pixels.
    pub left: f64,
    /// Top margin in pixels.
    pub top: f64,
}

impl Stage for MarginInset {
    fn forward(&self, pt: Point) -> Point {
        Point::new(pt.x + self.left, pt.y + self.top)
    }

    fn inverse(&self, pt: Point) -> Point {
        Point::new(pt.x - self.left, pt.y - self.top)
    }

    fn to_affine(&self) -> Affine {
        Affine::translate((self.left, self.top))
    }

    fn inverse_affine(&self) -> Affine {
        Affine::translate((-self.left, -self.top))
    }
}

/// The full stage sequence for one `(transform, viewport, margins)` triple.
///
/// Built fresh for every call; nothing carries over between calls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pipeline {
    /// Stage 1.
    pub scale: ScaleStage,
    /// Stage 2.
    pub pan: PanStage,
    /// Stage 3.
    pub flip: FlipStage,
    /// Stage 4.
    pub inset: MarginInset,
}

impl Pipeline {
    /// Derives the stages from the caller's inputs.
    ///
    /// Inputs are assumed to be validated already; see
    /// [`crate::CoordinateTransforms`] for the checked entry points.
    #[must_use]
    pub fn new(transform: &ViewTransform, viewport: &Viewport, margins: &Margins) -> Self {
        Self {
            scale: ScaleStage {
                scale: transform.scale,
            },
            pan: PanStage {
                offset: Vec2::new(transform.offset_x, transform.offset_y),
            },
            flip: FlipStage {
                axis: margins.drawing_height(viewport),
            },
            inset: MarginInset {
                left: margins.left,
                top: margins.top,
            },
        }
    }

    /// World → screen: scale, pan, flip, inset.
    #[must_use]
    pub fn forward(&self, world: Point) -> Point {
        let pt = self.scale.forward(world);
        let pt = self.pan.forward(pt);
        let pt = self.flip.forward(pt);
        self.inset.forward(pt)
    }

    /// Screen → world: inset⁻¹, flip⁻¹, pan⁻¹, scale⁻¹.
    #[must_use]
    pub fn inverse(&self, screen: Point) -> Point {
        let pt = self.inset.inverse(screen);
        let pt = self.flip.inverse(pt);
        let pt = self.pan.inverse(pt);
        self.scale.inverse(pt)
    }

    /// The composed world → screen map.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        self.inset.to_affine()
            * self.flip.to_affine()
            * self.pan.to_affine()
            * self.scale.to_affine()
    }

    /// The composed screen → world map, built from the stage inverses.
    #[must_use]
    pub fn inverse_affine(&self) -> Affine {
        self.scale.inverse_affine()
            * self.pan.inverse_affine()
            * self.flip.inverse_affine()
            * self.inset.inverse_affine()
    }
}
