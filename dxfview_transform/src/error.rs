// Copyright 2025 the dxfview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type shared by every fallible transform operation.

use thiserror::Error;

/// Why a transform call was rejected.
///
/// Transforms are deterministic, so none of these are retryable: the caller
/// has to fix the input or skip the point (for example, not paint it).
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum TransformError {
    /// The viewport has a zero width or height.
    #[error("viewport must be at least 1x1 pixels, got {width}x{height}")]
    InvalidViewport {
        /// Width in pixels.
        width: u32,
        /// Height in pixels.
        height: u32,
    },

    /// The zoom factor is zero or negative.
    #[error("scale must be greater than zero, got {scale}")]
    InvalidScale {
        /// The rejected scale.
        scale: f64,
    },

    /// A field of the view transform is NaN or infinite.
    #[error("view transform is not finite (scale {scale}, offset {offset_x}, {offset_y})")]
    NonFiniteTransform {
        /// Pixels per world unit.
        scale: f64,
        /// Horizontal pan in pixels.
        offset_x: f64,
        /// Vertical pan in pixels.
        offset_y: f64,
    },

    /// The input point has a NaN or infinite coordinate.
    #[error("point is not finite: ({x}, {y})")]
    NonFinitePoint {
        /// X coordinate.
        x: f64,
        /// Y coordinate.
        y: f64,
    },

    /// A margin is negative, NaN or infinite.
    #[error("margins must be finite and non-negative")]
    InvalidMargins,

    /// The device pixel ratio is not a finite positive number.
    #[error("device pixel ratio must be finite and positive, got {ratio}")]
    InvalidPixelRatio {
        /// The rejected ratio.
        ratio: f64,
    },

    /// A zoom step factor is zero, negative or not finite.
    #[error("zoom factor must be finite and positive, got {factor}")]
    InvalidZoomFactor {
        /// The rejected factor.
        factor: f64,
    },

    /// Zoom limits or step factors are unusable.
    #[error("zoom config is invalid: {reason}")]
    InvalidZoomConfig {
        /// Which constraint failed.
        reason: &'static str,
    },

    /// Padding around fitted bounds is negative, NaN or infinite.
    #[error("fit padding must be finite and non-negative, got {padding}")]
    InvalidPadding {
        /// The rejected padding in pixels.
        padding: f64,
    },

    /// A rectangle to fit has no area or is not finite.
    #[error("bounds to fit must be finite with a positive width and height")]
    DegenerateBounds,

    /// Finite inputs overflowed to a non-finite output.
    #[error("transform overflowed to a non-finite result")]
    NonFiniteResult,
}
