// Copyright 2025 the dxfview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! dxfview transform: screen ↔ world coordinates for 2D CAD drawing viewers.
//!
//! A drawing is shown on a canvas through a [`ViewTransform`] (zoom `scale`
//! in pixels per world unit, plus a pan offset in pixels) and a [`Viewport`]
//! (the canvas size). Screen space has Y pointing down from the top-left
//! corner; world space has Y pointing up, as in DXF drawings. A fixed
//! [`Margins`] inset reserves room for rulers.
//!
//! This crate provides:
//! - [`CoordinateTransforms`]: `world_to_screen` / `screen_to_world` for
//!   points, rects and whole-view affines.
//! - [`stages`]: the four named steps (scale, pan, flip, margin inset) the
//!   mapping is built from, each with its own inverse.
//! - [`Zoom`]: zoom about a pointer, wheel steps, fit-to-bounds and reset,
//!   returning new transforms.
//! - [`DevicePixelRatio`] and pointer helpers for going from page coordinates
//!   to canvas pixels.
//!
//! Every call is a pure function of its arguments. Invalid input (zero
//! viewport, non-positive scale, NaN or infinite coordinates) is reported as a
//! [`TransformError`] instead of leaking NaN into rendering.
//!
//! ## Example
//!
//! ```rust
//! use dxfview_transform::{Point2D, ViewTransform, Viewport, screen_to_world, world_to_screen};
//!
//! let viewport = Viewport::new(800, 600);
//! let transform = ViewTransform::new(2.0, 100.0, 50.0);
//!
//! let screen = world_to_screen(Point2D::new(0.0, 0.0), &transform, &viewport)?;
//! let world = screen_to_world(screen, &transform, &viewport)?;
//! assert!(world.x.abs() < 1e-9 && world.y.abs() < 1e-9);
//! # Ok::<(), dxfview_transform::TransformError>(())
//! ```
//!
//! ## Zooming at the pointer
//!
//! ```rust
//! use dxfview_transform::{Point2D, ViewTransform, Viewport, Zoom};
//!
//! let zoom = Zoom::default();
//! let viewport = Viewport::new(800, 600);
//! let transform = ViewTransform::default();
//! let pointer = Point2D::new(420.0, 260.0);
//!
//! let next = zoom.zoom_wheel(&transform, &viewport, pointer, -100.0)?;
//! assert!(next.scale > transform.scale);
//! # Ok::<(), dxfview_transform::TransformError>(())
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod dpi;
mod error;
mod log;
mod modes;
pub mod stages;
mod transforms;
mod viewport;
mod zoom;

pub use kurbo::Point as Point2D;

pub use dpi::{DevicePixelRatio, client_to_screen, screen_to_client};
pub use error::TransformError;
pub use modes::FitMode;
pub use transforms::{CoordinateTransforms, screen_to_world, world_to_screen};
pub use viewport::{DEFAULT_MARGINS, Margins, ViewTransform, Viewport};
pub use zoom::{Zoom, ZoomConfig};
