// Copyright 2025 the dxfview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How fitted content should be positioned inside the drawing area.
///
/// This mode is consulted by [`crate::Zoom::fit_to_bounds`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FitMode {
    /// Center the fitted bounds within the drawing area.
    #[default]
    Center,
    /// Put the minimum corner of the bounds at the bottom-left of the drawing
    /// area (inside the padding), the usual origin corner for CAD drawings.
    AlignMin,
}
