// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by compositing and rendering.

use thiserror::Error;

/// Failure to produce a spotlight mask.
///
/// Region selection and placement never fail; only drawing checks its inputs.
#[derive(Error, Clone, Copy, Debug, PartialEq)]
pub enum SpotlightError {
    /// A rectangular highlight with non-positive or non-finite size.
    #[error("invalid highlight rectangle: {width} x {height}")]
    InvalidGeometry {
        /// Width of the rejected rectangle.
        width: f64,
        /// Height of the rejected rectangle.
        height: f64,
    },
    /// A circular highlight with non-positive or non-finite radius.
    #[error("invalid highlight radius: {radius}")]
    InvalidRadius {
        /// The rejected radius.
        radius: f64,
    },
    /// Rendering was requested before any target was set.
    #[error("no highlight target has been set")]
    NoHighlightSet,
    /// Device scale that is not a finite, positive number.
    #[error("invalid device scale: {scale}")]
    InvalidScale {
        /// The rejected scale.
        scale: f64,
    },
}
