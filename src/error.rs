// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::{fmt, io};

use thiserror::Error;

/// Coordinate axis named in range errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

/// Fatal conditions that abort a hull build. No partial result is produced.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HullError {
    /// Fewer input points than a closed hull needs.
    #[error("too few points: found {found}, at least {required} required")]
    TooFewPoints {
        /// Number of points supplied.
        found: usize,
        /// Configured minimum.
        required: usize,
    },
    /// A coordinate (or the lifted `x² + y²`) exceeds the safe bound.
    #[error(
        "coordinate exceeds safe bound: point {index} has {axis} = {value}, bound is {bound}"
    )]
    CoordinateOutOfRange {
        /// Position of the offending point in the input.
        index: usize,
        /// Offending axis; `Z` for the lifted component.
        axis: Axis,
        /// Offending value.
        value: i64,
        /// Configured bound.
        bound: i64,
    },
    /// Every consecutive triple of the vertex ring is collinear.
    #[error("all points collinear")]
    AllPointsCollinear,
    /// Every remaining point is coplanar with the first triangle.
    #[error("all points coplanar")]
    AllPointsCoplanar,
}

/// Failures while reading a point source.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("failed to read point source: {0}")]
    Io(#[from] io::Error),
    /// A line that is not two tab-separated integers.
    #[error("line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        message: String,
    },
}

/// Error returned by the end-to-end [`build`](crate::build) entry point.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Read(#[from] ReadError),
    #[error(transparent)]
    Hull(#[from] HullError),
}
