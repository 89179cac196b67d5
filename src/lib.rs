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

//! Incremental 3-D convex hulls over integer points, and planar Delaunay
//! triangulations obtained from the lower hull of the lifted points.
//!
//! ```
//! use lifthull::{build, geometry::Point2};
//!
//! let (dt, log) = build("0\t0\n10\t0\n0\t10\n3\t3\n".as_bytes()).unwrap();
//! assert_eq!(dt.triangles().len(), 3);
//! assert!(log.is_ok());
//! assert_eq!(dt.points[3], Point2::new(3, 3));
//! ```

use std::io::BufRead;

pub mod config;
pub mod error;
pub mod geometry;
pub mod hull;
pub mod io;
pub mod kernel;
pub mod mesh;
pub mod operations;

pub use config::{HullConfig, VolumeKernel};
pub use error::{BuildError, HullError, ReadError};
pub use hull::{ConvexHull, Insertion};
pub use io::Diagnostics;
pub use operations::triangulation::Delaunay;

/// Reads a point source and triangulates it with the default configuration.
pub fn build<R: BufRead>(source: R) -> Result<(Delaunay, Diagnostics), BuildError> {
    build_with_config(source, HullConfig::default())
}

/// Reads a point source, triangulates it and gathers the diagnostics log.
pub fn build_with_config<R: BufRead>(
    source: R,
    config: HullConfig,
) -> Result<(Delaunay, Diagnostics), BuildError> {
    let points = io::read_points(source)?;
    let dt = Delaunay::build_with_config(&points, config)?;
    let log = Diagnostics::collect(dt.hull());
    Ok((dt, log))
}
