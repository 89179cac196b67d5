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

/// Largest coordinate magnitude accepted by default. Keeps every volume
/// determinant of lifted input well inside the exactly representable range
/// of an `f64`.
pub const SAFE_COORDINATE_BOUND: i64 = 1_000_000;

/// Largest bound any configuration may use. Differences of coordinates
/// within it, and products of two such differences, fit in an `i128`.
pub const MAX_COORDINATE_BOUND: i64 = 1 << 61;

/// Minimum number of input points.
pub const MIN_POINTS: usize = 3;

/// How the sign of a tetrahedron volume is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VolumeKernel {
    /// Evaluate the determinant in `f64` and round to the nearest integer.
    /// Exact only while every partial product stays below 2^53.
    Float,
    /// Evaluate in `f64` when the magnitude of the determinant terms proves
    /// the result exact, otherwise fall back to [`Exact`](Self::Exact).
    #[default]
    Filtered,
    /// Evaluate the determinant with arbitrary-precision integers.
    Exact,
}

/// Knobs for one hull build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HullConfig {
    pub coordinate_bound: i64,
    pub min_points: usize,
    pub kernel: VolumeKernel,
    /// Run the invariant checker after every insertion and log defects.
    pub check_each_insertion: bool,
}

impl Default for HullConfig {
    fn default() -> Self {
        Self {
            coordinate_bound: SAFE_COORDINATE_BOUND,
            min_points: MIN_POINTS,
            kernel: VolumeKernel::Filtered,
            check_each_insertion: false,
        }
    }
}

impl HullConfig {
    /// Sets the coordinate bound, clamped to [`MAX_COORDINATE_BOUND`].
    #[must_use]
    pub fn with_coordinate_bound(mut self, bound: i64) -> Self {
        self.coordinate_bound = bound.unsigned_abs().min(MAX_COORDINATE_BOUND as u64) as i64;
        self
    }

    /// The bound inputs are checked against. A field set past
    /// [`MAX_COORDINATE_BOUND`] is clamped here.
    pub fn bound(&self) -> i64 {
        self.coordinate_bound.unsigned_abs().min(MAX_COORDINATE_BOUND as u64) as i64
    }

    #[must_use]
    pub fn with_min_points(mut self, min_points: usize) -> Self {
        // a closed hull needs a triangle to start from
        self.min_points = min_points.max(MIN_POINTS);
        self
    }

    #[must_use]
    pub fn with_kernel(mut self, kernel: VolumeKernel) -> Self {
        self.kernel = kernel;
        self
    }

    #[must_use]
    pub fn with_checks(mut self, enabled: bool) -> Self {
        self.check_each_insertion = enabled;
        self
    }
}
