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

use std::fmt;

use crate::{
    error::{Axis, HullError},
    geometry::point_3::Point3,
};

/// A lattice point in the plane, as read from a point source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Point2 {
    pub x: i64,
    pub y: i64,
}

impl Point2 {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Lifts the point onto the paraboloid `z = x² + y²`.
    ///
    /// Each of `|x|`, `|y|` and `x² + y²` must stay within `bound`. A squared
    /// sum that does not fit in an `i64` is reported as out of range with
    /// value `i64::MAX`.
    pub fn lift(&self, index: usize, bound: i64) -> Result<Point3, HullError> {
        let limit = bound.unsigned_abs();
        for (axis, value) in [(Axis::X, self.x), (Axis::Y, self.y)] {
            if value.unsigned_abs() > limit {
                return Err(HullError::CoordinateOutOfRange {
                    index,
                    axis,
                    value,
                    bound,
                });
            }
        }

        let z = self
            .x
            .checked_mul(self.x)
            .zip(self.y.checked_mul(self.y))
            .and_then(|(xx, yy)| xx.checked_add(yy));
        let z = match z {
            Some(z) if z.unsigned_abs() <= limit => z,
            _ => {
                return Err(HullError::CoordinateOutOfRange {
                    index,
                    axis: Axis::Z,
                    value: z.unwrap_or(i64::MAX),
                    bound,
                });
            }
        };

        Ok(Point3::new(self.x, self.y, z))
    }
}

impl From<(i64, i64)> for Point2 {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point3> for Point2 {
    /// Projects back onto the x-y plane.
    fn from(p: Point3) -> Self {
        Self::new(p.x, p.y)
    }
}

impl fmt::Display for Point2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lift_onto_paraboloid() {
        let p = Point2::new(3, -4);
        assert_eq!(p.lift(0, 1_000_000), Ok(Point3::new(3, -4, 25)));
        assert_eq!(Point2::from(Point3::new(3, -4, 25)), p);
    }

    #[test]
    fn lift_rejects_large_planar_coordinate() {
        let err = Point2::new(2_000_000, 0).lift(7, 1_000_000).unwrap_err();
        assert_eq!(
            err,
            HullError::CoordinateOutOfRange {
                index: 7,
                axis: Axis::X,
                value: 2_000_000,
                bound: 1_000_000,
            }
        );
    }

    #[test]
    fn lift_rejects_large_squared_sum() {
        // each coordinate fits, their squared sum does not
        let err = Point2::new(800, 800).lift(0, 1_000_000).unwrap_err();
        assert!(matches!(
            err,
            HullError::CoordinateOutOfRange { axis: Axis::Z, value: 1_280_000, .. }
        ));
    }

    #[test]
    fn lift_reports_overflowing_square() {
        // 4e9 passes a 1e10 bound but its square does not fit in an i64
        let err = Point2::new(4_000_000_000, 0).lift(2, 10_000_000_000).unwrap_err();
        assert_eq!(
            err,
            HullError::CoordinateOutOfRange {
                index: 2,
                axis: Axis::Z,
                value: i64::MAX,
                bound: 10_000_000_000,
            }
        );

        let err = Point2::new(i64::MIN, i64::MIN).lift(0, i64::MAX).unwrap_err();
        assert!(matches!(err, HullError::CoordinateOutOfRange { axis: Axis::X, .. }));
        assert!(Point2::new(3_000_000_000, 0).lift(0, i64::MAX).is_ok());
    }
}
