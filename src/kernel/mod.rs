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

use std::cmp::Ordering;

use num_traits::Signed;

use crate::{config::VolumeKernel, geometry::Point3};

pub mod exact;
pub mod orientation;
pub mod predicates;

pub use exact::volume_sign_exact;
pub use orientation::{normal_z_sign, volume_sign_f64, volume_sign_filtered};
pub use predicates::{are_collinear, are_coplanar, incircle, orient2d};

/// Sign of a predicate value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    /// Sign of an exact signed value.
    pub fn of<T: Signed>(value: &T) -> Self {
        if value.is_negative() {
            Sign::Negative
        } else if value.is_positive() {
            Sign::Positive
        } else {
            Sign::Zero
        }
    }

    /// Sign of a float that approximates an integer: anything within half a
    /// unit of zero is zero.
    pub fn from_rounded(value: f64) -> Self {
        if value > 0.5 {
            Sign::Positive
        } else if value < -0.5 {
            Sign::Negative
        } else {
            Sign::Zero
        }
    }

    pub const fn as_i32(self) -> i32 {
        match self {
            Sign::Negative => -1,
            Sign::Zero => 0,
            Sign::Positive => 1,
        }
    }

    pub const fn is_negative(self) -> bool {
        matches!(self, Sign::Negative)
    }

    pub const fn is_positive(self) -> bool {
        matches!(self, Sign::Positive)
    }

    pub const fn is_zero(self) -> bool {
        matches!(self, Sign::Zero)
    }
}

impl From<Ordering> for Sign {
    fn from(o: Ordering) -> Self {
        match o {
            Ordering::Less => Sign::Negative,
            Ordering::Equal => Sign::Zero,
            Ordering::Greater => Sign::Positive,
        }
    }
}

/// Sign of the volume of tetrahedron `(a, b, c, p)` under the right-hand
/// rule. Negative means `p` sees the outward side of the counter-clockwise
/// triangle `(a, b, c)`.
pub fn volume_sign(kernel: VolumeKernel, a: &Point3, b: &Point3, c: &Point3, p: &Point3) -> Sign {
    match kernel {
        VolumeKernel::Float => volume_sign_f64(a, b, c, p),
        VolumeKernel::Filtered => volume_sign_filtered(a, b, c, p),
        VolumeKernel::Exact => volume_sign_exact(a, b, c, p),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_rounding_band() {
        assert_eq!(Sign::from_rounded(0.49), Sign::Zero);
        assert_eq!(Sign::from_rounded(-0.49), Sign::Zero);
        assert_eq!(Sign::from_rounded(0.51), Sign::Positive);
        assert_eq!(Sign::from_rounded(-3.0), Sign::Negative);
    }

    #[test]
    fn sign_of_integers() {
        assert_eq!(Sign::of(&-4i64), Sign::Negative);
        assert_eq!(Sign::of(&0i128), Sign::Zero);
        assert_eq!(Sign::of(&9i64).as_i32(), 1);
    }
}
