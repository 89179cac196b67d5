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

use crate::{
    geometry::Point3,
    kernel::{Sign, exact::volume_sign_exact},
};

/// Permanent below which every partial result of the float determinant is
/// an exactly representable integer, with a factor of two to spare.
const EXACT_PERMANENT: f64 = (1u64 << 52) as f64;

/// Six times the signed volume of tetrahedron `(a, b, c, p)`, i.e.
/// `det[a - p, b - p, c - p]`, evaluated in `f64`.
///
/// For integer input the true value is an integer, so the result is exact as
/// long as every partial product stays below 2^53.
pub fn volume6_f64(a: &Point3, b: &Point3, c: &Point3, p: &Point3) -> f64 {
    let (px, py, pz) = (p.x as f64, p.y as f64, p.z as f64);

    let ax = a.x as f64 - px;
    let ay = a.y as f64 - py;
    let az = a.z as f64 - pz;
    let bx = b.x as f64 - px;
    let by = b.y as f64 - py;
    let bz = b.z as f64 - pz;
    let cx = c.x as f64 - px;
    let cy = c.y as f64 - py;
    let cz = c.z as f64 - pz;

    ax * (by * cz - bz * cy) + ay * (bz * cx - bx * cz) + az * (bx * cy - by * cx)
}

/// Rounded sign of [`volume6_f64`]: above +0.5 is positive, below -0.5 is
/// negative, anything else is coplanar.
pub fn volume_sign_f64(a: &Point3, b: &Point3, c: &Point3, p: &Point3) -> Sign {
    Sign::from_rounded(volume6_f64(a, b, c, p))
}

/// Sign of `det[a - p, b - p, c - p]`, exact for every input.
///
/// The differences are taken in integers and the determinant is evaluated
/// in `f64`. If the permanent (the same expansion over absolute values)
/// stays below 2^52 every product and sum is exact and the float sign is
/// returned; otherwise the sign comes from [`volume_sign_exact`].
pub fn volume_sign_filtered(a: &Point3, b: &Point3, c: &Point3, p: &Point3) -> Sign {
    let diff = |q: &Point3| {
        [
            (q.x as i128 - p.x as i128) as f64,
            (q.y as i128 - p.y as i128) as f64,
            (q.z as i128 - p.z as i128) as f64,
        ]
    };
    let [ax, ay, az] = diff(a);
    let [bx, by, bz] = diff(b);
    let [cx, cy, cz] = diff(c);

    let permanent = ax.abs() * ((by * cz).abs() + (bz * cy).abs())
        + ay.abs() * ((bz * cx).abs() + (bx * cz).abs())
        + az.abs() * ((bx * cy).abs() + (by * cx).abs());
    if permanent >= EXACT_PERMANENT {
        return volume_sign_exact(a, b, c, p);
    }

    let det = ax * (by * cz - bz * cy) + ay * (bz * cx - bx * cz) + az * (bx * cy - by * cx);
    Sign::from_rounded(det)
}

/// z-component of `(b - a) × (c - a)`, i.e. the vertical component of the
/// normal of triangle `(a, b, c)`.
pub fn normal_z(a: &Point3, b: &Point3, c: &Point3) -> i128 {
    let (ax, ay) = (a.x as i128, a.y as i128);
    (b.x as i128 - ax) * (c.y as i128 - ay) - (b.y as i128 - ay) * (c.x as i128 - ax)
}

pub fn normal_z_sign(a: &Point3, b: &Point3, c: &Point3) -> Sign {
    Sign::of(&normal_z(a, b, c))
}
