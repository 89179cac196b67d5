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

use rug::Integer;

use crate::{
    geometry::{Point2, Point3},
    kernel::{Sign, exact::volume_sign_exact},
};

/// True iff `(b - a) × (c - a)` is the zero vector. Exact for coordinates
/// within [`MAX_COORDINATE_BOUND`](crate::config::MAX_COORDINATE_BOUND).
pub fn are_collinear(a: &Point3, b: &Point3, c: &Point3) -> bool {
    let u = [
        b.x as i128 - a.x as i128,
        b.y as i128 - a.y as i128,
        b.z as i128 - a.z as i128,
    ];
    let v = [
        c.x as i128 - a.x as i128,
        c.y as i128 - a.y as i128,
        c.z as i128 - a.z as i128,
    ];

    u[1] * v[2] - u[2] * v[1] == 0 && u[2] * v[0] - u[0] * v[2] == 0 && u[0] * v[1] - u[1] * v[0] == 0
}

/// True iff the four points span no volume. Exact.
pub fn are_coplanar(a: &Point3, b: &Point3, c: &Point3, d: &Point3) -> bool {
    volume_sign_exact(a, b, c, d).is_zero()
}

/// Exact for coordinates within
/// [`MAX_COORDINATE_BOUND`](crate::config::MAX_COORDINATE_BOUND).
/// Returns:
/// - Positive if counter-clockwise
/// - Negative if clockwise
/// - Zero if collinear
pub fn orient2d(a: &Point2, b: &Point2, c: &Point2) -> Sign {
    let det = (b.x as i128 - a.x as i128) * (c.y as i128 - a.y as i128)
        - (b.y as i128 - a.y as i128) * (c.x as i128 - a.x as i128);
    Sign::of(&det)
}

/// Positive if `d` lies strictly inside the circle through the
/// counter-clockwise triangle `(a, b, c)`, negative if strictly outside,
/// zero if co-circular. The orientation flips for clockwise input.
pub fn incircle(a: &Point2, b: &Point2, c: &Point2, d: &Point2) -> Sign {
    let row = |p: &Point2| {
        let x = Integer::from(p.x) - d.x;
        let y = Integer::from(p.y) - d.y;
        let w = Integer::from(&x * &x) + Integer::from(&y * &y);
        (x, y, w)
    };
    let (ax, ay, aw) = row(a);
    let (bx, by, bw) = row(b);
    let (cx, cy, cw) = row(c);

    let minor_a = Integer::from(&by * &cw) - Integer::from(&bw * &cy);
    let minor_b = Integer::from(&bx * &cw) - Integer::from(&bw * &cx);
    let minor_c = Integer::from(&bx * &cy) - Integer::from(&by * &cx);

    let mut det = Integer::from(&ax * &minor_a);
    det -= Integer::from(&ay * &minor_b);
    det += Integer::from(&aw * &minor_c);
    Sign::from(det.cmp0())
}
