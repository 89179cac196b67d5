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

use crate::{geometry::Point3, kernel::Sign};

/// Exact sign of `det[a - p, b - p, c - p]` over arbitrary-precision
/// integers. Agrees with [`volume_sign_f64`](super::volume_sign_f64) whenever
/// the float evaluation is exact, and stays correct beyond 2^53.
pub fn volume_sign_exact(a: &Point3, b: &Point3, c: &Point3, p: &Point3) -> Sign {
    Sign::from(volume6_exact(a, b, c, p).cmp0())
}

pub fn volume6_exact(a: &Point3, b: &Point3, c: &Point3, p: &Point3) -> Integer {
    let ax = Integer::from(a.x) - p.x;
    let ay = Integer::from(a.y) - p.y;
    let az = Integer::from(a.z) - p.z;
    let bx = Integer::from(b.x) - p.x;
    let by = Integer::from(b.y) - p.y;
    let bz = Integer::from(b.z) - p.z;
    let cx = Integer::from(c.x) - p.x;
    let cy = Integer::from(c.y) - p.y;
    let cz = Integer::from(c.z) - p.z;

    let minor_x = Integer::from(&by * &cz) - Integer::from(&bz * &cy);
    let minor_y = Integer::from(&bz * &cx) - Integer::from(&bx * &cz);
    let minor_z = Integer::from(&bx * &cy) - Integer::from(&by * &cx);

    let mut vol = Integer::from(&ax * &minor_x);
    vol += Integer::from(&ay * &minor_y);
    vol += Integer::from(&az * &minor_z);
    vol
}
