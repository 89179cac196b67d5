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

use lifthull::VolumeKernel;
use lifthull::geometry::{Point2, Point3};
use lifthull::kernel::{Sign, are_coplanar, incircle, orient2d, volume_sign};

const KERNELS: [VolumeKernel; 3] = [VolumeKernel::Float, VolumeKernel::Filtered, VolumeKernel::Exact];

#[test]
fn test_volume_sign_sides() {
    let a = Point3::new(0, 0, 0);
    let b = Point3::new(10, 0, 0);
    let c = Point3::new(0, 10, 0);

    for kernel in KERNELS {
        assert_eq!(volume_sign(kernel, &a, &b, &c, &Point3::new(1, 1, 5)), Sign::Negative);
        assert_eq!(volume_sign(kernel, &a, &b, &c, &Point3::new(1, 1, -5)), Sign::Positive);
        assert_eq!(volume_sign(kernel, &a, &b, &c, &Point3::new(20, -5, 0)), Sign::Zero);
        // swapping two corners flips the face
        assert_eq!(volume_sign(kernel, &a, &c, &b, &Point3::new(1, 1, 5)), Sign::Positive);
    }
}

#[test]
fn test_volume_sign_on_lifted_points() {
    let lift = |x, y| Point2::new(x, y).lift(0, 1_000_000).unwrap();
    // (1, 1) lies inside the circle through the other three
    let (a, b, c, d) = (lift(0, 0), lift(2, 0), lift(0, 2), lift(1, 1));

    for kernel in KERNELS {
        assert_eq!(volume_sign(kernel, &a, &b, &c, &d), Sign::Positive);
    }
    assert!(are_coplanar(&a, &b, &c, &lift(2, 2)));
}

#[test]
fn test_incircle_agrees_with_lifting() {
    let (a, b, c) = (Point2::new(0, 0), Point2::new(6, 0), Point2::new(0, 6));
    assert_eq!(orient2d(&a, &b, &c), Sign::Positive);

    for (x, y) in [(1, 1), (3, 3), (6, 6), (7, 7), (-1, 2), (5, -1)] {
        let d = Point2::new(x, y);
        let lifted = [a, b, c, d].map(|p| p.lift(0, 1_000_000).unwrap());
        let volume = volume_sign(VolumeKernel::Exact, &lifted[0], &lifted[1], &lifted[2], &lifted[3]);
        assert_eq!(incircle(&a, &b, &c, &d), volume, "point ({x}, {y})");
    }
}
