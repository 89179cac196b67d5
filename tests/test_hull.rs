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

use std::collections::BTreeSet;

use lifthull::geometry::Point3;
use lifthull::hull::{ConvexHull, Insertion, MeshCounts};
use lifthull::kernel::{are_collinear, are_coplanar, volume_sign_exact};
use lifthull::config::MAX_COORDINATE_BOUND;
use lifthull::{HullConfig, HullError, VolumeKernel};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

fn pts(coords: &[[i64; 3]]) -> Vec<Point3> {
    coords.iter().map(|&c| Point3::from(c)).collect()
}

fn tetrahedron() -> Vec<Point3> {
    pts(&[[0, 0, 0], [10, 0, 0], [0, 10, 0], [0, 0, 10]])
}

fn cube() -> Vec<Point3> {
    pts(&[
        [0, 0, 0],
        [4, 0, 0],
        [0, 4, 0],
        [4, 4, 0],
        [0, 0, 4],
        [4, 0, 4],
        [0, 4, 4],
        [4, 4, 4],
    ])
}

/// Rotates each triple so its smallest index comes first; winding is kept.
fn canonical_faces(hull: &ConvexHull) -> BTreeSet<[usize; 3]> {
    hull.face_triples()
        .into_iter()
        .map(|t| {
            let k = (0..3).min_by_key(|&i| t[i]).unwrap();
            [t[k], t[(k + 1) % 3], t[(k + 2) % 3]]
        })
        .collect()
}

fn assert_closed_convex(hull: &ConvexHull, points: &[Point3]) {
    let report = hull.check();
    assert!(report.is_ok(), "{report:?}");

    // every input point, kept or discarded, is inside or on every face
    for face in hull.faces() {
        let [a, b, c] = face.vertices.map(|v| hull.mesh().vertices()[v].position);
        for p in points {
            assert!(!volume_sign_exact(&a, &b, &c, p).is_negative());
        }
    }
}

#[test]
fn test_tetrahedron() {
    init_tracing();
    let points = tetrahedron();
    let hull = ConvexHull::build(&points, HullConfig::default()).unwrap();

    assert!(hull.is_complete());
    assert_eq!(
        hull.counts(),
        MeshCounts {
            vertices: 4,
            edges: 6,
            faces: 4
        }
    );
    assert_closed_convex(&hull, &points);

    let faces = canonical_faces(&hull);
    let expected: BTreeSet<[usize; 3]> =
        [[0, 2, 1], [0, 1, 3], [1, 2, 3], [0, 3, 2]].into_iter().collect();
    assert_eq!(faces, expected);
}

#[test]
fn test_cube_with_coplanar_corners() {
    init_tracing();
    let points = cube();
    let hull = ConvexHull::build(&points, HullConfig::default()).unwrap();

    assert_eq!(
        hull.counts(),
        MeshCounts {
            vertices: 8,
            edges: 18,
            faces: 12
        }
    );
    assert_closed_convex(&hull, &points);
}

#[test]
fn test_interior_point_leaves_mesh_unchanged() {
    init_tracing();
    let mut points = tetrahedron();
    points.push(Point3::new(1, 1, 1));

    let mut hull = ConvexHull::new(&points, HullConfig::default()).unwrap();
    hull.bootstrap().unwrap();
    assert_eq!(
        hull.step().unwrap(),
        Some(Insertion::Extended {
            vertex: 3,
            visible: 1,
            created: 3
        })
    );

    let before = hull.counts();
    let faces_before = canonical_faces(&hull);

    assert_eq!(hull.step().unwrap(), Some(Insertion::Interior { vertex: 4 }));
    assert_eq!(hull.counts(), before);
    assert_eq!(canonical_faces(&hull), faces_before);
    assert_eq!(hull.mesh().vertices().len(), 4);

    assert_eq!(hull.step().unwrap(), None);
    assert!(hull.is_complete());
}

#[test]
fn test_point_on_face_is_not_visible() {
    // (2, 2, 0) lies on the bottom face: zero volume against it, positive
    // against the rest, so it is discarded as interior
    let mut points = tetrahedron();
    points.push(Point3::new(2, 2, 0));

    let hull = ConvexHull::build(&points, HullConfig::default()).unwrap();
    assert_eq!(hull.counts().vertices, 4);
    assert!(hull.hull_vertices().all(|v| v.index != 4));
    assert_closed_convex(&hull, &points);
}

#[test]
fn test_coplanar_face_survives_outside_point() {
    // (20, -5, 0) is in the plane of the bottom face but outside the hull;
    // the bottom face has zero volume against it and must not be removed
    let mut points = tetrahedron();
    points.push(Point3::new(20, -5, 0));

    let hull = ConvexHull::build(&points, HullConfig::default()).unwrap();
    assert_eq!(hull.counts().vertices, 5);
    assert_closed_convex(&hull, &points);

    let faces = canonical_faces(&hull);
    assert!(faces.contains(&[0, 2, 1]), "{faces:?}");
}

#[test]
fn test_bootstrap_reorders_ring() {
    // the first three points are collinear, so the triangle starts at index 1
    let points = pts(&[[0, 0, 0], [1, 0, 0], [2, 0, 0], [0, 3, 0], [0, 0, 3]]);
    let mut hull = ConvexHull::new(&points, HullConfig::default()).unwrap();
    hull.bootstrap().unwrap();

    assert_eq!(hull.counts(), MeshCounts { vertices: 3, edges: 3, faces: 2 });
    assert!(hull.check().is_ok());

    let processed: Vec<usize> = hull.hull_vertices().map(|v| v.index).collect();
    assert_eq!(processed.len(), 3);
    assert!(processed.contains(&1) && processed.contains(&2) && processed.contains(&3));

    // the apex (index 4) is the new ring head and goes in first
    let head = hull.mesh().vertices().head().unwrap();
    assert_eq!(hull.mesh().vertices()[head].index, 4);
    assert!(matches!(hull.step().unwrap(), Some(Insertion::Extended { vertex: 4, .. })));
}

#[test]
fn test_bootstrap_errors() {
    let line = pts(&[[0, 0, 0], [1, 1, 1], [2, 2, 2], [5, 5, 5]]);
    assert_eq!(
        ConvexHull::build(&line, HullConfig::default()).unwrap_err(),
        HullError::AllPointsCollinear
    );

    let plane = pts(&[[0, 0, 0], [1, 0, 0], [0, 1, 0], [7, 3, 0], [-2, 5, 0]]);
    assert_eq!(
        ConvexHull::build(&plane, HullConfig::default()).unwrap_err(),
        HullError::AllPointsCoplanar
    );

    let triangle = pts(&[[0, 0, 0], [1, 0, 0], [0, 1, 0]]);
    assert_eq!(
        ConvexHull::build(&triangle, HullConfig::default()).unwrap_err(),
        HullError::AllPointsCoplanar
    );
}

#[test]
fn test_input_preconditions() {
    let two = pts(&[[0, 0, 0], [1, 0, 0]]);
    assert_eq!(
        ConvexHull::new(&two, HullConfig::default()).unwrap_err(),
        HullError::TooFewPoints { found: 2, required: 3 }
    );

    let far = pts(&[[0, 0, 0], [1, 0, 0], [0, 1, 0], [0, 0, 2_000_000]]);
    assert!(matches!(
        ConvexHull::new(&far, HullConfig::default()),
        Err(HullError::CoordinateOutOfRange { index: 3, value: 2_000_000, .. })
    ));

    let narrow = HullConfig::default().with_coordinate_bound(5);
    assert!(ConvexHull::new(&tetrahedron(), narrow).is_err());
}

#[test]
fn test_kernels_agree_on_small_input() {
    let points = cube();
    let exact =
        ConvexHull::build(&points, HullConfig::default().with_kernel(VolumeKernel::Exact)).unwrap();
    for kernel in [VolumeKernel::Float, VolumeKernel::Filtered] {
        let hull = ConvexHull::build(&points, HullConfig::default().with_kernel(kernel)).unwrap();
        assert_eq!(canonical_faces(&hull), canonical_faces(&exact), "{kernel:?}");
    }
}

#[test]
fn test_default_kernel_on_near_coplanar_input() {
    init_tracing();
    // the first four are exactly coplanar; a float determinant at this
    // scale rounds the fourth off the plane
    let points = pts(&[
        [-120_270, 492_962, -89_645],
        [217_938, 87_622, -33_610],
        [111_815, 306_723, -914_265],
        [450_023, -98_617, -858_230],
        [0, 0, 1_000_000],
    ]);
    assert!(are_coplanar(&points[0], &points[1], &points[2], &points[3]));

    let mut hull = ConvexHull::new(&points, HullConfig::default().with_checks(true)).unwrap();
    hull.bootstrap().unwrap();
    assert_eq!(hull.mesh().vertices().head(), Some(4));

    hull.construct().unwrap();
    assert_closed_convex(&hull, &points);

    let exact =
        ConvexHull::build(&points, HullConfig::default().with_kernel(VolumeKernel::Exact)).unwrap();
    assert_eq!(canonical_faces(&hull), canonical_faces(&exact));
}

#[test]
fn test_coordinate_bound_is_clamped() {
    let config = HullConfig::default().with_coordinate_bound(i64::MAX);
    assert_eq!(config.coordinate_bound, MAX_COORDINATE_BOUND);

    let raw = HullConfig {
        coordinate_bound: i64::MIN,
        ..HullConfig::default()
    };
    assert_eq!(raw.bound(), MAX_COORDINATE_BOUND);

    let big = MAX_COORDINATE_BOUND;
    let points = pts(&[
        [0, 0, 0],
        [big, 0, 0],
        [0, big, 0],
        [0, 0, big],
        [-big, -big, -big],
        [1, 1, 1],
    ]);
    let hull = ConvexHull::build(&points, config.clone().with_checks(true)).unwrap();
    assert_eq!(hull.counts(), MeshCounts { vertices: 4, edges: 6, faces: 4 });
    assert_closed_convex(&hull, &points);

    let beyond = pts(&[[0, 0, 0], [1, 0, 0], [0, 1, 0], [0, 0, big + 1]]);
    assert!(matches!(
        ConvexHull::new(&beyond, config),
        Err(HullError::CoordinateOutOfRange { index: 3, bound, .. }) if bound == big
    ));
}

#[test]
fn test_exact_kernel_with_large_coordinates() {
    let big = 1_000_000_000i64;
    let points = pts(&[
        [0, 0, 0],
        [big, 0, 0],
        [0, big, 0],
        [0, 0, big],
        [big, big, big],
        [1, 1, 1],
    ]);
    let config = HullConfig::default()
        .with_coordinate_bound(i64::MAX / 4)
        .with_kernel(VolumeKernel::Exact)
        .with_checks(true);

    let hull = ConvexHull::build(&points, config).unwrap();
    assert_eq!(hull.counts().vertices, 5);
    assert_closed_convex(&hull, &points);
}

#[test]
fn test_checks_each_insertion() {
    init_tracing();
    let mut rng = StdRng::seed_from_u64(7);
    let points: Vec<Point3> = (0..40)
        .map(|_| {
            Point3::new(
                rng.random_range(-50..=50),
                rng.random_range(-50..=50),
                rng.random_range(-50..=50),
            )
        })
        .collect();

    let mut hull = ConvexHull::new(&points, HullConfig::default().with_checks(true)).unwrap();
    while hull.step().unwrap().is_some() {
        assert!(hull.check().is_ok());
    }
    assert_closed_convex(&hull, &points);
}

fn general_position(rng: &mut StdRng, n: usize) -> Vec<Point3> {
    loop {
        let points: Vec<Point3> = (0..n)
            .map(|_| {
                Point3::new(
                    rng.random_range(-1000..=1000),
                    rng.random_range(-1000..=1000),
                    rng.random_range(-1000..=1000),
                )
            })
            .collect();

        let mut degenerate = false;
        for i in 0..n {
            for j in i + 1..n {
                for k in j + 1..n {
                    if are_collinear(&points[i], &points[j], &points[k]) {
                        degenerate = true;
                    }
                    for l in k + 1..n {
                        if are_coplanar(&points[i], &points[j], &points[k], &points[l]) {
                            degenerate = true;
                        }
                    }
                }
            }
        }
        if !degenerate {
            return points;
        }
    }
}

#[test]
fn test_insertion_order_does_not_change_hull() {
    let mut rng = StdRng::seed_from_u64(42);
    let points = general_position(&mut rng, 12);

    let reference = canonical_faces(&ConvexHull::build(&points, HullConfig::default()).unwrap());

    for _ in 0..5 {
        let mut order: Vec<usize> = (0..points.len()).collect();
        order.shuffle(&mut rng);
        let shuffled: Vec<Point3> = order.iter().map(|&i| points[i]).collect();

        let hull = ConvexHull::build(&shuffled, HullConfig::default()).unwrap();
        let faces: BTreeSet<[usize; 3]> = canonical_faces(&hull)
            .into_iter()
            .map(|t| {
                let t = t.map(|i| order[i]);
                let k = (0..3).min_by_key(|&i| t[i]).unwrap();
                [t[k], t[(k + 1) % 3], t[(k + 2) % 3]]
            })
            .collect();
        assert_eq!(faces, reference);
    }
}
