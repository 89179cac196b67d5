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

//! Delaunay triangulation through the paraboloid lifting map.
//!
//! Lifting `(x, y)` to `(x, y, x² + y²)` turns empty circles into planes
//! below which no lifted point lies, so the downward-facing faces of the
//! lifted convex hull project to the Delaunay triangles.

use tracing::debug;

use crate::{
    config::HullConfig,
    error::HullError,
    geometry::{Point2, Point3},
    hull::ConvexHull,
    kernel::{normal_z_sign, orient2d},
    operations::triangulation::{Triangulate2D, Triangulation},
};

/// Input indices of one Delaunay triangle in hull order, which is clockwise
/// in the plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Triangle(pub usize, pub usize, pub usize);

impl Triangle {
    #[inline]
    pub fn as_sorted_indices(&self) -> (usize, usize, usize) {
        let mut v = [self.0, self.1, self.2];
        v.sort_unstable();
        (v[0], v[1], v[2])
    }

    #[inline]
    pub fn reversed(&self) -> Self {
        Triangle(self.0, self.2, self.1)
    }

    #[inline]
    pub fn as_array(&self) -> [usize; 3] {
        [self.0, self.1, self.2]
    }
}

/// Flags every hull face whose normal points strictly down and returns how
/// many there are. Vertical faces are not lower.
pub fn mark_lower_faces(hull: &mut ConvexHull) -> usize {
    let ids: Vec<usize> = hull.mesh.faces.ids().collect();
    let mut lower = 0;
    for f in ids {
        let [a, b, c] = hull.mesh.face_positions(f);
        let is_lower = normal_z_sign(a, b, c).is_negative();
        hull.mesh.faces[f].lower = is_lower;
        lower += usize::from(is_lower);
    }
    lower
}

#[derive(Clone, Debug)]
pub struct Delaunay {
    pub points: Vec<Point2>,
    pub triangles: Vec<Triangle>, // indices into points
    hull: ConvexHull,
}

impl Delaunay {
    pub fn build(points: &[Point2]) -> Result<Self, HullError> {
        Self::build_with_config(points, HullConfig::default())
    }

    /// Lifts the points, builds their hull and keeps its lower faces.
    ///
    /// A collinear input lifts to a vertical plane; it is reported as
    /// collinear rather than coplanar since that is the planar cause.
    pub fn build_with_config(points: &[Point2], config: HullConfig) -> Result<Self, HullError> {
        if points.len() < config.min_points {
            return Err(HullError::TooFewPoints {
                found: points.len(),
                required: config.min_points,
            });
        }

        let lifted = points
            .iter()
            .enumerate()
            .map(|(i, p)| p.lift(i, config.bound()))
            .collect::<Result<Vec<Point3>, _>>()?;

        if all_collinear(points) {
            return Err(HullError::AllPointsCollinear);
        }

        let mut hull = ConvexHull::build(&lifted, config)?;
        let lower = mark_lower_faces(&mut hull);

        let triangles: Vec<Triangle> = hull
            .faces()
            .filter(|f| f.lower)
            .map(|f| {
                let [a, b, c] = f.vertices.map(|v| hull.mesh.vertices[v].index);
                Triangle(a, b, c)
            })
            .collect();

        debug!(points = points.len(), triangles = lower, "delaunay triangulation built");

        Ok(Self {
            points: points.to_vec(),
            triangles,
            hull,
        })
    }

    /// The lifted hull with lower faces flagged.
    pub fn hull(&self) -> &ConvexHull {
        &self.hull
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Triangle corners in the plane, in hull order.
    pub fn triangle_points(&self, t: &Triangle) -> [Point2; 3] {
        t.as_array().map(|i| self.points[i])
    }

    /// Input points that are not corners of any triangle: duplicates, and
    /// points swallowed by the lifted hull.
    pub fn unused_points(&self) -> Vec<usize> {
        let mut used = vec![false; self.points.len()];
        for t in &self.triangles {
            for i in t.as_array() {
                used[i] = true;
            }
        }
        used.iter()
            .enumerate()
            .filter(|(_, u)| !**u)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn into_triangulation(self) -> Triangulation {
        Triangulation {
            triangles: self.triangles.iter().map(|t| t.reversed().as_array()).collect(),
            points: self.points,
        }
    }
}

impl Triangulate2D for Delaunay {
    fn triangulate(points: &[Point2]) -> Result<Triangulation, HullError> {
        Self::build(points).map(Self::into_triangulation)
    }
}

fn all_collinear(points: &[Point2]) -> bool {
    let Some(a) = points.first() else {
        return true;
    };
    let Some(b) = points.iter().find(|p| *p != a) else {
        return true;
    };
    points.iter().all(|c| orient2d(a, b, c).is_zero())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_collinear_handles_duplicates() {
        let same = [Point2::new(1, 1); 4];
        assert!(all_collinear(&same));

        let line = [Point2::new(1, 1), Point2::new(1, 1), Point2::new(3, 5), Point2::new(-1, -3)];
        assert!(all_collinear(&line));

        let bent = [Point2::new(0, 0), Point2::new(1, 0), Point2::new(1, 1)];
        assert!(!all_collinear(&bent));
    }

    #[test]
    fn sorted_indices_ignore_winding() {
        let t = Triangle(4, 1, 9);
        assert_eq!(t.as_sorted_indices(), (1, 4, 9));
        assert_eq!(t.reversed().as_sorted_indices(), (1, 4, 9));
        assert_eq!(t.reversed(), Triangle(4, 9, 1));
    }
}
