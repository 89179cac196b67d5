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

use tracing::warn;

use crate::hull::ConvexHull;

/// Sizes of the hull: on-hull vertices, edges, faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MeshCounts {
    pub vertices: usize,
    pub edges: usize,
    pub faces: usize,
}

/// Euler relations of a closed triangulated sphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EulerCheck {
    pub counts: MeshCounts,
    /// `V - E + F`
    pub characteristic: i64,
    /// `V - E + F == 2`
    pub euler: bool,
    /// `F == 2V - 4`
    pub faces: bool,
    /// `2E == 3F`
    pub edges: bool,
}

impl EulerCheck {
    pub fn new(counts: MeshCounts) -> Self {
        let v = counts.vertices as i64;
        let e = counts.edges as i64;
        let f = counts.faces as i64;
        let characteristic = v - e + f;
        Self {
            counts,
            characteristic,
            euler: characteristic == 2,
            faces: f == 2 * v - 4,
            edges: 2 * e == 3 * f,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.euler && self.faces && self.edges
    }
}

impl fmt::Display for EulerCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let MeshCounts {
            vertices: v,
            edges: e,
            faces: fc,
        } = self.counts;
        let verdict = |ok: bool| if ok { "ok" } else { "FAILED" };
        writeln!(f, "V - E + F = {} ({})", self.characteristic, verdict(self.euler))?;
        writeln!(f, "F = 2V - 4: {} vs {} ({})", fc, 2 * v as i64 - 4, verdict(self.faces))?;
        write!(f, "2E = 3F: {} vs {} ({})", 2 * e, 3 * fc, verdict(self.edges))
    }
}

/// Defects found by [`ConvexHull::check`]. Slot indices refer to the mesh
/// rings. None of these stop a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub euler: EulerCheck,
    /// Faces whose side `i` is not an edge joining vertex `i` and `i + 1`,
    /// or whose edges repeat.
    pub endpoint_errors: Vec<usize>,
    /// Edges without two distinct live faces that both contain the edge.
    pub adjacency_errors: Vec<usize>,
    /// Edges whose two faces do not run along them in opposite directions.
    pub inconsistent_edges: Vec<usize>,
    /// `(face, vertex)` pairs with the vertex strictly outside the face.
    pub convexity_violations: Vec<(usize, usize)>,
}

impl CheckReport {
    pub fn is_ok(&self) -> bool {
        self.euler.is_ok()
            && self.endpoint_errors.is_empty()
            && self.adjacency_errors.is_empty()
            && self.inconsistent_edges.is_empty()
            && self.convexity_violations.is_empty()
    }

    /// Emits one warning per kind of defect.
    pub fn log(&self) {
        if !self.euler.is_ok() {
            warn!(counts = ?self.euler.counts, chi = self.euler.characteristic, "euler relation violated");
        }
        if !self.endpoint_errors.is_empty() {
            warn!(faces = ?self.endpoint_errors, "face edges do not match face vertices");
        }
        if !self.adjacency_errors.is_empty() {
            warn!(edges = ?self.adjacency_errors, "edges without two incident faces");
        }
        if !self.inconsistent_edges.is_empty() {
            warn!(edges = ?self.inconsistent_edges, "inconsistent edge winding");
        }
        if !self.convexity_violations.is_empty() {
            warn!(pairs = ?self.convexity_violations, "hull is not convex");
        }
    }
}

pub fn check_euler(counts: MeshCounts) -> EulerCheck {
    EulerCheck::new(counts)
}

impl ConvexHull {
    /// Runs every invariant check against the current mesh.
    pub fn check(&self) -> CheckReport {
        CheckReport {
            euler: self.check_euler(),
            endpoint_errors: self.check_endpoints(),
            adjacency_errors: self.check_adjacency(),
            inconsistent_edges: self.consistency(),
            convexity_violations: self.convexity(),
        }
    }

    pub fn check_euler(&self) -> EulerCheck {
        check_euler(self.counts())
    }

    pub fn check_endpoints(&self) -> Vec<usize> {
        let mesh = &self.mesh;
        mesh.faces
            .iter()
            .filter(|(_, face)| {
                let [e0, e1, e2] = face.edges;
                let distinct = e0 != e1 && e1 != e2 && e0 != e2;
                let matched = (0..3).all(|i| {
                    mesh.edges.get(face.edges[i]).is_some_and(|edge| {
                        edge.has_endpoint(face.vertices[i])
                            && edge.has_endpoint(face.vertices[(i + 1) % 3])
                    })
                });
                !(distinct && matched)
            })
            .map(|(i, _)| i)
            .collect()
    }

    pub fn check_adjacency(&self) -> Vec<usize> {
        let mesh = &self.mesh;
        mesh.edges
            .iter()
            .filter(|(_, edge)| {
                let [Some(f0), Some(f1)] = edge.faces else {
                    return true;
                };
                if f0 == f1 {
                    return true;
                }
                let [a, b] = edge.endpoints;
                ![f0, f1].into_iter().all(|f| {
                    mesh.faces
                        .get(f)
                        .is_some_and(|face| face.has_vertex(a) && face.has_vertex(b))
                })
            })
            .map(|(i, _)| i)
            .collect()
    }

    /// Edges whose two faces traverse them in the same direction.
    pub fn consistency(&self) -> Vec<usize> {
        let mesh = &self.mesh;
        mesh.edges
            .iter()
            .filter(|(_, edge)| {
                let [a, b] = edge.endpoints;
                let faces = edge.faces.map(|f| f.and_then(|f| mesh.faces.get(f)));
                let [Some(f0), Some(f1)] = faces else {
                    return true;
                };
                let opposite = (f0.has_directed_edge(a, b) && f1.has_directed_edge(b, a))
                    || (f0.has_directed_edge(b, a) && f1.has_directed_edge(a, b));
                !opposite
            })
            .map(|(i, _)| i)
            .collect()
    }

    /// `(face, vertex)` pairs where a hull vertex lies strictly outside a face.
    pub fn convexity(&self) -> Vec<(usize, usize)> {
        let hull_vertices: Vec<usize> = self
            .mesh
            .vertices
            .iter()
            .filter(|(_, v)| v.processed)
            .map(|(i, _)| i)
            .collect();

        let mut violations = Vec::new();
        for (f, face) in self.mesh.faces.iter() {
            for &v in &hull_vertices {
                if face.has_vertex(v) {
                    continue;
                }
                if self.volume_sign(f, self.position(v)).is_negative() {
                    violations.push((f, v));
                }
            }
        }
        violations
    }
}
