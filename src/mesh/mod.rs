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

pub mod edge;
pub mod face;
pub mod ring;
pub mod vertex;

pub use edge::Edge;
pub use face::Face;
pub use ring::Ring;
pub use vertex::Vertex;

use crate::geometry::Point3;

/// Vertex, edge and face rings of one polyhedral surface.
///
/// Only the hull builder and its cleanup pass mutate the topology; everyone
/// else reads it through shared references.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub(crate) vertices: Ring<Vertex>,
    pub(crate) edges: Ring<Edge>,
    pub(crate) faces: Ring<Face>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves room for a closed triangulated surface over `vertices`
    /// points: at most `3V` edges and `2V` faces.
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            vertices: Ring::with_capacity(vertices),
            edges: Ring::with_capacity(vertices.saturating_mul(3)),
            faces: Ring::with_capacity(vertices.saturating_mul(2)),
        }
    }

    pub fn vertices(&self) -> &Ring<Vertex> {
        &self.vertices
    }

    pub fn edges(&self) -> &Ring<Edge> {
        &self.edges
    }

    pub fn faces(&self) -> &Ring<Face> {
        &self.faces
    }

    pub(crate) fn add_vertex(&mut self, position: Point3, index: usize) -> usize {
        self.vertices.push(Vertex::new(position, index))
    }

    pub(crate) fn add_edge(&mut self, a: usize, b: usize) -> usize {
        self.edges.push(Edge::new(a, b))
    }

    /// Adds triangle `(v0, v1, v2)`.
    ///
    /// Without `fold` three fresh edges are created. With `fold` the edges of
    /// that face joining the same vertex pairs are reused, which builds the
    /// mirror face sharing every edge with it. The new face takes the first
    /// free face slot of each of its edges.
    pub(crate) fn add_face(&mut self, v0: usize, v1: usize, v2: usize, fold: Option<usize>) -> usize {
        let sides = [(v0, v1), (v1, v2), (v2, v0)];
        let reused = match fold {
            None => [None; 3],
            Some(f) => {
                let old = self.faces[f].edges;
                sides.map(|(a, b)| {
                    old.into_iter().find(|&e| {
                        let edge = &self.edges[e];
                        edge.has_endpoint(a) && edge.has_endpoint(b)
                    })
                })
            }
        };

        let mut edges = [0; 3];
        for (i, &(a, b)) in sides.iter().enumerate() {
            edges[i] = match reused[i] {
                Some(e) => e,
                None => self.add_edge(a, b),
            };
        }

        let f = self.faces.push(Face {
            vertices: [v0, v1, v2],
            edges,
            ..Face::default()
        });

        for e in edges {
            self.edges[e].attach_face(f);
        }
        f
    }

    pub fn face_positions(&self, f: usize) -> [&Point3; 3] {
        self.faces[f].vertices.map(|v| &self.vertices[v].position)
    }
}
