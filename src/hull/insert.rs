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

use tracing::trace;

use crate::{
    hull::{ConvexHull, Insertion},
    mesh::Face,
};

impl ConvexHull {
    /// Offers vertex `p` to the current hull.
    ///
    /// Marks every face with strictly negative volume against `p` visible. If
    /// none is, `p` is interior and nothing changes. Otherwise edges between
    /// two visible faces are flagged for deletion and every horizon edge gets
    /// a cone face toward `p`. Integrating those faces is left to cleanup.
    pub(crate) fn add_one(&mut self, p: usize) -> Insertion {
        let point = *self.position(p);
        let index = self.mesh.vertices[p].index;

        let face_ids: Vec<usize> = self.mesh.faces.ids().collect();
        let mut visible = 0;
        for f in face_ids {
            // coplanar (zero) counts as hidden
            if self.volume_sign(f, &point).is_negative() {
                self.mesh.faces[f].visible = true;
                visible += 1;
            }
        }

        if visible == 0 {
            self.mesh.vertices[p].on_hull = false;
            trace!(vertex = index, "interior point");
            return Insertion::Interior { vertex: index };
        }

        // Snapshot first: edges created below must not be revisited.
        let edge_ids: Vec<usize> = self.mesh.edges.ids().collect();
        let mut created = 0;
        for e in edge_ids {
            let [seen0, seen1] = self.mesh.edges[e].faces.map(|f| self.is_visible(f));
            if seen0 && seen1 {
                self.mesh.edges[e].delete = true;
            } else if seen0 || seen1 {
                let f = self.make_cone_face(e, p);
                self.mesh.edges[e].new_face = Some(f);
                created += 1;
            }
        }

        trace!(vertex = index, visible, horizon = created, "point extends hull");
        Insertion::Extended {
            vertex: index,
            visible,
            created,
        }
    }

    /// Erects the triangle over horizon edge `e` with apex `p`.
    ///
    /// The two side edges are shared with the neighbouring cone faces: an
    /// edge from a horizon vertex to `p` is built once per insertion and
    /// remembered in the vertex's `duplicate` slot.
    fn make_cone_face(&mut self, e: usize, p: usize) -> usize {
        let [a, b] = self.mesh.edges[e].endpoints;

        let mut sides = [0; 2];
        for (side, v) in sides.iter_mut().zip([a, b]) {
            *side = match self.mesh.vertices[v].duplicate {
                Some(existing) => existing,
                None => {
                    let created = self.mesh.add_edge(v, p);
                    self.mesh.vertices[v].duplicate = Some(created);
                    created
                }
            };
        }

        let (vertices, edges) = self.cone_winding(e, p, sides);
        let f = self.mesh.faces.push(Face {
            vertices,
            edges,
            ..Face::default()
        });

        for side in sides {
            self.mesh.edges[side].attach_face(f);
        }
        f
    }

    /// Vertex and edge order for the cone face over `e`, matching the
    /// direction in which the visible face it replaces runs along `e`.
    /// `sides[i]` joins endpoint `i` of `e` to `p`.
    fn cone_winding(&self, e: usize, p: usize, sides: [usize; 2]) -> ([usize; 3], [usize; 3]) {
        let edge = &self.mesh.edges[e];
        let [a, b] = edge.endpoints;

        let forward = edge
            .faces
            .into_iter()
            .flatten()
            .find(|&f| self.mesh.faces[f].visible)
            .is_some_and(|f| self.mesh.faces[f].has_directed_edge(a, b));

        if forward {
            ([a, b, p], [e, sides[1], sides[0]])
        } else {
            ([b, a, p], [e, sides[0], sides[1]])
        }
    }

    fn is_visible(&self, f: Option<usize>) -> bool {
        f.and_then(|f| self.mesh.faces.get(f)).is_some_and(|face| face.visible)
    }
}
