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

use crate::hull::ConvexHull;

/// Topology dropped by one cleanup pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Removed {
    pub edges: usize,
    pub faces: usize,
    pub vertices: usize,
}

impl ConvexHull {
    /// Folds the cone faces into the mesh and discards what the last
    /// insertion made obsolete. Leaves every per-insertion flag cleared.
    pub(crate) fn clean_up(&mut self) -> Removed {
        Removed {
            edges: self.clean_edges(),
            faces: self.clean_faces(),
            vertices: self.clean_vertices(),
        }
    }

    /// Each pending cone face takes over the slot of the visible face it
    /// replaces; edges flagged for deletion are dropped.
    fn clean_edges(&mut self) -> usize {
        let ids: Vec<usize> = self.mesh.edges.ids().collect();
        for &e in &ids {
            let Some(new_face) = self.mesh.edges[e].new_face.take() else {
                continue;
            };
            let slot = if self.is_visible(self.mesh.edges[e].faces[0]) {
                0
            } else {
                1
            };
            self.mesh.edges[e].faces[slot] = Some(new_face);
        }

        let doomed: Vec<usize> = ids
            .into_iter()
            .filter(|&e| self.mesh.edges[e].delete)
            .collect();
        for &e in &doomed {
            self.mesh.edges.remove(e);
        }
        doomed.len()
    }

    fn clean_faces(&mut self) -> usize {
        let doomed: Vec<usize> = self
            .mesh
            .faces
            .iter()
            .filter(|(_, f)| f.visible)
            .map(|(i, _)| i)
            .collect();
        for &f in &doomed {
            self.mesh.faces.remove(f);
        }
        doomed.len()
    }

    /// Processed vertices no longer touched by any edge were swallowed by the
    /// hull and are dropped. The rest get their transient state reset.
    fn clean_vertices(&mut self) -> usize {
        let endpoints: Vec<[usize; 2]> = self.mesh.edges.values().map(|e| e.endpoints).collect();
        for v in endpoints.into_iter().flatten() {
            self.mesh.vertices[v].on_hull = true;
        }

        let doomed: Vec<usize> = self
            .mesh
            .vertices
            .iter()
            .filter(|(_, v)| v.processed && !v.on_hull)
            .map(|(i, _)| i)
            .collect();
        for &v in &doomed {
            self.mesh.vertices.remove(v);
        }

        let ids: Vec<usize> = self.mesh.vertices.ids().collect();
        for v in ids {
            let vertex = &mut self.mesh.vertices[v];
            vertex.duplicate = None;
            vertex.on_hull = false;
        }
        doomed.len()
    }
}
