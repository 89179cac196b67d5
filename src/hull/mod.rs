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

//! Incremental construction of the convex hull of integer points in 3-space.
//!
//! The hull starts as a doubly covered triangle and absorbs one vertex at a
//! time: faces that see the new point are discarded, and each horizon edge
//! gets a cone face joining it to the point. A cleanup pass after every
//! insertion drops the stale topology and resets the per-insertion flags.

mod bootstrap;
pub mod check;
mod cleanup;
mod insert;

use tracing::{debug, trace};

pub use check::{CheckReport, EulerCheck, MeshCounts};

use crate::{
    config::HullConfig,
    error::HullError,
    geometry::Point3,
    kernel::{self, Sign},
    mesh::{Face, Mesh, Vertex},
};

/// What happened to a vertex offered to the hull.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// The vertex was outside and is now a hull vertex.
    Extended {
        /// Input index of the vertex.
        vertex: usize,
        /// Faces that saw the vertex and were removed.
        visible: usize,
        /// Cone faces erected on the horizon.
        created: usize,
    },
    /// No face saw the vertex; it was discarded and the mesh is unchanged.
    Interior { vertex: usize },
}

/// Owns the mesh of one hull build from the loaded points to the final hull.
#[derive(Debug, Clone)]
pub struct ConvexHull {
    pub(crate) mesh: Mesh,
    config: HullConfig,
    bootstrapped: bool,
    /// Insertion order fixed after bootstrap, as vertex slots.
    order: Vec<usize>,
    cursor: usize,
}

impl ConvexHull {
    /// Loads `points` into a fresh vertex ring without building anything.
    pub fn new(points: &[Point3], config: HullConfig) -> Result<Self, HullError> {
        if points.len() < config.min_points {
            return Err(HullError::TooFewPoints {
                found: points.len(),
                required: config.min_points,
            });
        }

        let mut mesh = Mesh::with_capacity(points.len());
        for (i, p) in points.iter().enumerate() {
            p.check_bound(i, config.bound())?;
            mesh.add_vertex(*p, i);
        }

        Ok(Self {
            mesh,
            config,
            bootstrapped: false,
            order: Vec::new(),
            cursor: 0,
        })
    }

    /// Loads `points` and runs the construction to completion.
    pub fn build(points: &[Point3], config: HullConfig) -> Result<Self, HullError> {
        let mut hull = Self::new(points, config)?;
        hull.construct()?;
        Ok(hull)
    }

    /// Offers the next unprocessed vertex to the hull, bootstrapping first if
    /// needed. Returns `None` once every vertex has been processed.
    pub fn step(&mut self) -> Result<Option<Insertion>, HullError> {
        self.bootstrap()?;

        while let Some(&v) = self.order.get(self.cursor) {
            self.cursor += 1;
            match self.mesh.vertices.get(v) {
                Some(vertex) if !vertex.processed => {}
                _ => continue,
            }

            self.mesh.vertices[v].processed = true;
            let outcome = self.add_one(v);
            let removed = self.clean_up();
            trace!(?outcome, ?removed, "insertion done");

            if self.config.check_each_insertion {
                self.check().log();
            }
            return Ok(Some(outcome));
        }

        Ok(None)
    }

    /// Processes every remaining vertex.
    pub fn construct(&mut self) -> Result<(), HullError> {
        let mut interior = 0usize;
        while let Some(outcome) = self.step()? {
            if matches!(outcome, Insertion::Interior { .. }) {
                interior += 1;
            }
        }

        let counts = self.counts();
        debug!(
            vertices = counts.vertices,
            edges = counts.edges,
            faces = counts.faces,
            interior,
            "hull complete"
        );
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.bootstrapped && self.cursor >= self.order.len()
    }

    pub fn config(&self) -> &HullConfig {
        &self.config
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Vertices currently on the hull.
    pub fn hull_vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.mesh.vertices.values().filter(|v| v.processed)
    }

    pub fn faces(&self) -> impl Iterator<Item = &Face> + '_ {
        self.mesh.faces.values()
    }

    /// Hull faces as input-index triples in outward counter-clockwise order.
    pub fn face_triples(&self) -> Vec<[usize; 3]> {
        self.faces()
            .map(|f| f.vertices.map(|v| self.mesh.vertices[v].index))
            .collect()
    }

    pub fn counts(&self) -> MeshCounts {
        MeshCounts {
            vertices: self.hull_vertices().count(),
            edges: self.mesh.edges.len(),
            faces: self.mesh.faces.len(),
        }
    }

    fn next_vertex(&self, v: usize) -> usize {
        self.mesh.vertices.next(v).unwrap_or(v)
    }

    fn position(&self, v: usize) -> &Point3 {
        &self.mesh.vertices[v].position
    }

    /// Orientation of `p` against face `f` with the configured kernel.
    pub(crate) fn volume_sign(&self, f: usize, p: &Point3) -> Sign {
        let [a, b, c] = self.mesh.face_positions(f);
        kernel::volume_sign(self.config.kernel, a, b, c, p)
    }
}
