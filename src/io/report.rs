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

use crate::hull::{CheckReport, ConvexHull, MeshCounts};

/// The textual build log: every face as an input-index triple, the mesh
/// sizes and the invariant checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostics {
    /// Input-index triples in hull order, with the lower flag.
    pub faces: Vec<([usize; 3], bool)>,
    pub counts: MeshCounts,
    pub lower_faces: usize,
    pub checks: CheckReport,
}

impl Diagnostics {
    /// Gathers the log for `hull`, logging any defect the checks find.
    pub fn collect(hull: &ConvexHull) -> Self {
        let vertices = hull.mesh().vertices();
        let faces: Vec<([usize; 3], bool)> = hull
            .faces()
            .map(|f| (f.vertices.map(|v| vertices[v].index), f.lower))
            .collect();
        let lower_faces = faces.iter().filter(|(_, lower)| *lower).count();

        let checks = hull.check();
        checks.log();

        Self {
            faces,
            counts: hull.counts(),
            lower_faces,
            checks,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.checks.is_ok()
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "faces:")?;
        for ([a, b, c], lower) in &self.faces {
            let tag = if *lower { " lower" } else { "" };
            writeln!(f, "  {a} {b} {c}{tag}")?;
        }

        let MeshCounts {
            vertices,
            edges,
            faces,
        } = self.counts;
        writeln!(
            f,
            "V = {vertices}, E = {edges}, F = {faces}, lower F = {}",
            self.lower_faces
        )?;
        writeln!(f, "{}", self.checks.euler)?;

        let defects = [
            ("face/edge mismatches", self.checks.endpoint_errors.len()),
            ("edges without two faces", self.checks.adjacency_errors.len()),
            ("inconsistent edges", self.checks.inconsistent_edges.len()),
            ("convexity violations", self.checks.convexity_violations.len()),
        ];
        for (what, n) in defects {
            writeln!(f, "{what}: {n}")?;
        }
        Ok(())
    }
}
