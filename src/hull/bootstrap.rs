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

use tracing::debug;

use crate::{error::HullError, hull::ConvexHull, kernel::are_collinear};

impl ConvexHull {
    /// Builds the initial doubly covered triangle.
    ///
    /// The first three consecutive ring vertices that are not collinear
    /// become two mirrored faces sharing all three edges. The first later
    /// vertex off their plane is made the ring head so it is inserted first,
    /// which inflates the flat hull into a tetrahedron. Calling this again is
    /// a no-op.
    pub fn bootstrap(&mut self) -> Result<(), HullError> {
        if self.bootstrapped {
            return Ok(());
        }

        let [v0, v1, v2] = self.first_noncollinear_triple()?;
        for v in [v0, v1, v2] {
            self.mesh.vertices[v].processed = true;
        }

        let f0 = self.mesh.add_face(v0, v1, v2, None);
        self.mesh.add_face(v2, v1, v0, Some(f0));

        let v3 = self.first_off_plane(f0, v0, v2)?;
        self.mesh.vertices.set_head(v3);

        self.order = self.mesh.vertices.ids().collect();
        self.cursor = 0;
        self.bootstrapped = true;

        debug!(
            triangle = ?[v0, v1, v2].map(|v| self.mesh.vertices[v].index),
            apex = self.mesh.vertices[v3].index,
            "bootstrap done"
        );
        Ok(())
    }

    fn first_noncollinear_triple(&self) -> Result<[usize; 3], HullError> {
        let start = self.mesh.vertices.head().ok_or(HullError::TooFewPoints {
            found: 0,
            required: self.config.min_points,
        })?;

        let mut v0 = start;
        loop {
            let v1 = self.next_vertex(v0);
            let v2 = self.next_vertex(v1);
            if !are_collinear(self.position(v0), self.position(v1), self.position(v2)) {
                return Ok([v0, v1, v2]);
            }

            v0 = v1;
            if v0 == start {
                return Err(HullError::AllPointsCollinear);
            }
        }
    }

    /// Scans forward from `v2` for a vertex with nonzero volume against `f0`,
    /// wrapping around but stopping before `v0`.
    fn first_off_plane(&self, f0: usize, v0: usize, v2: usize) -> Result<usize, HullError> {
        let mut v3 = self.next_vertex(v2);
        while v3 != v0 {
            if !self.volume_sign(f0, self.position(v3)).is_zero() {
                return Ok(v3);
            }
            v3 = self.next_vertex(v3);
        }
        Err(HullError::AllPointsCoplanar)
    }
}
