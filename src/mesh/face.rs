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

/// Triangle with outward counter-clockwise winding. `edges[i]` joins
/// `vertices[i]` and `vertices[(i + 1) % 3]`.
#[derive(Debug, Clone, Default)]
pub struct Face {
    pub vertices: [usize; 3],
    pub edges: [usize; 3],
    /// Sees the point being inserted.
    pub visible: bool,
    /// Outward normal points down; set by lower hull extraction.
    pub lower: bool,
}

impl Face {
    pub fn position_of(&self, v: usize) -> Option<usize> {
        self.vertices.iter().position(|&x| x == v)
    }

    pub fn has_vertex(&self, v: usize) -> bool {
        self.vertices.contains(&v)
    }

    /// True if the face runs `a -> b` along one of its sides.
    pub fn has_directed_edge(&self, a: usize, b: usize) -> bool {
        self.position_of(a)
            .is_some_and(|i| self.vertices[(i + 1) % 3] == b)
    }
}
