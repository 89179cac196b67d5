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

use crate::geometry::Point3;

#[derive(Debug, Clone)]
pub struct Vertex {
    pub position: Point3,
    /// Position of the point in the input sequence.
    pub index: usize,
    /// Already offered to the hull (inserted or found interior).
    pub processed: bool,
    /// Incident to a live edge. Valid only inside the cleanup pass.
    pub on_hull: bool,
    /// Edge already built from this vertex to the point being inserted.
    /// Cleared at the end of every insertion.
    pub duplicate: Option<usize>,
}

impl Vertex {
    pub fn new(position: Point3, index: usize) -> Self {
        Self {
            position,
            index,
            processed: false,
            on_hull: false,
            duplicate: None,
        }
    }
}
