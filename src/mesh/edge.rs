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

#[derive(Debug, Clone, Default)]
pub struct Edge {
    pub endpoints: [usize; 2],
    /// The two incident faces. Both are set on a closed hull; a slot is only
    /// empty while a cone is being erected.
    pub faces: [Option<usize>; 2],
    /// Cone face erected on this horizon edge during the current insertion.
    pub new_face: Option<usize>,
    /// Interior to the visible region; removed by cleanup.
    pub delete: bool,
}

impl Edge {
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            endpoints: [a, b],
            ..Self::default()
        }
    }

    pub fn has_endpoint(&self, v: usize) -> bool {
        self.endpoints[0] == v || self.endpoints[1] == v
    }

    /// Fills the first empty face slot. Returns false if both are taken.
    pub fn attach_face(&mut self, f: usize) -> bool {
        match self.faces.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => {
                *slot = Some(f);
                true
            }
            None => false,
        }
    }
}
