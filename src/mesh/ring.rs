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

use std::ops::{Index, IndexMut};

#[derive(Debug, Clone)]
struct Node<T> {
    item: T,
    prev: usize,
    next: usize,
}

/// Circular doubly-linked list stored in an arena.
///
/// Members are addressed by stable slot indices that never move while the
/// member is alive. The head is only an entry point into the cycle and may be
/// reassigned to any live member. Freed slots are recycled by later pushes.
#[derive(Debug, Clone)]
pub struct Ring<T> {
    nodes: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Option<usize>,
    len: usize,
}

impl<T> Default for Ring<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Ring<T> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            head: None,
            len: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn head(&self) -> Option<usize> {
        self.head
    }

    /// Makes `idx` the entry point of the cycle. Returns false and leaves the
    /// head untouched if `idx` is not a live member.
    pub fn set_head(&mut self, idx: usize) -> bool {
        if self.contains(idx) {
            self.head = Some(idx);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, idx: usize) -> bool {
        matches!(self.nodes.get(idx), Some(Some(_)))
    }

    pub fn get(&self, idx: usize) -> Option<&T> {
        self.nodes.get(idx)?.as_ref().map(|n| &n.item)
    }

    pub fn get_mut(&mut self, idx: usize) -> Option<&mut T> {
        self.nodes.get_mut(idx)?.as_mut().map(|n| &mut n.item)
    }

    pub fn next(&self, idx: usize) -> Option<usize> {
        self.node(idx).map(|n| n.next)
    }

    pub fn prev(&self, idx: usize) -> Option<usize> {
        self.node(idx).map(|n| n.prev)
    }

    /// Links `item` in just before the head, so a walk from the head visits
    /// it last. An empty ring gets `item` as its sole member and head.
    pub fn push(&mut self, item: T) -> usize {
        let idx = match self.free.pop() {
            Some(slot) => slot,
            None => {
                self.nodes.push(None);
                self.nodes.len() - 1
            }
        };

        let (prev, next) = match self.head {
            None => {
                self.head = Some(idx);
                (idx, idx)
            }
            Some(head) => {
                let tail = self.nodes[head].as_ref().map_or(head, |n| n.prev);
                if let Some(n) = self.nodes[tail].as_mut() {
                    n.next = idx;
                }
                if let Some(n) = self.nodes[head].as_mut() {
                    n.prev = idx;
                }
                (tail, head)
            }
        };

        self.nodes[idx] = Some(Node { item, prev, next });
        self.len += 1;
        idx
    }

    /// Unlinks `idx` and hands back its item.
    ///
    /// Removing the last member empties the ring; removing the head moves the
    /// head to its successor.
    pub fn remove(&mut self, idx: usize) -> Option<T> {
        let node = self.nodes.get_mut(idx)?.take()?;
        self.len -= 1;
        self.free.push(idx);

        if self.len == 0 {
            self.head = None;
            return Some(node.item);
        }

        if let Some(n) = self.nodes[node.prev].as_mut() {
            n.next = node.next;
        }
        if let Some(n) = self.nodes[node.next].as_mut() {
            n.prev = node.prev;
        }
        if self.head == Some(idx) {
            self.head = Some(node.next);
        }

        Some(node.item)
    }

    /// Slot indices in cycle order, starting at the head.
    pub fn ids(&self) -> Ids<'_, T> {
        Ids {
            ring: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    /// `(index, item)` pairs in cycle order, starting at the head.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.ids().map(move |i| (i, &self[i]))
    }

    /// Items in cycle order, starting at the head.
    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.ids().map(move |i| &self[i])
    }

    fn node(&self, idx: usize) -> Option<&Node<T>> {
        self.nodes.get(idx)?.as_ref()
    }
}

impl<T> Index<usize> for Ring<T> {
    type Output = T;

    fn index(&self, idx: usize) -> &T {
        match self.get(idx) {
            Some(item) => item,
            None => panic!("ring slot {idx} is not live"),
        }
    }
}

impl<T> IndexMut<usize> for Ring<T> {
    fn index_mut(&mut self, idx: usize) -> &mut T {
        match self.get_mut(idx) {
            Some(item) => item,
            None => panic!("ring slot {idx} is not live"),
        }
    }
}

/// Walk over the live slots of a [`Ring`], head first.
pub struct Ids<'a, T> {
    ring: &'a Ring<T>,
    cursor: Option<usize>,
    remaining: usize,
}

impl<T> Iterator for Ids<'_, T> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.cursor?;
        self.remaining -= 1;
        self.cursor = self.ring.next(current);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Ids<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(ring: &Ring<char>) -> String {
        ring.values().collect()
    }

    #[test]
    fn push_appends_before_head() {
        let mut ring = Ring::new();
        let a = ring.push('a');
        ring.push('b');
        ring.push('c');

        assert_eq!(ring.head(), Some(a));
        assert_eq!(collect(&ring), "abc");
        assert_eq!(ring.prev(a).map(|i| ring[i]), Some('c'));
    }

    #[test]
    fn rotating_head_changes_walk_start() {
        let mut ring = Ring::new();
        ring.push('a');
        let b = ring.push('b');
        ring.push('c');

        assert!(ring.set_head(b));
        assert_eq!(collect(&ring), "bca");

        // new members land just before the new head
        ring.push('d');
        assert_eq!(collect(&ring), "bcad");
    }

    #[test]
    fn remove_interior_head_and_last() {
        let mut ring = Ring::new();
        let a = ring.push('a');
        let b = ring.push('b');
        let c = ring.push('c');

        assert_eq!(ring.remove(b), Some('b'));
        assert_eq!(collect(&ring), "ac");
        assert!(!ring.contains(b));

        assert_eq!(ring.remove(a), Some('a'));
        assert_eq!(ring.head(), Some(c));
        assert_eq!(collect(&ring), "c");

        assert_eq!(ring.remove(c), Some('c'));
        assert!(ring.is_empty());
        assert_eq!(ring.head(), None);
        assert_eq!(ring.ids().count(), 0);
        assert_eq!(ring.remove(c), None);
    }

    #[test]
    fn preallocated_ring_starts_empty() {
        let mut ring = Ring::with_capacity(8);
        assert!(ring.is_empty());
        assert_eq!(ring.head(), None);

        let a = ring.push('a');
        assert_eq!(a, 0);
        assert_eq!(ring.head(), Some(a));
        assert_eq!(ring.next(a), Some(a));
    }

    #[test]
    fn freed_slots_are_recycled() {
        let mut ring = Ring::new();
        ring.push(1);
        let b = ring.push(2);
        ring.push(3);
        ring.remove(b);

        let d = ring.push(4);
        assert_eq!(d, b);
        assert_eq!(ring.values().copied().collect::<Vec<_>>(), vec![1, 3, 4]);
        assert!(!ring.set_head(99));
    }
}
