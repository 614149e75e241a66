//! Priority queue backed by a singly-linked list kept in descending order.
//!
//! The head always holds the largest value. Insertion walks the list to the
//! first element not greater than the new value, so equal values are ordered
//! newest first.
//!
//! ```
//! use priority_queue::PriorityQueue;
//!
//! let mut queue = PriorityQueue::new();
//! queue.insert(3);
//! queue.insert(7);
//! queue.insert(5);
//!
//! assert_eq!(queue.head().map(|e| e.value()), Some(7));
//! assert!(queue.remove(5));
//! assert!(!queue.remove(5));
//! assert_eq!(queue.iter().collect::<Vec<_>>(), vec![7, 3]);
//! ```

use std::fmt;
use std::iter::FusedIterator;

/// One link of the queue.
pub struct Element {
    value: i32,
    next: Option<Box<Element>>,
}

impl Element {
    pub fn value(&self) -> i32 {
        self.value
    }

    /// The following (not greater) element.
    pub fn next(&self) -> Option<&Element> {
        self.next.as_deref()
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element").field("value", &self.value).finish()
    }
}

#[derive(Default)]
pub struct PriorityQueue {
    head: Option<Box<Element>>,
    len: usize,
}

impl PriorityQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Links `value` in front of the first element that is `<=` it.
    pub fn insert(&mut self, value: i32) {
        let mut link = &mut self.head;
        while link.as_ref().is_some_and(|e| e.value > value) {
            // Checked non-empty by the loop condition.
            if let Some(e) = link {
                link = &mut e.next;
            }
        }
        let next = link.take();
        *link = Some(Box::new(Element { value, next }));
        self.len += 1;
    }

    /// Unlinks the first element equal to `value`.
    pub fn remove(&mut self, value: i32) -> bool {
        let mut link = &mut self.head;
        while link.as_ref().is_some_and(|e| e.value > value) {
            if let Some(e) = link {
                link = &mut e.next;
            }
        }
        match link.take() {
            Some(e) if e.value == value => {
                *link = e.next;
                self.len -= 1;
                true
            }
            other => {
                *link = other;
                false
            }
        }
    }

    /// First element equal to `value`.
    pub fn find(&self, value: i32) -> Option<&Element> {
        self.elements()
            .take_while(|e| e.value >= value)
            .find(|e| e.value == value)
    }

    /// The largest element.
    pub fn head(&self) -> Option<&Element> {
        self.head.as_deref()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Values from largest to smallest.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            curr: self.head(),
            len: self.len,
        }
    }

    fn elements(&self) -> impl Iterator<Item = &Element> + '_ {
        std::iter::successors(self.head(), |e| e.next())
    }
}

impl Drop for PriorityQueue {
    fn drop(&mut self) {
        let mut curr = self.head.take();
        while let Some(mut e) = curr {
            curr = e.next.take();
        }
    }
}

impl fmt::Debug for PriorityQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Extend<i32> for PriorityQueue {
    fn extend<T: IntoIterator<Item = i32>>(&mut self, iter: T) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl FromIterator<i32> for PriorityQueue {
    fn from_iter<T: IntoIterator<Item = i32>>(iter: T) -> Self {
        let mut queue = PriorityQueue::new();
        queue.extend(iter);
        queue
    }
}

impl<'a> IntoIterator for &'a PriorityQueue {
    type Item = i32;

    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct Iter<'a> {
    curr: Option<&'a Element>,
    len: usize,
}

impl Iterator for Iter<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        let e = self.curr?;
        self.curr = e.next();
        self.len -= 1;
        Some(e.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_values_newest_first() {
        let mut queue = PriorityQueue::new();
        queue.insert(4);
        queue.insert(4);
        queue.insert(9);
        assert_eq!(queue.iter().collect::<Vec<_>>(), vec![9, 4, 4]);
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn find_stops_at_smaller_values() {
        let queue: PriorityQueue = [10, 8, 6, 4].into_iter().collect();
        assert_eq!(queue.find(6).map(Element::value), Some(6));
        assert!(queue.find(7).is_none());
        assert!(queue.find(100).is_none());
        assert!(queue.find(-1).is_none());
    }

    #[test]
    fn long_queue_drops_without_recursion() {
        let queue: PriorityQueue = (0..200_000).collect();
        assert_eq!(queue.len(), 200_000);
        drop(queue);
    }
}
