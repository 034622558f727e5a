// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A fixed-capacity binary heap of integers.
//!
//! A `FixedHeap` is configured once, at construction, to keep either its smallest item
//! ([`Order::MinTop`]) or its greatest item ([`Order::MaxTop`]) at the top. Its storage is
//! reserved up front and never grows: inserting into a full heap fails with
//! [`Error::Full`] instead of reallocating.
//!
//! Insertion and extraction are `O(log n)`. Retrieving the top item is `O(1)`.
//!
//! ```
//! use fixed_heap::FixedHeap;
//!
//! let mut heap = FixedHeap::new(8).unwrap();
//! for &x in &[1, 1, 3, 2, 5, 4, 67, 7] {
//!     heap.insert(x).unwrap();
//! }
//! assert_eq!(heap.into_sorted_vec(), vec![1, 1, 2, 3, 4, 5, 7, 67]);
//! ```

use std::cmp::Ordering;
use std::fmt::{self, Debug};
use std::slice;

use compare::{natural, Compare};
use log::{debug, trace};

// The heap is a complete binary tree stored level by level in a Vec:
//
//            0
//          /   \
//         1     2
//        / \   / \
//       3   4 5   6
//
// The Vec's length is the number of live items and its capacity is
// reserved once. Every push is preceded by a length check, so the
// buffer never reallocates.

fn parent(x: usize) -> usize {
    debug_assert!(x > 0);
    (x - 1) / 2
}

fn left(x: usize) -> usize { 2 * x + 1 }

fn right(x: usize) -> usize { 2 * x + 2 }

/// The first `v.len() - 1` items are considered a valid heap
/// and the last item is to be moved into place.
fn sift_up<C: Compare<i32>>(v: &mut [i32], cmp: &C) {
    debug_assert!(!v.is_empty());
    let mut node = v.len() - 1;
    while node > 0 {
        let par = parent(node);
        if cmp.compares_lt(&v[node], &v[par]) {
            v.swap(node, par);
            node = par;
        } else {
            return; // ties stay put
        }
    }
}

/// The root of an otherwise valid heap has been replaced with some
/// other value. This function restores the heap property.
fn sift_down<C: Compare<i32>>(v: &mut [i32], cmp: &C) {
    let mut node = 0;
    loop {
        let l = left(node);
        let r = right(node);
        if v.len() <= l { return; } // No children. We're done.
        // Pick the child that belongs higher up
        let ch = if r < v.len() && cmp.compares_lt(&v[r], &v[l]) { r }
                 else { l };
        if cmp.compares_lt(&v[ch], &v[node]) {
            v.swap(ch, node);
            node = ch;
        } else {
            break;
        }
    }
}

/// Which end of the natural integer order a heap keeps at its top.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// The smallest item is at the top.
    MinTop,
    /// The greatest item is at the top.
    MaxTop,
}

impl Default for Order {
    fn default() -> Order { Order::MinTop }
}

impl Order {
    /// Returns `true` if `a` belongs strictly above `b` in a heap with this order.
    ///
    /// Equal values never outrank each other.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_heap::Order;
    ///
    /// assert!(Order::MinTop.is_higher_priority(1, 2));
    /// assert!(Order::MaxTop.is_higher_priority(2, 1));
    /// assert!(!Order::MaxTop.is_higher_priority(2, 2));
    /// ```
    pub fn is_higher_priority(&self, a: i32, b: i32) -> bool {
        self.compares_lt(&a, &b)
    }
}

/// Items that compare as `Less` belong closer to the top.
impl Compare<i32> for Order {
    fn compare(&self, l: &i32, r: &i32) -> Ordering {
        match *self {
            Order::MinTop => natural::<i32>().compare(l, r),
            Order::MaxTop => natural::<i32>().rev().compare(l, r),
        }
    }
}

/// Failures reported by `FixedHeap`.
///
/// A failed operation leaves the heap exactly as it was.
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("heap is full (capacity {capacity})")]
    Full { capacity: usize },
    #[error("heap is empty")]
    Empty,
    #[error("heap capacity must be positive")]
    InvalidCapacity,
}

/// A binary heap of `i32` with a fixed capacity.
///
/// The heap owns its storage exclusively. It has no interior mutability, so
/// sharing it between threads requires external synchronization.
#[derive(Clone)]
pub struct FixedHeap {
    data: Vec<i32>,
    capacity: usize,
    order: Order,
}

impl FixedHeap {
    /// Returns an empty min-top heap able to hold exactly `capacity` items.
    ///
    /// Fails with `Error::InvalidCapacity` if `capacity` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_heap::{Error, FixedHeap, Order};
    ///
    /// let heap = FixedHeap::new(5).unwrap();
    /// assert!(heap.is_empty());
    /// assert_eq!(heap.capacity(), 5);
    /// assert_eq!(heap.order(), Order::MinTop);
    ///
    /// assert_eq!(FixedHeap::new(0).unwrap_err(), Error::InvalidCapacity);
    /// ```
    pub fn new(capacity: usize) -> Result<FixedHeap, Error> {
        Self::with_order(capacity, Order::default())
    }

    /// Returns an empty heap with the given capacity and order.
    pub fn with_order(capacity: usize, order: Order) -> Result<FixedHeap, Error> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity);
        }
        Ok(FixedHeap { data: Vec::with_capacity(capacity), capacity, order })
    }

    /// Inserts an item into the heap.
    ///
    /// Fails with `Error::Full` if the heap already holds `capacity` items.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_heap::{Error, FixedHeap};
    ///
    /// let mut heap = FixedHeap::new(1).unwrap();
    /// assert_eq!(heap.insert(3), Ok(()));
    /// assert_eq!(heap.insert(4), Err(Error::Full { capacity: 1 }));
    /// assert_eq!(heap.size(), 1);
    /// ```
    pub fn insert(&mut self, item: i32) -> Result<(), Error> {
        debug_assert!(self.is_valid());
        if self.is_full() {
            debug!("rejected insert of {}: heap full at capacity {}", item, self.capacity);
            return Err(Error::Full { capacity: self.capacity });
        }
        self.data.push(item);
        sift_up(&mut self.data, &self.order);
        trace!("inserted {}, size now {}", item, self.data.len());
        debug_assert!(self.is_valid());
        Ok(())
    }

    /// Removes the top item from the heap and returns it.
    ///
    /// Fails with `Error::Empty` if the heap holds no items.
    pub fn extract(&mut self) -> Result<i32, Error> {
        debug_assert!(self.is_valid());
        let top = match self.data.len() {
            0 => {
                debug!("rejected extract: heap empty");
                return Err(Error::Empty);
            }
            1 => self.data.swap_remove(0),
            _ => {
                let res = self.data.swap_remove(0);
                sift_down(&mut self.data, &self.order);
                res
            }
        };
        trace!("extracted {}, size now {}", top, self.data.len());
        debug_assert!(self.is_valid());
        Ok(top)
    }

    /// Returns the number of items in the heap.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Returns the number of items in the heap. Same as `size`.
    pub fn len(&self) -> usize {
        self.size()
    }

    /// Returns `true` if the heap contains no items.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns `true` if another insert would fail.
    pub fn is_full(&self) -> bool {
        self.data.len() == self.capacity
    }

    /// Returns the number of items the heap can hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn order(&self) -> Order {
        self.order
    }

    /// Returns the top item without removing it.
    ///
    /// Returns `None` if the heap is empty.
    pub fn peek(&self) -> Option<i32> {
        self.data.first().cloned()
    }

    /// Returns an iterator visiting all items in the heap in arbitrary order.
    pub fn iter(&self) -> Iter {
        Iter(self.data.iter())
    }

    /// Removes all items from the heap. Capacity and order are kept.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Returns an iterator that extracts items in top-first order until the heap is empty.
    ///
    /// Items not consumed by the iterator stay in the heap.
    pub fn drain_sorted(&mut self) -> DrainSorted {
        DrainSorted(self)
    }

    /// Consumes the heap and returns its items in extraction order: ascending for a
    /// min-top heap, descending for a max-top heap.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_heap::{FixedHeap, Order};
    ///
    /// let mut heap = FixedHeap::with_order(4, Order::MaxTop).unwrap();
    /// for &x in &[2, 9, 4, 4] {
    ///     heap.insert(x).unwrap();
    /// }
    /// assert_eq!(heap.into_sorted_vec(), vec![9, 4, 4, 2]);
    /// ```
    pub fn into_sorted_vec(mut self) -> Vec<i32> {
        let sorted: Vec<i32> = self.drain_sorted().collect();
        sorted
    }

    /// Checks if the heap is valid.
    ///
    /// The heap is valid if no item is outranked by either of its children.
    fn is_valid(&self) -> bool {
        (1..self.data.len()).all(|i| {
            !self.order.is_higher_priority(self.data[i], self.data[parent(i)])
        })
    }
}

impl Debug for FixedHeap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

/// An iterator over a `FixedHeap` in arbitrary order.
///
/// Acquire through [`FixedHeap::iter`](struct.FixedHeap.html#method.iter).
#[derive(Clone)]
pub struct Iter<'a>(slice::Iter<'a, i32>);

impl<'a> Iterator for Iter<'a> {
    type Item = &'a i32;
    #[inline] fn next(&mut self) -> Option<&'a i32> { self.0.next() }
    #[inline] fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a> ExactSizeIterator for Iter<'a> {}

impl<'a> IntoIterator for &'a FixedHeap {
    type Item = &'a i32;
    type IntoIter = Iter<'a>;
    fn into_iter(self) -> Iter<'a> { self.iter() }
}

/// An iterator that extracts items from a `FixedHeap` top first.
///
/// Acquire through [`FixedHeap::drain_sorted`](struct.FixedHeap.html#method.drain_sorted).
pub struct DrainSorted<'a>(&'a mut FixedHeap);

impl<'a> Iterator for DrainSorted<'a> {
    type Item = i32;
    fn next(&mut self) -> Option<i32> { self.0.extract().ok() }
    fn size_hint(&self) -> (usize, Option<usize>) { (self.0.len(), Some(self.0.len())) }
}

impl<'a> ExactSizeIterator for DrainSorted<'a> {}
