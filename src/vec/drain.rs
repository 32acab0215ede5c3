// This file is part of stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::StackVec;

// Core imports
use core::{
    fmt,
    iter::FusedIterator,
    ops::{Bound, RangeBounds},
};

/// Draining iterator returned by [`StackVec::drain`].
///
/// - Holds a mutable borrow of the parent vector for its whole lifetime.
/// - Yields the drained range by value, from either end.
/// - When dropped, drops every element of the range it did not yield, then
///   shifts the tail of the parent down to close the gap. This happens
///   exactly once, however much of the range was consumed.
pub struct Drain<'a, T, const N: usize> {
    // `vec.len` is held at the range start while the drain is alive.
    vec: &'a mut StackVec<T, N>,
    // Un-yielded part of the range.
    front: usize,
    back: usize,
    tail_start: usize,
    tail_len: usize,
}

impl<T, const N: usize> Drain<'_, T, N> {
    /// Returns the elements of the range that have not been yielded yet.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[front..back)` holds values owned by this drain.
        unsafe {
            core::slice::from_raw_parts(self.vec.as_ptr().add(self.front), self.back - self.front)
        }
    }
}

impl<T, const N: usize> Iterator for Drain<'_, T, N> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        let i = self.front;
        self.front += 1;
        // SAFETY: slot `i` was un-yielded and is now outside `[front..back)`.
        Some(unsafe { self.vec.read_at(i) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }

    fn nth(&mut self, n: usize) -> Option<T> {
        let skip = n.min(self.back - self.front);
        let start = self.front;
        self.front += skip;
        // SAFETY: the skipped slots held values and are no longer owned.
        unsafe { self.vec.drop_range(start, start + skip) };
        self.next()
    }
}

impl<T, const N: usize> DoubleEndedIterator for Drain<'_, T, N> {
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        // SAFETY: slot `back` was un-yielded and is now outside `[front..back)`.
        Some(unsafe { self.vec.read_at(self.back) })
    }

    fn nth_back(&mut self, n: usize) -> Option<T> {
        let skip = n.min(self.back - self.front);
        let end = self.back;
        self.back -= skip;
        // SAFETY: the skipped slots held values and are no longer owned.
        unsafe { self.vec.drop_range(end - skip, end) };
        self.next_back()
    }
}

impl<T, const N: usize> ExactSizeIterator for Drain<'_, T, N> {}
impl<T, const N: usize> FusedIterator for Drain<'_, T, N> {}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Drain<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Drain").field(&self.as_slice()).finish()
    }
}

impl<T, const N: usize> Drop for Drain<'_, T, N> {
    fn drop(&mut self) {
        // Runs even if dropping a leftover element panics.
        struct CloseGap<'r, 'a, T, const N: usize>(&'r mut Drain<'a, T, N>);

        impl<T, const N: usize> Drop for CloseGap<'_, '_, T, N> {
            fn drop(&mut self) {
                let d = &mut *self.0;
                let start = d.vec.len;
                // SAFETY: the whole range is now unowned, so the tail can
                // slide down over it.
                unsafe { d.vec.move_slots(d.tail_start, start, d.tail_len) };
                d.vec.len = start + d.tail_len;
            }
        }

        let guard = CloseGap(self);
        let (front, back) = (guard.0.front, guard.0.back);
        guard.0.front = back;
        // SAFETY: `[front..back)` are the un-yielded values, and they are no
        // longer tracked by the drain.
        unsafe { guard.0.vec.drop_range(front, back) };
    }
}

impl<T, const N: usize> StackVec<T, N> {
    /// Removes the specified range from the vector and returns its elements
    /// as an iterator.
    ///
    /// The vector's length drops to `range.start` as soon as the drain is
    /// created, so the range is never observable through the vector while the
    /// drain is alive. When the [`Drain`] is dropped, un-yielded elements are
    /// dropped and the tail is shifted left, leaving
    /// `len == old_len - range_len` whether the drain was fully, partially or
    /// never consumed.
    ///
    /// If the drain is leaked (e.g. with [`core::mem::forget`]), the range
    /// and the tail are leaked with it and the vector keeps only the prefix.
    ///
    /// # Panics
    ///
    /// Panics if the specified range is invalid:
    /// - `start > end`
    /// - `end > self.len()`
    /// - an excluded start or included end of `usize::MAX`
    ///
    /// (A range with `start == end` yields an empty iterator and leaves
    /// the vector unchanged.)
    ///
    /// # Examples
    /// ```
    /// # use stack_vec::StackVec;
    /// let mut v: StackVec<_, 4> = [1, 2, 3, 4].into();
    /// let drained: StackVec<_, 4> = v.drain(1..3).collect();
    /// assert_eq!(drained.as_slice(), &[2, 3]);
    /// assert_eq!(v.as_slice(), &[1, 4]);
    /// ```
    pub fn drain<R>(&mut self, range: R) -> Drain<'_, T, N>
    where
        R: RangeBounds<usize>,
    {
        let len = self.len();

        let start = match range.start_bound() {
            Bound::Included(&i) => i,
            Bound::Excluded(&i) => i
                .checked_add(1)
                .unwrap_or_else(|| panic!("attempted to drain from after maximum usize")),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&i) => i
                .checked_add(1)
                .unwrap_or_else(|| panic!("attempted to drain up to maximum usize")),
            Bound::Excluded(&i) => i,
            Bound::Unbounded => len,
        };

        if start > end {
            panic!("drain range start > end: {} > {}", start, end);
        }
        if end > len {
            panic!("drain range end {} exceeds length {}", end, len);
        }

        self.len = start;
        Drain {
            vec: self,
            front: start,
            back: end,
            tail_start: end,
            tail_len: len - end,
        }
    }
}
