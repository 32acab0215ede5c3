// This file is part of stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`StackVec`](crate::StackVec).
//!
//! - `IntoIter<T, N>` yields by value and supports `DoubleEndedIterator`,
//!   `ExactSizeIterator`, and `FusedIterator`. Dropping it early drops the
//!   elements it has not yielded.
//! - `&StackVec` and `&mut StackVec` iterate as slices.

// Crate imports
use crate::vec::StackVec;

// Core imports
use core::{fmt, iter::FusedIterator};

/// Owned iterator returned by `StackVec::into_iter()`.
///
/// Yields elements by value from front to back and supports double-ended
/// iteration via [`DoubleEndedIterator`].
pub struct IntoIter<T, const N: usize> {
    // `v.len` is kept at 0 so the vector never drops anything itself; the
    // iterator owns the slots in `[front..back)`.
    pub(crate) v: StackVec<T, N>,
    pub(crate) front: usize,
    pub(crate) back: usize, // exclusive
}

impl<T, const N: usize> IntoIter<T, N> {
    /// Returns the elements that have not been yielded yet.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[front..back)` holds values owned by this iterator.
        unsafe {
            core::slice::from_raw_parts(self.v.as_ptr().add(self.front), self.back - self.front)
        }
    }

    /// Returns the elements that have not been yielded yet, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`, with exclusive access through `&mut self`.
        unsafe {
            core::slice::from_raw_parts_mut(
                self.v.as_mut_ptr().add(self.front),
                self.back - self.front,
            )
        }
    }
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            // SAFETY: slot `i` was owned by the iterator and is now outside
            // `[front..back)`, so ownership passes to the caller.
            Some(unsafe { self.v.read_at(i) })
        } else {
            None
        }
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
        unsafe { self.v.drop_range(start, start + skip) };
        self.next()
    }
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            // SAFETY: slot `back` was owned by the iterator and is now outside
            // `[front..back)`.
            Some(unsafe { self.v.read_at(self.back) })
        } else {
            None
        }
    }
    fn nth_back(&mut self, n: usize) -> Option<T> {
        let skip = n.min(self.back - self.front);
        let end = self.back;
        self.back -= skip;
        // SAFETY: the skipped slots held values and are no longer owned.
        unsafe { self.v.drop_range(end - skip, end) };
        self.next_back()
    }
}
impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}
impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {}

impl<T, const N: usize> Drop for IntoIter<T, N> {
    fn drop(&mut self) {
        let (front, back) = (self.front, self.back);
        self.front = back;
        // SAFETY: `[front..back)` are the un-yielded values; the iterator no
        // longer tracks them.
        unsafe { self.v.drop_range(front, back) };
    }
}

impl<T: Clone, const N: usize> Clone for IntoIter<T, N> {
    fn clone(&self) -> Self {
        self.as_slice().iter().cloned().collect::<StackVec<T, N>>().into_iter()
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for IntoIter<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a StackVec<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T, const N: usize> IntoIterator for &'a mut StackVec<T, N> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<T, const N: usize> IntoIterator for StackVec<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;
    fn into_iter(mut self) -> Self::IntoIter {
        let back = self.len;
        // Responsibility for `[0..back)` moves to the iterator.
        self.len = 0;
        IntoIter {
            front: 0,
            back,
            v: self,
        }
    }
}
