// This file is part of stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::ExtendError, vec::StackVec};

impl<T, const N: usize> Extend<T> for StackVec<T, N> {
    /// Appends at most `remaining_capacity()` items and ignores the rest.
    ///
    /// The iterator is never advanced past the last item that fits.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let remaining = N - self.len;
        if remaining == 0 {
            return;
        }

        for item in iter.into_iter().take(remaining) {
            let len = self.len;
            // SAFETY: `take(remaining)` keeps `len < N`; slot `len` is uninitialized.
            unsafe { self.write_at(len, item) };
            self.len = len + 1;
        }
    }
}

impl<T, const N: usize> StackVec<T, N> {
    /// Appends clones of `src` in order.
    ///
    /// If `src` does not fit, the prefix that fits is appended and kept, and
    /// an [`ExtendError`] reports how many elements were inserted and how many
    /// were not.
    #[inline]
    pub fn extend_from_slice(&mut self, src: &[T]) -> Result<(), ExtendError>
    where
        T: Clone,
    {
        let inserted = self.extend_from_slice_truncated(src);
        if inserted < src.len() {
            return Err(ExtendError::new(inserted, Some(src.len() - inserted)));
        }
        Ok(())
    }

    /// Clones as many elements from `src` as will fit and returns the count copied.
    #[inline]
    pub fn extend_from_slice_truncated(&mut self, src: &[T]) -> usize
    where
        T: Clone,
    {
        let take = (N - self.len).min(src.len());
        for item in &src[..take] {
            let len = self.len;
            // SAFETY: at most `N - len` items are written; slot `len` is
            // uninitialized. `len` is bumped per item so a panicking `clone`
            // leaves only initialized slots in the live prefix.
            unsafe { self.write_at(len, item.clone()) };
            self.len = len + 1;
        }
        take
    }

    /// Pushes every item of `iter` in order until capacity runs out.
    ///
    /// Semantics:
    /// - Partial effect: items pushed before capacity ran out stay in place.
    /// - When an item arrives while the vector is full, iteration stops and
    ///   an [`ExtendError`] reports the number of items inserted and carries
    ///   that item back. The rest of the iterator is not consumed.
    /// - Filling the vector exactly with an iterator that then ends is `Ok`.
    pub fn try_extend_from_iter<I: IntoIterator<Item = T>>(
        &mut self,
        iter: I,
    ) -> Result<(), ExtendError<T>> {
        let mut inserted = 0;
        for item in iter {
            if let Err(rejected) = self.push(item) {
                return Err(ExtendError::with_element(inserted, rejected.into_element()));
            }
            inserted += 1;
        }
        Ok(())
    }
}
