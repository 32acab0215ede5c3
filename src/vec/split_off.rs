// This file is part of stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::StackVec};

impl<T, const N: usize> StackVec<T, N> {
    /// Splits the vector into two at index `at`.
    ///
    /// On success:
    /// - `self` is left containing the prefix `[0..at)`,
    /// - the returned vector owns the tail `[at..len)`, moved (not cloned).
    ///
    /// Returns [`Error::OutOfBounds`] if `at > self.len()`. On error, `self`
    /// is left unchanged.
    #[inline]
    pub fn split_off(&mut self, at: usize) -> Result<Self, Error> {
        let len = self.len;
        if at > len {
            return Err(Error::OutOfBounds);
        }

        let tail_len = len - at;
        let mut other = Self::new();
        // SAFETY: `[at..len)` holds values; each is moved into the empty
        // `other` and the range then leaves `self`'s live prefix.
        for i in 0..tail_len {
            unsafe {
                let value = self.read_at(at + i);
                other.write_at(i, value);
            }
        }
        self.len = at;
        other.len = tail_len;

        Ok(other)
    }
}
