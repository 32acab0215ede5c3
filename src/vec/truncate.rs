// This file is part of stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::StackVec};

impl<T, const N: usize> StackVec<T, N> {
    /// Shortens the vector to `new_len`, dropping `[new_len..len)` in index order.
    ///
    /// No-op if `new_len >= len`.
    #[inline]
    pub fn truncate(&mut self, new_len: usize) {
        let len = self.len;
        if new_len >= len {
            return;
        }
        // Shrink first so a panicking destructor can't expose dropped slots.
        self.len = new_len;
        // SAFETY: `[new_len..len)` held values and is now outside the live prefix.
        unsafe { self.drop_range(new_len, len) };
    }

    /// Drops every element and sets `len = 0`. Equivalent to `truncate(0)`.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Resizes to `new_len`: truncates when shrinking, appends clones of
    /// `value` when growing.
    ///
    /// Returns [`Error::Full`] if `new_len > N`, leaving the vector unchanged.
    pub fn resize(&mut self, new_len: usize, value: T) -> Result<(), Error>
    where
        T: Clone,
    {
        if new_len > N {
            return Err(Error::Full);
        }
        if new_len <= self.len {
            self.truncate(new_len);
            return Ok(());
        }
        while self.len + 1 < new_len {
            let len = self.len;
            // SAFETY: `len < new_len <= N`; slot `len` is uninitialized.
            unsafe { self.write_at(len, value.clone()) };
            self.len = len + 1;
        }
        let len = self.len;
        // SAFETY: as above; the last new slot takes `value` itself.
        unsafe { self.write_at(len, value) };
        self.len = len + 1;
        Ok(())
    }
}
