// This file is part of stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::CapacityError, vec::StackVec};

impl<T, const N: usize> StackVec<T, N> {
    /// Appends `value` at index `len`.
    ///
    /// Returns a [`CapacityError`] carrying `value` back if the vector is
    /// full; the vector is unchanged in that case.
    #[inline]
    pub fn push(&mut self, value: T) -> Result<(), CapacityError<T>> {
        let len = self.len;
        if len == N {
            return Err(CapacityError::new(value));
        }
        // SAFETY: `len < N`, and slot `len` is in the uninitialized tail.
        unsafe { self.write_at(len, value) };
        self.len = len + 1;
        Ok(())
    }

    /// Pushes `value` if not full; if at capacity, drops `value` and returns `false`.
    #[inline]
    #[must_use]
    pub fn push_truncated(&mut self, value: T) -> bool {
        self.push(value).is_ok()
    }
}
