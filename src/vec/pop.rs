// This file is part of stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::StackVec;

impl<T, const N: usize> StackVec<T, N> {
    /// Removes the last element and hands it to the caller, or returns `None`
    /// if the vector is empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: Before decrementing, `buf[..old_len]` was initialized, so
        // `buf[self.len]` (the old last slot) holds a value. It is now outside
        // the live prefix, so ownership passes to the caller.
        Some(unsafe { self.read_at(self.len) })
    }
}
