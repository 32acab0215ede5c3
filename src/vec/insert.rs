// This file is part of stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::CapacityError, vec::StackVec};

impl<T, const N: usize> StackVec<T, N> {
    /// Inserts `value` at `index`, shifting `[index..len)` one slot toward the tail.
    ///
    /// Returns a [`CapacityError`] carrying `value` back if the vector is
    /// full; the vector is unchanged in that case.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    #[inline]
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), CapacityError<T>> {
        let len = self.len;
        if index > len {
            panic!("insertion index (is {index}) should be <= len (is {len})");
        }
        if len == N {
            return Err(CapacityError::new(value));
        }

        // SAFETY: `len < N`, so shifting `[index..len)` right by one stays in
        // bounds and moves into the uninitialized slot `len`. The vacated slot
        // `index` is then initialized with `value`.
        unsafe {
            self.move_slots(index, index + 1, len - index);
            self.write_at(index, value);
        }

        self.len = len + 1;
        Ok(())
    }
}
