// This file is part of stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::StackVec;

// Core imports
use core::mem::ManuallyDrop;

impl<T, const N: usize> StackVec<T, N> {
    /// Converts to `[T; N]` when **full** (`len == N`); otherwise gives the
    /// vector back unchanged in `Err`.
    #[inline]
    pub fn into_array(self) -> Result<[T; N], Self> {
        if self.len != N {
            return Err(self);
        }
        // The elements move into the array, so the vector's drop must not run.
        let this = ManuallyDrop::new(self);
        // SAFETY: `len == N`, so every slot is initialized, and
        // `[MaybeUninit<T>; N]` has the same layout as `[T; N]`.
        Ok(unsafe { core::ptr::read(this.as_ptr() as *const [T; N]) })
    }
}
