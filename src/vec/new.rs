// This file is part of stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::StackVec;

// Core imports
use core::mem::MaybeUninit;

impl<T, const N: usize> StackVec<T, N> {
    /// Constructs an empty vector.
    ///
    /// The backing buffer is left uninitialized; no `T` is constructed.
    #[inline]
    pub const fn new() -> Self {
        Self {
            buf: [const { MaybeUninit::uninit() }; N],
            len: 0,
        }
    }
}

impl<T, const N: usize> Default for StackVec<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
