// This file is part of stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`StackVec`](crate::StackVec).
//!
//! `Index` and `IndexMut` accept anything a slice accepts (`usize` and every
//! range form) and mirror slice behavior:
//! - panics on out-of-bounds;
//! - views are restricted to the initialized prefix `[0..len)`.

// Crate imports
use crate::vec::StackVec;

// Core imports
use core::{
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

impl<T, I: SliceIndex<[T]>, const N: usize> Index<I> for StackVec<T, N> {
    type Output = I::Output;
    fn index(&self, i: I) -> &Self::Output {
        &self.as_slice()[i]
    }
}

impl<T, I: SliceIndex<[T]>, const N: usize> IndexMut<I> for StackVec<T, N> {
    fn index_mut(&mut self, i: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[i]
    }
}
