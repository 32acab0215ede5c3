// This file is part of stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Slot-level primitives.
//!
//! These are the only places that initialize, move out of, drop, or shift
//! slots of the backing buffer. They never touch `len`; callers update it
//! according to the invariants documented in `vec.rs`.

// Crate imports
use crate::vec::StackVec;

// Core imports
use core::ptr;

impl<T, const N: usize> StackVec<T, N> {
    /// Initializes slot `i` with `value`.
    ///
    /// # Safety
    ///
    /// `i < N`, and slot `i` must not currently own a value (it is either in
    /// the uninitialized tail or its value has already been moved out).
    #[inline]
    pub(crate) unsafe fn write_at(&mut self, i: usize, value: T) {
        debug_assert!(i < N);
        // SAFETY: `i < N` per the caller contract.
        unsafe { self.buf.get_unchecked_mut(i) }.write(value);
    }

    /// Moves the value out of slot `i`, leaving the slot logically uninitialized.
    ///
    /// # Safety
    ///
    /// `i < N`, slot `i` must hold an initialized value, and the caller takes
    /// over responsibility for it: the slot must not be read or dropped again
    /// until it is rewritten.
    #[inline]
    pub(crate) unsafe fn read_at(&mut self, i: usize) -> T {
        debug_assert!(i < N);
        // SAFETY: `i < N` and the slot is initialized per the caller contract.
        unsafe { self.buf.get_unchecked(i).assume_init_read() }
    }

    /// Drops the values in slots `[start, end)` in ascending index order.
    ///
    /// If a destructor panics, the remaining slots in the range are still
    /// dropped before the panic propagates.
    ///
    /// # Safety
    ///
    /// `start <= end <= N`, every slot in the range must hold an initialized
    /// value, and none of them may be read or dropped again until rewritten.
    #[inline]
    pub(crate) unsafe fn drop_range(&mut self, start: usize, end: usize) {
        debug_assert!(start <= end && end <= N);
        // SAFETY: the range lies inside the buffer and holds initialized
        // values per the caller contract.
        unsafe {
            let first = self.as_mut_ptr().add(start);
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(first, end - start));
        }
    }

    /// Moves `count` slots starting at `src` to start at `dst`. The regions
    /// may overlap.
    ///
    /// Ownership moves with the bits: afterwards the destination slots own the
    /// values, and any source slot outside the destination region is
    /// logically uninitialized.
    ///
    /// # Safety
    ///
    /// `src + count <= N` and `dst + count <= N`. Destination slots outside
    /// the source region must not own values (they would be leaked).
    #[inline]
    pub(crate) unsafe fn move_slots(&mut self, src: usize, dst: usize, count: usize) {
        debug_assert!(src + count <= N && dst + count <= N);
        if count == 0 || src == dst {
            return;
        }
        // SAFETY: both regions lie inside the buffer per the caller contract;
        // `ptr::copy` handles overlap.
        unsafe {
            let base = self.as_mut_ptr();
            ptr::copy(base.add(src), base.add(dst), count);
        }
    }
}
