// This file is part of stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::StackVec;

impl<T, const N: usize> StackVec<T, N> {
    /// Removes and returns the element at `index`, shifting subsequent elements left.
    ///
    /// Returns `None` if `index >= len`.
    #[inline]
    pub fn remove(&mut self, index: usize) -> Option<T> {
        let len = self.len;
        if index >= len {
            return None;
        }

        // SAFETY: `index < len`, so `buf[index]` holds a value; moving it out
        // leaves a hole that the tail `[index+1..len)` is shifted over.
        let out = unsafe {
            let out = self.read_at(index);
            self.move_slots(index + 1, index, len - index - 1);
            out
        };

        self.len = len - 1;
        Some(out)
    }

    /// Removes and returns the element at `index` by moving the last element
    /// into its place.
    ///
    /// Does not preserve order. Returns `None` when `index >= len`. Removing
    /// the last element avoids the move.
    #[inline]
    pub fn swap_remove(&mut self, index: usize) -> Option<T> {
        let len = self.len;
        if index >= len {
            return None;
        }
        let last = len - 1;

        // SAFETY: `index <= last < len`, so both slots hold values. After
        // moving `buf[index]` out, the last value is moved into the hole and
        // slot `last` leaves the live prefix.
        let out = unsafe {
            let out = self.read_at(index);
            self.move_slots(last, index, 1);
            out
        };

        self.len = last;
        Some(out)
    }
}

#[cfg(test)]
mod tests {
    use crate::vec::StackVec;

    #[test]
    fn test_remove_first_and_last() {
        let mut v: StackVec<i32, 5> = [1, 2, 3, 4, 5].into();
        assert_eq!(v.remove(0), Some(1));
        assert_eq!(v.remove(v.len() - 1), Some(5));
        assert_eq!(v.as_slice(), &[2, 3, 4]);
    }

    #[test]
    fn test_swap_remove_last_index_does_not_swap() {
        let mut v: StackVec<i32, 4> = StackVec::from_iter([10, 20, 30]);
        assert_eq!(v.swap_remove(2), Some(30));
        assert_eq!(v.as_slice(), &[10, 20]);
    }

    #[test]
    fn test_swap_remove_first_and_last() {
        let mut v: StackVec<i32, 4> = [10, 20, 30, 40].into();
        assert_eq!(v.swap_remove(0), Some(10));
        assert_eq!(v.as_slice(), &[40, 20, 30]);
        assert_eq!(v.swap_remove(2), Some(30));
        assert_eq!(v.as_slice(), &[40, 20]);
    }
}
