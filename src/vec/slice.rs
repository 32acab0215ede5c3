// This file is part of stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::StackVec;

impl<T, const N: usize> StackVec<T, N> {
    /// Returns the initialized prefix `[0..len)` as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: By invariant, all elements in `buf[..self.len]` are initialized,
        // and `self.len <= N`, so this creates a valid shared slice of initialized `T`.
        unsafe { core::slice::from_raw_parts(self.as_ptr(), self.len) }
    }

    /// Returns the initialized prefix `[0..len)` as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: By invariant, all elements in `buf[..self.len]` are initialized,
        // and `self.len <= N`. We have exclusive access via `&mut self`, so it is
        // sound to create a mutable slice over `buf[..self.len]`.
        unsafe { core::slice::from_raw_parts_mut(self.as_mut_ptr(), self.len) }
    }

    /// Returns a raw pointer to the start of the backing storage.
    ///
    /// Only the first `len` elements are initialized. Code that dereferences
    /// this pointer must not read from `ptr.add(i)` for any `i >= self.len()`.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr() as *const T
    }

    /// Returns a mutable raw pointer to the start of the backing storage.
    ///
    /// Only the first `len` elements are initialized. Writing past `len` does
    /// **not** update `len`: such values are neither visible nor dropped by
    /// the vector.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr() as *mut T
    }
}

#[cfg(test)]
mod tests {
    use crate::vec::StackVec;

    #[test]
    fn test_as_ptr_and_as_mut_ptr() {
        let mut v: StackVec<u16, 4> = StackVec::from_iter([10, 20]);
        let p_const = v.as_ptr();
        let p_slice = v.as_slice().as_ptr();
        assert_eq!(p_const, p_slice);

        let p_mut = v.as_mut_ptr();
        let p_mut_slice = v.as_mut_slice().as_mut_ptr();
        assert_eq!(p_mut, p_mut_slice);

        v.as_mut_slice()[1] = 21;
        assert_eq!(v.as_slice(), &[10, 21]);
    }

    #[test]
    fn test_slices_cover_only_initialized_prefix() {
        let mut v: StackVec<u8, 8> = StackVec::new();
        assert!(v.as_slice().is_empty());
        v.push(3).unwrap();
        assert_eq!(v.as_slice().len(), 1);
        assert_eq!(v.as_mut_slice().len(), 1);
    }
}
