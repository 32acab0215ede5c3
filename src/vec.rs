// This file is part of stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `StackVec` type and its inherent API.
//!
//! `StackVec<T, N>` is a fixed-capacity vector for arbitrary element types.
//! It stores elements inline in a `[MaybeUninit<T>; N]` buffer and tracks a
//! logical length. Methods mirror slice/`Vec` semantics, with explicit
//! capacity checks and fallible variants where appropriate.
//!
//! No heap allocations are performed.

// Invariants:
// - `0 <= len <= N` always holds.
// - Slots in `buf[..len]` hold initialized `T` values owned by the vector.
// - Slots in `buf[len..N]` are logically uninitialized; they are never read
//   as `T` and never dropped.
// - Slots are only written, moved out, dropped or shifted through the helpers
//   in `raw`, so each initialized value is finalized exactly once.

mod drain;
mod extend;
mod from;
mod insert;
mod into_array;
mod new;
mod pop;
mod push;
mod raw;
mod remove;
mod retain;
mod slice;
mod split_off;
mod truncate;

pub use drain::Drain;

// Crate imports
use crate::error::Error;

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    mem::MaybeUninit,
    ops::{Deref, DerefMut},
};

/// A fixed-capacity vector with inline storage.
///
/// `StackVec<T, N>` stores up to `N` elements inline and tracks a logical
/// length `len ∈ 0..=N`:
///
/// - capacity is known at compile time (`N`) and never changes;
/// - the buffer is stored inline (typically on the stack);
/// - any `T` is accepted, including types with destructors;
/// - only the prefix `[0..len)` is initialized and visible;
/// - no heap allocations are performed.
///
/// # Element lifetimes
///
/// Every element stored in the vector is dropped exactly once:
///
/// - [`truncate`](StackVec::truncate), [`clear`](StackVec::clear) and dropping
///   the vector drop the removed elements in ascending index order;
/// - [`pop`](StackVec::pop), [`remove`](StackVec::remove) and
///   [`swap_remove`](StackVec::swap_remove) hand the element to the caller
///   without dropping it;
/// - [`IntoIter`](crate::IntoIter) and [`Drain`] drop whatever they did not
///   yield when they are dropped.
///
/// # Fallible vs truncating operations
///
/// - **Fallible, no change on error**: [`push`](StackVec::push) and
///   [`insert`](StackVec::insert) return a [`CapacityError`](crate::CapacityError)
///   carrying the rejected element; [`resize`](StackVec::resize),
///   [`TryFrom<&[T]>`](TryFrom), [`try_from_iter`](StackVec::try_from_iter)
///   and [`split_off`](StackVec::split_off) return [`Error`].
/// - **Fallible, partial effect**: [`extend_from_slice`](StackVec::extend_from_slice)
///   and [`try_extend_from_iter`](StackVec::try_extend_from_iter) keep the
///   prefix that fit and return an [`ExtendError`](crate::ExtendError).
/// - **Truncating**: [`push_truncated`](StackVec::push_truncated),
///   [`extend_from_slice_truncated`](StackVec::extend_from_slice_truncated),
///   [`Extend<T>`](core::iter::Extend) and
///   [`FromIterator<T>`](core::iter::FromIterator).
///
/// # Complexity
///
/// - The type size is roughly `N * size_of::<T>() + size_of::<usize>()`, and
///   moving a `StackVec` moves the whole buffer. Pass it by reference in hot
///   code.
/// - [`new`](StackVec::new) does not touch the buffer.
/// - `push`, `pop`, `swap_remove` are `O(1)`; `insert`, `remove`, `drain`,
///   `retain`, `truncate` are `O(len)`.
///
/// # Examples
///
/// ```rust
/// use stack_vec::StackVec;
///
/// let mut v: StackVec<i32, 4> = StackVec::new();
/// for x in 1..=4 {
///     v.push(x).unwrap();
/// }
/// assert!(v.push(5).is_err());
/// assert_eq!(v.remove(1), Some(2));
/// assert_eq!(v.drain(0..2).collect::<Vec<_>>(), [1, 3]);
/// assert_eq!(v.as_slice(), &[4]);
/// ```
pub struct StackVec<T, const N: usize> {
    pub(crate) buf: [MaybeUninit<T>; N],
    pub(crate) len: usize,
}

impl<T, const N: usize> StackVec<T, N> {
    /// The fixed capacity of this vector.
    pub const CAPACITY: usize = N;

    /// Returns the capacity of this vector (always `N`).
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the current logical length (`0..=N`).
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `len == N`.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Returns `N - len`, the number of additional elements that can be pushed.
    #[inline]
    pub const fn remaining_capacity(&self) -> usize {
        N - self.len
    }

    /// Returns `Some(&T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Returns `Some(&mut T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }

    // iterators
    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the last element, if any.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns the first element mutably, if any.
    #[inline]
    pub fn first_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// Returns the last element mutably, if any.
    #[inline]
    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// Fallible variant of [`remove`](StackVec::remove), returning
    /// [`Error::OutOfBounds`] when `index >= len`.
    #[inline]
    pub fn try_remove(&mut self, index: usize) -> Result<T, Error> {
        self.remove(index).ok_or(Error::OutOfBounds)
    }

    /// Fallible variant of [`swap_remove`](StackVec::swap_remove), returning
    /// [`Error::OutOfBounds`] when `index >= len`.
    #[inline]
    pub fn try_swap_remove(&mut self, index: usize) -> Result<T, Error> {
        self.swap_remove(index).ok_or(Error::OutOfBounds)
    }

    /// Returns `true` if the vector contains `x` (linear search on the initialized prefix).
    #[inline]
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(x)
    }
}

impl<T, const N: usize> Drop for StackVec<T, N> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone, const N: usize> Clone for StackVec<T, N> {
    fn clone(&self) -> Self {
        let mut out = Self::new();
        // `self.len() <= N`, so everything fits.
        let copied = out.extend_from_slice_truncated(self.as_slice());
        debug_assert_eq!(copied, self.len());
        out
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for StackVec<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StackVec")
            .field("len", &self.len)
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq, const N: usize> PartialEq for StackVec<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: PartialEq, const N: usize> PartialEq<[T]> for StackVec<T, N> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}
impl<T: Eq, const N: usize> Eq for StackVec<T, N> {}
impl<T: Ord, const N: usize> Ord for StackVec<T, N> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd, const N: usize> PartialOrd for StackVec<T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash, const N: usize> Hash for StackVec<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T, const N: usize> Deref for StackVec<T, N> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T, const N: usize> DerefMut for StackVec<T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> AsRef<[T]> for StackVec<T, N> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, const N: usize> AsMut<[T]> for StackVec<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T, const N: usize> Borrow<[T]> for StackVec<T, N> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, const N: usize> BorrowMut<[T]> for StackVec<T, N> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::StackVec;
    use crate::{testing::DropLog, CapacityError, Error, ExtendError};
    use alloc::{string::String, vec::Vec};

    #[test]
    fn test_push_pop() {
        let mut v: StackVec<u8, 2> = StackVec::new();
        v.push(1).unwrap();
        v.push(2).unwrap();
        assert!(v.push(9).is_err());
        assert_eq!(v.pop(), Some(2));
        assert_eq!(v.pop(), Some(1));
        assert_eq!(v.pop(), None);
    }

    #[test]
    fn test_default_and_capacity() {
        let v: StackVec<i32, 4> = StackVec::default();
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), 4);
        assert!(v.is_empty());
        assert_eq!(v.remaining_capacity(), 4);
        assert_eq!(StackVec::<i32, 4>::CAPACITY, 4);
    }

    #[test]
    fn test_worked_scenario_capacity_four() {
        let mut v: StackVec<i32, 4> = StackVec::new();
        for x in [1, 2, 3, 4] {
            assert_eq!(v.push(x), Ok(()));
        }
        assert_eq!(v.len(), 4);

        let err = v.push(5).unwrap_err();
        assert_eq!(err.into_element(), 5);
        assert_eq!(v.as_slice(), &[1, 2, 3, 4]);

        assert_eq!(v.remove(1), Some(2));
        assert_eq!(v.as_slice(), &[1, 3, 4]);
        assert_eq!(v.len(), 3);

        let drained: Vec<_> = v.drain(0..2).collect();
        assert_eq!(drained, [1, 3]);
        assert_eq!(v.as_slice(), &[4]);
        assert_eq!(v.len(), 1);
    }

    #[test]
    fn test_push_fills_to_capacity_then_fails_unchanged() {
        let mut v: StackVec<String, 3> = StackVec::new();
        for (pushed, s) in ["a", "b", "c"].into_iter().enumerate() {
            v.push(s.into()).unwrap();
            assert_eq!(v.len(), pushed + 1);
        }
        let err = v.push("d".into()).unwrap_err();
        assert_eq!(err.element(), "d");
        assert_eq!(v.len(), 3);
        assert!(v.is_full());
        assert_eq!(v.as_slice(), &["a", "b", "c"]);
    }

    #[test]
    fn test_push_then_pop_round_trips() {
        let mut v: StackVec<String, 4> = StackVec::new();
        v.push("x".into()).unwrap();
        let before = v.len();
        v.push("y".into()).unwrap();
        assert_eq!(v.pop().as_deref(), Some("y"));
        assert_eq!(v.len(), before);
    }

    #[test]
    fn test_insert_then_remove_restores_sequence() {
        let mut v: StackVec<i32, 5> = StackVec::from_iter([10, 20, 30]);
        for i in 0..=v.len() {
            v.insert(i, 99).unwrap();
            assert_eq!(v.remove(i), Some(99));
            assert_eq!(v.as_slice(), &[10, 20, 30]);
        }
    }

    #[test]
    fn test_insert_remove_and_swap_remove() {
        let mut v: StackVec<i32, 5> = StackVec::from_iter([10, 20, 30]);
        v.insert(1, 15).unwrap();
        assert_eq!(v.as_slice(), &[10, 15, 20, 30]);
        v.insert(4, 35).unwrap();
        assert_eq!(v.as_slice(), &[10, 15, 20, 30, 35]);
        assert_eq!(v.insert(0, 0), Err(CapacityError::new(0)));

        let mut r: StackVec<i32, 5> = StackVec::from([1, 2, 3, 4, 5]);
        assert_eq!(r.remove(2), Some(3));
        assert_eq!(r.as_slice(), &[1, 2, 4, 5]);
        assert_eq!(r.try_remove(8), Err(Error::OutOfBounds));

        let mut s: StackVec<i32, 5> = StackVec::from([1, 2, 3, 4, 5]);
        assert_eq!(s.swap_remove(1), Some(2));
        assert_eq!(s.as_slice(), &[1, 5, 3, 4]);
        assert_eq!(s.try_swap_remove(10), Err(Error::OutOfBounds));
    }

    #[test]
    fn test_remove_and_swap_remove_oob_return_none() {
        let mut v: StackVec<i32, 2> = StackVec::from_iter([1, 2]);
        assert_eq!(v.remove(5), None);
        assert_eq!(v.swap_remove(2), None);
        assert_eq!(v.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_contains_and_getters() {
        let mut v: StackVec<i32, 4> = StackVec::from_iter([7, 8, 9]);
        assert!(v.contains(&7));
        assert!(!v.contains(&10));
        assert_eq!(v.first(), Some(&7));
        assert_eq!(v.last(), Some(&9));
        assert_eq!(v.get(1), Some(&8));
        assert_eq!(v.get(3), None);
        *v.get_mut(1).unwrap() = 80;
        assert_eq!(v.as_slice(), &[7, 80, 9]);
        *v.first_mut().unwrap() = 70;
        *v.last_mut().unwrap() = 90;
        assert_eq!(v.as_slice(), &[70, 80, 90]);
    }

    #[test]
    fn test_deref_and_as_ref() {
        let mut v: StackVec<i32, 3> = StackVec::from_iter([1, 2]);
        let s: &[i32] = &v;
        assert_eq!(s, &[1, 2]);
        let smut: &mut [i32] = &mut v;
        smut[1] = 22;
        assert_eq!(v.as_slice(), &[1, 22]);
        let aref: &[i32] = v.as_ref();
        assert_eq!(aref, &[1, 22]);
        let amut: &mut [i32] = v.as_mut();
        amut[0] = 11;
        assert_eq!(v.as_slice(), &[11, 22]);
        assert!(v == [11, 22][..]);
    }

    #[test]
    fn test_borrow_and_borrow_mut_behave_like_slice() {
        use core::borrow::{Borrow, BorrowMut};

        let mut v: StackVec<u8, 4> = StackVec::from_iter([1, 2, 3]);
        let b: &[u8] = v.borrow();
        assert_eq!(b, &[1, 2, 3]);
        let bm: &mut [u8] = v.borrow_mut();
        bm.reverse();
        assert_eq!(v.as_slice(), &[3, 2, 1]);
    }

    #[test]
    fn test_eq_ord_partial_ord_hash_via_slice() {
        use core::cmp::Ordering;
        use core::hash::{Hash, Hasher};
        use std::collections::hash_map::DefaultHasher;

        let a: StackVec<i32, 4> = StackVec::from_iter([1, 2, 3]);
        let b: StackVec<i32, 4> = StackVec::from_iter([1, 2, 3]);
        let c: StackVec<i32, 4> = StackVec::from_iter([1, 2, 4]);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.cmp(&b), Ordering::Equal);
        assert_eq!(a.partial_cmp(&c), Some(Ordering::Less));

        let mut ha = DefaultHasher::new();
        a.hash(&mut ha);
        let mut hb = DefaultHasher::new();
        [1, 2, 3][..].hash(&mut hb);
        assert_eq!(ha.finish(), hb.finish());
    }

    #[test]
    fn test_debug_structure() {
        use alloc::format;
        let v: StackVec<i32, 5> = StackVec::from_iter([1, 2]);
        let dbg = format!("{v:?}");
        assert!(dbg.contains("StackVec"));
        assert!(dbg.contains("len"));
        assert!(dbg.contains("elements"));
        assert!(dbg.contains("[1, 2]"));
    }

    #[test]
    fn test_clone_is_independent_copy() {
        let mut a: StackVec<String, 4> = StackVec::new();
        a.push("one".into()).unwrap();
        a.push("two".into()).unwrap();
        let mut b = a.clone();
        assert_eq!(a, b);
        b[0].push('!');
        b.pop();
        assert_eq!(a.as_slice(), &["one", "two"]);
        assert_eq!(b.as_slice(), &["one!"]);
    }

    #[test]
    fn test_drop_runs_each_destructor_once_in_index_order() {
        let log = DropLog::new();
        {
            let mut v: StackVec<_, 5> = StackVec::new();
            for id in 0..4 {
                v.push(log.track(id)).unwrap();
            }
            assert_eq!(log.count(), 0);
        }
        assert_eq!(log.dropped(), [0, 1, 2, 3]);
    }

    #[test]
    fn test_popped_and_removed_values_are_owned_by_caller() {
        let log = DropLog::new();
        let mut v: StackVec<_, 4> = StackVec::new();
        for id in 0..4 {
            v.push(log.track(id)).unwrap();
        }
        let popped = v.pop().unwrap();
        let removed = v.remove(0).unwrap();
        let swapped = v.swap_remove(0).unwrap();
        assert_eq!(log.count(), 0);
        assert_eq!((popped.id, removed.id, swapped.id), (3, 0, 1));
        assert_eq!(v.len(), 1);

        drop(removed);
        assert_eq!(log.dropped(), [0]);
        drop(v);
        assert_eq!(log.dropped(), [0, 2]);
        drop((popped, swapped));
        assert_eq!(log.count(), 4);
    }

    #[test]
    fn test_rejected_push_does_not_drop_value() {
        let log = DropLog::new();
        let mut v: StackVec<_, 1> = StackVec::new();
        v.push(log.track(1)).unwrap();
        let err = v.push(log.track(2)).unwrap_err();
        assert_eq!(log.count(), 0);
        let back = err.into_element();
        assert_eq!(back.id, 2);
        drop(back);
        assert_eq!(log.dropped(), [2]);
    }

    #[test]
    fn test_zero_capacity_vec_behaves() {
        let mut v: StackVec<u8, 0> = StackVec::new();
        assert_eq!(v.capacity(), 0);
        assert!(v.is_empty());
        assert!(v.is_full());

        assert_eq!(v.push(1), Err(CapacityError::new(1)));
        assert_eq!(
            v.extend_from_slice(&[1, 2]),
            Err(ExtendError::new(0, Some(2)))
        );
        assert_eq!(v.extend_from_slice_truncated(&[1, 2, 3]), 0);
        assert_eq!(v.resize(0, 9), Ok(()));
        assert_eq!(v.resize(1, 9), Err(Error::Full));
        assert_eq!(v.pop(), None);

        let arr = v.into_array().unwrap();
        assert_eq!(arr.len(), 0);
    }

    #[test]
    fn test_zero_sized_type_supports_capacity() {
        let mut v: StackVec<(), 4> = StackVec::new();
        v.push(()).unwrap();
        v.push(()).unwrap();
        assert_eq!(v.len(), 2);
        v.truncate(1);
        assert_eq!(v.len(), 1);
        v.resize(4, ()).unwrap();
        assert!(v.is_full());
        assert_eq!(v.into_array().unwrap().len(), 4);
    }
}
