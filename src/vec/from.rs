// This file is part of stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::StackVec};

// Core imports
use core::mem::MaybeUninit;

impl<T, const N: usize> From<[T; N]> for StackVec<T, N> {
    fn from(src: [T; N]) -> Self {
        Self {
            buf: src.map(MaybeUninit::new),
            len: N,
        }
    }
}

impl<T: Clone, const N: usize> TryFrom<&[T]> for StackVec<T, N> {
    type Error = Error;

    /// Clones `src` into a new vector, or returns [`Error::Full`] if
    /// `src.len() > N`.
    fn try_from(src: &[T]) -> Result<Self, Error> {
        if src.len() > N {
            return Err(Error::Full);
        }
        let mut v = Self::new();
        v.extend_from_slice(src)?;
        Ok(v)
    }
}

impl<T, const N: usize> FromIterator<T> for StackVec<T, N> {
    /// Collecting into `StackVec<T, N>` takes at most the first `N` elements
    /// from the iterator and does not consume any further elements.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = Self::new();
        v.extend(iter);
        v
    }
}

impl<T, const N: usize> StackVec<T, N> {
    /// Tries to construct from an iterator, erroring with [`Error::Full`] if it would overflow.
    ///
    /// Semantics:
    /// - Elements are pushed in iterator order.
    /// - On the first element that would exceed capacity `N`, this returns `Err(Error::Full)`.
    /// - Elements pushed before the overflow are dropped with the partial vector.
    /// - The source iterator is not consumed past the first overflowing element.
    #[inline]
    pub fn try_from_iter<I: IntoIterator<Item = T>>(iter: I) -> Result<Self, Error> {
        let mut v = Self::new();
        for item in iter {
            v.push(item)?;
        }
        Ok(v)
    }
}
