// This file is part of stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `StackVec`.
//!
//! - [`CapacityError`] is returned by single-element insertions and hands the
//!   rejected element back to the caller.
//! - [`ExtendError`] is returned by bulk insertions and reports how much of
//!   the source was inserted before capacity ran out. For iterator sources
//!   it also hands back the element that did not fit.
//! - [`Error`] is a small `Copy` enum for the `try_*` helpers.
//!
//! All of them implement `core::error::Error`.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by the `try_*` helpers of [`StackVec`](crate::StackVec).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The operation would exceed the fixed capacity (`N`).
    Full,
    /// An index or position was out of the current logical bounds.
    OutOfBounds,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => f.write_str("capacity exceeded"),
            Self::OutOfBounds => f.write_str("index out of bounds"),
        }
    }
}

impl CoreError for Error {}

/// A single-element insertion was attempted on a full vector.
///
/// The rejected element is carried inside the error, so nothing is lost:
///
/// ```
/// use stack_vec::StackVec;
///
/// let mut v: StackVec<String, 1> = StackVec::new();
/// v.push("kept".into()).unwrap();
/// let err = v.push("rejected".into()).unwrap_err();
/// assert_eq!(err.into_element(), "rejected");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CapacityError<T = ()> {
    element: T,
}

impl<T> CapacityError<T> {
    /// Wraps the element that did not fit.
    pub const fn new(element: T) -> Self {
        Self { element }
    }

    /// Returns a reference to the element that did not fit.
    pub fn element(&self) -> &T {
        &self.element
    }

    /// Extracts the element that did not fit.
    pub fn into_element(self) -> T {
        self.element
    }

    /// Drops the element, keeping only the error kind.
    pub fn simplify(self) -> CapacityError {
        CapacityError { element: () }
    }
}

impl<T> fmt::Display for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("insufficient capacity")
    }
}

// Not derived: `T` need not be `Debug`.
impl<T> fmt::Debug for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CapacityError: insufficient capacity")
    }
}

impl<T> CoreError for CapacityError<T> {}

impl<T> From<CapacityError<T>> for Error {
    fn from(_: CapacityError<T>) -> Self {
        Error::Full
    }
}

/// A bulk insertion ran out of capacity part-way through.
///
/// Bulk insertions have a partial effect: every element up to
/// [`inserted`](ExtendError::inserted) was pushed and stays in the vector.
/// When the source is an iterator, the element that was pulled but did not
/// fit is carried back like [`CapacityError`] does.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ExtendError<T = ()> {
    inserted: usize,
    rejected: Option<usize>,
    element: Option<T>,
}

impl ExtendError {
    pub(crate) const fn new(inserted: usize, rejected: Option<usize>) -> Self {
        Self {
            inserted,
            rejected,
            element: None,
        }
    }
}

impl<T> ExtendError<T> {
    pub(crate) fn with_element(inserted: usize, element: T) -> Self {
        Self {
            inserted,
            rejected: None,
            element: Some(element),
        }
    }

    /// Number of elements inserted before capacity ran out.
    ///
    /// This is also the index, in the source, of the first element that was
    /// not inserted.
    pub const fn inserted(&self) -> usize {
        self.inserted
    }

    /// Number of source elements that were not inserted, when the source
    /// length is known (slices). `None` for iterator sources, which are not
    /// consumed past the first element that did not fit.
    pub const fn rejected(&self) -> Option<usize> {
        self.rejected
    }

    /// Returns the element that was pulled from an iterator source but did
    /// not fit. `None` for slice sources.
    pub fn element(&self) -> Option<&T> {
        self.element.as_ref()
    }

    /// Extracts the element that did not fit, if any.
    pub fn into_element(self) -> Option<T> {
        self.element
    }

    /// Drops the element, keeping only the counts.
    pub fn simplify(self) -> ExtendError {
        ExtendError::new(self.inserted, self.rejected)
    }
}

impl<T> fmt::Display for ExtendError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "capacity exceeded after inserting {} elements",
            self.inserted
        )
    }
}

// Not derived: `T` need not be `Debug`.
impl<T> fmt::Debug for ExtendError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtendError")
            .field("inserted", &self.inserted)
            .field("rejected", &self.rejected)
            .field("element", &self.element.is_some())
            .finish()
    }
}

impl<T> CoreError for ExtendError<T> {}

impl<T> From<ExtendError<T>> for Error {
    fn from(_: ExtendError<T>) -> Self {
        Error::Full
    }
}
