// This file is part of stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `stack-vec`
//!
//! A `no_std`, fixed-capacity, inline vector type for **any** element type,
//! with exact control over when element destructors run.
//!
//! The core type, [`StackVec<T, N>`], stores up to `N` elements inline (no heap
//! allocation) and tracks a logical length `len ∈ 0..=N`. Only the prefix
//! `[0..len)` holds live values; the tail `[len..N)` is uninitialized memory
//! that is never read and never dropped.
//!
//! ## Ownership of elements
//!
//! At any time exactly one party is responsible for dropping a given element:
//!
//! - the [`StackVec`] itself, for every element in `[0..len)`;
//! - an [`IntoIter`], for every element it has not yet yielded;
//! - a [`Drain`], for every element of its range it has not yet yielded;
//! - the caller, for every element handed out by value (`pop`, `remove`,
//!   `swap_remove`, iteration).
//!
//! Removing elements (`truncate`, `clear`, dropping the vector) drops them in
//! ascending index order, exactly once. Abandoning an [`IntoIter`] or a
//! [`Drain`] part-way through still drops every un-yielded element exactly
//! once, and a dropped [`Drain`] always leaves its parent vector consistent.
//!
//! ## Errors and panics
//!
//! - Capacity failures never panic:
//!   - [`StackVec::push`] and [`StackVec::insert`] return a [`CapacityError`]
//!     that hands the rejected element back; the vector is unchanged.
//!   - [`StackVec::extend_from_slice`] and [`StackVec::try_extend_from_iter`]
//!     keep the prefix that fit and return an [`ExtendError`] saying how
//!     many elements were inserted; for iterators it also hands back the
//!     element that did not fit.
//!   - The `try_*` helpers return the small [`Error`] enum.
//! - Lookups and removals by an out-of-range index return `None`.
//! - Only **range/index misuse** panics, exactly like slices and `Vec`:
//!   `insert` past `len`, inverted or out-of-bounds `drain` ranges, and
//!   out-of-bounds `v[i]`.
//!
//! ## Features
//!
//! - `serde`
//!   - Enables `Serialize` / `Deserialize` for `StackVec<T, N>` as a sequence
//!     of at most `N` elements.
//!
//! ## Example
//!
//! ```rust
//! use stack_vec::StackVec;
//!
//! let mut v: StackVec<String, 4> = StackVec::new();
//! v.push("a".to_string()).unwrap();
//! v.push("b".to_string()).unwrap();
//! v.extend_from_slice(&["c".to_string()]).unwrap();
//!
//! let drained: Vec<String> = v.drain(..2).collect();
//! assert_eq!(drained, ["a", "b"]);
//! assert_eq!(v.as_slice(), &["c"]);
//! ```

#![cfg_attr(not(test), no_std)]

#[cfg(test)]
extern crate alloc;

// Modules
mod error;
mod index;
mod iter;
#[cfg(feature = "serde")]
mod serde;
#[cfg(test)]
mod testing;
mod vec;

// Public exports (crate API surface)
pub use error::{CapacityError, Error, ExtendError};
pub use iter::IntoIter;
pub use vec::{Drain, StackVec};
