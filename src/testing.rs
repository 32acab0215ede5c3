// This file is part of stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Drop-tracking helpers shared by the unit tests.

// Imports
use alloc::{rc::Rc, vec::Vec};
use core::cell::RefCell;

/// Records the id of every [`Tracked`] value as it is dropped.
#[derive(Clone, Default)]
pub(crate) struct DropLog(Rc<RefCell<Vec<u32>>>);

impl DropLog {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn track(&self, id: u32) -> Tracked {
        Tracked {
            id,
            log: self.clone(),
        }
    }

    /// Ids dropped so far, in drop order.
    pub(crate) fn dropped(&self) -> Vec<u32> {
        self.0.borrow().clone()
    }

    pub(crate) fn count(&self) -> usize {
        self.0.borrow().len()
    }
}

/// A value that logs its id into a [`DropLog`] when dropped.
#[derive(Debug)]
pub(crate) struct Tracked {
    pub(crate) id: u32,
    log: DropLog,
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        self.log.track(self.id)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.log.0.borrow_mut().push(self.id);
    }
}

impl core::fmt::Debug for DropLog {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.0.borrow().iter()).finish()
    }
}
