// This file is part of stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate import
use crate::vec::StackVec;

impl<T, const N: usize> StackVec<T, N> {
    /// Retains only the elements for which `f` returns `true`, preserving order.
    ///
    /// The predicate is applied to each element in index order, and each
    /// rejected element is dropped right after its predicate call. If `f` or a
    /// destructor panics, the vector is left holding the retained elements
    /// followed by the unvisited ones.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut f: F) {
        // While the guard is alive the vector's visible length is 0; the
        // guard owns `[0..write)` (kept) and `[read..len)` (unvisited).
        struct Compact<'a, T, const N: usize> {
            v: &'a mut StackVec<T, N>,
            read: usize,
            write: usize,
            len: usize,
        }

        impl<T, const N: usize> Drop for Compact<'_, T, N> {
            fn drop(&mut self) {
                let rest = self.len - self.read;
                // SAFETY: `[read..len)` holds unvisited values and `[write..read)`
                // holds none, so sliding the rest down closes the gap.
                unsafe { self.v.move_slots(self.read, self.write, rest) };
                self.v.len = self.write + rest;
            }
        }

        let len = self.len;
        self.len = 0;
        let mut g = Compact {
            v: self,
            read: 0,
            write: 0,
            len,
        };

        while g.read < g.len {
            let i = g.read;
            // SAFETY: `i < len` and the slot hasn't been visited, so it holds a value.
            let keep = f(unsafe { &*g.v.as_ptr().add(i) });
            g.read = i + 1;
            if keep {
                // SAFETY: `write <= i`, and `[write..i)` holds no values.
                unsafe { g.v.move_slots(i, g.write, 1) };
                g.write += 1;
            } else {
                // SAFETY: slot `i` holds a value that is now outside both
                // owned ranges.
                unsafe { g.v.drop_range(i, i + 1) };
            }
        }
    }
}
