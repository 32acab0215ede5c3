// This file is part of stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`StackVec`](crate::StackVec).
//!
//! - **Serialize**: as a sequence of the `len` live elements.
//! - **Deserialize**: from any sequence of at most `N` elements. Longer
//!   sequences are rejected; elements already read are dropped with the
//!   partially built vector.

// Crate imports
use crate::vec::StackVec;

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

impl<T: Serialize, const N: usize> Serialize for StackVec<T, N> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let sl = self.as_slice();
        let mut seq = s.serialize_seq(Some(sl.len()))?;
        for item in sl {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct VecVisitor<T, const N: usize>(PhantomData<T>);

impl<'de, T, const N: usize> de::Visitor<'de> for VecVisitor<T, N>
where
    T: Deserialize<'de>,
{
    type Value = StackVec<T, N>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "array or sequence with at most {} elements", N)
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut out = StackVec::<T, N>::new();
        while let Some(elem) = a.next_element::<T>()? {
            out.push(elem)
                .map_err(|_| de::Error::custom(format_args!("too many elements (capacity {N})")))?;
        }
        Ok(out)
    }
}

impl<'de, T, const N: usize> Deserialize<'de> for StackVec<T, N>
where
    T: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(VecVisitor::<T, N>(PhantomData))
    }
}
