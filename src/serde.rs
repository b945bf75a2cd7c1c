// This file is part of hook-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`HookVec`](crate::HookVec).
//!
//! - **Serialize**: as a sequence of the live elements (length `len`).
//! - **Deserialize**: from any sequence, into an owned vector built from
//!   `H::default()` and `A::default()`.
//!
//! Hook and allocator values are not part of the serialized form, and the
//! storage mode is not preserved: a vector serialized from borrowed storage
//! comes back owned.

// Crate imports
use crate::{allocator::RawAlloc, hooks::Hooks, vec::HookVec};

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};

/// Upper bound on the up-front reservation taken from an untrusted size hint.
const MAX_PREALLOC: usize = 4096;

impl<T: Serialize, H: Hooks<T>, A: RawAlloc> Serialize for HookVec<'_, T, H, A> {
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

struct VecVisitor<'a, T, H, A>(PhantomData<(&'a mut T, H, A)>);

impl<'de, 'a, T, H, A> de::Visitor<'de> for VecVisitor<'a, T, H, A>
where
    T: Deserialize<'de>,
    H: Hooks<T> + Default,
    A: RawAlloc + Default,
{
    type Value = HookVec<'a, T, H, A>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an array or sequence")
    }

    fn visit_seq<S: de::SeqAccess<'de>>(self, mut seq: S) -> Result<Self::Value, S::Error> {
        let mut out = HookVec::<T, H, A>::default();
        if let Some(hint) = seq.size_hint() {
            out.reserve(hint.min(MAX_PREALLOC))
                .map_err(de::Error::custom)?;
        }
        while let Some(elem) = seq.next_element::<T>()? {
            out.push(elem).map_err(de::Error::custom)?;
        }
        Ok(out)
    }
}

impl<'de, T, H, A> Deserialize<'de> for HookVec<'_, T, H, A>
where
    T: Deserialize<'de>,
    H: Hooks<T> + Default,
    A: RawAlloc + Default,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(VecVisitor(PhantomData))
    }
}
