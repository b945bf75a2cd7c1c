// This file is part of hook-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{allocator::RawAlloc, error::Error, hooks::Hooks, vec::HookVec};

// Core imports
use core::ptr;

impl<T, H: Hooks<T>, A: RawAlloc> HookVec<'_, T, H, A> {
    /// Ensures `capacity() >= min_capacity` without touching the elements.
    ///
    /// Allocates exactly `min_capacity` slots when growing. A borrowed vector is
    /// promoted to owned storage first. No-op if the capacity already suffices.
    ///
    /// Returns [`Error::OutOfMemory`] or [`Error::ArithmeticOverflow`]; on error
    /// the vector is unchanged.
    pub fn reserve(&mut self, min_capacity: usize) -> Result<(), Error> {
        if min_capacity <= self.capacity() {
            return Ok(());
        }
        self.relocate(min_capacity)
    }

    /// Growth entry point for every mutator that may need more room.
    ///
    /// The target is `max(capacity * GROWTH_FACTOR, min_capacity)`; the
    /// multiplication is checked and reported as [`Error::ArithmeticOverflow`].
    pub(crate) fn grow(&mut self, min_capacity: usize) -> Result<(), Error> {
        let cap = self.capacity();
        if min_capacity <= cap {
            return Ok(());
        }
        let grown = cap
            .checked_mul(H::GROWTH_FACTOR)
            .ok_or(Error::ArithmeticOverflow)?;
        self.relocate(grown.max(min_capacity))
    }

    /// Releases unused capacity so that `capacity() == len()`.
    ///
    /// An empty owned vector releases its buffer entirely. A borrowed vector is
    /// promoted first, unless it is already an exact fit.
    pub fn shrink_to_fit(&mut self) -> Result<(), Error> {
        if self.len == self.capacity() {
            return Ok(());
        }
        self.relocate(self.len)
    }

    /// Resizes to `new_len`, filling new slots with `T::default()`.
    ///
    /// Shrinking runs the cleanup hook on the removed tail.
    pub fn resize(&mut self, new_len: usize) -> Result<(), Error>
    where
        T: Default,
    {
        self.resize_with(new_len, T::default)
    }

    /// Resizes to `new_len`, filling new slots with values produced by `f`.
    ///
    /// Growth happens before any value is produced, so an allocation failure
    /// leaves the vector unchanged.
    pub fn resize_with<F: FnMut() -> T>(&mut self, new_len: usize, mut f: F) -> Result<(), Error> {
        if new_len <= self.len {
            self.truncate(new_len);
            return Ok(());
        }
        self.grow(new_len)?;
        let base = self.as_mut_ptr();
        while self.len < new_len {
            // SAFETY: `len < new_len <= capacity`, so the slot is in bounds and free.
            unsafe { ptr::write(base.add(self.len), f()) };
            self.len += 1;
        }
        Ok(())
    }
}
