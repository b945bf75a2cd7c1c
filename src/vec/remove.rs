// This file is part of hook-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{allocator::RawAlloc, error::Error, hooks::Hooks, vec::HookVec};

// Core imports
use core::ptr;

impl<T, H: Hooks<T>, A: RawAlloc> HookVec<'_, T, H, A> {
    /// Removes and returns the element at `pos`, shifting `[pos + 1, len)` left.
    ///
    /// Ownership goes to the caller; the cleanup hook does not run. Returns
    /// [`Error::OutOfBounds`] if `pos >= len`.
    pub fn pop_at(&mut self, pos: usize) -> Result<T, Error> {
        let len = self.len;
        if pos >= len {
            return Err(Error::OutOfBounds);
        }
        // SAFETY: `pos < len`, so the slot is initialized; it is read once and
        // then overwritten by the shifted tail (or left past the new `len`).
        let out = unsafe {
            let p = self.as_mut_ptr().add(pos);
            let out = ptr::read(p);
            ptr::copy(p.add(1), p, len - pos - 1);
            out
        };
        self.len = len - 1;
        Ok(out)
    }

    /// Removes and returns the last element. [`Error::OutOfBounds`] when empty.
    #[inline]
    pub fn pop(&mut self) -> Result<T, Error> {
        match self.len {
            0 => Err(Error::OutOfBounds),
            len => self.pop_at(len - 1),
        }
    }

    /// Removes the element at `pos` and hands it to the cleanup hook.
    pub fn discard_at(&mut self, pos: usize) -> Result<(), Error> {
        let element = self.pop_at(pos)?;
        self.hooks.cleanup(element);
        Ok(())
    }

    /// Removes the last element and hands it to the cleanup hook.
    pub fn discard(&mut self) -> Result<(), Error> {
        let element = self.pop()?;
        self.hooks.cleanup(element);
        Ok(())
    }

    /// Removes the element at `pos` through the cleanup hook.
    ///
    /// Returns [`Error::OutOfBounds`] if `pos >= len`.
    #[inline]
    pub fn erase(&mut self, pos: usize) -> Result<(), Error> {
        if pos >= self.len {
            return Err(Error::OutOfBounds);
        }
        self.erase_range(pos, pos + 1)
    }

    /// Removes `[first, last)` through the cleanup hook and shifts the tail left.
    ///
    /// Returns [`Error::OutOfBounds`] if `first > last` or `last > len`. An
    /// empty range (`first == last <= len`) is a no-op.
    pub fn erase_range(&mut self, first: usize, last: usize) -> Result<(), Error> {
        let len = self.len;
        if first > last || last > len {
            return Err(Error::OutOfBounds);
        }
        if first == last {
            return Ok(());
        }
        // A panicking hook leaks the rest of the range and the tail.
        self.len = first;
        let base = self.as_mut_ptr();
        for i in first..last {
            // SAFETY: `i < len`, each slot is read exactly once.
            let element = unsafe { ptr::read(base.add(i)) };
            self.hooks.cleanup(element);
        }
        // SAFETY: `[last, len)` is initialized and moves down into the hole.
        unsafe { ptr::copy(base.add(last), base.add(first), len - last) };
        self.len = len - (last - first);
        Ok(())
    }

    /// Shortens the vector to `new_len`, running the cleanup hook on the removed
    /// tail. No-op if `new_len >= len`. Capacity is kept.
    pub fn truncate(&mut self, new_len: usize) {
        let len = self.len;
        if new_len >= len {
            return;
        }
        self.len = new_len;
        let base = self.as_mut_ptr();
        for i in new_len..len {
            // SAFETY: `i < len`, each slot is read exactly once.
            let element = unsafe { ptr::read(base.add(i)) };
            self.hooks.cleanup(element);
        }
    }

    /// Runs the cleanup hook on every element; capacity is kept.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }
}
