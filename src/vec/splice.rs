// This file is part of hook-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{allocator::RawAlloc, error::Error, hooks::Hooks, vec::HookVec};

// Core imports
use core::ptr;

impl<T, H: Hooks<T>, A: RawAlloc> HookVec<'_, T, H, A> {
    /// Moves `src[first..last)` into `self` at `dst_pos` and compacts `src`.
    ///
    /// Elements are moved, not cloned, and never reach either vector's cleanup
    /// hook. The two vectors may use different hooks and allocators. Passing the
    /// same vector as both ends is ruled out by the borrow checker.
    ///
    /// Returns [`Error::OutOfBounds`] if `first > last`, `last > src.len()` or
    /// `dst_pos > self.len()`, or a growth error. On error neither vector is
    /// modified. An empty range is a no-op.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hook_vec::HookVec;
    ///
    /// let mut dst: HookVec<u8> = HookVec::new().unwrap();
    /// dst.array_copy(0, &[1, 5]).unwrap();
    /// let mut src: HookVec<u8> = HookVec::new().unwrap();
    /// src.array_copy(0, &[9, 2, 3, 4, 9]).unwrap();
    ///
    /// dst.merge_subvec(1, &mut src, 1, 4).unwrap();
    /// assert_eq!(dst.as_slice(), &[1, 2, 3, 4, 5]);
    /// assert_eq!(src.as_slice(), &[9, 9]);
    /// ```
    pub fn merge_subvec<H2: Hooks<T>, A2: RawAlloc>(
        &mut self,
        dst_pos: usize,
        src: &mut HookVec<'_, T, H2, A2>,
        first: usize,
        last: usize,
    ) -> Result<(), Error> {
        let src_len = src.len;
        if first > last || last > src_len {
            return Err(Error::OutOfBounds);
        }
        let count = last - first;
        self.prepare_insert(dst_pos, count)?;
        if count == 0 {
            return Ok(());
        }
        let len = self.len;
        // SAFETY: `self` has room for `count` more elements and the two buffers
        // are distinct (both vectors are uniquely borrowed). The moved run is
        // copied out bitwise before `src` closes the hole, and `src.len` drops
        // by `count`, so every element ends up owned exactly once.
        unsafe {
            let gap = self.as_mut_ptr().add(dst_pos);
            ptr::copy(gap, gap.add(count), len - dst_pos);
            let run = src.as_mut_ptr().add(first);
            ptr::copy_nonoverlapping(run, gap, count);
            ptr::copy(run.add(count), run, src_len - last);
        }
        self.len = len + count;
        src.len = src_len - count;
        Ok(())
    }
}
