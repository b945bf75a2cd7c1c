// This file is part of hook-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{allocator::RawAlloc, error::Error, hooks::Hooks, vec::HookVec};

impl<T, H: Hooks<T>, A: RawAlloc> HookVec<'_, T, H, A> {
    /// Exchanges the elements at `i` and `j` in place.
    ///
    /// Returns [`Error::OutOfBounds`] if either index is not live; `i == j` is
    /// accepted and does nothing.
    #[inline]
    pub fn swap_elements(&mut self, i: usize, j: usize) -> Result<(), Error> {
        if i >= self.len || j >= self.len {
            return Err(Error::OutOfBounds);
        }
        self.as_mut_slice().swap(i, j);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, HookVec};

    #[test]
    fn test_swap_elements() {
        let mut v: HookVec<i32> = HookVec::new().unwrap();
        v.array_copy(0, &[1, 2, 3]).unwrap();
        v.swap_elements(0, 2).unwrap();
        assert_eq!(v.as_slice(), &[3, 2, 1]);
        v.swap_elements(1, 1).unwrap();
        assert_eq!(v.as_slice(), &[3, 2, 1]);
        assert_eq!(v.swap_elements(0, 3), Err(Error::OutOfBounds));
        assert_eq!(v.swap_elements(3, 0), Err(Error::OutOfBounds));
        assert_eq!(v.as_slice(), &[3, 2, 1]);
    }
}
