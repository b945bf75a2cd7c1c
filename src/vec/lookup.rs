// This file is part of hook-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    allocator::RawAlloc,
    error::Error,
    hooks::{DeepCopy, ElementEq, Hooks},
    vec::HookVec,
};

impl<T, H: DeepCopy<T>, A: RawAlloc> HookVec<'_, T, H, A> {
    /// Returns an independently owned copy of the element at `pos`, produced
    /// by the deep-copy hook. The vector is not modified.
    ///
    /// Returns [`Error::OutOfBounds`] if `pos >= len`, or
    /// [`Error::CallbackFailure`] if the hook declines.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hook_vec::{HookVec, StdHooks};
    ///
    /// let mut v: HookVec<String, StdHooks> = HookVec::new().unwrap();
    /// v.push(String::from("a")).unwrap();
    /// let copy = v.get_deepcopy(0).unwrap();
    /// assert_eq!(copy, "a");
    /// ```
    pub fn get_deepcopy(&self, pos: usize) -> Result<T, Error> {
        let element = self.get(pos).ok_or(Error::OutOfBounds)?;
        self.hooks.deep_copy(element).ok_or(Error::CallbackFailure)
    }
}

impl<T, H: ElementEq<T>, A: RawAlloc> HookVec<'_, T, H, A> {
    /// Returns the position of the first element equal to `needle` under the
    /// equality hook, or [`Error::NotFound`].
    pub fn find(&self, needle: &T) -> Result<usize, Error> {
        self.find_if(|element| self.hooks.element_eq(element, needle))
    }

    /// Shorthand for `self.find(needle).is_ok()`.
    #[inline]
    pub fn contains(&self, needle: &T) -> bool {
        self.find(needle).is_ok()
    }

    /// Number of elements equal to `needle` under the equality hook.
    pub fn count(&self, needle: &T) -> usize {
        self.iter()
            .filter(|element| self.hooks.element_eq(element, needle))
            .count()
    }
}

impl<T, H: Hooks<T>, A: RawAlloc> HookVec<'_, T, H, A> {
    /// Returns the position of the first element satisfying `pred`, scanning
    /// front to back, or [`Error::NotFound`].
    pub fn find_if<P: FnMut(&T) -> bool>(&self, pred: P) -> Result<usize, Error> {
        self.iter().position(pred).ok_or(Error::NotFound)
    }
}
