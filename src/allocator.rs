// This file is part of hook-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pluggable raw allocation for owned storage.
//!
//! [`RawAlloc`] is a small allocate / reallocate / release interface, close in
//! shape to `core::alloc::GlobalAlloc` but reporting failure as `None` so the
//! vector can turn it into [`Error::OutOfMemory`](crate::Error::OutOfMemory)
//! instead of aborting. [`Global`] forwards to the platform heap allocator.
//!
//! The vector never asks for a zero-sized block.

// Core imports
use core::{alloc::Layout, ptr::NonNull};

/// Raw memory provider used by [`HookVec`](crate::HookVec) for owned storage.
///
/// # Safety
///
/// Implementors must return blocks that are valid for reads and writes of
/// `layout.size()` bytes and aligned to `layout.align()`, and must keep a block
/// valid until it is passed to [`release`](RawAlloc::release) or successfully
/// [`reallocate`](RawAlloc::reallocate)d. A failed `reallocate` must leave the
/// original block untouched and still valid.
pub unsafe trait RawAlloc {
    /// Allocates a block for `layout`. `layout.size()` is never zero.
    fn allocate(&self, layout: Layout) -> Option<NonNull<u8>>;

    /// Resizes `ptr` (allocated with `old`) to `new_size` bytes, same alignment.
    ///
    /// # Safety
    ///
    /// `ptr` must have been returned by this allocator for `old`, and
    /// `new_size` must be non-zero and not overflow `isize` once rounded to
    /// `old.align()`.
    unsafe fn reallocate(
        &self,
        ptr: NonNull<u8>,
        old: Layout,
        new_size: usize,
    ) -> Option<NonNull<u8>>;

    /// Returns `ptr` (allocated with `layout`) to the allocator.
    ///
    /// # Safety
    ///
    /// `ptr` must have been returned by this allocator for `layout` and not
    /// released since.
    unsafe fn release(&self, ptr: NonNull<u8>, layout: Layout);
}

/// The platform heap allocator (`alloc::alloc`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Global;

unsafe impl RawAlloc for Global {
    #[inline]
    fn allocate(&self, layout: Layout) -> Option<NonNull<u8>> {
        debug_assert!(layout.size() != 0);
        // SAFETY: callers never pass a zero-sized layout.
        NonNull::new(unsafe { alloc::alloc::alloc(layout) })
    }

    #[inline]
    unsafe fn reallocate(
        &self,
        ptr: NonNull<u8>,
        old: Layout,
        new_size: usize,
    ) -> Option<NonNull<u8>> {
        // SAFETY: forwarded from the caller's contract.
        let p = unsafe { alloc::alloc::realloc(ptr.as_ptr(), old, new_size) };
        NonNull::new(p)
    }

    #[inline]
    unsafe fn release(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY: forwarded from the caller's contract.
        unsafe { alloc::alloc::dealloc(ptr.as_ptr(), layout) }
    }
}
