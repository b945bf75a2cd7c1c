// This file is part of hook-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Instrumented hooks and allocators shared by the unit tests.

// Crate imports
use crate::{
    allocator::{Global, RawAlloc},
    hooks::{DeepCopy, ElementEq, Hooks},
};

// Core imports
use core::{
    alloc::Layout,
    cell::{Cell, RefCell},
    ptr::NonNull,
};

// Alloc imports
use alloc::{rc::Rc, vec::Vec};

/// Counters observed by [`CountingAlloc`].
#[derive(Debug, Default)]
pub(crate) struct AllocStats {
    pub allocs: Cell<usize>,
    pub reallocs: Cell<usize>,
    pub releases: Cell<usize>,
    /// Sum of the old block sizes passed to `reallocate`, in bytes.
    pub moved_bytes: Cell<usize>,
    /// When `Some(n)`, the next `n` requests succeed and every later one fails.
    pub budget: Cell<Option<usize>>,
}

impl AllocStats {
    fn take_budget(&self) -> bool {
        match self.budget.get() {
            None => true,
            Some(0) => false,
            Some(n) => {
                self.budget.set(Some(n - 1));
                true
            }
        }
    }

    pub fn fail_from_now(&self) {
        self.budget.set(Some(0));
    }
}

/// Delegates to [`Global`] while counting calls; can be told to fail.
#[derive(Debug, Clone, Default)]
pub(crate) struct CountingAlloc {
    pub stats: Rc<AllocStats>,
}

unsafe impl RawAlloc for CountingAlloc {
    fn allocate(&self, layout: Layout) -> Option<NonNull<u8>> {
        if !self.stats.take_budget() {
            return None;
        }
        self.stats.allocs.set(self.stats.allocs.get() + 1);
        Global.allocate(layout)
    }

    unsafe fn reallocate(
        &self,
        ptr: NonNull<u8>,
        old: Layout,
        new_size: usize,
    ) -> Option<NonNull<u8>> {
        if !self.stats.take_budget() {
            return None;
        }
        self.stats.reallocs.set(self.stats.reallocs.get() + 1);
        self.stats
            .moved_bytes
            .set(self.stats.moved_bytes.get() + old.size());
        unsafe { Global.reallocate(ptr, old, new_size) }
    }

    unsafe fn release(&self, ptr: NonNull<u8>, layout: Layout) {
        self.stats.releases.set(self.stats.releases.get() + 1);
        unsafe { Global.release(ptr, layout) }
    }
}

/// Records every element handed to the cleanup hook.
///
/// Deep copy fails for the value `FAIL_DEEP_COPY`.
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingHooks {
    pub cleaned: Rc<RefCell<Vec<i32>>>,
}

pub(crate) const FAIL_DEEP_COPY: i32 = -1;

impl RecordingHooks {
    pub fn cleaned(&self) -> Vec<i32> {
        self.cleaned.borrow().clone()
    }
}

impl Hooks<i32> for RecordingHooks {
    fn cleanup(&self, element: i32) {
        self.cleaned.borrow_mut().push(element);
    }
}

impl DeepCopy<i32> for RecordingHooks {
    fn deep_copy(&self, element: &i32) -> Option<i32> {
        (*element != FAIL_DEEP_COPY).then_some(*element)
    }
}

impl ElementEq<i32> for RecordingHooks {
    fn element_eq(&self, a: &i32, b: &i32) -> bool {
        a == b
    }
}

/// Growth factor 3, default capacity 2.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Triple;

impl<T> Hooks<T> for Triple {
    const GROWTH_FACTOR: usize = 3;
    const DEFAULT_CAPACITY: usize = 2;
}

/// Growth factor 1: capacity only ever grows to exactly what is needed.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Exact;

impl<T> Hooks<T> for Exact {
    const GROWTH_FACTOR: usize = 1;
}
