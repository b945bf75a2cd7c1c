// This file is part of hook-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Invariants for the storage backend:
// - Borrowed: `buf` is the caller's, `capacity == buf.len()`, never released.
// - Owned with `cap > 0` (and `T` not zero-sized): `ptr` was returned by
//   `self.alloc` for `Layout::array::<T>(cap)`.
// - Owned with `cap == 0`: `ptr` is dangling and nothing is allocated.
// - Elements in `[0, len)` are initialized; `[len, capacity)` are not.

// Crate imports
use crate::{
    allocator::RawAlloc,
    error::Error,
    hooks::Hooks,
    vec::{HookVec, Storage},
};

// Core imports
use core::{alloc::Layout, marker::PhantomData, mem::MaybeUninit, ptr, ptr::NonNull, slice};

impl<'a, T, H: Hooks<T>, A: RawAlloc> HookVec<'a, T, H, A> {
    pub(crate) const IS_ZST: bool = size_of::<T>() == 0;

    const TUNING_OK: () = assert!(
        H::GROWTH_FACTOR >= 1 && H::DEFAULT_CAPACITY > 0,
        "Hooks::GROWTH_FACTOR must be >= 1 and Hooks::DEFAULT_CAPACITY must be > 0"
    );

    /// An owned vector with nothing allocated.
    pub(crate) fn unallocated_in(hooks: H, alloc: A) -> Self {
        let () = Self::TUNING_OK;
        let cap = if Self::IS_ZST { usize::MAX } else { 0 };
        Self {
            storage: Storage::Owned {
                ptr: NonNull::dangling(),
                cap,
            },
            len: 0,
            hooks,
            alloc,
            _owns: PhantomData,
        }
    }

    /// Creates an owned vector with room for `capacity` elements, using the
    /// given hooks and allocator.
    ///
    /// A `capacity` of `0` means [`Hooks::DEFAULT_CAPACITY`].
    ///
    /// Returns [`Error::OutOfMemory`] if the allocator fails and
    /// [`Error::ArithmeticOverflow`] if the buffer size overflows.
    pub fn with_capacity_in(capacity: usize, hooks: H, alloc: A) -> Result<Self, Error> {
        let capacity = if capacity == 0 {
            H::DEFAULT_CAPACITY
        } else {
            capacity
        };
        let mut v = Self::unallocated_in(hooks, alloc);
        v.relocate(capacity)?;
        Ok(v)
    }

    /// Adopts `buf` as fixed initial storage, using the given hooks and allocator.
    ///
    /// The vector starts empty with `capacity == buf.len()`. It never releases
    /// `buf`; once it needs more room it moves its elements into owned storage
    /// and stops touching `buf` altogether.
    pub fn from_borrowed_in(buf: &'a mut [MaybeUninit<T>], hooks: H, alloc: A) -> Self {
        let () = Self::TUNING_OK;
        Self {
            storage: Storage::Borrowed(buf),
            len: 0,
            hooks,
            alloc,
            _owns: PhantomData,
        }
    }

    /// Raw pointer to the first slot. Dangling but aligned when nothing is
    /// allocated.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        match &self.storage {
            Storage::Borrowed(buf) => buf.as_ptr().cast(),
            Storage::Owned { ptr, .. } => ptr.as_ptr(),
        }
    }

    /// Mutable raw pointer to the first slot. See [`as_ptr`](Self::as_ptr).
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        match &mut self.storage {
            Storage::Borrowed(buf) => buf.as_mut_ptr().cast(),
            Storage::Owned { ptr, .. } => ptr.as_ptr(),
        }
    }

    /// Returns the live elements `[0, len)` as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[0, len)` is initialized and `as_ptr` is non-null and aligned
        // even when nothing is allocated.
        unsafe { slice::from_raw_parts(self.as_ptr(), self.len) }
    }

    /// Returns the live elements `[0, len)` as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as above; `&mut self` gives exclusive access.
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), self.len) }
    }

    /// Moves the vector out of borrowed storage into owned storage of the same
    /// capacity.
    ///
    /// Returns [`Error::InvalidArgument`] if the storage is already owned. On
    /// allocation failure the vector is left exactly as it was, still borrowed.
    pub fn promote(&mut self) -> Result<(), Error> {
        if !self.is_borrowed() {
            return Err(Error::InvalidArgument);
        }
        self.relocate(self.capacity())
    }

    /// Disposes of every element through the cleanup hook and releases owned
    /// storage.
    ///
    /// An owned vector ends up with capacity `0`; a borrowed one keeps its
    /// buffer and capacity and is simply emptied. Either way it stays usable.
    pub fn cleanup(&mut self) {
        self.truncate(0);
        self.release_owned();
    }

    #[inline]
    pub(crate) fn layout_for(cap: usize) -> Result<Layout, Error> {
        Layout::array::<T>(cap).map_err(|_| Error::ArithmeticOverflow)
    }

    fn allocate_block(&self, layout: Layout) -> Result<NonNull<T>, Error> {
        if layout.size() == 0 {
            return Ok(NonNull::dangling());
        }
        self.alloc
            .allocate(layout)
            .map(NonNull::cast)
            .ok_or(Error::OutOfMemory)
    }

    fn release_owned(&mut self) {
        if Self::IS_ZST {
            return;
        }
        if let Storage::Owned { ptr, cap } = self.storage {
            if cap == 0 {
                return;
            }
            // SAFETY: by invariant `ptr` came from `self.alloc` for this layout,
            // which was valid when it was allocated.
            unsafe {
                let layout =
                    Layout::from_size_align_unchecked(cap * size_of::<T>(), align_of::<T>());
                self.alloc.release(ptr.cast(), layout);
            }
            trace!("hook-vec: released {cap} slots");
            self.storage = Storage::Owned {
                ptr: NonNull::dangling(),
                cap: 0,
            };
        }
    }

    /// Moves the elements into owned storage of exactly `new_cap` slots.
    ///
    /// Promotes borrowed storage, allocates, reallocates, or releases as needed.
    /// Every failure is reported before the vector is modified.
    pub(crate) fn relocate(&mut self, new_cap: usize) -> Result<(), Error> {
        debug_assert!(new_cap >= self.len);
        if Self::IS_ZST {
            self.storage = Storage::Owned {
                ptr: NonNull::dangling(),
                cap: usize::MAX,
            };
            return Ok(());
        }
        let old_cap = self.capacity();
        let new_layout = Self::layout_for(new_cap)?;

        let ptr = match self.storage {
            Storage::Borrowed(_) => {
                let ptr = self.allocate_block(new_layout)?;
                // SAFETY: the fresh block holds `new_cap >= len` slots and cannot
                // overlap the borrowed buffer. The borrowed slots are left as they
                // are and never read again.
                unsafe { ptr::copy_nonoverlapping(self.as_ptr(), ptr.as_ptr(), self.len) };
                debug!("hook-vec: promoted {old_cap} borrowed slots to {new_cap}");
                ptr
            }
            Storage::Owned { cap: 0, .. } => self.allocate_block(new_layout)?,
            Storage::Owned { ptr, cap } => {
                if new_cap == 0 {
                    self.release_owned();
                    return Ok(());
                }
                // SAFETY: `ptr` was allocated by `self.alloc` for `cap` slots; the
                // new size is non-zero and was validated by `Layout::array`.
                let new_ptr = unsafe {
                    let old_layout =
                        Layout::from_size_align_unchecked(cap * size_of::<T>(), align_of::<T>());
                    self.alloc
                        .reallocate(ptr.cast(), old_layout, new_layout.size())
                };
                new_ptr.ok_or(Error::OutOfMemory)?.cast()
            }
        };

        trace!("hook-vec: capacity {old_cap} -> {new_cap}");
        self.storage = Storage::Owned { ptr, cap: new_cap };
        Ok(())
    }
}

impl<'a, T, H: Hooks<T> + Default, A: RawAlloc + Default> HookVec<'a, T, H, A> {
    /// Creates an owned vector with [`Hooks::DEFAULT_CAPACITY`] slots.
    pub fn new() -> Result<Self, Error> {
        Self::with_capacity_in(0, H::default(), A::default())
    }

    /// Creates an owned vector with room for `capacity` elements (`0` means the
    /// default capacity).
    pub fn with_capacity(capacity: usize) -> Result<Self, Error> {
        Self::with_capacity_in(capacity, H::default(), A::default())
    }

    /// Adopts `buf` as fixed initial storage. See [`from_borrowed_in`](Self::from_borrowed_in).
    pub fn from_borrowed(buf: &'a mut [MaybeUninit<T>]) -> Self {
        Self::from_borrowed_in(buf, H::default(), A::default())
    }
}

/// An empty owned vector with nothing allocated; the first insertion allocates.
impl<T, H: Hooks<T> + Default, A: RawAlloc + Default> Default for HookVec<'_, T, H, A> {
    fn default() -> Self {
        Self::unallocated_in(H::default(), A::default())
    }
}

impl<T, H: Hooks<T>, A: RawAlloc> Drop for HookVec<'_, T, H, A> {
    fn drop(&mut self) {
        self.cleanup();
    }
}
