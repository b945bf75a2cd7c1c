// This file is part of hook-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{allocator::RawAlloc, error::Error, hooks::Hooks, vec::HookVec};

// Core imports
use core::ptr;

// Alloc imports
use alloc::vec::Vec;

impl<T, H: Hooks<T>, A: RawAlloc> HookVec<'_, T, H, A> {
    /// Checks `pos` and makes room for `count` more elements.
    ///
    /// Nothing but capacity changes, and only on success.
    pub(crate) fn prepare_insert(&mut self, pos: usize, count: usize) -> Result<(), Error> {
        if pos > self.len {
            return Err(Error::OutOfBounds);
        }
        let needed = self
            .len
            .checked_add(count)
            .ok_or(Error::ArithmeticOverflow)?;
        self.grow(needed)
    }

    /// Shifts `[pos, len)` right by one and writes `value` at `pos`.
    ///
    /// # Safety
    ///
    /// `pos <= len < capacity`.
    unsafe fn insert_unchecked(&mut self, pos: usize, value: T) {
        let len = self.len;
        // SAFETY: per the caller, there is a free slot at `len`, so both the
        // shifted tail and `pos` are in bounds.
        unsafe {
            let p = self.as_mut_ptr().add(pos);
            ptr::copy(p, p.add(1), len - pos);
            ptr::write(p, value);
        }
        self.len = len + 1;
    }

    /// Inserts `value` at `pos`, shifting `[pos, len)` right.
    ///
    /// Returns [`Error::OutOfBounds`] if `pos > len`, or a growth error. On
    /// error `value` is dropped and the vector is unchanged.
    pub fn insert(&mut self, pos: usize, value: T) -> Result<(), Error> {
        self.prepare_insert(pos, 1)?;
        // SAFETY: `pos <= len` and growth guaranteed a free slot.
        unsafe { self.insert_unchecked(pos, value) };
        Ok(())
    }

    /// Appends `value`. See [`insert`](Self::insert).
    #[inline]
    pub fn push(&mut self, value: T) -> Result<(), Error> {
        self.insert(self.len, value)
    }

    /// Inserts a clone of `value` at `pos`, shifting `[pos, len)` right.
    ///
    /// Returns [`Error::OutOfBounds`] if `pos > len`, or a growth error; on
    /// error nothing is cloned and the vector is unchanged.
    pub fn put_copy(&mut self, pos: usize, value: &T) -> Result<(), Error>
    where
        T: Clone,
    {
        self.prepare_insert(pos, 1)?;
        let value = value.clone();
        // SAFETY: `pos <= len` and growth guaranteed a free slot.
        unsafe { self.insert_unchecked(pos, value) };
        Ok(())
    }

    /// Moves the value out of `slot` into position `pos`, leaving `None` behind.
    ///
    /// The moved value never reaches the cleanup hook. Returns
    /// [`Error::NullArgument`] if `slot` is already `None`,
    /// [`Error::OutOfBounds`] if `pos > len`, or a growth error; on error
    /// `slot` keeps its value.
    pub fn put_move(&mut self, pos: usize, slot: &mut Option<T>) -> Result<(), Error> {
        if slot.is_none() {
            return Err(Error::NullArgument);
        }
        self.prepare_insert(pos, 1)?;
        if let Some(value) = slot.take() {
            // SAFETY: `pos <= len` and growth guaranteed a free slot.
            unsafe { self.insert_unchecked(pos, value) };
        }
        Ok(())
    }

    /// Appends a clone of `value`. See [`put_copy`](Self::put_copy).
    #[inline]
    pub fn push_copy(&mut self, value: &T) -> Result<(), Error>
    where
        T: Clone,
    {
        self.put_copy(self.len, value)
    }

    /// Appends the value held by `slot`. See [`put_move`](Self::put_move).
    #[inline]
    pub fn push_move(&mut self, slot: &mut Option<T>) -> Result<(), Error> {
        self.put_move(self.len, slot)
    }

    /// Inserts clones of `items` at `pos`, shifting the tail right by
    /// `items.len()`.
    ///
    /// Bounds and growth failures leave the vector unchanged. If a `clone`
    /// panics, the shifted tail is leaked rather than dropped twice.
    pub fn array_copy(&mut self, pos: usize, items: &[T]) -> Result<(), Error>
    where
        T: Clone,
    {
        let count = items.len();
        self.prepare_insert(pos, count)?;
        if count == 0 {
            return Ok(());
        }
        let len = self.len;
        let p = self.as_mut_ptr();
        // SAFETY: growth guaranteed `len + count <= capacity`. The tail moves to
        // `[pos + count, len + count)` and the gap is filled before `len` is
        // restored.
        unsafe {
            let gap = p.add(pos);
            ptr::copy(gap, gap.add(count), len - pos);
            self.len = pos;
            for (i, item) in items.iter().enumerate() {
                ptr::write(gap.add(i), item.clone());
            }
        }
        self.len = len + count;
        Ok(())
    }

    /// Moves every element of `items` into the vector at `pos`, shifting the
    /// tail right. `items` is empty afterwards.
    ///
    /// On error `items` and the vector are both unchanged. Moved elements never
    /// reach the cleanup hook.
    pub fn array_move(&mut self, pos: usize, items: &mut Vec<T>) -> Result<(), Error> {
        let count = items.len();
        self.prepare_insert(pos, count)?;
        let len = self.len;
        // SAFETY: growth guaranteed room for `count` more elements; `items` is a
        // separate allocation. Its length is zeroed so the moved values are
        // owned only by `self`.
        unsafe {
            let gap = self.as_mut_ptr().add(pos);
            ptr::copy(gap, gap.add(count), len - pos);
            ptr::copy_nonoverlapping(items.as_ptr(), gap, count);
            items.set_len(0);
        }
        self.len = len + count;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        Error, HookVec, NoHooks,
        test_support::{CountingAlloc, RecordingHooks},
    };
    use alloc::{string::String, vec, vec::Vec};
    use core::mem::MaybeUninit;
    use proptest::prelude::*;

    #[test]
    fn test_put_copy_front_middle_back() {
        let mut v: HookVec<i32> = HookVec::with_capacity(1).unwrap();
        v.put_copy(0, &1).unwrap();
        v.put_copy(1, &3).unwrap();
        v.put_copy(1, &2).unwrap();
        v.put_copy(0, &0).unwrap();
        v.put_copy(4, &4).unwrap();
        assert_eq!(v.as_slice(), &[0, 1, 2, 3, 4]);
        assert_eq!(v.put_copy(6, &9), Err(Error::OutOfBounds));
        assert_eq!(v.len(), 5);
    }

    #[test]
    fn test_put_copy_clones_non_copy_values() {
        let mut v: HookVec<String> = HookVec::new().unwrap();
        let s = String::from("hello");
        v.push_copy(&s).unwrap();
        v.push_copy(&s).unwrap();
        assert_eq!(s, "hello");
        assert_eq!(v.as_slice(), &["hello", "hello"]);
    }

    #[test]
    fn test_put_move_empties_slot_and_skips_cleanup() {
        let hooks = RecordingHooks::default();
        let mut v: HookVec<i32, RecordingHooks> =
            HookVec::with_capacity_in(1, hooks.clone(), Default::default()).unwrap();
        let mut slot = Some(5);
        v.push_move(&mut slot).unwrap();
        assert_eq!(slot, None);
        let mut front = Some(4);
        v.put_move(0, &mut front).unwrap();
        assert_eq!(front, None);
        assert_eq!(v.as_slice(), &[4, 5]);
        assert!(hooks.cleaned().is_empty());

        assert_eq!(v.push_move(&mut slot), Err(Error::NullArgument));
        let mut late = Some(9);
        assert_eq!(v.put_move(3, &mut late), Err(Error::OutOfBounds));
        assert_eq!(late, Some(9));
        assert_eq!(v.as_slice(), &[4, 5]);
    }

    #[test]
    fn test_put_move_keeps_slot_on_alloc_failure() {
        let alloc = CountingAlloc::default();
        let mut v: HookVec<i32, NoHooks, CountingAlloc> =
            HookVec::with_capacity_in(1, NoHooks, alloc.clone()).unwrap();
        v.push(1).unwrap();
        alloc.stats.fail_from_now();
        let mut slot = Some(2);
        assert_eq!(v.push_move(&mut slot), Err(Error::OutOfMemory));
        assert_eq!(slot, Some(2));
        assert_eq!(v.as_slice(), &[1]);
        assert_eq!(v.capacity(), 1);
    }

    #[test]
    fn test_insert_and_push_native_move() {
        let mut v: HookVec<String> = HookVec::new().unwrap();
        v.push(String::from("b")).unwrap();
        v.insert(0, String::from("a")).unwrap();
        assert_eq!(v.as_slice(), &["a", "b"]);
        assert_eq!(v.insert(5, String::from("z")), Err(Error::OutOfBounds));
    }

    #[test]
    fn test_array_copy_shifts_tail_by_count() {
        let mut v: HookVec<i32> = HookVec::with_capacity(2).unwrap();
        v.array_copy(0, &[1, 5]).unwrap();
        v.array_copy(1, &[2, 3, 4]).unwrap();
        assert_eq!(v.as_slice(), &[1, 2, 3, 4, 5]);
        v.array_copy(5, &[]).unwrap();
        assert_eq!(v.len(), 5);
        assert_eq!(v.array_copy(7, &[1]), Err(Error::OutOfBounds));
        assert_eq!(v.as_slice(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_array_copy_failure_is_noop() {
        let alloc = CountingAlloc::default();
        let mut v: HookVec<i32, NoHooks, CountingAlloc> =
            HookVec::with_capacity_in(2, NoHooks, alloc.clone()).unwrap();
        v.array_copy(0, &[1, 2]).unwrap();
        alloc.stats.fail_from_now();
        assert_eq!(v.array_copy(1, &[7, 8, 9]), Err(Error::OutOfMemory));
        assert_eq!(v.as_slice(), &[1, 2]);
        assert_eq!(v.capacity(), 2);
    }

    #[test]
    fn test_array_move_failure_keeps_source_and_vector() {
        let alloc = CountingAlloc::default();
        let mut v: HookVec<i32, NoHooks, CountingAlloc> =
            HookVec::with_capacity_in(2, NoHooks, alloc.clone()).unwrap();
        v.array_copy(0, &[1, 2]).unwrap();
        alloc.stats.fail_from_now();
        let mut src = vec![7, 8, 9];
        assert_eq!(v.array_move(1, &mut src), Err(Error::OutOfMemory));
        assert_eq!(src, [7, 8, 9]);
        assert_eq!(v.as_slice(), &[1, 2]);
        assert_eq!(v.capacity(), 2);
    }

    #[test]
    fn test_insert_failure_is_noop() {
        let alloc = CountingAlloc::default();
        let mut v: HookVec<String, NoHooks, CountingAlloc> =
            HookVec::with_capacity_in(1, NoHooks, alloc.clone()).unwrap();
        v.push(String::from("a")).unwrap();
        alloc.stats.fail_from_now();
        assert_eq!(v.insert(0, String::from("b")), Err(Error::OutOfMemory));
        assert_eq!(v.push(String::from("c")), Err(Error::OutOfMemory));
        assert_eq!(v.as_slice(), &["a"]);
        assert_eq!(v.capacity(), 1);
    }

    #[test]
    fn test_array_move_drains_source() {
        let hooks = RecordingHooks::default();
        let mut v: HookVec<i32, RecordingHooks> =
            HookVec::with_capacity_in(2, hooks.clone(), Default::default()).unwrap();
        v.array_copy(0, &[1, 4]).unwrap();
        let mut src = vec![2, 3];
        let src_cap = src.capacity();
        v.array_move(1, &mut src).unwrap();
        assert!(src.is_empty());
        assert_eq!(src.capacity(), src_cap);
        assert_eq!(v.as_slice(), &[1, 2, 3, 4]);
        assert!(hooks.cleaned().is_empty());

        let mut more = vec![9];
        assert_eq!(v.array_move(9, &mut more), Err(Error::OutOfBounds));
        assert_eq!(more, [9]);
    }

    #[test]
    fn test_array_move_of_owned_values_drops_nothing() {
        use alloc::rc::Rc;
        let tracker = Rc::new(());
        let mut src: Vec<Rc<()>> = (0..4).map(|_| Rc::clone(&tracker)).collect();
        let mut v: HookVec<Rc<()>> = HookVec::new().unwrap();
        v.array_move(0, &mut src).unwrap();
        drop(src);
        assert_eq!(Rc::strong_count(&tracker), 5);
        drop(v);
        assert_eq!(Rc::strong_count(&tracker), 1);
    }

    #[test]
    fn test_insert_into_borrowed_until_full() {
        let mut buf = [MaybeUninit::uninit(); 3];
        let mut v: HookVec<i32> = HookVec::from_borrowed(&mut buf);
        v.push_copy(&3).unwrap();
        v.put_copy(0, &1).unwrap();
        v.put_copy(1, &2).unwrap();
        assert!(v.is_borrowed());
        assert_eq!(v.as_slice(), &[1, 2, 3]);
        v.put_copy(0, &0).unwrap();
        assert!(!v.is_borrowed());
        assert_eq!(v.as_slice(), &[0, 1, 2, 3]);
    }

    proptest! {
        #[test]
        fn prop_put_copy_places_value_and_shifts_tail(
            values in proptest::collection::vec(any::<i32>(), 0..32),
            pos_seed in any::<usize>(),
            x in any::<i32>(),
        ) {
            let pos = pos_seed % (values.len() + 1);
            let mut v: HookVec<i32> = HookVec::with_capacity(1).unwrap();
            v.array_copy(0, &values).unwrap();
            v.put_copy(pos, &x).unwrap();
            prop_assert_eq!(v.len(), values.len() + 1);
            prop_assert_eq!(v[pos], x);
            prop_assert_eq!(&v[..pos], &values[..pos]);
            prop_assert_eq!(&v[pos + 1..], &values[pos..]);
        }
    }
}
