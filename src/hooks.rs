// This file is part of hook-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-instantiation element lifecycle policy.
//!
//! A [`HookVec<T, H>`](crate::HookVec) is parameterized over a hook value
//! `H: Hooks<T>`. The hook value decides:
//!
//! - how removed elements are disposed of ([`Hooks::cleanup`]);
//! - the growth factor and default capacity used by the capacity manager;
//! - optionally, how to deep-copy an element ([`DeepCopy`]) and how to compare
//!   two elements ([`ElementEq`]).
//!
//! Operations that need an optional capability are only available when `H`
//! implements the corresponding trait, so asking for a deep copy from a vector
//! without a deep-copy hook is a compile error rather than a runtime one.
//!
//! Hooks run synchronously inside the mutating call and only receive `&self`,
//! so they cannot reach back into the vector that invoked them.

/// Cleanup hook and tuning constants for elements of type `T`.
///
/// Every method has a default, so `impl Hooks<T> for MyHooks {}` is a valid
/// "no-op" policy: cleanup just drops the element.
pub trait Hooks<T> {
    /// Multiplier applied to the current capacity when growing. Must be `>= 1`.
    const GROWTH_FACTOR: usize = 2;

    /// Capacity used by `with_capacity(0)` / `new()`. Must be `> 0`.
    const DEFAULT_CAPACITY: usize = 8;

    /// Disposes of an element the vector is discarding.
    ///
    /// Called for every element removed by `erase`, `erase_range`, `clear`,
    /// `truncate`, `discard_at`, `cleanup`, and on drop. Never called for
    /// elements whose ownership is handed back to the caller (`pop_at`) or
    /// moved into another vector (`merge_subvec`).
    #[inline]
    fn cleanup(&self, element: T) {
        drop(element);
    }
}

/// Deep-copy capability, enabling [`HookVec::get_deepcopy`](crate::HookVec::get_deepcopy).
pub trait DeepCopy<T>: Hooks<T> {
    /// Produces an independently owned duplicate of `element`.
    ///
    /// Returning `None` is reported as [`Error::CallbackFailure`](crate::Error::CallbackFailure).
    fn deep_copy(&self, element: &T) -> Option<T>;
}

/// Equality capability, enabling `find`, `contains` and `count`.
pub trait ElementEq<T>: Hooks<T> {
    /// Returns `true` if `a` and `b` are considered equal.
    fn element_eq(&self, a: &T, b: &T) -> bool;
}

/// The default policy: cleanup drops, no deep copy, no comparator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NoHooks;

impl<T> Hooks<T> for NoHooks {}

/// A policy that derives its capabilities from standard traits:
/// deep copy through [`Clone`], comparison through [`PartialEq`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StdHooks;

impl<T> Hooks<T> for StdHooks {}

impl<T: Clone> DeepCopy<T> for StdHooks {
    #[inline]
    fn deep_copy(&self, element: &T) -> Option<T> {
        Some(element.clone())
    }
}

impl<T: PartialEq> ElementEq<T> for StdHooks {
    #[inline]
    fn element_eq(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

#[cfg(test)]
mod tests {
    use super::{DeepCopy, ElementEq, Hooks, NoHooks, StdHooks};

    #[test]
    fn test_default_tuning_constants() {
        assert_eq!(<NoHooks as Hooks<u8>>::GROWTH_FACTOR, 2);
        assert_eq!(<NoHooks as Hooks<u8>>::DEFAULT_CAPACITY, 8);
        assert_eq!(<StdHooks as Hooks<u8>>::GROWTH_FACTOR, 2);
    }

    #[test]
    fn test_std_hooks_capabilities() {
        let h = StdHooks;
        assert_eq!(
            h.deep_copy(&alloc::string::String::from("x")).as_deref(),
            Some("x")
        );
        assert!(h.element_eq(&3, &3));
        assert!(!h.element_eq(&3, &4));
    }
}
