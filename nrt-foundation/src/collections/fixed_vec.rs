// NRT - nrt-foundation
// Module: FixedSizeVector - Inline-storage vector with compile-time capacity
// SW-REQ-ID: REQ_RESOURCE_001, REQ_MEM_SAFETY_001
//
// Copyright (c) 2026 The NRT Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

// Element lifetimes are managed by hand over `MaybeUninit` storage.
#![allow(unsafe_code)]

//! Fixed-capacity vector with inline storage.
//!
//! `FixedSizeVector<T, N>` holds up to `N` elements inside the value itself.
//! It never allocates and never constructs an element it was not asked to
//! construct: slots past [`FixedSizeVector::size`] are uninitialized memory.
//!
//! # Characteristics
//!
//! - **Zero allocation**: All memory is inline `[MaybeUninit<T>; N]`
//! - **Caller contract**: `push_back`, `emplace_back` and indexing require the
//!   caller to check `full()` / `size()` first. A violation is a programmer
//!   error and halts with a panic in every build.
//! - **Checked variants**: `try_push_back`, `try_emplace_back`, `get`,
//!   `try_get` report failures as values instead.
//! - **Unchecked variants**: `push_back_unchecked`, `get_unchecked` and
//!   friends are `unsafe` and skip the check outside debug builds.
//! - **Single owner**: no `Clone`, no `Copy`. Moving the vector moves its
//!   elements with it.
//!
//! ```compile_fail
//! use nrt_foundation::collections::FixedSizeVector;
//!
//! let vec = FixedSizeVector::<u32, 4>::new();
//! let copy = vec.clone();
//! ```

use core::{
    fmt,
    hash::{Hash, Hasher},
    iter::FusedIterator,
    marker::PhantomData,
    mem::{ManuallyDrop, MaybeUninit},
    ops::{Deref, DerefMut, Index, IndexMut},
    ptr, slice,
};

use nrt_error::{Error, Result};

use crate::contract::{check_contract, debug_contract};

/// A vector with compile-time capacity and inline storage.
///
/// # Invariants
///
/// 1. `len <= N` always holds
/// 2. Slots `[0, len)` hold exactly one live element each
/// 3. Slots `[len, N)` are never read as values and never dropped
/// 4. `len` only moves together with a matching write or drop
///
/// # Examples
///
/// ```
/// use nrt_foundation::collections::FixedSizeVector;
///
/// let mut vec = FixedSizeVector::<u32, 4>::new();
/// vec.push_back(1);
/// vec.push_back(2);
/// vec.push_back(3);
///
/// assert_eq!(vec.size(), 3);
/// assert!(!vec.full());
/// assert_eq!(vec[1], 2);
///
/// vec.push_back(4);
/// assert!(vec.full());
/// assert!(vec.try_push_back(5).is_err());
/// ```
///
/// Pushing onto a full vector breaks the caller contract:
///
/// ```should_panic
/// use nrt_foundation::collections::FixedSizeVector;
///
/// let mut vec = FixedSizeVector::<u32, 1>::new();
/// vec.push_back(1);
/// vec.push_back(2);
/// ```
pub struct FixedSizeVector<T, const N: usize> {
    /// Inline storage for elements
    data: [MaybeUninit<T>; N],

    /// Number of live elements
    /// Invariant: len <= N
    len: usize,

    /// Marker for drop checker
    _marker: PhantomData<T>,
}

impl<T, const N: usize> FixedSizeVector<T, N> {
    /// The compile-time capacity.
    pub const CAPACITY: usize = N;

    /// Creates a new empty vector. No element is constructed.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            // SAFETY: an array of `MaybeUninit` is valid without initialization.
            data: unsafe { MaybeUninit::<[MaybeUninit<T>; N]>::uninit().assume_init() },
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns the number of live elements.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.len
    }

    /// Alias of [`Self::size`].
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the compile-time capacity.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the number of elements that can still be inserted.
    #[inline]
    #[must_use]
    pub const fn remaining_capacity(&self) -> usize {
        N - self.len
    }

    /// Returns `true` if the vector holds no element.
    #[inline]
    #[must_use]
    pub const fn empty(&self) -> bool {
        self.len == 0
    }

    /// Alias of [`Self::empty`].
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the vector holds `N` elements.
    #[inline]
    #[must_use]
    pub const fn full(&self) -> bool {
        self.len == N
    }

    /// Alias of [`Self::full`].
    #[inline]
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Returns a pointer to the first slot of the storage.
    ///
    /// The pointer is valid for reads of elements `[0, size())` for as long as
    /// the vector is neither moved nor mutated.
    #[inline]
    #[must_use]
    pub const fn data(&self) -> *const T {
        self.data.as_ptr().cast::<T>()
    }

    /// Returns a mutable pointer to the first slot of the storage.
    #[inline]
    #[must_use]
    pub fn data_mut(&mut self) -> *mut T {
        self.data.as_mut_ptr().cast::<T>()
    }

    /// Appends `value` to the back of the vector.
    ///
    /// The caller must check [`Self::full`] first.
    ///
    /// # Panics
    ///
    /// Panics with [`Error::CONTRACT_PUSH_WHILE_FULL`] when the vector is full.
    #[inline]
    #[track_caller]
    pub fn push_back(&mut self, value: T) {
        check_contract!(self.len < N, Error::CONTRACT_PUSH_WHILE_FULL);
        // SAFETY: checked above that a free slot exists.
        unsafe { self.push_back_unchecked(value) }
    }

    /// Appends a clone of `value`.
    ///
    /// # Panics
    ///
    /// Panics with [`Error::CONTRACT_PUSH_WHILE_FULL`] when the vector is full.
    #[inline]
    #[track_caller]
    pub fn push_back_cloned(&mut self, value: &T)
    where
        T: Clone,
    {
        check_contract!(self.len < N, Error::CONTRACT_PUSH_WHILE_FULL);
        let value = value.clone();
        // SAFETY: checked above that a free slot exists.
        unsafe { self.push_back_unchecked(value) }
    }

    /// Constructs a new element at the back of the vector from `init`.
    ///
    /// The element is written straight into its slot. If `init` panics the
    /// vector is left unchanged. `init` is not called when the vector is full.
    ///
    /// # Panics
    ///
    /// Panics with [`Error::CONTRACT_PUSH_WHILE_FULL`] when the vector is full.
    #[inline]
    #[track_caller]
    pub fn emplace_back<F>(&mut self, init: F)
    where
        F: FnOnce() -> T,
    {
        check_contract!(self.len < N, Error::CONTRACT_PUSH_WHILE_FULL);
        // SAFETY: checked above that a free slot exists.
        unsafe { self.emplace_back_unchecked(init) }
    }

    /// Appends `value`, reporting a full vector as an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FIXED_VECTOR_CAPACITY_EXCEEDED`] if the vector is
    /// full. `value` is dropped in that case.
    #[inline]
    pub fn try_push_back(&mut self, value: T) -> Result<()> {
        self.ensure_free_slot()?;
        // SAFETY: `ensure_free_slot` guarantees `len < N`.
        unsafe { self.push_back_unchecked(value) };
        Ok(())
    }

    /// Constructs an element from `init`, reporting a full vector as an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FIXED_VECTOR_CAPACITY_EXCEEDED`] without calling
    /// `init` if the vector is full.
    #[inline]
    pub fn try_emplace_back<F>(&mut self, init: F) -> Result<()>
    where
        F: FnOnce() -> T,
    {
        self.ensure_free_slot()?;
        // SAFETY: `ensure_free_slot` guarantees `len < N`.
        unsafe { self.emplace_back_unchecked(init) };
        Ok(())
    }

    /// Appends `value` without checking capacity.
    ///
    /// # Safety
    ///
    /// The vector must not be full. Debug builds and builds with the
    /// `runtime-bounds-checking` feature still halt on a violation; other
    /// builds write past the storage.
    #[inline]
    #[track_caller]
    pub unsafe fn push_back_unchecked(&mut self, value: T) {
        debug_contract!(self.len < N, Error::CONTRACT_PUSH_WHILE_FULL);
        // SAFETY: the caller guarantees `len < N`.
        unsafe { self.data.get_unchecked_mut(self.len).write(value) };
        self.len += 1;
    }

    /// Constructs an element from `init` without checking capacity.
    ///
    /// # Safety
    ///
    /// The vector must not be full. See [`Self::push_back_unchecked`].
    #[inline]
    #[track_caller]
    pub unsafe fn emplace_back_unchecked<F>(&mut self, init: F)
    where
        F: FnOnce() -> T,
    {
        debug_contract!(self.len < N, Error::CONTRACT_PUSH_WHILE_FULL);
        // SAFETY: the caller guarantees `len < N`. `len` is only bumped once
        // `init` has returned and the element is written.
        unsafe { self.data.get_unchecked_mut(self.len).write(init()) };
        self.len += 1;
    }

    /// Removes the last element and returns it, or `None` if empty.
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        // SAFETY: the vector is not empty.
        Some(unsafe { self.pop_back_unchecked() })
    }

    /// Removes the last element without checking emptiness.
    ///
    /// # Safety
    ///
    /// The vector must not be empty.
    #[inline]
    #[track_caller]
    pub unsafe fn pop_back_unchecked(&mut self) -> T {
        debug_contract!(self.len > 0, Error::CONTRACT_POP_WHILE_EMPTY);
        self.len -= 1;
        // SAFETY: slot `len` was live and is now outside the live range, so it
        // is read exactly once.
        unsafe { self.data.get_unchecked(self.len).assume_init_read() }
    }

    /// Removes the element at `index`, shifting later elements down by one.
    ///
    /// # Panics
    ///
    /// Panics with [`Error::CONTRACT_INDEX_OUT_OF_BOUNDS`] if
    /// `index >= size()`.
    #[track_caller]
    pub fn erase(&mut self, index: usize) -> T {
        check_contract!(index < self.len, Error::CONTRACT_INDEX_OUT_OF_BOUNDS);
        let tail = self.len - index - 1;
        let base = self.data_mut();
        // SAFETY: `index < len`; the element is moved out once and the live
        // tail `[index + 1, len)` is moved down over it.
        unsafe {
            let removed = ptr::read(base.add(index));
            ptr::copy(base.add(index + 1), base.add(index), tail);
            self.len -= 1;
            removed
        }
    }

    /// Removes the element at `index`, moving the last element into its slot.
    ///
    /// # Panics
    ///
    /// Panics with [`Error::CONTRACT_INDEX_OUT_OF_BOUNDS`] if
    /// `index >= size()`.
    #[track_caller]
    pub fn swap_remove(&mut self, index: usize) -> T {
        check_contract!(index < self.len, Error::CONTRACT_INDEX_OUT_OF_BOUNDS);
        let last = self.len - 1;
        self.as_mut_slice().swap(index, last);
        // SAFETY: `index < len` so the vector is not empty.
        unsafe { self.pop_back_unchecked() }
    }

    /// Swaps the elements at `a` and `b`.
    ///
    /// # Panics
    ///
    /// Panics with [`Error::CONTRACT_INDEX_OUT_OF_BOUNDS`] if either index is
    /// at or beyond `size()`.
    #[track_caller]
    pub fn swap(&mut self, a: usize, b: usize) {
        check_contract!(
            a < self.len && b < self.len,
            Error::CONTRACT_INDEX_OUT_OF_BOUNDS
        );
        self.as_mut_slice().swap(a, b);
    }

    /// Drops the elements `[new_len, size())` in index order.
    ///
    /// Does nothing if `new_len >= size()`.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        let old_len = self.len;
        // Shrink first: a panicking destructor may leak, never double drop.
        self.len = new_len;
        // SAFETY: `[new_len, old_len)` were live and are now outside the live
        // range, so each is dropped exactly once.
        unsafe {
            let tail = slice::from_raw_parts_mut(self.data_mut().add(new_len), old_len - new_len);
            ptr::drop_in_place(tail);
        }
    }

    /// Drops every element.
    ///
    /// # Time Complexity
    ///
    /// O(n) where n = size.
    pub fn clear(&mut self) {
        #[cfg(feature = "tracing")]
        let _span = crate::tracing::ContainerTrace::clearing(self.len, N).entered();
        #[cfg(feature = "tracing")]
        tracing::trace!(dropped = self.len, "clearing fixed-size vector");

        self.truncate(0);
    }

    /// Returns the element at `index`, or `None` if out of the live range.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Returns the element at `index` mutably, or `None` if out of range.
    #[inline]
    #[must_use]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FIXED_VECTOR_INDEX_OUT_OF_BOUNDS`] if
    /// `index >= size()`.
    #[inline]
    pub fn try_get(&self, index: usize) -> Result<&T> {
        match self.get(index) {
            Some(value) => Ok(value),
            None => {
                #[cfg(feature = "tracing")]
                tracing::warn!(index, len = self.len, "fixed-size vector index out of bounds");
                Err(Error::FIXED_VECTOR_INDEX_OUT_OF_BOUNDS)
            },
        }
    }

    /// Returns the element at `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be below [`Self::size`]. Debug builds and builds with the
    /// `runtime-bounds-checking` feature still halt on a violation.
    #[inline]
    #[must_use]
    #[track_caller]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_contract!(index < self.len, Error::CONTRACT_INDEX_OUT_OF_BOUNDS);
        // SAFETY: the caller guarantees `index < len`.
        unsafe { self.data.get_unchecked(index).assume_init_ref() }
    }

    /// Returns the element at `index` mutably without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be below [`Self::size`].
    #[inline]
    #[must_use]
    #[track_caller]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_contract!(index < self.len, Error::CONTRACT_INDEX_OUT_OF_BOUNDS);
        // SAFETY: the caller guarantees `index < len`.
        unsafe { self.data.get_unchecked_mut(index).assume_init_mut() }
    }

    /// Returns the first element, or `None` if empty.
    #[inline]
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the first element mutably, or `None` if empty.
    #[inline]
    #[must_use]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// Returns the last element, or `None` if empty.
    #[inline]
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns the last element mutably, or `None` if empty.
    #[inline]
    #[must_use]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// Returns the live elements as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[0, len)` are live and contiguous.
        unsafe { slice::from_raw_parts(self.data(), self.len) }
    }

    /// Returns the live elements as a mutable slice.
    #[inline]
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len;
        // SAFETY: `[0, len)` are live and contiguous.
        unsafe { slice::from_raw_parts_mut(self.data_mut(), len) }
    }

    /// Returns an iterator over the live elements in index order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns a mutable iterator over the live elements in index order.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Appends clones of every element in `other`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FIXED_VECTOR_CAPACITY_EXCEEDED`] before writing
    /// anything if `other` does not fit.
    pub fn try_extend_from_slice(&mut self, other: &[T]) -> Result<()>
    where
        T: Clone,
    {
        #[cfg(feature = "tracing")]
        let _span =
            crate::tracing::ContainerTrace::extending(other.len(), self.remaining_capacity())
                .entered();

        if other.len() > self.remaining_capacity() {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                additional = other.len(),
                remaining = self.remaining_capacity(),
                "fixed-size vector cannot hold slice"
            );
            return Err(Error::FIXED_VECTOR_CAPACITY_EXCEEDED);
        }
        for item in other {
            // SAFETY: the length check above reserves a slot for every item.
            unsafe { self.push_back_unchecked(item.clone()) };
        }
        Ok(())
    }

    fn ensure_free_slot(&self) -> Result<()> {
        if self.len < N {
            return Ok(());
        }
        #[cfg(feature = "tracing")]
        tracing::warn!(capacity = N, "fixed-size vector full");
        Err(Error::FIXED_VECTOR_CAPACITY_EXCEEDED)
    }
}

// RAII: every live element is dropped exactly once
impl<T, const N: usize> Drop for FixedSizeVector<T, N> {
    fn drop(&mut self) {
        self.truncate(0);
    }
}

impl<T, const N: usize> Default for FixedSizeVector<T, N> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> Index<usize> for FixedSizeVector<T, N> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, index: usize) -> &T {
        check_contract!(index < self.len, Error::CONTRACT_INDEX_OUT_OF_BOUNDS);
        // SAFETY: checked above.
        unsafe { self.data.get_unchecked(index).assume_init_ref() }
    }
}

impl<T, const N: usize> IndexMut<usize> for FixedSizeVector<T, N> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        check_contract!(index < self.len, Error::CONTRACT_INDEX_OUT_OF_BOUNDS);
        // SAFETY: checked above.
        unsafe { self.data.get_unchecked_mut(index).assume_init_mut() }
    }
}

impl<T, const N: usize> Deref for FixedSizeVector<T, N> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const N: usize> DerefMut for FixedSizeVector<T, N> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for FixedSizeVector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq, const N: usize, const M: usize> PartialEq<FixedSizeVector<T, M>>
    for FixedSizeVector<T, N>
{
    fn eq(&self, other: &FixedSizeVector<T, M>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T]> for FixedSizeVector<T, N> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: Eq, const N: usize> Eq for FixedSizeVector<T, N> {}

// Hash implementation for use in hash-based collections
impl<T: Hash, const N: usize> Hash for FixedSizeVector<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

/// Appends every item with [`FixedSizeVector::push_back`].
///
/// Panics like `push_back` once the vector is full.
impl<T, const N: usize> Extend<T> for FixedSizeVector<T, N> {
    #[track_caller]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a FixedSizeVector<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut FixedSizeVector<T, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, const N: usize> IntoIterator for FixedSizeVector<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        let vec = ManuallyDrop::new(self);
        IntoIter {
            // SAFETY: `vec` is never dropped, so ownership of the live
            // elements moves to the iterator.
            data: unsafe { ptr::read(&vec.data) },
            start: 0,
            end: vec.len,
        }
    }
}

/// Owning iterator over the elements of a [`FixedSizeVector`].
///
/// Elements not yet yielded are dropped with the iterator.
pub struct IntoIter<T, const N: usize> {
    data: [MaybeUninit<T>; N],
    /// Invariant: `[start, end)` are live
    start: usize,
    end: usize,
}

impl<T, const N: usize> IntoIter<T, N> {
    /// Returns the elements not yet yielded as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[start, end)` are live and contiguous.
        unsafe {
            slice::from_raw_parts(
                self.data.as_ptr().add(self.start).cast::<T>(),
                self.end - self.start,
            )
        }
    }
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        // SAFETY: `start < end`; the slot leaves the live range before it
        // could be read again.
        let item = unsafe { self.data.get_unchecked(self.start).assume_init_read() };
        self.start += 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.start;
        (remaining, Some(remaining))
    }
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        self.end -= 1;
        // SAFETY: slot `end` was live and is now outside the live range.
        Some(unsafe { self.data.get_unchecked(self.end).assume_init_read() })
    }
}

impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {}

impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}

impl<T, const N: usize> Drop for IntoIter<T, N> {
    fn drop(&mut self) {
        let (start, end) = (self.start, self.end);
        self.start = end;
        // SAFETY: `[start, end)` were live and are dropped exactly once.
        unsafe {
            let rest =
                slice::from_raw_parts_mut(self.data.as_mut_ptr().add(start).cast::<T>(), end - start);
            ptr::drop_in_place(rest);
        }
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for IntoIter<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

// ============================================================================
// KANI Formal Verification
// ============================================================================

#[cfg(kani)]
mod verification {
    use super::*;

    #[kani::proof]
    fn verify_insertion_order() {
        let mut vec: FixedSizeVector<u8, 4> = FixedSizeVector::new();

        vec.push_back(1);
        vec.push_back(2);
        vec.push_back(3);

        assert!(vec[0] == 1);
        assert!(vec[1] == 2);
        assert!(vec[2] == 3);
        assert!(vec.size() == 3);
    }

    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_size_never_exceeds_capacity() {
        let mut vec: FixedSizeVector<u32, 4> = FixedSizeVector::new();
        let attempts: u8 = kani::any();
        kani::assume(attempts <= 5);

        for i in 0..attempts {
            let _ = vec.try_push_back(u32::from(i));
            assert!(vec.size() <= vec.capacity());
        }
    }

    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_erase_shifts_tail() {
        let mut vec: FixedSizeVector<u8, 4> = FixedSizeVector::new();
        vec.push_back(10);
        vec.push_back(20);
        vec.push_back(30);

        assert!(vec.erase(0) == 10);
        assert!(vec[0] == 20);
        assert!(vec[1] == 30);
        assert!(vec.size() == 2);
    }

    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_drop_cleanup() {
        let mut vec: FixedSizeVector<u32, 5> = FixedSizeVector::new();
        vec.push_back(1);
        vec.push_back(2);
        vec.push_back(3);

        drop(vec); // KANI verifies no leaks
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use super::*;

    /// Element type counting constructions and destructions.
    struct Tracked<'a> {
        value: u32,
        drops: &'a Cell<usize>,
    }

    impl<'a> Tracked<'a> {
        fn new(value: u32, constructions: &Cell<usize>, drops: &'a Cell<usize>) -> Self {
            constructions.set(constructions.get() + 1);
            Self { value, drops }
        }
    }

    impl Drop for Tracked<'_> {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    #[test]
    fn test_new() {
        let vec: FixedSizeVector<u32, 10> = FixedSizeVector::new();
        assert_eq!(vec.size(), 0);
        assert_eq!(vec.capacity(), 10);
        assert_eq!(FixedSizeVector::<u32, 10>::CAPACITY, 10);
        assert!(vec.empty());
        assert!(!vec.full());
    }

    #[test]
    fn test_push_back_scenario() {
        let mut vec = FixedSizeVector::<i32, 4>::new();
        vec.push_back(1);
        vec.push_back(2);
        vec.push_back(3);

        assert_eq!(vec.size(), 3);
        assert!(!vec.full());
        // SAFETY: three live elements.
        let raw = unsafe { slice::from_raw_parts(vec.data(), vec.size()) };
        assert_eq!(raw, &[1, 2, 3]);

        vec.push_back(4);
        assert_eq!(vec.size(), 4);
        assert!(vec.full());
    }

    #[test]
    #[should_panic(expected = "Element inserted into a full fixed-size vector")]
    fn test_fifth_push_is_contract_violation() {
        let mut vec = FixedSizeVector::<i32, 4>::new();
        for i in 1..=4 {
            vec.push_back(i);
        }
        vec.push_back(5);
    }

    #[test]
    fn test_emplace_back_constructs_once() {
        let constructions = Cell::new(0);
        let drops = Cell::new(0);
        {
            let mut vec = FixedSizeVector::<Tracked<'_>, 1>::new();
            vec.emplace_back(|| Tracked::new(7, &constructions, &drops));

            assert_eq!(constructions.get(), 1);
            assert_eq!(vec.size(), 1);
            assert!(vec.full());
            assert_eq!(vec[0].value, 7);
            assert_eq!(drops.get(), 0);
        }
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn test_emplace_back_on_full_does_not_construct() {
        let constructions = Cell::new(0);
        let drops = Cell::new(0);
        let mut vec = FixedSizeVector::<Tracked<'_>, 1>::new();
        vec.emplace_back(|| Tracked::new(1, &constructions, &drops));

        assert_eq!(
            vec.try_emplace_back(|| Tracked::new(2, &constructions, &drops)),
            Err(Error::FIXED_VECTOR_CAPACITY_EXCEEDED)
        );
        assert_eq!(constructions.get(), 1);
    }

    #[test]
    fn test_drop_destroys_each_live_element_once() {
        let constructions = Cell::new(0);
        let drops = Cell::new(0);
        {
            let mut vec = FixedSizeVector::<Tracked<'_>, 8>::new();
            for i in 0..5 {
                vec.push_back(Tracked::new(i, &constructions, &drops));
            }
        }
        assert_eq!(constructions.get(), 5);
        assert_eq!(drops.get(), 5);
    }

    #[test]
    fn test_try_push_back() {
        let mut vec = FixedSizeVector::<u32, 2>::new();

        assert!(vec.try_push_back(1).is_ok());
        assert!(vec.try_push_back(2).is_ok());
        assert_eq!(vec.try_push_back(3), Err(Error::FIXED_VECTOR_CAPACITY_EXCEEDED));
        assert_eq!(vec.size(), 2);
    }

    #[test]
    fn test_index_mut() {
        let mut vec = FixedSizeVector::<u32, 3>::new();
        vec.push_back(1);
        vec.push_back(2);
        vec[1] = 20;
        assert_eq!(vec[1], 20);
        assert_eq!(vec.as_slice(), &[1, 20]);
    }

    #[test]
    #[should_panic(expected = "Index at or beyond the size")]
    fn test_index_past_size_is_contract_violation() {
        let mut vec = FixedSizeVector::<u32, 8>::new();
        vec.push_back(1);
        let _ = vec[1];
    }

    #[test]
    fn test_checked_access() {
        let mut vec = FixedSizeVector::<u32, 8>::new();
        vec.push_back(5);

        assert_eq!(vec.get(0), Some(&5));
        assert_eq!(vec.get(1), None);
        assert_eq!(vec.try_get(0), Ok(&5));
        assert_eq!(vec.try_get(3), Err(Error::FIXED_VECTOR_INDEX_OUT_OF_BOUNDS));
        if let Some(first) = vec.get_mut(0) {
            *first = 6;
        }
        assert_eq!(vec[0], 6);
    }

    #[test]
    fn test_unchecked_access() {
        let mut vec = FixedSizeVector::<u32, 4>::new();
        // SAFETY: the vector has free slots and the index is live.
        unsafe {
            vec.push_back_unchecked(11);
            vec.emplace_back_unchecked(|| 12);
            assert_eq!(*vec.get_unchecked(1), 12);
            *vec.get_unchecked_mut(0) = 10;
        }
        assert_eq!(vec.as_slice(), &[10, 12]);
        // SAFETY: two live elements.
        assert_eq!(unsafe { vec.pop_back_unchecked() }, 12);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "Index at or beyond the size")]
    fn test_unchecked_access_is_verified_in_debug_builds() {
        let vec = FixedSizeVector::<u32, 4>::new();
        // SAFETY: intentionally violated; debug builds halt before the read.
        let _ = unsafe { vec.get_unchecked(0) };
    }

    #[test]
    fn test_pop_back() {
        let mut vec = FixedSizeVector::<u32, 3>::new();
        assert_eq!(vec.pop_back(), None);
        vec.push_back(1);
        vec.push_back(2);
        assert_eq!(vec.pop_back(), Some(2));
        assert_eq!(vec.pop_back(), Some(1));
        assert_eq!(vec.pop_back(), None);
        assert!(vec.empty());
    }

    #[test]
    fn test_erase_preserves_order() {
        let mut vec = FixedSizeVector::<u32, 5>::new();
        vec.extend([1, 2, 3, 4, 5]);

        assert_eq!(vec.erase(1), 2);
        assert_eq!(vec.as_slice(), &[1, 3, 4, 5]);
        assert_eq!(vec.erase(3), 5);
        assert_eq!(vec.as_slice(), &[1, 3, 4]);
        assert_eq!(vec.erase(0), 1);
        assert_eq!(vec.as_slice(), &[3, 4]);
    }

    #[test]
    #[should_panic(expected = "Index at or beyond the size")]
    fn test_erase_out_of_bounds() {
        let mut vec = FixedSizeVector::<u32, 5>::new();
        vec.push_back(1);
        vec.erase(1);
    }

    #[test]
    #[should_panic(expected = "Index at or beyond the size")]
    fn test_swap_remove_out_of_bounds() {
        let mut vec = FixedSizeVector::<u32, 4>::new();
        vec.extend([1, 2]);
        vec.swap_remove(2);
    }

    #[test]
    #[should_panic(expected = "Index at or beyond the size")]
    fn test_swap_remove_on_empty() {
        let mut vec = FixedSizeVector::<u32, 4>::new();
        vec.swap_remove(0);
    }

    #[test]
    #[should_panic(expected = "Index at or beyond the size")]
    fn test_swap_out_of_bounds() {
        let mut vec = FixedSizeVector::<u32, 4>::new();
        vec.extend([1, 2, 3]);
        vec.swap(0, 3);
    }

    #[test]
    fn test_erase_drops_only_removed_element() {
        let constructions = Cell::new(0);
        let drops = Cell::new(0);
        let mut vec = FixedSizeVector::<Tracked<'_>, 4>::new();
        for i in 0..4 {
            vec.push_back(Tracked::new(i, &constructions, &drops));
        }

        let removed = vec.erase(1);
        assert_eq!(removed.value, 1);
        assert_eq!(drops.get(), 0);
        drop(removed);
        assert_eq!(drops.get(), 1);

        let values: [u32; 3] = [vec[0].value, vec[1].value, vec[2].value];
        assert_eq!(values, [0, 2, 3]);
        drop(vec);
        assert_eq!(drops.get(), 4);
    }

    #[test]
    fn test_swap_remove_and_swap() {
        let mut vec = FixedSizeVector::<u32, 4>::new();
        vec.extend([1, 2, 3, 4]);

        assert_eq!(vec.swap_remove(0), 1);
        assert_eq!(vec.as_slice(), &[4, 2, 3]);

        vec.swap(0, 2);
        assert_eq!(vec.as_slice(), &[3, 2, 4]);
    }

    #[test]
    fn test_truncate_and_clear() {
        let constructions = Cell::new(0);
        let drops = Cell::new(0);
        let mut vec = FixedSizeVector::<Tracked<'_>, 6>::new();
        for i in 0..6 {
            vec.push_back(Tracked::new(i, &constructions, &drops));
        }

        vec.truncate(10);
        assert_eq!(vec.size(), 6);

        vec.truncate(4);
        assert_eq!(vec.size(), 4);
        assert_eq!(drops.get(), 2);

        vec.clear();
        assert!(vec.empty());
        assert_eq!(drops.get(), 6);

        drop(vec);
        assert_eq!(drops.get(), 6);
    }

    #[test]
    fn test_front_back() {
        let mut vec = FixedSizeVector::<u32, 4>::new();
        assert_eq!(vec.front(), None);
        assert_eq!(vec.back(), None);

        vec.extend([7, 8, 9]);
        assert_eq!(vec.front(), Some(&7));
        assert_eq!(vec.back(), Some(&9));

        if let Some(last) = vec.back_mut() {
            *last = 90;
        }
        if let Some(first) = vec.front_mut() {
            *first = 70;
        }
        assert_eq!(vec.as_slice(), &[70, 8, 90]);
    }

    #[test]
    fn test_iter() {
        let mut vec = FixedSizeVector::<u32, 10>::new();
        vec.extend([1, 2, 3]);

        let mut iter = vec.iter();
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next(), Some(&3));
        assert_eq!(iter.next(), None);

        for item in &mut vec {
            *item *= 10;
        }
        assert_eq!(vec.as_slice(), &[10, 20, 30]);
    }

    #[test]
    fn test_into_iter_drops_unyielded() {
        let constructions = Cell::new(0);
        let drops = Cell::new(0);
        let mut vec = FixedSizeVector::<Tracked<'_>, 4>::new();
        for i in 0..4 {
            vec.push_back(Tracked::new(i, &constructions, &drops));
        }

        let mut iter = vec.into_iter();
        assert_eq!(iter.len(), 4);
        let first = iter.next();
        let last = iter.next_back();
        assert_eq!(first.as_ref().map(|t| t.value), Some(0));
        assert_eq!(last.as_ref().map(|t| t.value), Some(3));
        assert_eq!(drops.get(), 0);

        drop(iter);
        assert_eq!(drops.get(), 2);
        drop(first);
        drop(last);
        assert_eq!(drops.get(), 4);
    }

    #[test]
    fn test_try_extend_from_slice() {
        let mut vec = FixedSizeVector::<u32, 4>::new();
        assert!(vec.try_extend_from_slice(&[1, 2, 3]).is_ok());
        assert_eq!(
            vec.try_extend_from_slice(&[4, 5]),
            Err(Error::FIXED_VECTOR_CAPACITY_EXCEEDED)
        );
        assert_eq!(vec.as_slice(), &[1, 2, 3]);
        assert!(vec.try_extend_from_slice(&[4]).is_ok());
        assert!(vec.full());
    }

    #[test]
    fn test_push_back_cloned() {
        let mut vec = FixedSizeVector::<u32, 2>::new();
        let value = 42;
        vec.push_back_cloned(&value);
        assert_eq!(vec[0], 42);
    }

    #[test]
    fn test_move_preserves_elements() {
        let constructions = Cell::new(0);
        let drops = Cell::new(0);
        let mut vec = FixedSizeVector::<Tracked<'_>, 3>::new();
        vec.push_back(Tracked::new(1, &constructions, &drops));
        vec.push_back(Tracked::new(2, &constructions, &drops));

        let moved = vec;
        assert_eq!(moved.size(), 2);
        assert_eq!(moved[1].value, 2);
        drop(moved);
        assert_eq!(drops.get(), 2);
    }

    #[test]
    fn test_equality() {
        let mut a = FixedSizeVector::<u32, 4>::new();
        let mut b = FixedSizeVector::<u32, 8>::new();
        a.extend([1, 2]);
        b.extend([1, 2]);
        assert!(a == b);
        assert!(a == *[1, 2].as_slice());
        b.push_back(3);
        assert!(a != b);
    }

    #[test]
    fn test_zero_capacity() {
        let mut vec = FixedSizeVector::<u32, 0>::new();
        assert!(vec.empty());
        assert!(vec.full());
        assert!(vec.try_push_back(1).is_err());
        assert_eq!(vec.pop_back(), None);
    }
}
