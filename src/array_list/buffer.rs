//! `ArrayList` backing buffer.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::mem::{self, MaybeUninit};
use core::ptr;
use core::slice;

/// An exclusively-owned slot buffer with a count of initialized items.
///
/// Slots `[0, length)` hold live items, slots `[length, capacity)` are
/// uninitialized. The live items are dropped with the buffer.
pub(crate) struct ListBuffer<T> {
    slots: Box<[MaybeUninit<T>]>,
    length: usize,
}

fn alloc_slots<T>(capacity: usize) -> Box<[MaybeUninit<T>]> {
    let mut slots = Vec::with_capacity(capacity);
    // SAFETY: `MaybeUninit` does not require initialization.
    unsafe { slots.set_len(capacity) };
    slots.into_boxed_slice()
}

impl<T> ListBuffer<T> {
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: alloc_slots(capacity),
            length: 0,
        }
    }

    /// Take ownership of the items in a boxed slice. The capacity of the
    /// buffer is the length of the slice.
    #[inline]
    pub fn from_boxed_slice(items: Box<[T]>) -> Self {
        let length = items.len();
        // SAFETY: `MaybeUninit<T>` has the same layout as `T`.
        let slots = unsafe { Box::from_raw(Box::into_raw(items) as *mut [MaybeUninit<T>]) };
        Self { slots, length }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Set the number of initialized items.
    ///
    /// # Safety
    /// `length` must not exceed the capacity, and the slots `[0, length)` must be
    /// initialized. Items in slots beyond `length` are forgotten, not dropped.
    #[inline]
    pub unsafe fn set_length(&mut self, length: usize) {
        debug_assert!(length <= self.capacity());
        self.length = length;
    }

    #[inline]
    pub fn data_ptr(&self) -> *const T {
        self.slots.as_ptr().cast()
    }

    #[inline]
    pub fn data_ptr_mut(&mut self) -> *mut T {
        self.slots.as_mut_ptr().cast()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.data_ptr(), self.length) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.data_ptr_mut(), self.length) }
    }

    /// Access a slot of the buffer, which may or may not be initialized.
    #[inline]
    pub fn uninit_index(&mut self, index: usize) -> &mut MaybeUninit<T> {
        &mut self.slots[index]
    }

    /// Move the live items into a new allocation of exactly `capacity` slots.
    /// The previous allocation is released without dropping any item.
    pub fn resize(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.length);
        let mut slots = alloc_slots::<T>(capacity);
        unsafe {
            ptr::copy_nonoverlapping(self.data_ptr(), slots.as_mut_ptr().cast(), self.length);
        }
        #[allow(unused_mut)]
        let mut released = mem::replace(&mut self.slots, slots);
        // the moved items leave bitwise copies behind
        #[cfg(feature = "zeroize")]
        zeroize::Zeroize::zeroize(&mut released[..]);
        drop(released);
    }

    /// Overwrite every slot beyond the initialized length with zeroes.
    #[cfg(feature = "zeroize")]
    pub fn zeroize_spare(&mut self) {
        let length = self.length;
        zeroize::Zeroize::zeroize(&mut self.slots[length..]);
    }

    /// Drop the items in the slots `[length, self.length)`.
    pub fn truncate(&mut self, length: usize) {
        let old_len = self.length;
        if length < old_len {
            self.length = length;
            unsafe {
                let to_drop: &mut [T] = slice::from_raw_parts_mut(
                    self.data_ptr_mut().add(length),
                    old_len - length,
                );
                ptr::drop_in_place(to_drop);
            }
        }
    }
}

impl<T> Drop for ListBuffer<T> {
    fn drop(&mut self) {
        self.truncate(0);
    }
}
