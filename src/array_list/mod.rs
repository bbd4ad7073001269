//! A contiguous, growable list with checked positional access.

use alloc::vec::Vec;
use core::borrow::{Borrow, BorrowMut};
use core::fmt;
use core::marker::PhantomData;
use core::mem;
use core::ops;
use core::ptr;
use core::slice;

use crate::error::{ListError, UpdateError};
use crate::index::{element_index, insert_index, Grow, GrowDoubling, Index, DEFAULT_CAPACITY};

use self::buffer::ListBuffer;

pub use self::into_iter::IntoIter;

mod buffer;
mod into_iter;

/// A list stored in a single contiguous buffer.
///
/// Items occupy the slots `[0, len)` of the buffer in order. When an
/// insertion would exceed the capacity, the items are moved into a new
/// buffer sized according to the growth policy `G`.
pub struct ArrayList<T, G: Grow = GrowDoubling> {
    buffer: ListBuffer<T>,
    grow: PhantomData<G>,
}

impl<T> ArrayList<T> {
    /// Constructs a new, empty `ArrayList<T>` with the default capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// # use flex_list::ArrayList;
    /// let list: ArrayList<i32> = ArrayList::new();
    /// assert_eq!(list.capacity(), 10);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_grow(DEFAULT_CAPACITY, GrowDoubling)
    }

    /// Constructs a new, empty `ArrayList<T>` with the given capacity.
    /// A capacity less than one selects the default capacity.
    #[inline]
    pub fn with_capacity<I: Index>(capacity: I) -> Self {
        Self::with_grow(capacity, GrowDoubling)
    }

    /// Constructs an `ArrayList<T>` holding a copy of `data`, with a
    /// capacity equal to its length.
    #[inline]
    pub fn from_slice(data: &[T]) -> Self
    where
        T: Clone,
    {
        Self::from_slice_with_grow(data, GrowDoubling)
    }
}

impl<T, G: Grow> ArrayList<T, G> {
    /// Constructs a new, empty `ArrayList<T, G>` with the given capacity
    /// and growth policy. A capacity less than one selects the default capacity.
    pub fn with_grow<I: Index>(capacity: I, _grow: G) -> Self {
        let capacity = match capacity.try_to_usize() {
            Some(cap) if cap > 0 => cap,
            _ => DEFAULT_CAPACITY,
        };
        Self::from_buffer(ListBuffer::with_capacity(capacity))
    }

    /// Constructs an `ArrayList<T, G>` holding a copy of `data`, with a
    /// capacity equal to its length.
    pub fn from_slice_with_grow(data: &[T], _grow: G) -> Self
    where
        T: Clone,
    {
        let mut list = Self::from_buffer(ListBuffer::with_capacity(data.len()));
        list.extend_from_slice(data);
        list
    }

    #[inline]
    fn from_buffer(buffer: ListBuffer<T>) -> Self {
        Self {
            buffer,
            grow: PhantomData,
        }
    }

    /// Get the number of items in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.length()
    }

    /// Check if the list contains no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the number of items the buffer can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Access the items as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.buffer.as_slice()
    }

    /// Access the items as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.buffer.as_mut_slice()
    }

    /// Iterate over references to the items, from first to last.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterate over mutable references to the items, from first to last.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    fn ensure_capacity(&mut self, minimum: usize) {
        let capacity = self.buffer.capacity();
        if minimum > capacity {
            let next = G::next_capacity(capacity, minimum);
            trace!("ArrayList growing from capacity {} to {}", capacity, next);
            self.buffer.resize(next);
        }
    }

    /// Insert an item at the front of the list, shifting all items right.
    #[inline]
    pub fn add_first(&mut self, value: T) -> Result<(), UpdateError<T>> {
        self.insert(0usize, value)
    }

    /// Append an item to the end of the list.
    pub fn add_last(&mut self, value: T) {
        let length = self.len();
        self.ensure_capacity(length + 1);
        self.buffer.uninit_index(length).write(value);
        // SAFETY: the slot at `length` was initialized above
        unsafe { self.buffer.set_length(length + 1) };
    }

    /// Insert an item at position `index`, shifting the items `[index, len)`
    /// right by one. Positions `0..=len` are accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// # use flex_list::{ArrayList, ListError};
    /// let mut list = ArrayList::from_slice(&[1, 3]);
    /// list.insert(1, 2).unwrap();
    /// assert_eq!(list, [1, 2, 3]);
    ///
    /// let err = list.insert(-1, 0).unwrap_err();
    /// assert_eq!(err.error(), &ListError::IndexOutOfBounds { index: -1, size: 3 });
    /// assert_eq!(err.into_value(), 0);
    /// ```
    pub fn insert<I: Index>(&mut self, index: I, value: T) -> Result<(), UpdateError<T>> {
        let length = self.len();
        let index = match insert_index(index, length) {
            Ok(index) => index,
            Err(error) => return Err(UpdateError::new(error, value)),
        };
        self.ensure_capacity(length + 1);
        unsafe {
            let head = self.buffer.data_ptr_mut().add(index);
            let tail_count = length - index;
            if tail_count > 0 {
                ptr::copy(head, head.add(1), tail_count);
            }
            head.write(value);
            self.buffer.set_length(length + 1);
        }
        Ok(())
    }

    /// Access the item at position `index`.
    pub fn get<I: Index>(&self, index: I) -> Result<&T, ListError> {
        let index = element_index(index, self.len())?;
        Ok(&self.as_slice()[index])
    }

    /// Mutably access the item at position `index`.
    pub fn get_mut<I: Index>(&mut self, index: I) -> Result<&mut T, ListError> {
        let index = element_index(index, self.len())?;
        Ok(&mut self.as_mut_slice()[index])
    }

    /// Access the first item, or fail with [`ListError::Empty`].
    #[inline]
    pub fn get_first(&self) -> Result<&T, ListError> {
        self.as_slice().first().ok_or(ListError::Empty)
    }

    /// Access the last item, or fail with [`ListError::Empty`].
    #[inline]
    pub fn get_last(&self) -> Result<&T, ListError> {
        self.as_slice().last().ok_or(ListError::Empty)
    }

    /// Overwrite the item at position `index`, returning the previous item.
    pub fn set<I: Index>(&mut self, index: I, value: T) -> Result<T, UpdateError<T>> {
        match self.get_mut(index) {
            Ok(slot) => Ok(mem::replace(slot, value)),
            Err(error) => Err(UpdateError::new(error, value)),
        }
    }

    /// Remove and return the item at position `index`, shifting the items
    /// `(index, len)` left by one.
    pub fn remove<I: Index>(&mut self, index: I) -> Result<T, ListError> {
        let length = self.len();
        let index = element_index(index, length)?;
        unsafe {
            let head = self.buffer.data_ptr_mut().add(index);
            let result = head.read();
            let tail_count = length - index - 1;
            if tail_count > 0 {
                ptr::copy(head.add(1), head, tail_count);
            }
            // the vacated last slot no longer holds an item
            self.buffer.set_length(length - 1);
            Ok(result)
        }
    }

    /// Remove and return the first item, or fail with [`ListError::Empty`].
    pub fn remove_first(&mut self) -> Result<T, ListError> {
        if self.is_empty() {
            return Err(ListError::Empty);
        }
        self.remove(0usize)
    }

    /// Remove and return the last item, or fail with [`ListError::Empty`].
    pub fn remove_last(&mut self) -> Result<T, ListError> {
        match self.len() {
            0 => Err(ListError::Empty),
            length => self.remove(length - 1),
        }
    }

    /// Remove the first item equal to `value`. Returns `false` when no
    /// such item exists.
    pub fn remove_value(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.iter().position(|item| item == value) {
            Some(index) => self.remove(index).is_ok(),
            None => false,
        }
    }

    /// Check if any item is equal to `value`.
    #[inline]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value) != -1
    }

    /// The position of the first item equal to `value`, or -1.
    pub fn index_of(&self, value: &T) -> isize
    where
        T: PartialEq,
    {
        match self.iter().position(|item| item == value) {
            Some(index) => index as isize,
            None => -1,
        }
    }

    /// The position of the last item equal to `value`, or -1.
    pub fn last_index_of(&self, value: &T) -> isize
    where
        T: PartialEq,
    {
        match self.iter().rposition(|item| item == value) {
            Some(index) => index as isize,
            None => -1,
        }
    }

    /// Drop all items. The capacity is retained.
    #[inline]
    pub fn clear(&mut self) {
        self.buffer.truncate(0);
    }

    /// Clone the items into a new `Vec`.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.as_slice().to_vec()
    }

    /// Reverse the order of the items in place.
    pub fn reverse(&mut self) {
        let items = self.as_mut_slice();
        let (mut front, mut back) = (0, items.len());
        while front + 1 < back {
            back -= 1;
            items.swap(front, back);
            front += 1;
        }
    }

    /// Reallocate the buffer to exactly the current length.
    pub fn shrink_to_fit(&mut self) {
        let length = self.len();
        if self.capacity() != length {
            trace!(
                "ArrayList shrinking from capacity {} to {}",
                self.capacity(),
                length
            );
            self.buffer.resize(length);
        }
    }

    /// Append clones of all the items in `items`.
    pub fn extend_from_slice(&mut self, items: &[T])
    where
        T: Clone,
    {
        let mut length = self.len();
        self.ensure_capacity(length + items.len());
        for item in items {
            self.buffer.uninit_index(length).write(item.clone());
            length += 1;
            // SAFETY: the slot at `length - 1` was initialized above
            unsafe { self.buffer.set_length(length) };
        }
    }
}

impl<T, G: Grow> AsRef<[T]> for ArrayList<T, G> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, G: Grow> AsMut<[T]> for ArrayList<T, G> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, G: Grow> Borrow<[T]> for ArrayList<T, G> {
    #[inline]
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, G: Grow> BorrowMut<[T]> for ArrayList<T, G> {
    #[inline]
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: Clone, G: Grow> Clone for ArrayList<T, G> {
    fn clone(&self) -> Self {
        let mut inst = Self::from_buffer(ListBuffer::with_capacity(self.len()));
        inst.extend_from_slice(self.as_slice());
        inst
    }
}

impl<T: fmt::Debug, G: Grow> fmt::Debug for ArrayList<T, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_slice().fmt(f)
    }
}

/// Renders the items as `[a, b, c]`.
impl<T: fmt::Display, G: Grow> fmt::Display for ArrayList<T, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, item) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(item, f)?;
        }
        f.write_str("]")
    }
}

impl<T, G: Grow + Default> Default for ArrayList<T, G> {
    #[inline]
    fn default() -> Self {
        Self::with_grow(DEFAULT_CAPACITY, G::default())
    }
}

impl<T, G: Grow> ops::Index<usize> for ArrayList<T, G> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(item) => item,
            Err(error) => error.panic(),
        }
    }
}

impl<T, G: Grow> ops::IndexMut<usize> for ArrayList<T, G> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(item) => item,
            Err(error) => error.panic(),
        }
    }
}

impl<T, G: Grow> Extend<T> for ArrayList<T, G> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        let iter = iter.into_iter();
        let (min_len, _) = iter.size_hint();
        self.ensure_capacity(self.len().saturating_add(min_len));
        for item in iter {
            self.add_last(item);
        }
    }
}

impl<'a, T: Clone + 'a, G: Grow> Extend<&'a T> for ArrayList<T, G> {
    #[inline]
    fn extend<A: IntoIterator<Item = &'a T>>(&mut self, iter: A) {
        self.extend(iter.into_iter().cloned())
    }
}

impl<T, G: Grow> FromIterator<T> for ArrayList<T, G> {
    fn from_iter<A: IntoIterator<Item = T>>(iter: A) -> Self {
        let iter = iter.into_iter();
        let (min_cap, _) = iter.size_hint();
        let mut list = Self::from_buffer(ListBuffer::with_capacity(min_cap));
        list.extend(iter);
        list
    }
}

impl<T: Clone, G: Grow> From<&[T]> for ArrayList<T, G> {
    #[inline]
    fn from(data: &[T]) -> Self {
        let mut list = Self::from_buffer(ListBuffer::with_capacity(data.len()));
        list.extend_from_slice(data);
        list
    }
}

impl<T, G: Grow> From<Vec<T>> for ArrayList<T, G> {
    #[inline]
    fn from(vec: Vec<T>) -> Self {
        Self::from_buffer(ListBuffer::from_boxed_slice(vec.into_boxed_slice()))
    }
}

impl<T, G: Grow, const N: usize> From<[T; N]> for ArrayList<T, G> {
    #[inline]
    fn from(data: [T; N]) -> Self {
        Vec::from(data).into()
    }
}

impl<T, G: Grow> From<ArrayList<T, G>> for Vec<T> {
    #[inline]
    fn from(list: ArrayList<T, G>) -> Self {
        list.into_iter().collect()
    }
}

impl<T, G: Grow> IntoIterator for ArrayList<T, G> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.buffer)
    }
}

impl<'a, T, G: Grow> IntoIterator for &'a ArrayList<T, G> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, G: Grow> IntoIterator for &'a mut ArrayList<T, G> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T1, G1, T2, G2> PartialEq<ArrayList<T2, G2>> for ArrayList<T1, G1>
where
    T1: PartialEq<T2>,
    G1: Grow,
    G2: Grow,
{
    #[inline]
    fn eq(&self, other: &ArrayList<T2, G2>) -> bool {
        self.as_slice().eq(other.as_slice())
    }
}

impl<T: Eq, G: Grow> Eq for ArrayList<T, G> {}

impl<T1, G1, T2> PartialEq<[T2]> for ArrayList<T1, G1>
where
    T1: PartialEq<T2>,
    G1: Grow,
{
    #[inline]
    fn eq(&self, other: &[T2]) -> bool {
        self.as_slice().eq(other)
    }
}

impl<T1, G1, T2> PartialEq<&[T2]> for ArrayList<T1, G1>
where
    T1: PartialEq<T2>,
    G1: Grow,
{
    #[inline]
    fn eq(&self, other: &&[T2]) -> bool {
        self.as_slice().eq(*other)
    }
}

impl<T1, G1, T2, const N: usize> PartialEq<[T2; N]> for ArrayList<T1, G1>
where
    T1: PartialEq<T2>,
    G1: Grow,
{
    #[inline]
    fn eq(&self, other: &[T2; N]) -> bool {
        self.as_slice().eq(&other[..])
    }
}

impl<T1, G1, T2> PartialEq<Vec<T2>> for ArrayList<T1, G1>
where
    T1: PartialEq<T2>,
    G1: Grow,
{
    #[inline]
    fn eq(&self, other: &Vec<T2>) -> bool {
        self.as_slice().eq(other.as_slice())
    }
}

#[cfg(feature = "zeroize")]
impl<T: zeroize::Zeroize, G: Grow> zeroize::Zeroize for ArrayList<T, G> {
    fn zeroize(&mut self) {
        for item in self.iter_mut() {
            item.zeroize();
        }
        self.clear();
        self.buffer.zeroize_spare();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::GrowExact;

    #[test]
    fn grow_exact_policy() {
        let mut list = ArrayList::with_grow(1, GrowExact);
        for value in 0..5 {
            list.add_last(value);
            assert_eq!(list.capacity(), list.len().max(1));
        }
    }

    #[test]
    fn remove_drops_no_extra_items() {
        use alloc::rc::Rc;

        let item = Rc::new(());
        let mut list = ArrayList::new();
        for _ in 0..4 {
            list.add_last(item.clone());
        }
        drop(list.remove(1usize));
        assert_eq!(Rc::strong_count(&item), 4);
        list.shrink_to_fit();
        assert_eq!(Rc::strong_count(&item), 4);
        list.clear();
        assert_eq!(Rc::strong_count(&item), 1);
    }

    #[cfg(feature = "zeroize")]
    #[test]
    fn zeroize_wipes_spare_slots() {
        use zeroize::Zeroize;

        let mut list = ArrayList::<[u8; 4]>::from_slice(&[[0xaa; 4], [0xbb; 4], [0xcc; 4]]);
        assert_eq!(list.remove(0usize), Ok([0xaa; 4]));
        // the shift leaves a copy of the last item behind the length
        let stale = unsafe { list.buffer.uninit_index(2).assume_init_read() };
        assert_eq!(stale, [0xcc; 4]);

        list.zeroize();
        assert!(list.is_empty());
        assert_eq!(list.capacity(), 3);
        for index in 0..list.capacity() {
            let slot = unsafe { list.buffer.uninit_index(index).assume_init_read() };
            assert_eq!(slot, [0u8; 4]);
        }
    }

    #[test]
    fn into_iter_drops_remainder() {
        use alloc::rc::Rc;

        let item = Rc::new(());
        let list: ArrayList<_> = core::iter::repeat(item.clone()).take(3).collect();
        let mut iter = list.into_iter();
        assert!(iter.next().is_some());
        assert_eq!(iter.len(), 2);
        drop(iter);
        assert_eq!(Rc::strong_count(&item), 1);
    }
}
