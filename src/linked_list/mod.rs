//! A singly-linked list with head and tail tracking.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::marker::PhantomData;
use core::mem;
use core::ptr::NonNull;

use const_default::ConstDefault;

use crate::error::{ListError, UpdateError};
use crate::index::{element_index, insert_index, Index};

pub use self::iter::{IntoIter, Iter, IterMut};

mod iter;

type Link<T> = Option<NonNull<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

impl<T> Node<T> {
    #[inline]
    fn alloc(value: T, next: Link<T>) -> NonNull<Self> {
        NonNull::from(Box::leak(Box::new(Node { value, next })))
    }

    /// Reclaim a node which has been unlinked from the chain.
    ///
    /// # Safety
    /// The pointer must have been produced by `Node::alloc` and must no
    /// longer be reachable from the list.
    #[inline]
    unsafe fn release(node: NonNull<Self>) -> Box<Self> {
        let mut node = Box::from_raw(node.as_ptr());
        node.next = None;
        node
    }
}

/// A list of individually allocated nodes, each linked to its successor.
///
/// The list owns the first node, and each node owns the link to the node
/// following it. The last node is tracked separately so that appending
/// and reading the last item do not require a traversal.
pub struct LinkedList<T> {
    head: Link<T>,
    tail: Link<T>,
    size: usize,
    marker: PhantomData<Box<Node<T>>>,
}

impl<T> LinkedList<T> {
    /// Constructs a new, empty `LinkedList<T>`.
    #[inline]
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            size: 0,
            marker: PhantomData,
        }
    }

    /// Constructs a `LinkedList<T>` holding a copy of `data`.
    pub fn from_slice(data: &[T]) -> Self
    where
        T: Clone,
    {
        data.iter().cloned().collect()
    }

    /// Get the number of items in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Check if the list contains no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Iterate over references to the items, from first to last.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head, self.size)
    }

    /// Iterate over mutable references to the items, from first to last.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.head, self.size)
    }

    /// Walk `index` links from the head.
    fn node_at(&self, index: usize) -> Link<T> {
        let mut cur = self.head;
        for _ in 0..index {
            cur = cur.and_then(|node| unsafe { node.as_ref().next });
        }
        cur
    }

    /// Locate the node preceding position `index`, which must satisfy
    /// `1 <= index < len`.
    fn predecessor(&self, index: usize) -> Result<NonNull<Node<T>>, ListError> {
        if index < 1 || index >= self.size {
            return Err(ListError::out_of_bounds(index, self.size));
        }
        self.node_at(index - 1)
            .ok_or_else(|| ListError::out_of_bounds(index, self.size))
    }

    /// Locate the node at a position already checked against the length.
    /// The last position resolves to the tail without a traversal.
    #[inline]
    fn checked_node(&self, index: usize) -> Link<T> {
        if index + 1 == self.size {
            self.tail
        } else {
            self.node_at(index)
        }
    }

    /// Insert an item at the head of the list.
    pub fn add_first(&mut self, value: T) {
        let node = Node::alloc(value, self.head);
        self.head = Some(node);
        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.size += 1;
    }

    /// Append an item at the tail of the list.
    pub fn add_last(&mut self, value: T) {
        let Some(mut tail) = self.tail else {
            self.add_first(value);
            return;
        };
        let node = Node::alloc(value, None);
        unsafe { tail.as_mut().next = Some(node) };
        self.tail = Some(node);
        self.size += 1;
    }

    /// Insert an item at position `index`. Positions `0..=len` are accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// # use flex_list::LinkedList;
    /// let mut list = LinkedList::from_slice(&[1, 3]);
    /// list.insert(1, 2).unwrap();
    /// assert_eq!(list.to_string(), "[1 -> 2 -> 3]");
    /// assert!(list.insert(4, 5).is_err());
    /// ```
    pub fn insert<I: Index>(&mut self, index: I, value: T) -> Result<(), UpdateError<T>> {
        match insert_index(index, self.size) {
            Ok(0) => self.add_first(value),
            Ok(index) if index == self.size => self.add_last(value),
            Ok(index) => {
                let mut prev = match self.predecessor(index) {
                    Ok(prev) => prev,
                    Err(error) => return Err(UpdateError::new(error, value)),
                };
                unsafe {
                    let node = Node::alloc(value, prev.as_ref().next);
                    prev.as_mut().next = Some(node);
                }
                self.size += 1;
            }
            Err(error) => return Err(UpdateError::new(error, value)),
        }
        Ok(())
    }

    /// Access the item at position `index`. The last position is read from
    /// the tail link without a walk.
    pub fn get<I: Index>(&self, index: I) -> Result<&T, ListError> {
        let pos = element_index(index, self.size)?;
        match self.checked_node(pos) {
            Some(node) => Ok(unsafe { &(*node.as_ptr()).value }),
            None => Err(ListError::out_of_bounds(index, self.size)),
        }
    }

    /// Mutably access the item at position `index`.
    pub fn get_mut<I: Index>(&mut self, index: I) -> Result<&mut T, ListError> {
        let pos = element_index(index, self.size)?;
        match self.checked_node(pos) {
            Some(node) => Ok(unsafe { &mut (*node.as_ptr()).value }),
            None => Err(ListError::out_of_bounds(index, self.size)),
        }
    }

    /// Access the first item, or fail with [`ListError::Empty`].
    #[inline]
    pub fn get_first(&self) -> Result<&T, ListError> {
        match self.head {
            Some(node) => Ok(unsafe { &(*node.as_ptr()).value }),
            None => Err(ListError::Empty),
        }
    }

    /// Access the last item, or fail with [`ListError::Empty`].
    #[inline]
    pub fn get_last(&self) -> Result<&T, ListError> {
        match self.tail {
            Some(node) => Ok(unsafe { &(*node.as_ptr()).value }),
            None => Err(ListError::Empty),
        }
    }

    /// Overwrite the item at position `index`, returning the previous item.
    pub fn set<I: Index>(&mut self, index: I, value: T) -> Result<T, UpdateError<T>> {
        match self.get_mut(index) {
            Ok(slot) => Ok(mem::replace(slot, value)),
            Err(error) => Err(UpdateError::new(error, value)),
        }
    }

    fn unlink_head(&mut self) -> Option<T> {
        let head = self.head?;
        unsafe {
            self.head = head.as_ref().next;
            if self.head.is_none() {
                self.tail = None;
            }
            self.size -= 1;
            Some(Node::release(head).value)
        }
    }

    /// Unlink the successor of `prev`, relinking `prev` to the node after it.
    ///
    /// # Safety
    /// `prev` must be a node of this list.
    unsafe fn unlink_after(&mut self, mut prev: NonNull<Node<T>>) -> Option<T> {
        let removed = prev.as_ref().next?;
        prev.as_mut().next = removed.as_ref().next;
        if prev.as_ref().next.is_none() {
            self.tail = Some(prev);
        }
        self.size -= 1;
        Some(Node::release(removed).value)
    }

    /// Remove and return the item at position `index`.
    pub fn remove<I: Index>(&mut self, index: I) -> Result<T, ListError> {
        let pos = element_index(index, self.size)?;
        let removed = if pos == 0 {
            self.unlink_head()
        } else {
            let prev = self.predecessor(pos)?;
            unsafe { self.unlink_after(prev) }
        };
        removed.ok_or_else(|| ListError::out_of_bounds(index, self.size))
    }

    /// Remove and return the first item, or fail with [`ListError::Empty`].
    #[inline]
    pub fn remove_first(&mut self) -> Result<T, ListError> {
        self.unlink_head().ok_or(ListError::Empty)
    }

    /// Remove and return the last item, or fail with [`ListError::Empty`].
    pub fn remove_last(&mut self) -> Result<T, ListError> {
        match self.size {
            0 => Err(ListError::Empty),
            size => self.remove(size - 1),
        }
    }

    /// Remove the first item equal to `value`. Returns `false` when no
    /// such item exists.
    pub fn remove_value(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let Some(head) = self.head else {
            return false;
        };
        if unsafe { &head.as_ref().value } == value {
            return self.unlink_head().is_some();
        }
        let mut cur = head;
        while let Some(next) = unsafe { cur.as_ref().next } {
            if unsafe { &next.as_ref().value } == value {
                return unsafe { self.unlink_after(cur) }.is_some();
            }
            cur = next;
        }
        false
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
        let mut found = -1;
        for (index, item) in self.iter().enumerate() {
            if item == value {
                found = index as isize;
            }
        }
        found
    }

    /// Release every node, detaching each from its successor.
    pub fn clear(&mut self) {
        let mut cur = self.head.take();
        self.tail = None;
        self.size = 0;
        while let Some(node) = cur {
            cur = unsafe { node.as_ref().next };
            drop(unsafe { Node::release(node) });
        }
    }

    /// Clone the items into a new `Vec`.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut vec = Vec::with_capacity(self.size);
        vec.extend(self.iter().cloned());
        vec
    }

    /// Reverse the order of the items by relinking the nodes in place.
    pub fn reverse(&mut self) {
        let mut prev: Link<T> = None;
        let mut cur = self.head;
        self.tail = self.head;
        while let Some(mut node) = cur {
            unsafe {
                cur = node.as_ref().next;
                node.as_mut().next = prev;
            }
            prev = Some(node);
        }
        self.head = prev;
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> ConstDefault for LinkedList<T> {
    const DEFAULT: Self = Self::new();
}

impl<T> Default for LinkedList<T> {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the items as `[a -> b -> c]`.
impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, item) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(" -> ")?;
            }
            fmt::Display::fmt(item, f)?;
        }
        f.write_str("]")
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        for item in iter {
            self.add_last(item);
        }
    }
}

impl<'a, T: Clone + 'a> Extend<&'a T> for LinkedList<T> {
    #[inline]
    fn extend<A: IntoIterator<Item = &'a T>>(&mut self, iter: A) {
        self.extend(iter.into_iter().cloned())
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<A: IntoIterator<Item = T>>(iter: A) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: Clone> From<&[T]> for LinkedList<T> {
    #[inline]
    fn from(data: &[T]) -> Self {
        Self::from_slice(data)
    }
}

impl<T> From<Vec<T>> for LinkedList<T> {
    #[inline]
    fn from(vec: Vec<T>) -> Self {
        vec.into_iter().collect()
    }
}

impl<T, const N: usize> From<[T; N]> for LinkedList<T> {
    #[inline]
    fn from(data: [T; N]) -> Self {
        data.into_iter().collect()
    }
}

impl<T> From<LinkedList<T>> for Vec<T> {
    #[inline]
    fn from(list: LinkedList<T>) -> Self {
        list.into_iter().collect()
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T1, T2> PartialEq<LinkedList<T2>> for LinkedList<T1>
where
    T1: PartialEq<T2>,
{
    #[inline]
    fn eq(&self, other: &LinkedList<T2>) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T1, T2> PartialEq<[T2]> for LinkedList<T1>
where
    T1: PartialEq<T2>,
{
    #[inline]
    fn eq(&self, other: &[T2]) -> bool {
        self.size == other.len() && self.iter().eq(other.iter())
    }
}

impl<T1, T2> PartialEq<&[T2]> for LinkedList<T1>
where
    T1: PartialEq<T2>,
{
    #[inline]
    fn eq(&self, other: &&[T2]) -> bool {
        self.eq(*other)
    }
}

impl<T1, T2, const N: usize> PartialEq<[T2; N]> for LinkedList<T1>
where
    T1: PartialEq<T2>,
{
    #[inline]
    fn eq(&self, other: &[T2; N]) -> bool {
        self.eq(&other[..])
    }
}

impl<T1, T2> PartialEq<Vec<T2>> for LinkedList<T1>
where
    T1: PartialEq<T2>,
{
    #[inline]
    fn eq(&self, other: &Vec<T2>) -> bool {
        self.eq(other.as_slice())
    }
}

// The tail link only ever aliases a node owned through the head chain.
unsafe impl<T: Send> Send for LinkedList<T> {}

unsafe impl<T: Sync> Sync for LinkedList<T> {}

#[cfg(feature = "zeroize")]
impl<T: zeroize::Zeroize> zeroize::Zeroize for LinkedList<T> {
    fn zeroize(&mut self) {
        for item in self.iter_mut() {
            item.zeroize();
        }
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_links<T>(list: &LinkedList<T>) {
        assert_eq!(list.head.is_none(), list.size == 0);
        assert_eq!(list.tail.is_none(), list.size == 0);
        if list.size > 0 {
            assert_eq!(list.node_at(list.size - 1), list.tail);
            let tail = list.tail.map(|node| unsafe { node.as_ref().next });
            assert_eq!(tail, Some(None));
        }
        assert_eq!(list.node_at(list.size), None);
    }

    #[test]
    fn predecessor_bounds() {
        let list = LinkedList::from_slice(&[1, 2, 3]);
        assert_eq!(
            list.predecessor(0),
            Err(ListError::IndexOutOfBounds { index: 0, size: 3 })
        );
        assert_eq!(
            list.predecessor(3),
            Err(ListError::IndexOutOfBounds { index: 3, size: 3 })
        );
        assert_eq!(list.predecessor(1), Ok(list.head.unwrap()));
        let prev = list.predecessor(2).unwrap();
        assert_eq!(unsafe { prev.as_ref().value }, 2);
    }

    #[test]
    fn links_maintained() {
        let mut list = LinkedList::new();
        assert_links(&list);
        list.add_last(2);
        assert_links(&list);
        list.add_first(1);
        list.insert(2usize, 4).unwrap();
        list.insert(2usize, 3).unwrap();
        assert_links(&list);
        list.reverse();
        assert_links(&list);
        assert_eq!(list.remove(0usize), Ok(4));
        assert_links(&list);
        assert_eq!(list.remove(2usize), Ok(1));
        assert_links(&list);
        assert!(list.remove_value(&2));
        assert_links(&list);
        assert!(list.remove_value(&3));
        assert_links(&list);
        assert!(list.is_empty());
    }

    #[test]
    fn remove_value_tail_updates_tail() {
        let mut list = LinkedList::from_slice(&[1, 2, 3]);
        assert!(list.remove_value(&3));
        assert_links(&list);
        assert_eq!(list.get_last(), Ok(&2));
        list.add_last(9);
        assert_eq!(list.to_vec(), [1, 2, 9]);
    }

    #[test]
    fn clear_releases_items() {
        use alloc::rc::Rc;

        let item = Rc::new(());
        let mut list: LinkedList<_> = core::iter::repeat(item.clone()).take(5).collect();
        assert_eq!(Rc::strong_count(&item), 6);
        list.clear();
        assert_links(&list);
        assert_eq!(Rc::strong_count(&item), 1);
    }

    #[test]
    fn drop_long_chain() {
        let list: LinkedList<u32> = (0..200_000).collect();
        drop(list);
    }
}
