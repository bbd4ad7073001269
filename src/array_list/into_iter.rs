use core::fmt;
use core::iter::FusedIterator;
use core::ops::Range;
use core::ptr;
use core::slice;

use super::buffer::ListBuffer;

/// An iterator which moves the items out of an `ArrayList`.
pub struct IntoIter<T> {
    remain: Range<usize>,
    buf: ListBuffer<T>,
}

impl<T> IntoIter<T> {
    pub(super) fn new(mut buf: ListBuffer<T>) -> Self {
        let end = buf.length();
        // SAFETY: ownership of the items passes to the iterator
        unsafe { buf.set_length(0) };
        Self {
            remain: Range { start: 0, end },
            buf,
        }
    }

    /// Access the remaining items as a slice.
    pub fn as_slice(&self) -> &[T] {
        unsafe {
            slice::from_raw_parts(
                self.buf.data_ptr().add(self.remain.start),
                self.remain.len(),
            )
        }
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe {
            slice::from_raw_parts_mut(
                self.buf.data_ptr_mut().add(self.remain.start),
                self.remain.len(),
            )
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.remain.start;
        if index != self.remain.end {
            self.remain.start = index + 1;
            unsafe { Some(ptr::read(self.buf.data_ptr().add(index))) }
        } else {
            None
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remain.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let mut index = self.remain.end;
        if index != self.remain.start {
            index -= 1;
            self.remain.end = index;
            unsafe { Some(ptr::read(self.buf.data_ptr().add(index))) }
        } else {
            None
        }
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let remain: *mut [T] = self.as_mut_slice();
        self.remain.start = self.remain.end;
        unsafe { ptr::drop_in_place(remain) };
    }
}
