//! Positional arguments and capacity growth policies.

use core::fmt::{Debug, Display};

use crate::error::ListError;

/// The initial capacity of an `ArrayList` when none is requested.
pub const DEFAULT_CAPACITY: usize = 10;

/// The multiplier applied to the capacity of an `ArrayList` by [`GrowDoubling`].
pub const GROWTH_FACTOR: usize = 2;

/// Integer types which may be used as a list position.
///
/// Both signed and unsigned integers are accepted so that a negative
/// position is rejected with [`ListError::IndexOutOfBounds`] rather than
/// being unrepresentable at the call site.
pub trait Index: Copy + Debug + Display + Sized + 'static {
    /// Convert to a `usize`, returning `None` for negative values or
    /// values exceeding `usize::MAX`.
    fn try_to_usize(self) -> Option<usize>;

    /// Convert to an `isize` for diagnostics, saturating at the bounds
    /// of the type.
    fn to_isize(self) -> isize;
}

macro_rules! impl_unsigned_index {
    ($($ty:ty),+) => {$(
        impl Index for $ty {
            #[inline]
            fn try_to_usize(self) -> Option<usize> {
                usize::try_from(self).ok()
            }

            #[inline]
            fn to_isize(self) -> isize {
                isize::try_from(self).unwrap_or(isize::MAX)
            }
        }
    )+};
}

macro_rules! impl_signed_index {
    ($($ty:ty),+) => {$(
        impl Index for $ty {
            #[inline]
            fn try_to_usize(self) -> Option<usize> {
                usize::try_from(self).ok()
            }

            #[inline]
            fn to_isize(self) -> isize {
                isize::try_from(self).unwrap_or(if self < 0 { isize::MIN } else { isize::MAX })
            }
        }
    )+};
}

impl_unsigned_index!(u8, u16, u32, u64, usize);
impl_signed_index!(i8, i16, i32, i64, isize);

/// Resolve a position for reading, updating or removing: `0 <= index < size`.
#[inline]
pub(crate) fn element_index<I: Index>(index: I, size: usize) -> Result<usize, ListError> {
    match index.try_to_usize() {
        Some(pos) if pos < size => Ok(pos),
        _ => Err(ListError::out_of_bounds(index, size)),
    }
}

/// Resolve a position for insertion: `0 <= index <= size`.
#[inline]
pub(crate) fn insert_index<I: Index>(index: I, size: usize) -> Result<usize, ListError> {
    match index.try_to_usize() {
        Some(pos) if pos <= size => Ok(pos),
        _ => Err(ListError::out_of_bounds(index, size)),
    }
}

/// Growth behavior for an `ArrayList` which has exceeded its capacity.
pub trait Grow: Debug {
    /// Calculate the next capacity given the previous capacity and
    /// the minimum capacity required by the pending insertion.
    fn next_capacity(prev: usize, minimum: usize) -> usize;
}

/// Growth behavior which never requests extra capacity
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct GrowExact;

impl Grow for GrowExact {
    #[inline]
    fn next_capacity(_prev: usize, minimum: usize) -> usize {
        minimum
    }
}

/// Growth behavior which multiplies the capacity by [`GROWTH_FACTOR`],
/// or uses the required minimum when that is larger.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct GrowDoubling;

impl Grow for GrowDoubling {
    #[inline]
    fn next_capacity(prev: usize, minimum: usize) -> usize {
        prev.saturating_mul(GROWTH_FACTOR).max(minimum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_positions() {
        assert_eq!((-1i32).try_to_usize(), None);
        assert_eq!(5i64.try_to_usize(), Some(5));
        assert_eq!(i64::MIN.to_isize(), isize::MIN);
        assert_eq!((-7i8).to_isize(), -7);
    }

    #[test]
    fn check_ranges() {
        assert_eq!(element_index(0usize, 1), Ok(0));
        assert!(element_index(1usize, 1).is_err());
        assert_eq!(insert_index(1usize, 1), Ok(1));
        assert_eq!(
            insert_index(-1, 0),
            Err(ListError::IndexOutOfBounds { index: -1, size: 0 })
        );
        assert_eq!(
            element_index(0u8, 0),
            Err(ListError::IndexOutOfBounds { index: 0, size: 0 })
        );
    }

    #[test]
    fn growth() {
        assert_eq!(GrowDoubling::next_capacity(10, 11), 20);
        assert_eq!(GrowDoubling::next_capacity(0, 1), 1);
        assert_eq!(GrowDoubling::next_capacity(4, 20), 20);
        assert_eq!(GrowDoubling::next_capacity(usize::MAX, 1), usize::MAX);
        assert_eq!(GrowExact::next_capacity(10, 11), 11);
    }
}
