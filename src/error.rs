//! Error handling.

use core::fmt;

use crate::index::Index;

/// An enumeration of error types raised by list operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListError {
    /// A positional argument was outside of the range accepted by the operation.
    IndexOutOfBounds {
        /// The index supplied by the caller.
        index: isize,
        /// The length of the list when the operation was attempted.
        size: usize,
    },
    /// A first or last element was requested from an empty list.
    Empty,
}

impl ListError {
    #[inline]
    pub(crate) fn out_of_bounds<I: Index>(index: I, size: usize) -> Self {
        Self::IndexOutOfBounds {
            index: index.to_isize(),
            size,
        }
    }

    /// Generic description of this error.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IndexOutOfBounds { .. } => "Index out of bounds",
            Self::Empty => "List is empty",
        }
    }

    /// Generate a panic with this error as the reason.
    #[cold]
    #[inline(never)]
    pub fn panic(self) -> ! {
        panic!("{}", self);
    }
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, size } => {
                write!(f, "{}: {}, list size: {}", self.as_str(), index, size)
            }
            Self::Empty => f.write_str(self.as_str()),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ListError {}

/// An error raised by list update operations which could not store
/// a value. Includes the value which was rejected.
#[derive(Clone)]
pub struct UpdateError<T> {
    pub(crate) error: ListError,
    pub(crate) value: T,
}

impl<T> UpdateError<T> {
    pub(crate) fn new(error: ListError, value: T) -> Self {
        Self { error, value }
    }

    /// Generic description of this error
    pub fn as_str(&self) -> &'static str {
        "Update error"
    }

    /// Get a reference to the contained `ListError`
    pub fn error(&self) -> &ListError {
        &self.error
    }

    /// Unwrap the inner value of this error
    pub fn into_value(self) -> T {
        self.value
    }

    /// Generate a panic with this error as the reason
    #[cold]
    #[inline(never)]
    pub fn panic(self) -> ! {
        panic!("{}: {}", self.as_str(), self.error);
    }
}

impl<T> fmt::Debug for UpdateError<T> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateError")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for UpdateError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("{}: {}", self.as_str(), self.error))
    }
}

impl<T> From<UpdateError<T>> for ListError {
    #[inline]
    fn from(err: UpdateError<T>) -> Self {
        err.error
    }
}

#[cfg(feature = "std")]
impl<T> std::error::Error for UpdateError<T> {}

#[cfg(test)]
mod tests {
    use std::string::ToString;

    use super::{ListError, UpdateError};

    #[test]
    fn out_of_bounds_display() {
        let err = ListError::out_of_bounds(-1isize, 3);
        assert_eq!(err, ListError::IndexOutOfBounds { index: -1, size: 3 });
        assert_eq!(err.to_string(), "Index out of bounds: -1, list size: 3");
    }

    #[test]
    fn out_of_bounds_saturates_large_index() {
        let err = ListError::out_of_bounds(usize::MAX, 0);
        assert_eq!(
            err,
            ListError::IndexOutOfBounds {
                index: isize::MAX,
                size: 0
            }
        );
    }

    #[test]
    fn update_error_returns_value() {
        let err = UpdateError::new(ListError::Empty, "value");
        assert_eq!(err.to_string(), "Update error: List is empty");
        assert_eq!(format!("{:?}", err), "UpdateError { error: Empty, .. }");
        assert_eq!(err.error(), &ListError::Empty);
        assert_eq!(err.into_value(), "value");
    }

    #[test]
    #[should_panic(expected = "List is empty")]
    fn empty_panic() {
        ListError::Empty.panic();
    }

    #[test]
    #[should_panic(expected = "Update error: Index out of bounds: 4, list size: 2")]
    fn update_error_panic() {
        UpdateError::new(ListError::out_of_bounds(4usize, 2), ()).panic();
    }
}
