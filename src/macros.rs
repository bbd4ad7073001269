/// Create an [`ArrayList`](crate::ArrayList) containing the arguments.
///
/// ```
/// let list = flex_list::array_list![1, 2, 3];
/// assert_eq!(list.to_string(), "[1, 2, 3]");
/// assert_eq!(list.capacity(), 3);
/// ```
#[macro_export]
macro_rules! array_list {
    () => (
        $crate::ArrayList::new()
    );
    ($elem:expr; $n:expr) => (
        ::core::iter::repeat($elem).take($n).collect::<$crate::ArrayList<_>>()
    );
    ($($x:expr),+ $(,)?) => (
        <$crate::ArrayList<_>>::from([$($x),+])
    );
}

/// Create a [`LinkedList`](crate::LinkedList) containing the arguments.
///
/// ```
/// let list = flex_list::linked_list![1, 2, 3];
/// assert_eq!(list.to_string(), "[1 -> 2 -> 3]");
/// ```
#[macro_export]
macro_rules! linked_list {
    () => (
        $crate::LinkedList::new()
    );
    ($elem:expr; $n:expr) => (
        ::core::iter::repeat($elem).take($n).collect::<$crate::LinkedList<_>>()
    );
    ($($x:expr),+ $(,)?) => (
        <$crate::LinkedList<_>>::from([$($x),+])
    );
}

// Reallocation tracing, compiled out unless the `log` feature is enabled.
macro_rules! trace {
    ($($arg:tt)+) => {
        #[cfg(feature = "log")]
        ::log::trace!($($arg)+);
    };
}
