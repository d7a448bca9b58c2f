use std::error;
use std::fmt;

/// The error type for fallible deque operations.
///
/// Every check happens before any mutation begins, so an operation that
/// returns an error leaves the container exactly as it was.
///
/// # Examples
///
/// ```
/// use chunked_deque::{Deque, Error};
///
/// let mut deque: Deque<i32> = Deque::new();
/// assert_eq!(deque.pop_front(), Err(Error::ContainerEmpty));
/// assert_eq!(deque.at(0), Err(Error::IndexOutOfBound));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// An index-based access named a position at or past the end of the
    /// container.
    IndexOutOfBound,
    /// A boundary access ([`front`], [`back`], [`pop_front`], [`pop_back`])
    /// was attempted on an empty container.
    ///
    /// [`front`]: crate::Deque::front
    /// [`back`]: crate::Deque::back
    /// [`pop_front`]: crate::Deque::pop_front
    /// [`pop_back`]: crate::Deque::pop_back
    ContainerEmpty,
    /// A cursor belongs to a different container, or has gone stale: the
    /// element it referred to was erased, or the block recording it has
    /// since been split, merged or deleted.
    InvalidIterator,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IndexOutOfBound => f.write_str("index out of bound"),
            Error::ContainerEmpty => f.write_str("container is empty"),
            Error::InvalidIterator => f.write_str("invalid iterator"),
        }
    }
}

impl error::Error for Error {}
