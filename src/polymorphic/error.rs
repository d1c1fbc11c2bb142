//! Error types for list operations.

use std::fmt;

/// Represents the failures a list operation can report.
///
/// Every variant is produced at the call site that detects the violation and
/// is returned to the caller unchanged; the list never retries or recovers.
///
/// # Examples
///
/// ```rust
/// use polylist::polymorphic::{EmptyNode, ListError, Sequence};
///
/// let empty = EmptyNode::new();
/// let error = <EmptyNode as Sequence<i32>>::get_last(&empty).unwrap_err();
/// assert_eq!(error, ListError::EmptyList);
/// assert_eq!(error.to_string(), "the list is empty");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// The requested index is negative or not smaller than the list size.
    OutOfRange {
        /// The index that was requested.
        index: isize,
        /// The size of the list at the time of the request.
        size: usize,
    },
    /// The operation needs at least one node but the list is empty.
    EmptyList,
    /// No element in the list equals the searched element.
    NotFound,
    /// The value given to a dynamically typed operation is not a list of the
    /// expected element type.
    TypeMismatch {
        /// The type name of the rejected value, when it is known.
        found: &'static str,
    },
}

impl fmt::Display for ListError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, size } => {
                write!(formatter, "index {index} out of range for list of size {size}")
            }
            Self::EmptyList => write!(formatter, "the list is empty"),
            Self::NotFound => write!(formatter, "element does not exist in the list"),
            Self::TypeMismatch { found } => {
                write!(formatter, "expected a polymorphic list, found {found}")
            }
        }
    }
}

impl std::error::Error for ListError {}
