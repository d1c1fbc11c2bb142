//! Polymorphic singly-linked list.
//!
//! A list is always one of two variants:
//!
//! - [`EmptyNode`]: the zero-length terminal
//! - [`ListNode`]: one element followed by the rest of the list
//!
//! [`PolymorphicList`] is the sum of the two, and [`Sequence`] is the
//! operation set all three types share. Failures are reported as
//! [`ListError`] values.
//!
//! # Examples
//!
//! ## Growing a list
//!
//! ```rust
//! use polylist::polymorphic::{EmptyNode, Sequence};
//!
//! let list = EmptyNode::new().append(1).append(2);
//! assert_eq!(list.to_string(), "1 -> 2");
//!
//! // `prepend` wraps the list in a new front node
//! let list = list.prepend(0);
//! assert_eq!(list.to_string(), "0 -> 1 -> 2");
//! assert_eq!(list.size(), 3);
//! ```
//!
//! ## Lookups
//!
//! ```rust
//! use polylist::polymorphic::{ListError, PolymorphicList, Sequence};
//!
//! let list: PolymorphicList<i32> = (0..3).collect();
//! assert_eq!(list.get(2).map(|node| *node.data()), Ok(2));
//! assert_eq!(
//!     list.get(-1).unwrap_err(),
//!     ListError::OutOfRange { index: -1, size: 3 }
//! );
//! assert_eq!(list.index_of(&9), Err(ListError::NotFound));
//! ```
//!
//! ## Copies and concatenation
//!
//! ```rust
//! use polylist::polymorphic::{PolymorphicList, Sequence};
//!
//! let left: PolymorphicList<i32> = (1..=2).collect();
//! let right: PolymorphicList<i32> = (3..=4).collect();
//!
//! let joined = left.concat(&right);
//! assert_eq!(joined.to_string(), "1 -> 2 -> 3 -> 4");
//!
//! // The inputs are untouched
//! assert_eq!(left.size(), 2);
//! assert_eq!(right.size(), 2);
//! ```

mod error;
mod list;
mod sequence;

pub use error::ListError;
pub use list::EmptyNode;
pub use list::IntoIter;
pub use list::Iter;
pub use list::ListNode;
pub use list::Nodes;
pub use list::PolymorphicList;
pub use sequence::Sequence;
