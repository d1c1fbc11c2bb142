//! # polylist
//!
//! A generic singly-linked list built from two variants that share one
//! operation set.
//!
//! ## Overview
//!
//! - **`EmptyNode`**: the zero-length terminal of every list
//! - **`ListNode`**: an element plus the exclusively owned rest of the list
//! - **`PolymorphicList`**: the sum of both variants
//! - **`Sequence`**: append, prepend, indexed access, membership, index
//!   lookup, deep copy and concatenation, implemented by all three types
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for the list types, as sequences
//!
//! ## Example
//!
//! ```rust
//! use polylist::prelude::*;
//!
//! let list = EmptyNode::new().append(1).append(2).prepend(0);
//! assert_eq!(list.to_string(), "0 -> 1 -> 2");
//! assert_eq!(list.index_of(&2), Ok(2));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the list types, the [`Sequence`](crate::polymorphic::Sequence)
/// trait and [`ListError`](crate::polymorphic::ListError).
///
/// # Usage
///
/// ```rust
/// use polylist::prelude::*;
/// ```
pub mod prelude {
    pub use crate::polymorphic::*;
}

pub mod polymorphic;
