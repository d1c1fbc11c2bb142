//! The operation set shared by every list variant.
//!
//! [`Sequence`] is implemented by [`EmptyNode`], [`ListNode`] and
//! [`PolymorphicList`]. Code written against the trait works the same way no
//! matter which variant it is handed, which is what makes the two variants
//! substitutable for each other.
//!
//! [`EmptyNode`]: super::EmptyNode

use super::error::ListError;
use super::list::{ListNode, PolymorphicList};

/// The capability contract of a singly-linked list.
///
/// Rendering and equality are not part of the trait itself; they come from
/// [`std::fmt::Display`] and [`PartialEq`], which all three list types
/// implement with the same semantics.
///
/// # Examples
///
/// ```rust
/// use polylist::polymorphic::{EmptyNode, ListNode, Sequence};
///
/// fn describe<S: Sequence<i32>>(list: &S) -> String {
///     format!("{} element(s), has 7: {}", list.size(), list.contains(&7))
/// }
///
/// assert_eq!(describe(&EmptyNode::new()), "0 element(s), has 7: false");
/// assert_eq!(describe(&ListNode::singleton(7)), "1 element(s), has 7: true");
/// ```
pub trait Sequence<T> {
    /// Returns the number of elements.
    ///
    /// The length is maintained on every node, so this is O(1).
    fn size(&self) -> usize;

    /// Returns `true` if the list holds no elements.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns `true` if some element equals `element`.
    fn contains(&self, element: &T) -> bool
    where
        T: PartialEq;

    /// Adds `element` at the end of the list.
    ///
    /// On an empty list this wraps the receiver in a new node. On a non-empty
    /// list the receiver's tail is rewritten in place and the receiver itself
    /// is handed back with its length incremented.
    fn append(self, element: T) -> ListNode<T>
    where
        Self: Sized;

    /// Adds `element` at the front of the list.
    ///
    /// Always returns a new node whose successor is the unchanged receiver.
    fn prepend(self, element: T) -> ListNode<T>
    where
        Self: Sized;

    /// Returns the node at the zero-based `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::OutOfRange`] if `index` is negative or not smaller
    /// than [`size`](Self::size).
    fn get(&self, index: isize) -> Result<&ListNode<T>, ListError>;

    /// Returns the last node before the terminal.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyList`] if the list has no nodes.
    fn get_last(&self) -> Result<&ListNode<T>, ListError>;

    /// Returns the position of the first element equal to `element`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::NotFound`] if no element matches.
    fn index_of(&self, element: &T) -> Result<usize, ListError>
    where
        T: PartialEq;

    /// Returns a deep copy in which every node is freshly allocated.
    fn copy(&self) -> PolymorphicList<T>
    where
        T: Clone;

    /// Concatenates `self` and `other` into a new list.
    ///
    /// Both operands are copied before splicing, so the result shares no
    /// nodes with either input and neither input is modified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use polylist::polymorphic::{EmptyNode, ListNode, Sequence};
    ///
    /// let front = EmptyNode::new().append(1).append(2);
    /// let back = ListNode::singleton(3);
    /// let joined = front.concat(&back);
    ///
    /// assert_eq!(joined.to_string(), "1 -> 2 -> 3");
    /// assert_eq!(joined.size(), 3);
    /// assert_eq!(front.size(), 2);
    /// ```
    fn concat<S>(&self, other: &S) -> PolymorphicList<T>
    where
        T: Clone,
        S: Sequence<T> + ?Sized,
    {
        let mut result = self.copy();
        result.splice(other.copy());
        result
    }
}
