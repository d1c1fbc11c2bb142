//! Singly-linked list with an empty terminal and a node variant.
//!
//! This module provides [`PolymorphicList`], a recursive list that is always
//! either the terminal [`EmptyNode`] or a [`ListNode`] holding one element
//! and exclusively owning the rest of the list.
//!
//! # Overview
//!
//! | Operation   | Complexity |
//! |-------------|------------|
//! | `size`      | O(1)       |
//! | `prepend`   | O(1)       |
//! | `append`    | O(n)       |
//! | `get`       | O(index)   |
//! | `get_last`  | O(n)       |
//! | `contains`  | O(n)       |
//! | `index_of`  | O(n)       |
//! | `copy`      | O(n)       |
//! | `concat`    | O(n + m)   |
//!
//! Every node stores the length of the list starting at that node, which is
//! always `1 + next.size()`.
//!
//! # Ownership
//!
//! Each node owns its successor. `append` rewrites the tail of the receiver
//! in place and hands the receiver back; `prepend` wraps the receiver in a new
//! node. `copy`, `concat` and [`Clone`] allocate fresh nodes for every link,
//! so a copy can be grown without affecting the original:
//!
//! ```text
//! original: 1 -> 2
//! copy:     1 -> 2          (separate nodes)
//! copy.append(3): 1 -> 2 -> 3, original still 1 -> 2
//! ```
//!
//! # Examples
//!
//! ```rust
//! use polylist::polymorphic::{EmptyNode, Sequence};
//!
//! let list = EmptyNode::new().append(1).append(2).prepend(0);
//! assert_eq!(list.to_string(), "0 -> 1 -> 2");
//! assert_eq!(list.size(), 3);
//! assert_eq!(list.get(1).map(|node| *node.data()), Ok(1));
//! assert_eq!(list.index_of(&2), Ok(2));
//! ```

use std::any::{Any, type_name};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::{FromIterator, FusedIterator};
use std::mem;
use std::ops::{Add, Deref, DerefMut};

use super::error::ListError;
use super::sequence::Sequence;

/// Separator placed between consecutive elements when rendering.
const SEPARATOR: &str = " -> ";

/// The zero-length terminal of every list.
///
/// `EmptyNode` carries no element and no successor. It is the starting point
/// for building lists and the value every traversal ends on.
///
/// # Examples
///
/// ```rust
/// use polylist::polymorphic::{EmptyNode, Sequence};
///
/// let empty = EmptyNode::new();
/// assert_eq!(empty.to_string(), "");
/// assert_eq!(empty.append(42).to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EmptyNode;

impl EmptyNode {
    /// Creates the empty terminal.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Always `0`.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        0
    }
}

/// Owning slot for a node's successor.
///
/// Dropping a slot unlinks the chain behind it one node at a time, so long
/// lists are released without deep recursion.
struct Link<T>(Box<PolymorphicList<T>>);

impl<T> Link<T> {
    fn new(list: PolymorphicList<T>) -> Self {
        Self(Box::new(list))
    }
}

impl<T> Deref for Link<T> {
    type Target = PolymorphicList<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Link<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> Drop for Link<T> {
    fn drop(&mut self) {
        let mut rest = mem::take(&mut *self.0);
        while let PolymorphicList::Node(mut node) = rest {
            rest = mem::take(&mut *node.next);
        }
    }
}

/// A non-empty list: one element followed by the rest of the list.
///
/// The node exclusively owns `next`, and `length` is always the number of
/// nodes from this one to the terminal.
///
/// # Examples
///
/// ```rust
/// use polylist::polymorphic::{ListNode, Sequence};
///
/// let tail = ListNode::singleton(2);
/// let node = ListNode::new(1, tail);
/// assert_eq!(node.size(), 2);
/// assert_eq!(node.data(), &1);
/// assert_eq!(node.next().head(), Some(&2));
/// ```
pub struct ListNode<T> {
    data: T,
    next: Link<T>,
    length: usize,
}

impl<T> ListNode<T> {
    /// Creates a node holding `data` in front of `next`.
    ///
    /// `next` may be an [`EmptyNode`], another [`ListNode`] or a
    /// [`PolymorphicList`].
    #[inline]
    #[must_use]
    pub fn new(data: T, next: impl Into<PolymorphicList<T>>) -> Self {
        let next = next.into();
        let length = next.len() + 1;
        Self {
            data,
            next: Link::new(next),
            length,
        }
    }

    /// Creates a one-element list.
    #[inline]
    #[must_use]
    pub fn singleton(data: T) -> Self {
        Self::new(data, EmptyNode)
    }

    /// Returns a reference to the element stored in this node.
    #[inline]
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Returns a mutable reference to the element stored in this node.
    #[inline]
    pub const fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Returns the rest of the list after this node.
    #[inline]
    #[must_use]
    pub fn next(&self) -> &PolymorphicList<T> {
        &self.next
    }

    /// Returns the number of elements from this node to the end.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Splits the node into its element and the rest of the list.
    #[must_use]
    pub fn into_parts(self) -> (T, PolymorphicList<T>) {
        let Self { data, mut next, .. } = self;
        (data, mem::take(&mut *next))
    }

    /// Adds `element` at the end of the list in place.
    ///
    /// Every node on the way to the end has its length incremented.
    pub fn push_back(&mut self, element: T) {
        self.length += 1;
        self.next.push_back(element);
    }

    /// Returns an iterator over the elements, front to back.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: self.nodes(),
        }
    }

    /// Returns an iterator over the nodes, starting with this one.
    #[inline]
    #[must_use]
    pub const fn nodes(&self) -> Nodes<'_, T> {
        Nodes {
            current: Some(self),
            remaining: self.length,
        }
    }

    fn splice(&mut self, tail: PolymorphicList<T>) {
        self.length += tail.len();
        self.next.splice(tail);
    }
}

/// A singly-linked list: either the empty terminal or a node.
///
/// Operations dispatch on the variant with a `match`; both variants answer
/// every operation of [`Sequence`], so callers rarely need to inspect the
/// variant themselves.
///
/// # Examples
///
/// ```rust
/// use polylist::polymorphic::{PolymorphicList, Sequence};
///
/// let list: PolymorphicList<i32> = (1..=3).collect();
/// assert_eq!(list.to_string(), "1 -> 2 -> 3");
/// assert!(list.contains(&2));
///
/// let joined = &list + &list;
/// assert_eq!(joined.size(), 6);
/// assert_eq!(list.size(), 3);
/// ```
pub enum PolymorphicList<T> {
    /// The zero-length terminal.
    Empty(EmptyNode),
    /// A node holding an element and the rest of the list.
    Node(ListNode<T>),
}

impl<T> PolymorphicList<T> {
    /// Creates an empty list.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::Empty(EmptyNode)
    }

    /// Creates a one-element list.
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::Node(ListNode::singleton(element))
    }

    /// Builds a list from a Vec, keeping the Vec's order.
    fn build_from_vec(mut elements: Vec<T>) -> Self {
        let mut list = Self::new();
        while let Some(element) = elements.pop() {
            list = Self::Node(ListNode::new(element, list));
        }
        list
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        match self {
            Self::Empty(_) => 0,
            Self::Node(node) => node.length,
        }
    }

    /// Returns `true` for the empty variant.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty(_))
    }

    /// Returns the first node, or `None` for the empty list.
    #[inline]
    #[must_use]
    pub const fn as_node(&self) -> Option<&ListNode<T>> {
        match self {
            Self::Empty(_) => None,
            Self::Node(node) => Some(node),
        }
    }

    /// Returns a reference to the first element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use polylist::polymorphic::PolymorphicList;
    ///
    /// let list = PolymorphicList::singleton('a');
    /// assert_eq!(list.head(), Some(&'a'));
    /// assert_eq!(PolymorphicList::<char>::new().head(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn head(&self) -> Option<&T> {
        self.as_node().map(ListNode::data)
    }

    /// Adds `element` at the end of the list in place.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use polylist::polymorphic::{PolymorphicList, Sequence};
    ///
    /// let mut list = PolymorphicList::new();
    /// list.push_back("a");
    /// list.push_back("b");
    /// assert_eq!(list.to_string(), "a -> b");
    /// ```
    pub fn push_back(&mut self, element: T) {
        let mut cursor = self;
        while let Self::Node(node) = cursor {
            node.length += 1;
            cursor = &mut *node.next;
        }
        *cursor = Self::singleton(element);
    }

    /// Replaces the terminal of this list with `tail`.
    ///
    /// Every node on the way gets `tail`'s length added to its own.
    pub(super) fn splice(&mut self, tail: Self) {
        let added = tail.len();
        let mut cursor = self;
        while let Self::Node(node) = cursor {
            node.length += added;
            cursor = &mut *node.next;
        }
        *cursor = tail;
    }

    /// Returns an iterator over the elements, front to back.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: self.nodes(),
        }
    }

    /// Returns an iterator over the nodes, front to back.
    #[inline]
    #[must_use]
    pub const fn nodes(&self) -> Nodes<'_, T> {
        Nodes {
            current: self.as_node(),
            remaining: self.len(),
        }
    }

    /// Returns the first element satisfying `predicate`.
    #[must_use]
    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(|element| predicate(element))
    }

    /// Returns the index of the first element satisfying `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use polylist::polymorphic::PolymorphicList;
    ///
    /// let list: PolymorphicList<i32> = (1..=5).collect();
    /// assert_eq!(list.position(|element| *element > 3), Some(3));
    /// assert_eq!(list.position(|element| *element > 10), None);
    /// ```
    #[must_use]
    pub fn position<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().position(predicate)
    }
}

impl<T: Clone + 'static> PolymorphicList<T> {
    /// Concatenates this list with a dynamically typed value.
    ///
    /// `other` is accepted when it is a [`PolymorphicList<T>`], a
    /// [`ListNode<T>`] or an [`EmptyNode`]. The result shares no nodes with
    /// either operand.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::TypeMismatch`] for any other type, including lists
    /// of a different element type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use polylist::polymorphic::{ListError, ListNode, PolymorphicList};
    ///
    /// let list = PolymorphicList::singleton(1);
    /// let joined = list.try_concat(&ListNode::singleton(2)).unwrap();
    /// assert_eq!(joined.to_string(), "1 -> 2");
    ///
    /// let error = list.try_concat(&"not a list").unwrap_err();
    /// assert!(matches!(error, ListError::TypeMismatch { .. }));
    /// ```
    pub fn try_concat<U: Any>(&self, other: &U) -> Result<Self, ListError> {
        let value: &dyn Any = other;
        let tail = if let Some(list) = value.downcast_ref::<Self>() {
            list.copy()
        } else if let Some(node) = value.downcast_ref::<ListNode<T>>() {
            node.copy()
        } else if value.is::<EmptyNode>() {
            Self::new()
        } else {
            return Err(ListError::TypeMismatch {
                found: type_name::<U>(),
            });
        };

        let mut result = self.copy();
        result.splice(tail);
        Ok(result)
    }
}

// =============================================================================
// Sequence Implementations
// =============================================================================

impl<T> Sequence<T> for EmptyNode {
    #[inline]
    fn size(&self) -> usize {
        0
    }

    #[inline]
    fn contains(&self, _element: &T) -> bool
    where
        T: PartialEq,
    {
        false
    }

    fn append(self, element: T) -> ListNode<T> {
        ListNode::new(element, self)
    }

    fn prepend(self, element: T) -> ListNode<T> {
        ListNode::new(element, self)
    }

    fn get(&self, index: isize) -> Result<&ListNode<T>, ListError> {
        Err(ListError::OutOfRange { index, size: 0 })
    }

    fn get_last(&self) -> Result<&ListNode<T>, ListError> {
        Err(ListError::EmptyList)
    }

    fn index_of(&self, _element: &T) -> Result<usize, ListError>
    where
        T: PartialEq,
    {
        Err(ListError::NotFound)
    }

    fn copy(&self) -> PolymorphicList<T>
    where
        T: Clone,
    {
        PolymorphicList::Empty(Self)
    }
}

impl<T> Sequence<T> for ListNode<T> {
    #[inline]
    fn size(&self) -> usize {
        self.length
    }

    fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|candidate| candidate == element)
    }

    fn append(mut self, element: T) -> ListNode<T> {
        self.push_back(element);
        self
    }

    fn prepend(self, element: T) -> ListNode<T> {
        Self::new(element, self)
    }

    fn get(&self, index: isize) -> Result<&ListNode<T>, ListError> {
        usize::try_from(index)
            .ok()
            .and_then(|position| self.nodes().nth(position))
            .ok_or(ListError::OutOfRange {
                index,
                size: self.length,
            })
    }

    fn get_last(&self) -> Result<&ListNode<T>, ListError> {
        Ok(self.nodes().last().unwrap_or(self))
    }

    fn index_of(&self, element: &T) -> Result<usize, ListError>
    where
        T: PartialEq,
    {
        self.iter()
            .position(|candidate| candidate == element)
            .ok_or(ListError::NotFound)
    }

    fn copy(&self) -> PolymorphicList<T>
    where
        T: Clone,
    {
        PolymorphicList::Node(self.clone())
    }
}

impl<T> Sequence<T> for PolymorphicList<T> {
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        match self {
            Self::Empty(empty) => Sequence::<T>::contains(empty, element),
            Self::Node(node) => node.contains(element),
        }
    }

    fn append(self, element: T) -> ListNode<T> {
        match self {
            Self::Empty(empty) => empty.append(element),
            Self::Node(node) => node.append(element),
        }
    }

    fn prepend(self, element: T) -> ListNode<T> {
        ListNode::new(element, self)
    }

    fn get(&self, index: isize) -> Result<&ListNode<T>, ListError> {
        match self {
            Self::Empty(empty) => Sequence::<T>::get(empty, index),
            Self::Node(node) => node.get(index),
        }
    }

    fn get_last(&self) -> Result<&ListNode<T>, ListError> {
        match self {
            Self::Empty(empty) => Sequence::<T>::get_last(empty),
            Self::Node(node) => node.get_last(),
        }
    }

    fn index_of(&self, element: &T) -> Result<usize, ListError>
    where
        T: PartialEq,
    {
        match self {
            Self::Empty(empty) => Sequence::<T>::index_of(empty, element),
            Self::Node(node) => node.index_of(element),
        }
    }

    fn copy(&self) -> PolymorphicList<T>
    where
        T: Clone,
    {
        self.clone()
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the nodes of a list.
pub struct Nodes<'a, T> {
    current: Option<&'a ListNode<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Nodes<'a, T> {
    type Item = &'a ListNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current?;
        self.current = node.next.as_node();
        self.remaining -= 1;
        Some(node)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Nodes<'_, T> {}

impl<T> FusedIterator for Nodes<'_, T> {}

/// An iterator over references to the elements of a list.
pub struct Iter<'a, T> {
    nodes: Nodes<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next().map(ListNode::data)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.nodes.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// An owning iterator over the elements of a list.
pub struct IntoIter<T> {
    list: PolymorphicList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        match mem::take(&mut self.list) {
            PolymorphicList::Empty(_) => None,
            PolymorphicList::Node(node) => {
                let (element, rest) = node.into_parts();
                self.list = rest;
                Some(element)
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for PolymorphicList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<EmptyNode> for PolymorphicList<T> {
    #[inline]
    fn from(empty: EmptyNode) -> Self {
        Self::Empty(empty)
    }
}

impl<T> From<ListNode<T>> for PolymorphicList<T> {
    #[inline]
    fn from(node: ListNode<T>) -> Self {
        Self::Node(node)
    }
}

impl<T> FromIterator<T> for PolymorphicList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::build_from_vec(iter.into_iter().collect())
    }
}

impl<T> Extend<T> for PolymorphicList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.splice(iter.into_iter().collect());
    }
}

impl<T> Extend<T> for ListNode<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.splice(iter.into_iter().collect());
    }
}

impl<T> IntoIterator for PolymorphicList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<T> IntoIterator for ListNode<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            list: PolymorphicList::Node(self),
        }
    }
}

impl<'a, T> IntoIterator for &'a PolymorphicList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a ListNode<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone> Clone for ListNode<T> {
    fn clone(&self) -> Self {
        let rest: PolymorphicList<T> = self.next.iter().cloned().collect();
        Self::new(self.data.clone(), rest)
    }
}

impl<T: Clone> Clone for PolymorphicList<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Empty(empty) => Self::Empty(*empty),
            Self::Node(node) => Self::Node(node.clone()),
        }
    }
}

impl<T: PartialEq> PartialEq for ListNode<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ListNode<T> {}

impl<T: PartialEq> PartialEq for PolymorphicList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for PolymorphicList<T> {}

impl<T: PartialEq> PartialEq<ListNode<T>> for PolymorphicList<T> {
    fn eq(&self, other: &ListNode<T>) -> bool {
        self.as_node().is_some_and(|node| node == other)
    }
}

impl<T: PartialEq> PartialEq<PolymorphicList<T>> for ListNode<T> {
    fn eq(&self, other: &PolymorphicList<T>) -> bool {
        other == self
    }
}

impl<T> PartialEq<EmptyNode> for PolymorphicList<T> {
    fn eq(&self, _other: &EmptyNode) -> bool {
        matches!(self, Self::Empty(_))
    }
}

impl<T> PartialEq<PolymorphicList<T>> for EmptyNode {
    fn eq(&self, other: &PolymorphicList<T>) -> bool {
        matches!(other, PolymorphicList::Empty(_))
    }
}

impl<T> PartialEq<EmptyNode> for ListNode<T> {
    fn eq(&self, _other: &EmptyNode) -> bool {
        false
    }
}

impl<T: Hash> Hash for ListNode<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: Hash> Hash for PolymorphicList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: Clone> Add for &PolymorphicList<T> {
    type Output = PolymorphicList<T>;

    fn add(self, other: Self) -> Self::Output {
        self.concat(other)
    }
}

impl<T> Add for PolymorphicList<T> {
    type Output = Self;

    fn add(mut self, other: Self) -> Self::Output {
        self.splice(other);
        self
    }
}

impl<T: fmt::Debug> fmt::Debug for ListNode<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Debug> fmt::Debug for PolymorphicList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl fmt::Display for EmptyNode {
    fn fmt(&self, _formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

impl<T: fmt::Display> fmt::Display for ListNode<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.data)?;
        for element in self.next.iter() {
            write!(formatter, "{SEPARATOR}{element}")?;
        }
        Ok(())
    }
}

impl<T: fmt::Display> fmt::Display for PolymorphicList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty(empty) => fmt::Display::fmt(empty, formatter),
            Self::Node(node) => fmt::Display::fmt(node, formatter),
        }
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
fn serialize_elements<'a, T, I, S>(elements: I, serializer: S) -> Result<S::Ok, S::Error>
where
    T: serde::Serialize + 'a,
    I: ExactSizeIterator<Item = &'a T>,
    S: serde::Serializer,
{
    use serde::ser::SerializeSeq;
    let mut seq = serializer.serialize_seq(Some(elements.len()))?;
    for element in elements {
        seq.serialize_element(element)?;
    }
    seq.end()
}

#[cfg(feature = "serde")]
impl serde::Serialize for EmptyNode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        serializer.serialize_seq(Some(0))?.end()
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for ListNode<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serialize_elements(self.iter(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for PolymorphicList<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serialize_elements(self.iter(), serializer)
    }
}

#[cfg(feature = "serde")]
struct PolymorphicListVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> PolymorphicListVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for PolymorphicListVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = PolymorphicList<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(PolymorphicList::build_from_vec(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for PolymorphicList<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(PolymorphicListVisitor::new())
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for ListNode<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match <PolymorphicList<T> as serde::Deserialize>::deserialize(deserializer)? {
            PolymorphicList::Node(node) => Ok(node),
            PolymorphicList::Empty(_) => Err(serde::de::Error::invalid_length(
                0,
                &"a non-empty sequence",
            )),
        }
    }
}

#[cfg(feature = "serde")]
struct EmptyNodeVisitor;

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for EmptyNodeVisitor {
    type Value = EmptyNode;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an empty sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        if seq.next_element::<serde::de::IgnoredAny>()?.is_some() {
            return Err(serde::de::Error::invalid_length(1, &self));
        }
        Ok(EmptyNode)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for EmptyNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(EmptyNodeVisitor)
    }
}

// =============================================================================
// Tests
// =============================================================================
