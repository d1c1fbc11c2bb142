//! Integration tests for the list variants working through the public API.

use polylist::prelude::*;
use rstest::{fixture, rstest};

/// The list `0 -> 1 -> 2`, built the way a caller typically would.
#[fixture]
fn zero_one_two() -> ListNode<i32> {
    EmptyNode::new().append(1).append(2).prepend(0)
}

// =============================================================================
// Walkthrough
// =============================================================================

#[rstest]
fn walkthrough_builds_and_queries_list() {
    let list = EmptyNode::new().append(1);
    assert_eq!(list.to_string(), "1");
    assert_eq!(list.size(), 1);

    let list = list.append(2);
    assert_eq!(list.to_string(), "1 -> 2");
    assert_eq!(list.size(), 2);

    let list = list.prepend(0);
    assert_eq!(list.to_string(), "0 -> 1 -> 2");
    assert_eq!(list.size(), 3);

    assert_eq!(list.get(1).map(|node| *node.data()), Ok(1));
    assert_eq!(list.index_of(&2), Ok(2));
}

#[rstest]
fn concat_from_empty_receiver() {
    let joined = EmptyNode::new().concat(&ListNode::new(1, EmptyNode));
    assert_eq!(joined.to_string(), "1");
    assert_eq!(joined.size(), 1);
}

// =============================================================================
// Error Paths
// =============================================================================

#[rstest]
#[case(-1)]
#[case(3)]
fn get_outside_bounds_is_out_of_range(zero_one_two: ListNode<i32>, #[case] index: isize) {
    assert_eq!(
        zero_one_two.get(index).unwrap_err(),
        ListError::OutOfRange { index, size: 3 }
    );
}

#[rstest]
fn get_last_on_empty_node_is_empty_list() {
    let empty = EmptyNode::new();
    assert_eq!(
        <EmptyNode as Sequence<i32>>::get_last(&empty).unwrap_err(),
        ListError::EmptyList
    );
}

#[rstest]
fn index_of_absent_element_is_not_found(zero_one_two: ListNode<i32>) {
    assert_eq!(zero_one_two.index_of(&42), Err(ListError::NotFound));
}

#[rstest]
fn errors_propagate_with_question_mark(zero_one_two: ListNode<i32>) {
    fn second_to_last(list: &ListNode<i32>) -> Result<i32, ListError> {
        let position = list.index_of(list.get_last()?.data())?;
        let index = isize::try_from(position).unwrap_or(isize::MAX) - 1;
        Ok(*list.get(index)?.data())
    }

    assert_eq!(second_to_last(&zero_one_two), Ok(1));
    assert_eq!(
        second_to_last(&ListNode::singleton(9)),
        Err(ListError::OutOfRange { index: -1, size: 1 })
    );
}

// =============================================================================
// Substitutability
// =============================================================================

fn summary<S: Sequence<i32>>(list: &S) -> (usize, bool, Result<usize, ListError>) {
    (list.size(), list.contains(&1), list.index_of(&1))
}

#[rstest]
fn every_variant_answers_the_same_operations(zero_one_two: ListNode<i32>) {
    assert_eq!(summary(&EmptyNode::new()), (0, false, Err(ListError::NotFound)));
    assert_eq!(summary(&zero_one_two), (3, true, Ok(1)));

    let list: PolymorphicList<i32> = zero_one_two.into();
    assert_eq!(summary(&list), (3, true, Ok(1)));
}

#[rstest]
fn empty_variants_compare_equal() {
    let from_node: PolymorphicList<i32> = EmptyNode::new().into();
    let from_default: PolymorphicList<i32> = PolymorphicList::default();
    assert_eq!(from_node, from_default);
    assert_eq!(from_node, EmptyNode);
}

// =============================================================================
// Ownership
// =============================================================================

#[rstest]
fn append_reuses_receiver_head(zero_one_two: ListNode<i32>) {
    let appended = zero_one_two.append(3);
    assert_eq!(appended.data(), &0);
    assert_eq!(appended.to_string(), "0 -> 1 -> 2 -> 3");
}

#[rstest]
fn concat_shares_nothing_with_inputs(zero_one_two: ListNode<i32>) {
    let tail = ListNode::singleton(3);
    let joined = zero_one_two.concat(&tail);

    let grown = joined.append(4);
    assert_eq!(grown.to_string(), "0 -> 1 -> 2 -> 3 -> 4");
    assert_eq!(zero_one_two.to_string(), "0 -> 1 -> 2");
    assert_eq!(tail.to_string(), "3");
}

#[rstest]
fn try_concat_reports_type_mismatch(zero_one_two: ListNode<i32>) {
    let list: PolymorphicList<i32> = zero_one_two.into();
    let error = list.try_concat(&vec![3, 4]).unwrap_err();
    assert!(matches!(error, ListError::TypeMismatch { .. }));
    assert!(error.to_string().starts_with("expected a polymorphic list"));
}

#[rstest]
fn lists_work_as_hash_map_keys() {
    use std::collections::HashMap;

    let mut map: HashMap<PolymorphicList<&str>, usize> = HashMap::new();
    let key: PolymorphicList<&str> = vec!["a", "b"].into_iter().collect();
    map.insert(key.copy(), 2);
    assert_eq!(map.get(&key), Some(&2));
}
