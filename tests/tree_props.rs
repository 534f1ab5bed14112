mod common;

use std::collections::BTreeSet;

use polliter::tree::Link;
use polliter::{Bst, InOrder, Iterable, IterError, Node, PollIterator};
use proptest::prelude::*;

fn drain<'a, I: PollIterator<&'a i64>>(mut it: I) -> Vec<i64> {
    let mut out = Vec::new();
    while it.has_next() {
        out.push(*it.next().expect("has_next promised an element"));
    }
    out
}

#[test]
fn reference_insertion_order_yields_sorted_sequence() {
    common::init_tracing();

    let mut tree = Bst::new();
    for value in [3, 1, 5, 0, 6, 2, 4] {
        tree.insert(value);
    }
    assert_eq!(drain(tree.iter()), vec![0, 1, 2, 3, 4, 5, 6]);
}

#[test]
fn functional_insert_matches_owning_tree() {
    let mut root: Option<Box<Node<i64>>> = None;
    for value in [3, 1, 5, 0, 6, 2, 4] {
        root = Some(Node::insert(root, value));
    }
    assert_eq!(drain(InOrder::new(root.as_deref())), vec![0, 1, 2, 3, 4, 5, 6]);
}

#[test]
fn absent_tree_is_exhausted_immediately() {
    let absent: Option<&Node<i64>> = None;
    let mut it = InOrder::new(absent);
    assert!(!it.has_next());
    assert!(matches!(it.next(), Err(IterError::Empty)));

    // Protocol entry point on an absent owning link
    let link: Link<i64> = None;
    let mut it = Iterable::iter(&link);
    for _ in 0..3 {
        assert!(!it.has_next());
        assert!(matches!(it.next(), Err(IterError::Empty)));
    }
}

#[test]
fn link_iterable_matches_owning_tree() {
    let mut link: Link<i64> = None;
    for value in [3, 1, 5, 0, 6, 2, 4] {
        link = Some(Node::insert(link, value));
    }
    assert_eq!(drain(Iterable::iter(&link)), vec![0, 1, 2, 3, 4, 5, 6]);
}

#[test]
fn duplicate_five_leaves_sequence_unchanged() {
    let mut tree: Bst<i64> = [5, 3, 7].into_iter().collect();
    let before = drain(tree.iter());
    tree.insert(5);
    assert_eq!(drain(tree.iter()), before);
    assert_eq!(before, vec![3, 5, 7]);
}

#[test]
fn empty_iterator_error_is_sticky() {
    let tree: Bst<i64> = [2, 1].into_iter().collect();
    let mut it = (&tree).iter();
    it.next().unwrap();
    it.next().unwrap();
    for _ in 0..3 {
        assert!(!it.has_next());
        assert!(it.next().unwrap_err().is_empty());
    }
    assert!(!it.has_next());
}

#[test]
fn iterator_is_its_own_iterable() {
    let tree: Bst<i64> = [1, 2, 3].into_iter().collect();
    let mut it = tree.iter();
    it.next().unwrap();

    let addr: *const InOrder<'_, i64> = &it;
    let again = (&mut it).iter();
    assert!(std::ptr::eq(again, addr));

    // Owned identity keeps position
    let owned = it.iter();
    assert_eq!(drain(owned), vec![2, 3]);
}

#[test]
fn deep_degenerate_tree_iterates_without_recursion() {
    let tree: Bst<i64> = (0..50_000).rev().collect();
    assert_eq!(tree.depth(), 50_000);
    let values = drain(tree.iter());
    assert_eq!(values.len(), 50_000);
    assert!(values.windows(2).all(|w| w[0] < w[1]));
}

proptest! {
    #[test]
    fn in_order_is_sorted_and_deduplicated(values in proptest::collection::vec(-1000i64..1000, 0..200)) {
        let tree: Bst<i64> = values.iter().copied().collect();
        let expected: Vec<i64> = values.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();

        prop_assert_eq!(drain(tree.iter()), expected.clone());
        prop_assert_eq!(tree.len(), expected.len());
    }

    #[test]
    fn has_next_is_idempotent(values in proptest::collection::vec(any::<i64>(), 0..50), polls in 1usize..5) {
        let tree: Bst<i64> = values.into_iter().collect();
        let mut it = tree.iter();
        loop {
            let first = it.has_next();
            for _ in 0..polls {
                prop_assert_eq!(it.has_next(), first);
            }
            if !first {
                break;
            }
            it.next().unwrap();
        }
        prop_assert!(it.next().unwrap_err().is_empty());
    }

    #[test]
    fn interleaved_iterators_are_independent(
        values in proptest::collection::vec(any::<i64>(), 0..100),
        schedule in proptest::collection::vec(any::<bool>(), 0..400),
    ) {
        let tree: Bst<i64> = values.iter().copied().collect();
        let expected = drain(tree.iter());

        let mut left = tree.iter();
        let mut right = tree.iter();
        let (mut seen_left, mut seen_right) = (Vec::new(), Vec::new());
        for pick_left in schedule {
            let (it, seen) = if pick_left {
                (&mut left, &mut seen_left)
            } else {
                (&mut right, &mut seen_right)
            };
            if it.has_next() {
                seen.push(*it.next().unwrap());
            }
        }
        seen_left.extend(drain(left));
        seen_right.extend(drain(right));

        prop_assert_eq!(&seen_left, &expected);
        prop_assert_eq!(&seen_right, &expected);
    }
}
