use ashtree::{SearchTree, TraversalOrder};
use quickcheck::{Arbitrary, Gen, TestResult};
use quickcheck_macros::*;
use std::collections::BTreeSet;

type Tree = SearchTree<u16>;

#[derive(Clone, Debug)]
enum TreeOp {
    Insert(u16),
    Remove(u16),
    Rebalance,
}

impl Arbitrary for TreeOp {
    fn arbitrary(g: &mut Gen) -> Self {
        let op = usize::arbitrary(g) % 100;
        // A narrow key range makes duplicate insertions and hits on removal common
        let key = u16::arbitrary(g) % 256;
        match op {
            0..60 => TreeOp::Insert(key),
            60..95 => TreeOp::Remove(key),
            95..100 => TreeOp::Rebalance,
            _ => unreachable!(),
        }
    }
}

#[derive(Clone, Debug)]
struct Ops {
    initial: Vec<u16>,
    ops: Vec<TreeOp>,
}

impl Arbitrary for Ops {
    fn arbitrary(g: &mut Gen) -> Self {
        let initial = Vec::<u16>::arbitrary(g)
            .into_iter()
            .map(|key| key % 256)
            .collect();
        let ops = Vec::<TreeOp>::arbitrary(g);
        Ops { initial, ops }
    }
}

/// Checks that every node lies strictly between the bounds inherited from its ancestors.
fn ordered(tree: &Tree) -> bool {
    fn check(
        node: Option<ashtree::NodeRef<'_, u16>>,
        low: Option<u16>,
        high: Option<u16>,
    ) -> bool {
        let node = match node {
            Some(node) => node,
            None => return true,
        };
        let key = *node.key();
        low.map_or(true, |low| low < key)
            && high.map_or(true, |high| key < high)
            && check(node.left_child(), low, Some(key))
            && check(node.right_child(), Some(key), high)
    }
    check(tree.root(), None, None)
}

fn levels(node: Option<ashtree::NodeRef<'_, u16>>) -> usize {
    node.map_or(0, |node| node.height() + 1)
}

fn ceil_log2(n: usize) -> usize {
    (usize::BITS - n.saturating_sub(1).leading_zeros()) as usize
}

#[quickcheck]
fn matches_a_reference_set(ops: Ops) -> bool {
    let mut tree = Tree::from_keys(ops.initial.iter().copied());
    let mut reference = ops.initial.iter().copied().collect::<BTreeSet<_>>();
    for op in &ops.ops {
        let agrees = match *op {
            TreeOp::Insert(key) => tree.insert(key) == reference.insert(key),
            TreeOp::Remove(key) => tree.remove(&key) == reference.take(&key),
            TreeOp::Rebalance => {
                tree.rebalance();
                tree.is_balanced()
            }
        };
        if !agrees || !ordered(&tree) || tree.len() != reference.len() {
            return false;
        }
    }
    tree.keys().eq(reference.iter())
}

#[quickcheck]
fn construction_is_balanced(keys: Vec<u32>) -> bool {
    let tree = SearchTree::<u32>::from_keys(keys.iter().copied());
    let distinct = keys.iter().collect::<BTreeSet<_>>();
    let height_bound = ceil_log2(distinct.len() + 1);
    tree.is_balanced()
        && tree.len() == distinct.len()
        && tree.height().map_or(0, |height| height + 1) <= height_bound
        && tree.keys().eq(distinct.into_iter())
}

#[quickcheck]
fn rebalance_keeps_the_keys(initial: Vec<u16>, inserted: Vec<u16>) -> bool {
    let mut tree = Tree::from_keys(initial);
    tree.extend(inserted);
    let before = tree.keys().copied().collect::<Vec<_>>();
    tree.rebalance();
    let height_bound = ceil_log2(tree.len() + 1);
    tree.is_balanced()
        && tree.keys().copied().eq(before)
        && tree.height().map_or(0, |height| height + 1) <= height_bound
}

#[quickcheck]
fn rebalancing_twice_changes_nothing(keys: Vec<u16>, inserted: Vec<u16>) -> bool {
    let mut tree = Tree::from_keys(keys);
    tree.extend(inserted);
    tree.rebalance();
    let shape = tree.level_order_keys();
    tree.rebalance();
    tree.level_order_keys() == shape
}

#[quickcheck]
fn failed_operations_leave_the_tree_alone(keys: Vec<u16>, probe: u16) -> TestResult {
    let mut tree = Tree::from_keys(keys);
    let shape = tree.level_order_keys();
    let generation = tree.generation();
    if tree.contains(&probe) {
        if tree.insert(probe) {
            return TestResult::failed();
        }
    } else if tree.remove(&probe).is_some() {
        return TestResult::failed();
    }
    TestResult::from_bool(tree.level_order_keys() == shape && tree.generation() == generation)
}

#[quickcheck]
fn every_order_visits_every_node_once(keys: Vec<u16>, inserted: Vec<u16>) -> bool {
    let mut tree = Tree::from_keys(keys);
    tree.extend(inserted);
    TraversalOrder::ALL.iter().all(|&order| {
        let mut visited = tree
            .iter(order)
            .map(|node| *node.key())
            .collect::<Vec<_>>();
        let count = visited.len();
        visited.sort_unstable();
        visited.dedup();
        count == tree.len() && visited.len() == count
    })
}

#[quickcheck]
fn depths_agree_with_the_key_path(keys: Vec<u16>, inserted: Vec<u16>) -> bool {
    let mut tree = Tree::from_keys(keys);
    tree.extend(inserted);
    tree.iter(TraversalOrder::PreOrder)
        .all(|node| tree.depth(&node.handle()) == Some(node.depth()))
}

#[quickcheck]
fn balance_matches_the_definition(keys: Vec<u16>, inserted: Vec<u16>) -> bool {
    let mut tree = Tree::from_keys(keys);
    tree.extend(inserted);
    let expected = tree.iter(TraversalOrder::PostOrder).all(|node| {
        levels(node.left_child()).abs_diff(levels(node.right_child())) <= 1
    });
    tree.is_balanced() == expected
}

#[test]
fn ceil_log2_bounds() {
    assert_eq!(ceil_log2(1), 0);
    assert_eq!(ceil_log2(2), 1);
    assert_eq!(ceil_log2(5), 3);
    assert_eq!(ceil_log2(8), 3);
    assert_eq!(ceil_log2(1001), 10);
}
