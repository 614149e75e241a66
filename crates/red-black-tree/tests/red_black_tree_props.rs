use std::collections::BTreeSet;

use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use red_black_tree::RedBlackTree;

#[derive(Clone, Debug)]
enum Op {
    Insert(i32),
    Delete(i32),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (-200..200i32).prop_map(Op::Insert),
        2 => (-200..200i32).prop_map(Op::Delete),
    ]
}

fn in_order(tree: &RedBlackTree) -> Vec<i32> {
    tree.iter().copied().collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn invariants_hold_after_every_op(ops in proptest::collection::vec(op(), 0..400)) {
        let mut tree = RedBlackTree::new();
        let mut model = BTreeSet::new();
        for op in ops {
            match op {
                Op::Insert(k) => {
                    let (inserted, node) = tree.insert(k);
                    prop_assert_eq!(*node.key(), k);
                    prop_assert_eq!(inserted, model.insert(k));
                }
                Op::Delete(k) => {
                    prop_assert_eq!(tree.delete(&k), model.remove(&k));
                }
            }
            if let Err(err) = tree.validate() {
                return Err(TestCaseError::fail(format!("{err}\n{}", tree.print())));
            }
            prop_assert_eq!(tree.len(), model.len());
        }
        prop_assert_eq!(in_order(&tree), model.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn enumeration_matches_contents(keys in proptest::collection::hash_set(-1000..1000i32, 0..300)) {
        let tree: RedBlackTree = keys.iter().copied().collect();

        let mut all: Vec<i32> = tree.all_nodes().map(|n| *n.key()).collect();
        all.sort_unstable();
        let mut expected: Vec<i32> = keys.iter().copied().collect();
        expected.sort_unstable();
        prop_assert_eq!(&all, &expected);
        prop_assert_eq!(in_order(&tree), expected);

        for leaf in tree.leaf_nodes() {
            prop_assert!(leaf.left().is_none() && leaf.right().is_none());
        }
        let leaves = tree.all_nodes().filter(|n| n.is_leaf()).count();
        prop_assert_eq!(tree.leaf_nodes().count(), leaves);
    }

    #[test]
    fn find_round_trip(keys in proptest::collection::vec(-500..500i32, 1..200)) {
        let mut tree: RedBlackTree = keys.iter().copied().collect();
        for k in &keys {
            prop_assert_eq!(tree.find(k).map(|n| *n.key()), Some(*k));
        }
        for k in &keys {
            let present = tree.find(k).is_some();
            prop_assert_eq!(tree.delete(k), present);
            prop_assert!(tree.find(k).is_none());
            prop_assert!(!tree.delete(k));
            tree.validate().map_err(|e| TestCaseError::fail(e.to_string()))?;
        }
        prop_assert!(tree.root().is_none());
    }

    #[test]
    fn duplicate_insert_is_noop(keys in proptest::collection::vec(-100..100i32, 1..100), pick in any::<prop::sample::Index>()) {
        let mut tree: RedBlackTree = keys.iter().copied().collect();
        let k = keys[pick.index(keys.len())];
        let shape = tree.print();
        let len = tree.len();
        let existing = tree.find(&k).map(|n| n.id());

        let (inserted, node) = tree.insert(k);
        prop_assert!(!inserted);
        prop_assert_eq!(Some(node.id()), existing);
        prop_assert_eq!(tree.len(), len);
        prop_assert_eq!(tree.print(), shape);
    }
}

#[test]
fn seeded_stress_against_btreeset() {
    let mut rng = Xoshiro256StarStar::seed_from_u64(0x5eed);
    let mut tree = RedBlackTree::with_capacity(1024);
    let mut model = BTreeSet::new();

    for step in 0..20_000 {
        let k: i32 = rng.gen_range(-2048..2048);
        if rng.gen_bool(0.55) {
            assert_eq!(tree.insert(k).0, model.insert(k), "step {step}: insert({k})");
        } else {
            assert_eq!(tree.delete(&k), model.remove(&k), "step {step}: delete({k})");
        }
        if step % 97 == 0 {
            tree.validate().unwrap_or_else(|e| panic!("step {step}: {e}"));
        }
    }
    tree.validate().unwrap();
    assert!(tree.iter().copied().eq(model.iter().copied()));

    // Drain through the root to exercise every delete fixup path at depth.
    while let Some(root) = tree.root() {
        let k = *root.key();
        assert!(tree.delete(&k));
        assert!(model.remove(&k));
    }
    assert!(model.is_empty());
    tree.validate().unwrap();
}
