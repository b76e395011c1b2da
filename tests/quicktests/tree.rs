use bst::{KeyNotFound, Tree};

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and removes we have the same set of keys in both.
fn do_ops<K>(ops: &[Op<K>], bst: &mut Tree<K>, set: &mut BTreeSet<K>) -> bool
where
    K: Clone + Ord,
{
    let mut results_agree = true;
    for op in ops {
        match op {
            Op::Insert(k) => {
                bst.insert(k.clone());
                set.insert(k.clone());
            }
            Op::Remove(k) => {
                let removed = bst.remove(k).is_ok();
                results_agree &= removed == set.remove(k);
            }
        }
    }

    results_agree
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut set = BTreeSet::new();

        do_ops(&ops, &mut tree, &mut set)
            && set.iter().all(|key| tree.search(key))
            && tree.len() == set.len()
    }

    fn inorder_is_strictly_ascending(ops: Vec<Op<i16>>) -> bool {
        let mut tree = Tree::new();
        let mut set = BTreeSet::new();
        do_ops(&ops, &mut tree, &mut set);

        let keys: Vec<_> = tree.inorder().collect();
        keys.windows(2).all(|pair| pair[0] < pair[1])
    }

    fn contains(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();

        xs.iter().all(|x| tree.contains(x))
    }

    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !tree.search(x))
    }

    fn with_removals(xs: Vec<i8>, removes: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        let mut still_present: BTreeSet<_> = xs.into_iter().collect();
        for remove in &removes {
            let expected = if still_present.remove(remove) {
                Ok(())
            } else {
                Err(KeyNotFound)
            };
            if tree.remove(remove) != expected {
                return false;
            }
        }

        removes.iter().all(|x| !tree.search(x))
            && still_present.iter().all(|x| tree.search(x))
    }

    fn duplicate_insert_is_idempotent(xs: Vec<i8>, x: i8) -> bool {
        let mut tree: Tree<_> = xs.into_iter().collect();
        tree.insert(x);
        let before: Vec<_> = tree.inorder().copied().collect();

        tree.insert(x);
        let after: Vec<_> = tree.inorder().copied().collect();

        tree.search(&x) && before == after
    }

    fn remove_absent_fails_closed(xs: Vec<i8>, x: i8) -> bool {
        let mut tree: Tree<_> = xs.into_iter().filter(|k| *k != x).collect();
        let before: Vec<_> = tree.inorder().copied().collect();

        tree.remove(&x) == Err(KeyNotFound)
            && tree.inorder().copied().eq(before)
    }
}
