use bst::Tree;

use std::collections::BTreeSet;

/// Sorts the keys of a traversal so orders can be compared as multisets.
fn sorted<'a>(keys: impl Iterator<Item = &'a i32>) -> Vec<i32> {
    let mut keys: Vec<_> = keys.copied().collect();
    keys.sort_unstable();
    keys
}

quickcheck::quickcheck! {
    fn traversals_yield_the_same_keys(xs: Vec<i32>, removes: Vec<i32>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        for remove in &removes {
            let _ = tree.remove(remove);
        }
        let expected: Vec<_> = tree.inorder().copied().collect();

        sorted(tree.preorder()) == expected
            && sorted(tree.postorder()) == expected
            && sorted(tree.depth_first()) == expected
            && sorted(tree.breadth_first()) == expected
    }

    fn preorder_matches_depth_first(xs: Vec<i32>) -> bool {
        let tree: Tree<_> = xs.into_iter().collect();

        tree.preorder().eq(tree.depth_first())
    }

    fn inorder_is_sorted_key_set(xs: Vec<i32>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let set: BTreeSet<_> = xs.into_iter().collect();

        tree.inorder().eq(set.iter())
    }

    fn root_comes_first_and_last(xs: Vec<i32>) -> bool {
        let tree: Tree<_> = xs.into_iter().collect();
        let root = tree.root().key();

        tree.preorder().next() == root
            && tree.breadth_first().next() == root
            && tree.postorder().last() == root
    }
}
