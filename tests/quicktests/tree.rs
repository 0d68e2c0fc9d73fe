use avl::tree::Tree;
use quickcheck_macros::quickcheck;

use std::collections::BTreeSet;

use crate::{is_avl, Op};

/// Applies a set of operations to a tree and a `BTreeSet`, checking the
/// tree's invariants and contents after each one.
fn do_ops<K>(ops: &[Op<K>], mut tree: Tree<K>, model: &mut BTreeSet<K>) -> Option<Tree<K>>
where
    K: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                tree = tree.insert(k.clone());
                model.insert(k.clone());
            }
            Op::Delete(k) => {
                tree = tree.delete(k);
                model.remove(k);
            }
            Op::Iter => {
                if !tree.iter().eq(model.iter()) {
                    return None;
                }
            }
        }

        if !is_avl(&tree) {
            return None;
        }
    }

    Some(tree)
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut model = BTreeSet::new();

    match do_ops(&ops, Tree::new(), &mut model) {
        Some(tree) => tree.iter().eq(model.iter()) && tree.len() == model.len(),
        None => false,
    }
}

#[quickcheck]
fn inorder_is_strictly_increasing(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let keys: Vec<_> = tree.iter().collect();

    keys.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: BTreeSet<_> = xs.into_iter().collect();
    let nots: BTreeSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree = tree.delete(delete);
    }

    let mut still_present: BTreeSet<_> = xs.into_iter().collect();
    for delete in &deletes {
        still_present.remove(delete);
    }

    is_avl(&tree)
        && deletes.iter().all(|x| !tree.contains(x))
        && tree.iter().eq(still_present.iter())
}

#[quickcheck]
fn duplicate_insert_is_noop(xs: Vec<i8>, pick: usize) -> bool {
    if xs.is_empty() {
        return true;
    }
    let tree: Tree<_> = xs.iter().copied().collect();
    let before = tree.clone();

    tree.insert(xs[pick % xs.len()]) == before
}

#[quickcheck]
fn absent_delete_is_noop(xs: Vec<i8>, absent: i8) -> bool {
    let tree: Tree<_> = xs.iter().copied().filter(|x| *x != absent).collect();
    let before = tree.clone();

    tree.delete(&absent) == before
}

#[quickcheck]
fn height_is_logarithmic(xs: Vec<u16>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let n = tree.len() as f64;

    tree.height() as f64 <= (1.44 * (n + 2.0).log2()).ceil()
}
