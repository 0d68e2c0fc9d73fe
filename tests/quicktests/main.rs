//! Randomised tests of the public tree API against `std::collections::BTreeSet`.

use avl::tree::Tree;
use quickcheck::{Arbitrary, Gen};

mod tree;

/// An enum for the various kinds of "things" to do to
/// the tree in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op<K> {
    /// Insert the K into the tree
    Insert(K),
    /// Delete the K from the tree
    Delete(K),
    /// Compare iterators
    Iter,
}

impl<K> Arbitrary for Op<K>
where
    K: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 1, 2]).unwrap() {
            0 => Op::Insert(K::arbitrary(g)),
            1 => Op::Delete(K::arbitrary(g)),
            2 => Op::Iter,
            _ => unreachable!(),
        }
    }
}

/// Walks the tree checking that keys are ordered, cached heights are right, and no node is out
/// of balance. Returns `None` as soon as something is wrong, otherwise the height.
pub fn checked_height<K: Ord>(
    tree: &Tree<K>,
    lower: Option<&K>,
    upper: Option<&K>,
) -> Option<usize> {
    let node = match tree.root() {
        None => return Some(0),
        Some(node) => node,
    };

    if lower.map_or(false, |lower| lower >= node.key())
        || upper.map_or(false, |upper| node.key() >= upper)
    {
        return None;
    }

    let left = checked_height(node.left(), lower, Some(node.key()))?;
    let right = checked_height(node.right(), Some(node.key()), upper)?;
    let balanced = left.abs_diff(right) <= 1;
    let cached = node.height() == left.max(right) + 1;
    let balance_factor = tree.balance_factor() == left as isize - right as isize;

    if balanced && cached && balance_factor {
        Some(node.height())
    } else {
        None
    }
}

/// Whether `tree` satisfies every AVL invariant.
pub fn is_avl<K: Ord>(tree: &Tree<K>) -> bool {
    checked_height(tree, None, None) == Some(tree.height())
}
