//! This crate provides an AVL tree: a Binary Search Tree that rebalances itself after every
//! insertion and deletion so that its height stays logarithmic in the number of keys.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the key that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for keys in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to an empty subtree). BSTs also naturally support sorted iteration
//! by visiting the left subtree, then the subtree root, then the right subtree.
//!
//! ## AVL Tree
//!
//! An AVL tree caches the height of every `Node` and adds a third invariant:
//!
//! 3. For every `Node`, the heights of its two subtrees differ by at most one.
//!
//! Inserting or deleting can break this by one level. The tree repairs it on the way back up
//! with rotations, which swap a parent and child without breaking the ordering invariants. This
//! keeps the height under roughly `1.44 * lg N`.
//!
//! Two flavours are exposed:
//!
//! - [`tree::Tree`], which consumes the old root and returns the new one on every change.
//! - [`set::AvlSet`], a `&mut self` wrapper that also tracks its length.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod set;
pub mod tree;

#[cfg(test)]
mod test {
    pub(crate) mod quick;
}
