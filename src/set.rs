//! A mutable ordered set backed by an AVL [`Tree`]. This is the `&mut self` flavour of the tree:
//! it owns the root, keeps a count of its keys, and tells the caller whether an insert or removal
//! actually changed anything.
//!
//! # Examples
//!
//! ```
//! use avl::set::AvlSet;
//!
//! let mut set = AvlSet::new();
//!
//! // Nothing in here yet.
//! assert!(!set.contains(&1));
//!
//! assert!(set.insert(1));
//! assert!(set.contains(&1));
//!
//! // Inserting the same key again is a no-op.
//! assert!(!set.insert(1));
//! assert_eq!(set.len(), 1);
//!
//! // Removing a key reports whether it was there.
//! assert!(set.remove(&1));
//! assert!(!set.remove(&1));
//! assert!(set.is_empty());
//! ```

use std::fmt;
use std::iter::FromIterator;
use std::mem;

use crate::tree::{IntoIter, Iter, Tree};

/// An ordered set of unique keys with `O(lg N)` insertion, removal, and lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AvlSet<K> {
    root: Tree<K>,
    len: usize,
}

impl<K> Default for AvlSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> AvlSet<K> {
    /// Generate a new, empty `AvlSet`.
    pub fn new() -> Self {
        Self {
            root: Tree::new(),
            len: 0,
        }
    }

    /// How many keys are in the set.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the set holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The height of the underlying tree.
    pub fn height(&self) -> usize {
        self.root.height()
    }

    /// The smallest key in the set.
    pub fn first(&self) -> Option<&K> {
        self.root.min()
    }

    /// The largest key in the set.
    pub fn last(&self) -> Option<&K> {
        self.root.max()
    }

    /// Walks the keys in sorted order.
    pub fn iter(&self) -> Iter<'_, K> {
        self.root.iter()
    }

    /// The tree holding the keys.
    pub fn as_tree(&self) -> &Tree<K> {
        &self.root
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        self.root = Tree::new();
        self.len = 0;
    }
}

impl<K: Ord> AvlSet<K> {
    /// Whether `key` is in the set.
    pub fn contains(&self, key: &K) -> bool {
        self.root.contains(key)
    }

    /// Adds `key` to the set. Returns `false` and leaves the set alone if the key was already
    /// present.
    pub fn insert(&mut self, key: K) -> bool {
        if self.root.contains(&key) {
            return false;
        }
        self.root = mem::take(&mut self.root).insert(key);
        self.len += 1;
        true
    }

    /// Removes `key` from the set. Returns `false` if the key wasn't there.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::set::AvlSet;
    ///
    /// let mut set: AvlSet<_> = vec![20, 10, 30, 5, 15, 25, 35].into_iter().collect();
    ///
    /// assert!(set.remove(&10));
    /// assert_eq!(set.to_string(), "5 15 20 25 30 35");
    /// ```
    pub fn remove(&mut self, key: &K) -> bool {
        if !self.root.contains(key) {
            return false;
        }
        self.root = mem::take(&mut self.root).delete(key);
        self.len -= 1;
        true
    }
}

impl<K: fmt::Display> fmt::Display for AvlSet<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root, f)
    }
}

impl<K: Ord> FromIterator<K> for AvlSet<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<K: Ord> Extend<K> for AvlSet<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K> From<AvlSet<K>> for Tree<K> {
    fn from(set: AvlSet<K>) -> Self {
        set.root
    }
}

impl<'a, K> IntoIterator for &'a AvlSet<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K> IntoIterator for AvlSet<K> {
    type Item = K;
    type IntoIter = IntoIter<K>;

    fn into_iter(self) -> Self::IntoIter {
        self.root.into_iter()
    }
}
