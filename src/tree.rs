//! An owned AVL tree. Every child slot is a [`Tree`], which is either empty ([`Tree::Leaf`]) or
//! owns a boxed [`Node`]. Operations that restructure the tree (`insert` and `delete`) consume
//! the old root and hand back the new one, so ownership of each subtree is always moved rather
//! than shared.
//!
//! # Examples
//!
//! ```
//! use avl::tree::Tree;
//!
//! let tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! // `insert` hands back the new root.
//! let tree = tree.insert(1).insert(2).insert(3);
//! assert!(tree.contains(&2));
//!
//! // Ascending inserts still give a balanced tree.
//! assert_eq!(tree.height(), 2);
//!
//! // Inserting a key twice changes nothing.
//! let tree = tree.insert(2);
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
//!
//! // And neither does deleting a key that isn't there.
//! let tree = tree.delete(&2).delete(&42);
//! assert_eq!(tree.to_string(), "1 3");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::{FromIterator, FusedIterator};
use std::mem;

use tracing::trace;

/// A self-balancing Binary Search Tree (specifically, an AVL tree) over a set of unique keys.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tree<K> {
    /// A marker for the empty pointer at the bottom of a subtree.
    Leaf,
    /// A `Node` that has a key and two children (which are both `Tree`s).
    Node(Box<Node<K>>),
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self::Leaf
    }

    /// The number of levels in this tree. An empty tree has a height of 0 and a single node has a
    /// height of 1.
    pub fn height(&self) -> usize {
        match self {
            Self::Leaf => 0,
            Self::Node(n) => n.height,
        }
    }

    /// The height of the left subtree minus the height of the right subtree. An empty tree has a
    /// balance factor of 0. Every subtree of a valid AVL tree reports -1, 0, or 1.
    pub fn balance_factor(&self) -> isize {
        match self {
            Self::Leaf => 0,
            Self::Node(n) => n.balance_factor(),
        }
    }

    /// The node at the top of this tree, if there is one.
    pub fn root(&self) -> Option<&Node<K>> {
        match self {
            Self::Leaf => None,
            Self::Node(n) => Some(n.as_ref()),
        }
    }

    /// Whether this tree holds no keys.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Leaf)
    }

    /// Counts the keys in this tree. This walks the whole tree.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// The smallest key in the tree.
    pub fn min(&self) -> Option<&K> {
        let mut node = self.root()?;
        while let Some(left) = node.left.root() {
            node = left;
        }
        Some(&node.key)
    }

    /// The largest key in the tree.
    pub fn max(&self) -> Option<&K> {
        let mut node = self.root()?;
        while let Some(right) = node.right.root() {
            node = right;
        }
        Some(&node.key)
    }

    /// Walks the keys in sorted order. The iterator borrows the tree, so calling `iter` again
    /// restarts the walk from the smallest key.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::tree::Tree;
    ///
    /// let tree: Tree<_> = vec![20, 10, 30].into_iter().collect();
    ///
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), vec![&10, &20, &30]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self)
    }

    fn take(&mut self) -> Self {
        mem::take(self)
    }

    fn rotate_left(self) -> Self {
        match self {
            Self::Leaf => Self::Leaf,
            Self::Node(n) => Self::Node(n.rotate_left()),
        }
    }

    fn rotate_right(self) -> Self {
        match self {
            Self::Leaf => Self::Leaf,
            Self::Node(n) => Self::Node(n.rotate_right()),
        }
    }
}

impl<K: Ord> Tree<K> {
    /// Whether `key` is stored in this tree.
    pub fn contains(&self, key: &K) -> bool {
        let mut tree = self;
        while let Self::Node(node) = tree {
            tree = match key.cmp(&node.key) {
                Ordering::Less => &node.left,
                Ordering::Equal => return true,
                Ordering::Greater => &node.right,
            };
        }
        false
    }

    /// Returns the tree with `key` added. If the key is already present the tree is returned
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::tree::Tree;
    ///
    /// let tree = Tree::new().insert(2).insert(1);
    /// let same = tree.clone().insert(2);
    ///
    /// assert_eq!(tree, same);
    /// ```
    pub fn insert(self, key: K) -> Self {
        self.insert_below(key).0
    }

    /// Inserts `key` and also reports how it compared against the key at the top of this
    /// subtree. A new leaf reports `Equal`.
    fn insert_below(self, key: K) -> (Self, Ordering) {
        match self {
            Self::Leaf => (Self::Node(Box::new(Node::new(key))), Ordering::Equal),
            Self::Node(n) => {
                let (n, went) = n.insert(key);
                (Self::Node(n), went)
            }
        }
    }

    /// Returns the tree without `key`. If the key isn't present the tree is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::tree::Tree;
    ///
    /// let tree: Tree<_> = vec![20, 10, 30, 5, 15, 25, 35].into_iter().collect();
    /// let tree = tree.delete(&10);
    ///
    /// assert_eq!(tree.to_string(), "5 15 20 25 30 35");
    /// ```
    pub fn delete(self, key: &K) -> Self {
        match self {
            Self::Leaf => Self::Leaf,
            Self::Node(n) => n.delete(key),
        }
    }
}

impl<K: fmt::Display> fmt::Display for Tree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys = self.iter();
        if let Some(first) = keys.next() {
            write!(f, "{}", first)?;
            for key in keys {
                write!(f, " {}", key)?;
            }
        }
        Ok(())
    }
}

impl<K: Ord> FromIterator<K> for Tree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), Self::insert)
    }
}

impl<K: Ord> Extend<K> for Tree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        let tree = self.take();
        *self = iter.into_iter().fold(tree, Self::insert);
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K> IntoIterator for Tree<K> {
    type Item = K;
    type IntoIter = IntoIter<K>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

/// A `Node` has a key that is used for searching/sorting. It always has two children although
/// those children may be [`Leaf`][Tree::Leaf]s.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<K> {
    key: K,
    left: Tree<K>,
    right: Tree<K>,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    height: usize,
}

impl<K> Node<K> {
    fn new(key: K) -> Self {
        Self {
            height: 1,
            key,
            left: Tree::Leaf,
            right: Tree::Leaf,
        }
    }

    /// The key stored at this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The subtree of keys smaller than this node's key.
    pub fn left(&self) -> &Tree<K> {
        &self.left
    }

    /// The subtree of keys larger than this node's key.
    pub fn right(&self) -> &Tree<K> {
        &self.right
    }

    /// The cached height of the subtree rooted here.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Adjusts the height of `self` to be the max of its children's heights + 1.
    fn fix_height(&mut self) {
        self.height = self.left.height().max(self.right.height()) + 1;
    }

    /// The difference in height between the left and right subtrees. See [the Wikipedia
    /// page][wiki] for more details.
    ///
    /// [wiki]: https://en.wikipedia.org/wiki/AVL_tree#Balance_factor
    fn balance_factor(&self) -> isize {
        self.left.height() as isize - self.right.height() as isize
    }

    /// Rotate self to the right. This moves the left child up vertically and self down
    /// vertically. Used to rebalance the tree when the left child is too tall. Without a left
    /// child there is nothing to rotate and `self` comes back untouched.
    ///
    /// # Diagram
    ///
    /// ```text
    ///    old_root (i.e. "self")    new_root
    ///     /     \                  /     \
    ///  new_root  z     rotate ->  x    old_root
    ///   / \                               /  \
    ///  x   y                             y    z
    /// ```
    ///
    /// `y` holds keys between `new_root` and `old_root` so it can move across.
    fn rotate_right(mut self: Box<Self>) -> Box<Self> {
        let mut new_root = match self.left.take() {
            Tree::Node(left) => left,
            Tree::Leaf => return self,
        };

        self.left = new_root.right.take();
        self.fix_height();

        new_root.right = Tree::Node(self);
        new_root.fix_height();
        trace!(height = new_root.height, "rotated right");
        new_root
    }

    /// The mirror of [`Node::rotate_right`]: the right child moves up and `self` becomes its
    /// left child.
    fn rotate_left(mut self: Box<Self>) -> Box<Self> {
        let mut new_root = match self.right.take() {
            Tree::Node(right) => right,
            Tree::Leaf => return self,
        };

        self.right = new_root.left.take();
        self.fix_height();

        new_root.left = Tree::Node(self);
        new_root.fix_height();
        trace!(height = new_root.height, "rotated left");
        new_root
    }
}

impl<K: Ord> Node<K> {
    /// Inserts `key` below `self` and rebalances `self` if it became too tall on one side.
    ///
    /// Returns the new subtree root and how `key` compared against `self.key`. The parent uses
    /// that ordering to tell whether the key landed on the outside (single rotation) or the
    /// inside (double rotation) of this subtree.
    fn insert(mut self: Box<Self>, key: K) -> (Box<Self>, Ordering) {
        let went = key.cmp(&self.key);
        let below = match went {
            Ordering::Equal => return (self, went),
            Ordering::Less => {
                let (left, below) = self.left.take().insert_below(key);
                self.left = left;
                below
            }
            Ordering::Greater => {
                let (right, below) = self.right.take().insert_below(key);
                self.right = right;
                below
            }
        };

        self.fix_height();

        // At most one node on the insertion path is out of balance and fixing it brings the
        // subtree back to its old height, so nothing above needs to rotate.
        let root = match self.balance_factor() {
            b if b > 1 => {
                if below == Ordering::Greater {
                    self.left = self.left.take().rotate_left();
                }
                self.rotate_right()
            }
            b if b < -1 => {
                if below == Ordering::Less {
                    self.right = self.right.take().rotate_right();
                }
                self.rotate_left()
            }
            _ => self,
        };

        root.check_invariants();
        (root, went)
    }

    /// Deletes `key` from the subtree rooted at `self` and returns what is left of it.
    fn delete(mut self: Box<Self>, key: &K) -> Tree<K> {
        match key.cmp(&self.key) {
            Ordering::Less => self.left = self.left.take().delete(key),
            Ordering::Greater => self.right = self.right.take().delete(key),
            Ordering::Equal => match (self.left.take(), self.right.take()) {
                // `self` is dropped here and its only child (if any) takes its place.
                (Tree::Leaf, child) | (child, Tree::Leaf) => {
                    trace!(child_height = child.height(), "spliced out node");
                    return child;
                }
                // Two children: this node keeps its place and takes over its successor's key.
                // The successor is the one node freed.
                (left, Tree::Node(right)) => {
                    let (successor, right) = right.take_min();
                    self.key = successor;
                    self.left = left;
                    self.right = right;
                }
            },
        }

        Tree::Node(self.rebalance())
    }

    /// Removes the leftmost node of this subtree, rebalancing every level on the way back up.
    /// Returns the removed key and the remaining subtree.
    fn take_min(mut self: Box<Self>) -> (K, Tree<K>) {
        match self.left.take() {
            Tree::Leaf => {
                let Node { key, right, .. } = *self;
                trace!(child_height = right.height(), "spliced out successor");
                (key, right)
            }
            Tree::Node(left) => {
                let (min, left) = left.take_min();
                self.left = left;
                (min, Tree::Node(self.rebalance()))
            }
        }
    }

    /// Recomputes the height of `self` and rotates if it is out of balance. Unlike insertion,
    /// a deletion can leave the taller child perfectly balanced, in which case a single rotation
    /// is enough. This runs at every level a deletion passes through.
    fn rebalance(mut self: Box<Self>) -> Box<Self> {
        self.fix_height();

        let root = match self.balance_factor() {
            b if b > 1 => {
                if self.left.balance_factor() < 0 {
                    self.left = self.left.take().rotate_left();
                }
                self.rotate_right()
            }
            b if b < -1 => {
                if self.right.balance_factor() > 0 {
                    self.right = self.right.take().rotate_right();
                }
                self.rotate_left()
            }
            _ => self,
        };

        root.check_invariants();
        root
    }

    /// In debug builds, assert that we've restored/maintained the AVL invariant at this node.
    fn check_invariants(&self) {
        if cfg!(debug_assertions) {
            assert_eq!(
                self.height,
                self.left.height().max(self.right.height()) + 1
            );
            assert!(self.balance_factor().abs() <= 1);
            if let Some(left) = self.left.root() {
                assert!(left.key < self.key);
            }
            if let Some(right) = self.right.root() {
                assert!(self.key < right.key);
            }
        }
    }
}

/// An in-order iterator over the keys of a [`Tree`]. It holds at most one pending node per level
/// of the tree.
pub struct Iter<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> Iter<'a, K> {
    fn new(tree: &'a Tree<K>) -> Self {
        let mut iter = Self {
            stack: Vec::with_capacity(tree.height()),
        };
        iter.push_left_spine(tree);
        iter
    }

    fn push_left_spine(&mut self, mut tree: &'a Tree<K>) {
        while let Tree::Node(node) = tree {
            self.stack.push(node);
            tree = &node.left;
        }
    }
}

impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        Some(&node.key)
    }
}

impl<K> FusedIterator for Iter<'_, K> {}

/// An owning in-order iterator over the keys of a [`Tree`].
pub struct IntoIter<K> {
    stack: Vec<Box<Node<K>>>,
}

impl<K> IntoIter<K> {
    fn new(tree: Tree<K>) -> Self {
        let mut iter = Self {
            stack: Vec::with_capacity(tree.height()),
        };
        iter.push_left_spine(tree);
        iter
    }

    fn push_left_spine(&mut self, mut tree: Tree<K>) {
        while let Tree::Node(mut node) = tree {
            tree = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<K> Iterator for IntoIter<K> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.stack.pop()?;
        self.push_left_spine(node.right.take());
        let Node { key, .. } = *node;
        Some(key)
    }
}

impl<K> FusedIterator for IntoIter<K> {}
