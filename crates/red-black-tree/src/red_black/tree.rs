use std::fmt;
use std::iter::FusedIterator;

use crate::error::InvariantViolation;
use crate::util::{find, first, last, next, next_pre_order};

use super::types::{Color, RbNode};
use super::util;

/// Opaque handle of a node inside one tree.
///
/// Handles are only meaningful while the tree is not mutated: removal may
/// renumber the arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

/// Self-balancing binary search tree with unique keys.
///
/// Nodes live in an arena owned by the tree; missing children stand for the
/// shared black sentinel. Every public operation leaves the tree a valid
/// red-black tree:
///
/// - the root, if any, is black;
/// - a red node has two black children (sentinels count as black);
/// - every path from a node down to a sentinel crosses the same number of
///   black nodes;
/// - an in-order walk yields strictly increasing keys.
///
/// ```
/// use red_black_tree::RedBlackTree;
///
/// let mut tree = RedBlackTree::new();
/// let (inserted, node) = tree.insert(5);
/// assert!(inserted);
/// assert_eq!(*node.key(), 5);
///
/// let (inserted, _) = tree.insert(5);
/// assert!(!inserted);
///
/// assert!(tree.delete(&5));
/// assert!(tree.find(&5).is_none());
/// ```
pub struct RedBlackTree<K = i32> {
    arena: Vec<RbNode<K>>,
    root: Option<u32>,
}

impl<K> RedBlackTree<K> {
    pub fn new() -> Self {
        Self {
            arena: Vec::new(),
            root: None,
        }
    }

    /// Empty tree with room for `capacity` nodes before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Vec::with_capacity(capacity),
            root: None,
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    pub fn root(&self) -> Option<NodeRef<'_, K>> {
        self.node(self.root)
    }

    /// Node with the smallest key.
    pub fn first(&self) -> Option<NodeRef<'_, K>> {
        self.node(first(&self.arena, self.root))
    }

    /// Node with the largest key.
    pub fn last(&self) -> Option<NodeRef<'_, K>> {
        self.node(last(&self.arena, self.root))
    }

    /// Looks up a node by its handle.
    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_, K>> {
        self.node(Some(id.0).filter(|&i| (i as usize) < self.arena.len()))
    }

    /// Every node, in pre-order (node, left subtree, right subtree).
    pub fn all_nodes(&self) -> AllNodes<'_, K> {
        AllNodes {
            arena: &self.arena,
            top: self.root.unwrap_or_default(),
            next: self.root,
        }
    }

    /// Every node whose children are both sentinels, in pre-order.
    pub fn leaf_nodes(&self) -> LeafNodes<'_, K> {
        LeafNodes {
            nodes: self.all_nodes(),
        }
    }

    /// Keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            arena: &self.arena,
            next: first(&self.arena, self.root),
            len: self.arena.len(),
        }
    }

    /// Black nodes on any path from the root down to a sentinel, the root
    /// included. Zero for an empty tree.
    pub fn black_height(&self) -> usize {
        let mut height = 0;
        let mut curr = self.root;
        while let Some(i) = curr {
            let node = &self.arena[i as usize];
            if node.c == Color::Black {
                height += 1;
            }
            curr = node.l;
        }
        height
    }

    fn node(&self, idx: Option<u32>) -> Option<NodeRef<'_, K>> {
        idx.map(|idx| NodeRef {
            arena: &self.arena,
            idx,
        })
    }
}

impl<K: Ord> RedBlackTree<K> {
    /// Inserts `key` unless it is already present.
    ///
    /// Returns `true` with the new node, or `false` with the node that
    /// already holds `key` (the tree is left untouched in that case).
    pub fn insert(&mut self, key: K) -> (bool, NodeRef<'_, K>) {
        let (inserted, idx, root) = util::insert(&mut self.arena, self.root, key);
        self.root = root;
        (
            inserted,
            NodeRef {
                arena: &self.arena,
                idx,
            },
        )
    }

    pub fn find(&self, key: &K) -> Option<NodeRef<'_, K>> {
        self.node(find(&self.arena, self.root, key))
    }

    pub fn contains(&self, key: &K) -> bool {
        find(&self.arena, self.root, key).is_some()
    }

    /// Removes `key`, returning whether it was present.
    pub fn delete(&mut self, key: &K) -> bool {
        self.take(key).is_some()
    }

    /// Removes `key` and hands the stored key back.
    pub fn take(&mut self, key: &K) -> Option<K> {
        let idx = find(&self.arena, self.root, key)?;
        let (key, root) = util::remove(&mut self.arena, self.root, idx);
        self.root = root;
        Some(key)
    }

    /// Checks all red-black and ordering properties.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        util::assert_red_black_tree(&self.arena, self.root)
    }
}

impl<K: fmt::Debug> RedBlackTree<K> {
    /// Multi-line dump of the tree shape with colors.
    pub fn print(&self) -> String {
        util::print(&self.arena, self.root, "")
    }
}

impl<K> Default for RedBlackTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone> Clone for RedBlackTree<K> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena.clone(),
            root: self.root,
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for RedBlackTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K: Ord> FromIterator<K> for RedBlackTree<K> {
    fn from_iter<T: IntoIterator<Item = K>>(iter: T) -> Self {
        let mut tree = RedBlackTree::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for RedBlackTree<K> {
    fn extend<T: IntoIterator<Item = K>>(&mut self, iter: T) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a RedBlackTree<K> {
    type Item = &'a K;

    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Read-only view of one node.
///
/// Borrows the tree, so no view can outlive a mutation. Missing links
/// (`None`) are the black sentinel.
pub struct NodeRef<'a, K> {
    arena: &'a [RbNode<K>],
    idx: u32,
}

impl<'a, K> NodeRef<'a, K> {
    pub fn id(&self) -> NodeId {
        NodeId(self.idx)
    }

    pub fn key(&self) -> &'a K {
        &self.arena[self.idx as usize].k
    }

    pub fn color(&self) -> Color {
        self.arena[self.idx as usize].c
    }

    pub fn is_red(&self) -> bool {
        self.color() == Color::Red
    }

    pub fn is_black(&self) -> bool {
        self.color() == Color::Black
    }

    pub fn parent(&self) -> Option<NodeRef<'a, K>> {
        self.link(self.arena[self.idx as usize].p)
    }

    pub fn left(&self) -> Option<NodeRef<'a, K>> {
        self.link(self.arena[self.idx as usize].l)
    }

    pub fn right(&self) -> Option<NodeRef<'a, K>> {
        self.link(self.arena[self.idx as usize].r)
    }

    pub fn left_color(&self) -> Color {
        util::color_of(self.arena, self.arena[self.idx as usize].l)
    }

    pub fn right_color(&self) -> Color {
        util::color_of(self.arena, self.arena[self.idx as usize].r)
    }

    /// Both children are sentinels.
    pub fn is_leaf(&self) -> bool {
        let node = &self.arena[self.idx as usize];
        node.l.is_none() && node.r.is_none()
    }

    fn link(&self, idx: Option<u32>) -> Option<NodeRef<'a, K>> {
        idx.map(|idx| NodeRef {
            arena: self.arena,
            idx,
        })
    }
}

impl<K> Clone for NodeRef<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for NodeRef<'_, K> {}

impl<K> PartialEq for NodeRef<'_, K> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.arena, other.arena) && self.idx == other.idx
    }
}

impl<K> Eq for NodeRef<'_, K> {}

impl<K: fmt::Debug> fmt::Debug for NodeRef<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.idx)
            .field("key", self.key())
            .field("color", &self.color())
            .finish()
    }
}

impl Color {
    /// Color of an optional link; a missing node is the black sentinel.
    pub fn of<K>(node: Option<NodeRef<'_, K>>) -> Color {
        node.map_or(Color::Black, |n| n.color())
    }
}

/// Pre-order walk over every node. See [`RedBlackTree::all_nodes`].
pub struct AllNodes<'a, K> {
    arena: &'a [RbNode<K>],
    top: u32,
    next: Option<u32>,
}

impl<'a, K> Iterator for AllNodes<'a, K> {
    type Item = NodeRef<'a, K>;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.next?;
        self.next = next_pre_order(self.arena, idx, self.top);
        Some(NodeRef {
            arena: self.arena,
            idx,
        })
    }
}

impl<K> FusedIterator for AllNodes<'_, K> {}

/// Pre-order walk over nodes with two sentinel children. See
/// [`RedBlackTree::leaf_nodes`].
pub struct LeafNodes<'a, K> {
    nodes: AllNodes<'a, K>,
}

impl<'a, K> Iterator for LeafNodes<'a, K> {
    type Item = NodeRef<'a, K>;

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.by_ref().find(|n| n.is_leaf())
    }
}

impl<K> FusedIterator for LeafNodes<'_, K> {}

/// Ascending walk over the keys. See [`RedBlackTree::iter`].
pub struct Iter<'a, K> {
    arena: &'a [RbNode<K>],
    next: Option<u32>,
    len: usize,
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.next?;
        self.next = next(self.arena, idx);
        self.len -= 1;
        Some(&self.arena[idx as usize].k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<K> FusedIterator for Iter<'_, K> {}
