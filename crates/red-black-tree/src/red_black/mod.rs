//! Red-black tree: arena node type, rebalancing routines and the owning
//! [`RedBlackTree`] wrapper.

pub mod tree;
pub mod types;
pub mod util;

pub use tree::{AllNodes, Iter, LeafNodes, NodeId, NodeRef, RedBlackTree};
pub use types::{Color, RbNode};
pub use util::{assert_red_black_tree, color_of, insert, print, remove};
