//! Arena-based red-black tree.
//!
//! Nodes are kept in a `Vec` owned by the tree and linked through
//! `Option<u32>` indices instead of pointers; `None` is the shared black
//! sentinel. Parent back-links are plain indices too, so rotations and
//! relinking never fight the borrow checker and freeing a node is a
//! `swap_remove` on the arena.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`] and [`KeyNode`] link traits |
//! [`util`] | color-agnostic walks: `first`, `next`, `next_pre_order`, `find`, `swap_remove` |
//! [`red_black`] | [`RbNode`], insert/remove fixups, validation, [`RedBlackTree`] |
//! [`error`] | [`InvariantViolation`] |

pub mod error;
pub mod red_black;
pub mod types;
pub mod util;

pub use error::InvariantViolation;
pub use red_black::{AllNodes, Color, Iter, LeafNodes, NodeId, NodeRef, RbNode, RedBlackTree};
pub use types::{KeyNode, Node};
