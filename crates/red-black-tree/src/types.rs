//! Node trait definitions.
//!
//! Nodes are stored in a [`Vec`]-backed arena owned by the tree. Every
//! "pointer" is an `Option<u32>` index into that arena, and `None` plays the
//! role of the shared black sentinel. Tree helpers take the arena as a slice
//! and work purely with indices.

/// Binary-tree links (`p`, `l`, `r`).
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Keyed node interface used by ordered structures.
pub trait KeyNode<K>: Node {
    fn key(&self) -> &K;
}
