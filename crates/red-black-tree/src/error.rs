use thiserror::Error;

/// A broken red-black or search-tree property, as reported by
/// [`RedBlackTree::validate`](crate::RedBlackTree::validate).
///
/// Tree operations never produce this; it only surfaces from explicit
/// validation and points at an implementation bug.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("ROOT_HAS_PARENT")]
    RootHasParent,
    #[error("ROOT_NOT_BLACK")]
    RedRoot,
    #[error("BROKEN_PARENT_LINK at node {node}")]
    BrokenParentLink { node: u32 },
    #[error("RED_NODE_WITH_RED_CHILD at node {node}")]
    RedRedEdge { node: u32 },
    #[error("BLACK_HEIGHT_MISMATCH at node {node}: left {left}, right {right}")]
    BlackHeightMismatch { node: u32, left: usize, right: usize },
    #[error("ORDER_VIOLATED at node {node}")]
    OrderViolated { node: u32 },
    #[error("SIZE_MISMATCH: {reachable} reachable of {stored} stored")]
    SizeMismatch { reachable: usize, stored: usize },
}
