use std::fmt::Debug;

use super::super::types::RbNode;

/// Debug dump of the subtree at `node`, one node per line.
pub fn print<K: Debug>(arena: &[RbNode<K>], node: Option<u32>, tab: &str) -> String {
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i as usize];
            let left = print(arena, n.l, &format!("{tab}  "));
            let right = print(arena, n.r, &format!("{tab}  "));
            format!(
                "Node[{i}] {} {{ {:?} }}\n{tab}L={left}\n{tab}R={right}",
                n.c, n.k
            )
        }
    }
}
