use crate::types::Node;

use super::{get_l, get_p, get_r, set_l, set_p, set_r};

/// Frees arena slot `idx`, which must already be detached from the tree.
///
/// The last node of the arena moves into the freed slot, and its parent and
/// children are repointed at the new index. Returns the removed node and the
/// (possibly renumbered) root.
pub fn swap_remove<N: Node>(arena: &mut Vec<N>, root: Option<u32>, idx: u32) -> (N, Option<u32>) {
    let last = (arena.len() - 1) as u32;
    let removed = arena.swap_remove(idx as usize);
    if idx == last {
        return (removed, root);
    }

    // `last` now lives at `idx`.
    if let Some(p) = get_p(arena, idx) {
        if get_l(arena, p) == Some(last) {
            set_l(arena, p, Some(idx));
        } else {
            set_r(arena, p, Some(idx));
        }
    }
    if let Some(l) = get_l(arena, idx) {
        set_p(arena, l, Some(idx));
    }
    if let Some(r) = get_r(arena, idx) {
        set_p(arena, r, Some(idx));
    }

    let root = if root == Some(last) { Some(idx) } else { root };
    (removed, root)
}
