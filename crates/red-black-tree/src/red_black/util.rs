use std::cmp::Ordering;

use log::{debug, trace};

use crate::error::InvariantViolation;
use crate::types::Node;
use crate::util::{
    first, get_l, get_p, get_r, next, replace_child, set_l, set_p, set_r, size, swap_remove,
};

use super::types::{Color, RbNode};

#[path = "util/print.rs"]
mod print_impl;

pub use print_impl::print;

/// Side of a parent a child hangs on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Dir {
    Left,
    Right,
}

impl Dir {
    fn opposite(self) -> Dir {
        match self {
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }
}

#[inline]
fn child<K>(arena: &[RbNode<K>], i: u32, dir: Dir) -> Option<u32> {
    match dir {
        Dir::Left => get_l(arena, i),
        Dir::Right => get_r(arena, i),
    }
}

#[inline]
fn set_child<K>(arena: &mut [RbNode<K>], i: u32, dir: Dir, v: Option<u32>) {
    match dir {
        Dir::Left => set_l(arena, i, v),
        Dir::Right => set_r(arena, i, v),
    }
}

#[inline]
fn side_of<K>(arena: &[RbNode<K>], p: u32, i: Option<u32>) -> Dir {
    if get_l(arena, p) == i {
        Dir::Left
    } else {
        Dir::Right
    }
}

/// Color of a link; the sentinel is black.
#[inline]
pub fn color_of<K>(arena: &[RbNode<K>], i: Option<u32>) -> Color {
    i.map_or(Color::Black, |i| arena[i as usize].c)
}

#[inline]
fn set_color<K>(arena: &mut [RbNode<K>], i: u32, c: Color) {
    arena[i as usize].c = c;
}

/// Rotates the subtree at `x` so that `x` moves down to side `dir` and its
/// child on the opposite side takes its place. Returns the new root.
fn rotate<K>(arena: &mut [RbNode<K>], root: Option<u32>, x: u32, dir: Dir) -> Option<u32> {
    let Some(y) = child(arena, x, dir.opposite()) else {
        debug_assert!(false, "rotation pivot {x} has no {:?} child", dir.opposite());
        return root;
    };
    trace!("rotate {dir:?} at node {x}, node {y} rises");

    let inner = child(arena, y, dir);
    set_child(arena, x, dir.opposite(), inner);
    if let Some(inner) = inner {
        set_p(arena, inner, Some(x));
    }

    let xp = get_p(arena, x);
    set_p(arena, y, xp);
    let root = replace_child(arena, root, xp, x, Some(y));

    set_child(arena, y, dir, Some(x));
    set_p(arena, x, Some(y));
    root
}

/// Inserts `key`, keeping keys unique.
///
/// Returns whether a node was created, the index of the node holding `key`,
/// and the new root.
pub fn insert<K: Ord>(
    arena: &mut Vec<RbNode<K>>,
    root: Option<u32>,
    key: K,
) -> (bool, u32, Option<u32>) {
    let mut slot: Option<(u32, Dir)> = None;
    let mut curr = root;
    while let Some(i) = curr {
        let dir = match key.cmp(&arena[i as usize].k) {
            Ordering::Less => Dir::Left,
            Ordering::Equal => return (false, i, root),
            Ordering::Greater => Dir::Right,
        };
        slot = Some((i, dir));
        curr = child(arena, i, dir);
    }

    let n = arena.len() as u32;
    let mut node = RbNode::new(key);
    node.p = slot.map(|(p, _)| p);
    arena.push(node);

    let root = match slot {
        None => Some(n),
        Some((p, dir)) => {
            set_child(arena, p, dir, Some(n));
            root
        }
    };
    (true, n, insert_fixup(arena, root, n))
}

/// Restores the red-black properties after `n` was linked in as a red leaf.
fn insert_fixup<K>(arena: &mut [RbNode<K>], mut root: Option<u32>, mut n: u32) -> Option<u32> {
    while let Some(mut p) = get_p(arena, n) {
        if color_of(arena, Some(p)) == Color::Black {
            break;
        }
        // A red parent is never the root.
        let Some(g) = get_p(arena, p) else {
            break;
        };
        let p_dir = side_of(arena, g, Some(p));
        let u = child(arena, g, p_dir.opposite());

        if color_of(arena, u) == Color::Red {
            debug!("insert fixup: red uncle, recolor at node {g}");
            set_color(arena, p, Color::Black);
            if let Some(u) = u {
                set_color(arena, u, Color::Black);
            }
            set_color(arena, g, Color::Red);
            n = g;
            continue;
        }

        if child(arena, p, p_dir.opposite()) == Some(n) {
            debug!("insert fixup: inner grandchild, double rotation at node {g}");
            root = rotate(arena, root, p, p_dir);
            n = p;
            p = match get_p(arena, n) {
                Some(p) => p,
                None => break,
            };
        } else {
            debug!("insert fixup: outer grandchild, single rotation at node {g}");
        }
        set_color(arena, p, Color::Black);
        set_color(arena, g, Color::Red);
        root = rotate(arena, root, g, p_dir.opposite());
        break;
    }

    if let Some(r) = root {
        set_color(arena, r, Color::Black);
    }
    root
}

fn swap_keys<K>(arena: &mut [RbNode<K>], a: u32, b: u32) {
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    let (left, right) = arena.split_at_mut(hi as usize);
    std::mem::swap(&mut left[lo as usize].k, &mut right[0].k);
}

/// Removes the node at `z` and frees its arena slot.
///
/// When `z` has two children the successor's key is moved into `z` and the
/// successor is spliced out instead. Returns the removed key and the new root.
/// Indices of other nodes may change: the last arena node fills the freed slot.
pub fn remove<K>(arena: &mut Vec<RbNode<K>>, root: Option<u32>, z: u32) -> (K, Option<u32>) {
    let y = match (get_l(arena, z), get_r(arena, z)) {
        (Some(_), Some(r)) => {
            let s = first(arena, Some(r)).unwrap_or(r);
            swap_keys(arena, z, s);
            s
        }
        _ => z,
    };

    // `y` has at most one child.
    let x = get_l(arena, y).or(get_r(arena, y));
    let xp = get_p(arena, y);
    if let Some(x) = x {
        set_p(arena, x, xp);
    }
    let mut root = replace_child(arena, root, xp, y, x);
    arena[y as usize].set_p(None);
    arena[y as usize].set_l(None);
    arena[y as usize].set_r(None);

    if color_of(arena, Some(y)) == Color::Black {
        root = remove_fixup(arena, root, x, xp);
    }

    let (node, root) = swap_remove(arena, root, y);
    (node.k, root)
}

/// Pushes the extra black carried by `x` (child of `xp`) up the tree until a
/// red node absorbs it, a rotation resolves it, or it reaches the root.
fn remove_fixup<K>(
    arena: &mut [RbNode<K>],
    mut root: Option<u32>,
    mut x: Option<u32>,
    mut xp: Option<u32>,
) -> Option<u32> {
    while x != root && color_of(arena, x) == Color::Black {
        let Some(p) = xp else {
            break;
        };
        let x_dir = side_of(arena, p, x);
        let s_dir = x_dir.opposite();
        let mut s = child(arena, p, s_dir);

        if color_of(arena, s) == Color::Red {
            debug!("remove fixup: red sibling, rotate at node {p}");
            if let Some(s) = s {
                set_color(arena, s, Color::Black);
            }
            set_color(arena, p, Color::Red);
            root = rotate(arena, root, p, x_dir);
            s = child(arena, p, s_dir);
        }

        let Some(mut sv) = s else {
            // A doubly black node always has a real sibling.
            debug_assert!(false, "doubly black node under {p} has no sibling");
            x = Some(p);
            xp = get_p(arena, p);
            continue;
        };

        let near = child(arena, sv, x_dir);
        let far = child(arena, sv, s_dir);
        if color_of(arena, near) == Color::Black && color_of(arena, far) == Color::Black {
            debug!("remove fixup: black sibling with black children, move up from node {p}");
            set_color(arena, sv, Color::Red);
            x = Some(p);
            xp = get_p(arena, p);
            continue;
        }

        if color_of(arena, far) == Color::Black {
            if let Some(near) = near {
                debug!("remove fixup: red near nephew, rotate at sibling {sv}");
                set_color(arena, near, Color::Black);
                set_color(arena, sv, Color::Red);
                root = rotate(arena, root, sv, s_dir);
                sv = near;
            }
        }

        debug!("remove fixup: red far nephew, rotate at node {p}");
        set_color(arena, sv, color_of(arena, Some(p)));
        set_color(arena, p, Color::Black);
        if let Some(far) = child(arena, sv, s_dir) {
            set_color(arena, far, Color::Black);
        }
        root = rotate(arena, root, p, x_dir);
        x = root;
        break;
    }

    if let Some(x) = x {
        set_color(arena, x, Color::Black);
    }
    root
}

/// Checks every red-black and search-tree property of the tree at `root`.
pub fn assert_red_black_tree<K: Ord>(
    arena: &[RbNode<K>],
    root: Option<u32>,
) -> Result<(), InvariantViolation> {
    let Some(root) = root else {
        return if arena.is_empty() {
            Ok(())
        } else {
            Err(InvariantViolation::SizeMismatch {
                reachable: 0,
                stored: arena.len(),
            })
        };
    };

    if get_p(arena, root).is_some() {
        return Err(InvariantViolation::RootHasParent);
    }
    if arena[root as usize].c != Color::Black {
        return Err(InvariantViolation::RedRoot);
    }

    fn black_height<K>(
        arena: &[RbNode<K>],
        node: Option<u32>,
    ) -> Result<usize, InvariantViolation> {
        let Some(node) = node else {
            return Ok(0);
        };

        let l = get_l(arena, node);
        let r = get_r(arena, node);
        for c in [l, r].into_iter().flatten() {
            if get_p(arena, c) != Some(node) {
                return Err(InvariantViolation::BrokenParentLink { node: c });
            }
        }

        if arena[node as usize].c == Color::Red
            && (color_of(arena, l) == Color::Red || color_of(arena, r) == Color::Red)
        {
            return Err(InvariantViolation::RedRedEdge { node });
        }

        let left = black_height(arena, l)?;
        let right = black_height(arena, r)?;
        if left != right {
            return Err(InvariantViolation::BlackHeightMismatch { node, left, right });
        }

        Ok(left + usize::from(arena[node as usize].c == Color::Black))
    }

    black_height(arena, Some(root))?;

    let mut curr = first(arena, Some(root));
    let mut prev: Option<u32> = None;
    while let Some(i) = curr {
        if let Some(prev) = prev {
            if arena[prev as usize].k >= arena[i as usize].k {
                return Err(InvariantViolation::OrderViolated { node: i });
            }
        }
        prev = Some(i);
        curr = next(arena, i);
    }

    let reachable = size(arena, Some(root));
    if reachable != arena.len() {
        return Err(InvariantViolation::SizeMismatch {
            reachable,
            stored: arena.len(),
        });
    }

    Ok(())
}
