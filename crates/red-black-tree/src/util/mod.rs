//! Position utilities over arena-linked binary trees.
//!
//! These helpers know nothing about colors. They walk and relink `p`/`l`/`r`
//! indices through the [`Node`] trait and are shared by the red-black code
//! and its tests.

pub mod swap_remove;

use std::cmp::Ordering;

use crate::types::{KeyNode, Node};

pub use swap_remove::swap_remove;

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

/// Points whichever link of `parent` referenced `old` at `new`.
///
/// With no parent, `old` was the root and `new` is returned as the new root.
pub(crate) fn replace_child<N: Node>(
    arena: &mut [N],
    root: Option<u32>,
    parent: Option<u32>,
    old: u32,
    new: Option<u32>,
) -> Option<u32> {
    match parent {
        None => new,
        Some(p) => {
            if get_l(arena, p) == Some(old) {
                set_l(arena, p, new);
            } else {
                set_r(arena, p, new);
            }
            root
        }
    }
}

/// Leftmost node in the tree.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = get_l(arena, curr) {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node in the tree.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(r) = get_r(arena, curr) {
        curr = r;
    }
    Some(curr)
}

/// In-order successor.
pub fn next<N: Node>(arena: &[N], mut curr: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, curr) {
        return first(arena, Some(r));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// In-order predecessor.
pub fn prev<N: Node>(arena: &[N], mut curr: u32) -> Option<u32> {
    if let Some(l) = get_l(arena, curr) {
        return last(arena, Some(l));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_l(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// Pre-order successor within the subtree rooted at `top`: left child, then
/// right child, then the right child of the nearest ancestor entered from its
/// left side. The walk never climbs above `top`.
pub fn next_pre_order<N: Node>(arena: &[N], curr: u32, top: u32) -> Option<u32> {
    if let Some(l) = get_l(arena, curr) {
        return Some(l);
    }
    if let Some(r) = get_r(arena, curr) {
        return Some(r);
    }
    let mut child = curr;
    while child != top {
        let pi = get_p(arena, child)?;
        if get_l(arena, pi) == Some(child) {
            if let Some(r) = get_r(arena, pi) {
                return Some(r);
            }
        }
        child = pi;
    }
    None
}

/// Number of nodes under `root`.
pub fn size<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    let Some(top) = root else {
        return 0;
    };
    let mut count = 0;
    let mut curr = Some(top);
    while let Some(i) = curr {
        count += 1;
        curr = next_pre_order(arena, i, top);
    }
    count
}

/// Finds a node by key.
pub fn find<K, N>(arena: &[N], root: Option<u32>, key: &K) -> Option<u32>
where
    K: Ord,
    N: KeyNode<K>,
{
    let mut curr = root;
    while let Some(i) = curr {
        curr = match key.cmp(arena[i as usize].key()) {
            Ordering::Less => get_l(arena, i),
            Ordering::Equal => return Some(i),
            Ordering::Greater => get_r(arena, i),
        };
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Plain {
        p: Option<u32>,
        l: Option<u32>,
        r: Option<u32>,
        k: i32,
    }

    impl Node for Plain {
        fn p(&self) -> Option<u32> {
            self.p
        }
        fn l(&self) -> Option<u32> {
            self.l
        }
        fn r(&self) -> Option<u32> {
            self.r
        }
        fn set_p(&mut self, v: Option<u32>) {
            self.p = v;
        }
        fn set_l(&mut self, v: Option<u32>) {
            self.l = v;
        }
        fn set_r(&mut self, v: Option<u32>) {
            self.r = v;
        }
    }

    impl KeyNode<i32> for Plain {
        fn key(&self) -> &i32 {
            &self.k
        }
    }

    //        4(0)
    //       /    \
    //    2(1)    6(2)
    //    /  \       \
    //  1(3) 3(4)    7(5)
    fn sample() -> Vec<Plain> {
        let mut arena: Vec<Plain> = [4, 2, 6, 1, 3, 7]
            .into_iter()
            .map(|k| Plain {
                k,
                ..Default::default()
            })
            .collect();
        let link = |arena: &mut Vec<Plain>, p: u32, c: u32, left: bool| {
            if left {
                arena[p as usize].l = Some(c);
            } else {
                arena[p as usize].r = Some(c);
            }
            arena[c as usize].p = Some(p);
        };
        link(&mut arena, 0, 1, true);
        link(&mut arena, 0, 2, false);
        link(&mut arena, 1, 3, true);
        link(&mut arena, 1, 4, false);
        link(&mut arena, 2, 5, false);
        arena
    }

    #[test]
    fn in_order_walk_both_directions() {
        let arena = sample();
        let mut keys = Vec::new();
        let mut curr = first(&arena, Some(0));
        while let Some(i) = curr {
            keys.push(arena[i as usize].k);
            curr = next(&arena, i);
        }
        assert_eq!(keys, vec![1, 2, 3, 4, 6, 7]);

        let mut keys = Vec::new();
        let mut curr = last(&arena, Some(0));
        while let Some(i) = curr {
            keys.push(arena[i as usize].k);
            curr = prev(&arena, i);
        }
        assert_eq!(keys, vec![7, 6, 4, 3, 2, 1]);
    }

    #[test]
    fn pre_order_walk() {
        let arena = sample();
        let mut keys = Vec::new();
        let mut curr = Some(0);
        while let Some(i) = curr {
            keys.push(arena[i as usize].k);
            curr = next_pre_order(&arena, i, 0);
        }
        assert_eq!(keys, vec![4, 2, 1, 3, 6, 7]);
        assert_eq!(size(&arena, Some(0)), 6);
        assert_eq!(size(&arena, Some(2)), 2);
        assert_eq!(size(&arena, Some(1)), 3);
        assert_eq!(size::<Plain>(&arena, None), 0);
    }

    #[test]
    fn find_by_key() {
        let arena = sample();
        assert_eq!(find(&arena, Some(0), &3), Some(4));
        assert_eq!(find(&arena, Some(0), &7), Some(5));
        assert_eq!(find(&arena, Some(0), &5), None);
        assert_eq!(find::<i32, Plain>(&arena, None, &4), None);
    }
}
