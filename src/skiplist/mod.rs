//! The deterministic skip list itself.
//!
//! A grid of horizontally linked layers, each bounded by a head and a tail
//! sentinel, stacked from the bottom layer (all keys) up to a permanently
//! empty top lane. A key occupies a vertical column of nodes across the
//! layers it was promoted into; how far it climbs is decided by the
//! deterministic coin in [`crate::coin`], capped by a bound tied to the
//! list's size at insert time.

mod node;

pub mod iter;

use std::cmp::Ordering;

use crate::coin::{FoldKey, flip_coin};
use crate::error::{Error, Result};
use node::Node;

pub use iter::Iter;

/// A deterministic, ordered map.
///
/// Search, insertion, and neighbor queries run in O(log n) expected time;
/// ordered iteration is O(n). There is no removal — the container only
/// grows. Two lists fed the same key sequence are structurally identical,
/// down to every layer and link.
///
/// Keys must be totally ordered, cloneable (promoted copies on upper layers
/// store the key again), and foldable to the byte that drives promotion.
pub struct SkipList<K, V> {
    /// Arena holding every node of every layer, sentinels included.
    nodes: Vec<Node<K, V>>,
    bottom_head: usize,
    bottom_tail: usize,
    top_head: usize,
    top_tail: usize,
    /// Number of distinct keys.
    len: usize,
    /// Number of layers, counting the empty top lane. Never below 2.
    layers: usize,
}

impl<K, V> SkipList<K, V> {
    /// Create an empty list: a base layer and the empty fast lane above it.
    ///
    /// ```text
    /// S_1:  HEAD ───► TAIL
    /// S_0:  HEAD ───► TAIL
    /// ```
    pub fn new() -> Self {
        let mut nodes = Vec::with_capacity(4);
        nodes.push(Node::sentinel()); // 0: bottom head
        nodes.push(Node::sentinel()); // 1: bottom tail
        nodes.push(Node::sentinel()); // 2: top head
        nodes.push(Node::sentinel()); // 3: top tail
        let (bottom_head, bottom_tail, top_head, top_tail) = (0, 1, 2, 3);

        nodes[bottom_head].next = Some(bottom_tail);
        nodes[bottom_head].up = Some(top_head);
        nodes[bottom_tail].prev = Some(bottom_head);
        nodes[bottom_tail].up = Some(top_tail);

        nodes[top_head].next = Some(top_tail);
        nodes[top_head].down = Some(bottom_head);
        nodes[top_tail].prev = Some(top_head);
        nodes[top_tail].down = Some(bottom_tail);

        SkipList {
            nodes,
            bottom_head,
            bottom_tail,
            top_head,
            top_tail,
            len: 0,
            layers: 2,
        }
    }

    /// Number of distinct keys in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of layers, including the always-empty top lane. An empty list
    /// has exactly 2; layers are only ever added, never removed.
    pub fn num_layers(&self) -> usize {
        self.layers
    }

    /// Iterate over `(&key, &value)` pairs in ascending key order.
    ///
    /// Walks the bottom layer, which holds every key. The iterator is a
    /// snapshot-style walk of the current structure; call again after
    /// inserts to see new keys.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self)
    }

    /// Push a node into the arena and return its index.
    fn alloc(&mut self, node: Node<K, V>) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// Splice `id` into its layer immediately after `pos`.
    fn splice_after(&mut self, pos: usize, id: usize) {
        let next = self.nodes[pos].next.expect("splice target is never a tail sentinel");
        self.nodes[id].next = Some(next);
        self.nodes[id].prev = Some(pos);
        self.nodes[next].prev = Some(id);
        self.nodes[pos].next = Some(id);
    }

    /// Add a brand-new empty layer above the current top, keeping the fast
    /// lane invariant: the topmost layer never holds a data node.
    fn grow_top(&mut self) {
        let head = self.alloc(Node::sentinel());
        let tail = self.alloc(Node::sentinel());

        self.nodes[head].next = Some(tail);
        self.nodes[tail].prev = Some(head);

        self.nodes[head].down = Some(self.top_head);
        self.nodes[self.top_head].up = Some(head);
        self.nodes[tail].down = Some(self.top_tail);
        self.nodes[self.top_tail].up = Some(tail);

        self.top_head = head;
        self.top_tail = tail;
        self.layers += 1;
    }

    /// Walk left along a layer to the nearest column that continues one
    /// layer up, then climb. Head sentinels are vertically linked, so the
    /// walk always terminates at a node that can climb.
    fn climb_from(&self, mut pos: usize) -> usize {
        loop {
            if let Some(up) = self.nodes[pos].up {
                return up;
            }
            pos = self.nodes[pos]
                .prev
                .expect("head sentinel of an occupied layer links upward");
        }
    }

    /// Maximum layer count allowed while inserting into a list that held
    /// `len_before` keys.
    ///
    /// Flat 13 below 16 keys, then `3 * ceil(log2(n + 1)) + 1`. The jump at
    /// the boundary (13, then 16 at n = 16) is part of the contract and is
    /// pinned by the capacity tests. This is what stops an all-heads key
    /// like 255 from climbing forever.
    fn height_cap(len_before: usize) -> usize {
        if len_before < 16 {
            13
        } else {
            3 * ceil_log2(len_before + 1) + 1
        }
    }
}

impl<K, V> SkipList<K, V>
where
    K: Ord + Clone + FoldKey,
{
    /// Insert a key/value pair. Returns `false` without touching the
    /// structure if the key is already present.
    ///
    /// The new key always enters the bottom layer; it then climbs one layer
    /// per heads from [`flip_coin`], growing a fresh empty top lane whenever
    /// its column reaches the second-from-top layer, until the coin comes up
    /// tails or the layer count hits the size-tied cap.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        let mut pos = if self.is_empty() {
            self.bottom_head
        } else {
            let (found, pos) = self.locate(&key);
            if found {
                return false;
            }
            pos
        };

        let cap = Self::height_cap(self.len);

        let bottom = self.alloc(Node::entry(key.clone(), value));
        self.splice_after(pos, bottom);

        let mut flips = 0;
        let mut below = bottom;
        while flip_coin(&key, flips) && self.layers < cap {
            // Promotion is about to reach the second-from-top layer: open a
            // new empty lane above before placing the copy.
            if flips + 1 >= self.layers - 1 {
                self.grow_top();
            }

            pos = self.climb_from(pos);

            let copy = self.alloc(Node::promoted(key.clone()));
            self.splice_after(pos, copy);
            self.nodes[copy].down = Some(below);
            self.nodes[below].up = Some(copy);
            below = copy;

            flips += 1;
            self.nodes[bottom].height = flips + 1;
        }

        self.len += 1;
        true
    }

    /// Shared value reference for `key`.
    pub fn get(&self, key: &K) -> Result<&V> {
        let (found, pos) = self.locate(key);
        if !found {
            return Err(Error::NotFound);
        }
        Ok(self.nodes[pos]
            .value
            .as_ref()
            .expect("bottom-layer data nodes store the value"))
    }

    /// Mutable value reference for `key`.
    pub fn get_mut(&mut self, key: &K) -> Result<&mut V> {
        let (found, pos) = self.locate(key);
        if !found {
            return Err(Error::NotFound);
        }
        Ok(self.nodes[pos]
            .value
            .as_mut()
            .expect("bottom-layer data nodes store the value"))
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &K) -> bool {
        self.locate(key).0
    }

    /// How many layers `key` occupies, counting from the bottom layer
    /// (a never-promoted key has height 1).
    pub fn height(&self, key: &K) -> Result<usize> {
        let (found, pos) = self.locate(key);
        if !found {
            return Err(Error::NotFound);
        }
        Ok(self.nodes[pos].height)
    }

    /// The smallest key strictly greater than `key`.
    ///
    /// `NotFound` if `key` is absent; `NoSuchNeighbor` if `key` is the
    /// largest key in the list.
    pub fn next_key(&self, key: &K) -> Result<&K> {
        let (found, pos) = self.locate(key);
        if !found {
            return Err(Error::NotFound);
        }
        let next = self.nodes[pos].next.ok_or(Error::NoSuchNeighbor)?;
        self.nodes[next].key.as_ref().ok_or(Error::NoSuchNeighbor)
    }

    /// The largest key strictly smaller than `key`.
    ///
    /// `NotFound` if `key` is absent; `NoSuchNeighbor` if `key` is the
    /// smallest key in the list.
    pub fn previous_key(&self, key: &K) -> Result<&K> {
        let (found, pos) = self.locate(key);
        if !found {
            return Err(Error::NotFound);
        }
        let prev = self.nodes[pos].prev.ok_or(Error::NoSuchNeighbor)?;
        self.nodes[prev].key.as_ref().ok_or(Error::NoSuchNeighbor)
    }

    /// Whether `key` is the smallest key in the list.
    ///
    /// Fails with `NotFound` if `key` is absent, honoring the documented
    /// contract rather than answering `false` for keys that are not there.
    pub fn is_smallest_key(&self, key: &K) -> Result<bool> {
        let (found, pos) = self.locate(key);
        if !found {
            return Err(Error::NotFound);
        }
        Ok(self.nodes[self.bottom_head].next == Some(pos))
    }

    /// Whether `key` is the largest key in the list.
    ///
    /// Fails with `NotFound` if `key` is absent, like [`Self::is_smallest_key`].
    pub fn is_largest_key(&self, key: &K) -> Result<bool> {
        let (found, pos) = self.locate(key);
        if !found {
            return Err(Error::NotFound);
        }
        Ok(self.nodes[self.bottom_tail].prev == Some(pos))
    }

    /// All keys in ascending order, freshly collected from the bottom layer.
    pub fn keys_in_order(&self) -> Vec<K> {
        self.iter().map(|(k, _)| k.clone()).collect()
    }

    /// Classic skip-list descent from the top-layer head sentinel.
    ///
    /// Returns `(true, node)` with the bottom-layer node holding `key`, or
    /// `(false, node)` with the bottom-layer node immediately preceding
    /// where `key` would go (the bottom head sentinel if `key` would be
    /// smallest).
    ///
    /// Move right while the successor's key is still smaller; drop down on
    /// an exact-or-overshoot successor or when the lane runs out; on a key
    /// match, descend the column to its bottom copy.
    fn locate(&self, key: &K) -> (bool, usize) {
        let mut cur = self.top_head;
        loop {
            let step_right = match self.nodes[cur].next {
                Some(next) => match &self.nodes[next].key {
                    Some(k) => match k.cmp(key) {
                        Ordering::Less => Some(next),
                        Ordering::Equal => {
                            let mut found = next;
                            while let Some(down) = self.nodes[found].down {
                                found = down;
                            }
                            return (true, found);
                        }
                        Ordering::Greater => None,
                    },
                    // Tail sentinel: this lane is exhausted.
                    None => None,
                },
                None => None,
            };

            match step_right {
                Some(next) => cur = next,
                None => match self.nodes[cur].down {
                    Some(down) => cur = down,
                    None => return (false, cur),
                },
            }
        }
    }
}

impl<K, V> Default for SkipList<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// `ceil(log2(n))` for `n >= 1`, in exact integer arithmetic so the height
/// cap can never drift with float rounding at the boundary cases.
fn ceil_log2(n: usize) -> usize {
    debug_assert!(n >= 1);
    (usize::BITS - (n - 1).leading_zeros()) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ceil_log2_boundaries() {
        assert_eq!(ceil_log2(1), 0);
        assert_eq!(ceil_log2(2), 1);
        assert_eq!(ceil_log2(16), 4);
        assert_eq!(ceil_log2(17), 5);
        assert_eq!(ceil_log2(32), 5);
        assert_eq!(ceil_log2(33), 6);
    }

    #[test]
    fn height_cap_discontinuity_is_preserved() {
        assert_eq!(SkipList::<u32, u32>::height_cap(0), 13);
        assert_eq!(SkipList::<u32, u32>::height_cap(15), 13);
        // 3 * ceil(log2(17)) + 1 = 16 — not "smoothed" into the flat 13.
        assert_eq!(SkipList::<u32, u32>::height_cap(16), 16);
        assert_eq!(SkipList::<u32, u32>::height_cap(31), 16);
        assert_eq!(SkipList::<u32, u32>::height_cap(32), 19);
    }

    #[test]
    fn sentinel_grid_starts_with_two_layers() {
        let list: SkipList<u32, u32> = SkipList::new();
        assert_eq!(list.num_layers(), 2);
        assert!(list.nodes[list.bottom_head].key.is_none());
        assert_eq!(list.nodes[list.bottom_head].up, Some(list.top_head));
        assert_eq!(list.nodes[list.top_tail].down, Some(list.bottom_tail));
    }
}
