//! Ordered iteration over the bottom layer.
//!
//! The bottom layer is a sorted linked list containing every key, so
//! iteration just follows `next` links from the head sentinel's successor
//! until it hits the tail sentinel.

use super::SkipList;

/// Iterator over `(&K, &V)` pairs in ascending key order.
pub struct Iter<'a, K, V> {
    list: &'a SkipList<K, V>,
    cur: Option<usize>,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(super) fn new(list: &'a SkipList<K, V>) -> Self {
        Iter {
            list,
            cur: list.nodes[list.bottom_head].next,
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cur?;
        let node = &self.list.nodes[id];
        // The tail sentinel has no key and ends the walk.
        let key = node.key.as_ref()?;
        let value = node
            .value
            .as_ref()
            .expect("bottom-layer data nodes store the value");
        self.cur = node.next;
        Some((key, value))
    }
}

impl<'a, K, V> IntoIterator for &'a SkipList<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
