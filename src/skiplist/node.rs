//! Arena node storage for the layer grid.
//!
//! Every node — sentinel or data, on every layer — lives in one `Vec` owned
//! by the list, and links between nodes are `Option<usize>` indices into
//! that arena. "No neighbor" is `None`, and dropping the list drops the
//! arena, every layer's sentinels included.

/// A single node in the grid: either a layer sentinel or a key's copy on
/// one layer.
///
/// ```text
/// S_2:  HEAD ─────────────────────────────────────► TAIL   (fast lane)
/// S_1:  HEAD ──────────► 20 ───────────► 50 ──────► TAIL
/// S_0:  HEAD ──► 10 ──► 20 ──► 35 ──► 50 ──► 60 ──► TAIL
/// ```
///
/// Horizontal links (`next`/`prev`) connect nodes on one layer; vertical
/// links (`up`/`down`) connect a key's copies on adjacent layers. Head
/// sentinels are vertically linked to each other, as are tails, so a
/// leftward walk on any layer always reaches a column that can climb.
pub(super) struct Node<K, V> {
    /// `None` marks a sentinel.
    pub key: Option<K>,
    /// Present only on bottom-layer data nodes; promoted copies carry the
    /// key alone.
    pub value: Option<V>,
    /// 1-based count of layers this key occupies. Authoritative only on the
    /// bottom-layer data node; 0 elsewhere.
    pub height: usize,
    pub next: Option<usize>,
    pub prev: Option<usize>,
    pub up: Option<usize>,
    pub down: Option<usize>,
}

impl<K, V> Node<K, V> {
    /// A head or tail marker for some layer. Holds no key or value.
    pub fn sentinel() -> Self {
        Node {
            key: None,
            value: None,
            height: 0,
            next: None,
            prev: None,
            up: None,
            down: None,
        }
    }

    /// A bottom-layer entry. Starts at height 1; the promotion loop updates
    /// the height as the column grows.
    pub fn entry(key: K, value: V) -> Self {
        Node {
            key: Some(key),
            value: Some(value),
            height: 1,
            next: None,
            prev: None,
            up: None,
            down: None,
        }
    }

    /// A promoted copy of a key for a non-bottom layer.
    pub fn promoted(key: K) -> Self {
        Node {
            key: Some(key),
            value: None,
            height: 0,
            next: None,
            prev: None,
            up: None,
            down: None,
        }
    }
}
