//! # Skipgrid
//!
//! A deterministic skip list: an ordered associative container with O(log n)
//! expected-time search and insertion whose internal shape is a pure function
//! of the inserted key sequence.
//!
//! ## Core idea
//! A classic skip list promotes a key to higher layers by flipping a random
//! coin. Here the coin is deterministic: the key's bytes are XOR-folded into
//! a single byte, and flip *i* reads bit `i % 8` of that byte. The same keys
//! inserted in the same order always produce the same grid of layers, the
//! same node heights, and the same traversal costs — the structure is
//! reproducible under test, and a size-tied height cap bounds even
//! pathological all-heads keys.
//!
//! ```
//! use skipgrid::SkipList;
//!
//! let mut list = SkipList::new();
//! assert!(list.insert(7u32, "seven"));
//! assert!(!list.insert(7, "again")); // duplicate: declined, not an error
//! assert_eq!(list.get(&7), Ok(&"seven"));
//! list.insert(3, "three");
//! assert_eq!(list.keys_in_order(), vec![3, 7]);
//! ```

pub mod coin;
pub mod error;
pub mod skiplist;

// Public re-exports for the top-level API
pub use coin::FoldKey;
pub use error::{Error, Result};
pub use skiplist::SkipList;
