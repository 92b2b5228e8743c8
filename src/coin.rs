//! The promotion oracle: a deterministic coin.
//!
//! Layer promotion is decided by a pure function of the key's bit pattern
//! and its promotion count, not by a random number generator. The key is
//! XOR-folded down to a single byte, and flip `i` reads bit `i % 8` of that
//! byte. A key's heads/tails sequence is therefore fixed for its lifetime
//! and periodic with period at most 8.
//!
//! Worked example: key `5u32` folds to `0b0000_0101`. Flip 0 reads bit 0
//! (set — heads, promote), flip 1 reads bit 1 (clear — tails, stop). So 5
//! always ends up occupying exactly two layers. Key `255u32` folds to `0xFF`
//! and answers heads at every index; only the insert-time height cap stops
//! its climb.

/// Reduces a key to the single byte that drives its coin flips.
///
/// Integer keys XOR the four bytes of their 32-bit form (wider integers fold
/// their low 32 bits). Sequence keys XOR every constituent byte; an empty
/// sequence folds to 0 and never promotes.
pub trait FoldKey {
    /// XOR fold of this key's byte representation.
    fn fold_byte(&self) -> u8;
}

macro_rules! impl_fold_key_for_int {
    ($($t:ty),* $(,)?) => {$(
        impl FoldKey for $t {
            fn fold_byte(&self) -> u8 {
                let [a, b, c, d] = (*self as u32).to_le_bytes();
                a ^ b ^ c ^ d
            }
        }
    )*};
}

impl_fold_key_for_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl FoldKey for [u8] {
    fn fold_byte(&self) -> u8 {
        self.iter().fold(0, |acc, b| acc ^ b)
    }
}

impl FoldKey for str {
    fn fold_byte(&self) -> u8 {
        self.as_bytes().fold_byte()
    }
}

impl FoldKey for String {
    fn fold_byte(&self) -> u8 {
        self.as_str().fold_byte()
    }
}

impl FoldKey for Vec<u8> {
    fn fold_byte(&self) -> u8 {
        self.as_slice().fold_byte()
    }
}

/// Deterministic coin flip for the given key and promotion index.
///
/// Returns true ("heads") iff bit `flips % 8` of the key's folded byte is
/// set. Same `(key, flips)` pair, same answer, always.
pub fn flip_coin<K: FoldKey + ?Sized>(key: &K, flips: usize) -> bool {
    key.fold_byte() & (1u8 << (flips % 8)) != 0
}
