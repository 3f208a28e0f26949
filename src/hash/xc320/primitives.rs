//! Word primitives (C1): 64-bit rotation and little-endian load/store.
//!
//! XC320 parses and serializes every word little-endian regardless of host
//! byte order; callers never rely on native byte order.

#[inline(always)]
pub(crate) const fn rotl(x: u64, n: u32) -> u64 {
    x.rotate_left(n)
}

#[inline(always)]
pub(crate) const fn rotr(x: u64, n: u32) -> u64 {
    x.rotate_right(n)
}

/// Parses sixteen little-endian 64-bit words from a 128-byte block.
pub(crate) fn bytes_to_block(block: &[u8; 128]) -> [u64; 16] {
    let mut words = [0u64; 16];
    for (word, chunk) in words.iter_mut().zip(block.chunks_exact(8)) {
        *word = u64::from_le_bytes(chunk.try_into().unwrap());
    }
    words
}

/// Serializes five 64-bit words as 40 little-endian bytes.
pub(crate) fn words_to_bytes(state: &[u64; 5]) -> [u8; 40] {
    let mut out = [0u8; 40];
    for (chunk, word) in out.chunks_exact_mut(8).zip(state.iter()) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
    out
}

/// Parses 40 little-endian bytes back into five 64-bit words (used only by
/// the single-shot wrapper, which re-reads the streaming digest to apply its
/// extra mixing passes).
pub(crate) fn bytes_to_words(bytes: &[u8; 40]) -> [u64; 5] {
    let mut words = [0u64; 5];
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(8)) {
        *word = u64::from_le_bytes(chunk.try_into().unwrap());
    }
    words
}
