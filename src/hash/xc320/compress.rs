//! Block compressor (C3): folds one 128-byte block into the 5-word state.

use super::primitives::rotl;

/// Compresses one already-parsed 16-word block into `h`.
///
/// Only `block[0..11]` is read here. Words `block[11..15]` deliberately do
/// not participate in this step — they are consumed later, via the BIG-box
/// stages' own derivation from `h`, not here. This is part of the fixed
/// contract, not an omission to fix.
pub(crate) fn compress(h: &mut [u64; 5], block: &[u64; 16]) {
    for i in 0..5 {
        let b = block[i];
        let c = block[i + 5];
        let d = block[i + 10];

        let mut a = h[i];
        a = rotl(a.wrapping_add(b ^ 0x6A09E667BB67AE85), 13);
        a = rotl(a ^ c.wrapping_add(0x3C6EF372A54FF53A), 29);
        a = rotl(a.wrapping_add(d ^ 0x510E527F9B05688C), 37);
        a ^= h[(i + 1) % 5];
        a = rotl(a.wrapping_add(h[(i + 4) % 5]), 17);
        a ^= a >> 32;
        a ^= a << 21;
        a = a.wrapping_mul(0x1F83D9AB5BE0CD19);
        a ^= a >> 29;
        a ^= a << 17;

        h[i] = a;
    }
}
