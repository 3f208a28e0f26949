//! Non-linear primitives (C2).
//!
//! `gamma_mix` is the only one of these the compressor graph actually calls
//! (inside the BIG-box fold, §4.6 step 3); the per-process `sigma_transform`
//! and `P1..P10` functions the contract documents are an algebraic
//! decomposition of the LITTLE-box kernel, not a second call path — the
//! kernel in [`super::littlebox`] reproduces their combined effect directly,
//! as the contract explicitly permits.

use super::primitives::{rotl, rotr};

const K1: u64 = 0x8000000080008009;
const K2: u64 = 0x8000000000008081;

/// `gamma_mix(x, y, z, k)` — §4.2.
#[inline]
pub(crate) fn gamma_mix(x: u64, y: u64, z: u64, k: u64) -> u64 {
    let mut r = x ^ y ^ z;
    r = r.wrapping_add(rotl(x, 13) ^ rotr(y, 7) ^ rotl(z, 29));
    r ^= (x & y) | (z & !x);
    r = r.wrapping_add(k);
    r = rotr(r, 17) ^ rotl(r, 23);
    r ^= rotl(r, 19) | rotr(r, 45);
    r = r.wrapping_add(x.wrapping_mul(K1) ^ y.wrapping_mul(K2));
    r
}
