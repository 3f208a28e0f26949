//! LITTLE-box executor (C5): the four-wide ARX kernel that mixes a batch of
//! up to four 10-word lanes.
//!
//! The batch is represented as a plain `[u64; 4]` "vector" throughout. Every
//! caller in this crate (see [`super::bigbox`]) only ever builds a batch of
//! one real lane padded with three zero lanes, and reads back only that
//! real lane's output — the legal batch shape spec.md §4.5 calls out
//! explicitly ("a batch of size one is legal; it maps to a four-wide batch
//! with three zero lanes discarded"). [`run_single`] specializes the
//! four-wide kernel to exactly that shape instead of building and
//! discarding three extra lanes' worth of arithmetic on every call.

use super::primitives::{rotl, rotr};
use super::tables::rc;

type Vec4 = [u64; 4];

/// `permute(v, pattern)`: destination lane `d` takes `v[(pattern >> 2*d) & 3]`.
#[inline]
fn permute(v: Vec4, pattern: u8) -> Vec4 {
    let mut out = [0u64; 4];
    for d in 0..4 {
        out[d] = v[((pattern >> (2 * d)) & 3) as usize];
    }
    out
}

#[inline]
fn vxor(a: Vec4, b: Vec4) -> Vec4 {
    [a[0] ^ b[0], a[1] ^ b[1], a[2] ^ b[2], a[3] ^ b[3]]
}

#[inline]
fn vadd(a: Vec4, b: Vec4) -> Vec4 {
    [
        a[0].wrapping_add(b[0]),
        a[1].wrapping_add(b[1]),
        a[2].wrapping_add(b[2]),
        a[3].wrapping_add(b[3]),
    ]
}

#[inline]
fn vrotl(v: Vec4, n: u32) -> Vec4 {
    [rotl(v[0], n), rotl(v[1], n), rotl(v[2], n), rotl(v[3], n)]
}

#[inline]
fn vrotr(v: Vec4, n: u32) -> Vec4 {
    [rotr(v[0], n), rotr(v[1], n), rotr(v[2], n), rotr(v[3], n)]
}

#[inline]
fn vmul(v: Vec4, k: u64) -> Vec4 {
    [
        v[0].wrapping_mul(k),
        v[1].wrapping_mul(k),
        v[2].wrapping_mul(k),
        v[3].wrapping_mul(k),
    ]
}

/// `MIX_LANES(V)` — cross-lane permutation-and-XOR diffusion step.
#[inline]
fn mix_lanes(v: Vec4) -> Vec4 {
    let p0 = permute(v, 0x4E);
    let p1 = permute(p0, 0xB1);
    let x = vxor(p0, p1);
    vxor(x, vrotl(x, 17))
}

/// `ARX(V, salt_v, rc, r1, r2)` — §4.5.
#[inline]
fn arx(v: Vec4, salt_v: Vec4, rc_v: Vec4, r1: u32, r2: u32) -> Vec4 {
    let v = vadd(v, salt_v);
    let v = vxor(v, rc_v);
    let v = vadd(v, vrotl(v, r1));
    let v = vxor(v, vrotr(v, r2));
    let v = mix_lanes(v);
    vmul(v, 0x800000000000808A)
}

/// `HXOR(V)` — horizontal reduction of a 4-lane vector to one word.
#[inline]
fn hxor(v: Vec4) -> u64 {
    let v = mix_lanes(v);
    let v = vxor(v, permute(v, 0x4E));
    let v = vxor(v, permute(v, 0xB1));

    let mut r = v[0] ^ v[1] ^ v[2] ^ v[3];
    r ^= r >> 31;
    r = r.wrapping_mul(0x88);
    r ^= r >> 29;
    r = r.wrapping_mul(0x8000000000008089);
    r ^= r >> 32;
    r = rotr(r, 17) ^ rotl(r, 43);
    r = r.wrapping_mul(0x8000000080008081);
    r ^= r >> 27;
    r
}

/// Runs the LITTLE-box kernel over a single live lane, salt word
/// `salt_word`, and round base `round_base`. This is a batch of size one
/// padded to the kernel's native four-wide width with three zero lanes
/// (§4.5) — the only BIG-box call shape this algorithm ever uses, since
/// each of the ten lanes in a stage is keyed by its own local salt and
/// round base and so can never share a batch with another real lane.
/// Slots `{2,3,6,7}` are copied through unchanged, matching the contract
/// that only the six "load slots" move.
pub(crate) fn run_single(lane: [u64; 10], salt_word: u64, round_base: u64) -> [u64; 10] {
    // Lane position 0 of the batch; positions 1..3 are the zero padding.
    // Only slots {0,1,4,5,8,9} of the real lane ever feed an ARX input, and
    // only V0/V1/V2 (not the "ℓ" siblings, which source lanes 2 and 3) feed
    // lane 0's destinations — so the "ℓ" half of the kernel, which exists
    // to produce the padding/tail lanes' outputs, is never evaluated here.
    let col = |word: u64| -> Vec4 { [word, 0, 0, 0] };

    let salt_v: Vec4 = [salt_word; 4];
    let rc0: Vec4 = [rc(round_base), rc(round_base + 1), rc(round_base + 2), rc(round_base + 3)];
    let rc1: Vec4 = [rc(round_base + 4), rc(round_base + 5), rc(round_base + 6), rc(round_base + 7)];
    let rc2: Vec4 = [rc(round_base + 8), rc(round_base + 9), rc(round_base + 10), rc(round_base + 11)];

    let v0 = mix_lanes(arx(col(lane[1]), salt_v, rc0, 7, 13));
    let v1 = mix_lanes(arx(col(lane[5]), salt_v, rc1, 11, 17));
    let v2 = mix_lanes(arx(col(lane[9]), salt_v, rc2, 19, 23));

    let mut out = lane;
    out[0] = v0[0];
    out[1] = v0[1];
    out[4] = v1[0];
    out[5] = v1[1];
    out[8] = v2[0];
    out[9] = hxor(vxor(vxor(permute(v0, 0x00), permute(v1, 0x00)), permute(v2, 0x00)));
    out
}
