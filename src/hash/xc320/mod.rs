//! XC320 — a 320-bit ARX hash function.
//!
//! This module implements the compression and absorption core of XC320: a
//! bit-exact, platform-portable construction whose digest is identical on
//! every implementation, endianness, and vector width. It provides:
//! - the streaming [`Context`] (init/update/finalize/reset/wipe)
//! - [`single_shot`], a one-call digest with its own extra output mixing
//! - [`digests_equal`], plain (not constant-time) byte equality
//!
//! Out of scope here, as external collaborators: the command-line digesting
//! utility, the browser demo, and runtime CPU-feature back-end selection —
//! this module fixes the algorithm and ships one portable back-end.

mod bigbox;
mod compress;
mod finalize;
mod littlebox;
mod nonlinear;
mod primitives;
mod salt;
mod tables;

use primitives::{bytes_to_block, bytes_to_words, words_to_bytes};
use tables::rc;

/// XC320's fixed initial hash state, after the init-mix (§6).
fn initial_state() -> [u64; 5] {
    let mut h: [u64; 5] = [
        0xBB67AE854A7D9E31,
        0x5BE0CD19B7F3A69C,
        0x6A09E667F2B5C8D3,
        0x3C6EF372D8B4F1A6,
        0x510E527F4D8C3A92,
    ];
    h[0] ^= 0x9E3779B97F4A7C15;
    h[1] ^= 0xBF58476D1CE4E5B9;
    h[2] ^= 0x94D049BB133111EB;

    for i in 0..5 {
        h[i] ^= rc((i as u64) * 10);
        h[i] = primitives::rotl(h[i], 17 + (i as u32) * 7);
        h[i] = h[i].wrapping_mul(0x9E3779B97F4A7C15);
        h[i] ^= h[(i + 2) % 5];
    }
    h
}

/// A streaming XC320 hashing context.
///
/// Owns the 5-word hash state, a 128-byte carry buffer, a buffer-length
/// counter, and a running bit counter — a flat, ~1.2 KiB aggregate with no
/// internal references, stack-allocatable, and safe to move (§3).
///
/// A context is created with [`Context::new`], fed any number of times with
/// [`Context::update`], and consumed exactly once by [`Context::finalize`].
/// Calling `update` or `finalize` again afterward is a programming error and
/// panics rather than silently returning a corrupt digest (§7).
pub struct Context {
    h: [u64; 5],
    buf: [u8; 128],
    buf_len: usize,
    bit_count: u64,
    finalized: bool,
}

impl Context {
    /// Creates a new context with the fixed initial state (§4.8 `init`).
    pub fn new() -> Self {
        Context {
            h: initial_state(),
            buf: [0u8; 128],
            buf_len: 0,
            bit_count: 0,
            finalized: false,
        }
    }

    /// Feeds `data` into the running hash, compressing every full 128-byte
    /// block as soon as it is assembled and carrying any remainder (§4.8
    /// `update`).
    ///
    /// # Panics
    /// Panics if this context has already been consumed by [`Context::finalize`].
    pub fn update(&mut self, data: &[u8]) {
        assert!(!self.finalized, "XC320 Context::update called after finalize");

        self.bit_count = self.bit_count.wrapping_add((data.len() as u64).wrapping_mul(8));

        let mut data = data;

        if self.buf_len > 0 {
            let want = 128 - self.buf_len;
            let take = want.min(data.len());
            self.buf[self.buf_len..self.buf_len + take].copy_from_slice(&data[..take]);
            self.buf_len += take;
            data = &data[take..];

            if self.buf_len == 128 {
                let block = bytes_to_block(&self.buf);
                compress::compress(&mut self.h, &block);
                self.buf_len = 0;
            } else {
                return;
            }
        }

        while data.len() >= 128 {
            let block: &[u8; 128] = data[..128].try_into().unwrap();
            compress::compress(&mut self.h, &bytes_to_block(block));
            data = &data[128..];
        }

        if !data.is_empty() {
            self.buf[..data.len()].copy_from_slice(data);
            self.buf_len = data.len();
        }
    }

    /// Consumes the context and returns the 40-byte streaming digest (§4.8
    /// `final`). The context is wiped before returning.
    ///
    /// # Panics
    /// Panics if this context has already been consumed.
    pub fn finalize(mut self) -> [u8; 40] {
        assert!(!self.finalized, "XC320 Context::finalize called twice");
        self.finalized = true;

        let digest = finalize::finalize(&mut self.h, &self.buf[..self.buf_len]);
        self.wipe();
        digest
    }

    /// Resets the context to its freshly-initialized state, equivalent to
    /// building a new one in place (§4.8 `reset`).
    pub fn reset(&mut self) {
        self.h = initial_state();
        self.buf = [0u8; 128];
        self.buf_len = 0;
        self.bit_count = 0;
        self.finalized = false;
    }

    /// Overwrites all context storage with zeros (§4.8 `wipe`).
    pub fn wipe(&mut self) {
        self.h = [0u64; 5];
        self.buf = [0u8; 128];
        self.buf_len = 0;
        self.bit_count = 0;
        self.finalized = true;
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Context {
    fn drop(&mut self) {
        self.wipe();
    }
}

/// Computes the streaming digest of `data` in one call: `init`, one
/// `update`, `finalize`.
pub fn digest(data: &[u8]) -> [u8; 40] {
    let mut ctx = Context::new();
    ctx.update(data);
    ctx.finalize()
}

/// Computes the single-shot digest of `data`: the streaming digest (§4.7
/// steps 1–8), followed by three additional output-mixing passes applied to
/// the 40 digest bytes re-read as five 64-bit words (§4.7, §9). This
/// digest is **not**, in general, equal to [`digest`] on the same input —
/// that divergence is part of the fixed contract, not a bug to reconcile.
pub fn single_shot(data: &[u8]) -> [u8; 40] {
    let streaming = digest(data);
    let mut words = bytes_to_words(&streaming);

    for _ in 0..3 {
        for word in words.iter_mut() {
            *word = finalize::extra_mix(*word);
        }
        finalize::cross_word_round(&mut words);
    }

    words_to_bytes(&words)
}

/// Plain byte equality of two 40-byte digests. Not constant-time — the
/// reference does not specify that property for digest comparison (§6).
pub fn digests_equal(a: &[u8; 40], b: &[u8; 40]) -> bool {
    a == b
}
