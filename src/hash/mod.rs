//! Hash algorithms exposed by the crate.
//!
//! Provides XC320, a 320-bit ARX hash function, with a pure-Rust
//! implementation of its streaming and single-shot digest contracts.

pub mod xc320;

/// Re-export of the streaming digest, single-shot digest, equality check,
/// and streaming context type.
pub use xc320::{
    digest as xc320_digest, digests_equal, single_shot as xc320_single_shot, Context as Xc320Context,
};
