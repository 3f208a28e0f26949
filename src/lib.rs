//! XC320 — a 320-bit ARX cryptographic hash function, core only.
//!
//! This crate implements the compression and absorption core of XC320: a
//! bit-exact, platform-portable construction covering block framing, the
//! non-linear mixing primitives, the hierarchical LITTLE-box/BIG-box mixing
//! stages, salt derivation, final output mixing, and the incremental
//! streaming contract (init / update / final).
//!
//! # What this crate is not
//!
//! The command-line digesting utility, a browser-facing demo, and runtime
//! CPU-feature back-end selection are external collaborators, not part of
//! this core — it fixes the algorithm and exposes one portable back-end
//! that any such front end can drive.
//!
//! # Design goals
//!
//! - No heap allocations in the hashing core
//! - Minimal and explicit APIs
//! - Bit-exact, endianness-independent output
//! - Total: every finite byte sequence has a defined digest; misuse of the
//!   streaming API (reusing a context after it has been finalized) fails
//!   loudly via `panic!` rather than silently producing a wrong digest
//!
//! # Example
//!
//! ```
//! use xc320::hash::xc320::{self, Context};
//!
//! let mut ctx = Context::new();
//! ctx.update(b"Hello, ");
//! ctx.update(b"World");
//! let streaming = ctx.finalize();
//!
//! let one_shot = xc320::digest(b"Hello, World");
//! assert_eq!(streaming, one_shot);
//!
//! // single_shot applies extra output mixing and is not equal to digest().
//! assert_ne!(xc320::single_shot(b"Hello, World"), one_shot);
//! ```

pub mod hash;
