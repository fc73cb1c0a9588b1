//! Streaming wyhash: deterministic 64-bit digests for chunked input.
//!
//! The digest of a byte sequence is identical whether it is hashed in one
//! call or fed incrementally in arbitrary-sized chunks:
//!
//! ```
//! use hashq::engine::hasher::Hasher;
//!
//! let mut hasher = Hasher::new(4);
//! hasher.update(b"abcdefghijklm").unwrap();
//! hasher.update(b"nopqrstuvwxyz").unwrap();
//! assert_eq!(hasher.finish(b"").unwrap(), "7a43afb61d7f5f40");
//! assert_eq!(Hasher::hash(b"abcdefghijklmnopqrstuvwxyz", 4), "7a43afb61d7f5f40");
//! ```
//!
//! Not cryptographically secure; intended for checksums, hash-table keys,
//! and content fingerprinting.

pub mod cmd;
pub mod domain;
pub mod engine;
pub mod util;

pub use engine::hasher::Hasher;
