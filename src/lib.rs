//! SHA-256 (FIPS 180-4) in plain Rust
//!
//! This crate computes SHA-256 digests either in one shot or incrementally.
//!
//! ## Modules
//!
//! - [`sha2`] - [`hash`] and the incremental [`Hasher`]
//! - [`padding`] - message padding and the bit-length field
//! - [`block`] - splitting a padded message into 512-bit blocks
//! - [`schedule`] - 64-word message schedule expansion
//! - [`compress`] - the 64-round compression function and [`HashState`]
//! - [`round`] - Ch, Maj and the Σ/σ functions
//! - [`constants`] - round constants, initial hash value and sizes
//! - [`digest`] - the [`Digest`] output type
//! - [`error`] - the crate [`Error`]
//!
//! ```
//! let digest = sha256ref::hash(b"abc")?;
//! assert_eq!(
//!     digest.to_string(),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! # Ok::<(), sha256ref::Error>(())
//! ```

#![deny(missing_docs)]

pub mod block;
pub mod compress;
pub mod constants;
pub mod digest;
pub mod error;
pub mod padding;
pub mod round;
pub mod schedule;
pub mod sha2;

// Re-export core types and functions for convenience
pub use compress::HashState;
pub use digest::Digest;
pub use error::{Error, Result};
pub use sha2::{hash, Hasher, Phase};
