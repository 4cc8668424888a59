/*
 * Copyright (C) 2023-2026 Ligero, Inc.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! Error type shared by every fallible operation of the crate

use thiserror::Error;

/// Errors reported by hashing and digest parsing
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The message bit length does not fit in the 64-bit length field
    #[error("message of {byte_len} bytes exceeds the 2^64-1 bit length limit")]
    LengthOverflow {
        /// Total message length in bytes that was requested
        byte_len: u128,
    },

    /// `update` or `finalize` was called on a hasher that already finalized
    #[error("hasher already finalized; call reset() before reuse")]
    UseAfterFinalize,

    /// Digest text is not valid hexadecimal
    #[error("invalid digest encoding: {0}")]
    InvalidDigest(#[from] hex::FromHexError),

    /// Digest text decodes to the wrong number of bytes
    #[error("digest must be 32 bytes, got {0}")]
    InvalidDigestLength(usize),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let err = Error::LengthOverflow { byte_len: 1 << 61 };
        assert_eq!(
            err.to_string(),
            "message of 2305843009213693952 bytes exceeds the 2^64-1 bit length limit"
        );
        assert!(Error::UseAfterFinalize.to_string().contains("finalized"));
        assert_eq!(Error::InvalidDigestLength(31).to_string(), "digest must be 32 bytes, got 31");
    }

    #[test]
    fn hex_errors_convert() {
        let err: Error = hex::FromHexError::OddLength.into();
        assert!(matches!(err, Error::InvalidDigest(hex::FromHexError::OddLength)));
    }
}
