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

//! Message padding (FIPS 180-4, section 5.1.1)
//!
//! The padded message is the original bytes, one `0x80` byte, the fewest
//! zero bytes that leave the length at 56 mod 64, then the original length
//! in bits as a 64-bit big-endian integer.

use crate::constants::{BLOCK_SIZE, LENGTH_FIELD_SIZE, PADDING_MARKER};
use crate::error::{Error, Result};

/// Length in bits of a `byte_len`-byte message, checked against the
/// 64-bit length field
pub fn bit_length(byte_len: u128) -> Result<u64> {
    byte_len
        .checked_mul(8)
        .and_then(|bits| u64::try_from(bits).ok())
        .ok_or_else(|| {
            log::debug!("rejecting message of {} bytes: bit length overflows u64", byte_len);
            Error::LengthOverflow { byte_len }
        })
}

/// Number of zero bytes between the marker and the length field
fn zero_fill(byte_len: usize) -> usize {
    let used = (byte_len % BLOCK_SIZE + 1) % BLOCK_SIZE;
    (BLOCK_SIZE - LENGTH_FIELD_SIZE + BLOCK_SIZE - used) % BLOCK_SIZE
}

/// Total padded length for a `byte_len`-byte message, `None` if it does
/// not fit in `usize`
pub fn padded_len(byte_len: usize) -> Option<usize> {
    byte_len
        .checked_add(1 + zero_fill(byte_len))?
        .checked_add(LENGTH_FIELD_SIZE)
}

/// Append the marker, zero fill and `bit_len` to `buf`.
///
/// `buf` holds the message (or the unprocessed tail of one, as long as the
/// bytes already consumed were whole blocks) and `bit_len` is the length of
/// the whole message.
pub fn append_padding(buf: &mut Vec<u8>, bit_len: u64) {
    let zeros = zero_fill(buf.len());
    buf.reserve(1 + zeros + LENGTH_FIELD_SIZE);
    buf.push(PADDING_MARKER);
    buf.resize(buf.len() + zeros, 0);
    buf.extend_from_slice(&bit_len.to_be_bytes());
}

/// Pad `message` into a whole number of blocks
pub fn pad(message: &[u8]) -> Result<Vec<u8>> {
    let bit_len = bit_length(message.len() as u128)?;
    let capacity = padded_len(message.len()).ok_or(Error::LengthOverflow {
        byte_len: message.len() as u128,
    })?;
    let mut padded = Vec::with_capacity(capacity);
    padded.extend_from_slice(message);
    append_padding(&mut padded, bit_len);
    Ok(padded)
}
