/*
 * Copyright (C) 2023-2025 Ligero, Inc.
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

//! SHA-256 hashing: one-shot [`hash`] and the incremental [`Hasher`]

use crate::block::{segment, Block};
use crate::compress::{process_block, HashState};
use crate::constants::BLOCK_SIZE;
use crate::digest::Digest;
use crate::error::{Error, Result};
use crate::padding::{append_padding, bit_length, pad};

/// Compute the SHA-256 digest of `message`
///
/// # Errors
/// [`Error::LengthOverflow`] if the message is 2^61 bytes or longer.
pub fn hash(message: &[u8]) -> Result<Digest> {
    let padded = pad(message)?;

    let mut state = HashState::initial();
    for block in segment(&padded) {
        process_block(&mut state, &block);
    }
    Ok(state.to_digest())
}

/// Lifecycle of a [`Hasher`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No block compressed yet
    Initialized,
    /// At least one block compressed
    Processing,
    /// Digest produced; only [`Hasher::reset`] is accepted
    Finalized,
}

/// Incremental SHA-256.
///
/// Input is buffered until a full 64-byte block is available, so `update`
/// may be called with chunks of any size. Each instance owns its state;
/// hash independent messages with independent hashers.
///
/// ```
/// use sha256ref::Hasher;
///
/// let mut hasher = Hasher::new();
/// hasher.update(b"a")?;
/// hasher.update(b"bc")?;
/// assert_eq!(
///     hasher.finalize()?.to_string(),
///     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
/// );
/// # Ok::<(), sha256ref::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Hasher {
    state: HashState,
    buffer: [u8; BLOCK_SIZE],
    buffered: usize,
    byte_len: u64,
    blocks: u64,
    phase: Phase,
}

impl Hasher {
    /// Create a hasher holding the initial hash value
    pub fn new() -> Self {
        Hasher {
            state: HashState::initial(),
            buffer: [0u8; BLOCK_SIZE],
            buffered: 0,
            byte_len: 0,
            blocks: 0,
            phase: Phase::Initialized,
        }
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of message bytes fed so far
    pub fn byte_len(&self) -> u64 {
        self.byte_len
    }

    /// Feed more message bytes.
    ///
    /// # Errors
    /// [`Error::UseAfterFinalize`] after [`finalize`](Self::finalize), and
    /// [`Error::LengthOverflow`] if the total length would no longer fit the
    /// 64-bit length field. The hasher is unchanged on error.
    pub fn update(&mut self, data: &[u8]) -> Result<()> {
        self.ensure_open("update")?;
        if data.is_empty() {
            return Ok(());
        }

        let total = bit_length(self.byte_len as u128 + data.len() as u128)? / 8;
        self.byte_len = total;

        let mut input = data;
        if self.buffered > 0 {
            let take = (BLOCK_SIZE - self.buffered).min(input.len());
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&input[..take]);
            self.buffered += take;
            input = &input[take..];

            if self.buffered < BLOCK_SIZE {
                return Ok(());
            }
            let block = Block::from_bytes(&self.buffer);
            self.consume(&block);
            self.buffered = 0;
        }

        let whole = input.len() - input.len() % BLOCK_SIZE;
        for block in segment(&input[..whole]) {
            self.consume(&block);
        }

        let rest = &input[whole..];
        self.buffer[..rest.len()].copy_from_slice(rest);
        self.buffered = rest.len();
        Ok(())
    }

    /// Pad the buffered tail, compress the last block(s) and return the digest.
    ///
    /// # Errors
    /// [`Error::UseAfterFinalize`] if called twice without [`reset`](Self::reset).
    pub fn finalize(&mut self) -> Result<Digest> {
        self.ensure_open("finalize")?;

        let bit_len = bit_length(self.byte_len as u128)?;
        let mut tail = self.buffer[..self.buffered].to_vec();
        append_padding(&mut tail, bit_len);
        for block in segment(&tail) {
            self.consume(&block);
        }

        self.buffer = [0u8; BLOCK_SIZE];
        self.buffered = 0;
        self.phase = Phase::Finalized;

        log::trace!(
            "sha256 finalized: {} bytes in {} blocks",
            self.byte_len,
            self.blocks
        );
        Ok(self.state.to_digest())
    }

    /// Return to the initial state, discarding everything fed so far
    pub fn reset(&mut self) {
        *self = Hasher::new();
    }

    fn consume(&mut self, block: &Block) {
        process_block(&mut self.state, block);
        self.blocks += 1;
        self.phase = Phase::Processing;
    }

    fn ensure_open(&self, op: &str) -> Result<()> {
        if self.phase == Phase::Finalized {
            log::debug!("sha256 {} rejected: hasher already finalized", op);
            return Err(Error::UseAfterFinalize);
        }
        Ok(())
    }
}

impl Default for Hasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABC: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

    #[test]
    fn one_shot_abc() {
        assert_eq!(hash(b"abc").unwrap().to_string(), ABC);
    }

    #[test]
    fn phases() {
        let mut hasher = Hasher::new();
        assert_eq!(hasher.phase(), Phase::Initialized);

        // a partial block is only buffered
        hasher.update(&[0u8; 63]).unwrap();
        assert_eq!(hasher.phase(), Phase::Initialized);

        hasher.update(&[0u8; 1]).unwrap();
        assert_eq!(hasher.phase(), Phase::Processing);
        assert_eq!(hasher.byte_len(), 64);

        hasher.finalize().unwrap();
        assert_eq!(hasher.phase(), Phase::Finalized);
    }

    #[test]
    fn finalize_without_update_is_empty_digest() {
        let mut hasher = Hasher::default();
        assert_eq!(hasher.finalize().unwrap(), hash(b"").unwrap());
    }

    #[test]
    fn use_after_finalize() {
        let mut hasher = Hasher::new();
        hasher.update(b"abc").unwrap();
        let digest = hasher.finalize().unwrap();

        assert_eq!(hasher.update(b"more"), Err(Error::UseAfterFinalize));
        assert_eq!(hasher.update(b""), Err(Error::UseAfterFinalize));
        assert_eq!(hasher.finalize(), Err(Error::UseAfterFinalize));

        hasher.reset();
        assert_eq!(hasher.phase(), Phase::Initialized);
        hasher.update(b"abc").unwrap();
        assert_eq!(hasher.finalize().unwrap(), digest);
    }

    #[test]
    fn clone_forks_the_state() {
        let mut hasher = Hasher::new();
        hasher.update(b"ab").unwrap();
        let mut fork = hasher.clone();

        hasher.update(b"c").unwrap();
        fork.update(b"d").unwrap();
        assert_eq!(hasher.finalize().unwrap().to_string(), ABC);
        assert_eq!(fork.finalize().unwrap(), hash(b"abd").unwrap());
    }

    #[test]
    fn length_overflow_leaves_hasher_untouched() {
        let mut hasher = Hasher::new();
        hasher.update(b"abc").unwrap();
        hasher.byte_len = u64::MAX / 8;
        let before = hasher.clone();

        let err = hasher.update(b"x").unwrap_err();
        assert_eq!(err, Error::LengthOverflow { byte_len: (u64::MAX / 8) as u128 + 1 });
        assert_eq!(hasher.byte_len, before.byte_len);
        assert_eq!(hasher.buffered, before.buffered);
        assert_eq!(hasher.state, before.state);
        assert_eq!(hasher.phase(), Phase::Initialized);
    }

    #[test]
    fn chunk_straddling_buffer_and_blocks() {
        let message: Vec<u8> = (0..=255u8).cycle().take(300).collect();
        let mut hasher = Hasher::new();
        hasher.update(&message[..10]).unwrap();
        hasher.update(&message[10..250]).unwrap();
        hasher.update(&message[250..]).unwrap();
        assert_eq!(hasher.finalize().unwrap(), hash(&message).unwrap());
    }
}
