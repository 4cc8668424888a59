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

//! SHA-256 compression function (FIPS 180-4, section 6.2.2 steps 2-4)

use crate::block::Block;
use crate::constants::{DIGEST_SIZE, INITIAL_HASH, ROUND_CONSTANTS};
use crate::digest::Digest;
use crate::round::{big_sigma0, big_sigma1, ch, maj};
use crate::schedule::MessageSchedule;

/// Running hash value H0..H7
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashState([u32; 8]);

impl HashState {
    /// State before any block has been consumed
    pub const fn initial() -> Self {
        HashState(INITIAL_HASH)
    }

    /// State with arbitrary words, e.g. resumed from a saved chaining value
    pub const fn from_words(words: [u32; 8]) -> Self {
        HashState(words)
    }

    /// Current words H0..H7
    pub fn words(&self) -> &[u32; 8] {
        &self.0
    }

    /// Big-endian concatenation of the eight words
    pub fn to_digest(&self) -> Digest {
        let mut out = [0u8; DIGEST_SIZE];
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.0.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        Digest::from(out)
    }
}

impl Default for HashState {
    fn default() -> Self {
        Self::initial()
    }
}

/// One round over the working variables `[a, b, c, d, e, f, g, h]`
#[inline]
fn round(v: [u32; 8], k: u32, w: u32) -> [u32; 8] {
    let [a, b, c, d, e, f, g, h] = v;

    let t1 = h
        .wrapping_add(big_sigma1(e))
        .wrapping_add(ch(e, f, g))
        .wrapping_add(k)
        .wrapping_add(w);
    let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

    [t1.wrapping_add(t2), a, b, c, d.wrapping_add(t1), e, f, g]
}

/// Run the 64 rounds over `schedule` and add the result into `state`
pub fn compress(state: &mut HashState, schedule: &MessageSchedule) {
    let mut v = state.0;
    for (&w, &k) in schedule.words().iter().zip(ROUND_CONSTANTS.iter()) {
        v = round(v, k, w);
    }

    for (h, x) in state.0.iter_mut().zip(v) {
        *h = h.wrapping_add(x);
    }
}

/// Expand `block` and compress it into `state`
pub fn process_block(state: &mut HashState, block: &Block) {
    let schedule = MessageSchedule::expand(block);
    compress(state, &schedule);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::WORDS_PER_BLOCK;

    fn abc_block() -> Block {
        let mut words = [0u32; WORDS_PER_BLOCK];
        words[0] = 0x6162_6380;
        words[15] = 0x0000_0018;
        Block::from_words(words)
    }

    #[test]
    fn first_round_of_abc() {
        let schedule = MessageSchedule::expand(&abc_block());
        let v = round(INITIAL_HASH, ROUND_CONSTANTS[0], schedule[0]);
        assert_eq!(
            v,
            [
                0x5d6aebcd, 0x6a09e667, 0xbb67ae85, 0x3c6ef372,
                0xfa2a4622, 0x510e527f, 0x9b05688c, 0x1f83d9ab
            ]
        );
    }

    #[test]
    fn abc_single_block() {
        let mut state = HashState::initial();
        process_block(&mut state, &abc_block());
        assert_eq!(
            state.words(),
            &[
                0xba7816bf, 0x8f01cfea, 0x414140de, 0x5dae2223,
                0xb00361a3, 0x96177a9c, 0xb410ff61, 0xf20015ad
            ]
        );
    }

    #[test]
    fn state_is_accumulated_not_replaced() {
        let mut state = HashState::from_words([0; 8]);
        process_block(&mut state, &abc_block());
        let from_zero = *state.words();

        let mut state = HashState::from_words([1; 8]);
        process_block(&mut state, &abc_block());
        assert_ne!(&from_zero, state.words());
    }

    #[test]
    fn digest_is_big_endian() {
        let state = HashState::from_words([0x01020304, 0, 0, 0, 0, 0, 0, 0xa0b0c0d0]);
        let digest = state.to_digest();
        assert_eq!(&digest.as_bytes()[..4], &[1, 2, 3, 4]);
        assert_eq!(&digest.as_bytes()[28..], &[0xa0, 0xb0, 0xc0, 0xd0]);
    }
}
