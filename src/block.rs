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

//! Segmentation of a padded message into 512-bit blocks

use crate::constants::{BLOCK_SIZE, WORDS_PER_BLOCK};
use std::slice::ChunksExact;

/// One 64-byte block viewed as 16 big-endian words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block([u32; WORDS_PER_BLOCK]);

impl Block {
    /// Assemble word `i` from bytes `4i..4i+3`, most significant byte first
    pub fn from_bytes(bytes: &[u8; BLOCK_SIZE]) -> Self {
        let mut words = [0u32; WORDS_PER_BLOCK];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
            *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Block(words)
    }

    /// Wrap 16 already-assembled words
    pub fn from_words(words: [u32; WORDS_PER_BLOCK]) -> Self {
        Block(words)
    }

    /// The 16 big-endian words of the block
    pub fn words(&self) -> &[u32; WORDS_PER_BLOCK] {
        &self.0
    }
}

/// Iterator over the blocks of a padded message, in message order
#[derive(Debug, Clone)]
pub struct Blocks<'a> {
    chunks: ChunksExact<'a, u8>,
}

impl<'a> Iterator for Blocks<'a> {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        self.chunks.next().map(|chunk| {
            let mut bytes = [0u8; BLOCK_SIZE];
            bytes.copy_from_slice(chunk);
            Block::from_bytes(&bytes)
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for Blocks<'_> {}

/// Split `padded` into blocks.
///
/// `padded` must come out of the padder, so its length is a multiple of
/// [`BLOCK_SIZE`]. Anything else is a bug in the caller, not bad input.
pub fn segment(padded: &[u8]) -> Blocks<'_> {
    debug_assert_eq!(
        padded.len() % BLOCK_SIZE,
        0,
        "padded message length {} is not a multiple of {}",
        padded.len(),
        BLOCK_SIZE
    );
    Blocks {
        chunks: padded.chunks_exact(BLOCK_SIZE),
    }
}
