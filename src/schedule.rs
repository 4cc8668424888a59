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

//! Message schedule expansion (FIPS 180-4, section 6.2.2 step 1)

use crate::block::Block;
use crate::constants::{SCHEDULE_LEN, WORDS_PER_BLOCK};
use crate::round::{small_sigma0, small_sigma1};

/// The 64 words consumed by the compression rounds of one block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageSchedule([u32; SCHEDULE_LEN]);

impl MessageSchedule {
    /// Expand a block: the first 16 words are copied, the remaining 48
    /// are `σ1(W[t-2]) + W[t-7] + σ0(W[t-15]) + W[t-16]` modulo 2^32.
    pub fn expand(block: &Block) -> Self {
        let mut w = [0u32; SCHEDULE_LEN];
        w[..WORDS_PER_BLOCK].copy_from_slice(block.words());

        for t in WORDS_PER_BLOCK..SCHEDULE_LEN {
            w[t] = small_sigma1(w[t - 2])
                .wrapping_add(w[t - 7])
                .wrapping_add(small_sigma0(w[t - 15]))
                .wrapping_add(w[t - 16]);
        }
        MessageSchedule(w)
    }

    /// All 64 schedule words, W[0] first
    pub fn words(&self) -> &[u32; SCHEDULE_LEN] {
        &self.0
    }
}

impl std::ops::Index<usize> for MessageSchedule {
    type Output = u32;

    fn index(&self, t: usize) -> &u32 {
        &self.0[t]
    }
}
