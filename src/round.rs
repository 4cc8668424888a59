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

//! SHA-256 logical functions (FIPS 180-4, section 4.1.2)
//!
//! All functions are pure word operations; rotations and shifts never
//! overflow and the callers perform every addition with `wrapping_add`.

/// Right rotate function
#[inline]
pub const fn rotr(x: u32, n: u32) -> u32 {
    x.rotate_right(n)
}

/// Right shift function
#[inline]
pub const fn shr(x: u32, n: u32) -> u32 {
    x >> n
}

/// Choose: each bit of `x` selects the bit of `y` (1) or `z` (0)
#[inline]
pub const fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

/// Majority: each output bit is the majority vote of `x`, `y`, `z`
#[inline]
pub const fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

// The sigma family only differs by rotation/shift amounts.
macro_rules! sigma {
    (big $n:tt => $a:tt, $b:tt, $c:tt) => {
        paste::paste! {
            #[doc = "Σ" $n " compression function: ROTR " $a " ^ ROTR " $b " ^ ROTR " $c]
            #[inline]
            pub const fn [<big_sigma $n>](x: u32) -> u32 {
                rotr(x, $a) ^ rotr(x, $b) ^ rotr(x, $c)
            }
        }
    };
    (small $n:tt => $a:tt, $b:tt, $c:tt) => {
        paste::paste! {
            #[doc = "σ" $n " schedule function: ROTR " $a " ^ ROTR " $b " ^ SHR " $c]
            #[inline]
            pub const fn [<small_sigma $n>](x: u32) -> u32 {
                rotr(x, $a) ^ rotr(x, $b) ^ shr(x, $c)
            }
        }
    };
}

sigma!(big 0 => 2, 13, 22);
sigma!(big 1 => 6, 11, 25);
sigma!(small 0 => 7, 18, 3);
sigma!(small 1 => 17, 19, 10);
