/*
   BitVector: A fixed length array of bits allocated on the heap
   that allows storing and manipulating a set number of bits packed
   eight to a byte. This collection is backed by a Vec<u8> which
   manages the underlying memory.

   Copyright 2021 "Rahul Singh <rsingh@arrsingh.com>"

   Licensed under the Apache License, Version 2.0 (the "License");
   you may not use this file except in compliance with the License.
   You may obtain a copy of the License at

       http://www.apache.org/licenses/LICENSE-2.0

   Unless required by applicable law or agreed to in writing, software
   distributed under the License is distributed on an "AS IS" BASIS,
   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
   See the License for the specific language governing permissions and
   limitations under the License.
*/

//! Single byte helpers. Bits are numbered from the MSB, so bit `0` of
//! a byte is `0b1000_0000` and bit `7` is `0b0000_0001`.

/// left shift `count` msb bits of src into the lsb end of dst
///
/// let src:u8 = 0b1010_0000;
/// let mut dst: u8 = 0;
/// let count: u8 = 3;
/// shl_into(&mut dst, src, count);
/// assert_eq!(dst, 0b0000_0101);
#[inline(always)]
pub(super) fn shl_into(dst: &mut u8, src: u8, count: u8) {
    debug_assert!(count > 0 && count <= 8, "count ({}) must be 1..=8", count);
    *dst |= src >> (8 - count);
}

/// Returns true if the n'th MSB bit of the val is set
#[inline(always)]
pub(super) fn is_msb_nset(val: u8, n: u8) -> bool {
    match (val >> (7 - n)) << 7 {
        0 => false,
        _ => true,
    }
}

/// Returns a byte with the 'n'th MSB bit set. This method will
/// panic if n is greater than 7
#[inline(always)]
pub(super) fn msb_nset(n: u8) -> u8 {
    debug_assert!(n <= 7, "n ({}) exceeds 7", n);
    1u8 << (7 - n)
}

/// Set the n'th bit (starting from the MSB)
#[inline(always)]
pub(super) fn set_msb_n(val: &mut u8, n: u8) {
    *val |= msb_nset(n);
}

/// Clear the n'th bit (starting from the MSB)
#[inline(always)]
pub(super) fn clr_msb_n(val: &mut u8, n: u8) {
    *val &= !msb_nset(n);
}

/// Flip the n'th bit (starting from the MSB)
#[inline(always)]
pub(super) fn toggle_msb_n(val: &mut u8, n: u8) {
    *val ^= msb_nset(n);
}

/// Returns the specified 'val' with the 'count' LSB bits
/// cleared. Clears the whole byte if 'count' is 8 or more.
#[inline(always)]
pub(super) fn clear_lsb(val: u8, count: u8) -> u8 {
    val & 0xFFu8.checked_shl(count as u32).unwrap_or(0)
}
