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

use crate::bitvec::{bitops, byte_len, BitCount};

/// Counts the bits set to `1` across all the bytes. Relies on the
/// bits past the logical end of the last byte being zero.
pub(super) fn count_ones(bits: &[u8]) -> usize {
    bits.iter().map(|byte| byte.count_ones() as usize).sum()
}

/// Zeroes the bits of the last byte that lie past `bit_len`. `bits`
/// must hold exactly `byte_len(bit_len)` bytes.
pub(super) fn clear_padding(bits: &mut [u8], bit_len: BitCount) {
    debug_assert_eq!(bits.len(), byte_len(bit_len));
    let partial = (bit_len % 8) as u8;
    if partial == 0 {
        return;
    }
    if let Some(last) = bits.last_mut() {
        *last = bitops::clear_lsb(*last, 8 - partial);
    }
}

/// Copies `len` bits starting at bit `start` of `src` into a newly
/// allocated vector of bytes. The first copied bit becomes the MSB of
/// the first byte and the padding of the last byte is zeroed.
///
/// The caller guarantees that `start + len` does not exceed the
/// number of bits held by `src`.
pub(super) fn copy_bits(src: &[u8], start: usize, len: BitCount) -> Vec<u8> {
    let n_bytes = byte_len(len);
    let mut dst = Vec::with_capacity(n_bytes);
    if len == 0 {
        return dst;
    }

    let sb_idx = start / 8;
    let offset = (start % 8) as u8;
    if offset == 0 {
        dst.extend_from_slice(&src[sb_idx..sb_idx + n_bytes]);
    } else {
        for byte_c in sb_idx..sb_idx + n_bytes {
            let mut byte = src[byte_c] << offset;
            if let Some(next) = src.get(byte_c + 1) {
                bitops::shl_into(&mut byte, *next, offset);
            }
            dst.push(byte);
        }
    }
    clear_padding(&mut dst, len);
    dst
}

/// Appends the first `src_len` bits of `src` to `dst` which currently
/// holds `dst_len` bits. Both inputs must have zeroed padding; the
/// output does as well.
pub(super) fn append_bits(dst: &mut Vec<u8>, dst_len: BitCount, src: &[u8], src_len: BitCount) {
    debug_assert_eq!(dst.len(), byte_len(dst_len));
    if src_len == 0 {
        return;
    }

    let src_bytes = &src[..byte_len(src_len)];
    let partial = (dst_len % 8) as u8;
    if partial == 0 {
        // dst ends on a byte boundary so the bytes line up
        dst.extend_from_slice(src_bytes);
    } else {
        let push_ct = 8 - partial;
        dst.reserve(src_bytes.len());
        for &byte in src_bytes {
            let tail = dst.len() - 1;
            bitops::shl_into(&mut dst[tail], byte, push_ct);
            dst.push(byte << push_ct);
        }
    }

    let total = dst_len + src_len;
    dst.truncate(byte_len(total));
    clear_padding(dst, total);
}
