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

#[macro_use]
mod macros;
mod bitops;
pub mod bitvec;
mod bytes;
pub mod error;
pub mod iter;
pub mod range;
pub mod truthy;

type BitCount = usize;

/// Returns the number of bytes needed to hold `bit_count` bits.
#[inline(always)]
pub(crate) fn byte_len(bit_count: BitCount) -> usize {
    (bit_count + 7) / 8
}

/// Converts a possibly negative index into an offset from the start
/// of a sequence of `len` bits. Negative indices count backwards from
/// the end, so `-1` is the last bit.
///
/// Returns `None` if a negative index reaches past the start. The
/// returned offset is not checked against `len`.
#[inline]
pub(crate) fn normalize(index: isize, len: BitCount) -> Option<usize> {
    if index < 0 {
        len.checked_sub(index.unsigned_abs())
    } else {
        Some(index as usize)
    }
}
