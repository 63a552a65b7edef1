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

use crate::bitvec::{normalize, BitCount};
use core::ops::Range;
use core::ops::RangeFrom;
use core::ops::RangeFull;
use core::ops::RangeInclusive;
use core::ops::RangeTo;
use core::ops::RangeToInclusive;

/// A range of bit positions accepted by
/// [`BitVector::slice_range`](crate::bitvec::bitvec::BitVector::slice_range).
///
/// Both endpoints may be negative, in which case they count backwards
/// from the end of the vector. Each endpoint is normalized on its own
/// before the range is turned into a start and a length.
pub trait BitRange {
    /// Resolves the range against a vector of `bit_len` bits and
    /// returns the start offset and the number of bits covered. A
    /// range that ends before it starts covers zero bits.
    ///
    /// Returns `None` if a negative endpoint reaches past the start
    /// of the vector. The result is not checked against `bit_len`.
    fn resolve(&self, bit_len: BitCount) -> Option<(usize, BitCount)>;
}

impl BitRange for Range<isize> {
    fn resolve(&self, bit_len: BitCount) -> Option<(usize, BitCount)> {
        let start = normalize(self.start, bit_len)?;
        let end = normalize(self.end, bit_len)?;
        Some((start, end.saturating_sub(start)))
    }
}

impl BitRange for RangeInclusive<isize> {
    fn resolve(&self, bit_len: BitCount) -> Option<(usize, BitCount)> {
        let start = normalize(*self.start(), bit_len)?;
        let end = normalize(*self.end(), bit_len)?.checked_add(1)?;
        Some((start, end.saturating_sub(start)))
    }
}

impl BitRange for RangeFrom<isize> {
    fn resolve(&self, bit_len: BitCount) -> Option<(usize, BitCount)> {
        let start = normalize(self.start, bit_len)?;
        Some((start, bit_len.saturating_sub(start)))
    }
}

impl BitRange for RangeTo<isize> {
    fn resolve(&self, bit_len: BitCount) -> Option<(usize, BitCount)> {
        Some((0, normalize(self.end, bit_len)?))
    }
}

impl BitRange for RangeToInclusive<isize> {
    fn resolve(&self, bit_len: BitCount) -> Option<(usize, BitCount)> {
        Some((0, normalize(self.end, bit_len)?.checked_add(1)?))
    }
}

impl BitRange for RangeFull {
    fn resolve(&self, bit_len: BitCount) -> Option<(usize, BitCount)> {
        Some((0, bit_len))
    }
}
