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

use crate::bitvec::bitvec::BitVector;
use core::iter::FusedIterator;

/// An iterator over the bits of a
/// [`BitVector`](crate::bitvec::bitvec::BitVector), from the first
/// bit to the last. Created by
/// [`BitVector::iter`](crate::bitvec::bitvec::BitVector::iter).
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    bits: &'a [u8],
    cursor: usize,
    bit_len: usize,
}

impl<'a> Iter<'a> {
    pub(super) fn new(bits: &'a [u8], bit_len: usize) -> Iter<'a> {
        Iter {
            bits,
            cursor: 0,
            bit_len,
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = bool;
    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.bit_len {
            return None;
        }

        let index = self.cursor;
        self.cursor += 1;
        Some(bit_at_unchecked!(index, self.bits))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.bit_len - self.cursor;
        (rem, Some(rem))
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {}

impl<'a> FusedIterator for Iter<'a> {}

impl<'a> IntoIterator for &'a BitVector {
    type Item = bool;
    type IntoIter = Iter<'a>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
