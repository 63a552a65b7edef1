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

use thiserror::Error;

/// Errors returned by the fallible operations of a
/// [`BitVector`](crate::bitvec::bitvec::BitVector).
///
/// Reads never fail: an index outside the vector reads as `None`.
/// Writes to an index outside the vector return
/// [`IndexOutOfBounds`](BitVectorError::IndexOutOfBounds) and leave the
/// vector untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BitVectorError {
    #[error("cannot create a BitVector with a negative length ({0})")]
    NegativeLength(i64),

    #[error("cannot create a BitVector of {0} bits on this target")]
    LengthOverflow(i64),

    #[error("index out of bounds: the len is {len} but the index is {index}")]
    IndexOutOfBounds { index: isize, len: usize },
}
