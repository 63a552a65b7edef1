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

/// Reads the bit at `index` without checking it against the length.
macro_rules! bit_at_unchecked {
    ($index: expr, $bits: expr) => {
        $crate::bitvec::bitops::is_msb_nset($bits[$index / 8], ($index % 8) as u8)
    };
}

/// Writes `value` to the bit at `index` without checking it against
/// the length.
macro_rules! set_unchecked {
    ($index: expr, $value: expr, $bits: expr) => {
        let byte = &mut $bits[$index / 8];
        if $value {
            $crate::bitvec::bitops::set_msb_n(byte, ($index % 8) as u8);
        } else {
            $crate::bitvec::bitops::clr_msb_n(byte, ($index % 8) as u8);
        }
    };
}

/// Flips the bit at `index` without checking it against the length.
macro_rules! toggle_unchecked {
    ($index: expr, $bits: expr) => {
        $crate::bitvec::bitops::toggle_msb_n(&mut $bits[$index / 8], ($index % 8) as u8);
    };
}

/// Creates a [`BitVector`](crate::bitvec::bitvec::BitVector) from a
/// list of bits or from a bit and a length. Each bit goes through the
/// same coercion as
/// [`BitVector::from_values`](crate::bitvec::bitvec::BitVector::from_values).
///
/// # Examples
/// ```
/// use bitarray::collections::bitvector;
///
/// let bv = bitvector![0, 1, 1, 0];
/// assert_eq!(bv.to_string(), "0110");
///
/// let bv = bitvector![1; 10];
/// assert_eq!(bv.total_set(), 10);
///
/// let bv = bitvector![];
/// assert!(bv.is_empty());
/// ```
#[macro_export]
macro_rules! bitvector {
    () => {
        $crate::bitvec::bitvec::BitVector::new(0)
    };
    ($bit: expr; $len: expr) => {
        $crate::bitvec::bitvec::BitVector::repeat(
            $crate::bitvec::truthy::Truthy::is_truthy(&$bit),
            $len,
        )
    };
    ($($bit: expr),+ $(,)?) => {
        $crate::bitvec::bitvec::BitVector::from_values([$($bit),+])
    };
}
