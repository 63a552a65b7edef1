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

use crate::bitvec::{
    byte_len, bytes,
    error::BitVectorError,
    iter::Iter,
    normalize,
    range::BitRange,
    truthy::Truthy,
    BitCount,
};
use core::convert::{Infallible, TryFrom};
use core::fmt;
use core::fmt::Debug;
use core::fmt::Display;
use core::iter::FromIterator;
use core::ops::Add;
use core::ops::Index;
use core::str::FromStr;

/// A fixed length array of bits allocated on the heap. The bits are
/// packed eight to a byte into a [`Vec<u8>`](Vec) which is sized
/// once, when the BitVector is created.
///
/// # Getting Started
/// ```
/// use bitarray::collections::BitVector;
///
/// let mut bv = BitVector::new(10);
/// bv.set(1, true).unwrap();
/// bv.set(5, 1).unwrap();
///
/// assert_eq!(bv.get(1), Some(true));
/// assert_eq!(bv.get(2), Some(false));
/// assert_eq!(bv.get(-5), Some(true));
/// assert_eq!(bv.get(10), None);
/// assert_eq!(bv.to_string(), "0100010000");
/// ```
///
/// A BitVector can also be built from a string of `'0'` and `'1'`
/// characters, from a sequence of values or with the
/// [`bitvector!`](macro.bitvector.html) macro.
///
/// ```
/// use bitarray::collections::BitVector;
/// use bitarray::collections::bitvector;
///
/// let from_str = BitVector::from("00101");
/// let from_values = BitVector::from(vec![false, false, true, false, true]);
/// let from_macro = bitvector![0, 0, 1, 0, 1];
/// assert_eq!(from_str, from_values);
/// assert_eq!(from_str, from_macro);
/// ```
///
/// # Indexing
///
/// Every method that takes an index accepts a negative value which
/// counts backwards from the end, so `-1` is the last bit. Reads past
/// either end return `None`; writes past either end return a
/// [`BitVectorError::IndexOutOfBounds`] and leave the bits untouched.
///
/// # Memory Management
///
/// Memory is managed by an underlying [`Vec<u8>`](Vec) holding
/// exactly `(len + 7) / 8` bytes. Bit `i` is stored in byte `i / 8`
/// starting from the most significant bit of that byte. All bits of
/// the last byte past the end of the BitVector are kept at zero, so
/// two BitVectors with the same bits always hold the same bytes.
///
/// Slices and concatenations copy bits into a new BitVector and never
/// share memory with their source.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BitVector {
    pub(super) bits: Vec<u8>,
    pub(super) bit_len: usize,
}

impl BitVector {
    /// Creates a BitVector of `len` bits all set to `0`.
    ///
    /// # Examples
    /// ```
    /// use bitarray::collections::BitVector;
    /// let bv = BitVector::new(12);
    /// assert_eq!(bv.len(), 12);
    /// assert_eq!(bv.total_set(), 0);
    /// assert_eq!(bv.to_string(), "000000000000");
    /// ```
    pub fn new(len: usize) -> BitVector {
        BitVector {
            bits: vec![0; byte_len(len)],
            bit_len: len,
        }
    }

    /// Creates a BitVector of `len` bits all set to `0` from a signed
    /// length. Returns an error if `len` is negative or does not fit in
    /// a `usize`.
    ///
    /// # Examples
    /// ```
    /// use bitarray::collections::BitVector;
    /// use bitarray::collections::bitvec::BitVectorError;
    ///
    /// assert_eq!(BitVector::try_new(3).unwrap().len(), 3);
    /// assert_eq!(BitVector::try_new(-1), Err(BitVectorError::NegativeLength(-1)));
    /// ```
    pub fn try_new(len: i64) -> Result<BitVector, BitVectorError> {
        if len < 0 {
            return Err(BitVectorError::NegativeLength(len));
        }
        let len = usize::try_from(len).map_err(|_| BitVectorError::LengthOverflow(len))?;
        Ok(BitVector::new(len))
    }

    /// Creates a new BitVector with a bit repeated `len` times
    ///
    /// # Examples
    /// ```
    /// use bitarray::collections::BitVector;
    ///
    /// let bv = BitVector::repeat(true, 4);
    /// assert_eq!(bv.to_string(), "1111");
    /// ```
    pub fn repeat(bit: bool, len: usize) -> BitVector {
        let mut bv = BitVector::new(len);
        if bit {
            bv.set_all_bits();
        }
        bv
    }

    /// Creates a BitVector from a string of `'0'` and `'1'`
    /// characters. Parsing stops at the first character that is
    /// neither, and that character and everything after it are
    /// ignored. A string that does not start with `'0'` or `'1'`
    /// produces an empty BitVector.
    ///
    /// # Examples
    /// ```
    /// use bitarray::collections::BitVector;
    ///
    /// assert_eq!(BitVector::from_bit_str("10101010").to_string(), "10101010");
    /// assert_eq!(BitVector::from_bit_str("1010abcd").to_string(), "1010");
    /// assert!(BitVector::from_bit_str("abcd0101").is_empty());
    /// ```
    pub fn from_bit_str(s: &str) -> BitVector {
        let valid = s
            .bytes()
            .position(|c| c != b'0' && c != b'1')
            .unwrap_or_else(|| s.len());

        let mut bv = BitVector::new(valid);
        for (index, c) in s.bytes().take(valid).enumerate() {
            if c == b'1' {
                set_unchecked!(index, true, bv.bits);
            }
        }
        bv
    }

    /// Creates a BitVector with one bit per value. A value sets its
    /// bit when it is [truthy](Truthy): `false`, `0` and `None` leave
    /// the bit at `0` and everything else sets it to `1`.
    ///
    /// # Examples
    /// ```
    /// use bitarray::collections::BitVector;
    ///
    /// let bv = BitVector::from_values(vec![0, 0, 0, 1, 1, 0]);
    /// assert_eq!(bv.to_string(), "000110");
    ///
    /// let bv = BitVector::from_values([None, None, Some("a"), None, Some("bc")]);
    /// assert_eq!(bv.to_string(), "00101");
    /// ```
    pub fn from_values<I, T>(values: I) -> BitVector
    where
        I: IntoIterator<Item = T>,
        T: Truthy,
    {
        let mut bits = Vec::new();
        let mut bit_len = 0;
        for value in values {
            if bit_len % 8 == 0 {
                bits.push(0);
            }
            set_unchecked!(bit_len, value.is_truthy(), bits);
            bit_len += 1;
        }
        BitVector { bits, bit_len }
    }

    /// Returns the number of bits in the [`BitVector`](BitVector)
    ///
    /// # Examples
    /// ```
    /// use bitarray::collections::BitVector;
    /// let bv = BitVector::new(22);
    /// assert_eq!(bv.len(), 22);
    /// ```
    pub fn len(&self) -> usize {
        self.bit_len
    }

    /// Returns true if the [`BitVector`](BitVector) contains no bits.
    ///
    /// # Examples
    /// ```
    /// use bitarray::collections::BitVector;
    /// assert!(BitVector::new(0).is_empty());
    /// assert!(!BitVector::new(1).is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.bit_len == 0
    }

    /// Returns a boolean value indicating whether the bit at the
    /// specified index is set or `None` if the index is out of
    /// bounds. Negative indices count backwards from the end.
    ///
    /// # Examples
    /// ```
    /// use bitarray::collections::BitVector;
    ///
    /// let bv = BitVector::from("110");
    /// assert_eq!(bv.get(0), Some(true));
    /// assert_eq!(bv.get(1), Some(true));
    /// assert_eq!(bv.get(2), Some(false));
    /// assert_eq!(bv.get(3), None);
    /// assert_eq!(bv.get(-1), Some(false));
    /// assert_eq!(bv.get(-3), Some(true));
    /// assert_eq!(bv.get(-4), None);
    /// ```
    pub fn get(&self, index: isize) -> Option<bool> {
        let index = self.check_read(index)?;
        Some(bit_at_unchecked!(index, self.bits))
    }

    /// Sets the bit at the given index to 1 if `value` is
    /// [truthy](Truthy), otherwise clears it. Returns an error if the
    /// index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// use bitarray::collections::BitVector;
    ///
    /// let mut bv = BitVector::new(4);
    /// bv.set(0, true).unwrap();
    /// bv.set(-1, 1).unwrap();
    /// assert_eq!(bv.to_string(), "1001");
    /// bv.set(0, 0).unwrap();
    /// assert_eq!(bv.to_string(), "0001");
    /// assert!(bv.set(4, 1).is_err());
    /// ```
    pub fn set<V: Truthy>(&mut self, index: isize, value: V) -> Result<(), BitVectorError> {
        let index = self.check_write(index)?;
        set_unchecked!(index, value.is_truthy(), self.bits);
        Ok(())
    }

    /// Sets the bit at the given index to 1. Returns an error if the
    /// index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// use bitarray::collections::BitVector;
    ///
    /// let mut bv = BitVector::new(3);
    /// bv.set_bit(1).unwrap();
    /// assert_eq!(bv.to_string(), "010");
    /// ```
    pub fn set_bit(&mut self, index: isize) -> Result<(), BitVectorError> {
        self.set(index, true)
    }

    /// Clears the bit at the given index to 0. Returns an error if the
    /// index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// use bitarray::collections::BitVector;
    ///
    /// let mut bv = BitVector::from("111");
    /// bv.clear_bit(-1).unwrap();
    /// assert_eq!(bv.to_string(), "110");
    /// ```
    pub fn clear_bit(&mut self, index: isize) -> Result<(), BitVectorError> {
        self.set(index, false)
    }

    /// Flips the bit at the given index. Returns an error if the index
    /// is out of bounds.
    ///
    /// # Examples
    /// ```
    /// use bitarray::collections::BitVector;
    ///
    /// let mut bv = BitVector::new(10);
    /// bv.toggle_bit(5).unwrap();
    /// assert_eq!(bv.get(5), Some(true));
    /// bv.toggle_bit(-5).unwrap();
    /// assert_eq!(bv.get(5), Some(false));
    /// ```
    pub fn toggle_bit(&mut self, index: isize) -> Result<(), BitVectorError> {
        let index = self.check_write(index)?;
        toggle_unchecked!(index, self.bits);
        Ok(())
    }

    /// Sets every bit to 1.
    ///
    /// # Examples
    /// ```
    /// use bitarray::collections::BitVector;
    ///
    /// let mut bv = BitVector::new(10);
    /// bv.set_all_bits();
    /// assert_eq!(bv.to_string(), "1111111111");
    /// ```
    pub fn set_all_bits(&mut self) {
        for byte in self.bits.iter_mut() {
            *byte = u8::MAX;
        }
        bytes::clear_padding(&mut self.bits, self.bit_len);
    }

    /// Clears every bit to 0.
    ///
    /// # Examples
    /// ```
    /// use bitarray::collections::BitVector;
    ///
    /// let mut bv = BitVector::from("0100010000");
    /// bv.clear_all_bits();
    /// assert_eq!(bv.to_string(), "0000000000");
    /// ```
    pub fn clear_all_bits(&mut self) {
        for byte in self.bits.iter_mut() {
            *byte = 0;
        }
    }

    /// Flips every bit.
    ///
    /// # Examples
    /// ```
    /// use bitarray::collections::BitVector;
    ///
    /// let mut bv = BitVector::from("0100010000");
    /// bv.toggle_all_bits();
    /// assert_eq!(bv.to_string(), "1011101111");
    /// ```
    pub fn toggle_all_bits(&mut self) {
        for byte in self.bits.iter_mut() {
            *byte = !*byte;
        }
        bytes::clear_padding(&mut self.bits, self.bit_len);
    }

    /// Returns the number of bits set to 1.
    ///
    /// # Examples
    /// ```
    /// use bitarray::collections::BitVector;
    ///
    /// let bv = BitVector::from("0100010000");
    /// assert_eq!(bv.total_set(), 2);
    /// ```
    pub fn total_set(&self) -> usize {
        bytes::count_ones(&self.bits)
    }

    /// Returns the number of bits set to 0.
    ///
    /// # Examples
    /// ```
    /// use bitarray::collections::BitVector;
    ///
    /// let bv = BitVector::from("0100010000");
    /// assert_eq!(bv.total_clear(), 8);
    /// ```
    pub fn total_clear(&self) -> usize {
        self.bit_len - self.total_set()
    }

    /// Returns a new BitVector holding a copy of `len` bits starting
    /// at `start`. A negative `start` counts backwards from the end.
    ///
    /// Returns `None` if `start` is out of bounds or if fewer than
    /// `len` bits follow it. The slice is never silently shortened.
    ///
    /// # Examples
    /// ```
    /// use bitarray::collections::BitVector;
    ///
    /// let bv = BitVector::from("0100010000");
    /// assert_eq!(bv.slice(1, 5).unwrap().to_string(), "10001");
    /// assert_eq!(bv.slice(-5, 5).unwrap().to_string(), "10000");
    /// assert_eq!(bv.slice(10, 0).unwrap().len(), 0);
    /// assert_eq!(bv.slice(8, 3), None);
    /// assert_eq!(bv.slice(-11, 1), None);
    /// ```
    pub fn slice(&self, start: isize, len: usize) -> Option<BitVector> {
        let start = normalize(start, self.bit_len)?;
        self.copy_range(start, len)
    }

    /// Returns a new BitVector holding a copy of the bits in `range`.
    /// Both ends of the range may be negative and count backwards
    /// from the end. `a..=b` includes bit `b`, `a..b` does not.
    ///
    /// Returns `None` under the same conditions as
    /// [`slice`](BitVector::slice). A range that ends before it starts
    /// produces an empty BitVector.
    ///
    /// # Examples
    /// ```
    /// use bitarray::collections::BitVector;
    ///
    /// let bv = BitVector::from("0100010000");
    /// assert_eq!(bv.slice_range(1..=5).unwrap().to_string(), "10001");
    /// assert_eq!(bv.slice_range(-5..=-1).unwrap().to_string(), "10000");
    /// assert_eq!(bv.slice_range(1..6).unwrap().to_string(), "10001");
    /// assert_eq!(bv.slice_range(..).unwrap(), bv);
    /// assert_eq!(bv.slice_range(5..=12), None);
    /// ```
    pub fn slice_range<R: BitRange>(&self, range: R) -> Option<BitVector> {
        let (start, len) = range.resolve(self.bit_len)?;
        self.copy_range(start, len)
    }

    /// Returns a new BitVector with the bits of `self` followed by the
    /// bits of `other`. Neither input is modified.
    ///
    /// # Examples
    /// ```
    /// use bitarray::collections::BitVector;
    ///
    /// let zeros = BitVector::new(5);
    /// let ones = BitVector::repeat(true, 5);
    /// assert_eq!(zeros.concat(&ones).to_string(), "0000011111");
    /// assert_eq!(ones.concat(&zeros).to_string(), "1111100000");
    /// ```
    pub fn concat(&self, other: &BitVector) -> BitVector {
        let mut bits = Vec::with_capacity(byte_len(self.bit_len + other.bit_len));
        bits.extend_from_slice(&self.bits);
        bytes::append_bits(&mut bits, self.bit_len, &other.bits, other.bit_len);
        BitVector {
            bits,
            bit_len: self.bit_len + other.bit_len,
        }
    }

    /// Returns an iterator over the bits of this
    /// [`BitVector`](BitVector). Every call starts from the first bit.
    ///
    /// # Examples
    /// ```
    /// use bitarray::collections::BitVector;
    ///
    /// let bv = BitVector::from("101");
    ///
    /// let mut iter = bv.iter();
    /// assert_eq!(iter.next(), Some(true));
    /// assert_eq!(iter.next(), Some(false));
    /// assert_eq!(iter.next(), Some(true));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.bits, self.bit_len)
    }

    /// Returns the bits as a vector of `0` and `1` integers.
    ///
    /// # Examples
    /// ```
    /// use bitarray::collections::BitVector;
    ///
    /// let bv = BitVector::from("0100");
    /// assert_eq!(bv.to_vec(), vec![0, 1, 0, 0]);
    /// assert_eq!(BitVector::from(bv.to_vec()), bv);
    /// ```
    pub fn to_vec(&self) -> Vec<u8> {
        self.iter().map(u8::from).collect()
    }

    /// Returns the bytes backing this BitVector. Bit `0` is the most
    /// significant bit of the first byte and the unused bits of the
    /// last byte are zero.
    ///
    /// # Examples
    /// ```
    /// use bitarray::collections::BitVector;
    ///
    /// let bv = BitVector::from("0100000011");
    /// assert_eq!(bv.as_raw_slice(), &[0b0100_0000, 0b1100_0000]);
    /// ```
    pub fn as_raw_slice(&self) -> &[u8] {
        &self.bits
    }
}

impl Debug for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitVector {{ bit_len: {}, bits:\n", self.bit_len)?;

        let mut count = 0;
        write!(f, "{{")?;
        for byte in self.bits.iter() {
            if count % 4 == 0 {
                write!(f, "\n    ")?;
            }
            write!(f, "{:08b} ", byte)?;
            count += 1;
        }
        write!(f, "\n}}}}")?;
        Ok(())
    }
}

impl Display for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: String = self.iter().map(|bit| if bit { '1' } else { '0' }).collect();
        f.pad(&s)
    }
}

impl Index<isize> for BitVector {
    type Output = bool;
    fn index(&self, index: isize) -> &Self::Output {
        match self.get(index) {
            None => {
                panic!(
                    "index out of bounds: the len is {} but the index is {}",
                    self.bit_len, index
                );
            }
            Some(true) => &true,
            Some(false) => &false,
        }
    }
}

impl Add for BitVector {
    type Output = BitVector;
    fn add(self, other: BitVector) -> Self::Output {
        self.concat(&other)
    }
}

impl<'a> Add<&'a BitVector> for &'a BitVector {
    type Output = BitVector;
    fn add(self, other: &'a BitVector) -> Self::Output {
        self.concat(other)
    }
}

impl Default for BitVector {
    fn default() -> Self {
        Self::new(0)
    }
}

impl From<&str> for BitVector {
    fn from(s: &str) -> Self {
        BitVector::from_bit_str(s)
    }
}

impl From<String> for BitVector {
    fn from(s: String) -> Self {
        BitVector::from_bit_str(&s)
    }
}

impl FromStr for BitVector {
    type Err = Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(BitVector::from_bit_str(s))
    }
}

impl<T: Truthy> From<Vec<T>> for BitVector {
    fn from(values: Vec<T>) -> Self {
        BitVector::from_values(values)
    }
}

impl<T: Truthy> From<&[T]> for BitVector {
    fn from(values: &[T]) -> Self {
        BitVector::from_values(values)
    }
}

impl<T: Truthy, const N: usize> From<[T; N]> for BitVector {
    fn from(values: [T; N]) -> Self {
        BitVector::from_values(values)
    }
}

impl<T: Truthy> FromIterator<T> for BitVector {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        BitVector::from_values(iter)
    }
}

macro_rules! try_from_signed {
    ($($t:ty),*) => {
        $(
            impl TryFrom<$t> for BitVector {
                type Error = BitVectorError;
                fn try_from(len: $t) -> Result<Self, Self::Error> {
                    BitVector::try_new(len as i64)
                }
            }
        )*
    };
}

try_from_signed!(i32, i64, isize);

//Private and Helper methods
impl BitVector {
    /// Normalizes `index` and returns it if it refers to a bit of
    /// this BitVector.
    fn check_read(&self, index: isize) -> Option<usize> {
        match normalize(index, self.bit_len) {
            Some(i) if i < self.bit_len => Some(i),
            _ => None,
        }
    }

    /// Like [`check_read`](BitVector::check_read) but reports an out
    /// of bounds index as an error.
    fn check_write(&self, index: isize) -> Result<usize, BitVectorError> {
        self.check_read(index)
            .ok_or(BitVectorError::IndexOutOfBounds {
                index,
                len: self.bit_len,
            })
    }

    fn copy_range(&self, start: usize, len: BitCount) -> Option<BitVector> {
        let end = start.checked_add(len)?;
        if end > self.bit_len {
            return None;
        }
        Some(BitVector {
            bits: bytes::copy_bits(&self.bits, start, len),
            bit_len: len,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn ten_bits() -> BitVector {
        let mut bv = BitVector::new(10);
        bv.set(1, 1).unwrap();
        bv.set(5, 1).unwrap();
        bv
    }

    #[test]
    fn test_new() {
        for n in [0, 1, 7, 8, 9, 100, 1000] {
            let bv = BitVector::new(n);
            assert_eq!(bv.len(), n);
            assert_eq!(bv.total_set(), 0);
            assert_eq!(bv.bits.len(), byte_len(n));
            assert_eq!(bv.to_string(), "0".repeat(n));
        }
        assert_eq!(BitVector::new(100).get(0), Some(false));
        assert_eq!(BitVector::new(100).get(1), Some(false));
    }

    #[test]
    fn test_try_new() {
        assert_eq!(BitVector::try_new(0), Ok(BitVector::new(0)));
        assert_eq!(BitVector::try_new(17).unwrap().len(), 17);
        assert_eq!(BitVector::try_new(-1), Err(BitVectorError::NegativeLength(-1)));
        assert_eq!(BitVector::try_from(-5i32), Err(BitVectorError::NegativeLength(-5)));
        assert_eq!(BitVector::try_from(-5isize), Err(BitVectorError::NegativeLength(-5)));
        assert_eq!(BitVector::try_from(9i64).unwrap().len(), 9);
        assert_eq!(
            BitVector::try_new(i64::MIN),
            Err(BitVectorError::NegativeLength(i64::MIN))
        );
    }

    #[test]
    #[cfg(target_pointer_width = "32")]
    fn test_try_new_overflow() {
        let len = i64::from(u32::MAX) + 1;
        assert_eq!(BitVector::try_new(len), Err(BitVectorError::LengthOverflow(len)));
    }

    #[test]
    fn test_setting_and_unsetting() {
        let mut bv = BitVector::new(1000);
        bv.set(100, 1).unwrap();
        assert_eq!(bv.get(100), Some(true));
        bv.set(100, 0).unwrap();
        assert_eq!(bv.get(100), Some(false));
    }

    #[test]
    fn test_random_setting_and_unsetting() {
        let mut bv = BitVector::new(1000);
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let index: isize = rng.gen_range(0..1000);
            bv.set(index, 1).unwrap();
            assert_eq!(bv.get(index), Some(true));
            bv.set(index, 0).unwrap();
            assert_eq!(bv.get(index), Some(false));
        }
        assert_eq!(bv.total_set(), 0);
    }

    #[test]
    fn test_multiple_setting() {
        let mut bv = BitVector::new(1000);
        for pos in 1..1000 {
            bv.set(pos, 1).unwrap();
            bv.set(pos, 1).unwrap();
            assert_eq!(bv.get(pos), Some(true));
        }
        assert_eq!(bv.total_set(), 999);
        for pos in 1..1000 {
            bv.set(pos, 0).unwrap();
            bv.set(pos, 0).unwrap();
            assert_eq!(bv.get(pos), Some(false));
        }
        assert_eq!(bv.total_set(), 0);
    }

    #[test]
    fn test_set_truthy_values() {
        let mut bv = BitVector::new(6);
        bv.set(0, "a").unwrap();
        bv.set(1, Some(0)).unwrap();
        bv.set(2, None::<u8>).unwrap();
        bv.set(3, vec![0u8; 0]).unwrap();
        bv.set(4, -7i64).unwrap();
        bv.set(5, false).unwrap();
        assert_eq!(bv.to_string(), "100110");
    }

    #[test]
    fn test_out_of_bounds() {
        let mut bv = BitVector::new(10);
        assert_eq!(bv.get(10), None);
        assert_eq!(bv.get(-11), None);
        assert_eq!(
            bv.set(10, 1),
            Err(BitVectorError::IndexOutOfBounds { index: 10, len: 10 })
        );
        assert_eq!(
            bv.set_bit(-11),
            Err(BitVectorError::IndexOutOfBounds { index: -11, len: 10 })
        );
        assert!(bv.clear_bit(12).is_err());
        assert!(bv.toggle_bit(isize::MAX).is_err());
        assert!(bv.toggle_bit(isize::MIN).is_err());
        assert_eq!(bv.total_set(), 0);

        let mut empty = BitVector::new(0);
        assert_eq!(empty.get(0), None);
        assert_eq!(empty.get(-1), None);
        assert!(empty.set(0, 1).is_err());
    }

    #[test]
    fn test_negative_index() {
        let mut bv = BitVector::new(10);
        bv.set(-1, 1).unwrap();
        bv.set_bit(-10).unwrap();
        assert_eq!(bv.to_string(), "1000000001");
        assert_eq!(bv.get(9), Some(true));
        assert_eq!(bv.get(0), Some(true));
        bv.toggle_bit(-2).unwrap();
        assert_eq!(bv.get(8), Some(true));
    }

    #[test]
    fn test_index() {
        let bv = ten_bits();
        assert_eq!(bv[1], true);
        assert_eq!(bv[2], false);
        assert_eq!(bv[-5], true);
    }

    #[test]
    #[should_panic(expected = "index out of bounds: the len is 10 but the index is 10")]
    fn test_index_panic() {
        let bv = ten_bits();
        let _ = bv[10];
    }

    #[test]
    fn test_to_s() {
        assert_eq!(ten_bits().to_string(), "0100010000");
        assert_eq!(format!("{:>12}", ten_bits()), "  0100010000");
    }

    #[test]
    fn test_debug() {
        let bv = BitVector::from("0100010000");
        assert_eq!(
            format!("{:?}", bv),
            "BitVector { bit_len: 10, bits:\n{\n    01000100 00000000 \n}}"
        );
    }

    #[test]
    fn test_set_all_bits() {
        let mut bv = BitVector::new(10);
        bv.set_all_bits();
        assert_eq!(bv.to_string(), "1111111111");
        assert_eq!(bv.total_set(), 10);
        assert_eq!(bv.bits, vec![0b1111_1111, 0b1100_0000]);
    }

    #[test]
    fn test_clear_all_bits() {
        let mut bv = ten_bits();
        bv.clear_all_bits();
        assert_eq!(bv.to_string(), "0000000000");
        assert_eq!(bv, BitVector::new(10));
    }

    #[test]
    fn test_clone() {
        let bv = ten_bits();
        let mut bv_clone = bv.clone();
        assert_eq!(bv_clone.to_string(), bv.to_string());
        bv_clone.set(0, 1).unwrap();
        bv_clone.clear_bit(1).unwrap();
        assert_eq!(bv.to_string(), "0100010000");
        assert_eq!(bv_clone.to_string(), "1000010000");
    }

    #[test]
    fn test_toggle_bit() {
        let mut bv = BitVector::new(10);
        bv.toggle_bit(5).unwrap();
        assert_eq!(bv.get(5), Some(true));
        bv.toggle_bit(5).unwrap();
        assert_eq!(bv.get(5), Some(false));
    }

    #[test]
    fn test_toggle_all_bits() {
        let mut bv = ten_bits();
        bv.toggle_all_bits();
        assert_eq!(bv.to_string(), "1011101111");
        assert_eq!(bv.total_set(), 8);
        // padding stays clear
        assert_eq!(bv.bits[1], 0b1100_0000);
        bv.toggle_all_bits();
        assert_eq!(bv, ten_bits());
    }

    #[test]
    fn test_total_set() {
        assert_eq!(ten_bits().total_set(), 2);
        assert_eq!(ten_bits().total_clear(), 8);
        assert_eq!(BitVector::new(0).total_set(), 0);
        assert_eq!(BitVector::repeat(true, 256).total_set(), 256);
    }

    #[test]
    fn test_slice_beg_len() {
        let bv = ten_bits();
        assert_eq!(bv.slice(1, 5).unwrap().to_string(), "10001");
        assert_eq!(bv.slice(-5, 5).unwrap().to_string(), "10000");
        assert_eq!(bv.slice(0, 10).unwrap(), bv);
        assert_eq!(bv.slice(3, 0).unwrap(), BitVector::new(0));
        assert_eq!(bv.slice(10, 0).unwrap(), BitVector::new(0));
    }

    #[test]
    fn test_slice_out_of_bounds() {
        let bv = ten_bits();
        assert_eq!(bv.slice(11, 0), None);
        assert_eq!(bv.slice(6, 5), None);
        assert_eq!(bv.slice(-11, 2), None);
        assert_eq!(bv.slice(0, usize::MAX), None);
        assert_eq!(bv.slice(isize::MIN, 1), None);
    }

    #[test]
    fn test_slice_range() {
        let bv = ten_bits();
        assert_eq!(bv.slice_range(1..=5).unwrap().to_string(), "10001");
        assert_eq!(bv.slice_range(-5..=-1).unwrap().to_string(), "10000");
        assert_eq!(bv.slice_range(1..6).unwrap().to_string(), "10001");
        assert_eq!(bv.slice_range(5..).unwrap().to_string(), "10000");
        assert_eq!(bv.slice_range(..2).unwrap().to_string(), "01");
        assert_eq!(bv.slice_range(..=-9).unwrap().to_string(), "01");
        assert_eq!(bv.slice_range(4..=2).unwrap(), BitVector::new(0));
        assert_eq!(bv.slice_range(..).unwrap(), bv);
    }

    #[test]
    fn test_slice_range_out_of_bounds() {
        let bv = ten_bits();
        assert_eq!(bv.slice_range(5..=10), None);
        assert_eq!(bv.slice_range(-11..=2), None);
        assert_eq!(bv.slice_range(0..=-11), None);
        assert_eq!(bv.slice_range(11..), None);
    }

    #[test]
    fn test_slice_is_a_copy() {
        let bv = BitVector::from("1111000011110000");
        let mut slice = bv.slice(2, 12).unwrap();
        assert_eq!(slice.to_string(), "110000111100");
        slice.toggle_all_bits();
        assert_eq!(slice.to_string(), "001111000011");
        assert_eq!(bv.to_string(), "1111000011110000");
    }

    #[test]
    fn test_slice_random() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let len: usize = rng.gen_range(0..300);
            let bv: BitVector = (0..len).map(|_| rng.gen::<bool>()).collect();
            let s = bv.to_string();
            let start: usize = rng.gen_range(0..=len);
            let count: usize = rng.gen_range(0..=len - start);
            let slice = bv.slice(start as isize, count).unwrap();
            assert_eq!(slice.to_string(), &s[start..start + count]);
            assert_eq!(slice.total_set(), s[start..start + count].matches('1').count());
        }
    }

    #[test]
    fn test_concatenation() {
        let ba1 = BitVector::new(5);
        let mut ba2 = BitVector::new(5);
        ba2.set_all_bits();
        let ba3 = &ba1 + &ba2;
        assert_eq!(ba3.to_string(), "0000011111");
        let ba3 = &ba2 + &ba1;
        assert_eq!(ba3.to_string(), "1111100000");
        assert_eq!(ba1.to_string(), "00000");
        assert_eq!(ba2.to_string(), "11111");
    }

    #[test]
    fn test_concatenation2() {
        let ba1 = BitVector::new(32);
        let ba2 = BitVector::repeat(true, 7);
        let ba3 = ba1.clone() + ba2.clone();
        assert_eq!(ba3.to_string(), "000000000000000000000000000000001111111");
        let ba3 = ba2 + ba1;
        assert_eq!(ba3.to_string(), "111111100000000000000000000000000000000");
        assert_eq!(ba3.total_set(), 7);
    }

    #[test]
    fn test_concatenation_associative() {
        let a = BitVector::from("101");
        let b = BitVector::from("0110011001");
        let c = BitVector::from("11");
        let left = &(&a + &b) + &c;
        let right = &a + &(&b + &c);
        assert_eq!(left.to_string(), "101011001100111");
        assert_eq!(left, right);
    }

    #[test]
    fn test_concatenation_empty() {
        let a = BitVector::from("101");
        let empty = BitVector::new(0);
        assert_eq!(&a + &empty, a);
        assert_eq!(&empty + &a, a);
        assert_eq!(&empty + &empty, empty);
    }

    #[test]
    fn test_to_vec() {
        let mut bv = BitVector::new(16);
        bv.set(1, 1).unwrap();
        bv.set(5, 1).unwrap();
        assert_eq!(bv.to_vec(), vec![0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_init_from_str() {
        assert_eq!(BitVector::from("00011").to_string(), "00011");
        assert_eq!(BitVector::from("00011abcd").to_string(), "00011");
        assert_eq!(BitVector::from("abcd0101").to_string(), "");
        assert_eq!(BitVector::from("").len(), 0);
        assert_eq!(BitVector::from(String::from("10 01")).to_string(), "10");
        assert_eq!("0110".parse::<BitVector>().unwrap().to_string(), "0110");
        assert_eq!(BitVector::from("1é0").to_string(), "1");
    }

    #[test]
    fn test_init_from_array() {
        assert_eq!(BitVector::from(vec![0, 0, 0, 1, 1, 0]).to_string(), "000110");
        assert_eq!(BitVector::from([false, true, false]).to_string(), "010");
        assert_eq!(
            BitVector::from([None, None, Some("a"), None, Some("bc")]).to_string(),
            "00101"
        );
        assert_eq!(
            BitVector::from(vec![false, false, true, false, true]).to_string(),
            "00101"
        );
        let slice: &[i32] = &[3, 0, -1];
        assert_eq!(BitVector::from(slice).to_string(), "101");
        assert_eq!(BitVector::from(Vec::<bool>::new()).len(), 0);
    }

    #[test]
    fn test_init_from_floats() {
        assert_eq!(BitVector::from(vec![0.0f64, 1.5, 0.0]).to_string(), "111");
        assert_eq!(BitVector::from([None, Some(0.0f32), None]).to_string(), "010");
        let mut bv = BitVector::new(2);
        bv.set(1, 0.0f64).unwrap();
        assert_eq!(bv.to_string(), "01");
    }

    #[test]
    fn test_init_from_nested() {
        let values: Vec<Option<Vec<&str>>> =
            vec![None, None, Some(vec!["a"]), None, Some(vec!["b", "c"]), Some(vec![])];
        assert_eq!(BitVector::from(values).to_string(), "001011");
    }

    #[test]
    fn test_from_iter() {
        let bv: BitVector = (0..20).map(|i| i % 3 == 0).collect();
        assert_eq!(bv.to_string(), "10010010010010010010");
        let bv: BitVector = (0u8..4).collect();
        assert_eq!(bv.to_string(), "0111");
    }

    #[test]
    fn test_round_trips() {
        let bv = BitVector::from("0100110101110");
        assert_eq!(BitVector::from(bv.to_string()), bv);
        assert_eq!(BitVector::from(bv.to_vec()), bv);
    }

    #[test]
    fn test_as_raw_slice() {
        let bv = BitVector::from("101");
        assert_eq!(bv.as_raw_slice(), &[0b1010_0000]);
        assert!(BitVector::new(0).as_raw_slice().is_empty());
    }

    #[test]
    fn test_bitvec_macro() {
        let bv = bitvector!();
        assert_eq!(bv.len(), 0);
        let bv = bitvector![1, 0, 1, 1];
        assert_eq!(bv.to_string(), "1011");
        let bv = bitvector![true, false,];
        assert_eq!(bv.to_string(), "10");
        let bv = bitvector![1; 100];
        assert_eq!(bv.len(), 100);
        assert_eq!(bv.total_set(), 100);
        let bv = bitvector![0; 9];
        assert_eq!(bv, BitVector::new(9));
    }

    #[test]
    fn test_default() {
        assert_eq!(BitVector::default(), BitVector::new(0));
    }
}
