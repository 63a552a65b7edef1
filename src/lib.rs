//! A fixed length array of bits packed eight to a byte with indexed
//! access, slicing, concatenation and bulk bit operations.
//!
//! ```
//! use bitarray::collections::BitVector;
//!
//! let mut bv = BitVector::new(10);
//! bv.set_bit(1).unwrap();
//! bv.set_bit(5).unwrap();
//! assert_eq!(bv.to_string(), "0100010000");
//! assert_eq!(bv.total_set(), 2);
//! ```

/// Data structures that implement various collections that are
/// designed for performance
pub mod collections {
    /// This module contains traits and structs specific to the [`BitVector`](BitVector)
    pub mod bitvec {
        /// The error returned when a [`BitVector`](../struct.BitVector.html)
        /// cannot be created or a bit cannot be written.
        pub use bitarray_core::bitvec::error::BitVectorError;
        /// An immutable iterator over the bits of the
        /// [`BitVector`](../struct.BitVector.html).
        pub use bitarray_core::bitvec::iter::Iter;
        /// A range of bit positions that may be used to slice a
        /// [`BitVector`](../struct.BitVector.html).
        pub use bitarray_core::bitvec::range::BitRange;
        /// Values that can be coerced to a single bit.
        pub use bitarray_core::bitvec::truthy::Truthy;
    }

    pub use bitarray_core::bitvec::bitvec::BitVector;
    pub use bitarray_core::bitvector;
}
