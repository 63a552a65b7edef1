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

//! Core implementation of the [`BitVector`](bitvec::bitvec::BitVector)
//! collection. Use the types through the `bitarray` crate.

pub mod bitvec;
