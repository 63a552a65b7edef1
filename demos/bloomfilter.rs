//! A bloom filter built on a [`BitVector`]. Loads a word list and then
//! answers membership queries read from stdin, one word per line.
//!
//! ```text
//! cargo run --example bloomfilter [/path/to/words]
//! ```

use bitarray::collections::BitVector;
use std::collections::hash_map::DefaultHasher;
use std::env;
use std::fs::File;
use std::hash::{Hash, Hasher};
use std::io::{self, BufRead, BufReader, Write};

pub struct BloomFilter {
    bits: BitVector,
    hashes: usize,
}

impl BloomFilter {
    /// Panics if `size` is zero.
    pub fn new(size: usize, hashes: usize) -> BloomFilter {
        assert!(size > 0, "a bloom filter needs at least one bit");
        BloomFilter {
            bits: BitVector::new(size),
            hashes: hashes.max(3),
        }
    }

    pub fn add(&mut self, word: &str) {
        for index in self.indices(word) {
            self.bits
                .set_bit(index as isize)
                .expect("index below filter size");
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.indices(word)
            .into_iter()
            .all(|index| self.bits.get(index as isize) == Some(true))
    }

    /// Derives `hashes` bit positions from two base hashes with
    /// `h1 + i * h2`. `h2` is forced odd so the positions never all
    /// collapse onto `h1`.
    fn indices(&self, word: &str) -> Vec<usize> {
        let size = self.bits.len() as u64;
        let h1 = hash_with(word, 0) % size;
        let h2 = (hash_with(word, 0x9e37_79b9_7f4a_7c15) % size) | 1;

        let mut indices = vec![h1 as usize, h2 as usize];
        for i in 1..(self.hashes as u64 - 1) {
            indices.push((h1.wrapping_add(i.wrapping_mul(h2)) % size) as usize);
        }
        indices
    }
}

fn hash_with(word: &str, seed: u64) -> u64 {
    let mut hasher = DefaultHasher::new();
    seed.hash(&mut hasher);
    word.hash(&mut hasher);
    hasher.finish()
}

fn main() -> io::Result<()> {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| String::from("/usr/share/dict/words"));

    // 1,417,185 bits and 10 hashes give a false positive rate of
    // about 0.001 for a 100k word dictionary.
    let mut filter = BloomFilter::new(1_417_185, 10);

    print!("Loading {}...", path);
    io::stdout().flush()?;
    let reader = BufReader::new(File::open(&path)?);
    let mut count = 0;
    for line in reader.lines() {
        filter.add(line?.trim_end());
        count += 1;
    }
    println!("done ({} words, {} bits set)", count, filter.bits.total_set());

    println!("Enter words to look up, ctrl-d to quit.");
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("Word: ");
        io::stdout().flush()?;
        match lines.next() {
            Some(line) => println!("In dictionary: {}", filter.contains(line?.trim_end())),
            None => break,
        }
    }
    println!();
    Ok(())
}
