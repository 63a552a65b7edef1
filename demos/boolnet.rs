//! A random boolean network. Every bit of the state has two neighbor
//! bits and an operation, all chosen at random. At each step every bit
//! is set by applying its operation to its neighbors in the previous
//! state. Such networks always fall into a cyclic or fixed point
//! attractor.
//!
//! ```text
//! cargo run --example boolnet
//! ```

use bitarray::collections::BitVector;
use rand::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Op {
    And,
    Or,
    Xor,
}

struct Update {
    op: Op,
    left: isize,
    right: isize,
}

pub struct BoolNet {
    state: BitVector,
    updates: Vec<Update>,
}

impl BoolNet {
    pub fn new(size: usize) -> BoolNet {
        let mut rng = thread_rng();
        let state: BitVector = (0..size).map(|_| rng.gen::<bool>()).collect();
        let updates = (0..size)
            .map(|_| Update {
                op: [Op::And, Op::Or, Op::Xor][rng.gen_range(0..3)],
                left: rng.gen_range(0..size as isize),
                right: rng.gen_range(0..size as isize),
            })
            .collect();
        BoolNet { state, updates }
    }

    pub fn state(&self) -> &BitVector {
        &self.state
    }

    pub fn step(&mut self) -> &BitVector {
        let old = self.state.clone();
        for (index, update) in self.updates.iter().enumerate() {
            let left = old[update.left];
            let right = old[update.right];
            let bit = match update.op {
                Op::And => left & right,
                Op::Or => left | right,
                Op::Xor => left ^ right,
            };
            self.state
                .set(index as isize, bit)
                .expect("update index below state length");
        }
        &self.state
    }

    pub fn run(&mut self, steps: usize) {
        println!("{}", self.state());
        for _ in 0..steps {
            println!("{}", self.step());
        }
    }
}

fn main() {
    BoolNet::new(80).run(23);
}
