#[cfg(test)]
#[path = "../../tests/unit/utils/random_test.rs"]
mod random_test;

use rand::prelude::*;

/// Specifies underlying random generator type.
pub type RandomGen = SmallRng;

/// Creates a random generator: a seeded one produces the same sequence on every run.
pub fn create_random_gen(seed: Option<u64>) -> RandomGen {
    match seed {
        Some(seed) => RandomGen::seed_from_u64(seed),
        None => RandomGen::from_entropy(),
    }
}

/// Derives `count` independent random streams from the `source` one.
/// The result depends only on the `source` state, so it can be used to distribute work across
/// threads keeping results reproducible.
pub fn fork_random_gens(source: &mut RandomGen, count: usize) -> Vec<RandomGen> {
    (0..count).map(|_| RandomGen::seed_from_u64(source.gen())).collect()
}
