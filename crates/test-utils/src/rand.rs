use rand::{
    Rng, RngCore, SeedableRng,
    distr::{Distribution, StandardUniform},
    rngs::SmallRng,
    seq::SliceRandom,
};

use super::{Felt, WORD_SIZE, Word};

// SEEDED GENERATORS
// ================================================================================================

/// Mutates a seed and generates a word deterministically.
pub fn seeded_word(seed: &mut u64) -> Word {
    let mut rng = SmallRng::seed_from_u64(*seed);
    *seed = rng.next_u64();
    let elements: [Felt; WORD_SIZE] = core::array::from_fn(|_| Felt::new(rng.next_u64()));
    Word::new(elements)
}

// RANDOM VALUE GENERATION
// ================================================================================================

/// Returns a single random value of the specified type.
fn rand_value<R>() -> R
where
    StandardUniform: Distribution<R>,
{
    rand::rng().sample(StandardUniform)
}

/// Returns `n` distinct random words.
pub fn rand_words(n: usize) -> Vec<Word> {
    let mut seed: u64 = rand_value();
    (0..n).map(|_| seeded_word(&mut seed)).collect()
}

// SHUFFLING
// ================================================================================================

/// Randomly shuffles slice elements.
pub fn shuffle<T>(values: &mut [T]) {
    values.shuffle(&mut rand::rng());
}
