//! Fertility and the pseudo-random fertilisation oracle
//!
//! Fertility decays with parental generation; the fertilisation draw is a
//! deterministic function of public inputs, so any observer can recompute
//! the outcome after the fact. This is a game mechanic, not a security
//! boundary; the seed hash (Sha256) only has to be fixed and well known.

use log::debug;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::registry::IndividualId;

/// Fertility at generation 0 + 0.
pub const BASE_FERTILITY_PERCENT: u64 = 80;
/// Floor below which fertility never drops.
pub const MIN_FERTILITY_PERCENT: u64 = 5;
/// Decimal digits of the windowed seed value.
pub const SEED_DIGITS: u32 = 18;

/// Probability threshold (0-100) that one mate's draw succeeds.
///
/// `max(80 - (gen_a + gen_b) / 2, 5)`, integer division.
pub fn fertility_percent(gen_a: u64, gen_b: u64) -> u64 {
    BASE_FERTILITY_PERCENT
        .saturating_sub((gen_a + gen_b) / 2)
        .max(MIN_FERTILITY_PERCENT)
}

/// Public inputs a pairing's randomness is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedInput {
    /// Environment-clock sample at the moment of the breed call.
    pub clock_sample: i64,
    pub mate_a: IndividualId,
    pub mate_b: IndividualId,
    /// Registry count snapshotted at call time, before any mint.
    pub minted_count: u64,
    /// Position of this pair within a batch call; keeps pairs of one call
    /// from colliding on identical randomness.
    pub pair_index: u64,
}

/// Fertilisation decision per mate, independent draws from one seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fertilisation {
    pub mate_a: bool,
    pub mate_b: bool,
}

impl Fertilisation {
    pub const BOTH: Fertilisation = Fertilisation {
        mate_a: true,
        mate_b: true,
    };

    pub fn count(&self) -> u64 {
        self.mate_a as u64 + self.mate_b as u64
    }
}

/// Decides fertilisation for one mate pair. Isolated behind a trait so a
/// deployment can substitute a stronger randomness source.
pub trait FertilityOracle {
    fn draw(&self, input: &SeedInput, fertility: u64) -> Fertilisation;
}

/// The default oracle: hash the summed public inputs, window the digest
/// to a fixed decimal width, read two two-digit chances off the low end.
#[derive(Debug, Default, Clone, Copy)]
pub struct HashOracle;

impl HashOracle {
    /// Windowed seed: `(sha256(sum) mod 10^18) + 10^18`, guaranteeing a
    /// fixed-width decimal representation whatever the digest's magnitude.
    pub fn windowed_seed(input: &SeedInput) -> u64 {
        let sum = (input.clock_sample as u64)
            .wrapping_add(input.mate_a.0)
            .wrapping_add(input.mate_b.0)
            .wrapping_add(input.minted_count)
            .wrapping_add(input.pair_index);
        let digest = Sha256::digest(sum.to_le_bytes());
        debug!("seed sum {sum} digest {}", hex::encode(&digest));

        // Digest as a big-endian integer, reduced byte by byte. The
        // accumulator stays below 10^18 * 256 + 255, which needs u128.
        let modulus: u128 = 10u128.pow(SEED_DIGITS);
        let mut acc: u128 = 0;
        for byte in digest {
            acc = (acc * 256 + byte as u128) % modulus;
        }
        acc as u64 + 10u64.pow(SEED_DIGITS)
    }

    /// The two independent two-digit chances: last two decimal digits for
    /// mate A, the next two for mate B.
    pub fn chances(windowed: u64) -> (u64, u64) {
        (windowed % 100, (windowed / 100) % 100)
    }
}

impl FertilityOracle for HashOracle {
    fn draw(&self, input: &SeedInput, fertility: u64) -> Fertilisation {
        let windowed = Self::windowed_seed(input);
        let (chance_a, chance_b) = Self::chances(windowed);
        let outcome = Fertilisation {
            mate_a: chance_a < fertility,
            mate_b: chance_b < fertility,
        };
        debug!(
            "draw {}x{} pair {}: chances ({chance_a}, {chance_b}) vs fertility {fertility} -> {outcome:?}",
            input.mate_a, input.mate_b, input.pair_index
        );
        outcome
    }
}
