//! Breeding — fertility oracle, validation, and offspring minting.

mod engine;
mod events;
mod fertility;

pub use engine::BreedingEngine;
pub use events::{BirthRecord, BreedOutcome, MatingRecord};
pub use fertility::{
    fertility_percent, Fertilisation, FertilityOracle, HashOracle, SeedInput,
    BASE_FERTILITY_PERCENT, MIN_FERTILITY_PERCENT, SEED_DIGITS,
};
