//! Observable outcomes of a breeding call
//!
//! One mating record per pair, always; one birth record per call, only when
//! at least one offspring was minted ("no event" rather than "empty event").

use serde::{Deserialize, Serialize};

use crate::registry::{Conception, IndividualId, OwnerId};

/// Who mated and whether each side was fertilised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatingRecord {
    pub mate_a: IndividualId,
    pub mate_b: IndividualId,
    pub mate_a_fertilised: bool,
    pub mate_b_fertilised: bool,
    /// Provenance of this pair's offspring, in minting order.
    pub conceptions: Vec<Conception>,
}

/// Who was born across the whole call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthRecord {
    pub baby_ids: Vec<IndividualId>,
    /// Parallel to `baby_ids`.
    pub provenance: Vec<Conception>,
    pub owner: OwnerId,
}

/// Aggregate result of one breed call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreedOutcome {
    pub matings: Vec<MatingRecord>,
    pub births: Option<BirthRecord>,
}

impl BreedOutcome {
    pub fn babies_born(&self) -> u64 {
        self.births
            .as_ref()
            .map(|b| b.baby_ids.len() as u64)
            .unwrap_or(0)
    }
}
