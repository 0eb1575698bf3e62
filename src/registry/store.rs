//! Append-only registry of individuals
//!
//! An explicit, owned store: the breeding engine mutates it by strict
//! append, the kinship resolver only reads it. `create` never validates;
//! callers are responsible for the inputs they hand over.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::registry::{Age, Individual, IndividualId, OwnerId};

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Registry {
    individuals: Vec<Individual>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new individual and return its id. Ids are the insertion
    /// order, so `total_count` is always the next id to be assigned.
    pub fn create(
        &mut self,
        owner: OwnerId,
        mum_id: Option<IndividualId>,
        dad_id: Option<IndividualId>,
        generation: u64,
        birth_time: i64,
    ) -> IndividualId {
        let id = IndividualId(self.individuals.len() as u64);
        self.individuals.push(Individual {
            id,
            mum_id,
            dad_id,
            age: Age {
                generation,
                birth_time,
            },
            owner,
        });
        id
    }

    pub fn get(&self, id: IndividualId) -> Result<&Individual> {
        self.individuals
            .get(id.0 as usize)
            .ok_or(Error::NotFound(id))
    }

    /// Number of individuals ever created.
    pub fn total_count(&self) -> u64 {
        self.individuals.len() as u64
    }

    pub fn iter(&self) -> impl Iterator<Item = &Individual> {
        self.individuals.iter()
    }

    /// Whether the two ids are recorded as mum and dad (either order) of
    /// any existing individual.
    pub fn were_partners(&self, a: IndividualId, b: IndividualId) -> bool {
        self.individuals.iter().any(|ind| {
            (ind.mum_id == Some(a) && ind.dad_id == Some(b))
                || (ind.mum_id == Some(b) && ind.dad_id == Some(a))
        })
    }
}
