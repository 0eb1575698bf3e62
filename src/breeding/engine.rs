//! Breeding engine
//!
//! Validates a breeding request, consults the fertility oracle per mate
//! pair, and mints offspring through the registry. All validation and
//! lookups happen before the first mint, so a failing call leaves the
//! registry untouched, including across every pair of a batch.

use log::{info, warn};

use crate::access::AccessControl;
use crate::breeding::events::{BirthRecord, BreedOutcome, MatingRecord};
use crate::breeding::fertility::{
    fertility_percent, Fertilisation, FertilityOracle, HashOracle, SeedInput,
};
use crate::clock::Clock;
use crate::error::{Error, Result};
use crate::registry::{Conception, IndividualId, OwnerId, Registry};

pub struct BreedingEngine<A, C, O = HashOracle> {
    access: A,
    clock: C,
    oracle: O,
}

impl<A, C> BreedingEngine<A, C, HashOracle>
where
    A: AccessControl,
    C: Clock,
{
    pub fn new(access: A, clock: C) -> Self {
        Self::with_oracle(access, clock, HashOracle)
    }
}

impl<A, C, O> BreedingEngine<A, C, O>
where
    A: AccessControl,
    C: Clock,
    O: FertilityOracle,
{
    pub fn with_oracle(access: A, clock: C, oracle: O) -> Self {
        Self {
            access,
            clock,
            oracle,
        }
    }

    pub fn access(&self) -> &A {
        &self.access
    }

    pub fn access_mut(&mut self) -> &mut A {
        &mut self.access
    }

    /// Founder creation entry point: mint one individual per conception,
    /// exactly as described, owned by `owner`.
    pub fn mint_to(
        &self,
        registry: &mut Registry,
        owner: &OwnerId,
        conceptions: &[Conception],
    ) -> Result<Vec<IndividualId>> {
        self.ensure_active()?;
        if conceptions.is_empty() {
            return Err(Error::NoConceptions);
        }
        let birth_time = self.clock.now();
        let ids: Vec<IndividualId> = conceptions
            .iter()
            .map(|c| {
                registry.create(owner.clone(), c.mum_id, c.dad_id, c.generation, birth_time)
            })
            .collect();
        info!("minted {} individual(s) to {owner}", ids.len());
        Ok(ids)
    }

    /// Singular breed form: one mate pair, pseudo-random fertilisation.
    pub fn breed(
        &self,
        registry: &mut Registry,
        caller: &OwnerId,
        mate_a: IndividualId,
        mate_b: IndividualId,
    ) -> Result<BreedOutcome> {
        self.breed_pairs(registry, caller, &[mate_a], &[mate_b])
    }

    /// Batch breed form: mates paired 1:1 across the two lists.
    pub fn breed_pairs(
        &self,
        registry: &mut Registry,
        caller: &OwnerId,
        mate_as: &[IndividualId],
        mate_bs: &[IndividualId],
    ) -> Result<BreedOutcome> {
        let pairs = self.validate(registry, caller, mate_as, mate_bs)?;
        let clock_sample = self.clock.now();
        let minted_count = registry.total_count();

        let outcomes: Vec<Fertilisation> = pairs
            .iter()
            .enumerate()
            .map(|(i, &(a, b, gen_a, gen_b))| {
                let input = SeedInput {
                    clock_sample,
                    mate_a: a,
                    mate_b: b,
                    minted_count,
                    pair_index: i as u64,
                };
                self.oracle.draw(&input, fertility_percent(gen_a, gen_b))
            })
            .collect();

        Ok(self.deliver(registry, caller, &pairs, &outcomes, clock_sample))
    }

    /// Guaranteed-outcome form: identical validation, oracle bypassed,
    /// both mates fertilised. Always mints exactly two offspring.
    pub fn breed_both_mates_fertilised(
        &self,
        registry: &mut Registry,
        caller: &OwnerId,
        mate_a: IndividualId,
        mate_b: IndividualId,
    ) -> Result<BreedOutcome> {
        let pairs = self.validate(registry, caller, &[mate_a], &[mate_b])?;
        let clock_sample = self.clock.now();
        Ok(self.deliver(registry, caller, &pairs, &[Fertilisation::BOTH], clock_sample))
    }

    fn ensure_active(&self) -> Result<()> {
        if self.access.is_paused() {
            warn!("call rejected: breeding is paused");
            return Err(Error::Paused);
        }
        Ok(())
    }

    /// All checks and lookups, in a fixed order, before any mutation.
    /// Returns (mate_a, mate_b, gen_a, gen_b) per pair.
    #[allow(clippy::type_complexity)]
    fn validate(
        &self,
        registry: &Registry,
        caller: &OwnerId,
        mate_as: &[IndividualId],
        mate_bs: &[IndividualId],
    ) -> Result<Vec<(IndividualId, IndividualId, u64, u64)>> {
        self.ensure_active()?;
        if mate_as.is_empty() && mate_bs.is_empty() {
            return Err(Error::NoMates);
        }
        if mate_as.len() != mate_bs.len() {
            return Err(Error::MatesNotPaired);
        }
        for (&a, &b) in mate_as.iter().zip(mate_bs) {
            if a == b {
                return Err(Error::SelfMating(a));
            }
        }
        if !mate_as
            .iter()
            .all(|&id| self.access.is_authorized(registry, caller, id))
        {
            return Err(Error::MateAsNotPresent);
        }
        if !mate_bs
            .iter()
            .all(|&id| self.access.is_authorized(registry, caller, id))
        {
            return Err(Error::MateBsNotPresent);
        }

        mate_as
            .iter()
            .zip(mate_bs)
            .map(|(&a, &b)| {
                let gen_a = registry.get(a)?.age.generation;
                let gen_b = registry.get(b)?.age.generation;
                Ok((a, b, gen_a, gen_b))
            })
            .collect()
    }

    /// Mint the offspring each fertilised side earned and assemble the
    /// mating and birth records. The fertilised mate is the mother.
    fn deliver(
        &self,
        registry: &mut Registry,
        caller: &OwnerId,
        pairs: &[(IndividualId, IndividualId, u64, u64)],
        outcomes: &[Fertilisation],
        clock_sample: i64,
    ) -> BreedOutcome {
        let mut matings = Vec::with_capacity(pairs.len());
        let mut baby_ids = Vec::new();
        let mut provenance = Vec::new();

        for (&(a, b, gen_a, gen_b), outcome) in pairs.iter().zip(outcomes) {
            let child_generation = gen_a.max(gen_b) + 1;
            let mut conceptions = Vec::with_capacity(outcome.count() as usize);
            let sides = [(outcome.mate_a, a, b), (outcome.mate_b, b, a)];
            for &(fertilised, mum, dad) in &sides {
                if !fertilised {
                    continue;
                }
                let conception = Conception {
                    generation: child_generation,
                    mum_id: Some(mum),
                    dad_id: Some(dad),
                };
                let baby = registry.create(
                    caller.clone(),
                    conception.mum_id,
                    conception.dad_id,
                    child_generation,
                    clock_sample,
                );
                conceptions.push(conception);
                baby_ids.push(baby);
                provenance.push(conception);
            }
            matings.push(MatingRecord {
                mate_a: a,
                mate_b: b,
                mate_a_fertilised: outcome.mate_a,
                mate_b_fertilised: outcome.mate_b,
                conceptions,
            });
        }

        let births = if baby_ids.is_empty() {
            None
        } else {
            info!(
                "{} newborn(s) {:?} delivered to {caller}",
                baby_ids.len(),
                baby_ids
            );
            Some(BirthRecord {
                baby_ids,
                provenance,
                owner: caller.clone(),
            })
        };

        BreedOutcome { matings, births }
    }
}
