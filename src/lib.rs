//! Broodline — a generational creature registry
//!
//! Individuals are minted, bred in pairs with a deterministic (publicly
//! recomputable) fertilisation draw, and queried for one of 20 kinship
//! labels via bounded ancestor-path classification.

pub mod access;
pub mod breeding;
pub mod clock;
pub mod error;
pub mod kinship;
pub mod registry;
pub mod storage;

pub use access::{AccessControl, AllowAll, OwnerAccess};
pub use breeding::{BirthRecord, BreedOutcome, BreedingEngine, HashOracle, MatingRecord};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Error, Result};
pub use kinship::{relationship_between, Relationship};
pub use registry::{Conception, Individual, IndividualId, OwnerId, Registry};
pub use storage::HerdFile;
