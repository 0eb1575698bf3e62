//! Crate-wide error taxonomy
//!
//! Every failure aborts its call as a whole; the variant names the rule
//! that was violated. Nothing is retried internally.

use crate::registry::IndividualId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The system is in its paused state; no entry point may mutate.
    #[error("breeding is paused")]
    Paused,

    /// Both mate lists were empty.
    #[error("breed: no mates supplied")]
    NoMates,

    /// The mate lists differ in length; every mate A needs a mate B.
    #[error("breed: mates not all paired")]
    MatesNotPaired,

    /// A pair named the same individual on both sides.
    #[error("breed: individual {0} cannot breed with itself")]
    SelfMating(IndividualId),

    /// Caller lacks capability over one of the mate A ids.
    #[error("breed: mate As not all present for caller")]
    MateAsNotPresent,

    /// Caller lacks capability over one of the mate B ids.
    #[error("breed: mate Bs not all present for caller")]
    MateBsNotPresent,

    /// `mint_to` was handed an empty conception list.
    #[error("mint: no conceptions supplied")]
    NoConceptions,

    /// Lookup of an id the registry has never assigned.
    #[error("individual {0} not found")]
    NotFound(IndividualId),
}

pub type Result<T> = std::result::Result<T, Error>;
