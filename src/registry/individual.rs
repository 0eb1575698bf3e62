//! Individual — the sole persistent entity
//!
//! Every individual knows where it came from: parent ids (or none, for
//! founders), a generation number, and the clock sample at its creation.
//! Parent references are explicit options; the first founder's id 0 can
//! never be mistaken for "unknown parent".

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sequential registry id, assigned from 0 and never reused.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct IndividualId(pub u64);

impl fmt::Display for IndividualId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Opaque identity supplied by the external ownership collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnerId(pub String);

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OwnerId {
    fn from(s: &str) -> Self {
        OwnerId(s.to_string())
    }
}

/// Generation and birth time, nested as in the read surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Age {
    /// 0 for founders, else one above the elder parent.
    pub generation: u64,
    /// Environment-clock sample captured at creation (unix seconds).
    pub birth_time: i64,
}

/// A registry entry. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Individual {
    pub id: IndividualId,
    /// Mother, if recorded. `None` marks a founder-side unknown.
    pub mum_id: Option<IndividualId>,
    /// Father, if recorded.
    pub dad_id: Option<IndividualId>,
    pub age: Age,
    pub owner: OwnerId,
}

impl Individual {
    /// Founders carry no recorded parents at all.
    pub fn is_founder(&self) -> bool {
        self.mum_id.is_none() && self.dad_id.is_none()
    }
}

/// Provenance of a prospective or actual offspring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conception {
    pub generation: u64,
    pub mum_id: Option<IndividualId>,
    pub dad_id: Option<IndividualId>,
}

impl Conception {
    /// A generation-0 conception with no recorded parents.
    pub fn founder() -> Self {
        Self {
            generation: 0,
            mum_id: None,
            dad_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn founder_conception_has_no_parents() {
        let c = Conception::founder();
        assert_eq!(c.generation, 0);
        assert!(c.mum_id.is_none() && c.dad_id.is_none());
    }

    #[test]
    fn individual_serde_round_trip() {
        let ind = Individual {
            id: IndividualId(3),
            mum_id: Some(IndividualId(0)),
            dad_id: Some(IndividualId(1)),
            age: Age {
                generation: 1,
                birth_time: 1_650_000_000,
            },
            owner: OwnerId::from("keeper-1"),
        };
        let json = serde_json::to_string(&ind).unwrap();
        let back: Individual = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ind);
    }

    #[test]
    fn display_forms() {
        assert_eq!(IndividualId(7).to_string(), "#7");
        assert_eq!(OwnerId::from("k").to_string(), "k");
    }
}
