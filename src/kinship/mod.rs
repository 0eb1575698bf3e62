//! Kinship — the relationship enumeration and its resolver.

mod relationship;
mod resolver;

pub use relationship::Relationship;
pub use resolver::relationship_between;
