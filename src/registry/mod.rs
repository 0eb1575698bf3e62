//! Entity registry — individuals, ids, and the append-only store.

mod individual;
mod store;

pub use individual::{Age, Conception, Individual, IndividualId, OwnerId};
pub use store::Registry;
