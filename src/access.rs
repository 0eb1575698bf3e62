//! Authorization and pause gating
//!
//! Ownership bookkeeping lives outside this core; the engine only consumes
//! a capability predicate ("may this caller act on this individual?") and
//! an active/paused flag. Both arrive through one injected trait object.

use crate::registry::{IndividualId, OwnerId, Registry};

pub trait AccessControl {
    /// Whether `caller` may act on the individual `id`.
    fn is_authorized(&self, registry: &Registry, caller: &OwnerId, id: IndividualId) -> bool;

    /// Whether the system is currently paused. Checked before any mutation.
    fn is_paused(&self) -> bool {
        false
    }
}

/// Capability = recorded ownership, plus a settable pause flag.
#[derive(Debug, Default, Clone)]
pub struct OwnerAccess {
    paused: bool,
}

impl OwnerAccess {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn unpause(&mut self) {
        self.paused = false;
    }
}

impl AccessControl for OwnerAccess {
    fn is_authorized(&self, registry: &Registry, caller: &OwnerId, id: IndividualId) -> bool {
        registry.get(id).map(|ind| &ind.owner == caller).unwrap_or(false)
    }

    fn is_paused(&self) -> bool {
        self.paused
    }
}

/// Everything allowed, never paused. For demos and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct AllowAll;

impl AccessControl for AllowAll {
    fn is_authorized(&self, _registry: &Registry, _caller: &OwnerId, _id: IndividualId) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_access_requires_recorded_ownership() {
        let mut reg = Registry::new();
        let id = reg.create(OwnerId::from("alice"), None, None, 0, 0);
        let access = OwnerAccess::new();
        assert!(access.is_authorized(&reg, &OwnerId::from("alice"), id));
        assert!(!access.is_authorized(&reg, &OwnerId::from("bob"), id));
        // Unknown ids grant nothing.
        assert!(!access.is_authorized(&reg, &OwnerId::from("alice"), IndividualId(99)));
    }

    #[test]
    fn pause_flag_toggles() {
        let mut access = OwnerAccess::new();
        assert!(!access.is_paused());
        access.pause();
        assert!(access.is_paused());
        access.unpause();
        assert!(!access.is_paused());
    }
}
