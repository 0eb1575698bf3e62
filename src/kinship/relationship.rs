//! The 20-label kinship enumeration.

use serde::{Deserialize, Serialize};

/// Blood or partner relationship of one individual to another.
///
/// Read directionally: `Mother` means "the queried individual is the
/// mother of the other", `Child` means "is a child of the other".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relationship {
    None,
    /// The two are recorded together as parents of some individual but
    /// share no blood link within the search depth.
    ExPartner,
    Oneself,
    Mother,
    Father,
    Child,
    /// Shares both parental links.
    FullSibling,
    /// Shares exactly one parental link.
    HalfSibling,
    GrandmotherOnMumsSide,
    GrandmotherOnDadsSide,
    GrandfatherOnMumsSide,
    GrandfatherOnDadsSide,
    /// Side not distinguished in the descending direction.
    Grandchild,
    UncleAuntOnMumsSide,
    UncleAuntOnDadsSide,
    NephewNeice,
    GrandNephewNeice,
    FirstCousin,
    FirstCousinOnceRemoved,
    FirstCousinTwiceRemoved,
}
