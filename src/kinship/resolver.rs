//! Relationship resolver — bounded ancestor-path classification
//!
//! From each queried individual, every ancestor path up to three hops is
//! enumerated (a hop is "via mum" or "via dad"). The nearest common
//! ancestor pair, at minimum combined hop length, decides the kinship
//! label; the number of independent minimal pairs separates "full" from
//! "half" relations. Read-only over the registry.

use log::debug;

use crate::error::Result;
use crate::kinship::Relationship;
use crate::registry::{IndividualId, Registry};

/// Ancestry search horizon in generations.
const MAX_DEPTH: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Hop {
    Mum,
    Dad,
}

/// One ancestor reached from a queried individual. `hops[0]` is the first
/// parental link taken; an empty hop list is the individual itself.
#[derive(Debug, Clone)]
struct AncestorPath {
    ancestor: IndividualId,
    hops: Vec<Hop>,
}

impl AncestorPath {
    fn depth(&self) -> usize {
        self.hops.len()
    }
}

/// Enumerate all ancestor paths of `id` up to `MAX_DEPTH`, the individual
/// itself included at depth 0. Depth-indexed loop, never recursive; at
/// most 15 paths.
fn ancestor_paths(registry: &Registry, id: IndividualId) -> Result<Vec<AncestorPath>> {
    let mut paths = vec![AncestorPath {
        ancestor: id,
        hops: Vec::new(),
    }];
    let mut frontier = 0..paths.len();
    for _ in 0..MAX_DEPTH {
        let mut next = Vec::new();
        for i in frontier {
            let path = paths[i].clone();
            let individual = registry.get(path.ancestor)?;
            for (parent, hop) in [
                (individual.mum_id, Hop::Mum),
                (individual.dad_id, Hop::Dad),
            ] {
                if let Some(parent) = parent {
                    let mut hops = path.hops.clone();
                    hops.push(hop);
                    next.push(AncestorPath {
                        ancestor: parent,
                        hops,
                    });
                }
            }
        }
        if next.is_empty() {
            break;
        }
        let start = paths.len();
        paths.extend(next);
        frontier = start..paths.len();
    }
    Ok(paths)
}

/// Classify the kinship of `id_of` to `id_to`.
///
/// Both ids must exist. Inputs are positional, not symmetric: a mother to
/// one side is a child to the other.
pub fn relationship_between(
    registry: &Registry,
    id_of: IndividualId,
    id_to: IndividualId,
) -> Result<Relationship> {
    registry.get(id_of)?;
    registry.get(id_to)?;
    if id_of == id_to {
        return Ok(Relationship::Oneself);
    }

    let of_paths = ancestor_paths(registry, id_of)?;
    let to_paths = ancestor_paths(registry, id_to)?;

    // Nearest common ancestor pairs: minimal combined length, ties at the
    // same total resolved toward the smaller of-side depth. `shared`
    // counts pairs at exactly the chosen split.
    let mut best: Option<((usize, usize), &AncestorPath)> = None;
    let mut shared = 0usize;
    for of_path in &of_paths {
        for to_path in &to_paths {
            if of_path.ancestor != to_path.ancestor {
                continue;
            }
            let split = (of_path.depth() + to_path.depth(), of_path.depth());
            match best {
                Some((b, _)) if split.0 > b.0 || (split.0 == b.0 && split.1 > b.1) => {}
                Some((b, _)) if split == b => shared += 1,
                _ => {
                    best = Some((split, to_path));
                    shared = 1;
                }
            }
        }
    }

    let Some(((total, len_of), to_path)) = best else {
        // No blood link within the horizon; the pair may still have bred.
        return Ok(if registry.were_partners(id_of, id_to) {
            Relationship::ExPartner
        } else {
            Relationship::None
        });
    };
    let len_to = total - len_of;

    let relationship = match (len_of, len_to) {
        (0, 1) => match to_path.hops[0] {
            Hop::Mum => Relationship::Mother,
            Hop::Dad => Relationship::Father,
        },
        (1, 0) => Relationship::Child,
        // Side from the first hop, gender from the second.
        (0, 2) => match (to_path.hops[0], to_path.hops[1]) {
            (Hop::Mum, Hop::Mum) => Relationship::GrandmotherOnMumsSide,
            (Hop::Mum, Hop::Dad) => Relationship::GrandfatherOnMumsSide,
            (Hop::Dad, Hop::Mum) => Relationship::GrandmotherOnDadsSide,
            (Hop::Dad, Hop::Dad) => Relationship::GrandfatherOnDadsSide,
        },
        (2, 0) => Relationship::Grandchild,
        (1, 1) => {
            if shared >= 2 {
                Relationship::FullSibling
            } else {
                Relationship::HalfSibling
            }
        }
        (1, 2) => match to_path.hops[0] {
            Hop::Mum => Relationship::UncleAuntOnMumsSide,
            Hop::Dad => Relationship::UncleAuntOnDadsSide,
        },
        (2, 1) => Relationship::NephewNeice,
        (3, 1) => Relationship::GrandNephewNeice,
        (2, 2) => Relationship::FirstCousin,
        (2, 3) | (3, 2) => Relationship::FirstCousinOnceRemoved,
        (3, 3) => Relationship::FirstCousinTwiceRemoved,
        // (0,3), (3,0) and (1,3): the enumeration carries no label for
        // great-grandparent, great-grandchild or great-uncle lines.
        _ => Relationship::None,
    };
    debug!(
        "relationship {id_of}->{id_to}: split ({len_of},{len_to}) shared {shared} -> {relationship:?}"
    );
    Ok(relationship)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::AllowAll;
    use crate::breeding::BreedingEngine;
    use crate::clock::FixedClock;
    use crate::error::Error;
    use crate::registry::{Conception, OwnerId};

    type Engine = BreedingEngine<AllowAll, FixedClock>;

    fn keeper() -> OwnerId {
        OwnerId::from("keeper")
    }

    /// Mint `n` unrelated founders.
    fn founders(engine: &Engine, registry: &mut Registry, n: usize) -> Vec<IndividualId> {
        engine
            .mint_to(registry, &keeper(), &vec![Conception::founder(); n])
            .unwrap()
    }

    /// One guaranteed double birth: returns (child mothered by `a`,
    /// child mothered by `b`).
    fn offspring(
        engine: &Engine,
        registry: &mut Registry,
        a: IndividualId,
        b: IndividualId,
    ) -> (IndividualId, IndividualId) {
        let outcome = engine
            .breed_both_mates_fertilised(registry, &keeper(), a, b)
            .unwrap();
        let ids = outcome.births.unwrap().baby_ids;
        (ids[0], ids[1])
    }

    struct Fixture {
        registry: Registry,
        // Founders of families 1 (a, b), 2 (c, d) and 3 (d, e).
        a: IndividualId,
        b: IndividualId,
        c: IndividualId,
        d: IndividualId,
        e: IndividualId,
        // Gen-1 children: f/g and p of a&b, h/i of c&d.
        f: IndividualId,
        g: IndividualId,
        h: IndividualId,
        i: IndividualId,
        p: IndividualId,
        // Gen-2 children from family interbreeding.
        j: IndividualId,
        k: IndividualId,
        m: IndividualId,
        x: IndividualId,
        z: IndividualId,
        zz: IndividualId,
        // Gen-3 children, each bred against a late founder.
        t: IndividualId,
        u: IndividualId,
    }

    /// Three interbreeding families, two generations down:
    ///
    /// ```text
    ///     a <---> b        c <---> d        d <---> e
    ///      |     |          |     |          |
    ///     f,p   g,q        h,r   i,s        n
    ///
    ///     f <---> h     g <---> i     g <---> s     c <---> n
    ///      |     |       |     |       |     |       |     |
    ///      j     k       l     m       x     y       z     zz
    ///
    ///     j <---> w        m <---> v         (w, v late founders)
    ///      |                |
    ///      t                u
    /// ```
    fn family_tree() -> Fixture {
        let engine = Engine::new(AllowAll, FixedClock(1_650_000_000));
        let mut registry = Registry::new();
        let ids = founders(&engine, &mut registry, 5);
        let (a, b, c, d, e) = (ids[0], ids[1], ids[2], ids[3], ids[4]);

        let (f, g) = offspring(&engine, &mut registry, a, b);
        let (h, i) = offspring(&engine, &mut registry, c, d);
        let (j, k) = offspring(&engine, &mut registry, f, h);
        let (_l, m) = offspring(&engine, &mut registry, g, i);
        let (n, _o) = offspring(&engine, &mut registry, d, e);
        let (p, _q) = offspring(&engine, &mut registry, a, b);
        let (_r, s) = offspring(&engine, &mut registry, c, d);
        let (x, _y) = offspring(&engine, &mut registry, g, s);
        let (z, zz) = offspring(&engine, &mut registry, c, n);
        let late = founders(&engine, &mut registry, 2);
        let (w, v) = (late[0], late[1]);
        let (t, _) = offspring(&engine, &mut registry, j, w);
        let (u, _) = offspring(&engine, &mut registry, m, v);

        Fixture {
            registry,
            a,
            b,
            c,
            d,
            e,
            f,
            g,
            h,
            i,
            p,
            j,
            k,
            m,
            x,
            z,
            zz,
            t,
            u,
        }
    }

    fn rel(fx: &Fixture, of: IndividualId, to: IndividualId) -> Relationship {
        relationship_between(&fx.registry, of, to).unwrap()
    }

    #[test]
    fn oneself_and_unknown_ids() {
        let fx = family_tree();
        assert_eq!(rel(&fx, fx.a, fx.a), Relationship::Oneself);
        let missing = IndividualId(9_999);
        assert_eq!(
            relationship_between(&fx.registry, fx.a, missing),
            Err(Error::NotFound(missing))
        );
    }

    #[test]
    fn unrelated_founders_are_none_until_they_breed() {
        let engine = Engine::new(AllowAll, FixedClock(7));
        let mut registry = Registry::new();
        let ids = founders(&engine, &mut registry, 2);
        assert_eq!(
            relationship_between(&registry, ids[0], ids[1]).unwrap(),
            Relationship::None
        );
        offspring(&engine, &mut registry, ids[0], ids[1]);
        assert_eq!(
            relationship_between(&registry, ids[0], ids[1]).unwrap(),
            Relationship::ExPartner
        );
        assert_eq!(
            relationship_between(&registry, ids[1], ids[0]).unwrap(),
            Relationship::ExPartner
        );
    }

    #[test]
    fn founders_of_disjoint_families_stay_none() {
        let fx = family_tree();
        assert_eq!(rel(&fx, fx.a, fx.e), Relationship::None);
        assert_eq!(rel(&fx, fx.e, fx.a), Relationship::None);
    }

    #[test]
    fn mother_father_child() {
        let fx = family_tree();
        assert_eq!(rel(&fx, fx.a, fx.f), Relationship::Mother);
        assert_eq!(rel(&fx, fx.f, fx.j), Relationship::Mother);
        assert_eq!(rel(&fx, fx.b, fx.f), Relationship::Father);
        assert_eq!(rel(&fx, fx.h, fx.j), Relationship::Father);
        assert_eq!(rel(&fx, fx.f, fx.a), Relationship::Child);
        assert_eq!(rel(&fx, fx.f, fx.b), Relationship::Child);
    }

    #[test]
    fn grandparents_carry_side_and_gender() {
        let fx = family_tree();
        assert_eq!(rel(&fx, fx.a, fx.j), Relationship::GrandmotherOnMumsSide);
        assert_eq!(rel(&fx, fx.c, fx.j), Relationship::GrandmotherOnDadsSide);
        assert_eq!(rel(&fx, fx.b, fx.j), Relationship::GrandfatherOnMumsSide);
        assert_eq!(rel(&fx, fx.d, fx.j), Relationship::GrandfatherOnDadsSide);
    }

    #[test]
    fn grandchild_is_undistinguished_by_side() {
        let fx = family_tree();
        for grandparent in [fx.a, fx.b, fx.c, fx.d] {
            assert_eq!(rel(&fx, fx.j, grandparent), Relationship::Grandchild);
        }
    }

    #[test]
    fn siblings_full_and_half() {
        let fx = family_tree();
        // Same parents in swapped roles, and same parents across calls.
        assert_eq!(rel(&fx, fx.f, fx.g), Relationship::FullSibling);
        assert_eq!(rel(&fx, fx.f, fx.p), Relationship::FullSibling);
        // One shared parental link only.
        assert_eq!(rel(&fx, fx.h, fx.z), Relationship::HalfSibling);
        assert_eq!(rel(&fx, fx.i, fx.zz), Relationship::HalfSibling);
        assert_eq!(rel(&fx, fx.h, fx.zz), Relationship::HalfSibling);
        assert_eq!(rel(&fx, fx.zz, fx.h), Relationship::HalfSibling);
    }

    #[test]
    fn uncles_and_aunts_carry_the_side() {
        let fx = family_tree();
        assert_eq!(rel(&fx, fx.p, fx.j), Relationship::UncleAuntOnMumsSide);
        assert_eq!(rel(&fx, fx.p, fx.k), Relationship::UncleAuntOnDadsSide);
        assert_eq!(rel(&fx, fx.z, fx.k), Relationship::UncleAuntOnMumsSide);
        assert_eq!(rel(&fx, fx.z, fx.x), Relationship::UncleAuntOnDadsSide);
    }

    #[test]
    fn nephews_and_nieces() {
        let fx = family_tree();
        assert_eq!(rel(&fx, fx.j, fx.p), Relationship::NephewNeice);
        assert_eq!(rel(&fx, fx.k, fx.p), Relationship::NephewNeice);
        assert_eq!(rel(&fx, fx.k, fx.z), Relationship::NephewNeice);
        assert_eq!(rel(&fx, fx.x, fx.z), Relationship::NephewNeice);
    }

    #[test]
    fn first_cousins() {
        let fx = family_tree();
        assert_eq!(rel(&fx, fx.k, fx.m), Relationship::FirstCousin);
        assert_eq!(rel(&fx, fx.j, fx.m), Relationship::FirstCousin);
    }

    #[test]
    fn grand_nephews_and_nieces() {
        // t is three hops from a and b; their child p is one hop.
        let fx = family_tree();
        assert_eq!(rel(&fx, fx.t, fx.p), Relationship::GrandNephewNeice);
    }

    #[test]
    fn first_cousins_once_removed() {
        // m and t's parent j are first cousins, so m sits two hops and t
        // three hops from the shared founders, in either direction.
        let fx = family_tree();
        assert_eq!(rel(&fx, fx.m, fx.t), Relationship::FirstCousinOnceRemoved);
        assert_eq!(rel(&fx, fx.t, fx.m), Relationship::FirstCousinOnceRemoved);
    }

    #[test]
    fn first_cousins_twice_removed() {
        // Children of the first cousins j and m: three hops each to the
        // shared founders.
        let fx = family_tree();
        assert_eq!(rel(&fx, fx.t, fx.u), Relationship::FirstCousinTwiceRemoved);
        assert_eq!(rel(&fx, fx.u, fx.t), Relationship::FirstCousinTwiceRemoved);
    }

    #[test]
    fn unnamed_deep_splits_resolve_to_none() {
        let fx = family_tree();
        // Great-grandparent and great-grandchild lines.
        assert_eq!(rel(&fx, fx.a, fx.t), Relationship::None);
        assert_eq!(rel(&fx, fx.t, fx.a), Relationship::None);
        // Great-uncle line: p is one hop, t three hops, from a and b.
        assert_eq!(rel(&fx, fx.p, fx.t), Relationship::None);
    }

    #[test]
    fn blood_relation_wins_over_ex_partner() {
        // f and h bred together, but f's relationship to h's child k is
        // resolved by ancestry first; f to h itself has no common
        // ancestor, so their shared offspring makes them ex-partners.
        let fx = family_tree();
        assert_eq!(rel(&fx, fx.f, fx.h), Relationship::ExPartner);
        assert_eq!(rel(&fx, fx.f, fx.k), Relationship::Father);
    }

    #[test]
    fn ancestor_paths_are_depth_bounded() {
        let engine = Engine::new(AllowAll, FixedClock(3));
        let mut registry = Registry::new();
        let ids = founders(&engine, &mut registry, 2);
        let (mut a, mut b) = (ids[0], ids[1]);
        // Five generations straight down.
        for _ in 0..5 {
            let (child_a, child_b) = offspring(&engine, &mut registry, a, b);
            a = child_a;
            b = child_b;
        }
        let paths = ancestor_paths(&registry, a).unwrap();
        assert!(paths.iter().all(|p| p.depth() <= MAX_DEPTH));
        // Full binary ancestry within the horizon: 1 + 2 + 4 + 8.
        assert_eq!(paths.len(), 15);
    }

    #[test]
    fn beyond_the_horizon_is_none() {
        let engine = Engine::new(AllowAll, FixedClock(3));
        let mut registry = Registry::new();
        let ids = founders(&engine, &mut registry, 2);
        let (top_a, top_b) = (ids[0], ids[1]);
        let (mut a, mut b) = (top_a, top_b);
        for _ in 0..4 {
            let (child_a, child_b) = offspring(&engine, &mut registry, a, b);
            a = child_a;
            b = child_b;
        }
        // Four hops apart: the founder sits outside the depth-3 horizon,
        // so no common ancestor is found in either direction.
        assert_eq!(
            relationship_between(&registry, top_a, a).unwrap(),
            Relationship::None
        );
        assert_eq!(
            relationship_between(&registry, a, top_a).unwrap(),
            Relationship::None
        );
    }
}
