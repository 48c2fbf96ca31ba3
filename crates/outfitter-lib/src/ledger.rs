//! Resource ledger: attribute totals across a build.
//!
//! Every "total X" or "free X" figure in the crate goes through these
//! functions so that one counting rule applies everywhere: the hull's base
//! value plus each outfit's signed contribution times its amount.

use crate::ship::{Attribute, Build, OutfitId};

/// Net value of `attribute` across the build.
pub fn attribute(build: &Build, attribute: Attribute) -> f64 {
    build
        .outfits
        .iter()
        .fold(build.hull.attribute(attribute), |total, set| {
            total + f64::from(set.amount) * set.outfit.attribute(attribute)
        })
}

/// Hull value plus positive outfit contributions only.
///
/// For a capacity such as outfit space this is the total provided by the hull
/// and any expansions, ignoring what other outfits consume.
pub fn provided_attribute(build: &Build, attribute: Attribute) -> f64 {
    build
        .outfits
        .iter()
        .fold(build.hull.attribute(attribute), |total, set| {
            let value = set.outfit.attribute(attribute);
            if value > 0.0 {
                total + f64::from(set.amount) * value
            } else {
                total
            }
        })
}

/// Largest single-outfit value of `attribute`, or zero with no outfits.
pub fn max_outfit_attribute(build: &Build, attribute: Attribute) -> f64 {
    build
        .outfits
        .iter()
        .map(|set| set.outfit.attribute(attribute))
        .fold(0.0, f64::max)
}

/// Storage available for the ammunition pool keyed by `ammo`.
pub fn ammo_capacity(build: &Build, ammo: &OutfitId) -> i64 {
    build
        .outfits
        .iter()
        .filter_map(|set| {
            let (pool, per_unit) = set.outfit.storage_pool()?;
            (pool == ammo).then(|| i64::from(set.amount) * per_unit as i64)
        })
        .sum()
}

/// Units of `ammo` currently carried.
pub fn ammo_stock(build: &Build, ammo: &OutfitId) -> u32 {
    build.amount_of(ammo)
}

/// Distinct ammunition pools referenced by the build, in first-seen order.
///
/// A pool is referenced by any outfit naming it as ammo (launchers, racks,
/// guns that fire it) and by carried ammunition itself.
pub fn ammo_types(build: &Build) -> Vec<OutfitId> {
    let mut pools: Vec<OutfitId> = Vec::new();
    for set in &build.outfits {
        let referenced = set
            .outfit
            .ammo
            .as_ref()
            .or_else(|| set.outfit.ammunition_pool());
        if let Some(pool) = referenced {
            if !pools.contains(pool) {
                pools.push(pool.clone());
            }
        }
    }
    pools
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ship::{Build, Hull, Outfit, OutfitSet};

    fn hull() -> Hull {
        serde_json::from_value(serde_json::json!({
            "id": "h", "name": "Hull", "outfit_space": 100, "mass": 50
        }))
        .unwrap()
    }

    fn outfit(value: serde_json::Value) -> Outfit {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn sums_hull_and_signed_outfit_contributions() {
        let build = Build::new("b", "B", hull()).with_outfits(vec![
            OutfitSet::new(outfit(serde_json::json!({"id": "a", "name": "A", "outfit_space": -30})), 2),
            OutfitSet::new(outfit(serde_json::json!({"id": "x", "name": "X", "outfit_space": 15})), 1),
        ]);
        assert_eq!(attribute(&build, Attribute::OutfitSpace), 100.0 - 60.0 + 15.0);
        assert_eq!(provided_attribute(&build, Attribute::OutfitSpace), 115.0);
        assert_eq!(attribute(&build, Attribute::Thrust), 0.0);
    }

    #[test]
    fn max_outfit_attribute_ignores_amounts() {
        let build = Build::new("b", "B", hull()).with_outfits(vec![
            OutfitSet::new(outfit(serde_json::json!({"id": "hd", "name": "HD", "jump_fuel": 100})), 3),
            OutfitSet::new(outfit(serde_json::json!({"id": "jd", "name": "JD", "jump_fuel": 200})), 1),
        ]);
        assert_eq!(max_outfit_attribute(&build, Attribute::JumpFuel), 200.0);
    }

    #[test]
    fn ammo_pool_counts_only_storage_providers() {
        let build = Build::new("b", "B", hull()).with_outfits(vec![
            OutfitSet::new(
                outfit(serde_json::json!({"id": "l", "name": "L", "ammo": "m", "ammo_capacity": 20})),
                2,
            ),
            OutfitSet::new(
                outfit(serde_json::json!({"id": "m", "name": "M", "category": "Ammunition", "ammo_capacity": -1})),
                7,
            ),
        ]);
        let pool = OutfitId::new("m");
        assert_eq!(ammo_capacity(&build, &pool), 40);
        assert_eq!(ammo_stock(&build, &pool), 7);
        assert_eq!(ammo_types(&build), vec![pool]);
    }
}
