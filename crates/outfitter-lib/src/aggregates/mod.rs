//! Aggregate performance statistics derived from a build.
//!
//! Everything here is a read-only projection of ledger totals, grouped the
//! way a loadout summary presents them:
//!
//! - [`Defense`] - hit points, regeneration and anti-missile coverage
//! - [`Mobility`] - speed, acceleration, turning, mass and fuel
//! - [`Missions`] - cargo, crew and bunks
//! - [`Space`] - free and total slot capacities
//! - [`Heat`] and [`Energy`] - idle and in-action balances
//! - [`Offense`] - damage rates and ammunition pools
//!
//! Ratios never produce NaN or infinity. A degenerate denominator (zero,
//! negative or non-finite) yields zero and is logged as a data problem.

mod heat;
mod mobility;
mod space;

use serde::Serialize;
use tracing::warn;

use crate::ledger;
use crate::ship::{Attribute, Build, OutfitId};

pub use heat::{cooling_efficiency, Energy, Heat};
pub use mobility::Mobility;
pub use space::{Capacity, Space};

/// Every aggregate group for one build.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateBundle {
    pub defense: Defense,
    pub mobility: Mobility,
    pub missions: Missions,
    pub space: Space,
    pub heat: Heat,
    pub energy: Energy,
    pub offense: Offense,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Defense {
    pub hull: f64,
    pub shields: f64,
    pub total_hp: f64,
    pub hull_regen: f64,
    pub shield_regen: f64,
    pub anti_missile_dps: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Missions {
    pub cargo_space: f64,
    pub required_crew: f64,
    pub bunks: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Offense {
    pub shield_dps: f64,
    pub hull_dps: f64,
    /// Mean of shield and hull damage per second.
    pub average_dps: f64,
    pub heat_dps: f64,
    pub ion_dps: f64,
    pub slowing_dps: f64,
    pub disruption_dps: f64,
    pub ammo: Vec<AmmoSummary>,
}

/// Capacity and stock of one ammunition pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AmmoSummary {
    pub ammo: OutfitId,
    /// Display name of the ammunition, whether or not any is carried.
    pub name: String,
    pub capacity: i64,
    pub stock: u32,
}

/// Compute every aggregate group for `build`.
pub fn compute_aggregates(build: &Build) -> AggregateBundle {
    let total = |attribute| ledger::attribute(build, attribute);

    AggregateBundle {
        defense: defense(build),
        mobility: mobility::compute(build),
        missions: Missions {
            cargo_space: total(Attribute::CargoSpace),
            required_crew: total(Attribute::RequiredCrew),
            bunks: total(Attribute::Bunks),
        },
        space: space::compute(build),
        heat: heat::compute_heat(build),
        energy: heat::compute_energy(build),
        offense: offense(build),
    }
}

fn defense(build: &Build) -> Defense {
    let hull = ledger::attribute(build, Attribute::Hull);
    let shields = ledger::attribute(build, Attribute::Shields);

    Defense {
        hull,
        shields,
        total_hp: hull + shields,
        hull_regen: ledger::attribute(build, Attribute::HullRepairRate),
        shield_regen: ledger::attribute(build, Attribute::ShieldGeneration),
        anti_missile_dps: ledger::attribute(build, Attribute::AntiMissileDps),
    }
}

fn offense(build: &Build) -> Offense {
    let shield_dps = ledger::attribute(build, Attribute::ShieldDps);
    let hull_dps = ledger::attribute(build, Attribute::HullDps);

    let ammo = ledger::ammo_types(build)
        .into_iter()
        .map(|ammo| AmmoSummary {
            name: ammo_name(build, &ammo),
            capacity: ledger::ammo_capacity(build, &ammo),
            stock: ledger::ammo_stock(build, &ammo),
            ammo,
        })
        .collect();

    Offense {
        shield_dps,
        hull_dps,
        average_dps: (shield_dps + hull_dps) / 2.0,
        heat_dps: ledger::attribute(build, Attribute::HeatDps),
        ion_dps: ledger::attribute(build, Attribute::IonDps),
        slowing_dps: ledger::attribute(build, Attribute::SlowingDps),
        disruption_dps: ledger::attribute(build, Attribute::DisruptionDps),
        ammo,
    }
}

/// Name of the ammunition in pool `ammo`, from the carried ammunition or from
/// any outfit linked to the pool. Falls back to the identity.
fn ammo_name(build: &Build, ammo: &OutfitId) -> String {
    build
        .outfits
        .iter()
        .find_map(|set| {
            if set.outfit.id == *ammo {
                Some(set.outfit.name.clone())
            } else if set.outfit.ammo.as_ref() == Some(ammo) {
                set.outfit.ammo_name.clone()
            } else {
                None
            }
        })
        .unwrap_or_else(|| ammo.to_string())
}

/// `numerator / denominator`, or zero when the denominator is not a finite
/// positive number.
pub(crate) fn guarded_ratio(
    build: &Build,
    quantity: &'static str,
    numerator: f64,
    denominator: f64,
) -> f64 {
    if !denominator.is_finite() || denominator <= 0.0 {
        warn!(
            quantity,
            hull = %build.hull.id,
            denominator,
            "degenerate denominator; reporting zero"
        );
        return 0.0;
    }

    let ratio = numerator / denominator;
    if ratio.is_finite() {
        ratio
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ship::Hull;

    fn build(hull: serde_json::Value) -> Build {
        let hull: Hull = serde_json::from_value(hull).unwrap();
        Build::new("b", "B", hull)
    }

    #[test]
    fn guarded_ratio_rejects_degenerate_denominators() {
        let b = build(serde_json::json!({"id": "h", "name": "H"}));
        assert_eq!(guarded_ratio(&b, "q", 10.0, 4.0), 2.5);
        assert_eq!(guarded_ratio(&b, "q", 10.0, 0.0), 0.0);
        assert_eq!(guarded_ratio(&b, "q", 10.0, -1.0), 0.0);
        assert_eq!(guarded_ratio(&b, "q", 10.0, f64::INFINITY), 0.0);
        assert_eq!(guarded_ratio(&b, "q", 10.0, f64::NAN), 0.0);
    }

    #[test]
    fn empty_hull_aggregates_are_all_finite() {
        let bundle = compute_aggregates(&build(serde_json::json!({"id": "h", "name": "H"})));
        let value = serde_json::to_value(&bundle).unwrap();

        fn check(value: &serde_json::Value) {
            match value {
                serde_json::Value::Number(n) => assert!(n.as_f64().unwrap().is_finite()),
                serde_json::Value::Object(map) => map.values().for_each(check),
                serde_json::Value::Array(items) => items.iter().for_each(check),
                _ => {}
            }
        }
        check(&value);
        assert_eq!(bundle.mobility.max_speed, 0.0);
        assert_eq!(bundle.heat.idle_heat_level, 0.0);
    }

    #[test]
    fn defense_sums_hull_and_shields() {
        let b = build(serde_json::json!({"id": "h", "name": "H", "hull": 400, "shields": 600}));
        let bundle = compute_aggregates(&b);
        assert_eq!(bundle.defense.total_hp, 1000.0);
    }
}
