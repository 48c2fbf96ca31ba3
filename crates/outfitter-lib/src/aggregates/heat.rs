//! Heat and energy balances.
//!
//! Both groups report an idle balance (generation against passive drains)
//! and an in-action balance that adds movement, firing and regeneration. Heat
//! additionally reports how full the ship's heat envelope gets.

use serde::Serialize;

use crate::ledger;
use crate::ship::{Attribute, Build, HEAT_DISSIPATION_SCALE};

use super::guarded_ratio;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Heat {
    /// Multiplier applied to cooling, in `[0, 2]`.
    pub cooling_efficiency: f64,
    pub cooling: f64,
    pub active_cooling: f64,
    pub heat_generation: f64,
    pub idle_heat: f64,
    pub idle_heat_level: f64,
    pub thrusting_heat: f64,
    pub reverse_thrusting_heat: f64,
    pub turning_heat: f64,
    pub afterburner_heat: f64,
    pub moving_heat: f64,
    pub firing_heat: f64,
    pub shield_heat: f64,
    pub hull_heat: f64,
    pub action_heat: f64,
    pub action_heat_level: f64,
    pub heat_dissipation: f64,
    pub max_heat: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Energy {
    pub energy_generation: f64,
    pub solar_collection: f64,
    pub energy_consumption: f64,
    pub cooling_energy: f64,
    pub idle_energy: f64,
    pub thrusting_energy: f64,
    pub reverse_thrusting_energy: f64,
    pub turning_energy: f64,
    pub afterburner_energy: f64,
    pub moving_energy: f64,
    pub firing_energy: f64,
    pub shield_energy: f64,
    pub hull_energy: f64,
    pub action_energy: f64,
    pub energy_capacity: f64,
}

/// Cooling multiplier for a summed cooling inefficiency `x`.
///
/// `2 + 2 / (1 + e^(-x/2)) - 4 / (1 + e^(-x/4))`: exactly 1 at zero, tending
/// to 0 as inefficiency grows and to 2 as it goes negative.
pub fn cooling_efficiency(inefficiency: f64) -> f64 {
    if !inefficiency.is_finite() {
        return if inefficiency > 0.0 { 0.0 } else { 2.0 };
    }
    let efficiency = 2.0 + 2.0 / (1.0 + (-inefficiency / 2.0).exp())
        - 4.0 / (1.0 + (-inefficiency / 4.0).exp());
    efficiency.clamp(0.0, 2.0)
}

pub(super) fn compute_heat(build: &Build) -> Heat {
    let total = |attribute| ledger::attribute(build, attribute);

    let cooling_efficiency = cooling_efficiency(total(Attribute::CoolingInefficiency));
    let cooling = total(Attribute::Cooling) * cooling_efficiency;
    let active_cooling = total(Attribute::ActiveCooling) * cooling_efficiency;
    let heat_generation = total(Attribute::HeatGeneration);
    let idle_heat = heat_generation - cooling - active_cooling;

    let thrusting_heat = total(Attribute::ThrustingHeat);
    let reverse_thrusting_heat = total(Attribute::ReverseThrustingHeat);
    let turning_heat = total(Attribute::TurningHeat);
    let afterburner_heat = total(Attribute::AfterburnerHeat);
    let moving_heat =
        thrusting_heat.max(reverse_thrusting_heat) + turning_heat + afterburner_heat;

    let firing_heat = total(Attribute::HeatPerSecond);
    let shield_heat = total(Attribute::ShieldHeat);
    let hull_heat = total(Attribute::HullHeat);
    let action_heat = idle_heat + moving_heat + firing_heat + shield_heat + hull_heat;

    let heat_dissipation = total(Attribute::HeatDissipation) * HEAT_DISSIPATION_SCALE;
    let max_heat = total(Attribute::Mass) * heat_dissipation;

    let level = |quantity, balance: f64| {
        if balance > 0.0 {
            guarded_ratio(build, quantity, balance, max_heat)
        } else {
            0.0
        }
    };

    Heat {
        cooling_efficiency,
        cooling,
        active_cooling,
        heat_generation,
        idle_heat,
        idle_heat_level: level("idle_heat_level", idle_heat),
        thrusting_heat,
        reverse_thrusting_heat,
        turning_heat,
        afterburner_heat,
        moving_heat,
        firing_heat,
        shield_heat,
        hull_heat,
        action_heat,
        action_heat_level: level("action_heat_level", action_heat),
        heat_dissipation,
        max_heat,
    }
}

pub(super) fn compute_energy(build: &Build) -> Energy {
    let total = |attribute| ledger::attribute(build, attribute);

    let energy_generation = total(Attribute::EnergyGeneration);
    let solar_collection = total(Attribute::SolarCollection);
    let energy_consumption = total(Attribute::EnergyConsumption);
    let cooling_energy = total(Attribute::CoolingEnergy);
    let idle_energy = energy_generation + solar_collection - energy_consumption - cooling_energy;

    let thrusting_energy = total(Attribute::ThrustingEnergy);
    let reverse_thrusting_energy = total(Attribute::ReverseThrustingEnergy);
    let turning_energy = total(Attribute::TurningEnergy);
    let afterburner_energy = total(Attribute::AfterburnerEnergy);
    let moving_energy =
        thrusting_energy.max(reverse_thrusting_energy) + turning_energy + afterburner_energy;

    let firing_energy = total(Attribute::EnergyPerSecond);
    let shield_energy = total(Attribute::ShieldEnergy);
    let hull_energy = total(Attribute::HullEnergy);

    Energy {
        energy_generation,
        solar_collection,
        energy_consumption,
        cooling_energy,
        idle_energy,
        thrusting_energy,
        reverse_thrusting_energy,
        turning_energy,
        afterburner_energy,
        moving_energy,
        firing_energy,
        shield_energy,
        hull_energy,
        action_energy: idle_energy - moving_energy - firing_energy - shield_energy - hull_energy,
        energy_capacity: total(Attribute::EnergyCapacity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ship::{Hull, Outfit, OutfitSet};

    #[test]
    fn cooling_efficiency_is_one_at_zero_inefficiency() {
        assert!((cooling_efficiency(0.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn cooling_efficiency_stays_bounded() {
        for x in [-1e9, -1000.0, -10.0, -1.0, 0.5, 3.0, 25.0, 1000.0, 1e9] {
            let e = cooling_efficiency(x);
            assert!((0.0..=2.0).contains(&e), "efficiency {e} out of range for {x}");
        }
        assert_eq!(cooling_efficiency(f64::INFINITY), 0.0);
        assert_eq!(cooling_efficiency(f64::NEG_INFINITY), 2.0);
        assert!(cooling_efficiency(30.0) < cooling_efficiency(3.0));
    }

    #[test]
    fn heat_level_uses_positive_balance_over_envelope() {
        let hull: Hull = serde_json::from_value(serde_json::json!({
            "id": "h", "name": "H", "mass": 100, "heat_dissipation": 0.5, "heat_generation": 60
        }))
        .unwrap();
        let cooler: Outfit = serde_json::from_value(serde_json::json!({
            "id": "c", "name": "C", "category": "Cooling", "cooling": 10
        }))
        .unwrap();
        let build = Build::new("b", "B", hull).with_outfits(vec![OutfitSet::new(cooler, 1)]);

        let heat = compute_heat(&build);
        assert_eq!(heat.heat_dissipation, 3.0);
        assert_eq!(heat.max_heat, 300.0);
        assert_eq!(heat.idle_heat, 50.0);
        assert!((heat.idle_heat_level - 50.0 / 300.0).abs() < 1e-12);
    }

    #[test]
    fn negative_heat_balance_reports_zero_level() {
        let hull: Hull = serde_json::from_value(serde_json::json!({
            "id": "h", "name": "H", "mass": 100, "heat_dissipation": 0.5, "cooling": 40
        }))
        .unwrap();
        let heat = compute_heat(&Build::new("b", "B", hull));
        assert!(heat.idle_heat < 0.0);
        assert_eq!(heat.idle_heat_level, 0.0);
    }
}
