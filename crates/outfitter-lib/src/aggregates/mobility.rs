use serde::Serialize;

use crate::ledger;
use crate::ship::{Attribute, Build, ACCELERATION_SCALE, SPEED_SCALE, TURN_SCALE};

use super::guarded_ratio;

/// Speed, handling and fuel figures.
///
/// Cargo-laden figures assume every unit of cargo space is filled with one
/// ton of cargo.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mobility {
    pub thrust: f64,
    pub drag: f64,
    pub max_speed: f64,
    pub acceleration_no_cargo: f64,
    pub acceleration_with_cargo: f64,
    pub turn: f64,
    /// Degrees per second with an empty hold.
    pub turn_no_cargo: f64,
    pub turn_with_cargo: f64,
    pub mass_no_cargo: f64,
    pub mass_with_cargo: f64,
    pub fuel_capacity: f64,
    /// Largest single-drive jump cost; drives do not stack.
    pub jump_fuel: f64,
    pub ramscoop: f64,
    pub firing_fuel: f64,
}

pub(super) fn compute(build: &Build) -> Mobility {
    let total = |attribute| ledger::attribute(build, attribute);

    let thrust = total(Attribute::Thrust);
    let drag = total(Attribute::Drag);
    let turn = total(Attribute::Turn);
    let mass_no_cargo = total(Attribute::Mass);
    let mass_with_cargo = mass_no_cargo + total(Attribute::CargoSpace);

    Mobility {
        thrust,
        drag,
        max_speed: guarded_ratio(build, "max_speed", SPEED_SCALE * thrust, drag),
        acceleration_no_cargo: guarded_ratio(
            build,
            "acceleration_no_cargo",
            ACCELERATION_SCALE * thrust,
            mass_no_cargo,
        ),
        acceleration_with_cargo: guarded_ratio(
            build,
            "acceleration_with_cargo",
            ACCELERATION_SCALE * thrust,
            mass_with_cargo,
        ),
        turn,
        turn_no_cargo: guarded_ratio(build, "turn_no_cargo", TURN_SCALE * turn, mass_no_cargo),
        turn_with_cargo: guarded_ratio(
            build,
            "turn_with_cargo",
            TURN_SCALE * turn,
            mass_with_cargo,
        ),
        mass_no_cargo,
        mass_with_cargo,
        fuel_capacity: total(Attribute::FuelCapacity),
        jump_fuel: ledger::max_outfit_attribute(build, Attribute::JumpFuel),
        ramscoop: total(Attribute::Ramscoop),
        firing_fuel: total(Attribute::FuelPerSecond),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ship::{Hull, Outfit, OutfitSet};

    #[test]
    fn speed_and_acceleration_follow_thrust_over_drag_and_mass() {
        let hull: Hull = serde_json::from_value(serde_json::json!({
            "id": "h", "name": "H", "mass": 100, "drag": 3, "cargo_space": 20, "turn": 50
        }))
        .unwrap();
        let thruster: Outfit = serde_json::from_value(serde_json::json!({
            "id": "t", "name": "T", "category": "Thruster", "thrust": 540, "mass": 20
        }))
        .unwrap();
        let build = Build::new("b", "B", hull).with_outfits(vec![OutfitSet::new(thruster, 1)]);

        let mobility = compute(&build);
        assert_eq!(mobility.max_speed, 10800.0);
        assert_eq!(mobility.mass_no_cargo, 120.0);
        assert_eq!(mobility.mass_with_cargo, 140.0);
        assert_eq!(mobility.acceleration_no_cargo, 3600.0 * 540.0 / 120.0);
        assert_eq!(mobility.turn_with_cargo, 60.0 * 50.0 / 140.0);
    }
}
