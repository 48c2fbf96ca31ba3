//! Numeric attribute schema shared by hulls and outfits.
//!
//! Every attribute is a named `f64` field defaulting to zero, so a record that
//! omits a value contributes nothing to ledger sums. Hull values are base
//! capacities; outfit values are signed deltas (negative consumes, positive
//! provides).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

macro_rules! attribute_schema {
    ($($variant:ident => $field:ident),+ $(,)?) => {
        /// Name of a numeric attribute carried by hulls and outfits.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum Attribute {
            $($variant,)+
        }

        impl Attribute {
            /// Every attribute in schema order.
            pub const ALL: &'static [Attribute] = &[$(Attribute::$variant,)+];

            /// The snake_case key used in catalog documents.
            pub fn key(self) -> &'static str {
                match self {
                    $(Attribute::$variant => stringify!($field),)+
                }
            }
        }

        impl FromStr for Attribute {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $(stringify!($field) => Ok(Attribute::$variant),)+
                    other => Err(Error::CatalogValidation {
                        message: format!("unknown attribute name: {other}"),
                    }),
                }
            }
        }

        /// Fixed attribute record. Absent fields deserialize to zero.
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(default)]
        pub struct Attributes {
            $(pub $field: f64,)+
        }

        impl Attributes {
            /// Stored value of `attribute`, as deserialized.
            pub fn raw(&self, attribute: Attribute) -> f64 {
                match attribute {
                    $(Attribute::$variant => self.$field,)+
                }
            }

            /// Value of `attribute`, treating non-finite values as zero.
            pub fn get(&self, attribute: Attribute) -> f64 {
                let value = self.raw(attribute);
                if value.is_finite() {
                    value
                } else {
                    0.0
                }
            }

            /// Overwrite a single attribute value.
            pub fn set(&mut self, attribute: Attribute, value: f64) {
                match attribute {
                    $(Attribute::$variant => self.$field = value,)+
                }
            }
        }
    };
}

attribute_schema! {
    Mass => mass,
    Drag => drag,
    OutfitSpace => outfit_space,
    WeaponCapacity => weapon_capacity,
    EngineCapacity => engine_capacity,
    CargoSpace => cargo_space,
    GunPorts => gun_ports,
    TurretMounts => turret_mounts,
    FighterBays => fighter_bays,
    DroneBays => drone_bays,
    RequiredCrew => required_crew,
    Bunks => bunks,
    FuelCapacity => fuel_capacity,
    Hull => hull,
    Shields => shields,
    HullRepairRate => hull_repair_rate,
    ShieldGeneration => shield_generation,
    Thrust => thrust,
    Turn => turn,
    ReverseThrust => reverse_thrust,
    AfterburnerThrust => afterburner_thrust,
    Ramscoop => ramscoop,
    JumpFuel => jump_fuel,
    Cooling => cooling,
    ActiveCooling => active_cooling,
    CoolingInefficiency => cooling_inefficiency,
    CoolingEnergy => cooling_energy,
    HeatGeneration => heat_generation,
    HeatDissipation => heat_dissipation,
    ThrustingHeat => thrusting_heat,
    ReverseThrustingHeat => reverse_thrusting_heat,
    TurningHeat => turning_heat,
    AfterburnerHeat => afterburner_heat,
    ShieldHeat => shield_heat,
    HullHeat => hull_heat,
    EnergyCapacity => energy_capacity,
    EnergyGeneration => energy_generation,
    SolarCollection => solar_collection,
    EnergyConsumption => energy_consumption,
    ThrustingEnergy => thrusting_energy,
    ReverseThrustingEnergy => reverse_thrusting_energy,
    TurningEnergy => turning_energy,
    AfterburnerEnergy => afterburner_energy,
    ShieldEnergy => shield_energy,
    HullEnergy => hull_energy,
    ShieldDps => shield_dps,
    HullDps => hull_dps,
    HeatDps => heat_dps,
    IonDps => ion_dps,
    SlowingDps => slowing_dps,
    DisruptionDps => disruption_dps,
    AntiMissileDps => anti_missile_dps,
    EnergyPerSecond => energy_per_second,
    HeatPerSecond => heat_per_second,
    FuelPerSecond => fuel_per_second,
    Cost => cost,
}

/// Attributes that must stay non-negative across a build.
pub const CONSTRAINED_ATTRIBUTES: [Attribute; 7] = [
    Attribute::GunPorts,
    Attribute::TurretMounts,
    Attribute::EngineCapacity,
    Attribute::WeaponCapacity,
    Attribute::OutfitSpace,
    Attribute::CargoSpace,
    Attribute::RequiredCrew,
];

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Attributes {
    /// Validate that every stored value is finite.
    pub fn validate(&self, owner: &str) -> crate::Result<()> {
        for &attribute in Attribute::ALL {
            if !self.raw(attribute).is_finite() {
                return Err(Error::CatalogValidation {
                    message: format!("{owner}: {attribute} must be a finite number"),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_deserialize_as_zero() {
        let attrs: Attributes = serde_json::from_str(r#"{"outfit_space": -30}"#).unwrap();
        assert_eq!(attrs.get(Attribute::OutfitSpace), -30.0);
        assert_eq!(attrs.get(Attribute::Thrust), 0.0);
    }

    #[test]
    fn keys_round_trip_through_from_str() {
        for &attribute in Attribute::ALL {
            assert_eq!(attribute.key().parse::<Attribute>().unwrap(), attribute);
        }
        assert!("warp_speed".parse::<Attribute>().is_err());
    }

    #[test]
    fn non_finite_values_read_as_zero() {
        let mut attrs = Attributes::default();
        attrs.set(Attribute::Drag, f64::NAN);
        assert_eq!(attrs.get(Attribute::Drag), 0.0);
        assert!(attrs.validate("probe").is_err());
    }
}
