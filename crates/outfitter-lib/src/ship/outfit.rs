//! Outfit reference records, categories, and ammunition roles.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::attributes::{Attribute, Attributes};
use super::constants::FRAMES_PER_SECOND;
use super::ids::OutfitId;

/// Outfit category. Declaration order is the canonical build ordering.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum OutfitCategory {
    #[serde(rename = "Guns")]
    Guns,
    #[serde(rename = "Secondary Weapons")]
    SecondaryWeapons,
    #[serde(rename = "Ammunition")]
    Ammunition,
    #[serde(rename = "Turrets")]
    Turrets,
    #[serde(rename = "Anti-missile")]
    AntiMissile,
    #[serde(rename = "Generators")]
    Generators,
    #[serde(rename = "Batteries")]
    Batteries,
    #[serde(rename = "Shields")]
    Shields,
    #[serde(rename = "Cooling")]
    Cooling,
    #[serde(rename = "Systems")]
    Systems,
    #[serde(rename = "Hand to Hand")]
    HandToHand,
    #[serde(rename = "Thruster")]
    Thruster,
    #[serde(rename = "Steering")]
    Steering,
    #[serde(rename = "Special")]
    Special,
    #[serde(rename = "Hyperdrive")]
    Hyperdrive,
    /// Any label outside the canonical table; sorts after everything else.
    #[default]
    #[serde(other)]
    Other,
}

impl OutfitCategory {
    /// Human-readable label as it appears in catalog documents.
    pub fn label(self) -> &'static str {
        match self {
            OutfitCategory::Guns => "Guns",
            OutfitCategory::SecondaryWeapons => "Secondary Weapons",
            OutfitCategory::Ammunition => "Ammunition",
            OutfitCategory::Turrets => "Turrets",
            OutfitCategory::AntiMissile => "Anti-missile",
            OutfitCategory::Generators => "Generators",
            OutfitCategory::Batteries => "Batteries",
            OutfitCategory::Shields => "Shields",
            OutfitCategory::Cooling => "Cooling",
            OutfitCategory::Systems => "Systems",
            OutfitCategory::HandToHand => "Hand to Hand",
            OutfitCategory::Thruster => "Thruster",
            OutfitCategory::Steering => "Steering",
            OutfitCategory::Special => "Special",
            OutfitCategory::Hyperdrive => "Hyperdrive",
            OutfitCategory::Other => "Other",
        }
    }
}

/// Per-shot weapon figures. Converted to per-second attributes at ingest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponStats {
    /// Frames between shots.
    pub reload: f64,
    pub shield_damage: f64,
    pub hull_damage: f64,
    pub heat_damage: f64,
    pub ion_damage: f64,
    pub slowing_damage: f64,
    pub disruption_damage: f64,
    pub anti_missile: f64,
    pub firing_energy: f64,
    pub firing_heat: f64,
    pub firing_fuel: f64,
}

impl WeaponStats {
    /// Shots fired per second, or zero when reload is not positive.
    pub fn shots_per_second(&self) -> f64 {
        if self.reload.is_finite() && self.reload > 0.0 {
            FRAMES_PER_SECOND / self.reload
        } else {
            0.0
        }
    }

    fn per_second_targets(&self) -> [(Attribute, f64); 10] {
        [
            (Attribute::ShieldDps, self.shield_damage),
            (Attribute::HullDps, self.hull_damage),
            (Attribute::HeatDps, self.heat_damage),
            (Attribute::IonDps, self.ion_damage),
            (Attribute::SlowingDps, self.slowing_damage),
            (Attribute::DisruptionDps, self.disruption_damage),
            (Attribute::AntiMissileDps, self.anti_missile),
            (Attribute::EnergyPerSecond, self.firing_energy),
            (Attribute::HeatPerSecond, self.firing_heat),
            (Attribute::FuelPerSecond, self.firing_fuel),
        ]
    }
}

/// Attachable item modifying one or more ship attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outfit {
    pub id: OutfitId,
    pub name: String,
    #[serde(default)]
    pub release: String,
    #[serde(default)]
    pub category: OutfitCategory,
    /// Outfit this one fires or stores, by identity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ammo: Option<OutfitId>,
    /// Display name of the `ammo` outfit, linked when the catalog loads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ammo_name: Option<String>,
    /// Storage provided (launchers, racks) or consumed (ammunition) per unit.
    #[serde(default)]
    pub ammo_capacity: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weapon: Option<WeaponStats>,
    #[serde(flatten)]
    pub attributes: Attributes,
}

impl Outfit {
    /// Per-unit contribution of an attribute (zero when absent).
    pub fn attribute(&self, attribute: Attribute) -> f64 {
        self.attributes.get(attribute)
    }

    /// Pool this outfit occupies when it is itself ammunition.
    ///
    /// An outfit is ammunition when it names itself as ammo, or when it names
    /// no ammo and is either categorized as ammunition or consumes storage.
    pub fn ammunition_pool(&self) -> Option<&OutfitId> {
        let is_ammunition = match &self.ammo {
            Some(ammo) => *ammo == self.id,
            None => self.category == OutfitCategory::Ammunition || self.ammo_capacity < 0,
        };
        is_ammunition.then_some(&self.id)
    }

    /// Pool this outfit provides storage for, with storage per unit.
    pub fn storage_pool(&self) -> Option<(&OutfitId, u64)> {
        match &self.ammo {
            Some(ammo) if *ammo != self.id && self.ammo_capacity != 0 => {
                Some((ammo, self.ammo_capacity.unsigned_abs()))
            }
            _ => None,
        }
    }

    /// Fill per-second attributes from per-shot weapon figures.
    ///
    /// Values already present on the record win over derived ones.
    pub fn derive_weapon_rates(&mut self) {
        let Some(weapon) = &self.weapon else {
            return;
        };
        let shots_per_second = weapon.shots_per_second();
        if shots_per_second == 0.0 {
            return;
        }

        for (attribute, per_shot) in weapon.per_second_targets() {
            if per_shot != 0.0 && self.attributes.get(attribute) == 0.0 {
                self.attributes.set(attribute, per_shot * shots_per_second);
            }
        }
    }

    /// Validate outfit data for correctness.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::CatalogValidation {
                message: format!("outfit {} must have a name", self.id),
            });
        }
        self.attributes.validate(&self.name)?;

        if let Some(weapon) = &self.weapon {
            if !weapon.reload.is_finite() || weapon.reload < 0.0 {
                return Err(Error::CatalogValidation {
                    message: format!("{}: reload must be finite and non-negative", self.name),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outfit(json: &str) -> Outfit {
        serde_json::from_str(json).expect("valid outfit json")
    }

    #[test]
    fn unknown_category_sorts_last() {
        let o = outfit(r#"{"id": "x", "name": "X", "category": "Licenses"}"#);
        assert_eq!(o.category, OutfitCategory::Other);
        assert!(OutfitCategory::Hyperdrive < OutfitCategory::Other);
        assert!(OutfitCategory::Guns < OutfitCategory::Generators);
    }

    #[test]
    fn ammunition_roles_accept_both_sign_conventions() {
        let launcher = outfit(r#"{"id": "l", "name": "L", "ammo": "m", "ammo_capacity": 20}"#);
        let missile = outfit(
            r#"{"id": "m", "name": "M", "category": "Ammunition", "ammo_capacity": -1}"#,
        );
        assert_eq!(launcher.storage_pool(), Some((&OutfitId::new("m"), 20)));
        assert_eq!(launcher.ammunition_pool(), None);
        assert_eq!(missile.ammunition_pool(), Some(&OutfitId::new("m")));
        assert_eq!(missile.storage_pool(), None);

        let launcher = outfit(r#"{"id": "l", "name": "L", "ammo": "m", "ammo_capacity": -20}"#);
        let missile = outfit(r#"{"id": "m", "name": "M", "ammo": "m", "ammo_capacity": 1}"#);
        assert_eq!(launcher.storage_pool(), Some((&OutfitId::new("m"), 20)));
        assert_eq!(missile.ammunition_pool(), Some(&OutfitId::new("m")));
        assert_eq!(missile.storage_pool(), None);
    }

    #[test]
    fn ammo_rack_in_ammunition_category_is_storage() {
        let rack = outfit(
            r#"{"id": "rack", "name": "Rack", "category": "Ammunition", "ammo": "m", "ammo_capacity": 30}"#,
        );
        assert_eq!(rack.ammunition_pool(), None);
        assert_eq!(rack.storage_pool(), Some((&OutfitId::new("m"), 30)));
    }

    #[test]
    fn weapon_rates_derive_from_reload() {
        let mut gun = outfit(
            r#"{"id": "g", "name": "G", "category": "Guns",
                "weapon": {"reload": 12, "shield_damage": 10, "hull_damage": 6, "firing_heat": 2}}"#,
        );
        gun.derive_weapon_rates();
        assert_eq!(gun.attribute(Attribute::ShieldDps), 50.0);
        assert_eq!(gun.attribute(Attribute::HullDps), 30.0);
        assert_eq!(gun.attribute(Attribute::HeatPerSecond), 10.0);
        assert_eq!(gun.attribute(Attribute::IonDps), 0.0);
    }

    #[test]
    fn stored_rates_are_not_overwritten() {
        let mut gun = outfit(
            r#"{"id": "g", "name": "G", "shield_dps": 7,
                "weapon": {"reload": 1, "shield_damage": 10}}"#,
        );
        gun.derive_weapon_rates();
        assert_eq!(gun.attribute(Attribute::ShieldDps), 7.0);
    }
}
