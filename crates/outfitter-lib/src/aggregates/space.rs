use serde::Serialize;

use crate::ledger;
use crate::ship::{Attribute, Build};

/// Free and total amounts of one slot resource.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Capacity {
    pub free: f64,
    /// Hull value plus expansions, before consumption.
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Space {
    pub outfit_space: Capacity,
    pub engine_capacity: Capacity,
    pub weapon_capacity: Capacity,
    pub gun_ports: Capacity,
    pub turret_mounts: Capacity,
    pub fighter_bays: Capacity,
    pub drone_bays: Capacity,
}

pub(super) fn compute(build: &Build) -> Space {
    let capacity = |attribute| Capacity {
        free: ledger::attribute(build, attribute),
        total: ledger::provided_attribute(build, attribute),
    };

    Space {
        outfit_space: capacity(Attribute::OutfitSpace),
        engine_capacity: capacity(Attribute::EngineCapacity),
        weapon_capacity: capacity(Attribute::WeaponCapacity),
        gun_ports: capacity(Attribute::GunPorts),
        turret_mounts: capacity(Attribute::TurretMounts),
        fighter_bays: capacity(Attribute::FighterBays),
        drone_bays: capacity(Attribute::DroneBays),
    }
}
