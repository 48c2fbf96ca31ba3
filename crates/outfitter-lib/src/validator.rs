//! Capacity validation: how many units of an outfit can be added or removed.
//!
//! A change is limited by every constrained attribute it would lower: adding
//! an outfit lowers whatever the outfit consumes, removing one lowers whatever
//! it provides. Ammunition pools add a second linkage. Ammunition is limited
//! by free storage in its own pool, and removing storage either fits within
//! spare capacity or cascades into dropping ammunition.

use std::fmt;
use std::num::NonZeroU32;

use serde::Serialize;

use crate::ledger;
use crate::ship::{Attribute, Build, Outfit, OutfitId, CONSTRAINED_ATTRIBUTES};

/// Upper bound reported when nothing constrains an add.
pub const UNBOUNDED: u32 = u32::MAX;

/// Resource that blocked a change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Constraint {
    /// A constrained ship attribute such as outfit space.
    Attribute { attribute: Attribute },
    /// Storage in the ammunition pool keyed by `ammo`.
    AmmoCapacity { ammo: OutfitId },
    /// Units of the outfit currently in the build.
    Stock { outfit: OutfitId },
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Attribute { attribute } => write!(f, "{attribute}"),
            Constraint::AmmoCapacity { ammo } => write!(f, "ammo capacity for {ammo}"),
            Constraint::Stock { outfit } => write!(f, "installed {outfit}"),
        }
    }
}

/// Why a change could not move even one unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LimitingFactor {
    pub constraint: Constraint,
    /// Amount of the resource currently free.
    pub remaining: f64,
    /// Amount one unit of the change needs.
    pub required: f64,
}

impl LimitingFactor {
    fn attribute(attribute: Attribute, remaining: f64, required: f64) -> Self {
        Self {
            constraint: Constraint::Attribute { attribute },
            remaining,
            required,
        }
    }
}

impl fmt::Display for LimitingFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "not enough {}: {} remaining, {} required",
            self.constraint, self.remaining, self.required
        )
    }
}

/// Removal that can only proceed by dropping ammunition from a pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AmmoCascade {
    pub ammo: OutfitId,
    pub capacity_before: i64,
    /// Pool capacity once `max_outfits_removable` units are gone.
    pub capacity_after: i64,
    /// Ammunition carried before the removal.
    pub stock: u32,
    /// Units of the storage outfit the removal will take out.
    pub max_outfits_removable: u32,
    /// Units that could go without touching ammunition.
    pub removable_without_cascade: u32,
}

/// Outcome of a successful removal check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Removal {
    Units { amount: u32 },
    Cascade(AmmoCascade),
}

impl Removal {
    /// Units of the outfit the removal will take out.
    pub fn amount(&self) -> u32 {
        match self {
            Removal::Units { amount } => *amount,
            Removal::Cascade(cascade) => cascade.max_outfits_removable,
        }
    }
}

/// Build-wide capacity violation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    pub constraint: Constraint,
    /// How far the resource is overdrawn.
    pub shortfall: f64,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} overdrawn by {}", self.constraint, self.shortfall)
    }
}

/// Maximum units of `outfit` that fit in `build`.
///
/// Returns [`UNBOUNDED`] when the outfit consumes no constrained resource,
/// and a [`LimitingFactor`] naming the first exhausted resource when not even
/// one unit fits.
pub fn max_units_to_add(build: &Build, outfit: &Outfit) -> Result<u32, LimitingFactor> {
    let mut max_units = UNBOUNDED;

    for attribute in CONSTRAINED_ATTRIBUTES {
        let per_unit = outfit.attribute(attribute);
        if per_unit >= 0.0 {
            continue;
        }
        let free = ledger::attribute(build, attribute);
        max_units = max_units.min(units_within(free, -per_unit));
        if max_units == 0 {
            return Err(LimitingFactor::attribute(attribute, free, -per_unit));
        }
    }

    if let Some(pool) = outfit.ammunition_pool() {
        let free = ledger::ammo_capacity(build, pool) - i64::from(ledger::ammo_stock(build, pool));
        max_units = max_units.min(u32::try_from(free.max(0)).unwrap_or(UNBOUNDED));
        if max_units == 0 {
            return Err(LimitingFactor {
                constraint: Constraint::AmmoCapacity { ammo: pool.clone() },
                remaining: free as f64,
                required: 1.0,
            });
        }
    }

    Ok(max_units)
}

/// Clamp a requested add to what fits.
pub fn units_to_add(
    build: &Build,
    outfit: &Outfit,
    desired: NonZeroU32,
) -> Result<u32, LimitingFactor> {
    max_units_to_add(build, outfit).map(|max_units| max_units.min(desired.get()))
}

/// Plan the removal of up to `desired` units of `outfit`.
///
/// The amount is capped at the installed stock and at what the provided
/// constrained attributes allow. When the outfit stores ammunition and the
/// capped amount would leave the pool smaller than the ammunition carried,
/// the result is a [`Removal::Cascade`] rather than a failure.
pub fn max_units_to_remove(
    build: &Build,
    outfit: &Outfit,
    desired: NonZeroU32,
) -> Result<Removal, LimitingFactor> {
    let installed = build.amount_of(&outfit.id);
    if installed == 0 {
        return Err(LimitingFactor {
            constraint: Constraint::Stock {
                outfit: outfit.id.clone(),
            },
            remaining: 0.0,
            required: 1.0,
        });
    }

    let mut max_units = installed;
    for attribute in CONSTRAINED_ATTRIBUTES {
        let per_unit = outfit.attribute(attribute);
        if per_unit <= 0.0 {
            continue;
        }
        let free = ledger::attribute(build, attribute);
        max_units = max_units.min(units_within(free, per_unit));
        if max_units == 0 {
            return Err(LimitingFactor::attribute(attribute, free, per_unit));
        }
    }

    let amount = max_units.min(desired.get());

    if let Some((pool, per_unit)) = outfit.storage_pool() {
        let per_unit = per_unit as i64;
        let capacity = ledger::ammo_capacity(build, pool);
        let stock = ledger::ammo_stock(build, pool);
        let spare = (capacity - i64::from(stock)).max(0);
        let removable_without_cascade = u32::try_from(spare / per_unit).unwrap_or(UNBOUNDED);

        if amount > removable_without_cascade {
            return Ok(Removal::Cascade(AmmoCascade {
                ammo: pool.clone(),
                capacity_before: capacity,
                capacity_after: capacity - i64::from(amount) * per_unit,
                stock,
                max_outfits_removable: amount,
                removable_without_cascade,
            }));
        }
    }

    Ok(Removal::Units { amount })
}

/// Every constrained resource the build currently overdraws.
pub fn violations(build: &Build) -> Vec<Violation> {
    let mut found: Vec<Violation> = CONSTRAINED_ATTRIBUTES
        .iter()
        .filter_map(|&attribute| {
            let total = ledger::attribute(build, attribute);
            (total < 0.0).then(|| Violation {
                constraint: Constraint::Attribute { attribute },
                shortfall: -total,
            })
        })
        .collect();

    for ammo in ledger::ammo_types(build) {
        let capacity = ledger::ammo_capacity(build, &ammo);
        let stock = i64::from(ledger::ammo_stock(build, &ammo));
        if stock > capacity {
            found.push(Violation {
                constraint: Constraint::AmmoCapacity { ammo },
                shortfall: (stock - capacity) as f64,
            });
        }
    }

    found
}

/// True when the build overdraws nothing.
pub fn is_valid(build: &Build) -> bool {
    violations(build).is_empty()
}

/// Whole units of `per_unit` that fit in `free`, saturating at the bounds.
fn units_within(free: f64, per_unit: f64) -> u32 {
    let units = (free / per_unit).floor();
    if units.is_nan() || units <= 0.0 {
        0
    } else {
        // Float-to-int `as` saturates at u32::MAX.
        units as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn units_within_floors_and_saturates() {
        assert_eq!(units_within(100.0, 30.0), 3);
        assert_eq!(units_within(10.0, 30.0), 0);
        assert_eq!(units_within(-5.0, 1.0), 0);
        assert_eq!(units_within(1e300, 1.0), u32::MAX);
    }

    #[test]
    fn limiting_factor_reads_as_a_diagnostic() {
        let factor = LimitingFactor::attribute(Attribute::OutfitSpace, 10.0, 30.0);
        assert_eq!(
            factor.to_string(),
            "not enough outfit_space: 10 remaining, 30 required"
        );
    }
}
