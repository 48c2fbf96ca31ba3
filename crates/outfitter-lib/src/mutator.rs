//! Build mutation: apply validated adds and removes to a build's outfits.
//!
//! Both operations borrow the build immutably and hand back a fresh outfit
//! sequence in canonical category order. Callers commit the result with
//! [`Build::set_outfits`] or [`Build::with_outfits`].

use std::num::NonZeroU32;

use serde::Serialize;
use tracing::debug;

use crate::ship::{sort_by_category, Build, Outfit, OutfitId, OutfitSet};
use crate::validator::{self, LimitingFactor, Removal};

/// Ammunition dropped because its storage was removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AmmoRemoval {
    pub ammo: OutfitId,
    pub amount: u32,
}

/// Result of an add or remove.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutfitChange {
    /// Units actually added or removed.
    pub amount: u32,
    /// New outfit sequence for the build.
    pub outfits: Vec<OutfitSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ammo_removed: Option<AmmoRemoval>,
}

/// Add up to `desired` units of `outfit`, clamped to what fits.
pub fn add_outfit(
    build: &Build,
    outfit: &Outfit,
    desired: NonZeroU32,
) -> Result<OutfitChange, LimitingFactor> {
    let amount = validator::units_to_add(build, outfit, desired)?;

    let mut outfits = build.outfits.clone();
    match outfits.iter_mut().find(|set| set.outfit.id == outfit.id) {
        Some(set) => set.amount = set.amount.saturating_add(amount),
        None => outfits.push(OutfitSet::new(outfit.clone(), amount)),
    }
    sort_by_category(&mut outfits);

    debug!(
        build = %build.id,
        outfit = %outfit.id,
        requested = desired.get(),
        amount,
        "added outfit"
    );

    Ok(OutfitChange {
        amount,
        outfits,
        ammo_removed: None,
    })
}

/// Remove up to `desired` units of `outfit`.
///
/// Removing ammunition storage below the ammunition carried drops the excess
/// ammunition and reports it in [`OutfitChange::ammo_removed`].
pub fn remove_outfit(
    build: &Build,
    outfit: &Outfit,
    desired: NonZeroU32,
) -> Result<OutfitChange, LimitingFactor> {
    let removal = validator::max_units_to_remove(build, outfit, desired)?;
    let amount = removal.amount();

    let mut outfits = build.outfits.clone();
    if let Some(set) = outfits.iter_mut().find(|set| set.outfit.id == outfit.id) {
        set.amount = set.amount.saturating_sub(amount);
    }

    let ammo_removed = match &removal {
        Removal::Cascade(cascade) => {
            clamp_ammunition(&mut outfits, &cascade.ammo, cascade.capacity_after)
        }
        Removal::Units { .. } => None,
    };

    outfits.retain(|set| set.amount > 0);
    sort_by_category(&mut outfits);

    debug!(
        build = %build.id,
        outfit = %outfit.id,
        requested = desired.get(),
        amount,
        ammo_dropped = ammo_removed.as_ref().map_or(0, |removed| removed.amount),
        "removed outfit"
    );

    Ok(OutfitChange {
        amount,
        outfits,
        ammo_removed,
    })
}

fn clamp_ammunition(
    outfits: &mut [OutfitSet],
    ammo: &OutfitId,
    capacity: i64,
) -> Option<AmmoRemoval> {
    let set = outfits.iter_mut().find(|set| set.outfit.id == *ammo)?;
    let keep = u32::try_from(capacity.max(0)).unwrap_or(u32::MAX);
    if set.amount <= keep {
        return None;
    }

    let dropped = set.amount - keep;
    set.amount = keep;
    Some(AmmoRemoval {
        ammo: ammo.clone(),
        amount: dropped,
    })
}
