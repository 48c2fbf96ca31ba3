//! Builds: a hull plus the outfits attached to it.

use serde::{Deserialize, Serialize};

use super::constants::COPY_SUFFIX;
use super::hull::Hull;
use super::ids::{BuildId, HullId, OutfitId};
use super::outfit::Outfit;

/// One line item in a build. `amount` is always positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutfitSet {
    pub outfit: Outfit,
    pub amount: u32,
}

impl OutfitSet {
    pub fn new(outfit: Outfit, amount: u32) -> Self {
        Self { outfit, amount }
    }
}

/// A resolved ship loadout.
///
/// Outfit sets are kept in canonical category order with at most one set per
/// outfit identity. Capacity validity is checked by [`crate::validator`], not
/// enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Build {
    pub id: BuildId,
    pub name: String,
    pub hull: Hull,
    #[serde(default)]
    pub outfits: Vec<OutfitSet>,
}

impl Build {
    /// Create an empty build for a hull.
    pub fn new(id: impl Into<BuildId>, name: impl Into<String>, hull: Hull) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            hull,
            outfits: Vec::new(),
        }
    }

    /// The set holding `outfit`, if any.
    pub fn outfit_set(&self, outfit: &OutfitId) -> Option<&OutfitSet> {
        self.outfits.iter().find(|set| set.outfit.id == *outfit)
    }

    /// Number of units of `outfit` attached (zero when absent).
    pub fn amount_of(&self, outfit: &OutfitId) -> u32 {
        self.outfit_set(outfit).map_or(0, |set| set.amount)
    }

    /// Commit a new outfit sequence, dropping empty sets and restoring order.
    pub fn set_outfits(&mut self, mut outfits: Vec<OutfitSet>) {
        outfits.retain(|set| set.amount > 0);
        sort_by_category(&mut outfits);
        self.outfits = outfits;
    }

    /// Builder-style variant of [`Build::set_outfits`].
    pub fn with_outfits(mut self, outfits: Vec<OutfitSet>) -> Self {
        self.set_outfits(outfits);
        self
    }

    /// Remove every outfit, keeping hull and identity.
    pub fn clear(&mut self) {
        self.outfits.clear();
    }

    /// Deep copy under a new identity, named "<name> (Copy)".
    pub fn duplicate(&self, id: impl Into<BuildId>) -> Build {
        Build {
            id: id.into(),
            name: format!("{}{COPY_SUFFIX}", self.name),
            hull: self.hull.clone(),
            outfits: self.outfits.clone(),
        }
    }

    /// Identity-only form suitable for external persistence.
    pub fn to_template(&self) -> BuildTemplate {
        BuildTemplate {
            id: self.id.clone(),
            name: self.name.clone(),
            hull: self.hull.id.clone(),
            outfits: self
                .outfits
                .iter()
                .map(|set| TemplateOutfit {
                    outfit: set.outfit.id.clone(),
                    amount: set.amount,
                })
                .collect(),
        }
    }
}

/// Stable sort of outfit sets by canonical category order.
pub fn sort_by_category(outfits: &mut [OutfitSet]) {
    outfits.sort_by_key(|set| set.outfit.category);
}

/// Build stored by identity only, as found in catalogs and saved files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildTemplate {
    pub id: BuildId,
    pub name: String,
    pub hull: HullId,
    #[serde(default)]
    pub outfits: Vec<TemplateOutfit>,
}

/// Outfit reference and amount within a [`BuildTemplate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateOutfit {
    pub outfit: OutfitId,
    #[serde(default = "default_amount")]
    pub amount: u32,
}

fn default_amount() -> u32 {
    1
}
