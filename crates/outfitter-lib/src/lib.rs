//! Outfitter library entry points.
//!
//! This crate holds the ship loadout engine: it loads a catalog of hulls and
//! outfits, resolves template builds, checks how many units of an outfit can
//! be added or removed, applies those changes, and derives performance
//! aggregates. Higher-level consumers (the CLI) should only depend on the
//! functions exported here instead of reimplementing behavior.

#![deny(warnings)]

pub mod aggregates;
pub mod cache;
pub mod catalog;
pub mod dataset;
pub mod error;
pub mod ledger;
pub mod mutator;
pub mod ship;
pub mod validator;

pub use aggregates::{compute_aggregates, cooling_efficiency, AggregateBundle};
pub use cache::{AggregateCache, BuildKey};
pub use catalog::{resolve_build, Catalog, CatalogDocument};
pub use dataset::{default_catalog_path, load_catalog, resolve_catalog_path};
pub use error::{Error, Result};
pub use mutator::{add_outfit, remove_outfit, AmmoRemoval, OutfitChange};
pub use ship::{
    Attribute, Build, BuildId, BuildTemplate, Hull, HullId, Outfit, OutfitCategory, OutfitId,
    OutfitSet,
};
pub use validator::{
    max_units_to_add, max_units_to_remove, units_to_add, violations, AmmoCascade, Constraint,
    LimitingFactor, Removal, Violation,
};
