//! Ship data types: attribute schema, hulls, outfits, and builds.
//!
//! This module is organized into focused submodules:
//!
//! - [`attributes`] - Fixed numeric attribute schema shared by hulls and outfits
//! - [`hull`] - Hull reference records
//! - [`outfit`] - Outfit reference records, categories, and ammunition roles
//! - [`build`] - Resolved builds, outfit sets, and identity-only templates
//! - [`ids`] - Identity newtypes
//! - [`constants`] - Shared constants used across calculations
//!
//! # Example
//!
//! ```
//! use outfitter_lib::ship::{Attribute, Outfit};
//!
//! let outfit: Outfit = serde_json::from_str(
//!     r#"{"id": "blaster", "name": "Blaster", "category": "Guns", "outfit_space": -11}"#,
//! )
//! .unwrap();
//! assert_eq!(outfit.attribute(Attribute::OutfitSpace), -11.0);
//! assert_eq!(outfit.attribute(Attribute::Thrust), 0.0);
//! ```

pub mod attributes;
pub mod build;
pub mod constants;
pub mod hull;
pub mod ids;
pub mod outfit;

pub use attributes::{Attribute, Attributes, CONSTRAINED_ATTRIBUTES};
pub use build::{sort_by_category, Build, BuildTemplate, OutfitSet, TemplateOutfit};
pub use constants::{
    ACCELERATION_SCALE, COPY_SUFFIX, FRAMES_PER_SECOND, HEAT_DISSIPATION_SCALE, SPEED_SCALE,
    TURN_SCALE,
};
pub use hull::Hull;
pub use ids::{BuildId, HullId, OutfitId};
pub use outfit::{Outfit, OutfitCategory, WeaponStats};
