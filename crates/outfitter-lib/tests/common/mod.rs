//! Common test utilities and fixture helpers.

use std::num::NonZeroU32;
use std::path::PathBuf;

use outfitter_lib::{Build, Catalog, HullId, Outfit, OutfitId};

/// Path to the fixture catalog shared by the library and CLI tests.
pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/catalog.json")
}

pub fn fixture_catalog() -> Catalog {
    Catalog::from_path(&fixture_path()).expect("fixture catalog should load")
}

/// Empty build on a fixture hull.
#[allow(dead_code)]
pub fn empty_build(catalog: &Catalog, hull: &str) -> Build {
    let hull = catalog.hull(&HullId::new(hull)).expect("fixture hull");
    Build::new("test", hull.name.clone(), hull.clone())
}

/// Working copy of a fixture hull's default build.
#[allow(dead_code)]
pub fn default_build(catalog: &Catalog, hull: &str) -> Build {
    catalog
        .default_build(&HullId::new(hull), "test")
        .expect("fixture default build")
}

#[allow(dead_code)]
pub fn outfit<'a>(catalog: &'a Catalog, id: &str) -> &'a Outfit {
    catalog.outfit(&OutfitId::new(id)).expect("fixture outfit")
}

#[allow(dead_code)]
pub fn units(amount: u32) -> NonZeroU32 {
    NonZeroU32::new(amount).expect("non-zero amount")
}
