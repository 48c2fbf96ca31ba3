//! Catalog loading, validation and build resolution.
//!
//! A catalog is a JSON document with three sections:
//!
//! ```json
//! { "hulls": [...], "outfits": [...], "builds": [...] }
//! ```
//!
//! Hulls and outfits carry their attributes inline; builds are identity-only
//! templates. Loading validates every record and every cross-reference, so a
//! catalog that loads successfully resolves all of its own templates.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::ship::{
    sort_by_category, Build, BuildId, BuildTemplate, Hull, HullId, Outfit, OutfitId, OutfitSet,
};

/// On-disk layout of a catalog file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub hulls: Vec<Hull>,
    #[serde(default)]
    pub outfits: Vec<Outfit>,
    #[serde(default)]
    pub builds: Vec<BuildTemplate>,
}

/// Read-only reference data: hulls, outfits and template builds.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    hulls: HashMap<HullId, Hull>,
    outfits: HashMap<OutfitId, Outfit>,
    builds: HashMap<BuildId, BuildTemplate>,
    source: Option<PathBuf>,
}

impl Catalog {
    /// Load a catalog from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::CatalogNotFound {
                path: path.to_path_buf(),
            });
        }

        debug!(path = %path.display(), "loading catalog");
        let file = fs::File::open(path)?;
        let mut catalog = Self::from_reader(file)?;
        catalog.source = Some(path.to_path_buf());
        Ok(catalog)
    }

    /// Load a catalog from a reader (e.g., file or in-memory buffer).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let document: CatalogDocument = serde_json::from_reader(reader)?;
        Self::from_document(document)
    }

    /// Load a catalog from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::from_document(document)
    }

    /// Validate a parsed document and index it by identity.
    pub fn from_document(document: CatalogDocument) -> Result<Self> {
        let mut hulls = HashMap::with_capacity(document.hulls.len());
        for hull in document.hulls {
            hull.validate()?;
            if hulls.contains_key(&hull.id) {
                return Err(Error::DuplicateId {
                    kind: "hull",
                    id: hull.id.to_string(),
                });
            }
            hulls.insert(hull.id.clone(), hull);
        }

        let mut outfits = HashMap::with_capacity(document.outfits.len());
        for mut outfit in document.outfits {
            outfit.validate()?;
            outfit.derive_weapon_rates();
            if outfits.contains_key(&outfit.id) {
                return Err(Error::DuplicateId {
                    kind: "outfit",
                    id: outfit.id.to_string(),
                });
            }
            outfits.insert(outfit.id.clone(), outfit);
        }

        let mut builds = HashMap::with_capacity(document.builds.len());
        for template in document.builds {
            if builds.contains_key(&template.id) {
                return Err(Error::DuplicateId {
                    kind: "build",
                    id: template.id.to_string(),
                });
            }
            builds.insert(template.id.clone(), template);
        }

        let mut catalog = Self {
            hulls,
            outfits,
            builds,
            source: None,
        };
        catalog.check_references()?;
        catalog.link_ammo_names();

        info!(
            hulls = catalog.hulls.len(),
            outfits = catalog.outfits.len(),
            builds = catalog.builds.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    fn check_references(&self) -> Result<()> {
        for outfit in self.outfits.values() {
            if let Some(ammo) = &outfit.ammo {
                if !self.outfits.contains_key(ammo) {
                    return Err(Error::UnknownOutfit { id: ammo.clone() });
                }
            }
        }

        for hull in self.hulls.values() {
            if let Some(build) = &hull.default_build {
                let template = self.build_template(build)?;
                if template.hull != hull.id {
                    return Err(Error::CatalogValidation {
                        message: format!(
                            "default build {} of hull {} is for hull {}",
                            build, hull.id, template.hull
                        ),
                    });
                }
            }
        }

        for template in self.builds.values() {
            resolve_build(template, &self.hulls, &self.outfits)?;
        }

        Ok(())
    }

    fn link_ammo_names(&mut self) {
        let names: Vec<(OutfitId, String)> = self
            .outfits
            .values()
            .filter_map(|outfit| {
                let ammo = self.outfits.get(outfit.ammo.as_ref()?)?;
                Some((outfit.id.clone(), ammo.name.clone()))
            })
            .collect();

        for (id, name) in names {
            if let Some(outfit) = self.outfits.get_mut(&id) {
                outfit.ammo_name = Some(name);
            }
        }
    }

    /// Restrict the catalog to records tagged with `release`.
    ///
    /// Templates whose hull or outfits fall outside the release are dropped, as
    /// are default-build links to them. An outfit whose ammunition falls
    /// outside the release loses its ammo link and storage.
    pub fn for_release(&self, release: &str) -> Catalog {
        let kept: HashSet<&OutfitId> = self
            .outfits
            .values()
            .filter(|outfit| outfit.release == release)
            .map(|outfit| &outfit.id)
            .collect();

        let outfits: HashMap<OutfitId, Outfit> = self
            .outfits
            .iter()
            .filter(|(id, _)| kept.contains(id))
            .map(|(id, outfit)| {
                let mut outfit = outfit.clone();
                if outfit.ammo.as_ref().is_some_and(|ammo| !kept.contains(ammo)) {
                    warn!(outfit = %outfit.id, release, "dropping ammo link outside release");
                    outfit.ammo = None;
                    outfit.ammo_name = None;
                    outfit.ammo_capacity = 0;
                }
                (id.clone(), outfit)
            })
            .collect();

        let builds: HashMap<BuildId, BuildTemplate> = self
            .builds
            .iter()
            .filter(|(_, template)| {
                let hull_kept = self
                    .hulls
                    .get(&template.hull)
                    .is_some_and(|hull| hull.release == release);
                let outfits_kept = template
                    .outfits
                    .iter()
                    .all(|entry| outfits.contains_key(&entry.outfit));
                if hull_kept && !outfits_kept {
                    warn!(build = %template.id, release, "dropping build with outfits outside release");
                }
                hull_kept && outfits_kept
            })
            .map(|(id, template)| (id.clone(), template.clone()))
            .collect();

        let hulls = self
            .hulls
            .iter()
            .filter(|(_, hull)| hull.release == release)
            .map(|(id, hull)| {
                let mut hull = hull.clone();
                if hull
                    .default_build
                    .as_ref()
                    .is_some_and(|build| !builds.contains_key(build))
                {
                    hull.default_build = None;
                }
                (id.clone(), hull)
            })
            .collect();

        Catalog {
            hulls,
            outfits,
            builds,
            source: self.source.clone(),
        }
    }

    pub fn hull(&self, id: &HullId) -> Result<&Hull> {
        self.hulls
            .get(id)
            .ok_or_else(|| Error::UnknownHull { id: id.clone() })
    }

    pub fn outfit(&self, id: &OutfitId) -> Result<&Outfit> {
        self.outfits
            .get(id)
            .ok_or_else(|| Error::UnknownOutfit { id: id.clone() })
    }

    pub fn build_template(&self, id: &BuildId) -> Result<&BuildTemplate> {
        self.builds
            .get(id)
            .ok_or_else(|| Error::UnknownBuild { id: id.clone() })
    }

    /// All hulls sorted by name.
    pub fn hulls(&self) -> Vec<&Hull> {
        let mut hulls: Vec<&Hull> = self.hulls.values().collect();
        hulls.sort_by(|a, b| a.name.cmp(&b.name));
        hulls
    }

    /// All outfits in canonical category order, then by name.
    pub fn outfits(&self) -> Vec<&Outfit> {
        let mut outfits: Vec<&Outfit> = self.outfits.values().collect();
        outfits.sort_by(|a, b| a.category.cmp(&b.category).then_with(|| a.name.cmp(&b.name)));
        outfits
    }

    /// Template builds for one hull, sorted by name.
    pub fn builds_for_hull(&self, hull: &HullId) -> Vec<&BuildTemplate> {
        let mut builds: Vec<&BuildTemplate> = self
            .builds
            .values()
            .filter(|template| template.hull == *hull)
            .collect();
        builds.sort_by(|a, b| a.name.cmp(&b.name));
        builds
    }

    /// Resolve a template against this catalog.
    pub fn resolve_build(&self, template: &BuildTemplate) -> Result<Build> {
        resolve_build(template, &self.hulls, &self.outfits)
    }

    /// Fresh working build for a hull.
    ///
    /// Uses the hull's default template, copied under `id` and named
    /// "<template name> (Copy)". A hull without a default starts empty and
    /// takes the hull's name.
    pub fn default_build(&self, hull: &HullId, id: impl Into<BuildId>) -> Result<Build> {
        let hull = self.hull(hull)?;
        match &hull.default_build {
            Some(build) => {
                let template = self.build_template(build)?;
                Ok(self.resolve_build(template)?.duplicate(id))
            }
            None => Ok(Build::new(id, hull.name.clone(), hull.clone())),
        }
    }

    /// Get the source path if the catalog was loaded from a file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

/// Resolve an identity-only template into a build.
///
/// Fails on the first identity missing from `hulls` or `outfits`; never
/// returns a partial build. Repeated outfit entries are merged and zero
/// amounts are skipped.
pub fn resolve_build(
    template: &BuildTemplate,
    hulls: &HashMap<HullId, Hull>,
    outfits: &HashMap<OutfitId, Outfit>,
) -> Result<Build> {
    let hull = hulls.get(&template.hull).ok_or_else(|| Error::UnknownHull {
        id: template.hull.clone(),
    })?;

    let mut sets: Vec<OutfitSet> = Vec::with_capacity(template.outfits.len());
    for entry in &template.outfits {
        let outfit = outfits
            .get(&entry.outfit)
            .ok_or_else(|| Error::UnknownOutfit {
                id: entry.outfit.clone(),
            })?;
        if entry.amount == 0 {
            continue;
        }
        match sets.iter_mut().find(|set| set.outfit.id == entry.outfit) {
            Some(set) => set.amount = set.amount.saturating_add(entry.amount),
            None => sets.push(OutfitSet::new(outfit.clone(), entry.amount)),
        }
    }
    sort_by_category(&mut sets);

    Ok(Build {
        id: template.id.clone(),
        name: template.name.clone(),
        hull: hull.clone(),
        outfits: sets,
    })
}
