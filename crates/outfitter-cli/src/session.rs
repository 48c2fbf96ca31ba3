//! Working-build loading and saving.
//!
//! A saved build is a [`BuildTemplate`] JSON file. Commands either start from
//! a hull's default build or resume from such a file.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::debug;

use outfitter_lib::{Build, BuildTemplate, Catalog, HullId};

/// Identity given to a working copy of a hull's default build.
pub const WORKING_BUILD_ID: &str = "working";

/// Load the build a command operates on.
///
/// With `file` present and existing, the saved template is resolved and must
/// be for `hull`. Otherwise the hull's default build is used; a missing file
/// is only acceptable when `allow_missing` is set (the caller will create it).
pub fn load_build(
    catalog: &Catalog,
    hull: &str,
    file: Option<&Path>,
    allow_missing: bool,
) -> Result<Build> {
    let hull_id = HullId::new(hull);

    if let Some(path) = file {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("failed to read build file {}", path.display()))?;
            let template: BuildTemplate = serde_json::from_str(&contents)
                .with_context(|| format!("failed to parse build file {}", path.display()))?;
            if template.hull != hull_id {
                bail!(
                    "build file {} is for hull {}, not {}",
                    path.display(),
                    template.hull,
                    hull_id
                );
            }
            debug!(path = %path.display(), build = %template.id, "resuming saved build");
            return catalog
                .resolve_build(&template)
                .with_context(|| format!("failed to resolve build file {}", path.display()));
        }
        if !allow_missing {
            bail!("build file {} does not exist", path.display());
        }
    }

    catalog
        .default_build(&hull_id, WORKING_BUILD_ID)
        .with_context(|| format!("failed to create a build for hull {hull_id}"))
}

/// Write `build` to `path` as an identity-only template.
pub fn save_build(build: &Build, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(&build.to_template())
        .context("failed to serialize build")?;
    fs::write(path, json + "\n")
        .with_context(|| format!("failed to write build file {}", path.display()))?;
    debug!(path = %path.display(), build = %build.id, "saved build");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"{
        "hulls": [{"id": "skiff", "name": "Skiff", "outfit_space": 10}],
        "outfits": [{"id": "pod", "name": "Pod", "outfit_space": -2}]
    }"#;

    #[test]
    fn saved_build_round_trips_through_a_file() {
        let catalog = Catalog::from_json_str(CATALOG).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("skiff.json");

        let build = load_build(&catalog, "skiff", Some(&path), true).unwrap();
        assert_eq!(build.name, "Skiff");
        save_build(&build, &path).unwrap();

        let resumed = load_build(&catalog, "skiff", Some(&path), false).unwrap();
        assert_eq!(resumed, build);
    }

    #[test]
    fn missing_file_is_an_error_unless_allowed() {
        let catalog = Catalog::from_json_str(CATALOG).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let err = load_build(&catalog, "skiff", Some(&path), false).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }
}
