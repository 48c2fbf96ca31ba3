//! Catalog file location and release selection.

use std::env;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::debug;

use crate::catalog::Catalog;
use crate::error::{Error, Result};

/// Default filename for the catalog document.
pub const CATALOG_FILENAME: &str = "catalog.json";

/// Environment variable overriding the catalog location.
pub const CATALOG_ENV_VAR: &str = "OUTFITTER_CATALOG";

/// Environment variable selecting a single release.
pub const RELEASE_ENV_VAR: &str = "OUTFITTER_RELEASE";

/// Resolve the default catalog location using platform-specific project directories.
pub fn default_catalog_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("com", "outfitter", "outfitter").ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().join(CATALOG_FILENAME))
}

/// Locate the catalog file.
///
/// The resolution order is:
/// 1. Explicit `target` argument when provided.
/// 2. `OUTFITTER_CATALOG` environment variable.
/// 3. Platform-specific project data directory.
///
/// A path without an extension is treated as a directory holding
/// `catalog.json`. The resolved file must exist.
pub fn resolve_catalog_path(target: Option<&Path>) -> Result<PathBuf> {
    let path = match target {
        Some(explicit) => canonical_catalog_path(explicit),
        None => match env::var_os(CATALOG_ENV_VAR) {
            Some(env_path) => canonical_catalog_path(Path::new(&env_path)),
            None => default_catalog_path()?,
        },
    };

    if !path.is_file() {
        return Err(Error::CatalogNotFound { path });
    }
    debug!(path = %path.display(), "resolved catalog path");
    Ok(path)
}

/// Release to filter by: the explicit value, else `OUTFITTER_RELEASE`.
pub fn resolve_release(explicit: Option<&str>) -> Option<String> {
    explicit
        .map(str::to_string)
        .or_else(|| env::var(RELEASE_ENV_VAR).ok())
        .map(|release| release.trim().to_string())
        .filter(|release| !release.is_empty())
}

/// Resolve, load and optionally release-filter the catalog.
pub fn load_catalog(target: Option<&Path>, release: Option<&str>) -> Result<Catalog> {
    let path = resolve_catalog_path(target)?;
    let catalog = Catalog::from_path(&path)?;
    Ok(match resolve_release(release) {
        Some(release) => catalog.for_release(&release),
        None => catalog,
    })
}

fn canonical_catalog_path(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        return path.to_path_buf();
    }
    path.join(CATALOG_FILENAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_targets_gain_the_catalog_filename() {
        assert_eq!(
            canonical_catalog_path(Path::new("/data/outfitter")),
            PathBuf::from("/data/outfitter/catalog.json")
        );
        assert_eq!(
            canonical_catalog_path(Path::new("/data/ships.json")),
            PathBuf::from("/data/ships.json")
        );
    }

    #[test]
    fn explicit_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.json");
        match resolve_catalog_path(Some(&missing)) {
            Err(Error::CatalogNotFound { path }) => assert_eq!(path, missing),
            other => panic!("expected CatalogNotFound, got {other:?}"),
        }
    }

    #[test]
    fn explicit_release_wins_and_blank_is_ignored() {
        assert_eq!(resolve_release(Some(" base ")), Some("base".to_string()));
        assert_eq!(resolve_release(Some("  ")), None);
    }
}
