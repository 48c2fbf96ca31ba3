use std::path::PathBuf;

use thiserror::Error;

use crate::ship::{BuildId, HullId, OutfitId};

/// Convenient result alias for the outfitter library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// Capacity exhaustion is never an error; see [`crate::LimitingFactor`].
/// Everything here indicates corrupt or missing reference data.
#[derive(Debug, Error)]
pub enum Error {
    /// A build or lookup referenced a hull the catalog does not contain.
    #[error("unknown hull id: {id}")]
    UnknownHull { id: HullId },

    /// A build or lookup referenced an outfit the catalog does not contain.
    #[error("unknown outfit id: {id}")]
    UnknownOutfit { id: OutfitId },

    /// A hull named a default build that is missing from the catalog.
    #[error("unknown build id: {id}")]
    UnknownBuild { id: BuildId },

    /// Raised when the same identity appears twice in one catalog section.
    #[error("duplicate {kind} id encountered: {id}")]
    DuplicateId { kind: &'static str, id: String },

    /// Raised when catalog records fail validation.
    #[error("invalid catalog data: {message}")]
    CatalogValidation { message: String },

    /// Catalog file could not be located at the resolved path.
    #[error("catalog not found at {}", path.display())]
    CatalogNotFound { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the catalog")]
    ProjectDirsUnavailable,

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON parsing errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
