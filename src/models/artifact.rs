use std::path::PathBuf;

use serde::Serialize;
use uuid::Uuid;

/// A persisted image plus its provenance sidecar. Created once during
/// response handling and never touched again by this crate.
#[derive(Debug, Clone, Serialize)]
pub struct ImageArtifact {
    pub id: Uuid,
    /// `{uuid}{ext}` as written under the cache directory.
    pub filename: String,
    pub file_path: PathBuf,
    pub sidecar_path: PathBuf,
    /// Caller-facing URL path; the leading `/cache` mapping is the host's
    /// routing concern.
    pub url: String,
}
