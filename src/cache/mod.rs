use std::fs;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use uuid::Uuid;

use crate::error::{Result, SdGateError};
use crate::models::ImageArtifact;

/// Artifacts land under this subpath of the cache root.
const GENERATIONS_SUBDIR: &str = "image/generations";
/// URL prefix the plugin host maps onto the cache root.
const REFERENCE_PREFIX: &str = "/cache/image/generations";
const DEFAULT_EXTENSION: &str = ".png";

/// Append-only store for generated images. Filenames are fresh UUIDs, so
/// concurrent invocations sharing one directory cannot collide and no
/// locking is needed. Retention and cleanup are someone else's job.
pub struct ArtifactCache {
    dir: PathBuf,
}

impl ArtifactCache {
    pub fn new(root: impl AsRef<Path>) -> Result<Self> {
        let dir = root.as_ref().join(GENERATIONS_SUBDIR);
        fs::create_dir_all(&dir).map_err(|e| {
            SdGateError::PersistenceError(format!(
                "failed to create cache directory {}: {}",
                dir.display(),
                e
            ))
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Decode one base64 image and write it plus a JSON sidecar recording the
    /// payload that produced it.
    ///
    /// A `<meta>,<payload>` data-URI form gets its extension from the MIME
    /// type in the header; a bare base64 string defaults to `.png`. Earlier
    /// artifacts of the same batch stay on disk if a later one fails.
    pub fn save_b64_image(
        &self,
        b64_str: &str,
        payload: &serde_json::Value,
    ) -> Result<ImageArtifact> {
        let id = Uuid::new_v4();

        let (bytes, extension) = match b64_str.split_once(',') {
            Some((header, encoded)) => {
                let mime_type = header
                    .split(';')
                    .next()
                    .unwrap_or(header)
                    .trim_start_matches("data:");
                let bytes = BASE64
                    .decode(encoded)
                    .map_err(|e| SdGateError::PersistenceError(format!("Error saving image: {}", e)))?;
                (bytes, extension_for(mime_type))
            }
            None => {
                let bytes = BASE64
                    .decode(b64_str)
                    .map_err(|e| SdGateError::PersistenceError(format!("Error saving image: {}", e)))?;
                (bytes, DEFAULT_EXTENSION.to_string())
            }
        };

        let filename = format!("{}{}", id, extension);
        let file_path = self.dir.join(&filename);
        fs::write(&file_path, &bytes).map_err(|e| {
            SdGateError::PersistenceError(format!("Error saving image: {}", e))
        })?;

        let sidecar_path = self.dir.join(format!("{}.json", filename));
        let sidecar = serde_json::to_vec(payload)
            .map_err(|e| SdGateError::SerializationError(e.to_string()))?;
        fs::write(&sidecar_path, sidecar).map_err(|e| {
            SdGateError::PersistenceError(format!("Error saving image sidecar: {}", e))
        })?;

        log::debug!("Persisted image artifact {}", filename);

        Ok(ImageArtifact {
            id,
            url: format!("{}/{}", REFERENCE_PREFIX, filename),
            filename,
            file_path,
            sidecar_path,
        })
    }
}

fn extension_for(mime_type: &str) -> String {
    mime_guess::get_mime_extensions_str(mime_type)
        .and_then(|extensions| extensions.first())
        .map(|extension| format!(".{}", extension))
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;
    use serde_json::json;

    fn cache() -> (tempfile::TempDir, ArtifactCache) {
        let root = tempfile::tempdir().expect("tempdir");
        let cache = ArtifactCache::new(root.path()).expect("cache dir");
        (root, cache)
    }

    #[test]
    fn test_creates_generations_directory() {
        let (root, cache) = cache();
        assert_eq!(cache.dir(), root.path().join("image/generations"));
        assert!(cache.dir().is_dir());
    }

    #[test]
    fn test_bare_base64_defaults_to_png() {
        let (_root, cache) = cache();
        let bytes = b"not really a png, but bytes are bytes";
        let artifact = cache
            .save_b64_image(&BASE64.encode(bytes), &json!({"model": "eit_sdcore"}))
            .expect("save");

        assert!(artifact.filename.ends_with(".png"));
        assert_eq!(fs::read(&artifact.file_path).expect("read back"), bytes);
    }

    #[test]
    fn test_data_uri_round_trip_per_mime_type() {
        let (_root, cache) = cache();
        let payload = json!({"model": "eit_sdcore"});

        for (mime, expected_exts) in [
            ("image/png", &["png"][..]),
            ("image/jpeg", &["jpe", "jpeg", "jpg"][..]),
            ("image/gif", &["gif"][..]),
        ] {
            let bytes: Vec<u8> = (0u8..=255).collect();
            let b64 = format!("data:{};base64,{}", mime, BASE64.encode(&bytes));
            let artifact = cache.save_b64_image(&b64, &payload).expect("save");

            let extension = artifact
                .filename
                .rsplit_once('.')
                .map(|(_, ext)| ext)
                .expect("extension");
            assert!(
                expected_exts.contains(&extension),
                "unexpected extension {} for {}",
                extension,
                mime
            );
            assert_eq!(fs::read(&artifact.file_path).expect("read back"), bytes);
        }
    }

    #[test]
    fn test_sidecar_records_the_exact_payload() {
        let (_root, cache) = cache();
        let payload = json!({
            "prompt": "A cat",
            "model": "eit_sdcore",
            "metadata": {"tags": ["sdgate", "eit_sdcore", "unknown", "unknown"]}
        });

        let artifact = cache
            .save_b64_image(&BASE64.encode(b"pixels"), &payload)
            .expect("save");

        assert_eq!(
            artifact.sidecar_path,
            cache.dir().join(format!("{}.json", artifact.filename))
        );
        let written: serde_json::Value =
            serde_json::from_slice(&fs::read(&artifact.sidecar_path).expect("read sidecar"))
                .expect("sidecar json");
        assert_eq!(written, payload);
    }

    #[test]
    fn test_reference_points_under_the_cache_route() {
        let (_root, cache) = cache();
        let artifact = cache
            .save_b64_image(&BASE64.encode(b"pixels"), &json!({}))
            .expect("save");

        assert_eq!(
            artifact.url,
            format!("/cache/image/generations/{}", artifact.filename)
        );
        assert_eq!(artifact.filename, format!("{}.png", artifact.id));
    }

    #[test]
    fn test_invalid_base64_is_a_persistence_error() {
        let (_root, cache) = cache();
        let err = cache
            .save_b64_image("%%% definitely not base64 %%%", &json!({}))
            .expect_err("decode must fail");
        assert!(matches!(err, SdGateError::PersistenceError(_)));

        let err = cache
            .save_b64_image("data:image/png;base64,%%%", &json!({}))
            .expect_err("decode must fail");
        assert!(matches!(err, SdGateError::PersistenceError(_)));
    }
}
