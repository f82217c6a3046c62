use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context;

use super::{AssetFetcher, AssetResponse};

/// Serves assets straight from a build output directory such as `dist/`.
///
/// Request paths are resolved relative to the root regardless of a leading slash. Paths that
/// try to leave the root are answered with `400`, missing files with `404`.
#[derive(Debug, Clone)]
pub struct DirectoryFetcher {
    root: PathBuf,
}

impl DirectoryFetcher {
    /// Serve files below `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory files are served from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, request_path: &str) -> Option<PathBuf> {
        let normalised = request_path.replace('\\', "/");
        let mut resolved = self.root.clone();
        for segment in normalised.split('/') {
            match segment {
                "" | "." => continue,
                ".." => return None,
                segment => resolved.push(segment),
            }
        }
        Some(resolved)
    }
}

impl AssetFetcher for DirectoryFetcher {
    async fn fetch_asset(&self, path: &str) -> anyhow::Result<AssetResponse> {
        let Some(file_path) = self.resolve(path) else {
            tracing::warn!(path, "rejecting asset path outside of the served directory");
            return Ok(AssetResponse::new(400, Vec::new()));
        };

        match tokio::fs::read(&file_path).await {
            Ok(body) => Ok(AssetResponse::new(200, body)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(AssetResponse::not_found()),
            Err(err) => {
                Err(err).with_context(|| format!("failed to read {}", file_path.display()))
            }
        }
    }
}
