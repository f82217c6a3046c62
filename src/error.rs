//! Errors surfaced to callers of the manifest accessor.

use thiserror::Error;

/// Failures that are not recovered into a "no manifest" result.
///
/// Fetch errors and non-success responses never appear here; they resolve to `None`.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest response was successful but its body was not a valid manifest.
    #[error("failed to parse manifest JSON from {path}")]
    Parse {
        /// Path that was requested from the fetcher.
        path: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}
