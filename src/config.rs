//! Accessor configuration with defaults matching a stock Vite build.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = "asset-manifest.config.json";

/// Path Vite writes its manifest to when `build.manifest` is enabled.
pub const DEFAULT_MANIFEST_PATH: &str = "/.vite/manifest.json";

/// Manifest key of the client bootstrap script.
pub const DEFAULT_CLIENT_ENTRY: &str = "src/client.ts";

/// What the accessor remembers after the fetcher itself fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FailurePolicy {
    /// Leave the cache unset so the next call fetches again.
    #[default]
    Retry,
    /// Record the failure and answer "no manifest" until the cache is cleared.
    Remember,
}

/// Settings shared by every lookup made through a [`crate::ManifestAccessor`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccessorConfig {
    /// Path handed to the fetcher when loading the manifest.
    pub manifest_path: String,
    /// Manifest key resolved by [`crate::ManifestAccessor::get_client_entry`].
    pub client_entry: String,
    /// Public URL prefix that built assets are served under.
    pub public_base: String,
    /// Cache behaviour after a failed fetch.
    pub failure_policy: FailurePolicy,
}

impl Default for AccessorConfig {
    fn default() -> Self {
        Self {
            manifest_path: DEFAULT_MANIFEST_PATH.into(),
            client_entry: DEFAULT_CLIENT_ENTRY.into(),
            public_base: "/".into(),
            failure_policy: FailurePolicy::Retry,
        }
    }
}

impl AccessorConfig {
    /// Look for a configuration file in `dir`.
    ///
    /// A missing or unreadable file yields the defaults.
    pub fn discover(dir: &Path) -> Self {
        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        if !candidate.exists() {
            return Self::default();
        }
        match Self::load(&candidate) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(path = %candidate.display(), error = %err, "ignoring accessor config");
                Self::default()
            }
        }
    }

    /// Read configuration from a specific JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Use a different failure policy.
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Serve assets under a different public base.
    pub fn with_public_base(mut self, base: impl Into<String>) -> Self {
        self.public_base = base.into();
        self
    }
}
