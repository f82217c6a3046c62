//! Cached access to the build manifest.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::asset_urls::{EntryAssets, collect_entry_assets, public_asset_path};
use crate::cache::{CacheState, ManifestCache};
use crate::config::{AccessorConfig, FailurePolicy};
use crate::error::ManifestError;
use crate::fetch::AssetFetcher;
use crate::models::{ClientEntry, Manifest, ManifestEntry};

/// Loads the manifest through a caller supplied fetcher and answers lookups against it.
///
/// The accessor holds no transport of its own. Each operation takes the fetcher to use, and
/// the fetcher is only invoked while the cache is unset.
#[derive(Debug, Clone)]
pub struct ManifestAccessor {
  config: AccessorConfig,
  cache: Arc<ManifestCache>,
}

impl ManifestAccessor {
  /// Create an accessor with its own empty cache.
  pub fn new(config: AccessorConfig) -> Self {
    Self::with_cache(config, Arc::new(ManifestCache::new()))
  }

  /// Create an accessor over an existing cache, shared with whoever else holds it.
  pub fn with_cache(config: AccessorConfig, cache: Arc<ManifestCache>) -> Self {
    Self { config, cache }
  }

  /// Configuration in use.
  pub fn config(&self) -> &AccessorConfig {
    &self.config
  }

  /// Cache backing this accessor.
  pub fn cache(&self) -> &Arc<ManifestCache> {
    &self.cache
  }

  /// Return the cached manifest, fetching it first when nothing is cached.
  ///
  /// `Ok(None)` means no manifest is available: the fetcher failed or answered with a
  /// non-success status. Only a successful response with an unparseable body is an error.
  pub async fn load_manifest<F: AssetFetcher>(
    &self,
    fetcher: &F,
  ) -> Result<Option<Arc<Manifest>>, ManifestError> {
    match self.cache.get().await {
      CacheState::Loaded(manifest) => {
        debug!("manifest cache hit");
        return Ok(Some(manifest));
      }
      CacheState::Failed => {
        debug!("manifest previously failed to load");
        return Ok(None);
      }
      CacheState::Unset => {}
    }

    let path = self.config.manifest_path.as_str();
    debug!(path, "fetching manifest");

    let response = match fetcher.fetch_asset(path).await {
      Ok(response) => response,
      Err(err) => {
        warn!(path, error = %err, "manifest fetch failed");
        if self.config.failure_policy == FailurePolicy::Remember {
          self.cache.mark_failed().await;
        }
        return Ok(None);
      }
    };

    if !response.ok() {
      warn!(path, status = response.status(), "manifest unavailable");
      return Ok(None);
    }

    let manifest: Manifest = response.json().map_err(|source| ManifestError::Parse {
      path: path.to_string(),
      source,
    })?;
    let manifest = Arc::new(manifest);
    self.cache.set(Arc::clone(&manifest)).await;
    debug!(path, entries = manifest.len(), "manifest cached");

    Ok(Some(manifest))
  }

  /// Drop the cached manifest so the next load fetches again.
  pub async fn clear_cache(&self) {
    self.cache.clear().await;
  }

  /// Find the first entry, in manifest order, whose key contains `pattern`.
  ///
  /// An empty pattern matches nothing and does not touch the fetcher.
  pub async fn get_manifest_entry<F: AssetFetcher>(
    &self,
    pattern: &str,
    fetcher: &F,
  ) -> Result<Option<ManifestEntry>, ManifestError> {
    if pattern.is_empty() {
      return Ok(None);
    }

    let Some(manifest) = self.load_manifest(fetcher).await? else {
      return Ok(None);
    };

    Ok(manifest.find(pattern).map(|(_, entry)| entry.clone()))
  }

  /// Resolve script and stylesheet paths of the client bootstrap entry.
  ///
  /// Without a manifest, or without the entry in it, the unbuilt source path is returned so
  /// the dev server can serve it.
  pub async fn get_client_entry<F: AssetFetcher>(
    &self,
    fetcher: &F,
  ) -> Result<ClientEntry, ManifestError> {
    let key = self.config.client_entry.as_str();
    let manifest = self.load_manifest(fetcher).await?;

    let Some(entry) = manifest.as_deref().and_then(|manifest| manifest.get(key)) else {
      return Ok(ClientEntry {
        script_path: public_asset_path("/", key),
        style_path: None,
      });
    };

    let base = self.config.public_base.as_str();
    Ok(ClientEntry {
      script_path: public_asset_path(base, &entry.file),
      style_path: entry.css().first().map(|css| public_asset_path(base, css)),
    })
  }

  /// Resolve everything needed to load the entry stored under exactly `key`.
  pub async fn get_entry_assets<F: AssetFetcher>(
    &self,
    key: &str,
    fetcher: &F,
  ) -> Result<Option<EntryAssets>, ManifestError> {
    let Some(manifest) = self.load_manifest(fetcher).await? else {
      return Ok(None);
    };

    Ok(collect_entry_assets(
      &manifest,
      key,
      &self.config.public_base,
    ))
  }
}
