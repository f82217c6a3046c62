//! In-memory holder for the parsed manifest.
//!
//! The cache is an ordinary value owned by whoever wires the server together, usually shared
//! through an `Arc`. Nothing expires on its own; state only changes through the methods below.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::Manifest;

/// Snapshot of what the cache currently holds.
#[derive(Debug, Clone, Default)]
pub enum CacheState {
  /// Nothing loaded yet, or cleared since.
  #[default]
  Unset,
  /// A manifest was fetched and parsed.
  Loaded(Arc<Manifest>),
  /// A fetch failed and the failure is being remembered.
  Failed,
}

/// Process-local manifest cache.
///
/// Two callers that both observe [`CacheState::Unset`] may both fetch; the later store wins.
/// Every deployment ships a single manifest, so both stores carry the same contents.
#[derive(Debug, Default)]
pub struct ManifestCache {
  state: RwLock<CacheState>,
}

impl ManifestCache {
  /// Create an empty cache.
  pub fn new() -> Self {
    Self::default()
  }

  /// Current state.
  pub async fn get(&self) -> CacheState {
    self.state.read().await.clone()
  }

  /// Cached manifest, if one is loaded.
  pub async fn manifest(&self) -> Option<Arc<Manifest>> {
    match &*self.state.read().await {
      CacheState::Loaded(manifest) => Some(Arc::clone(manifest)),
      CacheState::Unset | CacheState::Failed => None,
    }
  }

  /// Store a freshly parsed manifest.
  pub async fn set(&self, manifest: Arc<Manifest>) {
    *self.state.write().await = CacheState::Loaded(manifest);
  }

  /// Remember that loading failed.
  pub async fn mark_failed(&self) {
    *self.state.write().await = CacheState::Failed;
  }

  /// Forget whatever is cached.
  pub async fn clear(&self) {
    *self.state.write().await = CacheState::Unset;
  }
}
