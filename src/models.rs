//! Data structures describing the Vite build manifest and the values derived from it.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One build output unit recorded in the manifest.
///
/// Field names follow the manifest written by Vite and must not be renamed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntry {
  /// Hashed output path relative to the asset root.
  pub file: String,
  /// Source path the output was built from.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub src: Option<String>,
  /// Logical chunk name.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  /// Set when the chunk is a build entry point.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub is_entry: Option<bool>,
  /// Set when the chunk is only reachable through a dynamic import.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub is_dynamic_entry: Option<bool>,
  /// Stylesheets emitted for the chunk, in emission order.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub css: Option<Vec<String>>,
  /// Manifest keys of statically imported chunks.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub imports: Option<Vec<String>>,
  /// Manifest keys of dynamically imported chunks.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub dynamic_imports: Option<Vec<String>>,
  /// Non-code assets referenced by the chunk.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub assets: Option<Vec<String>>,
}

impl ManifestEntry {
  /// Whether the chunk is a build entry point. Absence of the flag means `false`.
  pub fn is_entry(&self) -> bool {
    self.is_entry.unwrap_or(false)
  }

  /// Whether the chunk is a dynamic entry. Absence of the flag means `false`.
  pub fn is_dynamic_entry(&self) -> bool {
    self.is_dynamic_entry.unwrap_or(false)
  }

  /// Stylesheets of the chunk, empty when the field is absent.
  pub fn css(&self) -> &[String] {
    self.css.as_deref().unwrap_or_default()
  }

  /// Static imports of the chunk, empty when the field is absent.
  pub fn imports(&self) -> &[String] {
    self.imports.as_deref().unwrap_or_default()
  }
}

/// Mapping from source path to build output, in the order the JSON document lists them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Manifest {
  entries: IndexMap<String, ManifestEntry>,
}

impl Manifest {
  /// Exact key lookup.
  pub fn get(&self, key: &str) -> Option<&ManifestEntry> {
    self.entries.get(key)
  }

  /// Return the first entry, in document order, whose key contains `pattern`.
  ///
  /// Matching is a plain case-sensitive substring test on the key.
  pub fn find(&self, pattern: &str) -> Option<(&str, &ManifestEntry)> {
    self
      .entries
      .iter()
      .find(|(key, _)| key.contains(pattern))
      .map(|(key, entry)| (key.as_str(), entry))
  }

  /// Iterate over all entries in document order.
  pub fn iter(&self) -> impl Iterator<Item = (&str, &ManifestEntry)> {
    self
      .entries
      .iter()
      .map(|(key, entry)| (key.as_str(), entry))
  }

  /// Iterate over all keys in document order.
  pub fn keys(&self) -> impl Iterator<Item = &str> {
    self.entries.keys().map(String::as_str)
  }

  /// Entries flagged with `isEntry`.
  pub fn entries(&self) -> impl Iterator<Item = (&str, &ManifestEntry)> {
    self.iter().filter(|(_, entry)| entry.is_entry())
  }

  /// Number of entries.
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Returns `true` for a manifest without entries.
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

impl FromIterator<(String, ManifestEntry)> for Manifest {
  fn from_iter<T: IntoIterator<Item = (String, ManifestEntry)>>(iter: T) -> Self {
    Self {
      entries: iter.into_iter().collect(),
    }
  }
}

/// Script and stylesheet references for the client bootstrap bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientEntry {
  /// Public path of the client script.
  pub script_path: String,
  /// Public path of the first stylesheet emitted for the client entry.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub style_path: Option<String>,
}
