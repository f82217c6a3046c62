#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod accessor;
pub mod asset_urls;
pub mod cache;
pub mod config;
pub mod error;
pub mod fetch;
pub mod models;

pub use accessor::ManifestAccessor;
pub use asset_urls::EntryAssets;
pub use cache::{CacheState, ManifestCache};
pub use config::{AccessorConfig, FailurePolicy};
pub use error::ManifestError;
pub use fetch::{AssetFetcher, AssetResponse, DirectoryFetcher};
pub use models::{ClientEntry, Manifest, ManifestEntry};
