//! The fetch capability the accessor reads the manifest through.
//!
//! The accessor never constructs a fetcher itself. Callers hand one in on every call, which
//! keeps the transport (an asset binding, an HTTP client, the local build directory) out of
//! this crate.

mod directory;
mod response;

use std::future::Future;

pub use directory::DirectoryFetcher;
pub use response::AssetResponse;

/// Asynchronous retrieval of a named asset.
///
/// Returning `Err` means the fetch itself failed (network error, rejected promise, panic in a
/// binding); a reachable asset server answering with an error status should return `Ok` with a
/// non-success [`AssetResponse`] instead.
#[allow(async_fn_in_trait)]
pub trait AssetFetcher {
    /// Fetch the asset at `path`.
    async fn fetch_asset(&self, path: &str) -> anyhow::Result<AssetResponse>;
}

impl<T: AssetFetcher + ?Sized> AssetFetcher for &T {
    async fn fetch_asset(&self, path: &str) -> anyhow::Result<AssetResponse> {
        (**self).fetch_asset(path).await
    }
}

/// Fetcher backed by a closure, see [`from_fn`].
#[derive(Clone)]
pub struct FnFetcher<F> {
    f: F,
}

/// Wrap an async closure into an [`AssetFetcher`].
///
/// ```
/// use asset_manifest::fetch::{self, AssetResponse};
///
/// let fetcher = fetch::from_fn(|path: String| async move {
///     if path == "/.vite/manifest.json" {
///         Ok::<_, anyhow::Error>(AssetResponse::json_body("{}"))
///     } else {
///         Ok(AssetResponse::not_found())
///     }
/// });
/// # let _ = fetcher;
/// ```
pub fn from_fn<F, Fut>(f: F) -> FnFetcher<F>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = anyhow::Result<AssetResponse>>,
{
    FnFetcher { f }
}

impl<F, Fut> AssetFetcher for FnFetcher<F>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = anyhow::Result<AssetResponse>>,
{
    async fn fetch_asset(&self, path: &str) -> anyhow::Result<AssetResponse> {
        (self.f)(path.to_owned()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[tokio::test]
    async fn closure_fetcher_receives_requested_path() {
        let fetcher = from_fn(|path: String| async move {
            Ok::<_, anyhow::Error>(AssetResponse::new(200, path.into_bytes()))
        });

        let response = fetcher.fetch_asset("/.vite/manifest.json").await.unwrap();
        assert_eq!(response.text().unwrap(), "/.vite/manifest.json");
    }

    #[tokio::test]
    async fn closure_fetcher_propagates_errors() {
        let fetcher = from_fn(|_path: String| async move {
            Err::<AssetResponse, _>(anyhow!("Failed to fetch"))
        });

        let err = fetcher.fetch_asset("/anything").await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch");
    }

    #[tokio::test]
    async fn references_are_fetchers() {
        let fetcher = from_fn(|_path: String| async move {
            Ok::<_, anyhow::Error>(AssetResponse::not_found())
        });
        let borrowed = &fetcher;

        let response = borrowed.fetch_asset("/missing").await.unwrap();
        assert!(!response.ok());
    }
}
