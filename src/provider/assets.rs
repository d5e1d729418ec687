use super::{Blob, BlobStore};
use crate::error::ProviderError;
use futures::FutureExt;
use futures::future::BoxFuture;
use reqwest::Url;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

/// Static assets served from a local build directory.
#[derive(Debug, Clone)]
pub struct AssetDir {
    root: PathBuf,
}

impl AssetDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a request path onto the asset root. Paths that would leave the root
    /// resolve to nothing.
    fn resolve(&self, path: &str) -> Option<PathBuf> {
        let relative = Path::new(path.trim_start_matches('/'));
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return None;
        }
        Some(self.root.join(relative))
    }
}

impl BlobStore for AssetDir {
    fn name(&self) -> &'static str {
        "asset-dir"
    }

    fn fetch<'a>(&'a self, path: &'a str) -> BoxFuture<'a, Result<Blob, ProviderError>> {
        async move {
            let Some(full_path) = self.resolve(path) else {
                tracing::debug!(path, "Rejected asset path outside the root");
                return Ok(Blob::not_found());
            };
            match tokio::fs::read(&full_path).await {
                Ok(body) => Ok(Blob::ok(body)),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(Blob::not_found()),
                Err(e) => Err(ProviderError::io(self.name(), e)),
            }
        }
        .boxed()
    }
}

/// Static assets fetched over HTTP from a deployed site.
#[derive(Debug, Clone)]
pub struct HttpAssets {
    client: reqwest::Client,
    base: Url,
}

impl HttpAssets {
    /// `base` is the site root; asset paths are joined onto it.
    pub fn new(base: Url) -> Self {
        Self::with_client(reqwest::Client::new(), base)
    }

    pub fn with_client(client: reqwest::Client, base: Url) -> Self {
        Self { client, base }
    }
}

impl BlobStore for HttpAssets {
    fn name(&self) -> &'static str {
        "http-assets"
    }

    fn fetch<'a>(&'a self, path: &'a str) -> BoxFuture<'a, Result<Blob, ProviderError>> {
        async move {
            let url = self
                .base
                .join(path.trim_start_matches('/'))
                .map_err(|e| ProviderError::io(self.name(), e))?;
            tracing::debug!(%url, "Fetching asset");

            let response = self
                .client
                .get(url)
                .send()
                .await
                .map_err(|e| ProviderError::io(self.name(), e))?;
            let status = response.status().as_u16();
            let body = response
                .bytes()
                .await
                .map_err(|e| ProviderError::io(self.name(), e))?;

            Ok(Blob {
                status,
                body: body.to_vec(),
            })
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[tokio::test]
    async fn reads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("search-index.json"), "{}").unwrap();

        let blob = AssetDir::new(dir.path())
            .fetch("search-index.json")
            .await
            .unwrap();
        check!(blob.is_success());
        check!(blob.body == b"{}");
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();

        let blob = AssetDir::new(dir.path()).fetch("nope.json").await.unwrap();
        check!(blob.status == 404);
        check!(!blob.is_success());
    }

    #[rstest]
    #[case("../secret.json")]
    #[case("/../secret.json")]
    #[case("a/../../secret.json")]
    fn traversal_is_rejected(#[case] path: &str) {
        check!(AssetDir::new("/srv/site").resolve(path).is_none());
    }

    #[rstest]
    #[case("search-index.json", "/srv/site/search-index.json")]
    #[case("/search-index.json", "/srv/site/search-index.json")]
    #[case("./sub/page.html", "/srv/site/./sub/page.html")]
    fn relative_paths_join_the_root(#[case] path: &str, #[case] expected: &str) {
        check!(AssetDir::new("/srv/site").resolve(path) == Some(PathBuf::from(expected)));
    }
}
