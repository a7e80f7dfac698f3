use std::path::PathBuf;
use std::time::Duration;

use reqwest::StatusCode;
use tracing::debug;
use url::Url;

use crate::assets::decode::{self, DecodedImage};
use crate::foundation::error::{AdmarkError, AdmarkResult};

/// Locator for an image asset: a remote URL or a local file.
#[derive(Clone, Debug)]
pub enum AssetRef {
    /// `http://` or `https://` URL fetched over the network.
    Url(Url),
    /// Local filesystem path (also produced from `file://` refs).
    Path(PathBuf),
}

impl AssetRef {
    /// Interpret a user-supplied string as a URL when it parses as an
    /// absolute `http(s)`/`file` URL, and as a filesystem path otherwise.
    pub fn parse(s: &str) -> AdmarkResult<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AdmarkError::validation("asset ref must be non-empty"));
        }
        match Url::parse(s) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => Ok(Self::Url(url)),
            Ok(url) if url.scheme() == "file" => {
                let path = url
                    .to_file_path()
                    .map_err(|_| AdmarkError::validation(format!("invalid file url '{s}'")))?;
                Ok(Self::Path(path))
            }
            Ok(url) if url.scheme().len() > 1 => Err(AdmarkError::validation(format!(
                "unsupported asset scheme '{}'",
                url.scheme()
            ))),
            // Single-letter schemes are Windows drive prefixes; everything
            // else that fails to parse as a URL is a plain path.
            _ => Ok(Self::Path(PathBuf::from(s))),
        }
    }
}

impl std::fmt::Display for AssetRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Url(url) => write!(f, "{url}"),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Why an asset load failed, collapsed to the classes callers act on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchReason {
    /// Unreachable host, non-200 status, or filesystem IO failure.
    Network,
    /// Bytes arrived but are not a decodable image.
    Decode,
    /// The load did not complete within the configured timeout.
    Timeout,
}

/// Error raised when fetching or decoding an asset.
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("asset fetch failed from {url}: {status}")]
    UpstreamStatus { status: StatusCode, url: String },
    #[error("asset fetch failed from {url}")]
    Upstream { url: String },
    #[error("asset bytes from {url} are not a decodable image")]
    NotAnImage { url: String },
    #[error("asset load timed out after {timeout_ms}ms for {url}")]
    Timeout { url: String, timeout_ms: u64 },
}

impl FetchError {
    /// Collapse the variant to its [`FetchReason`] class.
    pub fn reason(&self) -> FetchReason {
        match self {
            Self::UpstreamStatus { .. } | Self::Upstream { .. } => FetchReason::Network,
            Self::NotAnImage { .. } => FetchReason::Decode,
            Self::Timeout { .. } => FetchReason::Timeout,
        }
    }
}

/// Fetches and decodes image assets with a per-load timeout.
///
/// The timeout races the whole fetch-plus-decode future; when it fires the
/// pending future is dropped, so a late completion can never settle the load
/// a second time.
#[derive(Clone)]
pub struct AssetFetcher {
    client: reqwest::Client,
    timeout: Duration,
}

impl AssetFetcher {
    pub fn new(timeout: Duration) -> AdmarkResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("admark/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| anyhow::Error::new(e).context("build reqwest client"))?;
        Ok(Self { client, timeout })
    }

    /// Load a base image: fetch, then decode any raster format.
    pub async fn load_image(&self, asset: &AssetRef) -> Result<DecodedImage, FetchError> {
        self.load_with(asset, decode::decode_image).await
    }

    /// Load a logo image: fetch, then decode raster or rasterize SVG.
    pub async fn load_logo(&self, asset: &AssetRef) -> Result<DecodedImage, FetchError> {
        self.load_with(asset, decode::decode_logo).await
    }

    async fn load_with(
        &self,
        asset: &AssetRef,
        decode: fn(&[u8]) -> AdmarkResult<DecodedImage>,
    ) -> Result<DecodedImage, FetchError> {
        let fetch_and_decode = async {
            let bytes = self.fetch_bytes(asset).await?;
            decode(&bytes).map_err(|_| FetchError::NotAnImage {
                url: asset.to_string(),
            })
        };

        match tokio::time::timeout(self.timeout, fetch_and_decode).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout {
                url: asset.to_string(),
                timeout_ms: self.timeout.as_millis() as u64,
            }),
        }
    }

    async fn fetch_bytes(&self, asset: &AssetRef) -> Result<Vec<u8>, FetchError> {
        match asset {
            AssetRef::Url(url) => {
                let response = self
                    .client
                    .get(url.clone())
                    .send()
                    .await
                    .map_err(|_| FetchError::Upstream {
                        url: url.to_string(),
                    })?;
                if response.status() != StatusCode::OK {
                    return Err(FetchError::UpstreamStatus {
                        status: response.status(),
                        url: url.to_string(),
                    });
                }
                let bytes = response.bytes().await.map_err(|_| FetchError::Upstream {
                    url: url.to_string(),
                })?;
                debug!(url = %url, size = bytes.len(), "fetched asset");
                Ok(bytes.to_vec())
            }
            AssetRef::Path(path) => {
                let bytes =
                    tokio::fs::read(path)
                        .await
                        .map_err(|_| FetchError::Upstream {
                            url: path.display().to_string(),
                        })?;
                debug!(path = %path.display(), size = bytes.len(), "read asset");
                Ok(bytes)
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/fetch.rs"]
mod tests;
