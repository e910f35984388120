// Data sources for the buildings document
//
// `HttpSource` performs the single GET the dashboard depends on;
// `FileSource` reads the same document from disk for offline use.

use std::future::Future;
use std::path::{Path, PathBuf};

use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::payload::{BuildingsPayload, parse_document};
use crate::transport::TransportConfig;

/// Location of the published mock buildings document.
pub const DEFAULT_SOURCE_URL: &str =
    "https://frontend-interview-mock-data.s3.eu-central-1.amazonaws.com/mock-buildings-devices.json";

/// Anything that can produce a normalized buildings document.
pub trait DataSource {
    /// Fetch and normalize the buildings document.
    fn fetch(&self) -> impl Future<Output = Result<BuildingsPayload, Error>> + Send;

    /// Human-readable origin, for logs and error messages.
    fn describe(&self) -> String;
}

// ── HTTP ────────────────────────────────────────────────────────────

/// Fetches the buildings document with a single HTTP GET.
pub struct HttpSource {
    http: reqwest::Client,
    url: Url,
}

impl HttpSource {
    /// Create a source from a `TransportConfig`.
    pub fn new(url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self { http, url })
    }

    /// Create a source that reuses a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, url: Url) -> Self {
        Self { http, url }
    }

    /// Parse `url` and create a source with default transport settings.
    pub fn from_url(url: &str) -> Result<Self, Error> {
        Self::new(Url::parse(url)?, &TransportConfig::default())
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl DataSource for HttpSource {
    async fn fetch(&self) -> Result<BuildingsPayload, Error> {
        debug!(url = %self.url, "fetching buildings document");
        let resp = self.http.get(self.url.clone()).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Server {
                status: status.as_u16(),
            });
        }

        let body = resp.text().await?;
        let payload = parse_document(&body)?;
        debug!(buildings = payload.len(), "buildings document loaded");
        Ok(payload)
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}

// ── File ────────────────────────────────────────────────────────────

/// Reads the buildings document from a local JSON file.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataSource for FileSource {
    async fn fetch(&self) -> Result<BuildingsPayload, Error> {
        debug!(path = %self.path.display(), "reading buildings document");
        let body = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| Error::Io {
                path: self.path.clone(),
                source,
            })?;
        parse_document(&body)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Write;

    use super::*;

    #[tokio::test]
    async fn file_source_reads_and_normalizes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"data":[{{"id":"b1"}},{{"id":"b2"}}]}}"#).unwrap();

        let source = FileSource::new(file.path());
        let payload = source.fetch().await.unwrap();
        assert_eq!(payload.len(), 2);
    }

    #[tokio::test]
    async fn file_source_missing_file_is_io_error() {
        let source = FileSource::new("/nonexistent/facilities/buildings.json");
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, Error::Io { .. }), "got {err:?}");
        assert!(err.to_string().contains("buildings.json"));
    }

    #[test]
    fn http_source_rejects_bad_url() {
        let result = HttpSource::from_url("not a url");
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn default_url_parses() {
        let source = HttpSource::from_url(DEFAULT_SOURCE_URL).unwrap();
        assert_eq!(source.url().scheme(), "https");
        assert!(source.describe().ends_with("mock-buildings-devices.json"));
    }
}
