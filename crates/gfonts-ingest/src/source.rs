//! Catalog loading from a local snapshot or the remote web-fonts API.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{IngestError, Result};

/// Public Google Fonts catalog endpoint.
pub const DEFAULT_CATALOG_URL: &str = "https://www.googleapis.com/webfonts/v1/webfonts";

/// HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the catalog document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// A JSON document previously downloaded from the API.
    Snapshot(PathBuf),
    /// The live API, authenticated with an API key.
    Remote { api_key: String, endpoint: String },
}

impl CatalogSource {
    /// Pick the catalog source; a snapshot path takes precedence over an API key.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::MissingSource`] when neither is given.
    pub fn resolve(
        data_path: Option<&Path>,
        api_key: Option<&str>,
        endpoint: Option<&str>,
    ) -> Result<Self> {
        match (data_path, api_key) {
            (Some(path), _) => Ok(Self::Snapshot(path.to_path_buf())),
            (None, Some(key)) => Ok(Self::Remote {
                api_key: key.to_string(),
                endpoint: endpoint.unwrap_or(DEFAULT_CATALOG_URL).to_string(),
            }),
            (None, None) => Err(IngestError::MissingSource),
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote { .. })
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // The API key is never printed.
            Self::Snapshot(path) => write!(f, "{}", path.display()),
            Self::Remote { endpoint, .. } => write!(f, "{endpoint}"),
        }
    }
}

/// Build the catalog request URL with the `key` query parameter.
pub fn catalog_url(endpoint: &str, api_key: &str) -> Result<Url> {
    Url::parse_with_params(endpoint, &[("key", api_key)]).map_err(|error| {
        IngestError::InvalidEndpoint {
            url: endpoint.to_string(),
            message: error.to_string(),
        }
    })
}

/// Load the whole catalog document from `source`.
pub fn load_catalog(source: &CatalogSource) -> Result<Value> {
    match source {
        CatalogSource::Snapshot(path) => read_snapshot(path),
        CatalogSource::Remote { api_key, endpoint } => fetch_catalog(endpoint, api_key),
    }
}

/// Load the catalog and return its `items` array.
pub fn load_items(source: &CatalogSource) -> Result<Vec<Value>> {
    let document = load_catalog(source)?;
    catalog_items(document, &source.to_string())
}

/// Extract the `items` array from a catalog document.
pub fn catalog_items(document: Value, origin: &str) -> Result<Vec<Value>> {
    match document {
        Value::Object(mut map) => match map.remove("items") {
            Some(Value::Array(items)) => Ok(items),
            _ => Err(IngestError::MissingItems {
                origin: origin.to_string(),
            }),
        },
        _ => Err(IngestError::MissingItems {
            origin: origin.to_string(),
        }),
    }
}

/// Parse a local catalog snapshot.
pub fn read_snapshot(path: &Path) -> Result<Value> {
    debug!(path = %path.display(), "reading catalog snapshot");
    let contents = fs::read(path).map_err(|error| IngestError::io(path, error))?;
    serde_json::from_slice(&contents)
        .map_err(|error| IngestError::json(path.display().to_string(), error))
}

/// Write a fetched catalog document so later runs can load it locally.
pub fn write_snapshot(path: &Path, document: &Value) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(document)
        .map_err(|error| IngestError::json(path.display().to_string(), error))?;
    fs::write(path, bytes).map_err(|error| IngestError::io(path, error))?;
    info!(path = %path.display(), "catalog snapshot saved");
    Ok(())
}

fn fetch_catalog(endpoint: &str, api_key: &str) -> Result<Value> {
    let url = catalog_url(endpoint, api_key)?;
    debug!(endpoint, "fetching catalog");

    let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
    let response = client
        .get(url)
        .header(
            USER_AGENT,
            format!("gfonts-annotate/{}", env!("CARGO_PKG_VERSION")),
        )
        .header(ACCEPT, "application/json")
        .send()?;

    let status = response.status();
    if !status.is_success() {
        let message = response
            .text()
            .unwrap_or_else(|_| "unknown error".to_string());
        return Err(IngestError::Status {
            status: status.as_u16(),
            message,
        });
    }

    let body = response.bytes()?;
    serde_json::from_slice(&body).map_err(|error| IngestError::json(endpoint, error))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_prefers_snapshot() {
        let source =
            CatalogSource::resolve(Some(Path::new("fonts.json")), Some("secret"), None).unwrap();
        assert_eq!(source, CatalogSource::Snapshot(PathBuf::from("fonts.json")));
        assert!(!source.is_remote());
    }

    #[test]
    fn resolve_remote_uses_default_endpoint() {
        let source = CatalogSource::resolve(None, Some("secret"), None).unwrap();
        assert_eq!(
            source,
            CatalogSource::Remote {
                api_key: "secret".to_string(),
                endpoint: DEFAULT_CATALOG_URL.to_string(),
            }
        );
        assert_eq!(source.to_string(), DEFAULT_CATALOG_URL);
    }

    #[test]
    fn resolve_without_source_fails() {
        let error = CatalogSource::resolve(None, None, Some("http://localhost")).unwrap_err();
        assert!(matches!(error, IngestError::MissingSource));
    }

    #[test]
    fn catalog_url_carries_key() {
        let url = catalog_url(DEFAULT_CATALOG_URL, "abc123").unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.googleapis.com/webfonts/v1/webfonts?key=abc123"
        );
    }

    #[test]
    fn catalog_url_encodes_key() {
        let url = catalog_url("http://localhost:8080/v1/webfonts", "a b&c").unwrap();
        assert_eq!(url.query(), Some("key=a+b%26c"));
    }

    #[test]
    fn catalog_url_rejects_relative_endpoint() {
        let error = catalog_url("v1/webfonts", "abc").unwrap_err();
        assert!(matches!(error, IngestError::InvalidEndpoint { .. }));
    }

    #[test]
    fn items_requires_array() {
        let document = serde_json::json!({ "kind": "webfonts#webfontList", "items": [{}] });
        assert_eq!(catalog_items(document, "test").unwrap().len(), 1);

        let document = serde_json::json!({ "items": {} });
        assert!(matches!(
            catalog_items(document, "test"),
            Err(IngestError::MissingItems { .. })
        ));

        let document = serde_json::json!([1, 2]);
        assert!(matches!(
            catalog_items(document, "test"),
            Err(IngestError::MissingItems { .. })
        ));
    }
}
