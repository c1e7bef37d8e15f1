mod concepts;
mod questions;
mod stats;
mod wire;

use std::env;

use reqwest::Client;
use thiserror::Error;
use url::Url;

use crate::remote::RemoteError;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiConfigError {
    #[error("invalid base url {raw:?}: {source}")]
    InvalidBaseUrl {
        raw: String,
        source: url::ParseError,
    },
}

/// Connection settings for the remote learning service.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Build a config from a base URL such as `http://localhost:5000`.
    ///
    /// # Errors
    ///
    /// Returns `ApiConfigError::InvalidBaseUrl` when the URL does not parse.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiConfigError> {
        let raw = base_url.into();
        Url::parse(&raw).map_err(|source| ApiConfigError::InvalidBaseUrl {
            raw: raw.clone(),
            source,
        })?;
        Ok(Self {
            base_url: raw.trim_end_matches('/').to_string(),
        })
    }

    /// Read `DRILL_API_URL` from the environment, if set and valid.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let raw = env::var("DRILL_API_URL").ok()?;
        if raw.trim().is_empty() {
            return None;
        }
        Self::new(raw).ok()
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// HTTP adapter for every remote surface: questions, concepts, statistics.
///
/// All requests use JSON content negotiation; any non-2xx status maps to
/// `RemoteError::HttpStatus` without per-status branching.
#[derive(Clone)]
pub struct HttpApi {
    client: Client,
    config: ApiConfig,
}

impl HttpApi {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url)
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, RemoteError> {
        let url = self.endpoint(path);
        tracing::debug!(%url, "GET");
        let response = self.client.get(&url).send().await?;
        let response = Self::ensure_success(response)?;
        Ok(response.json().await?)
    }

    pub(crate) fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, RemoteError> {
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, url = %response.url(), "request failed");
            return Err(RemoteError::HttpStatus(status));
        }
        Ok(response)
    }
}
