//! HTTP client for the hosted backend.

use crate::error::{RemoteClientError, Result};
use crate::types::ServerConfig;
use coretet_core::config::Features;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use std::time::Duration;

/// Client for the backend's REST surface.
///
/// One instance serves all three collaborator contracts: preferences, track
/// lists, and collection orders. Cloning is cheap; the underlying connection
/// pool is shared. Deployment feature toggles are applied here, at the
/// boundary where track lists and collection orders enter the core.
#[derive(Debug, Clone)]
pub struct RemoteClient {
    http: Client,
    config: ServerConfig,
    features: Features,
}

impl RemoteClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ServerConfig) -> Result<Self> {
        if config.url.is_empty() {
            return Err(RemoteClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let url = config.url.trim_end_matches('/').to_string();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(RemoteClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let normalized_config = ServerConfig { url, ..config };

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Coretet/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(RemoteClientError::Request)?;

        Ok(Self {
            http,
            config: normalized_config,
            features: Features::default(),
        })
    }

    /// Replace the deployment feature toggles (all enabled by default).
    pub fn with_features(mut self, features: Features) -> Self {
        self.features = features;
        self
    }

    /// The active feature toggles.
    pub fn features(&self) -> &Features {
        &self.features
    }

    /// The normalized base URL.
    pub fn url(&self) -> &str {
        &self.config.url
    }

    /// Start a request against a path under the base URL, with auth headers
    /// applied.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self
            .http
            .request(method, format!("{}{}", self.config.url, path));
        if let Some(api_key) = &self.config.api_key {
            builder = builder.header("apikey", api_key);
        }
        if let Some(token) = &self.config.access_token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// Map non-success statuses to errors.
    ///
    /// 404 and 501 mean the backing table or operation is not provisioned on
    /// this deployment; row-level "not found" comes back as 200 with an
    /// empty result set instead.
    pub(crate) async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::NOT_FOUND || status == StatusCode::NOT_IMPLEMENTED {
            return Err(RemoteClientError::Unsupported);
        }
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| status.to_string());
        Err(RemoteClientError::ServerError {
            status: status.as_u16(),
            message,
        })
    }
}
