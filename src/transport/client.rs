//! Figma REST API client.
//!
//! HTTP client for fetching style-dictionary documents and submitting variables
//! payloads. A failed request aborts the run; nothing is retried.

use anyhow::{anyhow, Context, Result};
use reqwest::{Client, Response};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::constants::{DEFAULT_API_BASE, FIGMA_TOKEN_HEADER};
use crate::models::{FigmaPayload, TokenGroup};
use crate::parser::normalize_document;

/// Maximum number of body characters quoted in error messages.
const ERROR_BODY_PREVIEW: usize = 200;

/// Figma API client
#[derive(Debug, Clone)]
pub struct FigmaClient {
    http: Client,
    base_url: String,
}

impl FigmaClient {
    /// Create a client for the public Figma API
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_API_BASE)
    }

    /// Create a client for a custom API host (trailing slashes are ignored)
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// API host this client talks to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Variables endpoint for a file
    #[must_use]
    pub fn variables_url(&self, file_id: &str) -> String {
        format!("{}/v1/files/{}/variables", self.base_url, file_id)
    }

    /// Fetch a JSON document from an arbitrary URL
    pub async fn fetch_style_dictionary(&self, url: &str) -> Result<Value> {
        info!("Fetching style dictionary from {}", url);

        let response = self
            .http
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .with_context(|| format!("Failed to fetch {}", url))?;

        let response = ensure_success(response, url).await?;

        response
            .json()
            .await
            .with_context(|| format!("Failed to parse JSON from {}", url))
    }

    /// Fetch and normalize a token tree
    pub async fn fetch_token_tree(&self, url: &str) -> Result<TokenGroup> {
        let document = self.fetch_style_dictionary(url).await?;
        normalize_document(&document).with_context(|| format!("Invalid token document at {}", url))
    }

    /// Submit a variables payload to a Figma file, returning the API response
    ///
    /// The JSON body is returned whatever the status; Figma reports rejected
    /// payloads in the body. Only transport failures and non-JSON bodies fail.
    pub async fn post_variables(
        &self,
        payload: &FigmaPayload,
        api_token: &str,
        file_id: &str,
    ) -> Result<Value> {
        let url = self.variables_url(file_id);
        info!(
            "Posting {} variable(s) to file {}",
            payload.variables.len(),
            file_id
        );

        let response = self
            .http
            .post(&url)
            .header(FIGMA_TOKEN_HEADER, api_token)
            .json(payload)
            .send()
            .await
            .with_context(|| format!("Failed to post variables to {}", url))?;

        let status = response.status();
        if status.is_success() {
            debug!("Figma responded with {}", status);
        } else {
            warn!("Figma responded with {} for file {}", status, file_id);
        }

        response
            .json()
            .await
            .with_context(|| format!("Failed to parse response from {}", url))
    }
}

/// Turns a non-success status into an error quoting the start of the body
async fn ensure_success(response: Response, url: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(anyhow!(
        "Request to {} failed with {}: {}",
        url,
        status,
        body.chars().take(ERROR_BODY_PREVIEW).collect::<String>()
    ))
}
