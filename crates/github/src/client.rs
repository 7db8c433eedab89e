//! Minimal GraphQL-over-HTTP client for the GitHub API.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::GraphQlError;

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;

/// Public GitHub GraphQL endpoint.
pub const DEFAULT_GRAPHQL_URL: &str = "https://api.github.com/graphql";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a, V: Serialize> {
    query: &'a str,
    variables: V,
}

/// Envelope of every GraphQL response.
///
/// `data` stays untyped until `errors` has been checked: a failed mutation
/// answers with `null` fields that would not decode as the success shape.
#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphQlErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct GraphQlErrorEntry {
    message: String,
}

/// Sends authenticated GraphQL requests to a single endpoint.
#[derive(Debug, Clone)]
pub struct GraphQlClient {
    http: reqwest::Client,
    api_url: String,
}

impl GraphQlClient {
    /// Creates a client that authenticates with `token` as a bearer token.
    pub fn new(token: &str, api_url: impl Into<String>) -> Result<Self, GraphQlError> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| GraphQlError::InvalidToken)?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("add-to-project/", env!("CARGO_PKG_VERSION"))),
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            api_url: api_url.into(),
        })
    }

    /// The endpoint requests are sent to.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Executes a query or mutation and decodes its `data` member as `R`.
    ///
    /// A non-empty `errors` array fails the call even when partial `data` is
    /// present.
    pub async fn execute<V, R>(&self, query: &str, variables: V) -> Result<R, GraphQlError>
    where
        V: Serialize,
        R: DeserializeOwned,
    {
        let response = self
            .http
            .post(&self.api_url)
            .json(&GraphQlRequest { query, variables })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!(status = %status, bytes = body.len(), "GraphQL response received");

        if !status.is_success() {
            return Err(GraphQlError::Status { status, body });
        }

        let parsed: GraphQlResponse = serde_json::from_str(&body)?;
        if !parsed.errors.is_empty() {
            return Err(GraphQlError::GraphQl {
                messages: parsed.errors.into_iter().map(|e| e.message).collect(),
            });
        }

        let data = parsed
            .data
            .filter(|d| !d.is_null())
            .ok_or(GraphQlError::MissingData)?;
        Ok(serde_json::from_value(data)?)
    }
}
