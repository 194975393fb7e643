//! Driver HTTP Client
//!
//! Thin typed wrapper over the math store REST API.

use anyhow::{anyhow, Context, Result};

use crate::cache::OpKind;
use crate::models::{BinaryOpRequest, BinaryOpResponse, GetResponse, SetRequest, SetResponse};

// == Math DB Client ==
/// Client for a running math store server. Cheap to clone; clones share
/// one connection pool.
#[derive(Debug, Clone)]
pub struct MathDbClient {
    http: reqwest::Client,
    base_url: String,
}

impl MathDbClient {
    /// Creates a client for the server at `base_url` (e.g. `http://127.0.0.1:5440`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub async fn set(&self, key: &str, value: f64) -> Result<SetResponse> {
        let req = SetRequest {
            key: key.to_string(),
            value,
        };
        let response = self
            .http
            .put(format!("{}/set", self.base_url))
            .json(&req)
            .send()
            .await
            .context("set request failed")?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    pub async fn get(&self, key: &str) -> Result<GetResponse> {
        // Keys may hold characters that are not valid in a bare path segment
        let mut url = reqwest::Url::parse(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|_| anyhow!("invalid base URL: {}", self.base_url))?
            .pop_if_empty()
            .push("get")
            .push(key);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .context("get request failed")?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    /// Runs one of the memoized binary operations.
    pub async fn binary(&self, op: OpKind, key_a: &str, key_b: &str) -> Result<BinaryOpResponse> {
        let response = self
            .http
            .post(format!("{}/{}", self.base_url, op.name()))
            .json(&BinaryOpRequest::new(key_a, key_b))
            .send()
            .await
            .with_context(|| format!("{} request failed", op))?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}
