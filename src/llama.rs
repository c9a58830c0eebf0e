//! DeFiLlama API client.
//!
//! Three read-only operations against the public analytics API: the full
//! protocol listing, the all-chains TVL history, and a single protocol's
//! current TVL. Failures become [`RemoteFetchError`] and are logged with
//! the failing URL before they propagate; there are no retries at this
//! layer, callers that want resilience layer it themselves.

use std::collections::HashMap;
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::cache::ProtocolSource;
use crate::config::LlamaConfig;
use crate::errors::RemoteFetchError;

/// Default lower bound for history queries: Jan 1, 2020.
pub const DEFAULT_HISTORY_START: i64 = 1_577_833_200;

// ── API response types ───────────────────────────────────────────────

/// One protocol as listed by `/protocols`.
#[derive(Debug, Clone, Deserialize)]
pub struct Protocol {
    pub slug: String,
    pub name: String,
    /// Aggregate TVL across all chains.
    pub tvl: Option<f64>,
    pub logo: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub chains: Vec<String>,
    /// Per-chain TVL breakdown, keyed by chain name.
    #[serde(rename = "chainTvls", default)]
    pub chain_tvls: HashMap<String, f64>,
}

/// One point of the all-chains TVL history.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ChainTvlPoint {
    /// Unix timestamp, seconds.
    pub date: i64,
    pub tvl: f64,
}

#[derive(Debug, Deserialize)]
struct ProtocolDetail {
    tvl: Option<f64>,
}

// ── Client ───────────────────────────────────────────────────────────

pub struct LlamaClient {
    http: reqwest::Client,
    base_url: String,
}

impl LlamaClient {
    pub fn new(config: &LlamaConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("defi-scan/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("creating HTTP client")?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The full protocol listing, exactly as the API orders it.
    pub async fn all_protocols(&self) -> Result<Vec<Protocol>, RemoteFetchError> {
        self.get_json("/protocols").await
    }

    /// All-chains TVL history, keeping points strictly after `since`.
    ///
    /// An empty result is valid; requesting a range past the newest point
    /// is not an error.
    pub async fn historical_chain_tvl(
        &self,
        since: Option<i64>,
    ) -> Result<Vec<ChainTvlPoint>, RemoteFetchError> {
        let start = since.unwrap_or(DEFAULT_HISTORY_START);
        let points: Vec<ChainTvlPoint> = self.get_json("/v2/historicalChainTvl").await?;
        Ok(points.into_iter().filter(|p| p.date > start).collect())
    }

    /// Current aggregate TVL of one protocol. A slug the remote source
    /// does not know answers with a non-success status and so fails.
    pub async fn protocol_tvl(&self, slug: &str) -> Result<f64, RemoteFetchError> {
        let detail: ProtocolDetail = self.get_json(&format!("/protocol/{slug}")).await?;
        Ok(detail.tvl.unwrap_or(0.0))
    }

    /// GET an endpoint and decode the JSON body. Every failure path is
    /// logged here, with the URL, before the error is returned.
    async fn get_json<T>(&self, path: &str) -> Result<T, RemoteFetchError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);

        let resp = match self.http.get(&url).send().await {
            Ok(r) => r,
            Err(e) => return Err(log_failure(RemoteFetchError::Network { url, source: e })),
        };

        let status = resp.status();
        if !status.is_success() {
            return Err(log_failure(RemoteFetchError::Status {
                status: status.as_u16(),
                url,
            }));
        }

        match resp.json::<T>().await {
            Ok(v) => Ok(v),
            Err(e) => Err(log_failure(RemoteFetchError::Decode { url, source: e })),
        }
    }
}

fn log_failure(err: RemoteFetchError) -> RemoteFetchError {
    log::error!("DeFiLlama request failed: {err}");
    err
}

#[async_trait::async_trait]
impl ProtocolSource for LlamaClient {
    async fn all_protocols(&self) -> Result<Vec<Protocol>, RemoteFetchError> {
        LlamaClient::all_protocols(self).await
    }
}
