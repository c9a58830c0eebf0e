use thiserror::Error;

/// Failure of a remote DeFiLlama call.
///
/// Every variant carries the endpoint that failed; callers get exactly one
/// of these per failed call (no retries happen below this type).
#[derive(Error, Debug)]
pub enum RemoteFetchError {
    #[error("network error calling {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("undecodable response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl RemoteFetchError {
    /// The endpoint the failed call was addressed to.
    pub fn url(&self) -> &str {
        match self {
            RemoteFetchError::Network { url, .. } => url,
            RemoteFetchError::Status { url, .. } => url,
            RemoteFetchError::Decode { url, .. } => url,
        }
    }
}
