//! Freshness cache over the remote protocol dataset.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;

use crate::errors::RemoteFetchError;
use crate::llama::Protocol;

/// How long a fetched dataset stays fresh.
pub const DEFAULT_VALIDITY: Duration = Duration::from_secs(5 * 60);

/// Anything that can produce the full remote protocol dataset.
///
/// `LlamaClient` is the real source; tests plug in doubles that count
/// calls, fail on demand, or simulate expiry.
#[async_trait]
pub trait ProtocolSource: Send + Sync {
    async fn all_protocols(&self) -> Result<Vec<Protocol>, RemoteFetchError>;
}

struct Slot {
    data: Arc<Vec<Protocol>>,
    captured_at: Instant,
}

/// Single-slot cache: the dataset is cached as a whole, not per slug.
///
/// The slot is read and conditionally rewritten under a mutex that is
/// never held across the fetch, so concurrent cold readers may each
/// trigger a fetch. That is acceptable: the refresh is idempotent and the
/// last successful write wins. The only eviction path is passive expiry
/// checked on the next read.
pub struct ProtocolCache {
    source: Arc<dyn ProtocolSource>,
    validity: Duration,
    slot: Mutex<Option<Slot>>,
}

impl ProtocolCache {
    pub fn new(source: Arc<dyn ProtocolSource>) -> Self {
        Self::with_validity(source, DEFAULT_VALIDITY)
    }

    pub fn with_validity(source: Arc<dyn ProtocolSource>, validity: Duration) -> Self {
        Self {
            source,
            validity,
            slot: Mutex::new(None),
        }
    }

    /// Serve the cached dataset while it is fresh, otherwise refetch and
    /// overwrite the slot.
    ///
    /// A failed refetch leaves any stale slot in place and returns the
    /// error; stale data is never served as a fallback.
    pub async fn get_or_refresh(&self) -> Result<Arc<Vec<Protocol>>, RemoteFetchError> {
        {
            let slot = self.slot.lock().unwrap();
            if let Some(s) = slot.as_ref() {
                if s.captured_at.elapsed() < self.validity {
                    return Ok(Arc::clone(&s.data));
                }
            }
        }

        log::debug!("protocol cache empty or expired, fetching");
        let data = Arc::new(self.source.all_protocols().await?);

        let mut slot = self.slot.lock().unwrap();
        *slot = Some(Slot {
            data: Arc::clone(&data),
            captured_at: Instant::now(),
        });
        Ok(data)
    }
}
