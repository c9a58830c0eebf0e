//! The curated-against-remote join.

use crate::cache::ProtocolCache;
use crate::errors::RemoteFetchError;
use crate::llama::Protocol;
use crate::model::{CuratedProtocol, Project};

/// Merge curated assessments with the remote dataset.
///
/// One output row per curated record, in curated order. For each DeFiLlama
/// slug the record declares, the first remote record with that exact slug
/// contributes its TVL on the record's chain and overwrites category and
/// logo, so the last matching slug determines the descriptive fields.
/// Slugs with no remote match contribute nothing; that is expected, not an
/// error (curated records routinely list slugs the remote source has not
/// indexed yet). A record whose slugs all miss still yields a row, with
/// zero TVL and empty strings.
pub fn merge(curated: &[CuratedProtocol], external: &[Protocol]) -> Vec<Project> {
    curated
        .iter()
        .map(|cur| {
            let mut tvl = 0.0;
            let mut protocol_type = String::new();
            let mut logo = String::new();

            for slug in &cur.defillama_slug {
                // Exact equality only; slugs are externally assigned and
                // compared byte-for-byte.
                let Some(rec) = external.iter().find(|p| &p.slug == slug) else {
                    continue;
                };
                tvl += rec.chain_tvls.get(&cur.chain).copied().unwrap_or(0.0);
                protocol_type = rec.category.clone().unwrap_or_default();
                logo = rec.logo.clone().unwrap_or_default();
            }

            Project {
                logo,
                protocol: cur.protocol.clone(),
                slug: cur.slug.clone(),
                tvl,
                chain: cur.chain.clone(),
                stage: cur.stage.clone(),
                reasons: cur.reasons.clone(),
                protocol_type,
                risks: cur.risks.clone(),
            }
        })
        .collect()
}

/// Owns the curated dataset and the freshness cache.
///
/// The merge itself is recomputed on every call; only the remote fetch is
/// cached.
pub struct ProjectAggregator {
    curated: Vec<CuratedProtocol>,
    cache: ProtocolCache,
}

impl ProjectAggregator {
    pub fn new(curated: Vec<CuratedProtocol>, cache: ProtocolCache) -> Self {
        Self { curated, cache }
    }

    /// The merged board. A remote fetch failure propagates unchanged;
    /// there is no zero-filled fallback view.
    pub async fn projects(&self) -> Result<Vec<Project>, RemoteFetchError> {
        let external = self.cache.get_or_refresh().await?;
        Ok(merge(&self.curated, &external))
    }
}
