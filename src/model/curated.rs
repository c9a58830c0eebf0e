use serde::{Deserialize, Serialize};

use super::{RiskLevel, Stage};

/// A locally authored protocol assessment.
///
/// Loaded once per process and treated as read-only by the merge; remote
/// data never feeds back into these records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CuratedProtocol {
    /// Display name, e.g. "Uniswap V3".
    pub protocol: String,
    /// Site identifier for the protocol page.
    pub slug: String,
    /// DeFiLlama slugs this protocol corresponds to, in declaration order.
    /// Several entries when the remote source indexes deployments separately.
    pub defillama_slug: Vec<String>,
    /// The single chain TVL is reported for.
    pub chain: String,
    pub stage: Stage,
    /// Qualitative reasons behind the stage assignment.
    #[serde(default)]
    pub reasons: Vec<String>,
    /// Risk-score vector.
    #[serde(default)]
    pub risks: Vec<RiskLevel>,

    // Page metadata; takes no part in the merge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}
