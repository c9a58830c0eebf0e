use serde::{Deserialize, Serialize};

use super::{RiskLevel, Stage};

/// A merged project row: curated assessment plus live TVL.
///
/// This is the shape handed to table and page rendering. The JSON field
/// names are a compatibility surface and must not drift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Logo URL from the remote dataset; empty when unresolved.
    pub logo: String,
    pub protocol: String,
    pub slug: String,
    /// TVL on `chain`, summed across all matched DeFiLlama slugs.
    pub tvl: f64,
    pub chain: String,
    pub stage: Stage,
    pub reasons: Vec<String>,
    /// Remote category, e.g. "Dexes"; the last matched slug wins.
    #[serde(rename = "type")]
    pub protocol_type: String,
    pub risks: Vec<RiskLevel>,
}
