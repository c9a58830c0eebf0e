#![allow(dead_code)]

use std::collections::HashMap;

use defi_scan::llama::Protocol;
use defi_scan::model::{CuratedProtocol, RiskLevel, Stage};

/// Remote record with a per-chain TVL breakdown. Empty `category`/`logo`
/// become absent fields, as the API delivers them.
pub fn remote(slug: &str, category: &str, logo: &str, chain_tvls: &[(&str, f64)]) -> Protocol {
    Protocol {
        slug: slug.to_string(),
        name: slug.to_string(),
        tvl: Some(chain_tvls.iter().map(|(_, v)| *v).sum()),
        logo: (!logo.is_empty()).then(|| logo.to_string()),
        category: (!category.is_empty()).then(|| category.to_string()),
        chains: chain_tvls.iter().map(|(c, _)| c.to_string()).collect(),
        chain_tvls: chain_tvls
            .iter()
            .map(|(c, v)| (c.to_string(), *v))
            .collect::<HashMap<_, _>>(),
    }
}

/// Curated record declaring `slugs` on `chain`.
pub fn curated(protocol: &str, slugs: &[&str], chain: &str) -> CuratedProtocol {
    CuratedProtocol {
        protocol: protocol.to_string(),
        slug: protocol.to_lowercase().replace(' ', "-"),
        defillama_slug: slugs.iter().map(|s| s.to_string()).collect(),
        chain: chain.to_string(),
        stage: Stage::Ranked(1),
        reasons: vec!["Upgradeable contracts".to_string()],
        risks: vec![RiskLevel::L, RiskLevel::M, RiskLevel::H],
        website: None,
        x: None,
        github: None,
        author: None,
        date: None,
    }
}
