use crate::model::{CuratedProtocol, RiskLevel, Stage};

/// Print a sample curated protocol JSON document to stdout.
///
/// The output is a valid `content/protocols.json` starting point.
pub fn run() -> anyhow::Result<()> {
    let sample = vec![
        CuratedProtocol {
            protocol: "Uniswap V3".into(),
            slug: "uniswap-v3".into(),
            defillama_slug: vec!["uniswap-v3".into()],
            chain: "Ethereum".into(),
            stage: Stage::Ranked(1),
            reasons: vec![],
            risks: vec![
                RiskLevel::L,
                RiskLevel::L,
                RiskLevel::M,
                RiskLevel::L,
                RiskLevel::M,
            ],
            website: Some("https://uniswap.org".into()),
            x: Some("https://x.com/Uniswap".into()),
            github: Some("https://github.com/Uniswap".into()),
            author: Some("defi-scan".into()),
            date: Some("2024-06-01".into()),
        },
        CuratedProtocol {
            protocol: "Aave V3".into(),
            slug: "aave-v3".into(),
            // Aggregate TVL over both deployments still indexed remotely.
            defillama_slug: vec!["aave-v2".into(), "aave-v3".into()],
            chain: "Ethereum".into(),
            stage: Stage::Ranked(0),
            reasons: vec![
                "Upgradeable contracts".into(),
                "Guardian multisig".into(),
            ],
            risks: vec![
                RiskLevel::M,
                RiskLevel::H,
                RiskLevel::M,
                RiskLevel::M,
                RiskLevel::L,
            ],
            website: Some("https://aave.com".into()),
            x: Some("https://x.com/aave".into()),
            github: Some("https://github.com/aave".into()),
            author: Some("defi-scan".into()),
            date: Some("2024-06-01".into()),
        },
        CuratedProtocol {
            protocol: "Morpho".into(),
            slug: "morpho".into(),
            defillama_slug: vec!["morpho-blue".into()],
            chain: "Ethereum".into(),
            stage: Stage::review(),
            reasons: vec![],
            risks: vec![],
            website: Some("https://morpho.org".into()),
            x: None,
            github: Some("https://github.com/morpho-org".into()),
            author: Some("defi-scan".into()),
            date: Some("2024-06-01".into()),
        },
    ];

    println!("{}", serde_json::to_string_pretty(&sample)?);
    Ok(())
}
