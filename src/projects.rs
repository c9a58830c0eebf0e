use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::aggregate::ProjectAggregator;
use crate::cache::ProtocolCache;
use crate::config::LlamaConfig;
use crate::content;
use crate::llama::LlamaClient;
use crate::model::Project;

/// Entry point for the `projects` command.
pub fn run(content_path: &Path, output: Option<&Path>) -> Result<()> {
    let curated = content::load_protocols(content_path)?;
    if curated.is_empty() {
        println!("No curated protocols in {}.", content_path.display());
        return Ok(());
    }

    let client = LlamaClient::new(&LlamaConfig::from_env())?;
    let aggregator = ProjectAggregator::new(curated, ProtocolCache::new(Arc::new(client)));

    let rt = tokio::runtime::Runtime::new().context("creating async runtime")?;
    let projects = rt.block_on(aggregator.projects())?;

    match output {
        Some(path) => {
            let json = serde_json::to_string_pretty(&projects)?;
            std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
            println!(
                "Wrote {} merged records to {}",
                projects.len(),
                path.display()
            );
        }
        None => print_table(&projects),
    }

    Ok(())
}

fn print_table(projects: &[Project]) {
    println!(
        "{:<22} {:<8} {:<12} {:>12} {:<16} {}",
        "PROTOCOL", "STAGE", "CHAIN", "TVL", "TYPE", "REASONS"
    );
    println!("{}", "-".repeat(96));

    for p in projects {
        println!(
            "{:<22} {:<8} {:<12} {:>12} {:<16} {}",
            truncate(&p.protocol, 21),
            p.stage.to_string(),
            truncate(&p.chain, 11),
            format_usd(p.tvl),
            truncate(&p.protocol_type, 15),
            p.reasons.join(", "),
        );
    }

    let total: f64 = projects.iter().map(|p| p.tvl).sum();
    println!(
        "\n{} protocols, {} tracked TVL",
        projects.len(),
        format_usd(total)
    );
}

fn format_usd(v: f64) -> String {
    if v >= 1e9 {
        format!("${:.2}b", v / 1e9)
    } else if v >= 1e6 {
        format!("${:.2}m", v / 1e6)
    } else if v >= 1e3 {
        format!("${:.1}k", v / 1e3)
    } else {
        format!("${v:.0}")
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let cut: String = s.chars().take(max - 1).collect();
        format!("{cut}…")
    } else {
        s.to_string()
    }
}
