use std::path::Path;

use anyhow::{Context, Result};
use chrono::DateTime;

use crate::config::LlamaConfig;
use crate::llama::LlamaClient;

/// Entry point for the `history` command.
pub fn run(since: Option<i64>, output: Option<&Path>) -> Result<()> {
    let client = LlamaClient::new(&LlamaConfig::from_env())?;

    let rt = tokio::runtime::Runtime::new().context("creating async runtime")?;
    let points = rt.block_on(client.historical_chain_tvl(since))?;

    if points.is_empty() {
        println!("No data points in the requested range.");
        return Ok(());
    }

    if let Some(path) = output {
        let mut writer = csv::Writer::from_path(path)
            .with_context(|| format!("creating {}", path.display()))?;
        for point in &points {
            writer.serialize(point)?;
        }
        writer.flush()?;
        println!("Wrote {} points to {}", points.len(), path.display());
        return Ok(());
    }

    let first = &points[0];
    let last = &points[points.len() - 1];
    println!(
        "{} points, {} → {}",
        points.len(),
        format_date(first.date),
        format_date(last.date)
    );
    println!("TVL ${:.0} → ${:.0}", first.tvl, last.tvl);
    Ok(())
}

fn format_date(ts: i64) -> String {
    DateTime::from_timestamp(ts, 0)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| ts.to_string())
}
