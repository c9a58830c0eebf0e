use anyhow::{Context, Result};

use crate::config::LlamaConfig;
use crate::llama::LlamaClient;

/// Entry point for the `tvl` command.
pub fn run(slug: &str) -> Result<()> {
    let client = LlamaClient::new(&LlamaConfig::from_env())?;

    let rt = tokio::runtime::Runtime::new().context("creating async runtime")?;
    let tvl = rt.block_on(client.protocol_tvl(slug))?;

    println!("{slug}: ${tvl:.0}");
    Ok(())
}
