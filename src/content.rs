use std::path::Path;

use anyhow::{Context, Result};

use crate::model::CuratedProtocol;

/// Load the curated protocol dataset from a JSON array on disk.
///
/// Authoring and validating the dataset happens upstream; once loaded the
/// records are read-only.
pub fn load_protocols(path: &Path) -> Result<Vec<CuratedProtocol>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading curated protocols at {}", path.display()))?;
    let protocols: Vec<CuratedProtocol> =
        serde_json::from_str(&contents).with_context(|| format!("parsing {}", path.display()))?;
    Ok(protocols)
}
