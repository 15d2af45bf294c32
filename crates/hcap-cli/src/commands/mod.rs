pub mod output;
pub mod query;
pub mod run;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};
use hcap_io::{load_config, PipelineConfig};
use tracing::debug;

/// Read and validate the pipeline file at `path`.
pub fn load_pipeline(path: &Path) -> Result<PipelineConfig> {
    let config = load_config(path)
        .with_context(|| format!("loading pipeline file {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("invalid pipeline file {}", path.display()))?;
    debug!(sources = ?config.source_names(), "pipeline file loaded");
    Ok(config)
}
