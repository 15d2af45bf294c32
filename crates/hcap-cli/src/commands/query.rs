use std::path::Path;

use anyhow::{Context, Result};
use hcap_cli::cli::OutputFormat;
use hcap_pipeline::{query_der_by_feeder, query_feeders_with_capacity, run_pipeline};
use tracing::info;

use super::load_pipeline;
use super::output::print_frame;

pub fn feeders(config: &Path, threshold: f64, format: OutputFormat) -> Result<()> {
    let pipeline = load_pipeline(config)?;
    let views = run_pipeline(&pipeline)
        .with_context(|| format!("running pipeline {}", config.display()))?;
    let result = query_feeders_with_capacity(threshold, &views)?;
    info!("{} feeder(s) above {threshold}", result.height());
    print_frame(
        &format!("Feeders with capacity above threshold {threshold}"),
        result.frame(),
        format,
    )
}

pub fn der(config: &Path, feeder: &str, format: OutputFormat) -> Result<()> {
    let pipeline = load_pipeline(config)?;
    let views = run_pipeline(&pipeline)
        .with_context(|| format!("running pipeline {}", config.display()))?;
    let result = query_der_by_feeder(feeder, &views)?;
    info!("{} DER record(s) on feeder {feeder}", result.height());
    print_frame(
        &format!("Installed and planned DER for feeder {feeder}"),
        result.frame(),
        format,
    )
}
