use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use hcap_cli::cli::OutputFormat;
use hcap_core::DatasetKind;
use hcap_pipeline::platinum::{FEEDERS_WITH_CAPACITY, INSTALLED_AND_PLANNED_DER};
use hcap_pipeline::{query_der_by_feeder, query_feeders_with_capacity, run_pipeline_traced};
use tracing::info;

use super::load_pipeline;
use super::output::print_frame;

pub fn handle(config: &Path, threshold: f64, feeder: &str, format: OutputFormat) -> Result<()> {
    let pipeline = load_pipeline(config)?;
    info!("Running pipeline {} ({} sources)", config.display(), pipeline.sources.len());
    let start = Instant::now();
    let run = run_pipeline_traced(&pipeline)
        .with_context(|| format!("running pipeline {}", config.display()))?;

    println!("Bronze Layer Data Ingested:");
    for (source, tables) in run.bronze.iter() {
        for kind in DatasetKind::ALL {
            print_frame(&format!("{source} {kind}"), tables.get(kind).frame(), format)?;
        }
    }

    println!("\nSilver Layer Standardized Data:");
    for kind in DatasetKind::ALL {
        print_frame(kind.as_str(), run.silver.get(kind), format)?;
    }

    println!("\nPlatinum Layer API-Ready Tables:");
    print_frame(FEEDERS_WITH_CAPACITY, &run.platinum.feeders_with_capacity, format)?;
    print_frame(
        INSTALLED_AND_PLANNED_DER,
        &run.platinum.installed_and_planned_der,
        format,
    )?;

    let feeders = query_feeders_with_capacity(threshold, &run.platinum)?;
    print_frame(
        &format!("Feeders with capacity above threshold {threshold}"),
        feeders.frame(),
        format,
    )?;
    let der = query_der_by_feeder(feeder, &run.platinum)?;
    print_frame(
        &format!("Installed and planned DER for feeder {feeder}"),
        der.frame(),
        format,
    )?;

    info!("Pipeline finished in {:.3}s", start.elapsed().as_secs_f64());
    Ok(())
}
