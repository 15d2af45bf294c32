//! # hcap-pipeline: Silver, Platinum and query layers
//!
//! Turns the Bronze [`SourceBundle`] into standardized tables, derives the
//! two query-ready views and answers the capacity and feeder queries.
//!
//! ```rust,no_run
//! use hcap_io::load_config;
//! use hcap_pipeline::{query_feeders_with_capacity, run_pipeline};
//! use std::path::Path;
//!
//! fn main() -> hcap_core::HcapResult<()> {
//!     let config = load_config(Path::new("test_data/utilities/pipeline.yaml"))?;
//!     let views = run_pipeline(&config)?;
//!     let feeders = query_feeders_with_capacity(100.0, &views)?;
//!     println!("{feeders}");
//!     Ok(())
//! }
//! ```
//!
//! Nothing here prints; callers decide what to show.

pub mod platinum;
pub mod query;
pub mod silver;
pub mod union;

use hcap_core::HcapResult;
use hcap_io::{ingest, PipelineConfig, SourceBundle};

pub use platinum::{build_views, PlatinumViews};
pub use query::{query_der_by_feeder, query_feeders_with_capacity, QueryResult};
pub use silver::{standardize, StandardizedTables};
pub use union::union_by_name;

/// Every stage's output from one run.
#[derive(Debug, Clone)]
pub struct PipelineRun {
    pub bronze: SourceBundle,
    pub silver: StandardizedTables,
    pub platinum: PlatinumViews,
}

/// Load, standardize and build the views for `config`.
#[tracing::instrument(level = "info", skip_all, fields(sources = config.sources.len()))]
pub fn run_pipeline(config: &PipelineConfig) -> HcapResult<PlatinumViews> {
    let bronze = ingest(config)?;
    let silver = standardize(bronze)?;
    build_views(&silver)
}

/// Like [`run_pipeline`], keeping the Bronze and Silver outputs as well.
#[tracing::instrument(level = "info", skip_all, fields(sources = config.sources.len()))]
pub fn run_pipeline_traced(config: &PipelineConfig) -> HcapResult<PipelineRun> {
    let bronze = ingest(config)?;
    let silver = standardize(bronze.clone())?;
    let platinum = build_views(&silver)?;
    Ok(PipelineRun {
        bronze,
        silver,
        platinum,
    })
}
