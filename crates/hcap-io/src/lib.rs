//! # hcap-io: Bronze-layer ingestion
//!
//! Reads each utility's three CSV files (network topology, installed DER,
//! planned DER) into raw tables.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hcap_io::{ingest, load_config};
//! use std::path::Path;
//!
//! fn main() -> hcap_core::HcapResult<()> {
//!     let config = load_config(Path::new("test_data/utilities/pipeline.yaml"))?;
//!     let bronze = ingest(&config)?;
//!     for (source, tables) in bronze.iter() {
//!         println!("{source}: {} feeders", tables.network_data.height());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Overview
//! - [`loader`]: one file → one [`hcap_core::RawTable`]
//! - [`config`]: pipeline file parsing and validation
//! - [`ingest`]: all sources → [`SourceBundle`]

pub mod config;
pub mod ingest;
pub mod loader;

pub use config::{load_config, PipelineConfig, SourceSpec};
pub use ingest::{ingest, ingest_with, SourceBundle, SourceTables};
pub use loader::load_table;
