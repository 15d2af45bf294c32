//! # hcap-core: shared types for the hosting-capacity pipeline
//!
//! Holds what every stage agrees on:
//! - [`HcapError`] / [`HcapResult`], the error taxonomy of a run
//! - [`DatasetKind`], the three datasets each utility supplies
//! - [`columns`], the column names the pipeline reads and writes
//! - [`RawTable`], a table as loaded from disk
//!
//! The stages themselves live in `hcap-io` (Bronze) and `hcap-pipeline`
//! (Silver, Platinum and queries).

pub mod columns;
pub mod dataset;
pub mod error;
pub mod table;

pub use dataset::DatasetKind;
pub use error::{HcapError, HcapResult};
pub use table::{has_column, require_column, RawTable};
