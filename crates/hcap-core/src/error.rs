//! Unified error type for the hosting-capacity pipeline
//!
//! Every stage (loading, ingestion, standardization, views, queries) returns
//! [`HcapResult`]. All variants are fatal for a run: the pipeline never
//! retries or emits partial output.
//!
//! # Example
//!
//! ```ignore
//! use hcap_core::{HcapError, HcapResult};
//!
//! fn load_all(config: &PipelineConfig) -> HcapResult<PlatinumViews> {
//!     let bundle = ingest(config)?;
//!     let silver = standardize(bundle)?;
//!     build_views(&silver)
//! }
//! ```

use std::path::PathBuf;

use polars::prelude::PolarsError;
use thiserror::Error;

/// Unified error type for all pipeline operations.
#[derive(Error, Debug)]
pub enum HcapError {
    /// A configured input file does not exist.
    #[error("Not found: '{}' does not exist", .0.display())]
    NotFound(PathBuf),

    /// The file is not valid delimited text, or its header is empty.
    #[error("Parse error in '{}': {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// The pipeline configuration is incomplete or inconsistent.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A view or query references a column that the upstream stage did not produce.
    #[error("Schema error: {0}")]
    Schema(String),

    /// I/O errors other than a missing file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// DataFrame engine failures
    #[error("Frame error: {0}")]
    Frame(#[from] PolarsError),
}

impl HcapError {
    pub fn parse(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        HcapError::Parse {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Error for a column the caller expected in `table` but that is absent.
    pub fn missing_column(table: &str, column: &str) -> Self {
        HcapError::Schema(format!("column '{column}' missing from '{table}'"))
    }
}

/// Convenience type alias for Results using HcapError.
pub type HcapResult<T> = Result<T, HcapError>;
