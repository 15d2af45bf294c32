use std::path::{Path, PathBuf};

use polars::prelude::{DataFrame, Series};

use crate::error::{HcapError, HcapResult};

/// A table exactly as read from one source file.
#[derive(Debug, Clone)]
pub struct RawTable {
    path: PathBuf,
    frame: DataFrame,
}

impl RawTable {
    pub fn new(path: impl Into<PathBuf>, frame: DataFrame) -> Self {
        Self {
            path: path.into(),
            frame,
        }
    }

    /// File the table was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn into_frame(self) -> DataFrame {
        self.frame
    }

    /// Column names in file order.
    pub fn columns(&self) -> Vec<&str> {
        self.frame.get_column_names()
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }
}

pub fn has_column(frame: &DataFrame, column: &str) -> bool {
    frame.get_column_names().contains(&column)
}

/// Look up `column` in `frame`, reporting a schema error against `table` when absent.
pub fn require_column<'a>(
    frame: &'a DataFrame,
    table: &str,
    column: &str,
) -> HcapResult<&'a Series> {
    if !has_column(frame, column) {
        return Err(HcapError::missing_column(table, column));
    }
    Ok(frame.column(column)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::NamedFrom;

    fn sample() -> DataFrame {
        DataFrame::new(vec![
            Series::new("feeder_id", ["F1", "F2"]),
            Series::new("max_hosting_capacity", [150.0, -5.0]),
        ])
        .unwrap()
    }

    #[test]
    fn raw_table_exposes_columns_and_height() {
        let table = RawTable::new("u1.csv", sample());
        assert_eq!(table.columns(), vec!["feeder_id", "max_hosting_capacity"]);
        assert_eq!(table.height(), 2);
        assert_eq!(table.path(), Path::new("u1.csv"));
    }

    #[test]
    fn require_column_reports_table_and_column() {
        let df = sample();
        assert!(require_column(&df, "network_data", "feeder_id").is_ok());
        let err = require_column(&df, "network_data", "utility_name").unwrap_err();
        assert!(matches!(err, HcapError::Schema(_)));
        assert!(err.to_string().contains("network_data"));
    }
}
