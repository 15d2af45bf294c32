//! Read-only filters over the Platinum views.
//!
//! Both queries copy the matching rows out of a view; the view itself is
//! never modified. An empty result is a normal outcome.

use std::fmt;

use hcap_core::columns::FEEDER_ID;
use hcap_core::{require_column, HcapResult};
use polars::prelude::{ChunkCompare, DataFrame, DataType};

use crate::platinum::{
    rows_with_capacity_above, PlatinumViews, FEEDERS_WITH_CAPACITY, INSTALLED_AND_PLANNED_DER,
};

/// Rows selected from a Platinum view.
#[derive(Debug, Clone)]
pub struct QueryResult {
    frame: DataFrame,
}

impl QueryResult {
    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn into_frame(self) -> DataFrame {
        self.frame
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    /// Values of `column` rendered as text, in row order.
    pub fn text_values(&self, column: &str) -> HcapResult<Vec<Option<String>>> {
        let series =
            require_column(&self.frame, "query result", column)?.cast(&DataType::Utf8)?;
        Ok(series
            .utf8()?
            .into_iter()
            .map(|value| value.map(str::to_string))
            .collect())
    }
}

impl fmt::Display for QueryResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.frame)
    }
}

/// Feeders whose `max_hosting_capacity` strictly exceeds `threshold`.
pub fn query_feeders_with_capacity(
    threshold: f64,
    views: &PlatinumViews,
) -> HcapResult<QueryResult> {
    let frame =
        rows_with_capacity_above(&views.feeders_with_capacity, FEEDERS_WITH_CAPACITY, threshold)?;
    Ok(QueryResult { frame })
}

/// Installed and planned DER attached to `feeder_id` (exact text match).
///
/// Feeder ids are text after standardization, so an id stored as a number
/// in its file matches its decimal rendering: `"101"` finds feeder `101`.
pub fn query_der_by_feeder(feeder_id: &str, views: &PlatinumViews) -> HcapResult<QueryResult> {
    let der = &views.installed_and_planned_der;
    let ids =
        require_column(der, INSTALLED_AND_PLANNED_DER, FEEDER_ID)?.cast(&DataType::Utf8)?;
    let mask = ids.utf8()?.equal(feeder_id);
    Ok(QueryResult {
        frame: der.filter(&mask)?,
    })
}
