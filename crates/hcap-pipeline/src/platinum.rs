use hcap_core::columns::MAX_HOSTING_CAPACITY;
use hcap_core::{require_column, HcapResult};
use polars::prelude::{ChunkCompare, DataFrame, DataType};
use tracing::info;

use crate::silver::StandardizedTables;
use crate::union::union_by_name;

pub const FEEDERS_WITH_CAPACITY: &str = "feeders_with_capacity";
pub const INSTALLED_AND_PLANNED_DER: &str = "installed_and_planned_der";

/// Platinum layer: the two query-ready views.
#[derive(Debug, Clone, Default)]
pub struct PlatinumViews {
    /// Network rows with a positive `max_hosting_capacity`.
    pub feeders_with_capacity: DataFrame,
    /// Installed DER rows followed by planned DER rows.
    pub installed_and_planned_der: DataFrame,
}

/// Derive the Platinum views from the Silver tables.
///
/// Capacity is read as a real number; rows where it is missing or not
/// numeric do not count as positive.
pub fn build_views(standardized: &StandardizedTables) -> HcapResult<PlatinumViews> {
    let feeders_with_capacity =
        rows_with_capacity_above(&standardized.network_data, "network_data", 0.0)?;
    let installed_and_planned_der =
        union_by_name(&[&standardized.installed_der, &standardized.planned_der])?;

    info!(
        feeders = feeders_with_capacity.height(),
        der_records = installed_and_planned_der.height(),
        "platinum views built"
    );
    Ok(PlatinumViews {
        feeders_with_capacity,
        installed_and_planned_der,
    })
}

/// Rows of `frame` whose `max_hosting_capacity` is strictly above `threshold`.
pub(crate) fn rows_with_capacity_above(
    frame: &DataFrame,
    table: &str,
    threshold: f64,
) -> HcapResult<DataFrame> {
    let capacity =
        require_column(frame, table, MAX_HOSTING_CAPACITY)?.cast(&DataType::Float64)?;
    let mask = capacity.f64()?.gt(threshold);
    Ok(frame.filter(&mask)?)
}
