//! Silver layer: one standardized table per dataset kind.
//!
//! Every source's table is renamed (network data only), gets text feeder
//! identifiers and a `utility_name` column, and is then unioned with the
//! other sources' tables of the same kind. Rows keep bundle order, then
//! file order.

use hcap_core::columns::{FEEDER_ID, NETWORK_RENAMES, UTILITY_NAME};
use hcap_core::{has_column, DatasetKind, HcapError, HcapResult};
use hcap_io::SourceBundle;
use polars::prelude::{DataFrame, DataType, NamedFrom, Series};
use tracing::{debug, info};

use crate::union::union_by_name;

/// Output of [`standardize`].
#[derive(Debug, Clone, Default)]
pub struct StandardizedTables {
    pub network_data: DataFrame,
    pub installed_der: DataFrame,
    pub planned_der: DataFrame,
}

impl StandardizedTables {
    pub fn get(&self, kind: DatasetKind) -> &DataFrame {
        match kind {
            DatasetKind::NetworkData => &self.network_data,
            DatasetKind::InstalledDer => &self.installed_der,
            DatasetKind::PlannedDer => &self.planned_der,
        }
    }
}

/// Standardize and merge all sources of `bundle`.
pub fn standardize(bundle: SourceBundle) -> HcapResult<StandardizedTables> {
    let mut network = Vec::new();
    let mut installed = Vec::new();
    let mut planned = Vec::new();

    for (source, tables) in bundle {
        debug!(source = %source, "standardizing source");
        network.push(standardize_network(tables.network_data.into_frame(), &source)?);
        installed.push(tag_source(tables.installed_der.into_frame(), &source)?);
        planned.push(tag_source(tables.planned_der.into_frame(), &source)?);
    }

    let tables = StandardizedTables {
        network_data: union_by_name(&network.iter().collect::<Vec<_>>())?,
        installed_der: union_by_name(&installed.iter().collect::<Vec<_>>())?,
        planned_der: union_by_name(&planned.iter().collect::<Vec<_>>())?,
    };
    info!(
        network_rows = tables.network_data.height(),
        installed_rows = tables.installed_der.height(),
        planned_rows = tables.planned_der.height(),
        "silver tables built"
    );
    Ok(tables)
}

/// Rename the network columns of one source, then tag it.
///
/// A rename whose source column is absent is skipped. A rename whose target
/// column already exists next to the source column is ambiguous and rejected.
pub fn standardize_network(mut frame: DataFrame, source: &str) -> HcapResult<DataFrame> {
    for (from, to) in NETWORK_RENAMES {
        if !has_column(&frame, from) {
            continue;
        }
        if has_column(&frame, to) {
            return Err(HcapError::Schema(format!(
                "network data of '{source}' has both '{from}' and '{to}'"
            )));
        }
        frame.rename(from, to)?;
    }
    tag_source(frame, source)
}

/// Make `feeder_id` text and set `utility_name` on every row.
pub fn tag_source(mut frame: DataFrame, source: &str) -> HcapResult<DataFrame> {
    if has_column(&frame, FEEDER_ID) {
        let feeder = frame.column(FEEDER_ID)?.cast(&DataType::Utf8)?;
        frame.with_column(feeder)?;
    }
    let utility = Series::new(UTILITY_NAME, vec![source; frame.height()]);
    frame.with_column(utility)?;
    Ok(frame)
}
