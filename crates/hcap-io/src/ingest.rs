use std::path::Path;

use hcap_core::{DatasetKind, HcapError, HcapResult, RawTable};
use tracing::info;

use crate::config::PipelineConfig;
use crate::loader::load_table;

/// The three raw tables loaded for one source.
#[derive(Debug, Clone)]
pub struct SourceTables {
    pub network_data: RawTable,
    pub installed_der: RawTable,
    pub planned_der: RawTable,
}

impl SourceTables {
    pub fn get(&self, kind: DatasetKind) -> &RawTable {
        match kind {
            DatasetKind::NetworkData => &self.network_data,
            DatasetKind::InstalledDer => &self.installed_der,
            DatasetKind::PlannedDer => &self.planned_der,
        }
    }
}

/// Bronze layer: raw tables keyed by source name, in configured order.
#[derive(Debug, Clone, Default)]
pub struct SourceBundle {
    sources: Vec<(String, SourceTables)>,
}

impl SourceBundle {
    pub fn get(&self, source: &str) -> Option<&SourceTables> {
        self.sources
            .iter()
            .find(|(name, _)| name == source)
            .map(|(_, tables)| tables)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SourceTables)> {
        self.sources
            .iter()
            .map(|(name, tables)| (name.as_str(), tables))
    }

    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Total rows of `kind` across all sources.
    pub fn row_count(&self, kind: DatasetKind) -> usize {
        self.sources
            .iter()
            .map(|(_, tables)| tables.get(kind).height())
            .sum()
    }

    fn push(&mut self, source: String, tables: SourceTables) {
        self.sources.push((source, tables));
    }
}

impl IntoIterator for SourceBundle {
    type Item = (String, SourceTables);
    type IntoIter = std::vec::IntoIter<(String, SourceTables)>;

    fn into_iter(self) -> Self::IntoIter {
        self.sources.into_iter()
    }
}

/// Load every configured source into a [`SourceBundle`].
pub fn ingest(config: &PipelineConfig) -> HcapResult<SourceBundle> {
    ingest_with(config, load_table)
}

/// Same as [`ingest`] with a caller-supplied loader.
///
/// The configuration is validated as a whole first, so an incomplete source
/// fails before any file is opened. Sources are then loaded in configured
/// order, network first, and the first load error ends the run.
pub fn ingest_with<F>(config: &PipelineConfig, mut load: F) -> HcapResult<SourceBundle>
where
    F: FnMut(&Path) -> HcapResult<RawTable>,
{
    config.validate()?;

    let mut bundle = SourceBundle::default();
    for source in &config.sources {
        let mut load_kind = |kind: DatasetKind| -> HcapResult<RawTable> {
            let path = source.path(kind).ok_or_else(|| {
                HcapError::Config(format!(
                    "source '{}' is missing required path: {}",
                    source.name,
                    kind.config_key()
                ))
            })?;
            load(path)
        };
        let tables = SourceTables {
            network_data: load_kind(DatasetKind::NetworkData)?,
            installed_der: load_kind(DatasetKind::InstalledDer)?,
            planned_der: load_kind(DatasetKind::PlannedDer)?,
        };
        info!(
            source = %source.name,
            network_rows = tables.network_data.height(),
            installed_rows = tables.installed_der.height(),
            planned_rows = tables.planned_der.height(),
            "ingested source"
        );
        bundle.push(source.name.clone(), tables);
    }
    Ok(bundle)
}
