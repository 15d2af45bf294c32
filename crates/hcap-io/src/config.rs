//! Pipeline configuration: which sources exist and where their files live.
//!
//! A pipeline file lists sources in the order their rows should appear in the
//! merged tables:
//!
//! ```yaml
//! sources:
//!   - name: utility1
//!     network: utility1_network.csv
//!     installed: utility1_installed.csv
//!     planned: utility1_planned.csv
//! ```
//!
//! Relative paths are resolved against the directory holding the pipeline file.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use hcap_core::{DatasetKind, HcapError, HcapResult};
use serde::{Deserialize, Serialize};

/// The three input files of one source.
///
/// Paths are optional at parse time so an incomplete source is reported as a
/// configuration error by [`PipelineConfig::validate`] rather than as a
/// deserialization failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceSpec {
    pub name: String,
    #[serde(default)]
    pub network: Option<PathBuf>,
    #[serde(default)]
    pub installed: Option<PathBuf>,
    #[serde(default)]
    pub planned: Option<PathBuf>,
}

impl SourceSpec {
    pub fn new(
        name: impl Into<String>,
        network: impl Into<PathBuf>,
        installed: impl Into<PathBuf>,
        planned: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            network: Some(network.into()),
            installed: Some(installed.into()),
            planned: Some(planned.into()),
        }
    }

    /// A source with no paths yet; fill it with [`SourceSpec::with_path`].
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            network: None,
            installed: None,
            planned: None,
        }
    }

    pub fn with_path(mut self, kind: DatasetKind, path: impl Into<PathBuf>) -> Self {
        *self.slot_mut(kind) = Some(path.into());
        self
    }

    pub fn path(&self, kind: DatasetKind) -> Option<&Path> {
        match kind {
            DatasetKind::NetworkData => self.network.as_deref(),
            DatasetKind::InstalledDer => self.installed.as_deref(),
            DatasetKind::PlannedDer => self.planned.as_deref(),
        }
    }

    /// Dataset kinds this source does not supply a path for.
    pub fn missing(&self) -> Vec<DatasetKind> {
        DatasetKind::ALL
            .into_iter()
            .filter(|kind| self.path(*kind).is_none())
            .collect()
    }

    fn slot_mut(&mut self, kind: DatasetKind) -> &mut Option<PathBuf> {
        match kind {
            DatasetKind::NetworkData => &mut self.network,
            DatasetKind::InstalledDer => &mut self.installed,
            DatasetKind::PlannedDer => &mut self.planned,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    #[serde(default)]
    pub sources: Vec<SourceSpec>,
}

impl PipelineConfig {
    pub fn new(sources: Vec<SourceSpec>) -> Self {
        Self { sources }
    }

    /// Check the configuration is complete before any file is read.
    ///
    /// Every source needs a non-blank, unique name and all three paths.
    pub fn validate(&self) -> HcapResult<()> {
        if self.sources.is_empty() {
            return Err(HcapError::Config("no sources configured".into()));
        }
        let mut seen = HashSet::new();
        for source in &self.sources {
            if source.name.trim().is_empty() {
                return Err(HcapError::Config("source name cannot be empty".into()));
            }
            if !seen.insert(source.name.as_str()) {
                return Err(HcapError::Config(format!(
                    "duplicate source '{}' in configuration",
                    source.name
                )));
            }
            let missing = source.missing();
            if !missing.is_empty() {
                let keys: Vec<&str> = missing.iter().map(|kind| kind.config_key()).collect();
                return Err(HcapError::Config(format!(
                    "source '{}' is missing required path(s): {}",
                    source.name,
                    keys.join(", ")
                )));
            }
        }
        Ok(())
    }

    /// Rewrite relative paths so they are relative to `base` instead of the
    /// working directory.
    pub fn resolve_relative_to(mut self, base: &Path) -> Self {
        for source in &mut self.sources {
            for kind in DatasetKind::ALL {
                let slot = source.slot_mut(kind);
                if let Some(path) = slot.take() {
                    *slot = Some(if path.is_relative() {
                        base.join(path)
                    } else {
                        path
                    });
                }
            }
        }
        self
    }

    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name.as_str()).collect()
    }
}

/// Read a pipeline file (YAML, JSON or TOML, chosen by extension).
///
/// The result is not validated; [`crate::ingest()`] does that before loading.
pub fn load_config(path: &Path) -> HcapResult<PipelineConfig> {
    if !path.exists() {
        return Err(HcapError::NotFound(path.to_path_buf()));
    }
    let data = fs::read_to_string(path)?;
    let extension = path.extension().and_then(|ext| ext.to_str());
    let parsed: Result<PipelineConfig, String> = match extension {
        Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
            serde_yaml::from_str(&data).map_err(|err| err.to_string())
        }
        Some(ext) if ext.eq_ignore_ascii_case("json") => {
            serde_json::from_str(&data).map_err(|err| err.to_string())
        }
        Some(ext) if ext.eq_ignore_ascii_case("toml") => {
            toml::from_str(&data).map_err(|err| err.to_string())
        }
        _ => serde_yaml::from_str(&data)
            .or_else(|_| serde_json::from_str(&data))
            .map_err(|err| err.to_string()),
    };
    let config = parsed.map_err(|message| {
        HcapError::Config(format!(
            "parsing pipeline file '{}': {message}",
            path.display()
        ))
    })?;

    let base = path.parent().unwrap_or_else(|| Path::new("."));
    Ok(config.resolve_relative_to(base))
}
