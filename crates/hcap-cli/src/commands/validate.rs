use std::path::Path;

use anyhow::{bail, Result};
use hcap_core::DatasetKind;
use tracing::warn;

use super::load_pipeline;

/// Check the pipeline file and that every input it names exists, without
/// reading any table.
pub fn handle(config: &Path) -> Result<()> {
    let pipeline = load_pipeline(config)?;
    let mut missing = 0;
    for source in &pipeline.sources {
        for kind in DatasetKind::ALL {
            if let Some(path) = source.path(kind) {
                if !path.exists() {
                    warn!("{} {kind}: {} does not exist", source.name, path.display());
                    missing += 1;
                }
            }
        }
    }
    if missing > 0 {
        bail!("Not found: {missing} input file(s) listed in {}", config.display());
    }
    println!(
        "Pipeline file {} is valid: {} source(s) [{}]",
        config.display(),
        pipeline.sources.len(),
        pipeline.source_names().join(", ")
    );
    Ok(())
}
