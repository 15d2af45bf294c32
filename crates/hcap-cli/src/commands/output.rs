use std::io::{self, Write};

use anyhow::{Context, Result};
use hcap_cli::cli::OutputFormat;
use polars::prelude::{CsvWriter, DataFrame, SerWriter};

/// Write `frame` to stdout under a `title:` line.
pub fn print_frame(title: &str, frame: &DataFrame, format: OutputFormat) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "\n{title}:")?;
    match format {
        OutputFormat::Table => writeln!(out, "{frame}")?,
        OutputFormat::Csv => {
            if frame.width() == 0 {
                return Ok(());
            }
            let mut frame = frame.clone();
            CsvWriter::new(&mut out)
                .finish(&mut frame)
                .with_context(|| format!("writing {title} as CSV"))?;
        }
    }
    Ok(())
}
