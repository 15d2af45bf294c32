use std::fs::{self, File};
use std::io::{BufRead, BufReader, ErrorKind, Seek};
use std::path::Path;

use hcap_core::{HcapError, HcapResult, RawTable};
use polars::prelude::{CsvReader, SerReader};
use tracing::debug;

/// Read one comma-delimited file into a [`RawTable`].
///
/// The first row is the header. Column types are inferred by polars: columns
/// whose values all parse as numbers become numeric, the rest stay text, and
/// empty cells are null. A header-only file yields a zero-row table.
#[tracing::instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn load_table(path: &Path) -> HcapResult<RawTable> {
    if !path.exists() {
        return Err(HcapError::NotFound(path.to_path_buf()));
    }
    if fs::metadata(path)?.len() == 0 {
        return Err(HcapError::parse(path, "file is empty; expected a header row"));
    }

    let mut file = File::open(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => HcapError::NotFound(path.to_path_buf()),
        _ => HcapError::Io(err),
    })?;
    if header_is_blank(&mut file)? {
        return Err(HcapError::parse(path, "header row is empty"));
    }
    file.rewind()?;
    let frame = CsvReader::new(&mut file)
        .has_header(true)
        .finish()
        .map_err(|err| HcapError::parse(path, err))?;

    if frame.width() == 0 {
        return Err(HcapError::parse(path, "header row is empty"));
    }

    debug!(rows = frame.height(), columns = frame.width(), "loaded table");
    Ok(RawTable::new(path, frame))
}

/// True when every cell of the first line is blank or an empty quoted string.
///
/// Checked on the raw line because polars renames repeated blank names to
/// `" "`, `" _duplicated_0"` and so on.
fn header_is_blank(file: &mut File) -> HcapResult<bool> {
    let mut line = Vec::new();
    BufReader::new(file).read_until(b'\n', &mut line)?;
    let line = String::from_utf8_lossy(&line);
    Ok(line
        .split(',')
        .all(|cell| cell.trim().trim_matches('"').trim().is_empty()))
}
