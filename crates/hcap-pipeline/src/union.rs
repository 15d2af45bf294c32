//! Row-wise union of frames whose column sets differ.
//!
//! Columns are matched by name, never by position. The output has every
//! column seen in any input, in first-seen order; rows from a frame lacking a
//! column get nulls there. When inputs disagree on a column's type, integers
//! and floats widen to `Float64` and any other mix widens to `Utf8`.

use hcap_core::HcapResult;
use polars::prelude::{DataFrame, DataType, Series};

/// Stack `frames` top to bottom, aligning columns by name.
///
/// Frames without columns are skipped. An empty input yields an empty frame.
pub fn union_by_name(frames: &[&DataFrame]) -> HcapResult<DataFrame> {
    let frames: Vec<&DataFrame> = frames
        .iter()
        .copied()
        .filter(|frame| frame.width() > 0)
        .collect();
    if frames.is_empty() {
        return Ok(DataFrame::default());
    }

    let schema = unified_schema(&frames);
    let mut stacked: Option<DataFrame> = None;
    for frame in frames {
        let aligned = align(frame, &schema)?;
        match stacked.as_mut() {
            Some(acc) => {
                acc.vstack_mut(&aligned)?;
            }
            None => stacked = Some(aligned),
        }
    }
    Ok(stacked.unwrap_or_default())
}

/// Column names in first-seen order with their widened types.
///
/// Zero-row frames contribute names only; their types are used for columns
/// that no populated frame has.
fn unified_schema(frames: &[&DataFrame]) -> Vec<(String, DataType)> {
    let mut schema: Vec<(String, Option<DataType>, DataType)> = Vec::new();
    for frame in frames {
        let populated = frame.height() > 0;
        for series in frame.get_columns() {
            let name = series.name();
            let observed = populated.then(|| series.dtype().clone());
            match schema.iter_mut().find(|(existing, _, _)| existing == name) {
                Some((_, widened, _)) => {
                    if let Some(observed) = observed {
                        *widened = Some(match widened.take() {
                            Some(current) => widen(&current, &observed),
                            None => observed,
                        });
                    }
                }
                None => schema.push((name.to_string(), observed, series.dtype().clone())),
            }
        }
    }
    schema
        .into_iter()
        .map(|(name, widened, fallback)| (name, widened.unwrap_or(fallback)))
        .collect()
}

fn widen(left: &DataType, right: &DataType) -> DataType {
    match (left, right) {
        _ if left == right => left.clone(),
        (DataType::Null, other) | (other, DataType::Null) => other.clone(),
        _ if left.is_numeric() && right.is_numeric() => {
            if left.is_float() || right.is_float() {
                DataType::Float64
            } else {
                DataType::Int64
            }
        }
        _ => DataType::Utf8,
    }
}

fn align(frame: &DataFrame, schema: &[(String, DataType)]) -> HcapResult<DataFrame> {
    let height = frame.height();
    let mut columns = Vec::with_capacity(schema.len());
    for (name, dtype) in schema {
        let series = match frame.column(name) {
            Ok(series) if series.dtype() == dtype => series.clone(),
            Ok(series) => series.cast(dtype)?,
            Err(_) => Series::full_null(name, height, dtype),
        };
        columns.push(series);
    }
    Ok(DataFrame::new(columns)?)
}
