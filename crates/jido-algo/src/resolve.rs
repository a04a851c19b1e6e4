//! Spatial resolution: point batches to parcel assignments.
//!
//! `resolve_parcels` appends a nullable `PNU` column to the origin frame by
//! testing each point against the parcel polygons. Rows are processed in
//! independent batches in parallel; each batch borrows its own
//! [`ContainmentResolver`] and shares nothing mutable with any other batch.
//!
//! Per row, candidate matches are first deduplicated by underlying polygon
//! geometry value (two parcel records carrying the same geometry under
//! different PNUs count once). If exactly one candidate remains its PNU is
//! the assignment; if several distinct PNUs remain the assignment is the
//! string form of the whole candidate list, preserving the original
//! aggregate-to-string behavior rather than picking an arbitrary winner.
//! Unmatched rows (including non-finite or null coordinates) get a null
//! PNU. No row is ever dropped or duplicated.

use anyhow::{Context, Result};
use jido_core::{ContainmentResolver, ParcelGeometry, ParcelSet};
use polars::prelude::*;
use rayon::prelude::*;

/// Name of the appended parcel-number column.
pub const PNU_COLUMN: &str = "PNU";

/// Rows per resolution batch. Batches are independent, so this only trades
/// scheduling overhead against per-worker chunk size.
pub const RESOLVE_BATCH_SIZE: usize = 2048;

/// Resolve every point of `origin` against `parcels`, appending the `PNU`
/// column. Coordinates are read from the caller-designated columns and cast
/// to `f64`; null coordinates resolve to a null PNU.
pub fn resolve_parcels(
    origin: &DataFrame,
    parcels: &ParcelSet,
    x_col: &str,
    y_col: &str,
) -> Result<DataFrame> {
    resolve_parcels_batched(origin, parcels, x_col, y_col, RESOLVE_BATCH_SIZE)
}

/// As [`resolve_parcels`], with an explicit batch size. Results are
/// independent of the batch size; only the parallel fan-out changes.
pub fn resolve_parcels_batched(
    origin: &DataFrame,
    parcels: &ParcelSet,
    x_col: &str,
    y_col: &str,
    batch_size: usize,
) -> Result<DataFrame> {
    let xs = coordinate_column(origin, x_col)?;
    let ys = coordinate_column(origin, y_col)?;
    let points: Vec<(f64, f64)> = xs.into_iter().zip(ys).collect();

    // Fan out over independent batches. Each worker constructs its own
    // resolver over the shared read-only parcel set; order is restored by
    // the indexed collect.
    let batch_size = batch_size.max(1);
    let batches: Vec<Vec<Option<String>>> = points
        .par_chunks(batch_size)
        .map(|batch| {
            let resolver = ContainmentResolver::new(parcels);
            resolver
                .resolve_batch(batch)
                .into_iter()
                .map(|matches| aggregate_matches(parcels, &matches))
                .collect()
        })
        .collect();
    let assignments: Vec<Option<String>> = batches.into_iter().flatten().collect();

    origin
        .hstack(&[Series::new(PNU_COLUMN, assignments)])
        .context("appending PNU column to origin frame")
}

/// Collapse one row's match list to its assignment value.
///
/// Dedup is by geometry value, not parcel identifier; the first PNU per
/// distinct geometry survives. Multiple surviving PNUs aggregate to the
/// string form of the candidate list in parcel-set order.
fn aggregate_matches(parcels: &ParcelSet, matches: &[usize]) -> Option<String> {
    let mut candidates: Vec<&str> = Vec::new();
    let mut geometries: Vec<&ParcelGeometry> = Vec::new();
    for &idx in matches {
        let parcel = &parcels.parcels()[idx];
        if geometries.iter().any(|seen| **seen == parcel.geometry) {
            continue;
        }
        geometries.push(&parcel.geometry);
        candidates.push(&parcel.pnu);
    }
    match candidates.as_slice() {
        [] => None,
        [single] => Some((*single).to_string()),
        many => Some(format!("{many:?}")),
    }
}

/// Extract a coordinate column as `f64`, mapping nulls to NaN so they fall
/// through resolution as unmatched rather than erroring.
pub(crate) fn coordinate_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let series = df
        .column(name)
        .with_context(|| format!("origin frame is missing coordinate column '{name}'"))?;
    let series = series
        .cast(&DataType::Float64)
        .with_context(|| format!("casting coordinate column '{name}' to f64"))?;
    let values = series.f64()?;
    Ok(values
        .into_iter()
        .map(|value| value.unwrap_or(f64::NAN))
        .collect())
}
