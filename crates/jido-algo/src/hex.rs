//! Hex-grid cell tagging of raw points.
//!
//! Independent of the join pipeline: tags each origin row with the H3 cell
//! containing its coordinates at the requested resolution level. The cell
//! function takes latitude before longitude, the reverse of the pipeline's
//! own `(x = longitude, y = latitude)` column convention; callers of
//! [`cell_for_point`] must pass the y column first.

use crate::resolve::coordinate_column;
use anyhow::{anyhow, Context, Result};
use h3o::{LatLng, Resolution};
use polars::prelude::*;
use rayon::prelude::*;

/// Name of the appended cell column.
pub const HEX_COLUMN: &str = "h3";

/// H3 cell id for one point, or `None` for coordinates the grid rejects
/// (non-finite or out of range). Latitude first.
pub fn cell_for_point(lat: f64, lon: f64, resolution: Resolution) -> Option<String> {
    LatLng::new(lat, lon)
        .ok()
        .map(|coord| coord.to_cell(resolution).to_string())
}

/// Tag every row of `origin` with its H3 cell at `level`, appending the
/// `h3` column. A level outside 0..=15 is a configuration error; bad
/// coordinates yield a null cell, never an error.
pub fn tag_hex_cells(origin: &DataFrame, x_col: &str, y_col: &str, level: u8) -> Result<DataFrame> {
    let resolution = Resolution::try_from(level)
        .map_err(|_| anyhow!("hex resolution level {level} is out of range (0..=15)"))?;
    let xs = coordinate_column(origin, x_col)?;
    let ys = coordinate_column(origin, y_col)?;

    // Latitude (y) leads: the cell function's argument order is inverted
    // relative to the (x, y) columns.
    let cells: Vec<Option<String>> = ys
        .par_iter()
        .zip(xs.par_iter())
        .map(|(&lat, &lon)| cell_for_point(lat, lon, resolution))
        .collect();

    origin
        .hstack(&[Series::new(HEX_COLUMN, cells)])
        .context("appending h3 column to origin frame")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> DataFrame {
        DataFrame::new(vec![
            Series::new("lon", vec![127.0, 200.0]),
            Series::new("lat", vec![37.5, 90.1]),
        ])
        .unwrap()
    }

    #[test]
    fn tagging_matches_the_cell_function_with_inverted_arguments() {
        let tagged = tag_hex_cells(&origin(), "lon", "lat", 7).unwrap();
        let expected = cell_for_point(37.5, 127.0, Resolution::Seven).unwrap();
        assert_eq!(
            tagged.column(HEX_COLUMN).unwrap().utf8().unwrap().get(0),
            Some(expected.as_str())
        );
    }

    #[test]
    fn out_of_range_coordinates_yield_a_null_cell() {
        let tagged = tag_hex_cells(&origin(), "lon", "lat", 7).unwrap();
        assert_eq!(tagged.height(), 2);
        assert!(tagged.column(HEX_COLUMN).unwrap().utf8().unwrap().get(1).is_none());
    }

    #[test]
    fn swapped_arguments_produce_a_different_cell() {
        // Both orders are valid coordinates for this pair, so a silent
        // argument swap would go unnoticed without this check.
        let right = cell_for_point(37.5, 64.0, Resolution::Seven).unwrap();
        let swapped = cell_for_point(64.0, 37.5, Resolution::Seven).unwrap();
        assert_ne!(right, swapped);
    }

    #[test]
    fn invalid_level_is_rejected() {
        let err = tag_hex_cells(&origin(), "lon", "lat", 16).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn level_changes_the_cell() {
        let coarse = cell_for_point(37.5, 127.0, Resolution::Five).unwrap();
        let fine = cell_for_point(37.5, 127.0, Resolution::Nine).unwrap();
        assert_ne!(coarse, fine);
    }
}
