//! Tabular loading for origin points and attribute tables.

use anyhow::{anyhow, bail, Context, Result};
use polars::prelude::{CsvReader, DataFrame, ParquetReader, SerReader};
use std::{fs::File, path::Path};

/// Read a `DataFrame` from CSV or Parquet, dispatched on file extension.
pub fn read_dataframe(path: &Path) -> Result<DataFrame> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();
    let mut file =
        File::open(path).with_context(|| format!("opening dataset '{}'", path.display()))?;
    match extension.as_str() {
        "parquet" => ParquetReader::new(&mut file)
            .finish()
            .context("reading Parquet dataset"),
        "csv" => CsvReader::new(&mut file)
            .finish()
            .context("reading CSV dataset"),
        other => Err(anyhow!(
            "unsupported dataset extension '{}' (use .csv or .parquet)",
            other
        )),
    }
}

/// Fail if any of `required` is missing from the frame. Malformed input
/// schema is the loader's responsibility; the pipeline core assumes the
/// columns it is pointed at exist.
pub fn ensure_columns(df: &DataFrame, required: &[&str]) -> Result<()> {
    let names = df.get_column_names();
    let missing: Vec<&str> = required
        .iter()
        .filter(|column| !names.iter().any(|name| name == *column))
        .copied()
        .collect();
    if !missing.is_empty() {
        bail!("dataset is missing required column(s): {}", missing.join(", "));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;
    use std::io::Write;

    fn sample() -> DataFrame {
        DataFrame::new(vec![
            Series::new("lon", vec![127.0, 129.0]),
            Series::new("lat", vec![37.5, 35.2]),
        ])
        .unwrap()
    }

    #[test]
    fn reads_csv_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(b"lon,lat\n127.0,37.5\n129.0,35.2\n").unwrap();
        let df = read_dataframe(file.path()).unwrap();
        assert_eq!(df.height(), 2);
        assert!(ensure_columns(&df, &["lon", "lat"]).is_ok());
    }

    #[test]
    fn reads_parquet_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("points.parquet");
        let mut df = sample();
        let mut file = File::create(&path).unwrap();
        ParquetWriter::new(&mut file).finish(&mut df).unwrap();
        let loaded = read_dataframe(&path).unwrap();
        assert_eq!(loaded.height(), 2);
    }

    #[test]
    fn rejects_unknown_extension() {
        let file = tempfile::Builder::new().suffix(".shp").tempfile().unwrap();
        let err = read_dataframe(file.path()).unwrap_err();
        assert!(err.to_string().contains("unsupported dataset extension"));
    }

    #[test]
    fn ensure_columns_reports_every_missing_column() {
        let df = sample();
        let err = ensure_columns(&df, &["lon", "bupjungdong_code", "zipcode"]).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("bupjungdong_code"));
        assert!(message.contains("zipcode"));
        assert!(!message.contains("lon,"));
    }
}
