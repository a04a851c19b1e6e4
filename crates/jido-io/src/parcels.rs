//! Parcel polygon ingestion from WKT-bearing CSV.
//!
//! Expected CSV format: header row with `PNU` and `geometry` columns, one
//! parcel per row, geometry as WKT text in WGS84. Non-areal geometries are
//! rejected at load time since they can never contain a point.

use anyhow::{anyhow, Context, Result};
use geo_types::Geometry;
use jido_core::{Parcel, ParcelGeometry, ParcelSet};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct ParcelRecord {
    #[serde(rename = "PNU")]
    pnu: String,
    geometry: String,
}

/// Parse WKT text to a geo-types Geometry.
pub fn parse_wkt(text: &str) -> Result<Geometry<f64>> {
    use std::str::FromStr;
    wkt::Wkt::<f64>::from_str(text)
        .map_err(|e| anyhow!("parsing WKT: {e:?}"))
        .and_then(|parsed| {
            parsed
                .try_into()
                .map_err(|e: wkt::conversion::Error| anyhow!("converting WKT geometry: {e:?}"))
        })
}

/// Load a parcel polygon dataset from CSV.
pub fn load_parcels_csv(path: &Path) -> Result<ParcelSet> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening parcel CSV '{}'", path.display()))?;

    let mut set = ParcelSet::new();
    for result in reader.deserialize() {
        let record: ParcelRecord = result.context("parsing parcel record")?;
        let geometry = parse_wkt(&record.geometry)
            .with_context(|| format!("parcel '{}'", record.pnu))?;
        let geometry = ParcelGeometry::try_from(geometry)
            .with_context(|| format!("parcel '{}'", record.pnu))?;
        set.push(Parcel::new(record.pnu, geometry));
    }
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_polygon_and_multipolygon_parcels() {
        let file = write_csv(
            "PNU,geometry\n\
             1111010100100010000,\"POLYGON((126.5 37.0, 127.5 37.0, 127.5 38.0, 126.5 38.0, 126.5 37.0))\"\n\
             2611010100100020000,\"MULTIPOLYGON(((128.5 35.0, 129.5 35.0, 129.5 35.5, 128.5 35.5, 128.5 35.0)))\"\n",
        );
        let set = load_parcels_csv(file.path()).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.parcels()[0].pnu, "1111010100100010000");
        assert!(matches!(
            set.parcels()[1].geometry,
            ParcelGeometry::MultiPolygon(_)
        ));
    }

    #[test]
    fn rejects_non_areal_geometry() {
        let file = write_csv("PNU,geometry\n1111010100100010000,POINT(127.0 37.5)\n");
        let err = load_parcels_csv(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("unsupported parcel geometry"));
    }

    #[test]
    fn rejects_malformed_wkt() {
        let file = write_csv("PNU,geometry\n1111010100100010000,POLYGON((oops\n");
        assert!(load_parcels_csv(file.path()).is_err());
    }

    #[test]
    fn empty_file_loads_an_empty_set() {
        let file = write_csv("PNU,geometry\n");
        let set = load_parcels_csv(file.path()).unwrap();
        assert!(set.is_empty());
    }
}
