//! # jido-io: Dataset Loaders
//!
//! Loads the three pipeline inputs from disk:
//!
//! - parcel polygons from CSV carrying a `PNU` column and a WKT `geometry`
//!   column (POLYGON / MULTIPOLYGON only) → [`jido_core::ParcelSet`];
//! - origin points and attribute tables from CSV or Parquet, dispatched on
//!   file extension → polars `DataFrame`.
//!
//! Schema problems are fatal here, by design: the resolution core absorbs
//! bad *data* as nulls, but a missing required column is a loader error and
//! surfaces before any pipeline is constructed (see [`ensure_columns`]).

pub mod parcels;
pub mod tabular;

pub use parcels::{load_parcels_csv, parse_wkt};
pub use tabular::{ensure_columns, read_dataframe};
