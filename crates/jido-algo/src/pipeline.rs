//! The pipeline instance: compute-once join results, many readers.
//!
//! [`ParcelPipeline`] runs both stages at construction time — spatial
//! resolution, then the attribute join — and stores the two frames as
//! immutable fields. Every accessor reads the cached copies; nothing is
//! recomputed lazily. This is a correctness requirement, not a performance
//! hint: two calls to any accessor on one instance must observe the same
//! resolution, and the only way to invalidate the cache is to construct a
//! new pipeline.

use crate::hex::tag_hex_cells;
use crate::join::join_with_table;
use crate::resolve::resolve_parcels;
use crate::view::{project_view, AddressView};
use anyhow::Result;
use jido_core::ParcelSet;
use polars::prelude::DataFrame;

/// A constructed resolution pipeline holding the two memoized results.
///
/// Polars frames are cheap to clone (columns are reference-counted), so the
/// accessors hand out clones of the cached snapshots rather than borrows.
pub struct ParcelPipeline {
    origin: DataFrame,
    x_col: String,
    y_col: String,
    /// Cached stage 1: origin rows plus the nullable `PNU` column.
    assignments: DataFrame,
    /// Cached stage 2: enriched records, one row per distinct PNU.
    enriched: DataFrame,
}

impl ParcelPipeline {
    /// Build the pipeline and compute both cached results.
    ///
    /// The parcel set and attribute table are only read here; they are not
    /// retained, so mutating or dropping them afterwards cannot perturb the
    /// cached resolution.
    pub fn new(
        origin: DataFrame,
        parcels: &ParcelSet,
        table: &DataFrame,
        x_col: &str,
        y_col: &str,
    ) -> Result<Self> {
        let assignments = resolve_parcels(&origin, parcels, x_col, y_col)?;
        let enriched = join_with_table(&assignments, table)?;
        Ok(ParcelPipeline {
            origin,
            x_col: x_col.to_string(),
            y_col: y_col.to_string(),
            assignments,
            enriched,
        })
    }

    /// Per-row parcel assignment: the origin frame plus the `PNU` column,
    /// null where no polygon contained the point.
    pub fn resolve_parcel(&self) -> DataFrame {
        self.assignments.clone()
    }

    /// The full cached attribute join, one row per distinct PNU.
    pub fn enriched_join(&self) -> DataFrame {
        self.enriched.clone()
    }

    /// Project one of the fixed address views from the cached results.
    pub fn view(&self, view: AddressView) -> Result<DataFrame> {
        project_view(&self.assignments, &self.enriched, view)
    }

    /// Per-row H3 cell at `level`. Runs on the raw origin points and does
    /// not touch the cached join results.
    pub fn resolve_hex_cell(&self, level: u8) -> Result<DataFrame> {
        tag_hex_cells(&self.origin, &self.x_col, &self.y_col, level)
    }

    /// The origin frame the pipeline was constructed over.
    pub fn origin(&self) -> &DataFrame {
        &self.origin
    }
}
