//! Fixed address views over the cached join results.
//!
//! Each view is a named column subset of the enriched frame, re-joined
//! (left-outer on `PNU`) back to the per-row assignment frame so that every
//! origin row appears exactly once, resolution failures included. Nothing
//! is computed here beyond the column selection and the cheap re-join.

use crate::resolve::PNU_COLUMN;
use anyhow::{Context, Result};
use polars::prelude::*;

/// The projectable address views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressView {
    /// Postal code: `PNU, zipcode`.
    Zipcode,
    /// Administrative-district code: `PNU, bupjungdong_code`.
    AdminDistrict,
    /// Road-name address (doromyoung).
    RoadAddress,
    /// Lot-number address (jibun).
    LotAddress,
}

impl AddressView {
    /// Column list projected from the enriched frame, `PNU` first.
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            AddressView::Zipcode => &["PNU", "zipcode"],
            AddressView::AdminDistrict => &["PNU", "bupjungdong_code"],
            AddressView::RoadAddress => &[
                "PNU",
                "sido",
                "sigungu",
                "roadname",
                "is_basement",
                "building_primary_number",
                "building_secondary_number",
                "bupjungdong_code",
            ],
            AddressView::LotAddress => &[
                "PNU",
                "sido",
                "sigungu",
                "eupmyeondong",
                "bupjungli",
                "jibun_primary_number",
                "jibun_secondary_number",
            ],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AddressView::Zipcode => "zipcode",
            AddressView::AdminDistrict => "admin-district",
            AddressView::RoadAddress => "road-address",
            AddressView::LotAddress => "lot-address",
        }
    }
}

/// Project one view: select its columns from the enriched frame, then
/// left-join the assignment frame on `PNU`. Rows with a null PNU keep their
/// attribute fields null, same as the attribute join itself.
pub fn project_view(
    pnu_df: &DataFrame,
    enriched: &DataFrame,
    view: AddressView,
) -> Result<DataFrame> {
    let columns: Vec<Expr> = view.columns().iter().copied().map(col).collect();
    pnu_df
        .clone()
        .lazy()
        .left_join(
            enriched.clone().lazy().select(columns),
            col(PNU_COLUMN),
            col(PNU_COLUMN),
        )
        .collect()
        .with_context(|| format!("projecting {} view", view.as_str()))
}
