//! # jido-algo: Coordinate-to-Address Resolution Pipeline
//!
//! This crate implements the two-stage join pipeline that turns raw
//! longitude/latitude points into enriched Korean administrative addresses:
//!
//! 1. **Spatial resolution** ([`resolve`]): batched point-in-polygon
//!    matching against a [`jido_core::ParcelSet`], producing one nullable
//!    `PNU` (parcel number) per input row.
//! 2. **Attribute join** ([`join`]): left-outer join of the assignments
//!    against an administrative-address table keyed by `bupjungdong_code`,
//!    the 10-character district prefix of a PNU, with both sides
//!    deduplicated.
//!
//! Both results are computed exactly once per [`ParcelPipeline`] instance
//! and memoized; the address views ([`view`]) and the full-join accessor
//! only read the cached copies. Hex-grid tagging ([`hex`]) runs directly on
//! the raw points and bypasses the join pipeline entirely.
//!
//! ## Concurrency
//!
//! Spatial resolution fans out over independent fixed-size row batches with
//! rayon. Batches share only the read-only parcel set; no state crosses a
//! batch boundary, so there is no ordering dependency between them.
//!
//! ## Example
//!
//! ```ignore
//! use jido_algo::{AddressView, ParcelPipeline};
//!
//! let pipeline = ParcelPipeline::new(points, &parcels, &table, "lon", "lat")?;
//! let assignments = pipeline.resolve_parcel();   // per-row PNU, null if unresolved
//! let zipcodes = pipeline.view(AddressView::Zipcode)?;
//! let cells = pipeline.resolve_hex_cell(7)?;     // independent of the join
//! ```

pub mod hex;
pub mod io;
pub mod join;
pub mod pipeline;
pub mod resolve;
pub mod view;

pub use hex::{cell_for_point, tag_hex_cells, HEX_COLUMN};
pub use io::persist_dataframe;
pub use join::{district_prefix, join_with_table, DISTRICT_CODE_COLUMN, DISTRICT_CODE_LEN};
pub use pipeline::ParcelPipeline;
pub use resolve::{resolve_parcels, resolve_parcels_batched, PNU_COLUMN, RESOLVE_BATCH_SIZE};
pub use view::{project_view, AddressView};
