//! # jido-core: Parcel Data Model Core
//!
//! Provides the fundamental data structures for coordinate-to-parcel
//! resolution: parcel polygons keyed by PNU (parcel number) codes, the
//! read-only [`ParcelSet`] they are collected into, and the
//! [`ContainmentResolver`] that answers point-in-polygon queries over the
//! whole set.
//!
//! ## Design Philosophy
//!
//! - **Immutable after load**: a `ParcelSet` is built once by the loaders
//!   and only ever read afterwards, so it can be shared freely across
//!   parallel batch workers without locking.
//! - **Explicit resolver object**: containment queries go through a
//!   [`ContainmentResolver`] holding an immutable reference to the set,
//!   passed explicitly to each worker rather than captured implicitly.
//! - **"Within" semantics**: containment is the `geo` crate's `Contains`
//!   predicate, so points on a polygon boundary do not match.
//! - **Nulls, not errors**: a point with non-finite coordinates simply
//!   matches nothing; bad data never raises from this layer.
//!
//! ## Core Data Structures
//!
//! - [`Parcel`] - one polygon plus its PNU identifier
//! - [`ParcelSet`] - the loaded, read-only polygon dataset
//! - [`ContainmentResolver`] - batch point-in-polygon resolver
//! - [`JidoError`] / [`JidoResult`] - unified error type for API boundaries

pub mod error;
pub mod parcel;

pub use error::{JidoError, JidoResult};
pub use parcel::{ContainmentResolver, Parcel, ParcelGeometry, ParcelSet, WGS84_EPSG};
