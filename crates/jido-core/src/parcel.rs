//! Parcel polygons and point-in-polygon containment.
//!
//! A [`ParcelSet`] is the polygon dataset the pipeline resolves points
//! against: each [`Parcel`] carries a PNU code (fixed-format parcel number
//! string, whose first 10 characters identify the administrative district)
//! and an areal geometry in WGS84. The set is loaded once and never mutated
//! afterwards, so it is safe to share across parallel batch workers.
//!
//! Containment queries go through [`ContainmentResolver`], an explicit
//! batch-resolver object holding an immutable reference to the set. The
//! predicate is the `geo` crate's `Contains` ("within" from the point's
//! perspective): boundary points do not match.

use crate::error::JidoError;
use geo::Contains;
use geo_types::{Geometry, MultiPolygon, Point, Polygon};

/// Coordinate reference assumed for both parcels and query points.
pub const WGS84_EPSG: u32 = 4326;

/// Areal geometry of a parcel. Only polygonal types can contain a point,
/// so the loaders reject everything else up front.
#[derive(Debug, Clone, PartialEq)]
pub enum ParcelGeometry {
    Polygon(Polygon<f64>),
    MultiPolygon(MultiPolygon<f64>),
}

impl ParcelGeometry {
    /// Whether `point` lies within this geometry (boundary excluded).
    pub fn contains_point(&self, point: &Point<f64>) -> bool {
        match self {
            ParcelGeometry::Polygon(polygon) => polygon.contains(point),
            ParcelGeometry::MultiPolygon(multi) => multi.contains(point),
        }
    }
}

impl TryFrom<Geometry<f64>> for ParcelGeometry {
    type Error = JidoError;

    fn try_from(geometry: Geometry<f64>) -> Result<Self, Self::Error> {
        match geometry {
            Geometry::Polygon(polygon) => Ok(ParcelGeometry::Polygon(polygon)),
            Geometry::MultiPolygon(multi) => Ok(ParcelGeometry::MultiPolygon(multi)),
            other => Err(JidoError::Geometry(format!(
                "unsupported parcel geometry type: {other:?} (expected POLYGON or MULTIPOLYGON)"
            ))),
        }
    }
}

/// One land parcel: PNU identifier plus its polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct Parcel {
    pub pnu: String,
    pub geometry: ParcelGeometry,
}

impl Parcel {
    pub fn new(pnu: impl Into<String>, geometry: ParcelGeometry) -> Self {
        Parcel {
            pnu: pnu.into(),
            geometry,
        }
    }
}

/// The loaded polygon dataset. Read-only for the pipeline's lifetime.
#[derive(Debug, Clone, Default)]
pub struct ParcelSet {
    parcels: Vec<Parcel>,
}

impl ParcelSet {
    pub fn new() -> Self {
        ParcelSet::default()
    }

    pub fn from_parcels(parcels: Vec<Parcel>) -> Self {
        ParcelSet { parcels }
    }

    pub fn push(&mut self, parcel: Parcel) {
        self.parcels.push(parcel);
    }

    pub fn parcels(&self) -> &[Parcel] {
        &self.parcels
    }

    pub fn len(&self) -> usize {
        self.parcels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parcels.is_empty()
    }
}

/// Batch point-in-polygon resolver over one [`ParcelSet`].
///
/// Holds an immutable reference to the set; workers each construct their
/// own resolver, so nothing is captured implicitly and nothing is shared
/// mutably. Pure function of its inputs.
#[derive(Debug, Clone, Copy)]
pub struct ContainmentResolver<'a> {
    set: &'a ParcelSet,
}

impl<'a> ContainmentResolver<'a> {
    pub fn new(set: &'a ParcelSet) -> Self {
        ContainmentResolver { set }
    }

    /// Indices of every parcel whose geometry contains `(x, y)`.
    ///
    /// Non-finite coordinates match nothing rather than raising.
    pub fn matches(&self, x: f64, y: f64) -> Vec<usize> {
        if !x.is_finite() || !y.is_finite() {
            return Vec::new();
        }
        let point = Point::new(x, y);
        self.set
            .parcels()
            .iter()
            .enumerate()
            .filter(|(_, parcel)| parcel.geometry.contains_point(&point))
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Resolve a whole batch of `(x, y)` points, one match list per point.
    pub fn resolve_batch(&self, points: &[(f64, f64)]) -> Vec<Vec<usize>> {
        points.iter().map(|&(x, y)| self.matches(x, y)).collect()
    }
}
