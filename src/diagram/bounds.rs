//! Open bounding box delimiting the interior region of the diagram.

use crate::incidence_error::IncidenceError;

/// An axis-aligned open square region `(lo, hi) x (lo, hi)`.
///
/// A point is interior iff both coordinates lie *strictly* between `lo` and
/// `hi`; points exactly on the boundary count as exterior. The strict
/// comparison also rejects non-finite coordinates, so vertices of unbounded
/// Voronoi regions (often stored as points at infinity) classify exterior
/// with no special handling.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BoundingBox {
    lo: f64,
    hi: f64,
}

impl BoundingBox {
    /// Creates a bounding box from its lower and upper corner coordinate.
    ///
    /// # Errors
    /// Returns [`IncidenceError::EmptyBounds`] unless `lo < hi`; a NaN bound
    /// fails the comparison and is rejected the same way. Infinite extents
    /// are allowed (`-inf..inf` admits every finite point).
    pub fn new(lo: f64, hi: f64) -> Result<Self, IncidenceError> {
        if !(lo < hi) {
            return Err(IncidenceError::EmptyBounds { lo, hi });
        }
        Ok(Self { lo, hi })
    }

    /// Lower corner coordinate (shared by both axes).
    #[inline]
    pub fn lo(&self) -> f64 {
        self.lo
    }

    /// Upper corner coordinate (shared by both axes).
    #[inline]
    pub fn hi(&self) -> f64 {
        self.hi
    }

    /// Strict open-interval containment test on both coordinates.
    #[inline]
    pub fn contains(&self, p: [f64; 2]) -> bool {
        self.lo < p[0] && p[0] < self.hi && self.lo < p[1] && p[1] < self.hi
    }
}
