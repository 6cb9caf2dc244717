//! Strong, zero-cost handles for diagram entities.
//!
//! The diagram is described by two 1-based index spaces: global vertex
//! indices into the vertex coordinate list, and site indices into the
//! per-site membership lists. Both wrap a nonzero `u32` so that 0 can be
//! reserved, at the type level, as the invalid/sentinel value the padded
//! membership table relies on.
//!
//! This module provides:
//! - Transparent `VertexId` / `SiteId` newtypes around `NonZeroU32` with
//!   layout guarantees.
//! - Fallible constructors that reject the reserved 0.
//! - `Debug`, `Display`, ordering and hashing impls so the IDs work in maps,
//!   sets, and diagnostics.

use crate::incidence_error::IncidenceError;
use std::{fmt, num::NonZeroU32};

/// Global (1-based) index of a Voronoi vertex in the input vertex list.
///
/// Vertex `g` refers to the coordinate pair at array position `g - 1`; 0 is
/// reserved as the padding sentinel and never names a real vertex.
///
/// # Memory layout
/// `repr(transparent)` over `NonZeroU32`: same size and alignment as `u32`,
/// and `Option<VertexId>` is also `u32`-sized.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[repr(transparent)]
pub struct VertexId(NonZeroU32);

impl VertexId {
    /// Creates a `VertexId` from a raw 1-based index.
    ///
    /// # Errors
    /// Returns [`IncidenceError::InvalidVertexId`] if `raw == 0`.
    ///
    /// # Example
    /// ```rust
    /// # use voronoi_incidence::diagram::point::VertexId;
    /// let v = VertexId::new(2)?;
    /// assert_eq!(v.get(), 2);
    /// assert_eq!(v.index(), 1);
    /// # Ok::<(), voronoi_incidence::incidence_error::IncidenceError>(())
    /// ```
    #[inline]
    pub fn new(raw: u32) -> Result<Self, IncidenceError> {
        NonZeroU32::new(raw)
            .map(Self)
            .ok_or(IncidenceError::InvalidVertexId)
    }

    /// Internal constructor from a 0-based array position.
    ///
    /// # Panics
    /// Panics if `index + 1` does not fit in a `u32`.
    #[inline]
    pub(crate) fn from_index(index: usize) -> Self {
        let raw = u32::try_from(index + 1).expect("vertex position exceeds u32 range");
        Self(NonZeroU32::new(raw).expect("index + 1 is never zero"))
    }

    /// The raw 1-based index.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// The 0-based position in the vertex coordinate array.
    #[inline]
    pub const fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

/// Index (1-based) of a generating site.
///
/// Site `s` owns the `s`-th membership list; there is no site 0.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[repr(transparent)]
pub struct SiteId(NonZeroU32);

impl SiteId {
    /// Creates a `SiteId` from a raw 1-based index.
    ///
    /// # Errors
    /// Returns [`IncidenceError::InvalidSiteId`] if `raw == 0`.
    #[inline]
    pub fn new(raw: u32) -> Result<Self, IncidenceError> {
        NonZeroU32::new(raw)
            .map(Self)
            .ok_or(IncidenceError::InvalidSiteId)
    }

    /// Internal constructor from a 0-based row position.
    ///
    /// # Panics
    /// Panics if `index + 1` does not fit in a `u32`.
    #[inline]
    pub(crate) fn from_index(index: usize) -> Self {
        let raw = u32::try_from(index + 1).expect("site position exceeds u32 range");
        Self(NonZeroU32::new(raw).expect("index + 1 is never zero"))
    }

    /// The raw 1-based index.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// The 0-based position among the membership lists.
    #[inline]
    pub const fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

// -----------------------------------------------------------------------------
// Formatting traits
// -----------------------------------------------------------------------------

impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("VertexId").field(&self.get()).finish()
    }
}

/// Prints the numeric ID without any wrapper text.
impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

impl fmt::Debug for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SiteId").field(&self.get()).finish()
    }
}

/// Prints the numeric ID without any wrapper text.
impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

// -----------------------------------------------------------------------------
// Testing and assertions
// -----------------------------------------------------------------------------

#[cfg(test)]
mod layout_tests {
    //! Compile-time assertions that the IDs stay `u32`-sized.
    use super::*;
    use static_assertions::assert_eq_size;

    // If these fail, the repr(transparent) guarantee is broken.
    assert_eq_size!(VertexId, u32);
    assert_eq_size!(SiteId, u32);
    assert_eq_size!(Option<VertexId>, u32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_rejected() {
        assert_eq!(VertexId::new(0), Err(IncidenceError::InvalidVertexId));
        assert_eq!(SiteId::new(0), Err(IncidenceError::InvalidSiteId));
    }

    #[test]
    fn new_get_index() {
        let v = VertexId::new(42).unwrap();
        assert_eq!(v.get(), 42);
        assert_eq!(v.index(), 41);
        let s = SiteId::from_index(0);
        assert_eq!(s.get(), 1);
        assert_eq!(s.index(), 0);
    }

    #[test]
    fn debug_and_display() {
        let v = VertexId::new(7).unwrap();
        assert_eq!(format!("{:?}", v), "VertexId(7)");
        assert_eq!(format!("{}", v), "7");
        let s = SiteId::new(3).unwrap();
        assert_eq!(format!("{:?}", s), "SiteId(3)");
        assert_eq!(format!("{}", s), "3");
    }

    #[test]
    fn ordering_and_hash() {
        use std::collections::HashSet;
        let a = VertexId::new(1).unwrap();
        let b = VertexId::new(2).unwrap();
        assert!(a < b);
        let mut set = HashSet::new();
        set.insert(a);
        set.insert(b);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn max_value() {
        let v = VertexId::new(u32::MAX).unwrap();
        assert_eq!(v.get(), u32::MAX);
        assert_eq!(v.index(), (u32::MAX - 1) as usize);
    }

    #[test]
    fn largest_representable_position() {
        // Position u32::MAX - 1 maps to the last id; one past it panics.
        let v = VertexId::from_index((u32::MAX - 1) as usize);
        assert_eq!(v.get(), u32::MAX);
    }

    #[test]
    #[should_panic(expected = "vertex position exceeds u32 range")]
    fn vertex_position_past_u32_panics() {
        let _ = VertexId::from_index(u32::MAX as usize);
    }

    #[test]
    #[should_panic(expected = "site position exceeds u32 range")]
    fn site_position_past_u32_panics() {
        let _ = SiteId::from_index(u32::MAX as usize);
    }
}

#[cfg(test)]
mod serde_tests {
    use super::*;

    #[test]
    fn json_roundtrip() {
        let v = VertexId::new(123).unwrap();
        let s = serde_json::to_string(&v).unwrap();
        let v2: VertexId = serde_json::from_str(&s).unwrap();
        assert_eq!(v2, v);
    }

    #[test]
    fn bincode_roundtrip() {
        let s = SiteId::new(456).unwrap();
        let bytes = bincode::serialize(&s).unwrap();
        let s2: SiteId = bincode::deserialize(&bytes).unwrap();
        assert_eq!(s2, s);
    }
}
