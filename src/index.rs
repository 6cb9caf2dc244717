//! The assembled vertex-site incidence index.
//!
//! Four parallel columns keyed by dense local vertex number: global
//! identifier, coordinates, generating site triple. The inverse map hangs
//! off the side as one ascending local-number list per site. Both
//! directions come out of a single resolution pass, and
//! [`DebugInvariants`] can prove they still agree.

use itertools::izip;

use crate::debug_invariants::DebugInvariants;
use crate::diagram::point::{SiteId, VertexId};
use crate::incidence_error::IncidenceError;

/// Bidirectional incidence between interior Voronoi vertices and their
/// generating sites.
///
/// Forward: local vertex `k` maps to the ascending triple of sites
/// equidistant from it. Inverse: each site maps to the ascending local
/// numbers of the interior vertices on its region boundary. Every kept
/// vertex appears in exactly the 3 lists its triple names.
///
/// Values deserialized from untrusted data are not revalidated on the way
/// in; run [`DebugInvariants::validate_invariants`] on them if that
/// matters.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct IncidenceIndex {
    interior: Vec<VertexId>,
    positions: Vec<[f64; 2]>,
    site_triples: Vec<[SiteId; 3]>,
    generated: Vec<Vec<u32>>,
}

/// One interior vertex with everything the index knows about it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteriorVertexView {
    /// Dense 0-based position in the index.
    pub local: u32,
    /// 1-based identifier in the original vertex array.
    pub vertex: VertexId,
    /// Coordinates.
    pub position: [f64; 2],
    /// Ascending generating site triple.
    pub sites: [SiteId; 3],
}

impl IncidenceIndex {
    /// Assembles an index from resolver output. Columns must already run in
    /// parallel and satisfy the incidence invariants; construction does not
    /// check them (the builder follows up with
    /// [`DebugInvariants::debug_assert_invariants`]).
    pub(crate) fn from_parts(
        interior: Vec<VertexId>,
        positions: Vec<[f64; 2]>,
        site_triples: Vec<[SiteId; 3]>,
        generated: Vec<Vec<u32>>,
    ) -> Self {
        Self {
            interior,
            positions,
            site_triples,
            generated,
        }
    }

    /// Number of kept interior vertices.
    #[inline]
    pub fn num_interior(&self) -> usize {
        self.interior.len()
    }

    /// Number of sites the index was built over.
    #[inline]
    pub fn num_sites(&self) -> usize {
        self.generated.len()
    }

    /// True if no vertex survived filtering and resolution.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.interior.is_empty()
    }

    /// Global identifiers of the kept vertices, ascending, indexed by local
    /// number.
    #[inline]
    pub fn interior_vertices(&self) -> &[VertexId] {
        &self.interior
    }

    /// Coordinates of the kept vertices, indexed by local number.
    #[inline]
    pub fn positions(&self) -> &[[f64; 2]] {
        &self.positions
    }

    /// Coordinates of local vertex `local`, or `None` if out of range.
    #[inline]
    pub fn position(&self, local: u32) -> Option<[f64; 2]> {
        self.positions.get(local as usize).copied()
    }

    /// Ascending site triples, indexed by local number.
    #[inline]
    pub fn site_triples(&self) -> &[[SiteId; 3]] {
        &self.site_triples
    }

    /// Generating sites of local vertex `local`, or `None` if out of range.
    #[inline]
    pub fn sites_of(&self, local: u32) -> Option<&[SiteId; 3]> {
        self.site_triples.get(local as usize)
    }

    /// Global identifier of local vertex `local`, or `None` if out of range.
    #[inline]
    pub fn vertex_of(&self, local: u32) -> Option<VertexId> {
        self.interior.get(local as usize).copied()
    }

    /// Local number of global vertex `vertex`, or `None` if it was filtered
    /// out. O(log n) over the ascending interior column.
    pub fn local_of(&self, vertex: VertexId) -> Option<u32> {
        self.interior.binary_search(&vertex).ok().map(|k| k as u32)
    }

    /// Per-site ascending local-number lists, indexed by 0-based site
    /// position.
    #[inline]
    pub fn generated(&self) -> &[Vec<u32>] {
        &self.generated
    }

    /// Local numbers of the interior vertices `site` generates, or `None`
    /// if the site is out of range. Sites whose regions kept no vertex get
    /// an empty slice, not `None`.
    #[inline]
    pub fn vertices_of(&self, site: SiteId) -> Option<&[u32]> {
        self.generated.get(site.index()).map(Vec::as_slice)
    }

    /// Iterator over the kept vertices in local order.
    pub fn iter(&self) -> impl Iterator<Item = InteriorVertexView> + '_ {
        izip!(&self.interior, &self.positions, &self.site_triples)
            .enumerate()
            .map(|(k, (&vertex, &position, &sites))| InteriorVertexView {
                local: k as u32,
                vertex,
                position,
                sites,
            })
    }
}

impl DebugInvariants for IncidenceIndex {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "IncidenceIndex");
    }

    fn validate_invariants(&self) -> Result<(), IncidenceError> {
        if self.interior.len() != self.positions.len()
            || self.interior.len() != self.site_triples.len()
        {
            return Err(IncidenceError::TableShapeMismatch {
                interior: self.interior.len(),
                positions: self.positions.len(),
                triples: self.site_triples.len(),
            });
        }
        // local_of binary-searches this column.
        if let Some(k) = self.interior.windows(2).position(|w| w[0] >= w[1]) {
            return Err(IncidenceError::UnsortedInterior {
                position: k as u32 + 1,
            });
        }
        for (k, triple) in self.site_triples.iter().enumerate() {
            if !(triple[0] < triple[1] && triple[1] < triple[2]) {
                return Err(IncidenceError::UnsortedTriple { local: k as u32 });
            }
        }
        for (i, locals) in self.generated.iter().enumerate() {
            let site = SiteId::from_index(i);
            if !locals.windows(2).all(|w| w[0] < w[1]) {
                return Err(IncidenceError::UnsortedGenerated { site });
            }
            for &local in locals {
                if local as usize >= self.interior.len() {
                    return Err(IncidenceError::LocalOutOfRange {
                        site,
                        local,
                        interior: self.interior.len(),
                    });
                }
                if !self.site_triples[local as usize].contains(&site) {
                    return Err(IncidenceError::IncidenceMismatch { site, local });
                }
            }
        }
        for (k, triple) in self.site_triples.iter().enumerate() {
            let local = k as u32;
            for &site in triple {
                // Ascending order was just verified, so binary search is
                // sound here.
                let listed = self
                    .generated
                    .get(site.index())
                    .is_some_and(|locals| locals.binary_search(&local).is_ok());
                if !listed {
                    return Err(IncidenceError::IncidenceMismatch { site, local });
                }
            }
        }
        Ok(())
    }
}
