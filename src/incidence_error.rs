//! `IncidenceError`: unified error type for voronoi-incidence public APIs.
//!
//! Every fallible operation in the crate reports through this enum so callers
//! get non-panicking, matchable failures. All conditions are detected
//! synchronously inside the single indexing pass; the same invalid input
//! always fails the same way.

use crate::diagram::point::{SiteId, VertexId};
use thiserror::Error;

/// Unified error type for incidence-indexing operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum IncidenceError {
    /// Attempted to construct a `VertexId` from 0 (reserved padding sentinel).
    #[error("vertex index must be non-zero (0 is reserved as the padding sentinel)")]
    InvalidVertexId,
    /// Attempted to construct a `SiteId` from 0 (sites are numbered from 1).
    #[error("site index must be non-zero (sites are numbered from 1)")]
    InvalidSiteId,
    /// A raw membership list contains the sentinel value 0; padding-based
    /// matching would be unreliable, so this is rejected before any
    /// computation runs.
    #[error("membership list of site {site} contains sentinel vertex index 0 at position {column}")]
    SentinelVertexIndex { site: SiteId, column: usize },
    /// Bounding box with `lo >= hi` (or a NaN bound): no interior region is
    /// well-defined.
    #[error("empty bounding box: lo {lo} is not strictly below hi {hi}")]
    EmptyBounds { lo: f64, hi: f64 },
    /// An interior vertex matched a number of sites other than the three a
    /// non-degenerate planar diagram produces. Either the generators are
    /// co-circular (a higher-order vertex) or the upstream diagram's
    /// bookkeeping is inconsistent.
    #[error("degenerate vertex {vertex}: {found} incident sites where exactly 3 are expected")]
    DegenerateVertex { vertex: VertexId, found: usize },
    /// CSR cell input whose offsets are not a valid monotone cover of the
    /// index buffer.
    #[error("malformed cell offsets: {0}")]
    MalformedOffsets(String),
    /// Output tables that should be row-parallel have diverging lengths.
    #[error(
        "index table shape mismatch: {interior} interior vertices, {positions} positions, {triples} site triples"
    )]
    TableShapeMismatch {
        interior: usize,
        positions: usize,
        triples: usize,
    },
    /// The interior vertex column is not strictly ascending.
    #[error("interior vertex column is not strictly ascending at local position {position}")]
    UnsortedInterior { position: u32 },
    /// A site triple is not in ascending site order (canonical order).
    #[error("site triple of local vertex {local} is not in ascending site order")]
    UnsortedTriple { local: u32 },
    /// A per-site generated list is not strictly ascending.
    #[error("generated-vertex list of site {site} is not strictly ascending")]
    UnsortedGenerated { site: SiteId },
    /// A per-site generated list names a local vertex past the table end.
    #[error("site {site} lists local vertex {local}, but only {interior} interior vertices exist")]
    LocalOutOfRange {
        site: SiteId,
        local: u32,
        interior: usize,
    },
    /// The forward and inverse incidence tables disagree about a pair.
    #[error("incidence mismatch between site {site} and local vertex {local}")]
    IncidenceMismatch { site: SiteId, local: u32 },
}
