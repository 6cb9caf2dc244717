//! # voronoi-incidence
//!
//! voronoi-incidence is a small Rust library for turning the raw output of a
//! planar Voronoi construction into a queryable vertex-site incidence index.
//! Given vertex coordinates, per-site vertex-membership lists, and an open
//! square clipping window, it discards boundary and exterior vertices,
//! resolves each surviving vertex to the 3 sites equidistant from it, and
//! builds the inverse site-to-vertices map in the same pass.
//!
//! ## Features
//! - Strict interior filtering against an open window, with clipped and
//!   at-infinity vertices dropping out uniformly
//! - Sentinel-padded membership matrix tuned for bulk row scans
//! - Batch dependency resolution producing ascending site triples and the
//!   matching inverse index, with configurable degeneracy policy
//! - Optional `rayon` feature parallelizing the per-vertex scans with
//!   bitwise-identical output
//! - Invariant checking behind `check-invariants`/`strict-invariants` for
//!   debugging and untrusted data
//!
//! ## Determinism
//!
//! Every stage processes vertices in input order and sites in row order, so
//! equal inputs give equal outputs, feature flags included. Tests that need
//! randomness fix their seeds explicitly.
//!
//! ## Usage
//! Add `voronoi-incidence` as a dependency in your `Cargo.toml` and enable
//! features as needed:
//!
//! ```toml
//! [dependencies]
//! voronoi-incidence = "0.1.0"
//! # Optional features:
//! # features = ["rayon","check-invariants"]
//! ```
//!
//! ## Example
//!
//! Vertex indices in the membership lists are 1-based; 0 is reserved as the
//! padding sentinel. Vertices 1 and 3 below sit on or outside the window,
//! so only vertices 2 and 4 survive:
//!
//! ```rust
//! use voronoi_incidence::prelude::*;
//!
//! let positions = [[0.0, 0.0], [5.0, 5.0], [-1.0, -1.0], [3.0, 3.0]];
//! let cells = SiteCells::try_from_lists(vec![vec![2, 4], vec![2], vec![2, 4], vec![4]])?;
//! let bounds = BoundingBox::new(0.0, 10.0)?;
//!
//! let index = build_index(&positions, &cells, bounds)?;
//!
//! assert_eq!(index.positions(), &[[5.0, 5.0], [3.0, 3.0]]);
//! let s = |i| SiteId::new(i).unwrap();
//! assert_eq!(index.site_triples(), &[[s(1), s(2), s(3)], [s(1), s(3), s(4)]]);
//! assert_eq!(index.vertices_of(s(1)), Some(&[0u32, 1][..]));
//! assert_eq!(index.vertices_of(s(4)), Some(&[1u32][..]));
//! # Ok::<(), voronoi_incidence::incidence_error::IncidenceError>(())
//! ```

// Re-export our major subsystems:
pub mod algs;
pub mod debug_invariants;
pub mod diagram;
pub mod incidence_error;
pub mod index;
pub mod table;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::build::{IndexOpts, build_index, build_index_with_opts};
    pub use crate::algs::interior::interior_vertices;
    pub use crate::algs::resolve::{DegeneracyHandling, Resolution, resolve_dependencies};
    #[cfg(feature = "rayon")]
    pub use crate::algs::resolve::resolve_dependencies_par;
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::diagram::bounds::BoundingBox;
    pub use crate::diagram::cells::SiteCells;
    pub use crate::diagram::point::{SiteId, VertexId};
    pub use crate::incidence_error::IncidenceError;
    pub use crate::index::{IncidenceIndex, InteriorVertexView};
    pub use crate::table::membership::{MembershipTable, SENTINEL};
}
