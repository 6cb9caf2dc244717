//! End-to-end construction of an [`IncidenceIndex`] from raw diagram data.

use crate::algs::interior::interior_vertices;
use crate::algs::resolve::DegeneracyHandling;
#[cfg(not(feature = "rayon"))]
use crate::algs::resolve::resolve_dependencies;
#[cfg(feature = "rayon")]
use crate::algs::resolve::resolve_dependencies_par;
use crate::debug_invariants::DebugInvariants;
use crate::diagram::bounds::BoundingBox;
use crate::diagram::cells::SiteCells;
use crate::incidence_error::IncidenceError;
use crate::index::IncidenceIndex;
use crate::table::membership::MembershipTable;

/// Options for [`build_index_with_opts`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IndexOpts {
    /// Policy for vertices not incident to exactly 3 sites.
    pub degeneracy: DegeneracyHandling,
}

/// Builds the vertex-site incidence index with default options.
///
/// `positions[i]` holds the coordinates of vertex `i + 1`; `cells` holds one
/// membership list per site; `bounds` is the open clipping window. Vertices
/// on or outside the window are discarded before resolution.
///
/// # Errors
/// Propagates [`IncidenceError::DegenerateVertex`] from resolution (the
/// default policy rejects vertices whose incident-site count is not 3).
///
/// # Panics
/// Identifiers are `u32`-sized: a diagram with more than `u32::MAX`
/// vertices or sites panics instead of resolving.
///
/// # Example
/// ```rust
/// use voronoi_incidence::prelude::*;
///
/// let positions = [[0.0, 0.0], [5.0, 5.0], [-1.0, -1.0], [3.0, 3.0]];
/// let cells = SiteCells::try_from_lists(vec![vec![2, 4], vec![2], vec![2, 4], vec![4]])?;
/// let bounds = BoundingBox::new(0.0, 10.0)?;
///
/// let index = build_index(&positions, &cells, bounds)?;
/// assert_eq!(index.positions(), &[[5.0, 5.0], [3.0, 3.0]]);
/// assert_eq!(index.num_interior(), 2);
/// # Ok::<(), voronoi_incidence::incidence_error::IncidenceError>(())
/// ```
pub fn build_index(
    positions: &[[f64; 2]],
    cells: &SiteCells,
    bounds: BoundingBox,
) -> Result<IncidenceIndex, IncidenceError> {
    build_index_with_opts(positions, cells, bounds, IndexOpts::default())
}

/// Builds the vertex-site incidence index with explicit options.
///
/// # Errors
/// Same as [`build_index`] under [`DegeneracyHandling::Error`]; the other
/// policies drop degenerate vertices instead of failing.
///
/// # Panics
/// Same `u32` identifier cap as [`build_index`].
///
/// # Determinism
/// Deterministic for fixed inputs and options, with or without the `rayon`
/// feature.
pub fn build_index_with_opts(
    positions: &[[f64; 2]],
    cells: &SiteCells,
    bounds: BoundingBox,
    opts: IndexOpts,
) -> Result<IncidenceIndex, IncidenceError> {
    // 1. Keep only vertices strictly inside the open window.
    let interior = interior_vertices(positions, bounds);

    // 2. Flatten the ragged membership lists into a padded matrix.
    let table = MembershipTable::from_cells(cells);

    // 3. Resolve each interior vertex to its generating site triple,
    //    accumulating the inverse site lists in the same pass.
    #[cfg(feature = "rayon")]
    let resolution = resolve_dependencies_par(&table, &interior, opts.degeneracy)?;
    #[cfg(not(feature = "rayon"))]
    let resolution = resolve_dependencies(&table, &interior, opts.degeneracy)?;

    // 4. Gather coordinates of the kept vertices and assemble the index.
    let kept_positions = resolution
        .vertices
        .iter()
        .map(|v| positions[v.index()])
        .collect();

    let index = IncidenceIndex::from_parts(
        resolution.vertices,
        kept_positions,
        resolution.site_triples,
        resolution.generated,
    );
    index.debug_assert_invariants();
    Ok(index)
}
