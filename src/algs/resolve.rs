//! Batch site-dependency resolver.
//!
//! For every interior vertex, find the sites whose membership rows contain
//! it. Geometry says a generic planar Voronoi vertex is equidistant from
//! exactly 3 sites, so each vertex resolves to a site triple; what to do
//! when the count differs is a caller policy. The forward map (vertex to
//! triple) and the inverse map (site to local vertices) are built in the
//! same pass so they cannot drift apart.

use crate::diagram::point::{SiteId, VertexId};
use crate::incidence_error::IncidenceError;
use crate::table::membership::MembershipTable;

/// What to do with a vertex whose incident-site count is not exactly 3.
///
/// Counts other than 3 mean the input is degenerate (cocircular sites, a
/// truncated list) or inconsistent with the vertex set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DegeneracyHandling {
    /// Fail resolution with [`IncidenceError::DegenerateVertex`].
    #[default]
    Error,
    /// Log a warning and drop the vertex from the result.
    Warn,
    /// Silently drop the vertex from the result.
    Skip,
}

/// Output of dependency resolution over one interior vertex set.
///
/// The three vectors run in parallel: position `k` of `vertices` and of
/// `site_triples` describe the same vertex, and `k` is that vertex's local
/// number in the `generated` lists.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Kept interior vertices, in ascending global order.
    pub vertices: Vec<VertexId>,
    /// Ascending site triple of each kept vertex.
    pub site_triples: Vec<[SiteId; 3]>,
    /// Per site (0-based position), the ascending local numbers of the kept
    /// vertices it generates.
    pub generated: Vec<Vec<u32>>,
}

/// Resolves every vertex in `interior` against the membership `table`.
///
/// # Errors
/// With [`DegeneracyHandling::Error`], returns
/// [`IncidenceError::DegenerateVertex`] for the first vertex whose incident
/// site count is not 3. The other policies drop such vertices and never fail.
///
/// # Complexity
/// O(len(interior) * sites * width) worst case. Each vertex costs one
/// contiguous equality scan per row, which is the point of the padded
/// layout; rows bail out at the first hit.
///
/// # Determinism
/// Vertices are processed in input order and rows in site order, so equal
/// inputs give equal outputs. Site triples arrive ascending for free.
pub fn resolve_dependencies(
    table: &MembershipTable,
    interior: &[VertexId],
    policy: DegeneracyHandling,
) -> Result<Resolution, IncidenceError> {
    let matches: Vec<Vec<usize>> = interior
        .iter()
        .map(|v| scan_matches(table, v.get()))
        .collect();
    assemble(table.num_sites(), interior, &matches, policy)
}

/// Parallel variant of [`resolve_dependencies`].
///
/// The per-vertex row scans run on the rayon pool; policy application and
/// assembly stay sequential. The indexed collect preserves vertex order, so
/// the output is identical to the serial resolver's.
#[cfg(feature = "rayon")]
pub fn resolve_dependencies_par(
    table: &MembershipTable,
    interior: &[VertexId],
    policy: DegeneracyHandling,
) -> Result<Resolution, IncidenceError> {
    use rayon::prelude::*;

    let matches: Vec<Vec<usize>> = interior
        .par_iter()
        .map(|v| scan_matches(table, v.get()))
        .collect();
    assemble(table.num_sites(), interior, &matches, policy)
}

/// One vertex against all rows. `contains` is a contiguous equality scan
/// over the padded row; sentinel slots never match because `target` is a
/// nonzero identifier.
fn scan_matches(table: &MembershipTable, target: u32) -> Vec<usize> {
    let mut matches = Vec::with_capacity(3);
    for (s, row) in table.rows().enumerate() {
        if row.contains(&target) {
            matches.push(s);
        }
    }
    matches
}

fn assemble(
    num_sites: usize,
    interior: &[VertexId],
    matches: &[Vec<usize>],
    policy: DegeneracyHandling,
) -> Result<Resolution, IncidenceError> {
    let mut vertices = Vec::with_capacity(interior.len());
    let mut site_triples = Vec::with_capacity(interior.len());
    let mut generated = vec![Vec::new(); num_sites];

    for (&v, m) in interior.iter().zip(matches) {
        if m.len() != 3 {
            match policy {
                DegeneracyHandling::Error => {
                    return Err(IncidenceError::DegenerateVertex {
                        vertex: v,
                        found: m.len(),
                    });
                }
                DegeneracyHandling::Warn => {
                    log::warn!(
                        "dropping degenerate vertex {v} ({} incident sites, expected 3)",
                        m.len()
                    );
                    continue;
                }
                DegeneracyHandling::Skip => continue,
            }
        }
        // Scan order is site order, so the triple is already ascending.
        let local = vertices.len() as u32;
        for &s in m {
            generated[s].push(local);
        }
        vertices.push(v);
        site_triples.push([
            SiteId::from_index(m[0]),
            SiteId::from_index(m[1]),
            SiteId::from_index(m[2]),
        ]);
    }

    Ok(Resolution {
        vertices,
        site_triples,
        generated,
    })
}
