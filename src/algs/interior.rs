//! Interior-vertex filter.
//!
//! First stage of the pipeline: restrict the vertex set to those strictly
//! inside the open clipping window. Vertices produced by clipping lie on
//! the window boundary and are excluded along with anything outside it.

use crate::diagram::bounds::BoundingBox;
use crate::diagram::point::VertexId;

/// Returns the 1-based identifiers of all vertices strictly inside `bounds`,
/// in ascending order.
///
/// `positions[i]` is the coordinate pair of vertex `i + 1`. Non-finite
/// coordinates never satisfy the strict comparisons, so vertices at infinity
/// (a common encoding for unbounded ray endpoints) drop out here without
/// special casing.
///
/// # Panics
/// Identifiers are `u32`-sized: panics if a vertex at array position
/// `u32::MAX` or beyond lands inside `bounds`.
///
/// # Complexity
/// O(len(positions)), one comparison pass per vertex.
///
/// # Determinism
/// Output order follows input order; equal inputs give equal outputs.
pub fn interior_vertices(positions: &[[f64; 2]], bounds: BoundingBox) -> Vec<VertexId> {
    positions
        .iter()
        .enumerate()
        .filter(|(_, p)| bounds.contains(**p))
        .map(|(i, _)| VertexId::from_index(i))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> BoundingBox {
        BoundingBox::new(0.0, 10.0).unwrap()
    }

    #[test]
    fn keeps_strict_interior_in_order() {
        let positions = [[0.0, 0.0], [5.0, 5.0], [-1.0, -1.0], [3.0, 3.0]];
        let kept = interior_vertices(&positions, bounds());
        let raw: Vec<u32> = kept.iter().map(|v| v.get()).collect();
        assert_eq!(raw, vec![2, 4]);
    }

    #[test]
    fn boundary_points_are_excluded() {
        let positions = [[0.0, 5.0], [10.0, 5.0], [5.0, 0.0], [5.0, 10.0], [5.0, 5.0]];
        let kept = interior_vertices(&positions, bounds());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].get(), 5);
    }

    #[test]
    fn ray_endpoints_at_infinity_drop_out() {
        let positions = [[f64::INFINITY, 5.0], [5.0, f64::NEG_INFINITY], [f64::NAN, 5.0]];
        assert!(interior_vertices(&positions, bounds()).is_empty());
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(interior_vertices(&[], bounds()).is_empty());
    }
}
