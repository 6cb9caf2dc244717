//! Fixed-width padded membership matrix.
//!
//! Flattens the ragged per-site lists of a [`SiteCells`] into one contiguous
//! `sites x width` buffer, where `width` is the longest list and short rows
//! are padded with [`SENTINEL`]. Row slices of this buffer are what the
//! dependency resolver scans, so the layout is chosen for that access
//! pattern: row-major, each row contiguous in memory.

use crate::diagram::cells::SiteCells;
use crate::diagram::point::SiteId;

/// Padding value for unused row slots.
///
/// Valid vertices carry 1-based identifiers, so 0 can never collide with a
/// real entry. [`SiteCells`] construction rejects 0 in the input lists,
/// which is what keeps this reservation sound.
pub const SENTINEL: u32 = 0;

/// Row-major `sites x width` matrix of 1-based vertex indices, sentinel
/// padded on the right.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MembershipTable {
    data: Vec<u32>,
    width: usize,
    sites: usize,
}

impl MembershipTable {
    /// Flattens `cells` into a padded matrix.
    ///
    /// # Complexity
    /// O(sites * width) time and space. Sites with much shorter lists than
    /// the longest one pay for the padding; the resolver's bulk row scans
    /// are what that buys.
    ///
    /// # Example
    /// ```rust
    /// use voronoi_incidence::diagram::cells::SiteCells;
    /// use voronoi_incidence::table::membership::{MembershipTable, SENTINEL};
    ///
    /// let cells = SiteCells::try_from_lists(vec![vec![2, 4], vec![2]])?;
    /// let table = MembershipTable::from_cells(&cells);
    /// assert_eq!(table.row(0), &[2, 4]);
    /// assert_eq!(table.row(1), &[2, SENTINEL]);
    /// # Ok::<(), voronoi_incidence::incidence_error::IncidenceError>(())
    /// ```
    pub fn from_cells(cells: &SiteCells) -> Self {
        let sites = cells.num_sites();
        let width = cells.max_len();
        let mut data = vec![SENTINEL; sites * width];
        for (i, list) in cells.lists().enumerate() {
            for (j, v) in list.iter().enumerate() {
                data[i * width + j] = v.get();
            }
        }
        Self { data, width, sites }
    }

    /// Number of rows (sites).
    #[inline]
    pub fn num_sites(&self) -> usize {
        self.sites
    }

    /// Row width (longest membership list).
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Row of site at 0-based position `i`.
    ///
    /// # Panics
    /// Panics if `i >= self.num_sites()`.
    #[inline]
    pub fn row(&self, i: usize) -> &[u32] {
        // Indexing by hand rather than chunks_exact: a diagram whose lists
        // are all empty has width 0, and chunks_exact(0) panics.
        &self.data[i * self.width..i * self.width + self.width]
    }

    /// Row of `site`, or `None` if the site is out of range.
    #[inline]
    pub fn row_of(&self, site: SiteId) -> Option<&[u32]> {
        (site.index() < self.sites).then(|| self.row(site.index()))
    }

    /// Iterator over rows in site order.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        (0..self.sites).map(move |i| self.row(i))
    }

    /// The flat row-major buffer.
    #[inline]
    pub fn as_flat(&self) -> &[u32] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(lists: Vec<Vec<u32>>) -> SiteCells {
        SiteCells::try_from_lists(lists).unwrap()
    }

    #[test]
    fn pads_short_rows_with_sentinel() {
        let table = MembershipTable::from_cells(&cells(vec![vec![2, 4], vec![2], vec![4]]));
        assert_eq!(table.num_sites(), 3);
        assert_eq!(table.width(), 2);
        assert_eq!(table.row(0), &[2, 4]);
        assert_eq!(table.row(1), &[2, SENTINEL]);
        assert_eq!(table.row(2), &[4, SENTINEL]);
        assert_eq!(table.as_flat(), &[2, 4, 2, 0, 4, 0]);
    }

    #[test]
    fn all_empty_lists_give_zero_width() {
        let table = MembershipTable::from_cells(&cells(vec![vec![], vec![]]));
        assert_eq!(table.num_sites(), 2);
        assert_eq!(table.width(), 0);
        assert!(table.row(0).is_empty());
        assert_eq!(table.rows().count(), 2);
    }

    #[test]
    fn no_sites_at_all() {
        let table = MembershipTable::from_cells(&cells(vec![]));
        assert_eq!(table.num_sites(), 0);
        assert_eq!(table.rows().count(), 0);
        assert!(table.as_flat().is_empty());
    }

    #[test]
    fn row_of_checks_range() {
        let table = MembershipTable::from_cells(&cells(vec![vec![1]]));
        let s1 = SiteId::new(1).unwrap();
        let s2 = SiteId::new(2).unwrap();
        assert_eq!(table.row_of(s1), Some(&[1u32][..]));
        assert_eq!(table.row_of(s2), None);
    }
}
