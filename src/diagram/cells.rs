//! Per-site vertex-membership lists.
//!
//! One variable-length list per generating site, naming the (1-based global)
//! vertices that bound the site's region. The lists come from an external
//! Voronoi construction and are taken at face value apart from one contract:
//! no entry may be 0, the reserved padding sentinel. That precondition is
//! enforced here, before any indexing work runs, rather than left as a
//! convention.

use crate::diagram::point::{SiteId, VertexId};
use crate::incidence_error::IncidenceError;

/// Validated per-site membership lists of a Voronoi diagram.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SiteCells {
    lists: Vec<Vec<VertexId>>,
}

impl SiteCells {
    /// Builds site cells from raw 1-based vertex-index lists, one per site.
    ///
    /// # Errors
    /// Returns [`IncidenceError::SentinelVertexIndex`] naming the offending
    /// site and list position if any entry is 0.
    ///
    /// # Example
    /// ```rust
    /// use voronoi_incidence::diagram::cells::SiteCells;
    /// let cells = SiteCells::try_from_lists(vec![vec![2, 4], vec![2], vec![2, 4], vec![4]])?;
    /// assert_eq!(cells.num_sites(), 4);
    /// assert_eq!(cells.max_len(), 2);
    /// # Ok::<(), voronoi_incidence::incidence_error::IncidenceError>(())
    /// ```
    pub fn try_from_lists<I>(lists: I) -> Result<Self, IncidenceError>
    where
        I: IntoIterator<Item = Vec<u32>>,
    {
        let mut out = Vec::new();
        for (site, raw) in lists.into_iter().enumerate() {
            let mut list = Vec::with_capacity(raw.len());
            for (column, &idx) in raw.iter().enumerate() {
                let id = VertexId::new(idx).map_err(|_| IncidenceError::SentinelVertexIndex {
                    site: SiteId::from_index(site),
                    column,
                })?;
                list.push(id);
            }
            out.push(list);
        }
        Ok(Self { lists: out })
    }

    /// Builds site cells from a flat CSR layout: `offsets` has one entry per
    /// site plus a final end marker, and `indices[offsets[s]..offsets[s+1]]`
    /// is site `s`'s list.
    ///
    /// # Errors
    /// [`IncidenceError::MalformedOffsets`] if the offsets are not a monotone
    /// cover of `indices` starting at 0; [`IncidenceError::SentinelVertexIndex`]
    /// on a 0 entry.
    pub fn try_from_csr(offsets: &[usize], indices: &[u32]) -> Result<Self, IncidenceError> {
        let Some((&first, rest)) = offsets.split_first() else {
            return Err(IncidenceError::MalformedOffsets(
                "offsets must contain at least the end marker".into(),
            ));
        };
        if first != 0 {
            return Err(IncidenceError::MalformedOffsets(format!(
                "offsets must start at 0, got {first}"
            )));
        }
        let mut prev = first;
        for &off in rest {
            if off < prev {
                return Err(IncidenceError::MalformedOffsets(format!(
                    "offsets must be non-decreasing, got {off} after {prev}"
                )));
            }
            prev = off;
        }
        if prev != indices.len() {
            return Err(IncidenceError::MalformedOffsets(format!(
                "last offset {prev} does not match index buffer length {}",
                indices.len()
            )));
        }
        Self::try_from_lists(
            offsets
                .windows(2)
                .map(|w| indices[w[0]..w[1]].to_vec())
                .collect::<Vec<_>>(),
        )
    }

    /// Number of sites (membership lists).
    #[inline]
    pub fn num_sites(&self) -> usize {
        self.lists.len()
    }

    /// True if there are no sites at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Length of the longest membership list (the padded row width).
    #[inline]
    pub fn max_len(&self) -> usize {
        self.lists.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Membership list of `site`, or `None` if the site is out of range.
    #[inline]
    pub fn vertices(&self, site: SiteId) -> Option<&[VertexId]> {
        self.lists.get(site.index()).map(Vec::as_slice)
    }

    /// Iterator over the lists in site order.
    pub fn lists(&self) -> impl Iterator<Item = &[VertexId]> + '_ {
        self.lists.iter().map(Vec::as_slice)
    }

    /// Iterator over `(site, list)` pairs in site order.
    pub fn iter(&self) -> impl Iterator<Item = (SiteId, &[VertexId])> + '_ {
        self.lists
            .iter()
            .enumerate()
            .map(|(i, list)| (SiteId::from_index(i), list.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_entry_is_rejected_with_location() {
        let err = SiteCells::try_from_lists(vec![vec![1, 2], vec![3, 0, 4]]).unwrap_err();
        assert_eq!(
            err,
            IncidenceError::SentinelVertexIndex {
                site: SiteId::new(2).unwrap(),
                column: 1,
            }
        );
    }

    #[test]
    fn empty_lists_are_valid() {
        let cells = SiteCells::try_from_lists(vec![vec![], vec![7]]).unwrap();
        assert!(!cells.is_empty());
        assert_eq!(cells.num_sites(), 2);
        assert_eq!(cells.max_len(), 1);
        let first = cells.vertices(SiteId::new(1).unwrap()).unwrap();
        assert!(first.is_empty());
        assert!(SiteCells::default().is_empty());
    }

    #[test]
    fn csr_matches_ragged_construction() {
        let ragged =
            SiteCells::try_from_lists(vec![vec![2, 4], vec![2], vec![2, 4], vec![4]]).unwrap();
        let csr = SiteCells::try_from_csr(&[0, 2, 3, 5, 6], &[2, 4, 2, 2, 4, 4]).unwrap();
        assert_eq!(ragged, csr);
    }

    #[test]
    fn csr_offset_validation() {
        assert!(matches!(
            SiteCells::try_from_csr(&[], &[]),
            Err(IncidenceError::MalformedOffsets(_))
        ));
        assert!(matches!(
            SiteCells::try_from_csr(&[1, 2], &[5, 6]),
            Err(IncidenceError::MalformedOffsets(_))
        ));
        assert!(matches!(
            SiteCells::try_from_csr(&[0, 2, 1], &[5, 6]),
            Err(IncidenceError::MalformedOffsets(_))
        ));
        assert!(matches!(
            SiteCells::try_from_csr(&[0, 1], &[5, 6]),
            Err(IncidenceError::MalformedOffsets(_))
        ));
    }

    #[test]
    fn iter_yields_one_based_sites() {
        let cells = SiteCells::try_from_lists(vec![vec![1], vec![2]]).unwrap();
        let sites: Vec<u32> = cells.iter().map(|(s, _)| s.get()).collect();
        assert_eq!(sites, vec![1, 2]);
    }
}
