//! Input-side model of a computed Voronoi diagram: identifier newtypes,
//! the open clipping window, and per-site membership lists.

pub mod bounds;
pub mod cells;
pub mod point;

pub use bounds::BoundingBox;
pub use cells::SiteCells;
pub use point::{SiteId, VertexId};
