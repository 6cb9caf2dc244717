//! Re-export public algorithms.

pub mod build;
pub mod interior;
pub mod resolve;

pub use build::{IndexOpts, build_index, build_index_with_opts};
pub use interior::interior_vertices;
pub use resolve::{DegeneracyHandling, Resolution, resolve_dependencies};
#[cfg(feature = "rayon")]
pub use resolve::resolve_dependencies_par;
