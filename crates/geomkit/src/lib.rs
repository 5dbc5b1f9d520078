//! Small computational-geometry kernel.
//!
//! - n-dimensional vector/point/matrix algebra with eager rank validation
//!   (`space`).
//! - Planar predicates built on one shared turn classifier (`orient`):
//!   segment intersection, triangle containment (`shape`), and convex hulls
//!   by Graham scan (`hull`).
//! - Batch pairwise collision counting over triangle sets (`collide`) and
//!   deterministic sampling for tests and benchmarks (`sample`).
//!
//! Every kernel type is an immutable value: operations validate up front,
//! return fresh values or a typed [`error::GeomError`], and never leave a
//! receiver partially mutated. The whole crate is therefore safe to call
//! concurrently without locking.

pub mod cfg;
pub mod collide;
pub mod error;
pub mod hull;
pub mod orient;
pub mod sample;
pub mod shape;
pub mod space;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::{Tolerance, EPSILON};
    pub use crate::error::{GeomError, Result};
    pub use crate::hull::ConvexHull;
    pub use crate::orient::{orient, turn, Orientation};
    pub use crate::shape::{Face, Line, Path, Ray};
    pub use crate::space::{Matrix, Point, Vector};
}
