//! Step-by-step construction of geometries that are awkward to build in one call.
//!
//! Every builder is consumed by `build()`, so it produces exactly one geometry and cannot be
//! changed afterwards.

mod collection;
mod point;
mod polygon;

pub use collection::*;
pub use point::*;
pub use polygon::*;
