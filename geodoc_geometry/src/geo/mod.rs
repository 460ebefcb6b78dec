mod collection;
mod geometry;
mod geometry_type;
mod types;

pub use collection::*;
pub use geometry::*;
pub use geometry_type::*;
pub use types::*;
