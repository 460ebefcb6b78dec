use crate::{Geometry, GeometryCollectionBuilder, GeometryError};

/// An ordered list of geometries of any kind, including nested collections.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct GeometryCollection(Vec<Geometry>);

impl GeometryCollection {
	#[must_use]
	pub fn new(geometries: Vec<Geometry>) -> Self {
		Self(geometries)
	}

	#[must_use]
	pub fn builder() -> GeometryCollectionBuilder {
		GeometryCollectionBuilder::new()
	}

	/// Verifies every member, stopping at the first invalid one.
	pub fn verify(&self) -> Result<(), GeometryError> {
		self.0.iter().try_for_each(Geometry::verify)
	}
}

crate::impl_composite!(GeometryCollection, Geometry);
