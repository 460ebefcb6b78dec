use crate::{Geometry, GeometryCollection};

/// Builds a [`GeometryCollection`]. Members keep the order in which they are added.
#[derive(Clone, Debug, Default)]
pub struct GeometryCollectionBuilder {
	geometries: Vec<Geometry>,
}

impl GeometryCollectionBuilder {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a member. Accepts any geometry type, including other collections.
	pub fn add(mut self, geometry: impl Into<Geometry>) -> Self {
		self.geometries.push(geometry.into());
		self
	}

	#[must_use]
	pub fn build(self) -> GeometryCollection {
		GeometryCollection::new(self.geometries)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{CompositeGeometryTrait, LineStringGeometry, MultiPointGeometry, PointGeometry};

	#[test]
	fn empty() {
		assert!(GeometryCollectionBuilder::new().build().is_empty());
	}

	#[test]
	fn keeps_order() {
		let collection = GeometryCollection::builder()
			.add(PointGeometry::new(1.0, 2.0))
			.add(LineStringGeometry::new([(1.0, 2.0), (3.0, 4.0)]))
			.add(MultiPointGeometry::new([(5.0, 6.0)]))
			.add(GeometryCollection::default())
			.build();

		let types: Vec<&str> = collection.iter().map(Geometry::type_name).collect();
		assert_eq!(
			types,
			vec!["Point", "LineString", "MultiPoint", "GeometryCollection"]
		);
	}
}
