use crate::{Coordinates, PolygonGeometry, RingGeometry};
use log::trace;

/// Builds a [`PolygonGeometry`] from an exterior ring and any number of interior rings.
///
/// Interior rings keep the order in which they are added.
#[derive(Clone, Debug)]
pub struct PolygonBuilder {
	exterior: RingGeometry,
	interiors: Vec<RingGeometry>,
}

impl PolygonBuilder {
	pub fn new<I>(exterior: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<Coordinates>,
	{
		Self {
			exterior: RingGeometry::new(exterior),
			interiors: Vec::new(),
		}
	}

	/// Adds a hole.
	pub fn interior_ring<I>(mut self, points: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<Coordinates>,
	{
		self.interiors.push(RingGeometry::new(points));
		self
	}

	#[must_use]
	pub fn build(self) -> PolygonGeometry {
		trace!("building polygon with {} interior rings", self.interiors.len());
		PolygonGeometry::new(self.exterior, self.interiors)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{CompositeGeometryTrait, PointGeometry};

	#[test]
	fn without_holes() {
		let polygon = PolygonBuilder::new([(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (0.0, 0.0)]).build();
		assert_eq!(polygon.exterior().len(), 4);
		assert!(polygon.interiors().is_empty());
	}

	#[test]
	fn interior_rings_keep_order() {
		let hole = |lat: f64| [(lat, 1.0), (lat, 2.0), (lat + 1.0, 2.0), (lat, 1.0)];
		let polygon = PolygonGeometry::builder([(0.0, 0.0), (0.0, 9.0), (9.0, 9.0), (0.0, 0.0)])
			.interior_ring(hole(1.0))
			.interior_ring(hole(3.0))
			.interior_ring(hole(5.0))
			.build();

		let first_latitudes: Vec<f64> = polygon
			.interiors()
			.iter()
			.map(|ring| ring.first().map_or(f64::NAN, Coordinates::latitude))
			.collect();
		assert_eq!(first_latitudes, vec![1.0, 3.0, 5.0]);
	}

	#[test]
	fn accepts_points() {
		let points = [
			PointGeometry::new(0.0, 0.0),
			PointGeometry::new(0.0, 1.0),
			PointGeometry::new(1.0, 0.0),
			PointGeometry::new(0.0, 0.0),
		];
		let polygon = PolygonBuilder::new(points).build();
		assert_eq!(polygon.exterior().first(), Some(&Coordinates::new(0.0, 0.0)));
		assert!(polygon.exterior().is_closed());
	}
}
