use super::{GeometryTrait, PolygonGeometry};
use crate::{
	GeometryError, GeometryType,
	codec::{decode_sequence, encode_sequence},
};
use geodoc_core::json::JsonValue;

/// An ordered collection of polygons. Its coordinates nest four levels deep.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct MultiPolygonGeometry(Vec<PolygonGeometry>);

impl MultiPolygonGeometry {
	pub fn new(polygons: impl IntoIterator<Item = PolygonGeometry>) -> Self {
		Self(polygons.into_iter().collect())
	}
}

impl GeometryTrait for MultiPolygonGeometry {
	const TYPE: GeometryType = GeometryType::MultiPolygon;

	fn verify(&self) -> Result<(), GeometryError> {
		self.0.iter().try_for_each(PolygonGeometry::verify)
	}

	fn to_coord_json(&self, precision: Option<u8>) -> JsonValue {
		encode_sequence(&self.0, |polygon| polygon.to_coord_json(precision))
	}

	fn from_coord_json(json: &JsonValue) -> Result<Self, GeometryError> {
		decode_sequence(json, PolygonGeometry::from_coord_json).map(Self)
	}
}

crate::impl_composite!(MultiPolygonGeometry, PolygonGeometry);

#[cfg(test)]
mod tests {
	use super::*;
	use crate::RingGeometry;

	fn triangle(offset: f64) -> RingGeometry {
		RingGeometry::new([
			(offset, offset),
			(offset, offset + 1.0),
			(offset + 1.0, offset),
			(offset, offset),
		])
	}

	fn example() -> MultiPolygonGeometry {
		MultiPolygonGeometry::new([
			PolygonGeometry::new(triangle(0.0), vec![]),
			PolygonGeometry::new(triangle(10.0), vec![triangle(10.2)]),
		])
	}

	#[test]
	fn coord_json_shape() {
		let json = example().to_coord_json(None);
		let polygons = json.as_array().unwrap();
		assert_eq!(polygons.len(), 2);
		let ring_counts: Vec<usize> = polygons.iter().map(|p| p.as_array().unwrap().len()).collect();
		assert_eq!(ring_counts, vec![1, 2]);
	}

	#[test]
	fn coord_json_round_trip() {
		let json = example().to_coord_json(None);
		assert_eq!(MultiPolygonGeometry::from_coord_json(&json).unwrap(), example());
	}

	#[test]
	fn from_coord_json_rejects_polygon_depth() {
		let json = PolygonGeometry::new(triangle(0.0), vec![]).to_coord_json(None);
		assert!(matches!(
			MultiPolygonGeometry::from_coord_json(&json),
			Err(GeometryError::MalformedCoordinate(_))
		));
	}

	#[test]
	fn verify() {
		assert!(example().verify().is_ok());
		assert!(MultiPolygonGeometry::default().verify().is_ok());
	}
}
