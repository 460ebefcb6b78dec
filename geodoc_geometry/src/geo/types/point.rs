use super::{Coordinates, GeometryTrait, MultiPointGeometry, SingleGeometryTrait};
use crate::{
	GeometryError, GeometryType, PointBuilder,
	codec::{decode_position, encode_position},
};
use geodoc_core::json::JsonValue;
use std::fmt::Debug;

/// A single position.
///
/// This is the simplest geometry and the building block for line strings, rings and multi points.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PointGeometry(Coordinates);

impl PointGeometry {
	#[must_use]
	pub fn new(latitude: f64, longitude: f64) -> Self {
		Self(Coordinates::new(latitude, longitude))
	}

	/// Starts a builder with both components set to `0.0`.
	#[must_use]
	pub fn builder() -> PointBuilder {
		PointBuilder::new()
	}

	#[must_use]
	pub fn latitude(&self) -> f64 {
		self.0.latitude()
	}

	#[must_use]
	pub fn longitude(&self) -> f64 {
		self.0.longitude()
	}

	#[must_use]
	pub fn as_coord(&self) -> &Coordinates {
		&self.0
	}
}

impl GeometryTrait for PointGeometry {
	const TYPE: GeometryType = GeometryType::Point;

	/// A point is always valid.
	fn verify(&self) -> Result<(), GeometryError> {
		Ok(())
	}

	fn to_coord_json(&self, precision: Option<u8>) -> JsonValue {
		encode_position(&self.0, precision)
	}

	fn from_coord_json(json: &JsonValue) -> Result<Self, GeometryError> {
		decode_position(json).map(Self)
	}
}

impl SingleGeometryTrait<MultiPointGeometry> for PointGeometry {
	fn into_multi(self) -> MultiPointGeometry {
		MultiPointGeometry::from(vec![self])
	}
}

impl Debug for PointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

impl From<Coordinates> for PointGeometry {
	fn from(value: Coordinates) -> Self {
		Self(value)
	}
}

/// `(latitude, longitude)`
impl From<(f64, f64)> for PointGeometry {
	fn from(value: (f64, f64)) -> Self {
		Self(Coordinates::from(value))
	}
}

impl From<&(f64, f64)> for PointGeometry {
	fn from(value: &(f64, f64)) -> Self {
		Self(Coordinates::from(value))
	}
}

impl From<PointGeometry> for Coordinates {
	fn from(value: PointGeometry) -> Self {
		value.0
	}
}

impl From<&PointGeometry> for Coordinates {
	fn from(value: &PointGeometry) -> Self {
		value.0
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::CompositeGeometryTrait;

	#[test]
	fn new_and_accessors() {
		let point = PointGeometry::new(3.0, 7.0);
		assert_eq!(point.latitude(), 3.0);
		assert_eq!(point.longitude(), 7.0);
		assert_eq!(point.as_coord(), &Coordinates::new(3.0, 7.0));
	}

	#[test]
	fn from_tuple() {
		assert_eq!(PointGeometry::from((3.0, 7.0)), PointGeometry::new(3.0, 7.0));
	}

	#[test]
	fn to_coord_json_is_longitude_first() {
		let json = PointGeometry::new(3.0, 7.0).to_coord_json(None);
		assert_eq!(json, JsonValue::from([7.0, 3.0]));
	}

	#[test]
	fn from_coord_json() {
		let point = PointGeometry::from_coord_json(&JsonValue::from([7.0, 3.0])).unwrap();
		assert_eq!(point, PointGeometry::new(3.0, 7.0));
	}

	#[test]
	fn from_coord_json_rejects_nested_arrays() {
		let json = JsonValue::from(vec![[7.0, 3.0]]);
		assert!(matches!(
			PointGeometry::from_coord_json(&json),
			Err(GeometryError::MalformedCoordinate(_))
		));
	}

	#[test]
	fn verify_always_ok() {
		assert!(PointGeometry::default().verify().is_ok());
	}

	#[test]
	fn into_multi() {
		let point = PointGeometry::new(1.0, 2.0);
		let multi = point.into_multi();
		assert_eq!(multi.as_slice(), &[point]);
	}

	#[test]
	fn debug_format() {
		assert_eq!(format!("{:?}", PointGeometry::new(1.0, 2.0)), "(1.0, 2.0)");
	}
}
