use super::{GeometryTrait, PointGeometry};
use crate::{
	GeometryError, GeometryType,
	codec::{decode_sequence, encode_sequence},
};
use geodoc_core::json::JsonValue;

/// An ordered collection of points.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct MultiPointGeometry(Vec<PointGeometry>);

impl MultiPointGeometry {
	pub fn new<I>(points: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<PointGeometry>,
	{
		Self(points.into_iter().map(Into::into).collect())
	}
}

impl GeometryTrait for MultiPointGeometry {
	const TYPE: GeometryType = GeometryType::MultiPoint;

	fn verify(&self) -> Result<(), GeometryError> {
		Ok(())
	}

	fn to_coord_json(&self, precision: Option<u8>) -> JsonValue {
		encode_sequence(&self.0, |point| point.to_coord_json(precision))
	}

	fn from_coord_json(json: &JsonValue) -> Result<Self, GeometryError> {
		decode_sequence(json, PointGeometry::from_coord_json).map(Self)
	}
}

crate::impl_composite!(MultiPointGeometry, PointGeometry);
