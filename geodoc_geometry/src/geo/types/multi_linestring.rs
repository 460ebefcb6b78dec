use super::{GeometryTrait, LineStringGeometry};
use crate::{
	GeometryError, GeometryType,
	codec::{decode_sequence, encode_sequence},
};
use geodoc_core::json::JsonValue;

/// An ordered collection of line strings.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct MultiLineStringGeometry(Vec<LineStringGeometry>);

impl MultiLineStringGeometry {
	pub fn new(lines: impl IntoIterator<Item = LineStringGeometry>) -> Self {
		Self(lines.into_iter().collect())
	}
}

impl GeometryTrait for MultiLineStringGeometry {
	const TYPE: GeometryType = GeometryType::MultiLineString;

	fn verify(&self) -> Result<(), GeometryError> {
		self.0.iter().try_for_each(LineStringGeometry::verify)
	}

	fn to_coord_json(&self, precision: Option<u8>) -> JsonValue {
		encode_sequence(&self.0, |line| line.to_coord_json(precision))
	}

	fn from_coord_json(json: &JsonValue) -> Result<Self, GeometryError> {
		decode_sequence(json, LineStringGeometry::from_coord_json).map(Self)
	}
}

crate::impl_composite!(MultiLineStringGeometry, LineStringGeometry);
