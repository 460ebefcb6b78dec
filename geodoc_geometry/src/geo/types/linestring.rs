use super::{Coordinates, GeometryTrait, MultiLineStringGeometry, SingleGeometryTrait};
use crate::{
	GeometryError, GeometryType,
	codec::{decode_position, decode_sequence, encode_position, encode_sequence},
};
use geodoc_core::json::JsonValue;

/// An ordered path of positions.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct LineStringGeometry(Vec<Coordinates>);

impl LineStringGeometry {
	/// Creates a line string from positions in the given order.
	pub fn new<I>(points: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<Coordinates>,
	{
		Self(points.into_iter().map(Into::into).collect())
	}
}

impl GeometryTrait for LineStringGeometry {
	const TYPE: GeometryType = GeometryType::LineString;

	fn verify(&self) -> Result<(), GeometryError> {
		if self.0.len() < 2 {
			return Err(GeometryError::InvalidGeometry(format!(
				"a LineString needs at least 2 positions, found {}",
				self.0.len()
			)));
		}
		Ok(())
	}

	fn to_coord_json(&self, precision: Option<u8>) -> JsonValue {
		encode_sequence(&self.0, |c| encode_position(c, precision))
	}

	fn from_coord_json(json: &JsonValue) -> Result<Self, GeometryError> {
		decode_sequence(json, decode_position).map(Self)
	}
}

impl SingleGeometryTrait<MultiLineStringGeometry> for LineStringGeometry {
	fn into_multi(self) -> MultiLineStringGeometry {
		MultiLineStringGeometry::from(vec![self])
	}
}

crate::impl_composite!(LineStringGeometry, Coordinates);
