use super::{CompositeGeometryTrait, Coordinates, LineStringGeometry};
use crate::{
	GeometryError,
	codec::{decode_position, decode_sequence, encode_position, encode_sequence},
};
use geodoc_core::json::JsonValue;

/// A closed sequence of positions bounding an area, used as the exterior or an interior ring
/// of a polygon.
///
/// GeoJSON requires the first and last positions to be identical. That is only enforced by
/// [`RingGeometry::verify`]; construction and plain decoding keep whatever they are given.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct RingGeometry(Vec<Coordinates>);

impl RingGeometry {
	pub fn new<I>(points: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<Coordinates>,
	{
		Self(points.into_iter().map(Into::into).collect())
	}

	/// Returns `true` if the ring has positions and the first equals the last.
	#[must_use]
	pub fn is_closed(&self) -> bool {
		!self.0.is_empty() && self.0.first() == self.0.last()
	}

	/// Checks that the ring has at least 4 positions (3 distinct plus the closing one) and is closed.
	pub fn verify(&self) -> Result<(), GeometryError> {
		if self.0.len() < 4 {
			return Err(GeometryError::InvalidGeometry(format!(
				"a ring needs at least 4 positions, found {}",
				self.0.len()
			)));
		}
		if !self.is_closed() {
			return Err(GeometryError::InvalidGeometry(
				"a ring must end with its first position".to_string(),
			));
		}
		Ok(())
	}

	pub(crate) fn to_coord_json(&self, precision: Option<u8>) -> JsonValue {
		encode_sequence(&self.0, |c| encode_position(c, precision))
	}

	pub(crate) fn from_coord_json(json: &JsonValue) -> Result<Self, GeometryError> {
		decode_sequence(json, decode_position).map(Self)
	}
}

impl From<LineStringGeometry> for RingGeometry {
	fn from(line: LineStringGeometry) -> Self {
		Self(line.into_inner())
	}
}

crate::impl_composite!(RingGeometry, Coordinates);
