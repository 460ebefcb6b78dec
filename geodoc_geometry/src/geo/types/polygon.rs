use super::{Coordinates, GeometryTrait, MultiPolygonGeometry, RingGeometry, SingleGeometryTrait};
use crate::{
	GeometryError, GeometryType, PolygonBuilder,
	codec::decode_sequence,
};
use geodoc_core::json::JsonValue;
use std::fmt::Debug;

/// An area bounded by one exterior ring, with zero or more interior rings cut out of it.
///
/// On the wire the rings are a single list, exterior first, followed by the interiors in the
/// order they were added.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct PolygonGeometry {
	exterior: RingGeometry,
	interiors: Vec<RingGeometry>,
}

impl PolygonGeometry {
	#[must_use]
	pub fn new(exterior: RingGeometry, interiors: Vec<RingGeometry>) -> Self {
		Self { exterior, interiors }
	}

	/// Starts a builder with the given exterior ring positions.
	pub fn builder<I>(exterior: I) -> PolygonBuilder
	where
		I: IntoIterator,
		I::Item: Into<Coordinates>,
	{
		PolygonBuilder::new(exterior)
	}

	#[must_use]
	pub fn exterior(&self) -> &RingGeometry {
		&self.exterior
	}

	#[must_use]
	pub fn interiors(&self) -> &[RingGeometry] {
		&self.interiors
	}

	/// All rings, exterior first.
	pub fn rings(&self) -> impl Iterator<Item = &RingGeometry> {
		std::iter::once(&self.exterior).chain(&self.interiors)
	}

	/// Consumes the polygon and returns its rings, exterior first.
	#[must_use]
	pub fn into_rings(self) -> Vec<RingGeometry> {
		let mut rings = Vec::with_capacity(self.interiors.len() + 1);
		rings.push(self.exterior);
		rings.extend(self.interiors);
		rings
	}
}

impl GeometryTrait for PolygonGeometry {
	const TYPE: GeometryType = GeometryType::Polygon;

	fn verify(&self) -> Result<(), GeometryError> {
		self.rings().try_for_each(RingGeometry::verify)
	}

	fn to_coord_json(&self, precision: Option<u8>) -> JsonValue {
		JsonValue::from(self.rings().map(|ring| ring.to_coord_json(precision)).collect::<Vec<_>>())
	}

	fn from_coord_json(json: &JsonValue) -> Result<Self, GeometryError> {
		let mut rings = decode_sequence(json, RingGeometry::from_coord_json)?.into_iter();
		let exterior = rings.next().ok_or_else(|| {
			GeometryError::MalformedCoordinate("a Polygon needs an exterior ring".to_string())
		})?;
		Ok(Self::new(exterior, rings.collect()))
	}
}

impl SingleGeometryTrait<MultiPolygonGeometry> for PolygonGeometry {
	fn into_multi(self) -> MultiPolygonGeometry {
		MultiPolygonGeometry::from(vec![self])
	}
}

impl Debug for PolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(self.rings()).finish()
	}
}

impl From<RingGeometry> for PolygonGeometry {
	fn from(exterior: RingGeometry) -> Self {
		Self::new(exterior, Vec::new())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::CompositeGeometryTrait;

	fn square(offset: f64, size: f64) -> RingGeometry {
		RingGeometry::new([
			(offset, offset),
			(offset, offset + size),
			(offset + size, offset + size),
			(offset + size, offset),
			(offset, offset),
		])
	}

	fn with_hole() -> PolygonGeometry {
		PolygonGeometry::new(square(0.0, 10.0), vec![square(2.0, 2.0), square(6.0, 2.0)])
	}

	#[test]
	fn rings_exterior_first() {
		let polygon = with_hole();
		let rings: Vec<&RingGeometry> = polygon.rings().collect();
		assert_eq!(rings.len(), 3);
		assert_eq!(rings[0], polygon.exterior());
		assert_eq!(rings[1], &polygon.interiors()[0]);
		assert_eq!(polygon.into_rings()[2], square(6.0, 2.0));
	}

	#[test]
	fn coord_json_round_trip() {
		let json = with_hole().to_coord_json(None);
		assert_eq!(json.as_array().unwrap().len(), 3);
		assert_eq!(PolygonGeometry::from_coord_json(&json).unwrap(), with_hole());
	}

	#[test]
	fn from_coord_json_without_rings() {
		assert_eq!(
			PolygonGeometry::from_coord_json(&JsonValue::new_array()).unwrap_err(),
			GeometryError::MalformedCoordinate("a Polygon needs an exterior ring".to_string())
		);
	}

	#[test]
	fn from_coord_json_rejects_line_string_depth() {
		let json = JsonValue::parse_str("[[2,1],[5,3]]").unwrap();
		assert!(matches!(
			PolygonGeometry::from_coord_json(&json),
			Err(GeometryError::MalformedCoordinate(_))
		));
	}

	#[test]
	fn verify_checks_every_ring() {
		assert!(with_hole().verify().is_ok());
		let open = RingGeometry::new([(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
		let polygon = PolygonGeometry::new(square(0.0, 10.0), vec![open]);
		assert!(matches!(polygon.verify(), Err(GeometryError::InvalidGeometry(_))));
	}

	#[test]
	fn into_multi() {
		let multi = with_hole().into_multi();
		assert_eq!(multi.len(), 1);
		assert_eq!(multi.first(), Some(&with_hole()));
	}
}
