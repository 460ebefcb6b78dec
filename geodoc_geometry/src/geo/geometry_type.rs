use crate::GeometryError;
use std::{fmt::Display, str::FromStr};

/// The seven GeoJSON geometry kinds, identified by their `"type"` tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeometryType {
	Point,
	LineString,
	Polygon,
	MultiPoint,
	MultiLineString,
	MultiPolygon,
	GeometryCollection,
}

impl GeometryType {
	pub const ALL: [GeometryType; 7] = [
		GeometryType::Point,
		GeometryType::LineString,
		GeometryType::Polygon,
		GeometryType::MultiPoint,
		GeometryType::MultiLineString,
		GeometryType::MultiPolygon,
		GeometryType::GeometryCollection,
	];

	/// The exact tag used in documents.
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			GeometryType::Point => "Point",
			GeometryType::LineString => "LineString",
			GeometryType::Polygon => "Polygon",
			GeometryType::MultiPoint => "MultiPoint",
			GeometryType::MultiLineString => "MultiLineString",
			GeometryType::MultiPolygon => "MultiPolygon",
			GeometryType::GeometryCollection => "GeometryCollection",
		}
	}

	/// How many array levels the `"coordinates"` member has, or `None` for a collection,
	/// which stores `"geometries"` instead.
	#[must_use]
	pub fn coordinate_depth(self) -> Option<usize> {
		match self {
			GeometryType::Point => Some(1),
			GeometryType::LineString | GeometryType::MultiPoint => Some(2),
			GeometryType::Polygon | GeometryType::MultiLineString => Some(3),
			GeometryType::MultiPolygon => Some(4),
			GeometryType::GeometryCollection => None,
		}
	}
}

impl FromStr for GeometryType {
	type Err = GeometryError;

	/// Matches tags exactly. `"point"` or `"POINT"` are unknown types.
	fn from_str(tag: &str) -> Result<Self, Self::Err> {
		GeometryType::ALL
			.into_iter()
			.find(|geometry_type| geometry_type.as_str() == tag)
			.ok_or_else(|| GeometryError::UnknownGeometryType(tag.to_string()))
	}
}

impl Display for GeometryType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn tags_round_trip() {
		for geometry_type in GeometryType::ALL {
			assert_eq!(geometry_type.as_str().parse::<GeometryType>().unwrap(), geometry_type);
			assert_eq!(geometry_type.to_string(), geometry_type.as_str());
		}
	}

	#[rstest]
	#[case("Bogus")]
	#[case("point")]
	#[case("POLYGON")]
	#[case("Multipoint")]
	#[case(" Point")]
	#[case("")]
	fn unknown_tags(#[case] tag: &str) {
		assert_eq!(
			tag.parse::<GeometryType>().unwrap_err(),
			GeometryError::UnknownGeometryType(tag.to_string())
		);
	}

	#[rstest]
	#[case(GeometryType::Point, Some(1))]
	#[case(GeometryType::LineString, Some(2))]
	#[case(GeometryType::MultiPoint, Some(2))]
	#[case(GeometryType::Polygon, Some(3))]
	#[case(GeometryType::MultiLineString, Some(3))]
	#[case(GeometryType::MultiPolygon, Some(4))]
	#[case(GeometryType::GeometryCollection, None)]
	fn coordinate_depth(#[case] geometry_type: GeometryType, #[case] depth: Option<usize>) {
		assert_eq!(geometry_type.coordinate_depth(), depth);
	}
}
