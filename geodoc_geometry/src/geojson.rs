//! Shorthand constructors for every geometry kind.
//!
//! All positions are given as `(latitude, longitude)`, or as [`PointGeometry`] values.
//!
//! ```
//! use geodoc_geometry::{Geometry, geojson};
//!
//! let collection = geojson::geometry_collection_builder()
//!     .add(geojson::point(3.0, 7.0))
//!     .add(geojson::line_string([(1.0, 2.0), (3.0, 5.0)]))
//!     .build();
//! assert_eq!(
//!     Geometry::from(collection).stringify(),
//!     concat!(
//!         r#"{"geometries":[{"coordinates":[7,3],"type":"Point"},"#,
//!         r#"{"coordinates":[[2,1],[5,3]],"type":"LineString"}],"type":"GeometryCollection"}"#
//!     )
//! );
//! ```

use crate::{
	Coordinates, GeometryCollectionBuilder, LineStringGeometry, MultiLineStringGeometry,
	MultiPointGeometry, MultiPolygonGeometry, PointBuilder, PointGeometry, PolygonBuilder,
	PolygonGeometry, RingGeometry,
};

#[must_use]
pub fn point(latitude: f64, longitude: f64) -> PointGeometry {
	PointGeometry::new(latitude, longitude)
}

#[must_use]
pub fn point_builder() -> PointBuilder {
	PointBuilder::new()
}

pub fn line_string<I>(points: I) -> LineStringGeometry
where
	I: IntoIterator,
	I::Item: Into<Coordinates>,
{
	LineStringGeometry::new(points)
}

/// A polygon without holes.
pub fn polygon<I>(exterior: I) -> PolygonGeometry
where
	I: IntoIterator,
	I::Item: Into<Coordinates>,
{
	PolygonGeometry::from(RingGeometry::new(exterior))
}

/// A polygon builder, for adding holes with [`PolygonBuilder::interior_ring`].
pub fn polygon_builder<I>(exterior: I) -> PolygonBuilder
where
	I: IntoIterator,
	I::Item: Into<Coordinates>,
{
	PolygonBuilder::new(exterior)
}

pub fn multi_point<I>(points: I) -> MultiPointGeometry
where
	I: IntoIterator,
	I::Item: Into<PointGeometry>,
{
	MultiPointGeometry::new(points)
}

pub fn multi_line_string(lines: impl IntoIterator<Item = LineStringGeometry>) -> MultiLineStringGeometry {
	MultiLineStringGeometry::new(lines)
}

pub fn multi_polygon(polygons: impl IntoIterator<Item = PolygonGeometry>) -> MultiPolygonGeometry {
	MultiPolygonGeometry::new(polygons)
}

#[must_use]
pub fn geometry_collection_builder() -> GeometryCollectionBuilder {
	GeometryCollectionBuilder::new()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{CompositeGeometryTrait, Geometry};

	#[test]
	fn point_encodes_longitude_first() {
		let document = Geometry::from(point(3.0, 7.0)).to_json();
		assert_eq!(document.stringify(), r#"{"coordinates":[7,3],"type":"Point"}"#);
	}

	#[test]
	fn point_builder_defaults_to_zero() {
		assert_eq!(point_builder().latitude(4.0).build(), point(4.0, 0.0));
	}

	#[test]
	fn line_string_from_points() {
		let line = line_string([point(1.0, 2.0), point(3.0, 5.0), point(19.0, 13.0)]);
		assert_eq!(
			Geometry::from(line).stringify(),
			r#"{"coordinates":[[2,1],[5,3],[13,19]],"type":"LineString"}"#
		);
	}

	#[test]
	fn polygon_without_holes() {
		let polygon = polygon([(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (0.0, 0.0)]);
		assert_eq!(polygon.exterior().len(), 4);
		assert!(polygon.interiors().is_empty());
	}

	#[test]
	fn polygon_builder_with_hole() {
		let polygon = polygon_builder([(0.0, 0.0), (0.0, 9.0), (9.0, 9.0), (0.0, 0.0)])
			.interior_ring([(1.0, 1.0), (1.0, 2.0), (2.0, 2.0), (1.0, 1.0)])
			.build();
		assert_eq!(polygon.rings().count(), 2);
	}

	#[test]
	fn multi_geometries() {
		assert_eq!(multi_point([point(1.0, 2.0), point(3.0, 4.0)]).len(), 2);
		let line = line_string([(1.0, 2.0), (3.0, 4.0)]);
		assert_eq!(multi_line_string([line.clone(), line]).len(), 2);
		let square = polygon([(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (0.0, 0.0)]);
		assert_eq!(multi_polygon([square]).len(), 1);
	}
}
