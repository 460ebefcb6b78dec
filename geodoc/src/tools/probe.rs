use super::input::read_documents;
use anyhow::{Context, Result};
use geodoc_geometry::{CompositeGeometryTrait, Geometry, PolygonGeometry, codec::decode_geometry};
use log::info;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// GeoJSON geometry file, or "-" for stdin
	#[arg(required = true)]
	input_file: String,

	/// read newline-delimited JSON, one geometry per line
	#[arg(long)]
	ndjson: bool,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	info!("probe {:?}", arguments.input_file);

	let documents = read_documents(&arguments.input_file, arguments.ndjson)?;
	for (index, document) in documents.iter().enumerate() {
		let geometry = decode_geometry(document).with_context(|| format!("failed to decode geometry {}", index + 1))?;
		for line in summarize(&geometry) {
			println!("{line}");
		}
	}
	Ok(())
}

/// One line per geometry, with collection members indented below their collection.
fn summarize(geometry: &Geometry) -> Vec<String> {
	let mut lines = Vec::new();
	describe(geometry, 0, &mut lines);
	lines
}

fn describe(geometry: &Geometry, depth: usize, lines: &mut Vec<String>) {
	let counts = match geometry {
		Geometry::Point(_) => vec![],
		Geometry::LineString(g) => vec![count(g.len(), "position")],
		Geometry::Polygon(g) => polygon_counts(std::slice::from_ref(g)),
		Geometry::MultiPoint(g) => vec![count(g.len(), "point")],
		Geometry::MultiLineString(g) => vec![
			count(g.len(), "line string"),
			count(g.iter().map(CompositeGeometryTrait::len).sum(), "position"),
		],
		Geometry::MultiPolygon(g) => {
			let mut counts = vec![count(g.len(), "polygon")];
			counts.extend(polygon_counts(g.as_slice()));
			counts
		}
		Geometry::GeometryCollection(g) => vec![count(g.len(), "geometry")],
	};

	let indent = "  ".repeat(depth);
	if counts.is_empty() {
		lines.push(format!("{indent}{}", geometry.type_name()));
	} else {
		lines.push(format!("{indent}{}: {}", geometry.type_name(), counts.join(", ")));
	}

	if let Geometry::GeometryCollection(collection) = geometry {
		for member in collection {
			describe(member, depth + 1, lines);
		}
	}
}

fn polygon_counts(polygons: &[PolygonGeometry]) -> Vec<String> {
	let rings = polygons.iter().map(|p| p.rings().count()).sum();
	let positions = polygons
		.iter()
		.flat_map(PolygonGeometry::rings)
		.map(CompositeGeometryTrait::len)
		.sum();
	vec![count(rings, "ring"), count(positions, "position")]
}

fn count(n: usize, noun: &str) -> String {
	match (n, noun) {
		(1, _) => format!("1 {noun}"),
		(_, "geometry") => format!("{n} geometries"),
		_ => format!("{n} {noun}s"),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tests::run_command;
	use std::fs;

	#[test]
	fn summary() -> Result<()> {
		let geometry = Geometry::parse_str(
			r#"{"type":"GeometryCollection","geometries":[
				{"type":"Point","coordinates":[7,3]},
				{"type":"Polygon","coordinates":[[[0,0],[4,0],[4,4],[0,0]],[[1,1],[2,1],[2,2],[1,1]]]},
				{"type":"GeometryCollection","geometries":[
					{"type":"MultiLineString","coordinates":[[[0,0],[1,1]],[[2,2],[3,3],[4,4]]]}
				]}
			]}"#,
		)?;
		assert_eq!(
			summarize(&geometry),
			vec![
				"GeometryCollection: 3 geometries",
				"  Point",
				"  Polygon: 2 rings, 8 positions",
				"  GeometryCollection: 1 geometry",
				"    MultiLineString: 2 line strings, 5 positions",
			]
		);
		Ok(())
	}

	#[test]
	fn multi_polygon_summary() -> Result<()> {
		let geometry = Geometry::parse_str(
			r#"{"type":"MultiPolygon","coordinates":[[[[0,0],[0,1],[1,1],[0,0]]],[[[5,5],[5,9],[9,9],[5,5]]]]}"#,
		)?;
		assert_eq!(summarize(&geometry), vec!["MultiPolygon: 2 polygons, 2 rings, 8 positions"]);
		Ok(())
	}

	#[test]
	fn local_file() -> Result<()> {
		let dir = tempfile::tempdir()?;
		let input = dir.path().join("input.geojson");
		fs::write(&input, r#"{"type":"LineString","coordinates":[[2,1],[5,3],[13,19]]}"#)?;
		run_command(vec!["geodoc", "probe", "-q", input.to_str().unwrap()])?;
		Ok(())
	}
}
