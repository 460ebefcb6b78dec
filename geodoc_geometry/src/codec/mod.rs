//! Conversion between [`Geometry`](crate::Geometry) values and generic JSON documents.
//!
//! A coordinate geometry is encoded as `{ "coordinates": ..., "type": ... }` and a collection as
//! `{ "geometries": [...], "type": "GeometryCollection" }`. Decoding dispatches on the `"type"`
//! tag through a closed table with one rule per geometry kind.

mod coordinates;
mod decode;
mod encode;
mod geometry_codec;

pub use coordinates::{from_wire, to_wire};
pub(crate) use coordinates::{decode_position, decode_sequence, encode_position, encode_sequence};
pub use decode::*;
pub use encode::*;
pub use geometry_codec::*;
