//! JSON documents: the value types, a parser, serializers and an NDJSON reader.

mod parse;
mod read;
mod stringify;
mod types;

pub use parse::{MAX_NESTING_DEPTH, parse_json_iter, parse_json_str};
pub use read::read_ndjson_iter;
pub use stringify::*;
pub use types::{JsonArray, JsonObject, JsonValue};
