//! Byte-level iteration and the parsing helpers built on top of it.

mod basics;
mod iterator;

pub use basics::*;
pub use iterator::*;
