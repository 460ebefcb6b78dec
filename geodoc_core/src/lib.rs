//! Generic document model shared by the geodoc crates.
//!
//! A document is a [`json::JsonValue`]: strings, numbers, booleans, null, and nested
//! arrays and objects. The [`byte_iterator`] module contains the small parsing toolkit the
//! JSON reader is built on.

pub mod byte_iterator;
pub mod json;
