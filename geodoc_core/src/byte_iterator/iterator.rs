//! A byte iterator with one byte of lookahead.
//!
//! When debug mode is enabled, the iterator remembers the last few consumed bytes so that
//! parse errors can show the text right before the failure.

use anyhow::{Error, Result, anyhow};
use std::collections::VecDeque;

const DEBUG_HISTORY_SIZE: usize = 16;

/// Iterates over the bytes of a document while keeping the next byte peeked.
pub struct ByteIterator<'a> {
	source: Box<dyn Iterator<Item = u8> + 'a>,
	peeked_byte: Option<u8>,
	position: usize,
	is_debug_enabled: bool,
	history: VecDeque<u8>,
}

impl<'a> ByteIterator<'a> {
	/// Creates a new `ByteIterator` from any byte iterator.
	///
	/// * `debug` - keep a short history of consumed bytes for error messages.
	pub fn from_iterator(iter: impl Iterator<Item = u8> + 'a, debug: bool) -> Self {
		let mut source: Box<dyn Iterator<Item = u8> + 'a> = Box::new(iter);
		let peeked_byte = source.next();
		ByteIterator {
			source,
			peeked_byte,
			position: 0,
			is_debug_enabled: debug,
			history: VecDeque::with_capacity(DEBUG_HISTORY_SIZE),
		}
	}

	/// Creates a new `ByteIterator` over the bytes of a string slice.
	pub fn from_text(text: &'a str, debug: bool) -> Self {
		Self::from_iterator(text.bytes(), debug)
	}

	/// Builds an error that names the current byte position and, in debug mode, the
	/// recently consumed bytes.
	#[must_use]
	pub fn format_error(&self, msg: &str) -> Error {
		if self.is_debug_enabled {
			let bytes: Vec<u8> = self.history.iter().copied().collect();
			let mut snapshot = String::from_utf8_lossy(&bytes).into_owned();
			if self.peeked_byte.is_none() {
				snapshot.push_str("<EOF>");
			}
			anyhow!("{msg} at position {}: {snapshot}", self.position)
		} else {
			anyhow!("{msg} at position {}", self.position)
		}
	}

	/// Number of bytes consumed so far.
	#[inline]
	#[must_use]
	pub fn position(&self) -> usize {
		self.position
	}

	#[inline]
	#[must_use]
	pub fn peek(&self) -> Option<u8> {
		self.peeked_byte
	}

	/// Drops the peeked byte and loads the next one.
	#[inline]
	pub fn advance(&mut self) {
		if let Some(byte) = self.peeked_byte {
			if self.is_debug_enabled {
				if self.history.len() == DEBUG_HISTORY_SIZE {
					self.history.pop_front();
				}
				self.history.push_back(byte);
			}
			self.position += 1;
		}
		self.peeked_byte = self.source.next();
	}

	/// Returns the peeked byte and advances.
	#[inline]
	pub fn consume(&mut self) -> Option<u8> {
		let current_byte = self.peeked_byte;
		self.advance();
		current_byte
	}

	/// Like [`consume`](Self::consume), but running out of input is an error.
	#[inline]
	pub fn expect_next_byte(&mut self) -> Result<u8> {
		match self.peeked_byte {
			Some(byte) => {
				self.advance();
				Ok(byte)
			}
			None => Err(self.format_error("unexpected end")),
		}
	}

	/// Like [`peek`](Self::peek), but running out of input is an error.
	#[inline]
	pub fn expect_peeked_byte(&self) -> Result<u8> {
		self.peeked_byte.ok_or_else(|| self.format_error("unexpected end"))
	}

	pub fn skip_whitespace(&mut self) {
		while let Some(byte) = self.peek() {
			if !byte.is_ascii_whitespace() {
				break;
			}
			self.advance();
		}
	}

	/// Fails unless only whitespace is left.
	pub fn expect_end(&mut self) -> Result<()> {
		self.skip_whitespace();
		if self.peeked_byte.is_some() {
			return Err(self.format_error("unexpected trailing characters"));
		}
		Ok(())
	}
}
