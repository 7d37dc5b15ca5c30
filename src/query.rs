// This file is Copyright its original authors, visible in version control history.
//
// This file is licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. You may not use this file except in
// accordance with one or both of these licenses.

//! Query string segmentation and value decoding.

use std::collections::HashMap;

use crate::ParseError;

/// Splits a query into raw `(key, value)` pairs in source order.
///
/// Segments are separated by `&`. An empty segment between two separators yields `("", "")`,
/// but a trailing empty segment (including an entirely empty query) yields nothing. Each
/// segment is split on its first `=`; a segment without `=` has an empty value.
pub(crate) fn split_pairs(query: &str) -> impl Iterator<Item = (&str, &str)> {
	query.split_terminator('&').map(|segment| segment.split_once('=').unwrap_or((segment, "")))
}

/// Builds the parameter map of a query, decoding values but not keys.
///
/// A key seen more than once keeps the value of its last occurrence.
pub(crate) fn parameters(query: &str) -> Result<HashMap<String, String>, ParseError> {
	let mut params = HashMap::new();
	for (key, value) in split_pairs(query) {
		params.insert(key.to_string(), decode_value(value)?);
	}
	Ok(params)
}

/// Decodes a query value: `+` becomes a space and `%XY` becomes the byte `0xXY`.
pub(crate) fn decode_value(value: &str) -> Result<String, ParseError> {
	let bytes = value.as_bytes();
	let mut out = Vec::with_capacity(bytes.len());
	let mut i = 0;
	while i < bytes.len() {
		match bytes[i] {
			b'%' => {
				let hi = bytes.get(i + 1).copied().and_then(from_hex);
				let lo = bytes.get(i + 2).copied().and_then(from_hex);
				match (hi, lo) {
					(Some(hi), Some(lo)) => out.push((hi << 4) | lo),
					_ => return Err(ParseError::InvalidUrlEncoding),
				}
				i += 3;
			},
			b'+' => {
				out.push(b' ');
				i += 1;
			},
			b => {
				out.push(b);
				i += 1;
			},
		}
	}
	String::from_utf8(out).map_err(|_| ParseError::InvalidUrlEncoding)
}

fn from_hex(b: u8) -> Option<u8> {
	match b {
		b'0'..=b'9' => Some(b - b'0'),
		b'a'..=b'f' => Some(b - b'a' + 10),
		b'A'..=b'F' => Some(b - b'A' + 10),
		_ => None,
	}
}
