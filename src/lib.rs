// This file is Copyright its original authors, visible in version control history.
//
// This file is licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. You may not use this file except in
// accordance with one or both of these licenses.

#![crate_name = "urlparts"]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! A small library splitting URLs into their components.
//!
//! A URL of the form `scheme://[user[:password]@]host[:port][/path][?query][#fragment]` is
//! scanned once, left to right. Components are copied out as they are found: no normalization
//! is applied beyond lowercasing the scheme, and only query values are percent-decoded.
//!
//! ```
//! use urlparts::Url;
//!
//! let url = Url::parse("http://www.example.com:80/path?q=1&r=2#frag").unwrap();
//! assert_eq!(url.scheme(), "http");
//! assert_eq!(url.host(), "www.example.com");
//! assert_eq!(url.port_number(), Some(80));
//! assert_eq!(url.path(), Some("path"));
//! assert_eq!(url.parameter("r"), Some("2"));
//! assert_eq!(url.fragment(), Some("frag"));
//! ```

mod error;
mod parser;
mod query;

pub use error::ParseError;

use std::collections::HashMap;
use std::str::FromStr;

/// A parsed URL.
///
/// Only successfully parsed URLs exist as values of this type; the components are owned copies
/// of the input and never change after parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Url {
	serialization: String,
	scheme: String,
	username: String,
	password: Option<String>,
	host: String,
	port: Option<String>,
	path: Option<String>,
	query: Option<String>,
	fragment: Option<String>,
	parameters: HashMap<String, String>,
}

impl Url {
	/// Parses a URL string and returns a `Url` instance.
	///
	/// The scheme ends at the first `:`. If a `/` comes before any `:`, the character right
	/// before that `/` ends the scheme instead, so `"http//host"` parses with scheme `htt`.
	pub fn parse(url_str: &str) -> Result<Self, ParseError> {
		parser::parse(url_str)
	}

	/// Returns the scheme of the URL (e.g., "http", "https"), lowercased.
	pub fn scheme(&self) -> &str {
		&self.scheme
	}

	/// Returns the user name from the URL.
	///
	/// Returns an empty string if no userinfo was specified.
	pub fn username(&self) -> &str {
		&self.username
	}

	/// Returns the password from the URL, if a `:` followed the user name.
	pub fn password(&self) -> Option<&str> {
		self.password.as_deref()
	}

	/// Returns the host exactly as written, including the brackets of an IPv6 literal.
	pub fn host(&self) -> &str {
		&self.host
	}

	/// Returns the host with the brackets of an IPv6 literal removed.
	///
	/// Hosts that are not enclosed in `[...]` are returned unchanged.
	pub fn host_unbracketed(&self) -> &str {
		self.host.strip_prefix('[').and_then(|h| h.strip_suffix(']')).unwrap_or(&self.host)
	}

	/// Returns the port text as written, or an empty string if no port was specified.
	///
	/// The text is not validated; see [`Url::port_number`].
	pub fn port(&self) -> &str {
		self.port.as_deref().unwrap_or("")
	}

	/// Returns the port as a number if it lies in `1..=65535`.
	///
	/// Like C's `atoi`, only the leading decimal digits are considered, so `"80abc"` yields 80
	/// while `"abc"` counts as 0 and yields `None`.
	pub fn port_number(&self) -> Option<u16> {
		u16::try_from(leading_int(self.port())).ok().filter(|port| *port != 0)
	}

	/// Returns the path of the URL, without its leading `/`.
	///
	/// Returns `None` if the URL ends after the authority, and `Some("")` for a lone `/`.
	pub fn path(&self) -> Option<&str> {
		self.path.as_deref()
	}

	/// Returns an iterator over the path segments.
	///
	/// Path segments are the portions between `/` characters. Empty segments are included. The
	/// iterator is empty when there is no path.
	pub fn path_segments(&self) -> impl Iterator<Item = &str> {
		self.path.as_deref().into_iter().flat_map(|path| path.split('/'))
	}

	/// Returns the query string of the URL, if present.
	///
	/// The returned string does not include the leading `?`.
	pub fn query(&self) -> Option<&str> {
		self.query.as_deref()
	}

	/// Returns an iterator over the query string's raw key-value pairs, in order.
	///
	/// Neither keys nor values are decoded, and repeated keys are all yielded. If a pair has no
	/// `=`, the value will be an empty string.
	pub fn query_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
		self.query.as_deref().into_iter().flat_map(query::split_pairs)
	}

	/// Returns the query parameters.
	///
	/// Values are decoded (`+` as space, `%XY` escapes), keys are kept as written. When a key
	/// occurs more than once the last value wins. Empty if there is no query.
	pub fn parameters(&self) -> &HashMap<String, String> {
		&self.parameters
	}

	/// Returns the decoded value of the query parameter `key`.
	pub fn parameter(&self, key: &str) -> Option<&str> {
		self.parameters.get(key).map(String::as_str)
	}

	/// Returns the fragment identifier of the URL, if present.
	///
	/// The returned string does not include the leading `#`.
	pub fn fragment(&self) -> Option<&str> {
		self.fragment.as_deref()
	}

	/// Returns the serialized URL as a string slice.
	///
	/// This is the input with the scheme lowercased and terminated by `:`. Parsing it again
	/// yields an equal `Url`.
	pub fn as_str(&self) -> &str {
		&self.serialization
	}
}

/// Reads an integer the way C's `atoi` does: leading whitespace, an optional sign, then as many
/// decimal digits as there are. Anything else reads as 0.
fn leading_int(text: &str) -> i64 {
	let text = text.trim_start_matches([' ', '\t', '\n', '\x0b', '\x0c', '\r']);
	let (negative, digits) = match text.as_bytes().first() {
		Some(b'-') => (true, &text[1..]),
		Some(b'+') => (false, &text[1..]),
		_ => (false, text),
	};
	let value = digits
		.bytes()
		.take_while(u8::is_ascii_digit)
		.fold(0i64, |acc, d| acc.saturating_mul(10).saturating_add(i64::from(d - b'0')));
	if negative {
		-value
	} else {
		value
	}
}

impl std::fmt::Display for Url {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Url {
	type Err = ParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Url::parse(s)
	}
}

impl TryFrom<&str> for Url {
	type Error = ParseError;

	fn try_from(s: &str) -> Result<Self, Self::Error> {
		Url::parse(s)
	}
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl serde::Serialize for Url {
	fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(self.as_str())
	}
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl<'de> serde::Deserialize<'de> for Url {
	fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let s = <String as serde::Deserialize>::deserialize(deserializer)?;
		Url::parse(&s).map_err(serde::de::Error::custom)
	}
}
