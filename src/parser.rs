// This file is Copyright its original authors, visible in version control history.
//
// This file is licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. You may not use this file except in
// accordance with one or both of these licenses.

//! The single left-to-right scan splitting a URL into its components.
//!
//! The scan runs in three stages sharing one [`Cursor`]: the scheme, the authority and finally
//! the path with its query and fragment. Every stage only ever moves the cursor forward and
//! aborts the whole parse on its first error.

use tracing::{debug, trace};

use crate::{query, ParseError, Url};

/// Forward-only position over the input.
///
/// All delimiters are ASCII, so every position the cursor stops at is a char boundary.
struct Cursor<'a> {
	input: &'a str,
	pos: usize,
}

impl<'a> Cursor<'a> {
	fn new(input: &'a str) -> Self {
		Cursor { input, pos: 0 }
	}

	fn peek(&self) -> Option<u8> {
		self.input.as_bytes().get(self.pos).copied()
	}

	fn is_at_end(&self) -> bool {
		self.pos >= self.input.len()
	}

	/// Consumes `byte` if it is next.
	fn eat(&mut self, byte: u8) -> bool {
		if self.peek() == Some(byte) {
			self.pos += 1;
			true
		} else {
			false
		}
	}

	/// Consumes up to, but excluding, the first byte in `delims` or the end of input.
	fn take_until(&mut self, delims: &[u8]) -> &'a str {
		let start = self.pos;
		let len = self.rest().bytes().position(|b| delims.contains(&b)).unwrap_or(self.rest().len());
		self.pos += len;
		&self.input[start..self.pos]
	}

	fn take_rest(&mut self) -> &'a str {
		let rest = self.rest();
		self.pos = self.input.len();
		rest
	}

	fn rest(&self) -> &'a str {
		&self.input[self.pos..]
	}

	fn since(&self, start: usize) -> &'a str {
		&self.input[start..self.pos]
	}
}

struct Authority<'a> {
	username: &'a str,
	password: Option<&'a str>,
	host: &'a str,
	port: Option<&'a str>,
}

struct Tail<'a> {
	path: &'a str,
	query: Option<&'a str>,
	fragment: Option<&'a str>,
}

/// Parses `input` into a [`Url`].
pub(crate) fn parse(input: &str) -> Result<Url, ParseError> {
	trace!(len = input.len(), "parsing url");
	let mut cursor = Cursor::new(input);

	let scheme = scheme(&mut cursor).map_err(|e| aborted("scheme", &cursor, e))?;
	let scheme_end = cursor.pos;
	let authority = authority(&mut cursor).map_err(|e| aborted("authority", &cursor, e))?;

	let mut url = Url {
		serialization: format!("{}:{}", scheme, &input[scheme_end..]),
		scheme,
		username: authority.username.to_string(),
		password: authority.password.map(str::to_string),
		host: authority.host.to_string(),
		port: authority.port.map(str::to_string),
		path: None,
		query: None,
		fragment: None,
		parameters: Default::default(),
	};

	if cursor.is_at_end() {
		trace!(scheme = %url.scheme, host = %url.host, "parsed url");
		return Ok(url);
	}

	let tail = path_query_fragment(&mut cursor).map_err(|e| aborted("path", &cursor, e))?;
	if let Some(query) = tail.query {
		url.parameters = query::parameters(query).map_err(|e| aborted("query", &cursor, e))?;
	}
	url.path = Some(tail.path.to_string());
	url.query = tail.query.map(str::to_string);
	url.fragment = tail.fragment.map(str::to_string);

	trace!(scheme = %url.scheme, host = %url.host, "parsed url");
	Ok(url)
}

fn aborted(stage: &'static str, cursor: &Cursor<'_>, error: ParseError) -> ParseError {
	debug!(stage, offset = cursor.pos, %error, "url parse aborted");
	error
}

/// Reads and validates `scheme:`, leaving the cursor just past the terminator.
fn scheme(cursor: &mut Cursor<'_>) -> Result<String, ParseError> {
	let bytes = cursor.rest().as_bytes();
	let colon = bytes.iter().position(|&b| b == b':');
	let slash = bytes.iter().position(|&b| b == b'/');

	let end = match (colon, slash) {
		(Some(colon), Some(slash)) if colon < slash => colon,
		(Some(colon), None) => colon,
		// No `:` ahead of the first `/`: the byte right before that `/` is taken as the
		// terminator and skipped, whatever it is. Where this rule came from is unknown, it is
		// kept as is. A leading `/` leaves an empty scheme.
		(_, Some(slash)) => slash.saturating_sub(1),
		(None, None) => return Err(ParseError::NoUrlCharacter),
	};

	let candidate = &bytes[..end];
	if candidate.is_empty() || !candidate.iter().all(|&b| is_scheme_byte(b)) {
		return Err(ParseError::InvalidSchemeName);
	}

	// Validated as ASCII, so both `end` and `end + 1` are char boundaries.
	let start = cursor.pos;
	cursor.pos += end;
	let scheme = cursor.since(start).to_ascii_lowercase();
	cursor.pos += 1;
	Ok(scheme)
}

fn is_scheme_byte(b: u8) -> bool {
	b.is_ascii_alphabetic() || b == b'+' || b == b'-' || b == b'.'
}

/// Reads `//[userinfo@]host[:port]`.
fn authority<'a>(cursor: &mut Cursor<'a>) -> Result<Authority<'a>, ParseError> {
	if !cursor.eat(b'/') || !cursor.eat(b'/') {
		return Err(ParseError::NoDoubleSlash);
	}

	// Userinfo is present iff an `@` shows up before any `/`.
	let has_userinfo = cursor.rest().bytes().find(|&b| b == b'@' || b == b'/') == Some(b'@');

	let (username, password) = if has_userinfo {
		let username = cursor.take_until(b":@");
		let password = if cursor.eat(b':') { Some(cursor.take_until(b"@")) } else { None };
		if !cursor.eat(b'@') {
			return Err(ParseError::NoAtSign);
		}
		(username, password)
	} else {
		("", None)
	};

	let host = if cursor.peek() == Some(b'[') {
		// IPv6 literal, brackets included. An unterminated literal runs to the end of input.
		let start = cursor.pos;
		cursor.take_until(b"]");
		cursor.eat(b']');
		cursor.since(start)
	} else {
		cursor.take_until(b":/")
	};

	let port = if cursor.eat(b':') { Some(cursor.take_until(b"/")) } else { None };

	Ok(Authority { username, password, host, port })
}

/// Reads `/path[?query][#fragment]`.
fn path_query_fragment<'a>(cursor: &mut Cursor<'a>) -> Result<Tail<'a>, ParseError> {
	if !cursor.eat(b'/') {
		return Err(ParseError::NoSlash);
	}
	let path = cursor.take_until(b"?#");
	let query = if cursor.eat(b'?') { Some(cursor.take_until(b"#")) } else { None };
	let fragment = if cursor.eat(b'#') { Some(cursor.take_rest()) } else { None };
	Ok(Tail { path, query, fragment })
}
