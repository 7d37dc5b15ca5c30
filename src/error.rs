// This file is Copyright its original authors, visible in version control history.
//
// This file is licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. You may not use this file except in
// accordance with one or both of these licenses.

use thiserror::Error;

/// Errors that can occur during URL parsing.
///
/// Parsing aborts on the first error it detects, so exactly one of these is reported for any
/// rejected input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ParseError {
	/// Neither a `:` nor a `/` was found, so the scheme cannot be delimited.
	#[error("no url character")]
	NoUrlCharacter,
	/// The scheme is empty or contains a character other than an ASCII letter, `+`, `-` or `.`.
	#[error("invalid scheme name")]
	InvalidSchemeName,
	/// The scheme is not followed by `//`.
	#[error("no double slash")]
	NoDoubleSlash,
	/// A userinfo component was started but not terminated by `@`.
	#[error("no at sign")]
	NoAtSign,
	/// Input remains after the authority but does not start with `/`.
	#[error("no slash")]
	NoSlash,
	/// A `%` escape in a query value is not followed by two hex digits, or the decoded bytes
	/// are not valid UTF-8.
	#[error("invalid url encoding")]
	InvalidUrlEncoding,
}
