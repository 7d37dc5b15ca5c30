// Common test utilities and strategies for property-based testing

#![allow(dead_code)]

use proptest::prelude::*;

/// Strategy for generating valid URL schemes.
/// Schemes consist of ASCII letters, '+', '-' and '.', starting with a letter.
/// We generate lowercase schemes to ensure round-trip serialization works.
pub fn scheme_strategy() -> impl Strategy<Value = String> {
	prop::string::string_regex("[a-z][a-z+.-]{0,8}").expect("valid regex")
}

/// Strategy for generating "special" URL schemes as defined by WHATWG.
/// Special schemes (http, https, ws, wss, ftp) always have an authority in the `url` crate.
/// Use this for parity testing with the `url` crate.
pub fn special_scheme_strategy() -> impl Strategy<Value = String> {
	prop::sample::select(vec![
		"http".to_string(),
		"https".to_string(),
		"ws".to_string(),
		"wss".to_string(),
		"ftp".to_string(),
	])
}

/// Strategy for generating valid host/domain names.
/// Labels start with a letter to avoid being treated as IP addresses, and avoid the "xn--"
/// prefix which triggers IDNA validation in the url crate.
pub fn host_strategy() -> impl Strategy<Value = String> {
	let label = "[a-wyz][a-z0-9]{1,10}";
	prop::string::string_regex(&format!("{}(\\.{})?(\\.{})?", label, label, label))
		.expect("valid regex")
}

/// Strategy for generating bracketed IPv6 literals.
pub fn ipv6_host_strategy() -> impl Strategy<Value = String> {
	prop::array::uniform8(any::<u16>()).prop_map(|groups| {
		let groups: Vec<String> = groups.iter().map(|g| format!("{:x}", g)).collect();
		format!("[{}]", groups.join(":"))
	})
}

/// Strategy for generating ports, including 0 which is never a usable port number.
pub fn port_strategy() -> impl Strategy<Value = Option<u16>> {
	prop::option::of(any::<u16>())
}

/// Strategy for generating ports the `url` crate and we agree on.
pub fn nonzero_port_strategy() -> impl Strategy<Value = Option<u16>> {
	prop::option::of(1..=u16::MAX)
}

/// Strategy for generating paths, without the leading '/'.
/// Avoids '.' in paths to prevent path normalization differences with url crate.
pub fn path_strategy() -> impl Strategy<Value = Option<String>> {
	prop::option::of(prop::string::string_regex("[a-zA-Z0-9_~/-]{0,50}").expect("valid regex"))
}

/// Strategy for generating raw query strings.
pub fn query_strategy() -> impl Strategy<Value = Option<String>> {
	prop::option::of(prop::string::string_regex("[a-zA-Z0-9_.~=&-]{1,30}").expect("valid regex"))
}

/// Strategy for generating `key=value` lists with non-empty keys.
pub fn parameter_list_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
	prop::collection::vec(("[a-z]{1,4}", "[a-zA-Z0-9_.~-]{0,6}"), 1..6)
}

/// Strategy for generating valid fragment identifiers.
pub fn fragment_strategy() -> impl Strategy<Value = Option<String>> {
	prop::option::of(prop::string::string_regex("[a-zA-Z0-9_.~-]{1,20}").expect("valid regex"))
}

/// Strategy for generating valid userinfo (username and optional password).
/// Returns (username, password) where username may be empty and password is optional.
pub fn userinfo_strategy() -> impl Strategy<Value = (String, Option<String>)> {
	let username =
		prop::option::of(prop::string::string_regex("[a-zA-Z0-9_-]{1,10}").expect("valid regex"))
			.prop_map(|opt| opt.unwrap_or_default());
	let password =
		prop::option::of(prop::string::string_regex("[a-zA-Z0-9_-]{1,10}").expect("valid regex"));
	(username, password)
}

/// A generated valid URL with all its expected components.
#[derive(Debug, Clone)]
pub struct ValidUrl {
	pub url_string: String,
	pub scheme: String,
	pub username: String,
	pub password: Option<String>,
	pub host: String,
	pub port: Option<u16>,
	pub path: Option<String>,
	pub query: Option<String>,
	pub fragment: Option<String>,
}

impl ValidUrl {
	fn new(
		scheme: String, (username, password): (String, Option<String>), host: String,
		port: Option<u16>, path: Option<String>, query: Option<String>, fragment: Option<String>,
	) -> Self {
		// A query or fragment is only recognized after the path's '/'.
		let path = if query.is_some() || fragment.is_some() {
			Some(path.unwrap_or_default())
		} else {
			path
		};
		let password = if username.is_empty() { None } else { password };

		let mut url_string = format!("{}://", scheme);

		if !username.is_empty() {
			url_string.push_str(&username);
			if let Some(ref pw) = password {
				url_string.push(':');
				url_string.push_str(pw);
			}
			url_string.push('@');
		}

		url_string.push_str(&host);

		if let Some(p) = port {
			url_string.push_str(&format!(":{}", p));
		}

		if let Some(ref p) = path {
			url_string.push('/');
			url_string.push_str(p);
		}

		if let Some(ref q) = query {
			url_string.push('?');
			url_string.push_str(q);
		}

		if let Some(ref f) = fragment {
			url_string.push('#');
			url_string.push_str(f);
		}

		ValidUrl { url_string, scheme, username, password, host, port, path, query, fragment }
	}
}

/// Combined strategy that generates a complete valid URL and its expected components.
pub fn valid_url_strategy() -> impl Strategy<Value = ValidUrl> {
	(
		scheme_strategy(),
		userinfo_strategy(),
		prop_oneof![3 => host_strategy(), 1 => ipv6_host_strategy()],
		port_strategy(),
		path_strategy(),
		query_strategy(),
		fragment_strategy(),
	)
		.prop_map(|(scheme, userinfo, host, port, path, query, fragment)| {
			ValidUrl::new(scheme, userinfo, host, port, path, query, fragment)
		})
}

/// Strategy for generating URL strings with "special" schemes (http, https, etc.).
/// These schemes have consistent parsing behavior between us and the url crate.
/// Use this for parity testing.
pub fn special_url_string_strategy() -> impl Strategy<Value = String> {
	(
		special_scheme_strategy(),
		userinfo_strategy(),
		host_strategy(),
		nonzero_port_strategy(),
		path_strategy(),
		query_strategy(),
		fragment_strategy(),
	)
		.prop_map(|(scheme, userinfo, host, port, path, query, fragment)| {
			ValidUrl::new(scheme, userinfo, host, port, path, query, fragment).url_string
		})
}

/// Percent-encodes every byte of `value`.
pub fn percent_encode_all(value: &str) -> String {
	value.bytes().map(|b| format!("%{:02X}", b)).collect()
}
