use crate::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::PathBuf;

/// URI scheme prefix. One-letter schemes are left out so `C:\games\a.pgn` stays a path.
static RE_SCHEME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([A-Za-z][A-Za-z0-9+.\-]+):").unwrap());

/// Resolves the path of a source game file, given either as a filesystem path
/// or as a `file:` URI (`file:///games/partida.pgn`, `file://localhost/...`, `file:/...`).
///
/// The path is kept as given: `\` stays a filename character on unix.
pub fn resolve_source_path(path_or_uri: &str) -> Result<PathBuf> {
	if path_or_uri.is_empty() {
		return Err(Error::path_invalid(path_or_uri, "empty path"));
	}
	if path_or_uri.contains('\0') {
		return Err(Error::path_invalid(path_or_uri, "path contains a NUL character"));
	}

	let Some(caps) = RE_SCHEME.captures(path_or_uri) else {
		return Ok(PathBuf::from(path_or_uri));
	};

	let scheme = &caps[1];
	if !scheme.eq_ignore_ascii_case("file") {
		return Err(Error::path_invalid(
			path_or_uri,
			format!("unsupported URI scheme '{scheme}' (only 'file' is supported)"),
		));
	}

	let rest = &path_or_uri[caps[0].len()..];
	let path = file_uri_path(path_or_uri, rest)?;

	Ok(PathBuf::from(path))
}

// region:    --- Support

/// Returns the decoded path of a `file:` URI, `rest` being what follows `file:`.
fn file_uri_path(uri: &str, rest: &str) -> Result<String> {
	if rest.contains('?') {
		return Err(Error::path_invalid(uri, "URI has a query component"));
	}
	if rest.contains('#') {
		return Err(Error::path_invalid(uri, "URI has a fragment component"));
	}

	let encoded_path = if let Some(after_slashes) = rest.strip_prefix("//") {
		let (authority, path) = match after_slashes.find('/') {
			Some(idx) => after_slashes.split_at(idx),
			None => (after_slashes, ""),
		};
		if !authority.is_empty() && !authority.eq_ignore_ascii_case("localhost") {
			return Err(Error::path_invalid(
				uri,
				format!("URI authority '{authority}' is not local"),
			));
		}
		path
	} else {
		rest
	};

	if !encoded_path.starts_with('/') {
		return Err(Error::path_invalid(uri, "URI path is not absolute"));
	}

	percent_decode(uri, encoded_path)
}

fn percent_decode(uri: &str, encoded: &str) -> Result<String> {
	let bytes = encoded.as_bytes();
	let mut decoded = Vec::with_capacity(bytes.len());
	let mut idx = 0;

	while idx < bytes.len() {
		if bytes[idx] == b'%' {
			let hex = bytes
				.get(idx + 1..idx + 3)
				.and_then(|h| std::str::from_utf8(h).ok())
				.and_then(|h| u8::from_str_radix(h, 16).ok())
				.ok_or_else(|| Error::path_invalid(uri, format!("malformed percent escape at byte {idx}")))?;
			decoded.push(hex);
			idx += 3;
		} else {
			decoded.push(bytes[idx]);
			idx += 1;
		}
	}

	let decoded =
		String::from_utf8(decoded).map_err(|_| Error::path_invalid(uri, "decoded path is not valid UTF-8"))?;
	if decoded.contains('\0') {
		return Err(Error::path_invalid(uri, "decoded path contains a NUL character"));
	}

	Ok(decoded)
}

// endregion: --- Support

// region:    --- Tests


// endregion: --- Tests
