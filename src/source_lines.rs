use crate::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use simple_fs::read_to_string;
use std::path::Path;

static RE_LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n|\r|\n").unwrap());

/// Read-only snapshot of the lines of a source game file, spacing intact.
#[derive(Debug, Clone)]
pub struct SourceLines {
	origin: String,
	lines: Vec<String>,
}

impl SourceLines {
	/// Reads the whole file and splits it into lines.
	pub fn load(path: &Path) -> Result<Self> {
		let origin = path.to_string_lossy();
		let content = read_to_string(path).map_err(|err| Error::source_read(&*origin, err))?;
		Ok(Self::from_content(origin, &content))
	}

	/// Splits on `\r\n`, `\n` or a lone `\r`. A final line break does not add an empty line.
	pub fn from_content(origin: impl Into<String>, content: &str) -> Self {
		let mut lines: Vec<String> = RE_LINE_BREAK.split(content).map(str::to_string).collect();
		if lines.last().is_some_and(String::is_empty) {
			lines.pop();
		}

		Self {
			origin: origin.into(),
			lines,
		}
	}

	/// Where the lines come from (file path for loaded sources).
	pub fn origin(&self) -> &str {
		&self.origin
	}

	pub fn len(&self) -> usize {
		self.lines.len()
	}

	pub fn is_empty(&self) -> bool {
		self.lines.is_empty()
	}

	pub fn get(&self, idx: usize) -> Option<&str> {
		self.lines.get(idx).map(String::as_str)
	}
}

// region:    --- Iterators

impl SourceLines {
	pub fn iter(&self) -> std::slice::Iter<'_, String> {
		self.lines.iter()
	}
}

impl IntoIterator for SourceLines {
	type Item = String;
	type IntoIter = std::vec::IntoIter<Self::Item>;

	fn into_iter(self) -> Self::IntoIter {
		self.lines.into_iter()
	}
}

impl<'a> IntoIterator for &'a SourceLines {
	type Item = &'a String;
	type IntoIter = std::slice::Iter<'a, String>;

	fn into_iter(self) -> Self::IntoIter {
		self.lines.iter()
	}
}

// endregion: --- Iterators

// region:    --- Tests


// endregion: --- Tests
