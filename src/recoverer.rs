use crate::{Error, Result, SourceLines, levenshtein, resolve_source_path};
use tracing::{debug, trace};

/// Closing symbol of a PGN brace comment.
pub const COMMENT_CLOSE: char = '}';

#[derive(Debug, Clone)]
pub struct RecoverOptions {
	closing_delimiter: char,
}

impl Default for RecoverOptions {
	fn default() -> Self {
		Self {
			closing_delimiter: COMMENT_CLOSE,
		}
	}
}

impl RecoverOptions {
	pub fn with_closing_delimiter(mut self, closing_delimiter: char) -> Self {
		self.closing_delimiter = closing_delimiter;
		self
	}

	pub fn closing_delimiter(&self) -> char {
		self.closing_delimiter
	}
}

/// Outcome of a recovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recovery {
	/// The comment with its spacing recovered (a source line, possibly truncated).
	pub text: String,
	/// Index (0-based) of the source line the comment was taken from.
	pub line_index: usize,
	/// Edit distance between the mangled comment and the raw source line.
	pub distance: usize,
	/// Whether `text` without spaces equals the mangled comment.
	pub exact_match: bool,
	/// Whether the line was cut after its last closing delimiter.
	pub trimmed: bool,
}

/// Recovers the spaces of `mangled_comment`, a comment stripped of its spaces by the PGN parser,
/// from the game file at `file_path_or_uri` (filesystem path or `file:` URI).
///
/// Best effort: returns the closest source line, cut after its last `}` when the line
/// carries more than the comment.
pub fn recover_spaces(mangled_comment: &str, file_path_or_uri: &str) -> Result<String> {
	let recovery = recover_spaces_with(mangled_comment, file_path_or_uri, &RecoverOptions::default())?;
	Ok(recovery.text)
}

pub fn recover_spaces_with(
	mangled_comment: &str,
	file_path_or_uri: &str,
	options: &RecoverOptions,
) -> Result<Recovery> {
	let path = resolve_source_path(file_path_or_uri)?;
	let lines = SourceLines::load(&path)?;
	recover_spaces_in_lines(mangled_comment, &lines, options)
}

/// Same as [`recover_spaces_with`] for lines already in memory.
pub fn recover_spaces_in_lines(
	mangled_comment: &str,
	lines: &SourceLines,
	options: &RecoverOptions,
) -> Result<Recovery> {
	let (line_index, initial_guess, distance) =
		find_most_similar_line(mangled_comment, lines).ok_or_else(|| Error::no_candidate_lines(lines.origin()))?;

	let guess = make_guess(mangled_comment, initial_guess, options.closing_delimiter);
	debug!(origin = lines.origin(), line_index, "Retrieved comment is:\n{}", guess.text);

	Ok(Recovery {
		text: guess.text,
		line_index,
		distance,
		exact_match: guess.exact_match,
		trimmed: guess.trimmed,
	})
}

// region:    --- Support

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
	pub text: String,
	pub exact_match: bool,
	pub trimmed: bool,
}

/// Index, content and distance of the line closest to `mangled_comment`, `None` when there are no lines.
/// On equal distances the first line wins.
pub fn find_most_similar_line<'a>(
	mangled_comment: &str,
	lines: &'a SourceLines,
) -> Option<(usize, &'a str, usize)> {
	let mut best: Option<(usize, &'a str, usize)> = None;

	for (idx, line) in lines.iter().enumerate() {
		let distance = levenshtein::distance(mangled_comment, line);
		trace!(idx, distance, "line distance");

		if best.is_none_or(|(_, _, min)| distance < min) {
			best = Some((idx, line.as_str(), distance));
		}
	}

	trace!(line_index = ?best.map(|(idx, _, _)| idx), "most similar line");
	best
}

/// Keeps `initial_guess` when it matches the comment once spaces are ignored,
/// otherwise cuts it right after its last `closing_delimiter` (if any).
pub fn make_guess(mangled_comment: &str, initial_guess: &str, closing_delimiter: char) -> Guess {
	let mut text = initial_guess;
	let mut exact_match = same_without_spaces(mangled_comment, text);
	let mut trimmed = false;
	trace!(exact_match, "same before trim?");

	if !exact_match && let Some(last_idx) = text.rfind(closing_delimiter) {
		text = &text[..last_idx + closing_delimiter.len_utf8()];
		trimmed = true;
		exact_match = same_without_spaces(mangled_comment, text);
	}
	trace!(exact_match, trimmed, "same after trim?");

	Guess {
		text: text.to_string(),
		exact_match,
		trimmed,
	}
}

/// The parser drops `' '` only, so only `' '` is ignored here.
fn same_without_spaces(a: &str, b: &str) -> bool {
	a.chars().filter(|c| *c != ' ').eq(b.chars().filter(|c| *c != ' '))
}

// endregion: --- Support

// region:    --- Tests


// endregion: --- Tests
