//! Levenshtein edit distance, used to score source lines against a mangled comment.

/// Returns the minimum number of single-character insertions, deletions, or substitutions
/// needed to turn `a` into `b`.
///
/// Characters are Unicode scalar values, so `"peón"` vs `"peon"` is one edit.
/// Runs in `O(n·m)` time and keeps a single row of `min(n, m) + 1` cells.
pub fn distance(a: &str, b: &str) -> usize {
	let a_chars: Vec<char> = a.chars().collect();
	let b_chars: Vec<char> = b.chars().collect();

	// Row over the shorter string.
	let (long, short) = if a_chars.len() >= b_chars.len() {
		(a_chars, b_chars)
	} else {
		(b_chars, a_chars)
	};

	if short.is_empty() {
		return long.len();
	}

	let mut row: Vec<usize> = (0..=short.len()).collect();

	for (i, lc) in long.iter().enumerate() {
		// diag holds row[j] of the previous iteration (the top-left cell)
		let mut diag = row[0];
		row[0] = i + 1;

		for (j, sc) in short.iter().enumerate() {
			let top = row[j + 1];
			let cost = if lc == sc { 0 } else { 1 };
			row[j + 1] = (top + 1) // deletion
				.min(row[j] + 1) // insertion
				.min(diag + cost); // substitution
			diag = top;
		}
	}

	row[short.len()]
}

// region:    --- Tests


// endregion: --- Tests
