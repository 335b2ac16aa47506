// region:    --- Modules

mod error;
mod levenshtein;
mod recoverer;
mod source_lines;
mod source_path;

pub use error::*;
pub use levenshtein::distance as levenshtein_distance;
pub use recoverer::{
	COMMENT_CLOSE, RecoverOptions, Recovery, recover_spaces, recover_spaces_in_lines, recover_spaces_with,
};
pub use source_lines::*;
pub use source_path::*;

// endregion: --- Modules

// region:    --- Test Support

#[cfg(feature = "test-support")]
pub mod for_test {
	pub use crate::recoverer::{Guess, find_most_similar_line, make_guess};
}

// endregion: --- Test Support
