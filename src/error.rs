use derive_more::{Display, From};

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Display, From)]
pub enum Error {
	#[from(String, &String, &str)]
	Custom(String),

	// -- Source
	#[display("Invalid source path '{path}': {cause}")]
	PathInvalid { path: String, cause: String },

	#[display("Cannot read source file '{path}': {cause}")]
	SourceRead { path: String, cause: simple_fs::Error },

	#[display("No candidate lines in '{origin}' (empty source)")]
	NoCandidateLines { origin: String },
}

// region:    --- Constructors

impl Error {
	pub fn path_invalid(path: impl Into<String>, cause: impl Into<String>) -> Self {
		Self::PathInvalid {
			path: path.into(),
			cause: cause.into(),
		}
	}

	pub fn source_read(path: impl Into<String>, cause: simple_fs::Error) -> Self {
		Self::SourceRead {
			path: path.into(),
			cause,
		}
	}

	pub fn no_candidate_lines(origin: impl Into<String>) -> Self {
		Self::NoCandidateLines { origin: origin.into() }
	}
}

// endregion: --- Constructors

// region:    --- Error Boilerplate

impl std::error::Error for Error {}

// endregion: --- Error Boilerplate
