use super::TestResult;
use simple_fs::SPath;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

pub const SAMPLE_GAME: &str = "tests/data/partida-sample.pgn";

pub fn new_out_dir_path(prefix: &str) -> TestResult<SPath> {
	let now_ms = SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis();
	let dir = PathBuf::from("tests/.out").join(format!("{prefix}_{now_ms}"));
	std::fs::create_dir_all(&dir)?;
	let dir = SPath::try_from(dir)?;

	Ok(dir)
}

/// Writes `content` as `file_name` in a fresh out dir and returns its path.
/// Joined as a std path so `file_name` is kept byte for byte.
pub fn write_game_file(prefix: &str, file_name: &str, content: &str) -> TestResult<String> {
	let dir = new_out_dir_path(prefix)?;
	let file = dir.std_path().join(file_name);
	std::fs::write(&file, content)?;
	let file = file.to_str().ok_or("Non UTF-8 path")?;

	Ok(file.to_string())
}

/// Non-empty lines of the sample game.
pub fn sample_game_lines() -> TestResult<Vec<String>> {
	let content = std::fs::read_to_string(SAMPLE_GAME)?;
	let lines = content.lines().filter(|l| !l.is_empty()).map(str::to_string).collect();

	Ok(lines)
}

/// `file://` URI of a path relative to the crate dir, spaces and non-ASCII percent-encoded.
pub fn file_uri(rel_path: &str) -> TestResult<String> {
	let abs = std::env::current_dir()?.join(rel_path);
	let abs = abs.to_str().ok_or("Non UTF-8 path")?;

	let mut uri = String::from("file://");
	for byte in abs.bytes() {
		if byte.is_ascii_alphanumeric() || b"/-_.~".contains(&byte) {
			uri.push(byte as char);
		} else {
			uri.push_str(&format!("%{byte:02X}"));
		}
	}

	Ok(uri)
}
