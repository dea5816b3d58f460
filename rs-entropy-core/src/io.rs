use std::fs;
use std::io;
use std::path::Path;

/// Reads a text file and returns all its lines as a `Vec<String>`.
///
/// Line endings (`\n` / `\r\n`) are stripped; the tokenizers add
/// their own line separators.
pub(crate) fn read_file<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	let contents = fs::read_to_string(filename)?;
	Ok(contents.lines().map(str::to_owned).collect())
}
