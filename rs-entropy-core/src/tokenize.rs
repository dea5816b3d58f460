//! Line-based tokenizers feeding the model.
//!
//! Both tokenizers read their input as lines and yield tokens lazily:
//! - `CharTokens` yields every character, one line at a time, with
//!   each line trimmed and lower-cased, then closed by a single space
//! - `WordTokens` yields every maximal run of letters or apostrophes
//!   as an owned lower-cased `String`
//!
//! The model only requires `IntoIterator`, so callers are free to
//! plug in their own token sources.

use std::io;
use std::path::Path;

use regex::Regex;

use crate::io::read_file;

/// Maximal runs of letters or apostrophes count as words; anything
/// else separates them.
const WORD_PATTERN: &str = r"[a-zA-Z']+";

/// Opens a text file as a stream of character tokens.
///
/// # Errors
/// Returns an error if the file cannot be read.
pub fn chars<P: AsRef<Path>>(filename: P) -> io::Result<CharTokens> {
	Ok(CharTokens::from_lines(read_file(filename)?))
}

/// Opens a text file as a stream of word tokens.
///
/// # Errors
/// Returns an error if the file cannot be read.
pub fn words<P: AsRef<Path>>(filename: P) -> io::Result<WordTokens> {
	Ok(WordTokens::from_lines(read_file(filename)?))
}

/// Character tokenizer.
///
/// Each line is trimmed and lower-cased, then given a single
/// trailing space before its characters are yielded, so line breaks
/// behave like word boundaries. An empty line yields one space.
pub struct CharTokens {
	/// Remaining input lines.
	lines: std::vec::IntoIter<String>,
	/// Characters of the line currently being consumed.
	current: std::vec::IntoIter<char>,
}

impl CharTokens {
	/// Tokenizes in-memory text, split on line breaks.
	pub fn from_text(text: &str) -> Self {
		Self::from_lines(text.lines().map(str::to_owned).collect())
	}

	/// Tokenizes a pre-split list of lines.
	pub fn from_lines(lines: Vec<String>) -> Self {
		Self {
			lines: lines.into_iter(),
			current: Vec::new().into_iter(),
		}
	}

	fn prepare(line: &str) -> std::vec::IntoIter<char> {
		let mut cleaned = line.trim().to_lowercase();
		cleaned.push(' ');
		cleaned.chars().collect::<Vec<char>>().into_iter()
	}
}

impl Iterator for CharTokens {
	type Item = char;

	fn next(&mut self) -> Option<char> {
		loop {
			if let Some(token) = self.current.next() {
				return Some(token);
			}
			let line = self.lines.next()?;
			self.current = Self::prepare(&line);
		}
	}
}

/// Word tokenizer.
///
/// Each line is lower-cased and scanned for maximal `[a-zA-Z']+`
/// runs. Apostrophes keep contractions in one piece; digits and
/// punctuation separate words.
pub struct WordTokens {
	/// Remaining input lines.
	lines: std::vec::IntoIter<String>,
	/// Words of the line currently being consumed.
	current: std::vec::IntoIter<String>,
	/// Compiled word pattern, built once per tokenizer.
	pattern: Regex,
}

impl WordTokens {
	/// Tokenizes in-memory text, split on line breaks.
	pub fn from_text(text: &str) -> Self {
		Self::from_lines(text.lines().map(str::to_owned).collect())
	}

	/// Tokenizes a pre-split list of lines.
	pub fn from_lines(lines: Vec<String>) -> Self {
		Self {
			lines: lines.into_iter(),
			current: Vec::new().into_iter(),
			pattern: Regex::new(WORD_PATTERN).expect("word pattern must compile"),
		}
	}

	fn prepare(&self, line: &str) -> std::vec::IntoIter<String> {
		self.pattern
			.find_iter(&line.to_lowercase())
			.map(|word| word.as_str().to_owned())
			.collect::<Vec<String>>()
			.into_iter()
	}
}

impl Iterator for WordTokens {
	type Item = String;

	fn next(&mut self) -> Option<String> {
		loop {
			if let Some(token) = self.current.next() {
				return Some(token);
			}
			let line = self.lines.next()?;
			self.current = self.prepare(&line);
		}
	}
}
