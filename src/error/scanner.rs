/// A lexical error with the line it was detected on.
///
/// The scanner records one of these per bad lexeme and keeps scanning, so a
/// single pass reports every lexical error in the source.
#[derive(thiserror::Error, Debug)]
#[error("line {line}: {type}")]
pub struct ScanError {
	/// The line number where the error occurred.
	line:   usize,
	/// The type of scanning error.
	r#type: ScanErrorType,
}

impl ScanError {
	pub fn new(line: usize, r#type: ScanErrorType) -> Self { Self { line, r#type } }

	pub fn line(&self) -> usize { self.line }
}

/// Types of scanning errors.
#[derive(Debug, PartialEq)]
pub enum ScanErrorType {
	/// A character that starts no lexeme.
	UnexpectedCharacter(char),
	/// A string literal missing its closing `"`.
	UnterminatedString,
	/// A block comment missing its closing `*/`.
	UnterminatedBlockComment,
	/// A numeric lexeme that does not parse as a 64-bit float.
	MalformedNumber,
}

impl std::fmt::Display for ScanErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use ScanErrorType::*;
		match self {
			UnexpectedCharacter(c) => {
				write!(f, "Unexpected character '{c}'")
			}
			UnterminatedString => {
				write!(f, "Unterminated string")
			}
			UnterminatedBlockComment => {
				write!(f, "Unterminated block comment")
			}
			MalformedNumber => {
				write!(f, "Malformed number literal")
			}
		}
	}
}
