//! Lexical analysis for Rof source text.
//!
//! The scanner walks the raw characters and groups them into tokens using
//! the language's lexical grammar. It keeps two cursors: `start` marks the
//! beginning of the lexeme being scanned, and `cursor` the character under
//! consideration. A line counter advances on every newline so tokens (and
//! diagnostics) know where they came from.
//!
//! A lexical error never aborts the scan loop. The offending lexeme is
//! recorded and scanning resumes at the current cursor, so one pass over the
//! source surfaces every lexical error it contains. The caller must check
//! the result before handing tokens to the parser.

mod token;

use std::{iter::Peekable, str::CharIndices};

use TokenType::*;
pub(crate) use token::*;

use crate::error::scanner::{ScanError, ScanErrorType};

/// A scanner for Rof source code
pub(crate) struct Scanner<'a> {
	/// User input source code
	source:      &'a str,
	/// User input source code iterator
	source_iter: Peekable<CharIndices<'a>>,
	/// Points at the beginning of the current lexeme
	start:       usize,
	/// Points at the character currently being considered
	cursor:      usize,
	/// Tracks what source line `cursor` is on so we can produce tokens that
	/// know their location.
	line:        usize,
	/// Lexical errors collected over the whole pass.
	errors:      Vec<ScanError>,
}

impl<'a> Scanner<'a> {
	pub fn new(source: &'a str) -> Self {
		let source_iter = source.char_indices().peekable();

		Self { source, source_iter, start: 0, cursor: 0, line: 1, errors: Vec::new() }
	}

	/// Scan all tokens from the source code.
	///
	/// Returns the token vector terminated by [`TokenType::Eof`], or every
	/// lexical error found in the pass.
	pub fn scan_tokens(mut self) -> Result<Vec<Token<'a>>, Vec<ScanError>> {
		let mut tokens = Vec::new();
		while let Some(&(index, _)) = self.source_iter.peek() {
			// We are at the beginning of the next lexeme.
			self.start = index;
			self.cursor = self.start;
			if let Err(e) = self.scan_token(&mut tokens) {
				self.errors.push(e);
			}
		}
		if !self.errors.is_empty() {
			return Err(self.errors);
		}
		tokens.push(Token::new(Eof, "", self.line));
		Ok(tokens)
	}

	/// Scan a single token from the source code
	fn scan_token(&mut self, tokens: &mut Vec<Token<'a>>) -> Result<(), ScanError> {
		let Some(next_char) = self.advance() else {
			return Ok(());
		};
		#[rustfmt::skip]
		let r#type = match next_char {
			'(' => LeftParen,
			')' => RightParen,
			'{' => LeftBrace,
			'}' => RightBrace,
			',' => Comma,
			'.' => Dot,
			'-' => Minus,
			'+' => Plus,
			';' => Semicolon,
			'*' => Star,
			'!' => if self.match_next('=') { BangEqual } else { Bang },
			'=' => if self.match_next('=') { EqualEqual } else { Equal },
			'<' => if self.match_next('=') { LessEqual } else { Less },
			'>' => if self.match_next('=') { GreaterEqual } else { Greater },
			'/' => if self.match_next('/') {
				while self.peek().is_some_and(|c| c != '\n') { self.advance(); }
				Comment
			} else if self.match_next('*') {
				self.block_comment()?
			} else { Slash },
			' ' | '\r' | '\t' => EmptyChar,
			'\n' => { self.line += 1; NewLine }
			'"' => self.string()?,
			c if c.is_ascii_digit() => self.number()?,
			c if c.is_ascii_alphabetic() || c == '_' => self.identifier(),
			_ => return Err(ScanError::new(self.line, ScanErrorType::UnexpectedCharacter(next_char))),
		};

		if !r#type.is_ignored() {
			let lexeme = &self.source[self.start..self.cursor];
			tokens.push(Token::new(r#type, lexeme, self.line));
		}

		Ok(())
	}

	/// Match the next character if it is the expected one
	fn match_next(&mut self, expected: char) -> bool {
		matches!(self.peek(), Some(c) if c == expected && { self.advance(); true })
	}

	/// Advance to the next character
	fn advance(&mut self) -> Option<char> {
		let (i, c) = self.source_iter.next()?;
		self.cursor = i + c.len_utf8();
		Some(c)
	}

	/// Peek the current character
	fn peek(&mut self) -> Option<char> { self.source_iter.peek().map(|&(_, c)| c) }

	/// Peek the second character ahead
	fn peek_second(&mut self) -> Option<char> {
		let mut it = self.source_iter.clone();
		it.next()?;
		it.peek().map(|&(_, c)| c)
	}

	/// Consume a block comment, stopping at the first `*/`.
	///
	/// Nested block comments are not supported: the comment ends at the
	/// first closing pair regardless of any `/*` seen inside it.
	fn block_comment(&mut self) -> Result<TokenType<'a>, ScanError> {
		while let Some(c) = self.peek() {
			if c == '*' && self.peek_second().is_some_and(|c| c == '/') {
				self.advance(); // consume '*'
				self.advance(); // consume '/'
				return Ok(Comment);
			}
			if c == '\n' {
				self.line += 1;
			}
			self.advance();
		}
		Err(ScanError::new(self.line, ScanErrorType::UnterminatedBlockComment))
	}

	/// Scan a string literal; it may span multiple lines.
	fn string(&mut self) -> Result<TokenType<'a>, ScanError> {
		while let Some(c) = self.peek() {
			if c == '"' {
				break;
			}
			if c == '\n' {
				self.line += 1
			}
			self.advance();
		}

		if self.peek().is_none() {
			return Err(ScanError::new(self.line, ScanErrorType::UnterminatedString));
		}
		self.advance(); // The closing "
		let value = &self.source[self.start + 1..self.cursor - 1];
		Ok(StringLiteral(value))
	}

	/// Scan a number literal
	fn number(&mut self) -> Result<TokenType<'a>, ScanError> {
		while self.peek().is_some_and(|c| c.is_ascii_digit()) {
			self.advance();
		}

		// Look for a fractional part.
		if self.peek() == Some('.') && self.peek_second().is_some_and(|c| c.is_ascii_digit()) {
			self.advance(); // consume '.'
			while self.peek().is_some_and(|c| c.is_ascii_digit()) {
				self.advance();
			}
		}

		let s = &self.source[self.start..self.cursor];
		let n = s.parse().map_err(|_| ScanError::new(self.line, ScanErrorType::MalformedNumber))?;
		Ok(NumberLiteral(n))
	}

	/// Scan an identifier or keyword
	fn identifier(&mut self) -> TokenType<'a> {
		while self.peek().is_some_and(|c| c.is_ascii_alphanumeric() || c == '_') {
			self.advance();
		}
		let text = &self.source[self.start..self.cursor];
		TokenType::keyword_or_identifier(text)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn scan(input: &str, ok: bool) {
		let scanner = Scanner::new(input);
		let result = scanner.scan_tokens();
		assert!(result.is_ok() == ok, "scan of {input:?}");
	}

	#[test]
	fn scan_tokens() {
		scan("", true);
		scan("(", true);
		scan("(){}", true);
		scan(" ( ) ", true);
		scan("@", false);
		scan("#", false);
		scan(r#""multi
        line
        string""#, true);
		scan("// comment", true);
		scan("user", true);
		scan("return", true);
	}

	#[test]
	fn scan_operators() {
		scan("!", true);
		scan("!=", true);
		scan("=", true);
		scan("==", true);
		scan("<", true);
		scan("<=", true);
		scan(">", true);
		scan(">=", true);
		scan("-", true);
		scan("+", true);
		scan("*", true);
		scan("/", true);
		scan(";", true);
		scan(",", true);
		scan(".", true);
	}

	#[test]
	fn scan_numbers() {
		scan("0", true);
		scan("42", true);
		scan("3.14", true);
		scan("0.5", true);
		scan("123.456", true);
		// A trailing dot is a Number followed by a Dot token.
		scan("1.", true);
		scan(".5", true);
	}

	#[test]
	fn scan_strings() {
		scan(r#""""#, true);
		scan(r#""hello""#, true);
		scan(r#""hello world""#, true);
		scan(r#""unterminated"#, false);
	}

	#[test]
	fn scan_keywords() {
		scan("and", true);
		scan("class", true);
		scan("else", true);
		scan("false", true);
		scan("for", true);
		scan("fun", true);
		scan("if", true);
		scan("nil", true);
		scan("or", true);
		scan("print", true);
		scan("return", true);
		scan("super", true);
		scan("this", true);
		scan("true", true);
		scan("var", true);
		scan("while", true);
	}

	#[test]
	fn scan_identifiers() {
		scan("x", true);
		scan("_name", true);
		scan("myVariable123", true);
		scan("snake_case", true);
		scan("CamelCase", true);
		scan("and123", true);
	}

	#[test]
	fn scan_comments() {
		scan("// single line comment", true);
		scan("// comment with ()[]{}", true);
		scan("/* block comment */", true);
		scan("/* multi\nline\ncomment */", true);
		scan("/* unterminated", false);
	}

	#[test]
	fn scan_multiple_tokens() {
		let scanner = Scanner::new("1 + 2");
		let tokens = scanner.scan_tokens().unwrap();
		assert_eq!(tokens.len(), 4);
		assert_eq!(tokens[0].r#type, NumberLiteral(1.0));
		assert_eq!(tokens[1].r#type, Plus);
		assert_eq!(tokens[2].r#type, NumberLiteral(2.0));
		assert_eq!(tokens[3].r#type, Eof);
	}

	#[test]
	fn scan_two_char_operators_take_lookahead() {
		let scanner = Scanner::new("<= < == = != !");
		let tokens = scanner.scan_tokens().unwrap();
		let types: Vec<_> = tokens.into_iter().map(|t| t.r#type).collect();
		assert_eq!(types, vec![LessEqual, Less, EqualEqual, Equal, BangEqual, Bang, Eof]);
	}

	#[test]
	fn scan_string_with_newlines_advances_line() {
		let scanner = Scanner::new("\"hello\nworld\" x");
		let tokens = scanner.scan_tokens().unwrap();
		assert_eq!(tokens[0].r#type, StringLiteral("hello\nworld"));
		// The identifier after the literal sits on line 2.
		assert_eq!(tokens[1].line, 2);
	}

	#[test]
	fn scan_collects_every_error() {
		let errors = Scanner::new("@ 1 + 2 #").scan_tokens().unwrap_err();
		assert_eq!(errors.len(), 2);

		let errors = Scanner::new("@\n$").scan_tokens().unwrap_err();
		assert_eq!(errors.len(), 2);
		assert_eq!(errors[0].line(), 1);
		assert_eq!(errors[1].line(), 2);
	}

	#[test]
	fn scan_unterminated_string_reports_and_stops_cleanly() {
		let errors = Scanner::new("var a = \"abc").scan_tokens().unwrap_err();
		assert_eq!(errors.len(), 1);
	}

	#[test]
	fn scan_keyword_tokens_keep_lexeme() {
		let scanner = Scanner::new("var x = nil;");
		let tokens = scanner.scan_tokens().unwrap();
		assert_eq!(tokens[0].r#type, Var);
		assert_eq!(tokens[0].lexeme, "var");
		assert_eq!(tokens[1].r#type, Identifier("x"));
		assert_eq!(tokens[3].r#type, Nil);
	}
}
