/// A syntax error carrying the offending token's position and lexeme.
#[derive(thiserror::Error, Debug)]
#[error("line {line} at {at}: {type}")]
pub struct ParseError {
	/// The line of the offending token.
	line:   usize,
	/// The offending token's lexeme, or `end` when the error sits on Eof.
	at:     String,
	/// The type of syntax error.
	r#type: ParseErrorType,
}

impl ParseError {
	pub fn new(line: usize, at: String, r#type: ParseErrorType) -> Self { Self { line, at, r#type } }

	pub fn r#type(&self) -> &ParseErrorType { &self.r#type }
}

/// Types of syntax errors.
#[derive(Debug, PartialEq)]
pub enum ParseErrorType {
	/// A token that cannot start an expression.
	ExpectedExpression,
	/// A required token is missing, e.g. `';' after value`.
	ExpectedToken(&'static str),
	/// The left-hand side of `=` is not a bare variable reference.
	InvalidAssignmentTarget,
	/// A call carries more than 255 arguments.
	TooManyArguments,
}

impl std::fmt::Display for ParseErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use ParseErrorType::*;
		match self {
			ExpectedExpression => {
				write!(f, "Expect expression")
			}
			ExpectedToken(what) => {
				write!(f, "Expect {what}")
			}
			InvalidAssignmentTarget => {
				write!(f, "Invalid assignment target")
			}
			TooManyArguments => {
				write!(f, "Cannot have more than 255 arguments")
			}
		}
	}
}
