//! # The Rof front end
//!
//! Rof is a small dynamically-typed scripting language. This crate is the
//! front half of its implementation: source text goes in, program behavior
//! comes out, through four stages that each run to completion before the
//! next begins.
//!
//! ## Scanning
//!
//! The scanner converts raw characters into tokens — punctuation, operators,
//! literals, keywords and identifiers. Whitespace and comments are consumed
//! and never reach the token vector. `var average = (min + max) / 2;`
//! becomes `["var", "average", "=", "(", "min", "+", "max", ")", "/", "2",
//! ";"]`, each token knowing its kind, lexeme and line.
//!
//! ## Parsing
//!
//! The recursive-descent parser builds an abstract syntax tree from the
//! tokens, one method per grammar rule, and owns syntax-error detection and
//! panic-mode recovery: after an error it discards tokens to the next
//! statement boundary and keeps going, so one pass reports every
//! independent mistake.
//!
//! ``` markdown
//! average (Statement::VarDeclaration)
//! └── / (Expression::Binary)
//!     ├── + (Expression::Binary)
//!     │   ├── min (Expression::Variable)
//!     │   └── max (Expression::Variable)
//!     └── 2 (Expression::Literal)
//! ```
//!
//! ## Evaluation
//!
//! The interpreter walks the tree directly — no bytecode, no IR. Statements
//! execute against a chain of environments that mirrors lexical block
//! nesting; expressions evaluate to dynamically-typed values (`nil`,
//! booleans, 64-bit floats, strings) with the operator semantics checked at
//! runtime.
//!
//! Each stage either succeeds or hands its collected diagnostics back to
//! the [`Rofer`] driver; a later stage never sees the output of a failed
//! earlier one.

pub mod cli;
mod environment;
mod error;
mod interpreter;
mod parser;
mod rofer;
mod scanner;
mod statement;

pub use error::{
	RofError,
	interpreter::RuntimeError,
	parser::{ParseError, ParseErrorType},
	scanner::{ScanError, ScanErrorType},
};
pub use rofer::Rofer;
