pub mod interpreter;
pub mod parser;
pub mod scanner;

/// RofError is the top-level error type for the Rof interpreter.
///
/// Each pipeline stage collects its own diagnostics and returns them; the
/// driver prints them and folds the outcome into one of these variants, so a
/// caller only ever sees a single aggregate per run.
#[derive(thiserror::Error, Debug)]
pub enum RofError {
	/// Internal interpreter error, should never happen
	#[error("InternalError: {0}")]
	InternalError(#[from] anyhow::Error),
	/// Lexical errors encountered during scanning
	#[error("Generated {0} scanner errors")]
	ScannerErrors(usize),
	/// Syntax errors encountered during parsing
	#[error("Generated {0} parser errors")]
	ParserErrors(usize),
	/// Runtime error encountered during interpretation
	#[error("Runtime error:\n{0}")]
	RuntimeError(#[from] interpreter::RuntimeError),
}
