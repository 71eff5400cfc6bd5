use std::{fs::read_to_string, io::Write, path::Path};

use anyhow::Context;

use crate::{RofError, interpreter::Interpreter, parser::Parser, scanner::Scanner};

/// Rofer drives the pipeline: Scan → Parse → Interpret.
///
/// Each stage runs to completion and returns its collected diagnostics; the
/// next stage starts only when the previous one produced none. Rofer owns
/// presentation of the diagnostics — the stages themselves never print.
pub struct Rofer;

impl Rofer {
	/// Run a Rof source file.
	pub fn run_file<P: AsRef<Path>>(&self, path: P) -> Result<(), RofError> {
		let source = read_to_string(path).context("Failed open source file")?;
		self.run(&source)
	}

	/// Run the REPL prompt.
	pub fn run_prompt(&self) {
		let mut input = String::new();
		let stdin = std::io::stdin();
		loop {
			input.clear();
			print!("> ");
			if let Err(e) = std::io::stdout().flush() {
				eprintln!("Failed flush: {e}");
			}
			match stdin.read_line(&mut input) {
				Ok(0) => {
					println!("\nExited rofer repl");
					break;
				}
				Ok(_) => {}
				Err(e) => {
					eprintln!("Failed read line: {e}");
					continue;
				}
			}
			if let Err(e) = self.run(input.trim()) {
				eprintln!("Failed run prompt: {e}");
			}
		}
	}

	/// Run the given source code through the whole pipeline.
	fn run(&self, source: &str) -> Result<(), RofError> {
		let tokens = match Scanner::new(source).scan_tokens() {
			Ok(tokens) => tokens,
			Err(errors) => {
				for error in &errors {
					eprintln!("Scan error: {error}");
				}
				return Err(RofError::ScannerErrors(errors.len()));
			}
		};

		let statements = match Parser::new(tokens).parse() {
			Ok(statements) => statements,
			Err(errors) => {
				for error in &errors {
					eprintln!("Parse error: {error}");
				}
				return Err(RofError::ParserErrors(errors.len()));
			}
		};

		let mut interpreter = Interpreter::new();
		interpreter.interpret(&statements)?;

		Ok(())
	}
}
