#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use rofer::{RofError, Rofer, RuntimeError};

	fn fixture(name: &str) -> PathBuf {
		PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join(name)
	}

	#[test]
	fn test_rof_file() {
		let result = Rofer.run_file(fixture("test.rof"));
		assert!(result.is_ok());
	}

	#[test]
	fn test_missing_file() {
		let result = Rofer.run_file(fixture("no_such_file.rof"));
		assert!(matches!(result, Err(RofError::InternalError(_))));
	}

	#[test]
	fn test_every_lexical_error_is_counted() {
		let result = Rofer.run_file(fixture("scan_errors.rof"));
		match result {
			Err(RofError::ScannerErrors(count)) => assert_eq!(count, 2),
			other => panic!("expected scanner errors, got {other:?}"),
		}
	}

	#[test]
	fn test_every_syntax_error_is_counted() {
		// Two statements, each missing its semicolon, from one parse.
		let result = Rofer.run_file(fixture("syntax_errors.rof"));
		match result {
			Err(RofError::ParserErrors(count)) => assert_eq!(count, 2),
			other => panic!("expected parser errors, got {other:?}"),
		}
	}

	#[test]
	fn test_runtime_error_stops_the_run() {
		let result = Rofer.run_file(fixture("runtime_error.rof"));
		match result {
			Err(RofError::RuntimeError(error)) => {
				assert_eq!(error, RuntimeError::OperandsMustBeNumbers { line: 2 });
			}
			other => panic!("expected a runtime error, got {other:?}"),
		}
	}
}
