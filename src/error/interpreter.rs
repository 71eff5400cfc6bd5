/// Errors raised during evaluation.
///
/// The first one encountered unwinds the whole run; there is no
/// per-statement recovery. Every variant carries the offending token's line.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RuntimeError {
	/// Unary `-` applied to a non-number.
	#[error("line {line}: Operand must be a number")]
	OperandMustBeNumber { line: usize },
	/// An arithmetic or relational operator applied to non-numbers.
	#[error("line {line}: Operands must be numbers")]
	OperandsMustBeNumbers { line: usize },
	/// Read of or assignment to a name with no binding in the scope chain.
	#[error("line {line}: Undefined variable '{name}'")]
	UndefinedVariable { line: usize, name: String },
	/// Call syntax parses, but this core has no call semantics.
	#[error("line {line}: Function calls are not supported")]
	UnsupportedCall { line: usize },
	/// An operator token the evaluator has no rule for, should never happen.
	#[error("line {line}: Invalid operator '{lexeme}'")]
	InvalidOperator { line: usize, lexeme: String },
}
