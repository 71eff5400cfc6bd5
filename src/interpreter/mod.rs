//! Tree-walking evaluation of Rof programs.
//!
//! Statement execution and expression evaluation are mutually recursive and
//! dispatch purely on the AST variant. The first runtime error unwinds the
//! whole run through `Result`; there is no per-statement recovery.
//!
//! Blocks push a child scope before running their statements and restore
//! the previous scope on every exit path, including error unwinding, so the
//! scope chain always mirrors lexical nesting.

pub(crate) mod value;

use Expression::*;
use value::Value;

use crate::{
	environment::Environment,
	error::interpreter::RuntimeError,
	parser::expression::{Expression, LiteralValue},
	scanner::TokenType::*,
	statement::Statement,
};

/// Interpreter that executes statements against an environment chain.
pub(crate) struct Interpreter<'a> {
	environment: Box<Environment<'a>>,
}

impl<'a> Interpreter<'a> {
	pub fn new() -> Self { Self { environment: Box::new(Environment::new(None)) } }

	/// Execute the statements in order, stopping at the first runtime error.
	pub fn interpret(&mut self, statements: &[Statement<'a>]) -> Result<(), RuntimeError> {
		for statement in statements {
			self.execute(statement)?;
		}
		Ok(())
	}

	fn execute(&mut self, statement: &Statement<'a>) -> Result<(), RuntimeError> {
		match statement {
			Statement::Expression(expression) => {
				self.evaluate(expression)?;
			}
			Statement::Print(expression) => {
				let value = self.evaluate(expression)?;
				println!("{value}");
			}
			Statement::VarDeclaration { name_token, initializer } => {
				let value = match initializer {
					Some(initializer) => self.evaluate(initializer)?,
					None => Value::Nil,
				};
				self.environment.define(name_token.lexeme, value);
			}
			Statement::Block(statements) => {
				// Swap in a child scope with the current one as its outer.
				let current = std::mem::take(&mut self.environment);
				*self.environment = Environment::new(Some(current));

				let mut result = Ok(());
				for statement in statements {
					result = self.execute(statement);
					if result.is_err() {
						break;
					}
				}

				// Restore the enclosing scope on every exit path.
				if let Some(outer) = self.environment.outer.take() {
					self.environment = outer;
				}
				result?
			}
			Statement::If { condition, then_branch, else_branch } => {
				if self.evaluate(condition)?.is_truthy() {
					self.execute(then_branch)?
				} else if let Some(else_branch) = else_branch {
					self.execute(else_branch)?
				}
			}
			Statement::While { condition, body } => {
				while self.evaluate(condition)?.is_truthy() {
					self.execute(body)?;
				}
			}
		}
		Ok(())
	}

	/// Evaluate the given expression and return its value.
	fn evaluate(&mut self, expression: &Expression<'a>) -> Result<Value, RuntimeError> {
		Ok(match expression {
			Literal(literal) => match literal {
				LiteralValue::Nil => Value::Nil,
				LiteralValue::Boolean(b) => Value::Bool(*b),
				LiteralValue::Number(n) => Value::Number(*n),
				LiteralValue::StringLiteral(s) => Value::Str(s.to_string()),
			},
			Grouping(inner) => self.evaluate(inner)?,
			Unary { operator, right } => {
				let right_value = self.evaluate(right)?;
				match (&operator.r#type, right_value) {
					(Minus, Value::Number(n)) => Value::Number(-n),
					(Minus, _) => return Err(RuntimeError::OperandMustBeNumber { line: operator.line }),
					(Bang, value) => Value::Bool(!value.is_truthy()),
					_ => {
						return Err(RuntimeError::InvalidOperator {
							line:   operator.line,
							lexeme: operator.lexeme.to_string(),
						});
					}
				}
			}
			Binary { left, operator, right } => {
				let left_value = self.evaluate(left)?;
				let right_value = self.evaluate(right)?;
				left_value.binary_op(&operator.r#type, &right_value).ok_or_else(|| match operator.r#type {
					Plus | Minus | Star | Slash | Greater | GreaterEqual | Less | LessEqual => {
						RuntimeError::OperandsMustBeNumbers { line: operator.line }
					}
					_ => RuntimeError::InvalidOperator { line: operator.line, lexeme: operator.lexeme.to_string() },
				})?
			}
			Logical { left, operator, right } => {
				let left_value = self.evaluate(left)?;
				match operator.r#type {
					// Short-circuit: the deciding operand is the result.
					And if !left_value.is_truthy() => left_value,
					Or if left_value.is_truthy() => left_value,
					And | Or => self.evaluate(right)?,
					_ => {
						return Err(RuntimeError::InvalidOperator {
							line:   operator.line,
							lexeme: operator.lexeme.to_string(),
						});
					}
				}
			}
			Variable(token) => self.environment.get(token)?,
			Assign { target, value } => {
				let value = self.evaluate(value)?;
				self.environment.assign(target, value.clone())?;
				// Assignment is an expression; it yields the assigned value.
				value
			}
			Call { paren, .. } => {
				// Call syntax parses, but this core defines no call
				// semantics.
				return Err(RuntimeError::UnsupportedCall { line: paren.line });
			}
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{parser::Parser, scanner::Scanner};

	/// Run every statement, then return the value of the trailing
	/// expression statement.
	fn eval(source: &'static str) -> Result<Value, RuntimeError> {
		let tokens = Scanner::new(source).scan_tokens().unwrap();
		let statements = Parser::new(tokens).parse().unwrap();
		let mut interpreter = Interpreter::new();
		let Some((last, rest)) = statements.split_last() else {
			return Ok(Value::Nil);
		};
		interpreter.interpret(rest)?;
		match last {
			Statement::Expression(expression) => interpreter.evaluate(expression),
			other => {
				interpreter.execute(other)?;
				Ok(Value::Nil)
			}
		}
	}

	#[test]
	fn arithmetic_precedence() {
		assert_eq!(eval("1 + 2 * 3;").unwrap(), Value::Number(7.0));
		assert_eq!(eval("(1 + 2) * 3;").unwrap(), Value::Number(9.0));
	}

	#[test]
	fn left_associative_subtraction() {
		assert_eq!(eval("8 - 3 - 2;").unwrap(), Value::Number(3.0));
		assert_eq!(eval("16 / 4 / 2;").unwrap(), Value::Number(2.0));
	}

	#[test]
	fn string_concatenation() {
		assert_eq!(eval(r#""a" + 1;"#).unwrap(), Value::Str("a1".to_string()));
		assert_eq!(eval(r#""a" + "b";"#).unwrap(), Value::Str("ab".to_string()));
		assert_eq!(eval(r#""v = " + true;"#).unwrap(), Value::Str("v = true".to_string()));
		// Number on the left is an operand error, not a concatenation.
		assert_eq!(eval(r#"1 + "a";"#).unwrap_err(), RuntimeError::OperandsMustBeNumbers { line: 1 });
	}

	#[test]
	fn unary_operators() {
		assert_eq!(eval("-5;").unwrap(), Value::Number(-5.0));
		assert_eq!(eval(r#"-"x";"#).unwrap_err(), RuntimeError::OperandMustBeNumber { line: 1 });
		assert_eq!(eval("!true;").unwrap(), Value::Bool(false));
	}

	#[test]
	fn truthiness_of_zero_empty_string_and_nil() {
		assert_eq!(eval("!0;").unwrap(), Value::Bool(false));
		assert_eq!(eval(r#"!"";"#).unwrap(), Value::Bool(false));
		assert_eq!(eval("!nil;").unwrap(), Value::Bool(true));
	}

	#[test]
	fn comparisons_require_numbers() {
		assert_eq!(eval("2 > 1;").unwrap(), Value::Bool(true));
		assert_eq!(eval("2 <= 1;").unwrap(), Value::Bool(false));
		assert_eq!(eval(r#""a" < "b";"#).unwrap_err(), RuntimeError::OperandsMustBeNumbers { line: 1 });
	}

	#[test]
	fn equality_without_coercion() {
		assert_eq!(eval("nil == nil;").unwrap(), Value::Bool(true));
		assert_eq!(eval("nil == false;").unwrap(), Value::Bool(false));
		assert_eq!(eval(r#"1 == "1";"#).unwrap(), Value::Bool(false));
		assert_eq!(eval("1 != 2;").unwrap(), Value::Bool(true));
	}

	#[test]
	fn logical_operators_short_circuit() {
		assert_eq!(eval("var a = 1; false and (a = 2); a;").unwrap(), Value::Number(1.0));
		assert_eq!(eval("var a = 1; true or (a = 2); a;").unwrap(), Value::Number(1.0));
		// The deciding operand is returned as-is.
		assert_eq!(eval(r#"nil or "x";"#).unwrap(), Value::Str("x".to_string()));
		assert_eq!(eval("false and 2;").unwrap(), Value::Bool(false));
		assert_eq!(eval("0 and 1;").unwrap(), Value::Number(1.0));
	}

	#[test]
	fn variables_and_assignment() {
		assert_eq!(eval("var a;  a;").unwrap(), Value::Nil);
		assert_eq!(eval("var a = 1; a = 2; a;").unwrap(), Value::Number(2.0));
		// Assignment is an expression yielding the assigned value.
		assert_eq!(eval("var a = 1; a = 2;").unwrap(), Value::Number(2.0));
	}

	#[test]
	fn block_scoping() {
		assert_eq!(eval("var a = 1; { var a = 2; } a;").unwrap(), Value::Number(1.0));
		assert_eq!(eval("var a = 1; { a = 2; } a;").unwrap(), Value::Number(2.0));
		assert_eq!(eval("var a = 1; { var b = 2; a = a + b; } a;").unwrap(), Value::Number(3.0));
		assert_eq!(
			eval("{ var b = 1; } b;").unwrap_err(),
			RuntimeError::UndefinedVariable { line: 1, name: "b".to_string() }
		);
	}

	#[test]
	fn scope_restored_after_runtime_error_in_block() {
		let tokens = Scanner::new("var a = 1; { var a = 2; 1 + nil; } a = 3;").scan_tokens().unwrap();
		let statements = Parser::new(tokens).parse().unwrap();
		let mut interpreter = Interpreter::new();
		assert!(interpreter.interpret(&statements).is_err());

		// The failing block's scope was popped; `a` is the global binding,
		// still untouched because the run stopped before `a = 3`.
		let check = Scanner::new("a;").scan_tokens().unwrap();
		let check = Parser::new(check).parse().unwrap();
		let Statement::Expression(expression) = &check[0] else {
			panic!("expected an expression statement");
		};
		assert_eq!(interpreter.evaluate(expression).unwrap(), Value::Number(1.0));
	}

	#[test]
	fn if_else() {
		assert_eq!(eval("var a = 0; if (1 > 2) a = 1; else a = 2; a;").unwrap(), Value::Number(2.0));
		assert_eq!(eval("var a = 0; if (1 < 2) a = 1; a;").unwrap(), Value::Number(1.0));
	}

	#[test]
	fn while_loop() {
		assert_eq!(eval("var i = 0; while (i < 3) i = i + 1; i;").unwrap(), Value::Number(3.0));
		assert_eq!(eval("var i = 0; while (false) i = 1; i;").unwrap(), Value::Number(0.0));
	}

	#[test]
	fn for_loop_runs_in_order_and_terminates() {
		let result = eval(r#"var out = ""; for (var i = 0; i < 3; i = i + 1) out = out + i; out;"#);
		assert_eq!(result.unwrap(), Value::Str("012".to_string()));
	}

	#[test]
	fn undefined_variable_errors_carry_name_and_line() {
		assert_eq!(eval("ghost;").unwrap_err(), RuntimeError::UndefinedVariable { line: 1, name: "ghost".to_string() });
		assert_eq!(
			eval("var a = 1;\nghost = 2;").unwrap_err(),
			RuntimeError::UndefinedVariable { line: 2, name: "ghost".to_string() }
		);
	}

	#[test]
	fn calls_are_recognized_but_not_evaluated() {
		assert_eq!(eval("1(2);").unwrap_err(), RuntimeError::UnsupportedCall { line: 1 });
	}

	#[test]
	fn print_statement_runs() {
		let tokens = Scanner::new("print 1 + 2;").scan_tokens().unwrap();
		let statements = Parser::new(tokens).parse().unwrap();
		assert!(Interpreter::new().interpret(&statements).is_ok());
	}
}
