use std::fmt::Display;

use Value::*;

use crate::scanner::TokenType;

/// A runtime value in Rof.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Value {
	Nil,
	Bool(bool),
	Number(f64),
	Str(String),
}

impl Display for Value {
	/// The canonical stringify used by `print` and by concatenation.
	///
	/// Strings render verbatim, without quotes; the quoted form belongs to
	/// the AST inspection printer, not the runtime.
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Nil => write!(f, "nil"),
			Bool(b) => write!(f, "{b}"),
			Number(n) => {
				if n.is_finite() && n.fract() == 0.0 {
					write!(f, "{}", *n as i64)
				} else {
					write!(f, "{n}")
				}
			}
			Str(s) => write!(f, "{s}"),
		}
	}
}

impl Value {
	/// Perform a binary operation between two values.
	///
	/// `None` means the operands don't fit the operator; the interpreter
	/// turns that into the runtime error for the operator's token.
	pub fn binary_op(&self, op: &TokenType, right: &Self) -> Option<Value> {
		use TokenType::*;

		let value = match op {
			Plus => self.plus(right)?,
			Minus => self.minus(right)?,
			Star => self.star(right)?,
			Slash => self.slash(right)?,
			Greater => return self.compare(right).map(|(l, r)| Bool(l > r)),
			GreaterEqual => return self.compare(right).map(|(l, r)| Bool(l >= r)),
			Less => return self.compare(right).map(|(l, r)| Bool(l < r)),
			LessEqual => return self.compare(right).map(|(l, r)| Bool(l <= r)),
			EqualEqual => return Some(Bool(self.equal(right))),
			BangEqual => return Some(Bool(!self.equal(right))),
			_ => return None,
		};
		Some(value)
	}

	/// Determine if the value is considered true in a boolean context.
	///
	/// Only `nil` and `false` are falsy; zero and the empty string are
	/// truthy like every other value.
	pub fn is_truthy(&self) -> bool {
		match self {
			Nil => false,
			Bool(b) => *b,
			_ => true,
		}
	}

	/// Add numbers, or concatenate when a string is on the left.
	///
	/// A string left operand stringifies whatever sits on the right. A
	/// number left operand never concatenates; pairing it with a non-number
	/// is an operand error, the same as the other arithmetic operators.
	fn plus(&self, other: &Self) -> Option<Value> {
		match (self, other) {
			(Number(l), Number(r)) => Some(Number(l + r)),
			(Str(l), r) => Some(Str(format!("{l}{r}"))),
			_ => None,
		}
	}

	fn minus(&self, other: &Self) -> Option<Value> {
		match (self, other) {
			(Number(l), Number(r)) => Some(Number(l - r)),
			_ => None,
		}
	}

	fn star(&self, other: &Self) -> Option<Value> {
		match (self, other) {
			(Number(l), Number(r)) => Some(Number(l * r)),
			_ => None,
		}
	}

	/// Division follows IEEE 754; dividing by zero yields an infinity.
	fn slash(&self, other: &Self) -> Option<Value> {
		match (self, other) {
			(Number(l), Number(r)) => Some(Number(l / r)),
			_ => None,
		}
	}

	/// The relational operators order numbers only.
	fn compare(&self, other: &Self) -> Option<(f64, f64)> {
		match (self, other) {
			(Number(l), Number(r)) => Some((*l, *r)),
			_ => None,
		}
	}

	/// Value equality with no coercion.
	///
	/// `nil` equals only `nil`; values of differing kinds are never equal.
	fn equal(&self, other: &Self) -> bool {
		match (self, other) {
			(Nil, Nil) => true,
			(Bool(l), Bool(r)) => l == r,
			(Number(l), Number(r)) => l == r,
			(Str(l), Str(r)) => l == r,
			_ => false,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn stringify() {
		assert_eq!(Nil.to_string(), "nil");
		assert_eq!(Bool(true).to_string(), "true");
		assert_eq!(Bool(false).to_string(), "false");
		assert_eq!(Number(2.0).to_string(), "2");
		assert_eq!(Number(3.14).to_string(), "3.14");
		assert_eq!(Number(-0.5).to_string(), "-0.5");
		assert_eq!(Str("hi".to_string()).to_string(), "hi");
	}

	#[test]
	fn truthiness() {
		assert!(!Nil.is_truthy());
		assert!(!Bool(false).is_truthy());
		assert!(Bool(true).is_truthy());
		assert!(Number(0.0).is_truthy());
		assert!(Str(String::new()).is_truthy());
	}

	#[test]
	fn plus_concatenates_with_string_on_the_left() {
		let a = Str("a".to_string());
		assert_eq!(a.plus(&Number(1.0)), Some(Str("a1".to_string())));
		assert_eq!(a.plus(&Bool(true)), Some(Str("atrue".to_string())));
		assert_eq!(a.plus(&Nil), Some(Str("anil".to_string())));
		assert_eq!(a.plus(&Str("b".to_string())), Some(Str("ab".to_string())));
		// Number on the left never concatenates.
		assert_eq!(Number(1.0).plus(&a), None);
	}

	#[test]
	fn arithmetic_requires_numbers() {
		assert_eq!(Number(6.0).minus(&Number(2.0)), Some(Number(4.0)));
		assert_eq!(Number(6.0).star(&Number(2.0)), Some(Number(12.0)));
		assert_eq!(Number(6.0).slash(&Number(2.0)), Some(Number(3.0)));
		assert_eq!(Str("x".to_string()).minus(&Number(1.0)), None);
		assert_eq!(Bool(true).star(&Number(1.0)), None);
	}

	#[test]
	fn division_by_zero_is_infinite() {
		let Some(Number(n)) = Number(1.0).slash(&Number(0.0)) else {
			panic!("expected a number");
		};
		assert!(n.is_infinite());
	}

	#[test]
	fn equality_has_no_coercion() {
		assert!(Nil.equal(&Nil));
		assert!(!Nil.equal(&Bool(false)));
		assert!(!Number(0.0).equal(&Bool(false)));
		assert!(!Number(1.0).equal(&Str("1".to_string())));
		assert!(Number(1.0).equal(&Number(1.0)));
		assert!(Str("a".to_string()).equal(&Str("a".to_string())));
	}
}
