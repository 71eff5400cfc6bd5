//! Expression AST nodes.
//!
//! An `Expression` is a tree representing code like `-123 * (45.67)` as
//! nested nodes. Nodes are pure data: each parent exclusively owns its
//! children, and all behavior lives in the parser (construction) and the
//! interpreter (evaluation), dispatched by exhaustive matching.

use Expression::*;
use LiteralValue::*;

use crate::scanner::Token;

/// Expression AST nodes
#[derive(Debug)]
pub(crate) enum Expression<'a> {
	Literal(LiteralValue<'a>),
	Variable(Token<'a>),
	Unary { operator: Token<'a>, right: Box<Expression<'a>> },
	Binary { left: Box<Expression<'a>>, operator: Token<'a>, right: Box<Expression<'a>> },
	Logical { left: Box<Expression<'a>>, operator: Token<'a>, right: Box<Expression<'a>> },
	/// Call syntax is recognized by the grammar but carries no evaluation
	/// rule in this core. `paren` is the closing parenthesis, kept for
	/// error positions.
	Call { callee: Box<Expression<'a>>, paren: Token<'a>, arguments: Vec<Expression<'a>> },
	Assign { target: Token<'a>, value: Box<Expression<'a>> },
	Grouping(Box<Expression<'a>>),
}

impl<'a> Expression<'a> {
	pub fn literal(value: LiteralValue<'a>) -> Box<Self> { Box::new(Expression::Literal(value)) }

	pub fn unary(operator: Token<'a>, right: Box<Self>) -> Box<Self> {
		Box::new(Expression::Unary { operator, right })
	}

	pub fn binary(left: Box<Self>, operator: Token<'a>, right: Box<Self>) -> Box<Self> {
		Box::new(Expression::Binary { left, operator, right })
	}

	pub fn logical(left: Box<Self>, operator: Token<'a>, right: Box<Self>) -> Box<Self> {
		Box::new(Expression::Logical { left, operator, right })
	}

	pub fn call(callee: Box<Self>, paren: Token<'a>, arguments: Vec<Self>) -> Box<Self> {
		Box::new(Expression::Call { callee, paren, arguments })
	}

	pub fn assign(target: Token<'a>, value: Box<Self>) -> Box<Self> {
		Box::new(Expression::Assign { target, value })
	}

	pub fn grouping(expr: Box<Self>) -> Box<Self> { Box::new(Expression::Grouping(expr)) }
}

/// Literal values in the AST
#[derive(Debug)]
pub(crate) enum LiteralValue<'a> {
	Number(f64),
	StringLiteral(&'a str),
	Boolean(bool),
	Nil,
}

impl std::fmt::Display for Expression<'_> {
	/// The parenthesized inspection form, e.g. `(+ 1 (* 2 3))`.
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Literal(lit) => write!(f, "{lit}"),
			Variable(token) => write!(f, "{}", token.lexeme),
			Unary { operator, right } => write!(f, "({} {right})", operator.lexeme),
			Binary { left, operator, right } => write!(f, "({} {left} {right})", operator.lexeme),
			Logical { left, operator, right } => write!(f, "({} {left} {right})", operator.lexeme),
			Call { callee, paren: _, arguments } => write!(
				f,
				"(call {callee} ({}))",
				arguments.iter().map(|arg| format!("{arg}")).collect::<Vec<String>>().join(" ")
			),
			Assign { target, value } => write!(f, "(= {} {value})", target.lexeme),
			Grouping(expression) => write!(f, "(group {expression})"),
		}
	}
}

impl std::fmt::Display for LiteralValue<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Number(n) => write!(f, "{n}"),
			StringLiteral(s) => write!(f, "\"{s}\""),
			Boolean(b) => write!(f, "{b}"),
			Nil => write!(f, "nil"),
		}
	}
}
