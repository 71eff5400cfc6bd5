//! Statement AST nodes.
//!
//! There is no place in the grammar where both an expression and a statement
//! are allowed. The operands of, say, `+` are always expressions, never
//! statements. The body of a `while` loop is always a statement.

use crate::{parser::expression::Expression, scanner::Token};

/// A statement in the Rof language.
#[derive(Debug)]
pub(crate) enum Statement<'a> {
	/// An expression used as a statement.
	Expression(Expression<'a>),
	/// A print statement.
	Print(Expression<'a>),
	/// A variable declaration statement.
	VarDeclaration {
		/// The token of the variable being declared.
		name_token:  Token<'a>,
		/// An optional initializer expression.
		initializer: Option<Expression<'a>>,
	},
	/// A block of statements, executed in its own child scope.
	Block(Vec<Statement<'a>>),
	If {
		condition:   Expression<'a>,
		then_branch: Box<Statement<'a>>,
		else_branch: Option<Box<Statement<'a>>>,
	},
	While {
		condition: Expression<'a>,
		body:      Box<Statement<'a>>,
	},
}
