//! Recursive-descent parser for Rof.
//!
//! The scanner's `lexical grammar` treats characters as its alphabet and
//! produces tokens; the parser's `syntactic grammar` treats tokens as its
//! alphabet and produces the AST. Each grammar rule below is one method, and
//! each method calls the methods for the rules it nests.
//!
//! |Name|Operators|Associates
//! --|--|--
//! Assignment|=|Right
//! Logical or|or|Left
//! Logical and|and|Left
//! Equality|== !=|Left
//! Comparison|< > <= >=|Left
//! Term|+ -|Left
//! Factor|* /|Left
//! Unary|! -|Right
//! Call|()|Left
//!
//! ``` BNF
//! program        → declaration* EOF ;
//! declaration    → varDecl | statement ;
//! varDecl        → "var" IDENTIFIER ( "=" expression )? ";" ;
//! statement      → forStmt | ifStmt | printStmt | whileStmt | block | exprStmt ;
//! forStmt        → "for" "(" ( varDecl | exprStmt | ";" ) expression? ";" expression? ")" statement ;
//! block          → "{" declaration* "}" ;
//! expression     → assignment ;
//! assignment     → IDENTIFIER "=" assignment | logic_or ;
//! logic_or       → logic_and ( "or" logic_and )* ;
//! logic_and      → equality ( "and" equality )* ;
//! equality       → comparison ( ( "!=" | "==" ) comparison )* ;
//! comparison     → term ( ( ">" | ">=" | "<" | "<=" ) term )* ;
//! term           → factor ( ( "-" | "+" ) factor )* ;
//! factor         → unary ( ( "/" | "*" ) unary )* ;
//! unary          → ( "!" | "-" ) unary | call ;
//! call           → primary ( "(" arguments? ")" )* ;
//! primary        → NUMBER | STRING | IDENTIFIER | "true" | "false" | "nil" | "(" expression ")" ;
//! ```
//!
//! `for` has no AST node of its own: it is desugared here into a block
//! holding the initializer and a `while` whose body runs the original body
//! followed by the increment.
//!
//! On a syntax error the declaration loop records the error and enters
//! panic-mode recovery: tokens are discarded until a semicolon has been
//! consumed or the next token can begin a declaration, then parsing resumes.
//! One call to [`Parser::parse`] therefore reports every independent syntax
//! error in the source, and a failed parse never yields a tree.

pub(crate) mod expression;

use TokenType::*;
use expression::{Expression, LiteralValue};

use crate::{
	error::parser::{ParseError, ParseErrorType},
	scanner::{Token, TokenType},
	statement::Statement,
};

/// A recursive-descent parser over the scanner's token vector.
///
/// The token vector must be terminated by [`TokenType::Eof`]; the scanner
/// guarantees this.
pub(crate) struct Parser<'a> {
	/// The tokens to parse.
	tokens:  Vec<Token<'a>>,
	/// Cursor into `tokens`; never moves past the Eof sentinel.
	current: usize,
	/// Syntax errors collected over the whole parse.
	errors:  Vec<ParseError>,
}

impl<'a> Parser<'a> {
	pub fn new(tokens: Vec<Token<'a>>) -> Self { Self { tokens, current: 0, errors: Vec::new() } }

	/// Parse the token sequence into a statement list.
	///
	/// Returns every syntax error found in the pass; callers must not
	/// execute anything when this fails.
	pub fn parse(mut self) -> Result<Vec<Statement<'a>>, Vec<ParseError>> {
		let mut statements = Vec::new();
		while !self.is_at_end() {
			match self.declaration() {
				Ok(statement) => statements.push(statement),
				Err(error) => {
					self.errors.push(error);
					self.synchronize();
				}
			}
		}
		if self.errors.is_empty() { Ok(statements) } else { Err(self.errors) }
	}

	fn declaration(&mut self) -> Result<Statement<'a>, ParseError> {
		if matches!(self.peek().r#type, Var) {
			self.advance();
			return self.var_declaration();
		}
		self.statement()
	}

	fn var_declaration(&mut self) -> Result<Statement<'a>, ParseError> {
		if !matches!(self.peek().r#type, Identifier(_)) {
			return Err(self.error_at_peek(ParseErrorType::ExpectedToken("variable name")));
		}
		let name_token = self.advance().clone();

		let initializer = if matches!(self.peek().r#type, Equal) {
			self.advance();
			Some(*self.expression()?)
		} else {
			None
		};

		self.consume(Semicolon, "';' after variable declaration")?;
		Ok(Statement::VarDeclaration { name_token, initializer })
	}

	fn statement(&mut self) -> Result<Statement<'a>, ParseError> {
		match self.peek().r#type {
			For => {
				self.advance();
				self.for_statement()
			}
			If => {
				self.advance();
				self.if_statement()
			}
			Print => {
				self.advance();
				self.print_statement()
			}
			While => {
				self.advance();
				self.while_statement()
			}
			LeftBrace => {
				self.advance();
				Ok(Statement::Block(self.block()?))
			}
			_ => self.expression_statement(),
		}
	}

	/// Desugar `for (init; cond; incr) body` into
	/// `{ init; while (cond) { body; incr } }`.
	fn for_statement(&mut self) -> Result<Statement<'a>, ParseError> {
		self.consume(LeftParen, "'(' after 'for'")?;

		let initializer = match self.peek().r#type {
			Semicolon => {
				self.advance();
				None
			}
			Var => {
				self.advance();
				Some(self.var_declaration()?)
			}
			_ => Some(self.expression_statement()?),
		};

		let condition = if matches!(self.peek().r#type, Semicolon) { None } else { Some(*self.expression()?) };
		self.consume(Semicolon, "';' after loop condition")?;

		let increment = if matches!(self.peek().r#type, RightParen) { None } else { Some(*self.expression()?) };
		self.consume(RightParen, "')' after for clauses")?;

		let mut body = self.statement()?;
		if let Some(increment) = increment {
			body = Statement::Block(vec![body, Statement::Expression(increment)]);
		}
		let condition = condition.unwrap_or(Expression::Literal(LiteralValue::Boolean(true)));
		body = Statement::While { condition, body: Box::new(body) };
		if let Some(initializer) = initializer {
			body = Statement::Block(vec![initializer, body]);
		}
		Ok(body)
	}

	fn if_statement(&mut self) -> Result<Statement<'a>, ParseError> {
		self.consume(LeftParen, "'(' after 'if'")?;
		let condition = *self.expression()?;
		self.consume(RightParen, "')' after if condition")?;

		let then_branch = Box::new(self.statement()?);
		let else_branch = if matches!(self.peek().r#type, Else) {
			self.advance();
			Some(Box::new(self.statement()?))
		} else {
			None
		};
		Ok(Statement::If { condition, then_branch, else_branch })
	}

	fn print_statement(&mut self) -> Result<Statement<'a>, ParseError> {
		let value = *self.expression()?;
		self.consume(Semicolon, "';' after value")?;
		Ok(Statement::Print(value))
	}

	fn while_statement(&mut self) -> Result<Statement<'a>, ParseError> {
		self.consume(LeftParen, "'(' after 'while'")?;
		let condition = *self.expression()?;
		self.consume(RightParen, "')' after while condition")?;
		let body = Box::new(self.statement()?);
		Ok(Statement::While { condition, body })
	}

	fn block(&mut self) -> Result<Vec<Statement<'a>>, ParseError> {
		let mut statements = Vec::new();
		while !matches!(self.peek().r#type, RightBrace | Eof) {
			statements.push(self.declaration()?);
		}
		self.consume(RightBrace, "'}' after block")?;
		Ok(statements)
	}

	fn expression_statement(&mut self) -> Result<Statement<'a>, ParseError> {
		let value = *self.expression()?;
		self.consume(Semicolon, "';' after expression")?;
		Ok(Statement::Expression(value))
	}

	fn expression(&mut self) -> Result<Box<Expression<'a>>, ParseError> { self.assignment() }

	/// Parse assignment expressions, right-associative.
	///
	/// The left-hand side is parsed as an ordinary expression first; only a
	/// bare variable reference is a legal target. Anything else records
	/// `Invalid assignment target` and hands the left-hand side back, so the
	/// cursor keeps its position and parsing continues in place.
	fn assignment(&mut self) -> Result<Box<Expression<'a>>, ParseError> {
		let expr = self.or()?;
		if matches!(self.peek().r#type, Equal) {
			let equals = self.advance().clone();
			let value = self.assignment()?;
			return Ok(match *expr {
				Expression::Variable(target) => Expression::assign(target, value),
				other => {
					let error =
						ParseError::new(equals.line, format!("'{}'", equals.lexeme), ParseErrorType::InvalidAssignmentTarget);
					self.errors.push(error);
					Box::new(other)
				}
			});
		}
		Ok(expr)
	}

	fn or(&mut self) -> Result<Box<Expression<'a>>, ParseError> {
		let mut expression = self.and()?;
		while matches!(self.peek().r#type, Or) {
			let operator = self.advance().clone();
			expression = Expression::logical(expression, operator, self.and()?);
		}
		Ok(expression)
	}

	fn and(&mut self) -> Result<Box<Expression<'a>>, ParseError> {
		let mut expression = self.equality()?;
		while matches!(self.peek().r#type, And) {
			let operator = self.advance().clone();
			expression = Expression::logical(expression, operator, self.equality()?);
		}
		Ok(expression)
	}

	fn equality(&mut self) -> Result<Box<Expression<'a>>, ParseError> {
		let mut expression = self.comparison()?;
		while matches!(self.peek().r#type, BangEqual | EqualEqual) {
			let operator = self.advance().clone();
			expression = Expression::binary(expression, operator, self.comparison()?);
		}
		Ok(expression)
	}

	fn comparison(&mut self) -> Result<Box<Expression<'a>>, ParseError> {
		let mut expression = self.term()?;
		while matches!(self.peek().r#type, Greater | GreaterEqual | Less | LessEqual) {
			let operator = self.advance().clone();
			expression = Expression::binary(expression, operator, self.term()?);
		}
		Ok(expression)
	}

	fn term(&mut self) -> Result<Box<Expression<'a>>, ParseError> {
		let mut expression = self.factor()?;
		while matches!(self.peek().r#type, Minus | Plus) {
			let operator = self.advance().clone();
			expression = Expression::binary(expression, operator, self.factor()?);
		}
		Ok(expression)
	}

	fn factor(&mut self) -> Result<Box<Expression<'a>>, ParseError> {
		let mut expression = self.unary()?;
		while matches!(self.peek().r#type, Slash | Star) {
			let operator = self.advance().clone();
			expression = Expression::binary(expression, operator, self.unary()?);
		}
		Ok(expression)
	}

	fn unary(&mut self) -> Result<Box<Expression<'a>>, ParseError> {
		if matches!(self.peek().r#type, Bang | Minus) {
			let operator = self.advance().clone();
			return Ok(Expression::unary(operator, self.unary()?));
		}
		self.call()
	}

	/// Parse zero or more chained `(arg, ...)` suffixes.
	fn call(&mut self) -> Result<Box<Expression<'a>>, ParseError> {
		let mut expression = self.primary()?;
		while matches!(self.peek().r#type, LeftParen) {
			self.advance();
			let mut arguments = Vec::new();
			if !matches!(self.peek().r#type, RightParen) {
				loop {
					if arguments.len() == 255 {
						// Recorded once; argument parsing keeps consuming.
						let error = self.error_at_peek(ParseErrorType::TooManyArguments);
						self.errors.push(error);
					}
					arguments.push(*self.expression()?);
					if !matches!(self.peek().r#type, Comma) {
						break;
					}
					self.advance();
				}
			}
			let paren = self.consume(RightParen, "')' after arguments")?;
			expression = Expression::call(expression, paren, arguments);
		}
		Ok(expression)
	}

	fn primary(&mut self) -> Result<Box<Expression<'a>>, ParseError> {
		let r#type = self.peek().r#type.clone();
		Ok(match r#type {
			False => {
				self.advance();
				Expression::literal(LiteralValue::Boolean(false))
			}
			True => {
				self.advance();
				Expression::literal(LiteralValue::Boolean(true))
			}
			Nil => {
				self.advance();
				Expression::literal(LiteralValue::Nil)
			}
			NumberLiteral(n) => {
				self.advance();
				Expression::literal(LiteralValue::Number(n))
			}
			StringLiteral(s) => {
				self.advance();
				Expression::literal(LiteralValue::StringLiteral(s))
			}
			Identifier(_) => {
				let token = self.advance().clone();
				Box::new(Expression::Variable(token))
			}
			LeftParen => {
				self.advance();
				let expression = self.expression()?;
				self.consume(RightParen, "')' after expression")?;
				Expression::grouping(expression)
			}
			_ => return Err(self.error_at_peek(ParseErrorType::ExpectedExpression)),
		})
	}

	/// Discard tokens until a statement boundary.
	///
	/// A boundary is a consumed semicolon or a next token that can begin a
	/// declaration. The boundary set holds only the keywords this grammar
	/// can actually start a statement with, so when the loop stops on one
	/// the next `declaration` call is guaranteed to consume it.
	fn synchronize(&mut self) {
		while !self.is_at_end() {
			if matches!(self.peek().r#type, Var | For | If | While | Print) {
				return;
			}
			if matches!(self.advance().r#type, Semicolon) {
				return;
			}
		}
	}

	/// Consume the expected token or record what was missing.
	fn consume(&mut self, expected: TokenType<'a>, what: &'static str) -> Result<Token<'a>, ParseError> {
		if self.peek().r#type == expected {
			return Ok(self.advance().clone());
		}
		Err(self.error_at_peek(ParseErrorType::ExpectedToken(what)))
	}

	fn error_at_peek(&self, r#type: ParseErrorType) -> ParseError {
		let token = self.peek();
		let at = if matches!(token.r#type, Eof) { "end".to_string() } else { format!("'{}'", token.lexeme) };
		ParseError::new(token.line, at, r#type)
	}

	/// Peek at the current token.
	fn peek(&self) -> &Token<'a> { &self.tokens[self.current] }

	/// Advance to the next token, stopping at the Eof sentinel.
	fn advance(&mut self) -> &Token<'a> {
		if !self.is_at_end() {
			self.current += 1;
		}
		&self.tokens[self.current - 1]
	}

	fn is_at_end(&self) -> bool { matches!(self.peek().r#type, Eof) }
}
