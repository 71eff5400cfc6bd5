//! Lexically-scoped variable environments.
//!
//! Environments form a singly-linked chain through `outer`, rooted at the
//! global scope whose `outer` is `None`. Name resolution walks the chain
//! innermost first. Keys borrow their identifier text straight from the
//! source, which outlives any evaluation run.

use std::collections::HashMap;

use crate::{error::interpreter::RuntimeError, interpreter::value::Value, scanner::Token};

#[derive(Default, Debug)]
pub(crate) struct Environment<'a> {
	variables: HashMap<&'a str, Value>,
	/// The enclosing scope; `None` only for the global scope.
	pub outer: Option<Box<Environment<'a>>>,
}

impl<'a> Environment<'a> {
	pub fn new(outer: Option<Box<Environment<'a>>>) -> Self { Self { variables: HashMap::new(), outer } }

	/// Bind `name` in this scope, overwriting any existing binding here.
	///
	/// A variable statement doesn't just define a new variable, it can also
	/// redefine an existing one. Enclosing scopes are never touched.
	pub fn define(&mut self, name: &'a str, value: Value) {
		self.variables.insert(name, value);
	}

	/// Resolve `token` against this scope, then the enclosing chain.
	pub fn get(&self, token: &Token<'a>) -> Result<Value, RuntimeError> {
		if let Some(value) = self.variables.get(token.lexeme) {
			return Ok(value.clone());
		}
		match &self.outer {
			Some(outer) => outer.get(token),
			None => Err(RuntimeError::UndefinedVariable { line: token.line, name: token.lexeme.to_string() }),
		}
	}

	/// Mutate the nearest existing binding for `token`.
	///
	/// Assignment never creates a binding; a full-chain miss is an error.
	pub fn assign(&mut self, token: &Token<'a>, value: Value) -> Result<(), RuntimeError> {
		if let Some(slot) = self.variables.get_mut(token.lexeme) {
			*slot = value;
			return Ok(());
		}
		match &mut self.outer {
			Some(outer) => outer.assign(token, value),
			None => Err(RuntimeError::UndefinedVariable { line: token.line, name: token.lexeme.to_string() }),
		}
	}
}
