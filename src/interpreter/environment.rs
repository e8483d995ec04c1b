use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, token::Token, value::Value},
};

/// Shared handle to a scope.
///
/// Sibling blocks each hold the same parent handle while they run, and the
/// parent lives as long as its longest holder.
pub type SharedEnvironment = Rc<RefCell<Environment>>;

/// One lexical scope: its own bindings plus a link to the enclosing scope.
///
/// The global scope is the only one without an enclosing scope. Lookup and
/// assignment walk the chain outward; definition only ever touches the scope
/// it is called on.
#[derive(Debug, Default)]
pub struct Environment {
    values:    HashMap<String, Value>,
    enclosing: Option<SharedEnvironment>,
}

impl Environment {
    /// Creates a root (global) scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scope nested inside `enclosing`.
    #[must_use]
    pub fn with_enclosing(enclosing: SharedEnvironment) -> Self {
        Self { values:    HashMap::new(),
               enclosing: Some(enclosing), }
    }

    /// Wraps the scope in a shared handle.
    #[must_use]
    pub fn shared(self) -> SharedEnvironment {
        Rc::new(RefCell::new(self))
    }

    /// Binds `name` in this scope, replacing any binding it already has here.
    ///
    /// Enclosing scopes are never consulted, so a declaration inside a block
    /// shadows an outer variable of the same name.
    ///
    /// # Example
    /// ```
    /// use prism::interpreter::{environment::Environment, value::Value};
    ///
    /// let mut globals = Environment::new();
    /// globals.define("x", Value::Number(1.0));
    /// globals.define("x", Value::Nil);
    ///
    /// assert_eq!(globals.lookup("x"), Some(Value::Nil));
    /// ```
    pub fn define(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_string(), value);
    }

    /// Finds the value bound to `name` in this scope or the nearest enclosing
    /// one.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.values.get(name) {
            return Some(value.clone());
        }
        self.enclosing
            .as_ref()
            .and_then(|enclosing| enclosing.borrow().lookup(name))
    }

    /// Reads the variable named by `name`.
    ///
    /// # Errors
    /// `UndefinedVariable` when no scope in the chain defines it.
    pub fn get(&self, name: &Token) -> EvalResult<Value> {
        self.lookup(&name.lexeme)
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.lexeme.clone(),
                                                             line: name.line, })
    }

    /// Overwrites the nearest existing binding of `name`.
    ///
    /// Assignment never creates a variable.
    ///
    /// # Errors
    /// `UndefinedVariable` when no scope in the chain defines it.
    ///
    /// # Example
    /// ```
    /// use prism::interpreter::{
    ///     environment::Environment,
    ///     token::{Token, TokenKind},
    ///     value::Value,
    /// };
    ///
    /// let globals = Environment::new().shared();
    /// globals.borrow_mut().define("x", Value::Number(1.0));
    ///
    /// let mut block = Environment::with_enclosing(globals.clone());
    /// let x = Token::new(TokenKind::Identifier, "x", 1);
    /// block.assign(&x, Value::Number(2.0)).unwrap();
    ///
    /// assert_eq!(globals.borrow().lookup("x"), Some(Value::Number(2.0)));
    ///
    /// let y = Token::new(TokenKind::Identifier, "y", 1);
    /// assert!(block.assign(&y, Value::Nil).is_err());
    /// ```
    pub fn assign(&mut self, name: &Token, value: Value) -> EvalResult<()> {
        if let Some(slot) = self.values.get_mut(&name.lexeme) {
            *slot = value;
            return Ok(());
        }

        match &self.enclosing {
            Some(enclosing) => enclosing.borrow_mut().assign(name, value),
            None => Err(RuntimeError::UndefinedVariable { name: name.lexeme.clone(),
                                                          line: name.line, }),
        }
    }

    /// Number of scopes in the chain, counting this one.
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self.enclosing
                .as_ref()
                .map_or(0, |enclosing| enclosing.borrow().depth())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::token::TokenKind;

    fn name(lexeme: &str) -> Token {
        Token::new(TokenKind::Identifier, lexeme, 3)
    }

    #[test]
    fn get_walks_outward() {
        let globals = Environment::new().shared();
        globals.borrow_mut().define("a", Value::Number(1.0));
        let middle = Environment::with_enclosing(Rc::clone(&globals)).shared();
        let inner = Environment::with_enclosing(Rc::clone(&middle));

        assert_eq!(inner.get(&name("a")).unwrap(), Value::Number(1.0));
        assert_eq!(inner.depth(), 3);
    }

    #[test]
    fn define_shadows_without_touching_outer_scope() {
        let globals = Environment::new().shared();
        globals.borrow_mut().define("a", Value::Number(1.0));
        let mut inner = Environment::with_enclosing(Rc::clone(&globals));
        inner.define("a", Value::Number(2.0));

        assert_eq!(inner.lookup("a"), Some(Value::Number(2.0)));
        assert_eq!(globals.borrow().lookup("a"), Some(Value::Number(1.0)));
    }

    #[test]
    fn assign_updates_nearest_binding() {
        let globals = Environment::new().shared();
        globals.borrow_mut().define("a", Value::Number(1.0));
        let middle = Environment::with_enclosing(Rc::clone(&globals)).shared();
        middle.borrow_mut().define("a", Value::Number(2.0));
        let mut inner = Environment::with_enclosing(Rc::clone(&middle));

        inner.assign(&name("a"), Value::from("new")).unwrap();

        assert_eq!(middle.borrow().lookup("a"), Some(Value::from("new")));
        assert_eq!(globals.borrow().lookup("a"), Some(Value::Number(1.0)));
    }

    #[test]
    fn undefined_names_fault_with_line() {
        let mut globals = Environment::new();

        let read = globals.get(&name("missing")).unwrap_err();
        assert_eq!(read.to_string(), "Undefined variable 'missing'.");
        assert_eq!(read.line(), 3);

        let write = globals.assign(&name("missing"), Value::Nil).unwrap_err();
        assert_eq!(write.to_string(), "Undefined variable 'missing'.");
        assert_eq!(globals.lookup("missing"), None);
    }

    #[test]
    fn siblings_share_a_parent() {
        let globals = Environment::new().shared();
        let first = Environment::with_enclosing(Rc::clone(&globals));
        let second = Environment::with_enclosing(Rc::clone(&globals));

        assert_eq!(Rc::strong_count(&globals), 3);
        drop(first);
        drop(second);
        assert_eq!(Rc::strong_count(&globals), 1);
    }
}
