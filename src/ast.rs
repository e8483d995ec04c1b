use std::{fmt, rc::Rc};

use crate::interpreter::token::Token;

/// Represents a literal value written directly in source code.
///
/// Strings are reference counted so evaluating a literal does not copy the
/// text.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// `nil`
    Nil,
    /// `true` or `false`.
    Bool(bool),
    /// A 64-bit floating-point literal.
    Number(f64),
    /// A string literal, without its quotes.
    String(Rc<str>),
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::String(Rc::from(value))
    }
}

/// Operators that take two operands and always evaluate both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        Self::Equal => "==",
                        Self::NotEqual => "!=",
                        Self::Greater => ">",
                        Self::GreaterEqual => ">=",
                        Self::Less => "<",
                        Self::LessEqual => "<=",
                        Self::Add => "+",
                        Self::Sub => "-",
                        Self::Mul => "*",
                        Self::Div => "/",
                    })
    }
}

/// Short-circuiting operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOperator {
    /// `and`
    And,
    /// `or`
    Or,
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        Self::And => "and",
                        Self::Or => "or",
                    })
    }
}

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// `-`
    Negate,
    /// `!`
    Not,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        Self::Negate => "-",
                        Self::Not => "!",
                    })
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every node owns its children and is never mutated after the parser builds
/// it. Operator nodes keep the line of their operator token for runtime error
/// reports; name nodes keep the whole identifier token.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value.
    Literal {
        /// The constant value.
        value: LiteralValue,
    },
    /// Reference to a variable by name.
    Variable {
        /// The identifier token.
        name: Token,
    },
    /// Assignment to an existing variable, e.g. `x = 1`.
    Assign {
        /// The identifier token being assigned.
        name:  Token,
        /// The new value.
        value: Box<Self>,
    },
    /// An arithmetic, comparison or equality operation.
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line of the operator token.
        line:  usize,
    },
    /// `and` / `or`.
    Logical {
        /// Left operand, always evaluated.
        left:  Box<Self>,
        /// The operator.
        op:    LogicalOperator,
        /// Right operand, evaluated only when the left does not decide.
        right: Box<Self>,
        /// Line of the operator token.
        line:  usize,
    },
    /// A prefix operation.
    Unary {
        /// The operator.
        op:      UnaryOperator,
        /// The operand.
        operand: Box<Self>,
        /// Line of the operator token.
        line:    usize,
    },
    /// A parenthesized expression.
    Grouping {
        /// The expression inside the parentheses.
        inner: Box<Self>,
    },
}

/// An abstract syntax tree (AST) node representing a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// An expression evaluated for its side effects.
    Expression {
        /// The expression.
        expr: Expr,
    },
    /// `print expr;`
    Print {
        /// The value to print.
        expr: Expr,
        /// Line of the `print` keyword.
        line: usize,
    },
    /// `var name = initializer;`
    Var {
        /// The declared identifier.
        name:        Token,
        /// Optional initial value; `nil` when absent.
        initializer: Option<Expr>,
    },
    /// `{ ... }`
    Block {
        /// Statements inside the block.
        statements: Vec<Self>,
    },
    /// `if (condition) then_branch else else_branch`
    If {
        /// The condition.
        condition:   Expr,
        /// Executed when the condition is truthy.
        then_branch: Box<Self>,
        /// Executed when the condition is falsy.
        else_branch: Option<Box<Self>>,
    },
    /// `while (condition) body`
    While {
        /// Re-evaluated before each iteration.
        condition: Expr,
        /// The loop body.
        body:      Box<Self>,
    },
}

impl Expr {
    /// Builds a literal node.
    ///
    /// ## Example
    /// ```
    /// use prism::ast::{Expr, LiteralValue};
    ///
    /// let expr = Expr::literal(2.5);
    ///
    /// assert_eq!(expr, Expr::Literal { value: LiteralValue::Number(2.5) });
    /// ```
    #[must_use]
    pub fn literal(value: impl Into<LiteralValue>) -> Self {
        Self::Literal { value: value.into() }
    }
}
