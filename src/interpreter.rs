/// The environment module holds lexical scopes.
///
/// A scope maps names to values and links to the scope it is nested in. The
/// global scope is the root of every chain.
///
/// # Responsibilities
/// - Defines variables in the current scope only.
/// - Resolves reads and assignments through the enclosing chain.
/// - Reports undefined variables as runtime faults.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and executes
/// statements, performs arithmetic and logical operations, manages variable
/// state and writes program output. It is the core execution engine of the
/// interpreter.
///
/// # Responsibilities
/// - Evaluates expressions left to right with short-circuiting `and`/`or`.
/// - Executes `print`, declarations, blocks, `if` and `while`.
/// - Reports runtime faults such as operand type mismatches.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// strings, identifiers, operators, delimiters and keywords. This is the first
/// stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, lexeme,
///   literal and line.
/// - Skips whitespace and `//` comments while tracking line numbers.
/// - Reports lexical errors for unexpected characters and unterminated
///   strings.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of expressions and
/// statements.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes by recursive descent.
/// - Reports syntax errors with line and location.
/// - Resynchronizes after an error so later mistakes are reported too.
pub mod parser;
/// Token definitions shared by the lexer, parser and tools.
///
/// Declares every token kind with its `logos` pattern, the scanned [`Token`]
/// record and its literal payload.
///
/// [`Token`]: token::Token
pub mod token;
/// The value module defines the runtime data types for evaluation.
///
/// A value is `nil`, a boolean, a number or a string. The module also fixes
/// truthiness, equality and the printed form of each value.
pub mod value;
