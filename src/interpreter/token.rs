use std::fmt;

use logos::Logos;

/// Classifies a lexeme.
///
/// The variants that never leave the lexer (`Newline`, `Whitespace`,
/// `Comment`) only exist so logos can skip them while keeping the line count.
/// `UnterminatedString` is reported as an error by the scanner and never
/// reaches the parser. `Eof` is appended by the scanner once input runs out.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(extras = LexerExtras)]
pub enum TokenKind {
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `{`
    #[token("{")]
    LeftBrace,
    /// `}`
    #[token("}")]
    RightBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `-`
    #[token("-")]
    Minus,
    /// `+`
    #[token("+")]
    Plus,
    /// `/`
    #[token("/")]
    Slash,
    /// `*`
    #[token("*")]
    Star,
    /// `!`
    #[token("!")]
    Bang,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `=`
    #[token("=")]
    Equal,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// Identifier tokens; variable names such as `x` or `total_2`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// String literals such as `"hello"`. May span several lines.
    #[regex(r#""[^"]*""#, count_newlines, allow_greedy = true)]
    String,
    /// A string whose closing quote never arrives.
    #[regex(r#""[^"]*"#, count_newlines, allow_greedy = true)]
    UnterminatedString,
    /// Numeric literals such as `42` or `3.14`. A trailing `.` is not part of
    /// the number.
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,
    /// `and`
    #[token("and")]
    And,
    /// `class`
    #[token("class")]
    Class,
    /// `else`
    #[token("else")]
    Else,
    /// `false`
    #[token("false")]
    False,
    /// `fun`
    #[token("fun")]
    Fun,
    /// `for`
    #[token("for")]
    For,
    /// `if`
    #[token("if")]
    If,
    /// `nil`
    #[token("nil")]
    Nil,
    /// `or`
    #[token("or")]
    Or,
    /// `print`
    #[token("print")]
    Print,
    /// `return`
    #[token("return")]
    Return,
    /// `super`
    #[token("super")]
    Super,
    /// `this`
    #[token("this")]
    This,
    /// `true`
    #[token("true")]
    True,
    /// `var`
    #[token("var")]
    Var,
    /// `while`
    #[token("while")]
    While,
    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Line breaks.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    Newline,
    /// Spaces, tabs and carriage returns.
    #[regex(r"[ \t\r]+", logos::skip)]
    Whitespace,
    /// End of input.
    Eof,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for tokens and diagnostics.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

fn count_newlines(lex: &mut logos::Lexer<TokenKind>) {
    lex.extras.line += lex.slice().matches('\n').count();
}

/// Display category of a token kind, used when colouring token streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenCategory {
    /// Reserved words other than the literal keywords.
    Keyword,
    /// User names.
    Identifier,
    /// Numbers, strings, `true`, `false` and `nil`.
    Literal,
    /// Arithmetic, comparison and assignment operators.
    Operator,
    /// Brackets and punctuation.
    Delimiter,
    /// Everything else (end of input).
    Other,
}

impl TokenKind {
    /// Reserved words that begin a statement; the parser resynchronizes in
    /// front of them.
    pub const STATEMENT_KEYWORDS: [Self; 8] = [Self::Class,
                                               Self::Fun,
                                               Self::Var,
                                               Self::For,
                                               Self::If,
                                               Self::While,
                                               Self::Print,
                                               Self::Return];

    /// Upper-snake name of the kind, as shown in token dumps.
    ///
    /// # Example
    /// ```
    /// use prism::interpreter::token::TokenKind;
    ///
    /// assert_eq!(TokenKind::LeftParen.name(), "LEFT_PAREN");
    /// assert_eq!(TokenKind::Eof.name(), "END_OF_FILE");
    /// ```
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LeftParen => "LEFT_PAREN",
            Self::RightParen => "RIGHT_PAREN",
            Self::LeftBrace => "LEFT_BRACE",
            Self::RightBrace => "RIGHT_BRACE",
            Self::Comma => "COMMA",
            Self::Dot => "DOT",
            Self::Semicolon => "SEMICOLON",
            Self::Minus => "MINUS",
            Self::Plus => "PLUS",
            Self::Slash => "SLASH",
            Self::Star => "STAR",
            Self::Bang => "BANG",
            Self::BangEqual => "BANG_EQUAL",
            Self::Equal => "EQUAL",
            Self::EqualEqual => "EQUAL_EQUAL",
            Self::Greater => "GREATER",
            Self::GreaterEqual => "GREATER_EQUAL",
            Self::Less => "LESS",
            Self::LessEqual => "LESS_EQUAL",
            Self::Identifier => "IDENTIFIER",
            Self::String => "STRING",
            Self::UnterminatedString => "UNTERMINATED_STRING",
            Self::Number => "NUMBER",
            Self::And => "AND",
            Self::Class => "CLASS",
            Self::Else => "ELSE",
            Self::False => "FALSE",
            Self::Fun => "FUN",
            Self::For => "FOR",
            Self::If => "IF",
            Self::Nil => "NIL",
            Self::Or => "OR",
            Self::Print => "PRINT",
            Self::Return => "RETURN",
            Self::Super => "SUPER",
            Self::This => "THIS",
            Self::True => "TRUE",
            Self::Var => "VAR",
            Self::While => "WHILE",
            Self::Comment => "COMMENT",
            Self::Newline => "NEWLINE",
            Self::Whitespace => "WHITESPACE",
            Self::Eof => "END_OF_FILE",
        }
    }

    /// Groups the kind for display purposes.
    #[must_use]
    pub const fn category(self) -> TokenCategory {
        match self {
            Self::True | Self::False | Self::Nil | Self::Number | Self::String => {
                TokenCategory::Literal
            },
            Self::And
            | Self::Class
            | Self::Else
            | Self::Fun
            | Self::For
            | Self::If
            | Self::Or
            | Self::Print
            | Self::Return
            | Self::Super
            | Self::This
            | Self::Var
            | Self::While => TokenCategory::Keyword,
            Self::Identifier => TokenCategory::Identifier,
            Self::Bang
            | Self::BangEqual
            | Self::Equal
            | Self::EqualEqual
            | Self::Greater
            | Self::GreaterEqual
            | Self::Less
            | Self::LessEqual
            | Self::Minus
            | Self::Plus
            | Self::Slash
            | Self::Star => TokenCategory::Operator,
            Self::LeftParen
            | Self::RightParen
            | Self::LeftBrace
            | Self::RightBrace
            | Self::Comma
            | Self::Dot
            | Self::Semicolon => TokenCategory::Delimiter,
            Self::UnterminatedString
            | Self::Comment
            | Self::Newline
            | Self::Whitespace
            | Self::Eof => TokenCategory::Other,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The literal payload of a `Number` or `String` token.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Parsed numeric value.
    Number(f64),
    /// Text between the quotes, without escapes applied.
    String(String),
}

/// A classified lexeme with its literal value and source line.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What the lexeme is.
    pub kind:    TokenKind,
    /// The exact source text.
    pub lexeme:  String,
    /// Present only for `Number` and `String` tokens.
    pub literal: Option<Literal>,
    /// 1-based source line.
    pub line:    usize,
}

impl Token {
    /// Creates a token without a literal.
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        Self { kind,
               lexeme: lexeme.into(),
               literal: None,
               line }
    }

    /// Creates a `Number` or `String` token carrying its literal.
    #[must_use]
    pub fn with_literal(kind: TokenKind,
                        lexeme: impl Into<String>,
                        literal: Literal,
                        line: usize)
                        -> Self {
        Self { kind,
               lexeme: lexeme.into(),
               literal: Some(literal),
               line }
    }

    /// The end-of-input marker on the given line.
    #[must_use]
    pub fn eof(line: usize) -> Self {
        Self::new(TokenKind::Eof, "", line)
    }
}

/// Formats a token as `KIND lexeme literal`.
///
/// The literal column holds the identifier's name, the string or number value,
/// `true`/`false` for the boolean keywords and `nil` for everything else.
///
/// # Example
/// ```
/// use prism::interpreter::token::{Literal, Token, TokenKind};
///
/// let token = Token::with_literal(TokenKind::Number, "1.5", Literal::Number(1.5), 1);
/// assert_eq!(token.to_string(), "NUMBER 1.5 1.5");
///
/// let token = Token::new(TokenKind::Semicolon, ";", 1);
/// assert_eq!(token.to_string(), "SEMICOLON ; nil");
/// ```
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ", self.kind, self.lexeme)?;
        match (&self.literal, self.kind) {
            (Some(Literal::Number(n)), _) => write!(f, "{n}"),
            (Some(Literal::String(s)), _) => f.write_str(s),
            (None, TokenKind::Identifier) => f.write_str(&self.lexeme),
            (None, TokenKind::True) => f.write_str("true"),
            (None, TokenKind::False) => f.write_str("false"),
            (None, _) => f.write_str("nil"),
        }
    }
}
