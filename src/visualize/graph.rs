use std::{
    fmt::Write as _,
    fs, io,
    path::{Path, PathBuf},
    process::Command,
};

use tracing::debug;

use crate::ast::{Expr, LiteralValue, Stmt};

/// Fill colour for statements, operators and other structure.
pub const CONTROL_COLOR: &str = "#c8e6fe";
/// Fill colour for variable declarations and references.
pub const VARIABLE_COLOR: &str = "#a7fe9c";
/// Fill colour for literals.
pub const CONSTANT_COLOR: &str = "#fefdc9";

/// Accumulates DOT text and hands out node ids in creation order.
struct DotWriter {
    out:  String,
    next: usize,
}

impl DotWriter {
    fn new() -> Self {
        let mut out = String::from("digraph AST {\n");
        out.push_str("  node [shape=box, fontname=\"Arial\", fontsize=10];\n");
        Self { out, next: 0 }
    }

    fn finish(mut self) -> String {
        self.out.push_str("}\n");
        self.out
    }

    /// Emits a node whose label lines are joined by DOT line breaks.
    fn node(&mut self, lines: &[&str], color: &str) -> usize {
        let id = self.next;
        self.next += 1;

        let label = lines.iter()
                         .map(|line| escape_label(line))
                         .collect::<Vec<_>>()
                         .join("\\n");
        let _ = writeln!(self.out,
                         "  node{id} [label=\"{label}\", style=\"filled\", fillcolor=\"{color}\"];");
        id
    }

    fn edge(&mut self, from: usize, to: usize) {
        let _ = writeln!(self.out, "  node{from} -> node{to};");
    }

    fn stmt(&mut self, stmt: &Stmt) -> usize {
        match stmt {
            Stmt::Expression { expr } => self.wrap("ExprStmt", expr),
            Stmt::Print { expr, .. } => self.wrap("Print", expr),
            Stmt::Var { name, initializer } => {
                let label = format!("name: {}", name.lexeme);
                let id = self.node(&["Var", &label], VARIABLE_COLOR);
                if let Some(initializer) = initializer {
                    let child = self.expr(initializer);
                    self.edge(id, child);
                }
                id
            },
            Stmt::Block { statements } => {
                let id = self.node(&["Block"], CONTROL_COLOR);
                for statement in statements {
                    let child = self.stmt(statement);
                    self.edge(id, child);
                }
                id
            },
            Stmt::If { condition,
                       then_branch,
                       else_branch, } => {
                let id = self.node(&["If"], CONTROL_COLOR);
                let child = self.expr(condition);
                self.edge(id, child);
                let child = self.stmt(then_branch);
                self.edge(id, child);
                if let Some(else_branch) = else_branch {
                    let child = self.stmt(else_branch);
                    self.edge(id, child);
                }
                id
            },
            Stmt::While { condition, body } => {
                let id = self.node(&["While"], CONTROL_COLOR);
                let child = self.expr(condition);
                self.edge(id, child);
                let child = self.stmt(body);
                self.edge(id, child);
                id
            },
        }
    }

    /// Emits a titled node with a single expression child.
    fn wrap(&mut self, title: &str, expr: &Expr) -> usize {
        let id = self.node(&[title], CONTROL_COLOR);
        let child = self.expr(expr);
        self.edge(id, child);
        id
    }

    fn expr(&mut self, expr: &Expr) -> usize {
        match expr {
            Expr::Literal { value } => {
                let label = format!("value: {}", literal_label(value));
                self.node(&["Literal", &label], CONSTANT_COLOR)
            },
            Expr::Variable { name } => {
                let label = format!("name: {}", name.lexeme);
                self.node(&["Variable", &label], VARIABLE_COLOR)
            },
            Expr::Assign { name, value } => {
                let label = format!("name: {}", name.lexeme);
                let id = self.node(&["Assign", &label], CONTROL_COLOR);
                let child = self.expr(value);
                self.edge(id, child);
                id
            },
            Expr::Binary { left, op, right, .. } => {
                self.operator("Binary", &op.to_string(), &[&**left, &**right])
            },
            Expr::Logical { left, op, right, .. } => {
                self.operator("Logical", &op.to_string(), &[&**left, &**right])
            },
            Expr::Unary { op, operand, .. } => {
                self.operator("Unary", &op.to_string(), &[&**operand])
            },
            Expr::Grouping { inner } => self.wrap("Grouping", inner),
        }
    }

    fn operator(&mut self, title: &str, symbol: &str, operands: &[&Expr]) -> usize {
        let label = format!("operator: {symbol}");
        let id = self.node(&[title, &label], CONTROL_COLOR);
        for operand in operands {
            let child = self.expr(operand);
            self.edge(id, child);
        }
        id
    }
}

/// Escapes characters DOT treats specially inside a quoted label.
fn escape_label(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '"' | '\\' => {
                escaped.push('\\');
                escaped.push(c);
            },
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Formats a number for a label: integers without a fraction, everything else
/// with at most two decimals and no trailing zeros.
///
/// # Example
/// ```
/// use prism::visualize::graph::format_number;
///
/// assert_eq!(format_number(3.0), "3");
/// assert_eq!(format_number(1.23456), "1.23");
/// assert_eq!(format_number(2.5), "2.5");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        return format!("{value}");
    }

    let fixed = format!("{value:.2}");
    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        fixed
    }
}

fn literal_label(value: &LiteralValue) -> String {
    match value {
        LiteralValue::Nil => "nil".to_string(),
        LiteralValue::Bool(b) => b.to_string(),
        LiteralValue::Number(n) => format_number(*n),
        LiteralValue::String(s) => format!("\"{s}\""),
    }
}

/// Builds the DOT graph of a whole program.
///
/// A `Program` root links to one subtree per statement, in source order.
///
/// # Parameters
/// - `statements`: The parsed program.
///
/// # Returns
/// The graph as DOT source text.
///
/// # Example
/// ```
/// use prism::{
///     error::Diagnostics,
///     interpreter::{lexer::scan, parser::parse},
///     visualize::program_to_dot,
/// };
///
/// let mut diagnostics = Diagnostics::new();
/// let tokens = scan("print 1 + 2;", &mut diagnostics);
/// let program = parse(&tokens, &mut diagnostics);
/// let dot = program_to_dot(&program);
///
/// assert!(dot.starts_with("digraph AST {"));
/// assert!(dot.contains("label=\"Binary\\noperator: +\""));
/// ```
#[must_use]
pub fn program_to_dot(statements: &[Stmt]) -> String {
    let mut writer = DotWriter::new();
    let root = writer.node(&["Program"], CONTROL_COLOR);
    for statement in statements {
        let child = writer.stmt(statement);
        writer.edge(root, child);
    }
    writer.finish()
}

/// Builds the DOT graph of a single expression.
#[must_use]
pub fn expr_to_dot(expr: &Expr) -> String {
    let mut writer = DotWriter::new();
    writer.expr(expr);
    writer.finish()
}

/// Writes `dot` to `path`.
///
/// # Errors
/// Any I/O error from creating or writing the file.
pub fn write_dot(path: &Path, dot: &str) -> io::Result<()> {
    debug!(path = %path.display(), bytes = dot.len(), "writing AST graph");
    fs::write(path, dot)
}

/// Renders a DOT file to `<path>.png` with the external `dot` tool.
///
/// # Returns
/// The path of the image.
///
/// # Errors
/// An I/O error when `dot` cannot be started, or an error of kind `Other`
/// when it exits unsuccessfully.
pub fn render_png(path: &Path) -> io::Result<PathBuf> {
    let mut image = path.as_os_str().to_owned();
    image.push(".png");
    let image = PathBuf::from(image);

    let status = Command::new("dot").arg("-Tpng")
                                    .arg(path)
                                    .arg("-o")
                                    .arg(&image)
                                    .status()?;
    debug!(%status, image = %image.display(), "ran dot");

    if status.success() {
        Ok(image)
    } else {
        Err(io::Error::other(format!("dot exited with {status}")))
    }
}
