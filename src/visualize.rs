/// Colourised token listing for terminals.
///
/// Renders the source with a line gutter and each token coloured by its
/// category, followed by a table of every token grouped by line.
pub mod tokens;
/// GraphViz export of parsed programs.
///
/// Writes the AST as a `digraph` in the DOT language and optionally renders
/// it to PNG with the external `dot` tool.
pub mod graph;

pub use graph::{program_to_dot, render_png};
pub use tokens::render_tokens;
