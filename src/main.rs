use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use prism::{
    error::Diagnostics,
    interpreter::{evaluator::core::Interpreter, lexer::scan, parser::parse},
    run,
    visualize::{graph::write_dot, program_to_dot, render_png, render_tokens},
};

/// Command-line usage error.
const EXIT_USAGE: u8 = 64;
/// The script could not be read.
const EXIT_IO_ERROR: u8 = 74;

/// prism runs scripts written in a small dynamically typed language, or starts
/// an interactive prompt when no script is given.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Script to run. Without one, prism reads lines from standard input.
    script: Option<PathBuf>,

    /// Anything after the script. Rejected with a usage error.
    #[arg(hide = true)]
    extra: Vec<String>,

    /// Print the highlighted source and token table before running.
    #[arg(short, long)]
    tokens: bool,

    /// Write the parsed program as a GraphViz graph to this file.
    #[arg(long, value_name = "FILE")]
    ast: Option<PathBuf>,

    /// Also render the graph written by `--ast` to PNG with `dot`.
    #[arg(long, requires = "ast")]
    render: bool,
}

/// Installs a stderr log subscriber when `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)
                                                        .with_target(true)
                                                        .with_level(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn report(diagnostics: &Diagnostics) {
    for diagnostic in diagnostics {
        eprintln!("{diagnostic}");
    }
}

/// Writes the requested views of `source`. Failures are reported and ignored.
fn visualize(source: &str, args: &Args) {
    if !args.tokens && args.ast.is_none() {
        return;
    }

    let mut diagnostics = Diagnostics::new();
    let tokens = scan(source, &mut diagnostics);

    if args.tokens {
        print!("{}", render_tokens(source, &tokens));
    }

    let Some(path) = &args.ast else {
        return;
    };
    let program = parse(&tokens, &mut diagnostics);
    if let Err(e) = write_dot(path, &program_to_dot(&program)) {
        eprintln!("Could not write AST graph '{}': {e}", path.display());
        return;
    }

    if args.render {
        match render_png(path) {
            Ok(image) => println!("AST visualisation created: {}", image.display()),
            Err(e) => eprintln!("Failed to generate visualisation ({e}). Make sure GraphViz is \
                                 installed."),
        }
    }
}

/// Runs a script once and returns the process exit status.
fn run_file(path: &Path, args: &Args) -> u8 {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Could not open file '{}': {e}", path.display());
            return EXIT_IO_ERROR;
        },
    };

    visualize(&source, args);

    let mut interpreter = Interpreter::stdout();
    let diagnostics = run(&source, &mut interpreter);
    report(&diagnostics);
    diagnostics.exit_code()
}

/// Takes the next prompt line. A read failure is reported and ends the
/// session like end of input does.
fn next_line(lines: &mut impl Iterator<Item = io::Result<String>>) -> Option<String> {
    match lines.next()? {
        Ok(line) => Some(line),
        Err(e) => {
            eprintln!("Could not read input: {e}");
            None
        },
    }
}

fn run_prompt(args: &Args) -> u8 {
    let mut interpreter = Interpreter::stdout();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let Some(line) = next_line(&mut lines) else {
            break;
        };

        visualize(&line, args);
        report(&run(&line, &mut interpreter));
    }

    0
}

/// Dispatches on the parsed arguments and returns the process exit status.
fn execute(args: &Args) -> u8 {
    if !args.extra.is_empty() {
        println!("Usage: prism [script]");
        return EXIT_USAGE;
    }

    match &args.script {
        Some(path) => run_file(path, args),
        None => run_prompt(args),
    }
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();
    ExitCode::from(execute(&args))
}

#[cfg(test)]
mod tests {
    use std::io::{BufRead, Cursor};

    use super::*;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn extra_positionals_are_a_usage_error() {
        assert_eq!(execute(&args(&["prism", "a.lox", "b.lox"])), EXIT_USAGE);
    }

    #[test]
    fn unreadable_script_is_an_io_error() {
        assert_eq!(execute(&args(&["prism", "tests/scripts/no_such_script.lox"])),
                   EXIT_IO_ERROR);
    }

    #[test]
    fn script_status_follows_its_diagnostics() {
        assert_eq!(execute(&args(&["prism", "tests/scripts/while.lox"])), 0);
        assert_eq!(execute(&args(&["prism", "tests/scripts/syntax_errors.lox"])), 65);
        assert_eq!(execute(&args(&["prism", "tests/scripts/runtime_add.lox"])), 70);
    }

    #[test]
    fn render_requires_an_ast_file() {
        assert!(Args::try_parse_from(["prism", "--render", "a.lox"]).is_err());
    }

    #[test]
    fn invalid_utf8_input_ends_the_prompt() {
        let mut lines = Cursor::new(b"print 1;\n\xff\nprint 2;\n".to_vec()).lines();

        assert_eq!(next_line(&mut lines).as_deref(), Some("print 1;"));
        assert_eq!(next_line(&mut lines), None);
    }

    #[test]
    fn end_of_input_ends_the_prompt() {
        let mut lines = Cursor::new(Vec::new()).lines();
        assert_eq!(next_line(&mut lines), None);
    }
}
