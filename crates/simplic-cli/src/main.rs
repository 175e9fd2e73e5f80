use clap::{Parser, Subcommand};
use simplic_lexer::CompileError;
use simplic_parser::ExprParser;
use std::path::Path;

#[derive(Parser)]
#[command(name = "smplc")]
#[command(about = "Simplic compiler front end")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check a source file's top-level declarations for errors
    Check {
        /// Input source file
        path: String,
    },

    /// Print the hollow tree of a source file
    Tree {
        /// Input source file
        path: String,
    },

    /// Print the tree of a single expression
    Expr {
        /// Expression text, e.g. "1 + 2 * 3"
        source: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Check { path } => cmd_check(&path),
        Command::Tree { path } => cmd_tree(&path),
        Command::Expr { source } => cmd_expr(&source),
    }
}

fn read_source(path: &str) -> String {
    let p = Path::new(path);
    if !p.exists() {
        eprintln!("Error: file not found: {path}");
        std::process::exit(1);
    }
    match std::fs::read_to_string(p) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {path}: {e}");
            std::process::exit(1);
        }
    }
}

fn fail(path: &str, e: CompileError) -> ! {
    eprintln!("{path}: {e}");
    std::process::exit(1);
}

fn cmd_check(path: &str) {
    let source = read_source(path);

    if let Err(e) = simplic_parser::Parser::parse(&source) {
        fail(path, e);
    }

    eprintln!("OK: {path}");
}

fn cmd_tree(path: &str) {
    let source = read_source(path);

    match simplic_parser::Parser::parse(&source) {
        Ok(tree) => print!("{tree}"),
        Err(e) => fail(path, e),
    }
}

fn cmd_expr(source: &str) {
    match ExprParser::parse(source) {
        Ok(tree) => print!("{tree}"),
        Err(e) => fail("<expr>", e),
    }
}
