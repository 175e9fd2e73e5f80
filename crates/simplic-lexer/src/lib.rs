//! Simplic Lexer
//!
//! The substrate every Simplic parser runs on: a [`Cursor`] over an
//! immutable source buffer, all-or-nothing primitive matchers, and the
//! tokenizer built on top of them (comment/whitespace cleaning, keywords,
//! symbols, operators, literals and identifiers).
//!
//! The tokenizer does not produce a token stream. Parsers pull one token at
//! a time straight from the cursor and rewind it when a guess fails.
//!
//! # Example
//!
//! ```
//! use simplic_lexer::{Cursor, NodeKind};
//!
//! let mut cursor = Cursor::new("count + 1");
//! let ident = cursor.ident().unwrap();
//! assert_eq!(ident.kind, NodeKind::Ident);
//! assert_eq!(ident.lexeme, "count");
//! ```

pub mod cursor;
pub mod langdef;
pub mod matcher;
pub mod node;
pub mod tokenizer;

pub use cursor::Cursor;
pub use node::{Node, NodeKind};

/// Compile error with position information.
///
/// `position` is the character offset of the cursor when the error was
/// raised (or of the construct being blamed); `line` and `column` are the
/// 1-based coordinates of that offset.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Compile error at line {line}, column {column}: {message}")]
pub struct CompileError {
    pub message: String,
    pub position: usize,
    pub line: usize,
    pub column: usize,
}
