//! Simplic Parser
//!
//! Turns Simplic source into a hollow tree: the namespaces and top-level
//! signatures of a compilation unit, with function bodies skipped. Also
//! hosts the operator-precedence expression parser used wherever an
//! expression is expected.
//!
//! Two failure channels are kept apart. Grammar fragments that merely
//! guess at a production ([`Parser::ident_group`], [`Parser::generics_list`])
//! answer `Ok(None)` and rewind the cursor. Everything that runs after a
//! production has been committed to returns a [`CompileError`], and the
//! first one ends the parse.
//!
//! # Example
//!
//! ```
//! use simplic_parser::Parser;
//!
//! let tree = Parser::parse("namespace Math {\n  int abs(int x)\n}").unwrap();
//! assert_eq!(tree.children[0].lexeme, "Math");
//! assert_eq!(tree.children[0].children[0].lexeme, "abs");
//! ```

pub mod expr_parser;
pub mod ident_group;
pub mod parser;
pub mod scope;
pub mod signature;

pub use expr_parser::ExprParser;
pub use parser::Parser;
pub use scope::{assign_signature, ScopeStack};
pub use simplic_lexer::{CompileError, Cursor, Node, NodeKind};
