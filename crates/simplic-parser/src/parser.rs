//! Hollow-tree builder.
//!
//! Reads top-level constructs in a loop and files each completed signature
//! under the namespace path currently open. At every step, after a deep
//! clean, the first matching transition wins:
//!
//! 1. `}` closes the innermost namespace frame.
//! 2. `namespace` opens a frame.
//! 3. `struct` and 4. `const` parse their signatures.
//! 5. Anything else must be a function signature.

use simplic_lexer::langdef::{CLOSE_CURLY, KW_CONST, KW_NAMESPACE, KW_STRUCT};
use simplic_lexer::{CompileError, Cursor, Node, NodeKind};

use crate::scope::{assign_signature, ScopeStack};

/// Simplic source parser.
///
/// Owns the [`Cursor`] for one compilation unit. The grammar fragments and
/// signature parsers are methods on this type (see `ident_group` and
/// `signature`).
pub struct Parser {
    pub(crate) cursor: Cursor,
}

impl Parser {
    /// Create a parser at the start of `source`.
    pub fn new(source: &str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    /// Parse source code into a hollow tree rooted at `ROOT`.
    pub fn parse(source: &str) -> Result<Node, CompileError> {
        let mut parser = Parser::new(source);
        parser.parse_hollow_tree()
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn cursor_mut(&mut self) -> &mut Cursor {
        &mut self.cursor
    }

    /// Parse every top-level construct up to end of input.
    pub fn parse_hollow_tree(&mut self) -> Result<Node, CompileError> {
        let mut root = Node::new(NodeKind::Root);
        let mut scope = ScopeStack::new();

        self.cursor.deep_clean()?;

        while !self.cursor.is_at_end() {
            let at = self.cursor.position();

            if self.cursor.is_symbol(CLOSE_CURLY).is_some() {
                if scope.pop_frame().is_none() {
                    return Err(self.cursor.error_at(
                        at,
                        "Unmatched closing bracket '}'; no namespace is open here.",
                    ));
                }
            } else if self.cursor.is_keyword(KW_NAMESPACE) {
                let segments = self.parse_namespace_header()?;
                scope.push_frame(segments);
            } else if self.cursor.is_keyword(KW_STRUCT) {
                let signature = self.parse_struct_signature()?;
                assign_signature(&mut root, &scope.path(), signature);
            } else if self.cursor.is_keyword(KW_CONST) {
                let signature = self.parse_const_signature()?;
                assign_signature(&mut root, &scope.path(), signature);
            } else {
                let signature = self.parse_function_signature()?;
                assign_signature(&mut root, &scope.path(), signature);
            }

            self.cursor.deep_clean()?;
        }

        if !scope.is_empty() {
            return Err(self.cursor.error(format!(
                "The namespace '{}' has not been closed; check your '}}' brackets.",
                scope.dotted()
            )));
        }

        Ok(root)
    }
}
