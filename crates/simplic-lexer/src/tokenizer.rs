//! Tokenizer functions.
//!
//! Each function inspects the source under the cursor and either consumes
//! one token (returning it as a [`Node`] where it carries text) or leaves the
//! cursor where it was. Hard failures are limited to constructs that can
//! never be valid: block comments and quoted literals that do not close,
//! and radix prefixes with no digits.

use crate::langdef::{self, BINARY_OPS, UNARY_OPS, UNARY_PREFIX};
use crate::{CompileError, Cursor, Node, NodeKind};

impl Cursor {
    // --- Cleaning ---

    /// Skip comments and intra-line whitespace. Never crosses a newline.
    pub fn clean(&mut self) -> Result<(), CompileError> {
        loop {
            let line = self.skip_line_comment();
            let block = self.skip_block_comment()?;
            let space = self.skip_space();
            if !line && !block && !space {
                return Ok(());
            }
        }
    }

    /// Like [`Cursor::clean`], but also consumes newlines.
    pub fn deep_clean(&mut self) -> Result<(), CompileError> {
        while !self.is_at_end() {
            self.clean()?;
            if self.match_char('\n').is_none() {
                break;
            }
        }
        Ok(())
    }

    /// Skip a `//` comment up to, but not including, the end of its line.
    pub fn skip_line_comment(&mut self) -> bool {
        if !self.match_str("//") {
            return false;
        }
        while !self.is_at_end() && self.peek() != '\n' {
            self.advance();
        }
        true
    }

    /// Skip a `/* ... */` comment. An unclosed comment is blamed on its opening.
    pub fn skip_block_comment(&mut self) -> Result<bool, CompileError> {
        let start = self.position();
        if !self.match_str("/*") {
            return Ok(false);
        }
        while !self.is_at_end() {
            if self.match_str("*/") {
                return Ok(true);
            }
            self.advance();
        }

        self.rewind(start);
        Err(self.error("No closing star-slash for block comment"))
    }

    /// Skip whitespace other than `'\n'`.
    pub fn skip_space(&mut self) -> bool {
        let start = self.position();
        while !self.is_at_end() && self.peek() != '\n' && self.peek().is_whitespace() {
            self.advance();
        }
        self.position() != start
    }

    // --- Keywords and symbols ---

    /// Match `keyword` followed by whitespace.
    ///
    /// Trailing intra-line whitespace is consumed; a trailing newline also
    /// counts as a boundary but stays in place. `forever` is never `for`.
    pub fn is_keyword(&mut self, keyword: &str) -> bool {
        let start = self.position();
        if self.match_str(keyword) && (self.skip_space() || self.peek() == '\n') {
            return true;
        }
        self.rewind(start);
        false
    }

    /// Match any one character of `set`.
    pub fn is_symbol(&mut self, set: &str) -> Option<char> {
        self.match_char_set(set)
    }

    // --- Operators ---

    /// Match a unary operator. The lexeme carries the `u` prefix.
    pub fn unary_op(&mut self) -> Option<Node> {
        let start = self.position();
        self.match_str_set(UNARY_OPS)
            .map(|op| Node::leaf(NodeKind::Operator, format!("{UNARY_PREFIX}{op}"), start))
    }

    pub fn binary_op(&mut self) -> Option<Node> {
        let start = self.position();
        self.match_str_set(BINARY_OPS)
            .map(|op| Node::leaf(NodeKind::Operator, op, start))
    }

    // --- Literals ---

    /// Match a quoted or numeric literal.
    ///
    /// `Ok(None)` is an ordinary non-match the caller may recover from.
    pub fn literal(&mut self) -> Result<Option<Node>, CompileError> {
        if let Some(node) = self.char_string()? {
            return Ok(Some(node));
        }
        if let Some(node) = self.radix_number()? {
            return Ok(Some(node));
        }
        Ok(self.decimal_number())
    }

    /// Match a `"string"` or `'c'` literal, optionally prefixed with `r` for raw.
    /// Escapes are skipped, not decoded; the lexeme is the text between the quotes.
    pub fn char_string(&mut self) -> Result<Option<Node>, CompileError> {
        let start = self.position();
        let raw = self.match_char('r').is_some();

        let Some(quote) = self.match_char_set("'\"") else {
            self.rewind(start);
            return Ok(None);
        };

        let body_start = start + usize::from(raw) + 1;
        while !self.is_at_end() {
            if self.match_char('\\').is_some() {
                self.advance();
            } else if self.match_char(quote).is_some() {
                let kind = if quote == '"' {
                    NodeKind::String
                } else {
                    NodeKind::Char
                };
                let lexeme = self.slice(body_start, self.position() - 1);
                return Ok(Some(Node::leaf(kind, lexeme, start)));
            } else {
                self.advance();
            }
        }

        self.rewind(start);
        Err(self.error("No closing quotation for charstring literal"))
    }

    /// Match a `0x` hexadecimal or `0b` binary integer.
    fn radix_number(&mut self) -> Result<Option<Node>, CompileError> {
        let start = self.position();
        let radix = if self.match_str("0x") {
            16
        } else if self.match_str("0b") {
            2
        } else {
            return Ok(None);
        };

        let digits_start = self.position();
        while self.peek().is_digit(radix) || self.peek() == '_' {
            self.advance();
        }
        if self.position() == digits_start {
            self.rewind(start);
            return Err(self.error(format!("Expected base-{radix} digits after radix prefix")));
        }

        let lexeme = self.slice(start, self.position());
        Ok(Some(Node::leaf(NodeKind::Number, lexeme, start)))
    }

    /// Match a decimal integer or fraction (`42`, `3.14`).
    fn decimal_number(&mut self) -> Option<Node> {
        let start = self.position();
        if !self.peek().is_ascii_digit() {
            return None;
        }
        while self.peek().is_ascii_digit() {
            self.advance();
        }
        // A dot only belongs to the number when a digit follows it.
        if self.peek() == '.' && self.peek_at(1).is_ascii_digit() {
            self.advance();
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        let lexeme = self.slice(start, self.position());
        Some(Node::leaf(NodeKind::Number, lexeme, start))
    }

    // --- Identifiers ---

    /// Match an identifier that is not a reserved word.
    pub fn ident(&mut self) -> Option<Node> {
        let start = self.position();

        let first = self.peek();
        if !(first.is_alphabetic() || first == '_') {
            return None;
        }
        while self.peek().is_alphanumeric() || self.peek() == '_' {
            self.advance();
        }

        let lexeme = self.slice(start, self.position());
        if langdef::is_keyword(&lexeme) {
            self.rewind(start);
            return None;
        }
        Some(Node::leaf(NodeKind::Ident, lexeme, start))
    }
}
