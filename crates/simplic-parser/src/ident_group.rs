//! Speculative grammar fragments: ident groups and generics lists.
//!
//! ```text
//! ident-group   := IDENT ( "." IDENT )* generics-list?
//! generics-list := "<" ident-group ( "," ident-group )* ">"
//! ```
//!
//! Both fragments are mutually recursive and never report a grammar
//! mismatch as an error: they answer `Ok(None)` with the cursor restored to
//! where they started, so the caller can try another production. The only
//! `Err` they pass on comes from the tokenizer (an unclosed block comment),
//! which no alternative production could recover from.

use simplic_lexer::langdef::{CLOSE_ANGLE, COMMA, DOT, OPEN_ANGLE};
use simplic_lexer::{CompileError, Node, NodeKind};

use crate::Parser;

impl Parser {
    /// Match a dotted identifier chain, optionally closed by a generics list.
    ///
    /// A generics list is tried before a dot at every identifier boundary;
    /// once one matches, the group is finished.
    pub fn ident_group(&mut self) -> Result<Option<Node>, CompileError> {
        let start = self.cursor.position();
        self.cursor.clean()?;

        let Some(first) = self.cursor.ident() else {
            self.cursor.rewind(start);
            return Ok(None);
        };

        let mut group = Node::new(NodeKind::IdentGroup);
        group.push(first);

        while !self.cursor.is_at_end() {
            if let Some(generics) = self.generics_list()? {
                group.push(generics);
                break;
            }

            self.cursor.clean()?;
            if self.cursor.is_symbol(DOT).is_none() {
                break;
            }
            // A dot commits to another identifier; `A.` is not a group.
            match self.cursor.ident() {
                Some(ident) => group.push(ident),
                None => {
                    self.cursor.rewind(start);
                    return Ok(None);
                }
            }
        }

        Ok(Some(group))
    }

    /// Match `<` ident-group (`,` ident-group)* `>`.
    pub fn generics_list(&mut self) -> Result<Option<Node>, CompileError> {
        let start = self.cursor.position();
        self.cursor.clean()?;

        if self.cursor.is_symbol(OPEN_ANGLE).is_none() {
            self.cursor.rewind(start);
            return Ok(None);
        }

        let mut list = Node::new(NodeKind::GenericsList);
        let Some(first) = self.ident_group()? else {
            self.cursor.rewind(start);
            return Ok(None);
        };
        list.push(first);

        loop {
            self.cursor.clean()?;
            if self.cursor.is_symbol(COMMA).is_some() {
                let Some(param) = self.ident_group()? else {
                    self.cursor.rewind(start);
                    return Ok(None);
                };
                list.push(param);
            } else if self.cursor.is_symbol(CLOSE_ANGLE).is_some() {
                return Ok(Some(list));
            } else {
                self.cursor.rewind(start);
                return Ok(None);
            }
        }
    }
}
