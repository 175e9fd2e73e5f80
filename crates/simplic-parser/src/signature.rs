//! Signature parsers.
//!
//! These run once the hollow-tree builder has committed to a production
//! (by keyword, or by falling back to a function). From then on the grammar
//! is mandatory and any mismatch is a [`CompileError`] at the cursor.

use simplic_lexer::langdef::{
    CLOSE_CURLY, CLOSE_ROUND, COMMA, OPEN_CURLY, OPEN_ROUND, POINTER_DECL,
};
use simplic_lexer::{CompileError, Node, NodeKind};

use crate::Parser;

impl Parser {
    /// Parse the rest of a `namespace` header: `A.B.C {`.
    ///
    /// Returns the introduced segments, outermost first. The opening brace
    /// may sit on a later line.
    pub fn parse_namespace_header(&mut self) -> Result<Vec<String>, CompileError> {
        let Some(group) = self.ident_group()? else {
            return Err(self.cursor.error(
                "Unexpected token; expected one or more identifiers for the namespace name",
            ));
        };
        if group.last_is(NodeKind::GenericsList) {
            return Err(self
                .cursor
                .error("Unexpected token; no generics allowed for namespace declarations"));
        }

        self.cursor.deep_clean()?;
        if self.cursor.is_symbol(OPEN_CURLY).is_none() {
            return Err(self
                .cursor
                .error("Unexpected token; expected a '{' for all namespace declarations"));
        }

        Ok(group.children.into_iter().map(|ident| ident.lexeme).collect())
    }

    /// Parse a function signature: return type, name with optional generics,
    /// argument list. A body that follows is skipped.
    ///
    /// Produces `FUNC-DEF name` with children
    /// `[IDENT-GROUP, GENERICS-LIST, ARGUMENTS-LIST]`.
    pub fn parse_function_signature(&mut self) -> Result<Node, CompileError> {
        let Some(return_type) = self.ident_group()? else {
            return Err(self
                .cursor
                .error("A function definition must begin with a return type."));
        };

        let Some(mut name_group) = self.ident_group()? else {
            return Err(self
                .cursor
                .error("A function definition must have a function name."));
        };

        // The generics list is always present, empty for a plain function.
        let mut generics = Node::new(NodeKind::GenericsList);
        if name_group.last_is(NodeKind::GenericsList) {
            if let Some(list) = name_group.children.pop() {
                generics = list;
            }
        }

        if name_group.children.len() > 1 {
            return Err(self.cursor.error(
                "A function definition does not allow a namespace path before the function name",
            ));
        }
        let Some(name) = name_group.children.pop() else {
            return Err(self
                .cursor
                .error("A function definition must have a function name."));
        };

        let arguments = self.parse_argument_list()?;
        self.skip_function_body()?;

        let mut func = Node::leaf(NodeKind::FuncDef, name.lexeme, name.position);
        func.push(return_type);
        func.push(generics);
        func.push(arguments);
        Ok(func)
    }

    /// Parse `( argument, ... )`. `()` yields an empty `ARGUMENTS-LIST`.
    pub fn parse_argument_list(&mut self) -> Result<Node, CompileError> {
        let mut list = Node::new(NodeKind::ArgumentsList);

        self.cursor.clean()?;
        if self.cursor.is_symbol(OPEN_ROUND).is_none() {
            return Err(self
                .cursor
                .error("A function argument list must begin with round bracket."));
        }

        self.cursor.clean()?;
        if self.cursor.is_symbol(CLOSE_ROUND).is_some() {
            return Ok(list);
        }

        loop {
            list.push(self.parse_argument()?);

            self.cursor.clean()?;
            if self.cursor.is_symbol(COMMA).is_some() {
                continue;
            }
            if self.cursor.is_symbol(CLOSE_ROUND).is_some() {
                return Ok(list);
            }
            return Err(self
                .cursor
                .error("Unexpected token; expected either a comma or closing bracket."));
        }
    }

    /// Parse `Type * * name`.
    ///
    /// Produces `ARGUMENT name` with children `[IDENT-GROUP, POINTERS-LIST]`;
    /// every `*` lands in the one pointers list.
    pub fn parse_argument(&mut self) -> Result<Node, CompileError> {
        let Some(arg_type) = self.ident_group()? else {
            return Err(self
                .cursor
                .error("Unexpected token; expected identifiers for argument type."));
        };

        let mut pointers = Node::new(NodeKind::PointersList);
        loop {
            self.cursor.clean()?;
            let at = self.cursor.position();

            if self.cursor.is_symbol(POINTER_DECL).is_some() {
                pointers.push(Node::leaf(NodeKind::Pointer, POINTER_DECL, at));
            } else if let Some(name) = self.cursor.ident() {
                let mut arg = Node::leaf(NodeKind::Argument, name.lexeme, name.position);
                arg.push(arg_type);
                arg.push(pointers);
                return Ok(arg);
            } else {
                return Err(self.cursor.error(
                    "Unexpected token; expected asterisk * for pointer declaration or an argument name",
                ));
            }
        }
    }

    /// Struct declarations are a recognised production with no grammar yet.
    pub fn parse_struct_signature(&mut self) -> Result<Node, CompileError> {
        Err(self.cursor.error("struct declarations are not supported yet"))
    }

    /// Const blocks are a recognised production with no grammar yet.
    pub fn parse_const_signature(&mut self) -> Result<Node, CompileError> {
        Err(self.cursor.error("const declarations are not supported yet"))
    }

    /// Skip a `{ ... }` function body if one follows, leaving the cursor
    /// untouched otherwise. Braces inside comments and quoted literals do
    /// not count. An unclosed body is blamed on its opening brace.
    fn skip_function_body(&mut self) -> Result<(), CompileError> {
        let before = self.cursor.position();
        self.cursor.deep_clean()?;

        let open = self.cursor.position();
        if self.cursor.is_symbol(OPEN_CURLY).is_none() {
            self.cursor.rewind(before);
            return Ok(());
        }

        let mut depth = 1usize;
        while !self.cursor.is_at_end() {
            if self.cursor.skip_line_comment() || self.cursor.skip_block_comment()? {
                continue;
            }
            if matches!(self.cursor.peek(), '"' | '\'') {
                self.cursor.char_string()?;
                continue;
            }
            if self.cursor.is_symbol(OPEN_CURLY).is_some() {
                depth += 1;
            } else if self.cursor.is_symbol(CLOSE_CURLY).is_some() {
                depth -= 1;
                if depth == 0 {
                    return Ok(());
                }
            } else {
                self.cursor.advance();
            }
        }

        Err(self
            .cursor
            .error_at(open, "The function body is never closed; check your '}' brackets."))
    }
}
