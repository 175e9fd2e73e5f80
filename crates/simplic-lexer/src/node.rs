use std::fmt;

use serde::Serialize;

/// Kind tag of a tree node. The tag decides how `children` are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING-KEBAB-CASE")]
pub enum NodeKind {
    // Structure
    Root,
    Namespace,
    FuncDef,

    // Signature parts
    IdentGroup,
    GenericsList,
    ArgumentsList,
    Argument,
    PointersList,
    Pointer,

    // Leaves
    Ident,
    Operator,
    String,
    Char,
    Number,
}

impl NodeKind {
    pub fn label(self) -> &'static str {
        match self {
            NodeKind::Root => "ROOT",
            NodeKind::Namespace => "NAMESPACE",
            NodeKind::FuncDef => "FUNC-DEF",
            NodeKind::IdentGroup => "IDENT-GROUP",
            NodeKind::GenericsList => "GENERICS-LIST",
            NodeKind::ArgumentsList => "ARGUMENTS-LIST",
            NodeKind::Argument => "ARGUMENT",
            NodeKind::PointersList => "POINTERS-LIST",
            NodeKind::Pointer => "POINTER",
            NodeKind::Ident => "IDENT",
            NodeKind::Operator => "OPERATOR",
            NodeKind::String => "STRING",
            NodeKind::Char => "CHAR",
            NodeKind::Number => "NUMBER",
        }
    }

    /// List kinds are always present in their parent, even when empty.
    pub fn is_list(self) -> bool {
        matches!(
            self,
            NodeKind::GenericsList | NodeKind::ArgumentsList | NodeKind::PointersList
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The universal tree unit.
///
/// Leaves carry the matched text in `lexeme`; structural nodes leave it
/// empty (namespaces, functions and arguments carry their name).
/// `position` is the offset where the token began, `0` for purely
/// structural nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub kind: NodeKind,
    pub lexeme: String,
    pub children: Vec<Node>,
    pub position: usize,
}

impl Node {
    /// A structural node with no lexeme and no children.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            lexeme: String::new(),
            children: Vec::new(),
            position: 0,
        }
    }

    pub fn leaf(kind: NodeKind, lexeme: impl Into<String>, position: usize) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            children: Vec::new(),
            position,
        }
    }

    pub fn push(&mut self, child: Node) {
        self.children.push(child);
    }

    pub fn last_is(&self, kind: NodeKind) -> bool {
        self.children.last().is_some_and(|c| c.kind == kind)
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        write!(f, "{}{}", "  ".repeat(depth), self.kind)?;
        if !self.lexeme.is_empty() {
            write!(f, " {}", self.lexeme.escape_debug())?;
        }
        if self.position != 0 {
            write!(f, " @{}", self.position)?;
        }
        if self.kind.is_list() && self.children.is_empty() {
            f.write_str(" (empty)")?;
        }
        writeln!(f)?;

        for child in &self.children {
            child.write_indented(f, depth + 1)?;
        }
        Ok(())
    }
}

/// Indented dump, one node per line.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}
