//! Namespace scope tracking and hollow-tree insertion.

use simplic_lexer::{Node, NodeKind};

/// Stack of namespace scope frames.
///
/// Each frame holds the segments introduced by one `namespace A.B { ... }`
/// header and is popped as a unit by its closing brace. The flattened
/// concatenation of all frames is the insertion path for signatures.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeStack {
    frames: Vec<Vec<String>>,
}

impl ScopeStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_frame(&mut self, segments: Vec<String>) {
        self.frames.push(segments);
    }

    /// Pop the innermost frame; `None` when no namespace is open.
    pub fn pop_frame(&mut self) -> Option<Vec<String>> {
        self.frames.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Current insertion path, outermost segment first.
    pub fn path(&self) -> Vec<&str> {
        self.frames.iter().flatten().map(String::as_str).collect()
    }

    /// Path joined with dots, as shown in diagnostics.
    pub fn dotted(&self) -> String {
        self.path().join(".")
    }
}

/// Append `signature` under the namespace path `scope`, starting at `root`.
///
/// Namespace nodes are created on first use and reused afterwards, so every
/// block that reopens a namespace adds to the same node, in source order.
/// The walk re-descends from the root on every call.
pub fn assign_signature(root: &mut Node, scope: &[&str], signature: Node) {
    let mut current = root;

    for &segment in scope {
        let existing = current
            .children
            .iter()
            .position(|c| c.kind == NodeKind::Namespace && c.lexeme == segment);

        let index = match existing {
            Some(index) => index,
            None => {
                current.push(Node::leaf(NodeKind::Namespace, segment, 0));
                current.children.len() - 1
            }
        };
        current = &mut current.children[index];
    }

    current.push(signature);
}
