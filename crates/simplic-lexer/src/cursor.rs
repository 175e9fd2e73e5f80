use crate::CompileError;

/// A read position over an immutable source buffer.
///
/// The buffer is a `Vec<char>` for index-based navigation and always ends
/// with an appended `'\n'`, so every end-of-line scan also terminates at
/// end of input. The offset is the only mutable state; saving it with
/// [`Cursor::position`] and restoring it with [`Cursor::rewind`] is the
/// only undo mechanism the parsers use.
#[derive(Debug, Clone)]
pub struct Cursor {
    chars: Vec<char>,
    pos: usize,
}

impl Cursor {
    /// Create a cursor at the start of `source`, appending the trailing newline.
    pub fn new(source: &str) -> Self {
        let mut chars: Vec<char> = source.chars().collect();
        chars.push('\n');
        Self { chars, pos: 0 }
    }

    /// Current character offset.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Restore a previously saved offset.
    pub fn rewind(&mut self, pos: usize) {
        self.pos = pos.min(self.chars.len());
    }

    /// Length of the buffer in characters, trailing newline included.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// Character under the cursor, `'\0'` past the end.
    pub fn peek(&self) -> char {
        self.peek_at(0)
    }

    /// Character `offset` places ahead of the cursor, `'\0'` past the end.
    pub fn peek_at(&self, offset: usize) -> char {
        self.chars.get(self.pos + offset).copied().unwrap_or('\0')
    }

    pub fn advance(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
        }
    }

    /// Source text between two offsets.
    pub fn slice(&self, start: usize, end: usize) -> String {
        let end = end.min(self.chars.len());
        let start = start.min(end);
        self.chars[start..end].iter().collect()
    }

    /// 1-based line and column of a character offset.
    pub fn line_col(&self, position: usize) -> (usize, usize) {
        let mut line = 1;
        let mut column = 1;
        for &c in self.chars.iter().take(position) {
            if c == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        (line, column)
    }

    /// Error at the current position.
    pub fn error(&self, message: impl Into<String>) -> CompileError {
        self.error_at(self.pos, message)
    }

    /// Error blamed on an earlier position, e.g. the opening delimiter of an
    /// unterminated construct.
    pub fn error_at(&self, position: usize, message: impl Into<String>) -> CompileError {
        let (line, column) = self.line_col(position);
        CompileError {
            message: message.into(),
            position,
            line,
            column,
        }
    }
}
