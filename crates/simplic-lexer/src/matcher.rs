//! Primitive matchers.
//!
//! Every matcher consumes on success and leaves the cursor untouched on
//! failure. Multi-character matches consume their whole length or nothing;
//! the backtracking grammar above relies on this.

use crate::Cursor;

impl Cursor {
    /// Consume `c` if it is under the cursor.
    pub fn match_char(&mut self, c: char) -> Option<char> {
        if !self.is_at_end() && self.peek() == c {
            self.advance();
            Some(c)
        } else {
            None
        }
    }

    /// Consume the first character of `set` found under the cursor.
    pub fn match_char_set(&mut self, set: &str) -> Option<char> {
        set.chars().find_map(|c| self.match_char(c))
    }

    /// Consume `literal` if the source continues with it.
    pub fn match_str(&mut self, literal: &str) -> bool {
        let matches = literal
            .chars()
            .enumerate()
            .all(|(i, c)| self.peek_at(i) == c);

        if matches {
            for _ in literal.chars() {
                self.advance();
            }
        }
        matches
    }

    /// Consume the first entry of `set` the source continues with.
    ///
    /// Entries are tried in order, so longer literals must come before their
    /// prefixes (`"<<"` before `"<"`).
    pub fn match_str_set<'s>(&mut self, set: &[&'s str]) -> Option<&'s str> {
        set.iter().copied().find(|literal| self.match_str(literal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_char() {
        let mut cursor = Cursor::new("ab");
        assert_eq!(cursor.match_char('b'), None);
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.match_char('a'), Some('a'));
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_match_char_set() {
        let mut cursor = Cursor::new("}x");
        assert_eq!(cursor.match_char_set("([{"), None);
        assert_eq!(cursor.match_char_set(")]}"), Some('}'));
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_match_str_all_or_nothing() {
        let mut cursor = Cursor::new("/x");
        assert!(!cursor.match_str("/*"));
        assert_eq!(cursor.position(), 0);
        assert!(cursor.match_str("/x"));
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_match_str_past_end() {
        let mut cursor = Cursor::new("na");
        assert!(!cursor.match_str("namespace"));
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_match_str_set_order() {
        let mut cursor = Cursor::new("<<=");
        assert_eq!(cursor.match_str_set(&["<<", "<"]), Some("<<"));
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.match_str_set(&["==", "!="]), None);
        assert_eq!(cursor.position(), 2);
    }
}
