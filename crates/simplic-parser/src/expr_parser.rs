//! Expression parser for Simplic.
//!
//! Operator-precedence climbing over two explicit stacks. Each round reads
//! an optional unary operator, exactly one operand, and then either the
//! expression terminator or a binary operator. Before a binary operator is
//! pushed, every stacked operator that binds at least as tightly is reduced
//! first, which makes equal-precedence operators left-associative.

use simplic_lexer::langdef::{self, EXPR_END, OPEN_BRACKETS, UNARY_PREFIX};
use simplic_lexer::{CompileError, Cursor, Node};

/// Simplic expression parser.
///
/// Borrows the cursor of whatever is parsing the enclosing statement and
/// leaves it just past the terminator.
pub struct ExprParser<'c> {
    cursor: &'c mut Cursor,
    operators: Vec<Node>,
    operands: Vec<Node>,
}

impl<'c> ExprParser<'c> {
    pub fn new(cursor: &'c mut Cursor) -> Self {
        Self {
            cursor,
            operators: Vec::new(),
            operands: Vec::new(),
        }
    }

    /// Parse a complete expression from a source string. The appended
    /// trailing newline terminates it.
    pub fn parse(source: &str) -> Result<Node, CompileError> {
        let mut cursor = Cursor::new(source);
        ExprParser::new(&mut cursor).parse_expression()
    }

    /// Parse one expression up to and including its terminator.
    pub fn parse_expression(&mut self) -> Result<Node, CompileError> {
        self.operators.clear();
        self.operands.clear();

        loop {
            // Only spaces are skipped here; a comment inside an expression
            // is an unexpected token.
            self.cursor.skip_space();

            if let Some(op) = self.cursor.unary_op() {
                self.operators.push(op);
            }

            self.parse_operand()?;

            if self.is_end()? {
                while !self.operators.is_empty() {
                    self.build_subtree()?;
                }
                return match (self.operands.pop(), self.operands.is_empty()) {
                    (Some(tree), true) => Ok(tree),
                    _ => Err(self.cursor.error("Malformed expression")),
                };
            }

            self.parse_operator()?;
        }
    }

    /// Consume a terminator from `\n , ) ] }` if one follows.
    fn is_end(&mut self) -> Result<bool, CompileError> {
        self.cursor.skip_space();
        Ok(self.cursor.is_symbol(EXPR_END).is_some())
    }

    fn parse_operand(&mut self) -> Result<(), CompileError> {
        self.cursor.skip_space();

        if let Some(literal) = self.cursor.literal()? {
            self.operands.push(literal);
            return Ok(());
        }
        if let Some(ident) = self.cursor.ident() {
            self.operands.push(ident);
            return Ok(());
        }

        let at = self.cursor.position();
        if self.cursor.is_symbol(OPEN_BRACKETS).is_some() {
            return Err(self.cursor.error_at(
                at,
                "Bracketed sub-expressions and initialisers are not supported yet",
            ));
        }
        Err(self
            .cursor
            .error("Unexpected token; expected literal, identifier, or open bracket"))
    }

    fn parse_operator(&mut self) -> Result<(), CompileError> {
        self.cursor.skip_space();

        let at = self.cursor.position();
        if let Some(op) = self.cursor.binary_op() {
            let rank = self.rank(&op)?;
            while let Some(top) = self.operators.last() {
                if self.rank(top)? < rank {
                    break;
                }
                self.build_subtree()?;
            }
            self.operators.push(op);
            return Ok(());
        }

        if self.cursor.is_symbol(OPEN_BRACKETS).is_some() {
            return Err(self.cursor.error_at(
                at,
                "Call, index and initialiser brackets are not supported yet",
            ));
        }
        Err(self
            .cursor
            .error("Unexpected token; expected either a binary or bracket operator"))
    }

    /// Pop one operator and its operands and push the combined subtree back
    /// as an operand. Binary operators get `[left, right]` children.
    fn build_subtree(&mut self) -> Result<(), CompileError> {
        let Some(mut op) = self.operators.pop() else {
            return Err(self.cursor.error("Malformed expression"));
        };

        let arity = if op.lexeme.starts_with(UNARY_PREFIX) { 1 } else { 2 };
        if self.operands.len() < arity {
            return Err(self
                .cursor
                .error_at(op.position, format!("Missing operand for '{}'", op.lexeme)));
        }

        let first_operand = self.operands.len() - arity;
        op.children.extend(self.operands.drain(first_operand..));
        self.operands.push(op);
        Ok(())
    }

    fn rank(&self, op: &Node) -> Result<u8, CompileError> {
        langdef::precedence(&op.lexeme).ok_or_else(|| {
            self.cursor
                .error_at(op.position, format!("Unrecognized operator '{}'", op.lexeme))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use simplic_lexer::NodeKind;

    /// Render a tree as nested s-expressions: `(+ 1 (* 2 3))`.
    fn sexpr(node: &Node) -> String {
        if node.children.is_empty() {
            return node.lexeme.clone();
        }
        let parts: Vec<String> = node.children.iter().map(sexpr).collect();
        format!("({} {})", node.lexeme, parts.join(" "))
    }

    fn parse(source: &str) -> String {
        sexpr(&ExprParser::parse(source).unwrap())
    }

    // =========================================================================
    // Operands
    // =========================================================================

    #[test]
    fn test_single_identifier() {
        let expr = ExprParser::parse("count").unwrap();
        assert_eq!(expr, Node::leaf(NodeKind::Ident, "count", 0));
    }

    #[test]
    fn test_single_literals() {
        assert_eq!(ExprParser::parse("42").unwrap().kind, NodeKind::Number);
        assert_eq!(ExprParser::parse("\"hi\"").unwrap().kind, NodeKind::String);
        assert_eq!(ExprParser::parse("'c'").unwrap().kind, NodeKind::Char);
    }

    // =========================================================================
    // Precedence and associativity
    // =========================================================================

    #[test]
    fn test_multiplication_binds_tighter() {
        let expr = ExprParser::parse("1+2*3").unwrap();
        assert_eq!(expr.kind, NodeKind::Operator);
        assert_eq!(expr.lexeme, "+");
        assert_eq!(expr.children[0], Node::leaf(NodeKind::Number, "1", 0));

        let product = &expr.children[1];
        assert_eq!(product.lexeme, "*");
        assert_eq!(product.children[0], Node::leaf(NodeKind::Number, "2", 2));
        assert_eq!(product.children[1], Node::leaf(NodeKind::Number, "3", 4));
    }

    #[test]
    fn test_left_associative_subtraction() {
        assert_eq!(parse("1-2-3"), "(- (- 1 2) 3)");
    }

    #[test]
    fn test_higher_then_lower() {
        assert_eq!(parse("a * b + c"), "(+ (* a b) c)");
    }

    #[test]
    fn test_mixed_precedence_chain() {
        // `||` and `&&` share a rank, so the earlier one reduces first.
        assert_eq!(
            parse("a || b && c == d + e * f"),
            "(&& (|| a b) (== c (+ d (* e f))))"
        );
    }

    #[test]
    fn test_equal_rank_different_operators() {
        assert_eq!(parse("a && b || c"), "(|| (&& a b) c)");
        assert_eq!(parse("8 / 4 % 3"), "(% (/ 8 4) 3)");
    }

    #[test]
    fn test_shift_and_comparison() {
        assert_eq!(parse("1 << 2 >= x"), "(>= (<< 1 2) x)");
    }

    #[test]
    fn test_member_access_binds_tightest_binary() {
        assert_eq!(parse("p.x * 2"), "(* (. p x) 2)");
    }

    // =========================================================================
    // Unary operators
    // =========================================================================

    #[test]
    fn test_leading_unary() {
        assert_eq!(parse("-a"), "(u- a)");
    }

    #[test]
    fn test_unary_binds_tighter_than_binary() {
        assert_eq!(parse("-a * b"), "(* (u- a) b)");
        assert_eq!(parse("a * -b + c"), "(+ (* a (u- b)) c)");
    }

    #[test]
    fn test_address_and_dereference() {
        assert_eq!(parse("*p + &q"), "(+ (u* p) (u& q))");
    }

    #[test]
    fn test_not_and_not_equal() {
        assert_eq!(parse("!done != ready"), "(!= (u! done) ready)");
    }

    // =========================================================================
    // Termination
    // =========================================================================

    #[test]
    fn test_terminators() {
        for source in ["a + b, c", "a + b) c", "a + b] c", "a + b} c"] {
            let mut cursor = Cursor::new(source);
            let expr = ExprParser::new(&mut cursor).parse_expression().unwrap();
            assert_eq!(sexpr(&expr), "(+ a b)");
            assert_eq!(cursor.position(), 6);
        }
    }

    #[test]
    fn test_parser_reuse_on_same_cursor() {
        let mut cursor = Cursor::new("x * 2, y - 1\n");
        let mut parser = ExprParser::new(&mut cursor);
        assert_eq!(sexpr(&parser.parse_expression().unwrap()), "(* x 2)");
        assert_eq!(sexpr(&parser.parse_expression().unwrap()), "(- y 1)");
    }

    #[test]
    fn test_operator_positions() {
        let expr = ExprParser::parse("a  - b").unwrap();
        assert_eq!(expr.position, 3);
        let expr = ExprParser::parse("x + !y").unwrap();
        assert_eq!(expr.children[1].position, 4);
    }

    // =========================================================================
    // Errors
    // =========================================================================

    #[test]
    fn test_bracketed_operand_unsupported() {
        let err = ExprParser::parse("a + (b)").unwrap_err();
        assert!(err.message.contains("not supported"));
        assert_eq!(err.position, 4);
    }

    #[test]
    fn test_call_bracket_unsupported() {
        let err = ExprParser::parse("f[0]").unwrap_err();
        assert!(err.message.contains("not supported"));
        assert_eq!(err.position, 1);
    }

    #[test]
    fn test_missing_operand() {
        let err = ExprParser::parse("a +").unwrap_err();
        assert!(err.message.contains("expected literal"));
    }

    #[test]
    fn test_comment_is_unexpected() {
        // `/*` reads as divide then dereference; the closing `*/` has no operand.
        let err = ExprParser::parse("a /* c */ + b").unwrap_err();
        assert!(err.message.contains("expected literal, identifier"));
    }

    #[test]
    fn test_assignment_is_not_an_operator() {
        let err = ExprParser::parse("a = b").unwrap_err();
        assert_eq!(err.position, 2);
    }

    #[test]
    fn test_keyword_operand_rejected() {
        assert!(ExprParser::parse("return + 1").is_err());
    }

    #[test]
    fn test_unclosed_string_blames_opening() {
        let err = ExprParser::parse("a + \"oops").unwrap_err();
        assert_eq!(err.position, 4);
    }
}
