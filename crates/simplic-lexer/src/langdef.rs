//! Language definition: reserved words, symbol sets and the operator table.

// Keywords
pub const KW_NAMESPACE: &str = "namespace";
pub const KW_STRUCT: &str = "struct";
pub const KW_CONST: &str = "const";
pub const KW_USING: &str = "using";
pub const KW_RETURN: &str = "return";
pub const KW_STATIC: &str = "static";
pub const KW_INLINE: &str = "inline";
pub const KW_IF: &str = "if";
pub const KW_ELSE: &str = "else";
pub const KW_WHILE: &str = "while";
pub const KW_FOR: &str = "for";

pub const KEYWORDS: &[&str] = &[
    KW_NAMESPACE,
    KW_STRUCT,
    KW_CONST,
    KW_USING,
    KW_RETURN,
    KW_STATIC,
    KW_INLINE,
    KW_IF,
    KW_ELSE,
    KW_WHILE,
    KW_FOR,
];

// Signature symbols (character sets for `Cursor::is_symbol`)
pub const DOT: &str = ".";
pub const COMMA: &str = ",";
pub const OPEN_ANGLE: &str = "<";
pub const CLOSE_ANGLE: &str = ">";
pub const OPEN_CURLY: &str = "{";
pub const CLOSE_CURLY: &str = "}";
pub const OPEN_ROUND: &str = "(";
pub const CLOSE_ROUND: &str = ")";
pub const POINTER_DECL: &str = "*";

// Expression symbols
pub const OPEN_BRACKETS: &str = "([{";
pub const EXPR_END: &str = "\n,)]}";

/// Prefix marking a unary operator in an `OPERATOR` lexeme (`u-`, `u!`).
pub const UNARY_PREFIX: char = 'u';

pub const UNARY_OPS: &[&str] = &["-", "!", "&", "*"];

/// Longest first, so `<<` is never read as two `<`.
pub const BINARY_OPS: &[&str] = &[
    "<<", ">>", ">=", "<=", "==", "!=", "&&", "||", ".", "*", "/", "%", "+", "-", ">", "<",
    "&", "|", "^",
];

/// Binding strength of an operator lexeme; higher binds tighter.
/// Unary operators are looked up with their `u` prefix.
pub fn precedence(op: &str) -> Option<u8> {
    let rank = match op {
        "u&" | "u*" => 9,
        "." => 8,
        "u-" | "u!" => 7,
        "*" | "/" | "%" => 6,
        "+" | "-" => 5,
        "<<" | ">>" => 4,
        ">=" | "<=" | ">" | "<" => 3,
        "==" | "!=" => 2,
        "&&" | "||" => 1,
        "&" | "|" | "^" => 0,
        _ => return None,
    };
    Some(rank)
}

/// Check if a word is reserved.
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_operator_has_a_rank() {
        for op in BINARY_OPS {
            assert!(precedence(op).is_some(), "missing rank for {op}");
        }
        for op in UNARY_OPS {
            assert!(precedence(&format!("{UNARY_PREFIX}{op}")).is_some());
        }
    }

    #[test]
    fn test_binary_ops_longest_first() {
        for (i, op) in BINARY_OPS.iter().enumerate() {
            for later in &BINARY_OPS[i + 1..] {
                assert!(
                    !later.starts_with(op) || later == op,
                    "{later} is shadowed by {op}"
                );
            }
        }
    }

    #[test]
    fn test_unary_binds_tighter_than_binary_arithmetic() {
        assert!(precedence("u-") > precedence("*"));
        assert!(precedence("*") > precedence("+"));
        assert_eq!(precedence("="), None);
    }

    #[test]
    fn test_is_keyword() {
        assert!(is_keyword("namespace"));
        assert!(is_keyword("for"));
        assert!(!is_keyword("forever"));
    }
}
