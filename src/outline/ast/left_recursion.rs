//! Direct left recursion
//!
//! A rule `a : a x | a y | b | c ;` can't be handled by a top-down parser. The classic rewrite
//! turns `A → A α | β` into `β (α)*`:
//!
//!     a : (b | c) (x | y)* ;
//!
//! Only direct recursion is detected, meaning an alternative whose very first token is the rule
//! name. Recursion through other rules, or hidden behind an optional prefix, is not.

use super::rule::Alternative;

/// True if any alternative starts with a reference to `name`
pub fn has_direct_left_recursion(name: &str, alternatives: &[Alternative<'_>]) -> bool {
    alternatives.iter().any(|alternative| starts_with(alternative, name))
}

/// Render the left-recursion-free form of the alternatives.
///
/// Alternatives starting with `name` contribute the tokens after that self-reference to the
/// starred group; all others contribute their whole token list to the leading group.
pub fn eliminate_left_recursion(name: &str, alternatives: &[Alternative<'_>]) -> String {
    let mut base = Vec::new();
    let mut tails = Vec::new();

    for alternative in alternatives {
        if starts_with(alternative, name) {
            tails.push(join_texts(&alternative[1..]));
        } else {
            base.push(join_texts(alternative));
        }
    }

    format!("({}) ({})*", base.join(" | "), tails.join(" | "))
}

fn starts_with(alternative: &Alternative<'_>, name: &str) -> bool {
    alternative.first().is_some_and(|token| token.text == name)
}

fn join_texts(alternative: &[&crate::outline::token::Token<'_>]) -> String {
    alternative
        .iter()
        .map(|token| token.text)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::testing::factories::mk_token;
    use crate::outline::token::{Token, TokenKind};

    fn ident(text: &'static str) -> Token<'static> {
        mk_token(TokenKind::Identifier, text, 0, text.len(), 1)
    }

    #[test]
    fn test_no_alternatives() {
        assert!(!has_direct_left_recursion("e", &[]));
        assert_eq!(eliminate_left_recursion("e", &[]), "() ()*");
    }

    #[test]
    fn test_empty_alternative_is_not_recursive() {
        let alternatives: Vec<Alternative<'_>> = vec![vec![]];
        assert!(!has_direct_left_recursion("e", &alternatives));
    }

    #[test]
    fn test_classic_rewrite() {
        let (e, plus, int) = (ident("e"), ident("PLUS"), ident("INT"));
        let alternatives: Vec<Alternative<'_>> = vec![vec![&e, &plus, &e], vec![&int]];
        assert!(has_direct_left_recursion("e", &alternatives));
        assert_eq!(
            eliminate_left_recursion("e", &alternatives),
            "(INT) (PLUS e)*"
        );
    }

    #[test]
    fn test_several_of_each() {
        let (a, x, y, b, c) = (ident("a"), ident("x"), ident("y"), ident("b"), ident("c"));
        let alternatives: Vec<Alternative<'_>> =
            vec![vec![&a, &x], vec![&b], vec![&a, &y], vec![&c, &x]];
        assert_eq!(
            eliminate_left_recursion("a", &alternatives),
            "(b | c x) (x | y)*"
        );
    }

    #[test]
    fn test_recursion_must_match_whole_name() {
        let (expr, exprs) = (ident("expr"), ident("exprs"));
        let alternatives: Vec<Alternative<'_>> = vec![vec![&exprs, &expr]];
        assert!(!has_direct_left_recursion("expr", &alternatives));
    }
}
