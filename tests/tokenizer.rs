use std::collections::HashSet;

use shunt::{
    Environment, EvalError, ParseError, Token, TokenKind, Value, evaluate_tokens,
    interpreter::{
        lexer::is_identifier,
        operator::{BinaryOperator, UnaryOperator},
    },
    tokenize,
};

fn kinds(src: &str, allowed: &[&str]) -> Vec<TokenKind> {
    let allowed: HashSet<&str> = allowed.iter().copied().collect();
    tokenize(src, &allowed).unwrap_or_else(|e| panic!("Tokenizing {src:?} failed: {e}"))
                           .into_iter()
                           .map(|t| t.kind)
                           .collect()
}

fn tokenize_error(src: &str) -> ParseError {
    tokenize(src, &HashSet::from(["f", "x"])).expect_err("tokenizing should fail")
}

#[test]
fn signs_are_classified_by_the_previous_token() {
    use TokenKind::{BinaryOp, Number, UnaryOp};

    assert_eq!(kinds("1-2", &[]),
               vec![Number(1.0), BinaryOp(BinaryOperator::Sub), Number(2.0)]);
    assert_eq!(kinds("1--2", &[]),
               vec![Number(1.0),
                    BinaryOp(BinaryOperator::Sub),
                    UnaryOp(UnaryOperator::Minus),
                    Number(2.0)]);
    assert_eq!(kinds("+-1", &[]),
               vec![UnaryOp(UnaryOperator::Plus), UnaryOp(UnaryOperator::Minus), Number(1.0)]);
    assert_eq!(kinds("(-1)-[-1]", &[]),
               vec![TokenKind::LeftParen,
                    UnaryOp(UnaryOperator::Minus),
                    Number(1.0),
                    TokenKind::RightParen,
                    BinaryOp(BinaryOperator::Sub),
                    TokenKind::LeftBracket,
                    UnaryOp(UnaryOperator::Minus),
                    Number(1.0),
                    TokenKind::RightBracket]);
}

#[test]
fn power_has_two_spellings() {
    assert_eq!(kinds("2^3", &[]), kinds("2**3", &[]));
    assert_eq!(kinds("2 ** 3", &[])[1], TokenKind::BinaryOp(BinaryOperator::Pow));
}

#[test]
fn offsets_are_byte_positions() {
    let tokens = tokenize("  x +\t2.5e1", &HashSet::from(["x"])).unwrap();

    assert_eq!(tokens,
               vec![Token { kind:   TokenKind::Identifier("x".to_string()),
                            offset: 2, },
                    Token { kind:   TokenKind::BinaryOp(BinaryOperator::Add),
                            offset: 4, },
                    Token { kind:   TokenKind::Number(25.0),
                            offset: 6, }]);
}

#[test]
fn calls_and_vectors() {
    use TokenKind::{Comma, Identifier, LeftBracket, LeftParen, Number, RightBracket, RightParen};

    assert_eq!(kinds("f(x, [1])", &["f", "x"]),
               vec![Identifier("f".to_string()),
                    LeftParen,
                    Identifier("x".to_string()),
                    Comma,
                    LeftBracket,
                    Number(1.0),
                    RightBracket,
                    RightParen]);
    assert_eq!(kinds("f()", &["f"]),
               vec![Identifier("f".to_string()), LeftParen, RightParen]);
}

#[test]
fn identifiers_must_be_allowed() {
    assert_eq!(tokenize_error("x + y"),
               ParseError::UnknownIdentifier { name:   "y".to_string(),
                                               offset: 4, });
}

#[test]
fn invalid_adjacency() {
    for (src, offset) in [("2 3", 2),
                          ("x 3", 2),
                          ("2 (3)", 2),
                          ("2 x", 2),
                          ("(2)(3)", 3),
                          ("[1] [2]", 4),
                          ("2 * / 3", 4),
                          ("(* 3)", 1),
                          ("[, 1]", 1),
                          ("f(1,)", 4),
                          ("[]", 1),
                          ("2 +)", 3),
                          ("-]", 1)]
    {
        let err = tokenize_error(src);
        assert!(matches!(err, ParseError::UnexpectedToken { .. }),
                "{src:?} gave {err:?}");
        assert_eq!(err.offset(), offset, "{src:?}");
    }
}

#[test]
fn dangling_tokens_at_the_end() {
    for (src, offset) in [("2 +", 2), ("-", 0), ("f(", 1), ("[1,", 2), ("(", 0)] {
        let err = tokenize_error(src);
        assert!(matches!(err, ParseError::UnexpectedEnd { .. }), "{src:?} gave {err:?}");
        assert_eq!(err.offset(), offset, "{src:?}");
    }
}

#[test]
fn malformed_numbers() {
    for (src, lexeme) in [("2e", "2e"), ("1 + 3.5E+", "3.5E+"), (".", "."), (".5e-", ".5e-")] {
        match tokenize_error(src) {
            ParseError::MalformedNumber { lexeme: found, .. } => assert_eq!(found, lexeme),
            other => panic!("{src:?} gave {other:?}"),
        }
    }
}

#[test]
fn unexpected_characters() {
    assert_eq!(tokenize_error("1 % 2"),
               ParseError::UnexpectedCharacter { found:  '%',
                                                 offset: 2, });
    assert!(matches!(tokenize_error("x & 1"),
                     ParseError::UnexpectedCharacter { found: '&', offset: 2 }));
}

#[test]
fn tokens_can_be_evaluated_separately() {
    let env = Environment::new().with_variable("x", 5.0);
    let tokens = tokenize("x * 2", &env.identifiers()).unwrap();

    assert_eq!(evaluate_tokens(&tokens, &env).unwrap(), Value::Scalar(10.0));

    let other = Environment::new();
    assert!(evaluate_tokens(&tokens, &other).is_err());
}

fn number(value: f64, offset: usize) -> Token {
    Token { kind: TokenKind::Number(value),
            offset }
}

#[test]
fn hand_built_tokens_missing_an_operand() {
    let tokens = [number(1.0, 0),
                  Token { kind:   TokenKind::BinaryOp(BinaryOperator::Add),
                          offset: 1, }];

    assert_eq!(evaluate_tokens(&tokens, &Environment::new()),
               Err(EvalError::StackUnderflow { operator: "+".to_string(),
                                               offset:   1, }));
}

#[test]
fn hand_built_tokens_leaving_extra_values() {
    let tokens = [number(1.0, 0), number(2.0, 2)];

    assert_eq!(evaluate_tokens(&tokens, &Environment::new()),
               Err(EvalError::LeftoverValues { count:  2,
                                               offset: 2, }));
}

#[test]
fn empty_token_sequence_has_no_value() {
    assert!(matches!(evaluate_tokens(&[], &Environment::new()),
                     Err(EvalError::StackUnderflow { offset: 0, .. })));
}

#[test]
fn identifier_spelling() {
    for name in ["x", "_n2", "$rate", "atan2", "A_b$"] {
        assert!(is_identifier(name), "{name:?}");
    }
    for name in ["", "2x", "x-y", "é", " x", "x y"] {
        assert!(!is_identifier(name), "{name:?}");
    }
}
