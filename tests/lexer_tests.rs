// tests/lexer_tests.rs

use cuanto::ast::Token;
use cuanto::lexer::{LexError, Lexer};
use cuanto::value::Number;

fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(input).tokenize()
}

// ============================================================================
// Single Character Tokens
// ============================================================================

#[test]
fn test_single_char_tokens() {
    let test_cases = vec![
        ("+", Token::Plus),
        ("-", Token::Minus),
        ("*", Token::Star),
        ("/", Token::Slash),
        ("(", Token::LParen),
        (")", Token::RParen),
    ];

    for (input, expected) in test_cases {
        let tokens = tokenize(input).unwrap();
        assert_eq!(tokens, vec![expected], "Failed for input: {}", input);
    }
}

// ============================================================================
// Numbers
// ============================================================================

#[test]
fn test_integers() {
    let test_cases = vec![("0", 0), ("1", 1), ("42", 42), ("123456", 123456)];

    for (input, expected) in test_cases {
        let tokens = tokenize(input).unwrap();
        assert_eq!(
            tokens,
            vec![Token::Number(Number::Integer(expected))],
            "Failed for input: {}",
            input
        );
    }
}

#[test]
fn test_floats() {
    let test_cases = vec![
        ("0.0", 0.0),
        ("1.5", 1.5),
        ("3.15", 3.15),
        ("123.456", 123.456),
        ("0.1", 0.1),
    ];

    for (input, expected) in test_cases {
        let tokens = tokenize(input).unwrap();
        match tokens.as_slice() {
            [Token::Number(Number::Float(n))] => {
                assert!(
                    (n - expected).abs() < 0.0001,
                    "Failed for input: {}, got {} expected {}",
                    input,
                    n,
                    expected
                );
            }
            other => panic!("Expected one Float, got {:?} for input: {}", other, input),
        }
    }
}

#[test]
fn test_leading_and_trailing_decimal_point() {
    // ".5" reads as 0.5 and "5." as 5.0, matching lenient float parsing
    assert_eq!(
        tokenize(".5").unwrap(),
        vec![Token::Number(Number::Float(0.5))]
    );
    assert_eq!(
        tokenize("5.").unwrap(),
        vec![Token::Number(Number::Float(5.0))]
    );
}

#[test]
fn test_oversized_integer_becomes_float() {
    // One digit past i64::MAX
    let tokens = tokenize("9223372036854775808").unwrap();
    match tokens.as_slice() {
        [Token::Number(Number::Float(n))] => {
            assert!((n - 9.223372036854776e18).abs() < 1e4);
        }
        other => panic!("Expected one Float, got {:?}", other),
    }
}

#[test]
fn test_minus_is_always_its_own_token() {
    // Sign handling belongs to the parser
    assert_eq!(
        tokenize("-5").unwrap(),
        vec![Token::Minus, Token::Number(Number::Integer(5))]
    );
    assert_eq!(
        tokenize("2-5").unwrap(),
        vec![
            Token::Number(Number::Integer(2)),
            Token::Minus,
            Token::Number(Number::Integer(5)),
        ]
    );
}

// ============================================================================
// Token Sequences
// ============================================================================

#[test]
fn test_expression_sequence() {
    let tokens = tokenize("3*(4+5)").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::Number(Number::Integer(3)),
            Token::Star,
            Token::LParen,
            Token::Number(Number::Integer(4)),
            Token::Plus,
            Token::Number(Number::Integer(5)),
            Token::RParen,
        ]
    );
}

#[test]
fn test_whitespace_ignored() {
    let inputs = vec!["3*(4+5)", "3 * (4+5)", "  3  *  (  4  +  5  )  ", "\t3\t*\t(4+5)\n"];

    for input in inputs {
        let tokens = tokenize(input).unwrap();
        assert_eq!(tokens.len(), 7, "Failed for input: {:?}", input);
        assert_eq!(tokens[0], Token::Number(Number::Integer(3)));
        assert_eq!(tokens[1], Token::Star);
    }
}

#[test]
fn test_empty_input() {
    assert_eq!(tokenize("").unwrap(), vec![]);
    assert_eq!(tokenize("   \t\n\r   ").unwrap(), vec![]);
}

// ============================================================================
// Error Cases
// ============================================================================

#[test]
fn test_invalid_character() {
    let test_cases = vec![
        ("2^2", '^', 1),
        ("dos", 'd', 0),
        ("2+a", 'a', 2),
        ("2%3", '%', 1),
        ("[2]", '[', 0),
    ];

    for (input, ch, position) in test_cases {
        let err = tokenize(input).unwrap_err();
        assert_eq!(
            err,
            LexError::InvalidCharacter { ch, position },
            "Failed for input: {}",
            input
        );
    }
}

#[test]
fn test_invalid_character_reports_first_offender() {
    let err = tokenize("2+#@").unwrap_err();
    assert_eq!(err, LexError::InvalidCharacter { ch: '#', position: 2 });
}

#[test]
fn test_lone_decimal_point_is_malformed() {
    assert_eq!(
        tokenize(".").unwrap_err(),
        LexError::MalformedNumber { position: 0 }
    );
    assert_eq!(
        tokenize("1+.").unwrap_err(),
        LexError::MalformedNumber { position: 2 }
    );
}

#[test]
fn test_error_messages_name_the_problem() {
    let err = tokenize("2^2").unwrap_err();
    assert!(err.to_string().contains("Unexpected character '^'"));

    let err = tokenize(".").unwrap_err();
    assert!(err.to_string().contains("Malformed number"));
}
