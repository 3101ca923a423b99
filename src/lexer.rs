use std::fmt;

use crate::ast::Token;
use crate::value::Number;

/// Errors raised while scanning a candidate expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LexError {
    /// A character outside the arithmetic alphabet (digits, `.`, the four
    /// operators, parentheses, whitespace).
    InvalidCharacter { ch: char, position: usize },

    /// A decimal point with no digit on either side, or a number that
    /// cannot be represented.
    MalformedNumber { position: usize },
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::InvalidCharacter { ch, position } => {
                write!(f, "Unexpected character '{}' at position {}", ch, position)
            }
            LexError::MalformedNumber { position } => {
                write!(f, "Malformed number at position {}", position)
            }
        }
    }
}

impl std::error::Error for LexError {}

pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_number(&mut self) -> Result<Token, LexError> {
        let start = self.position;
        let mut number = String::new();
        let mut is_float = false;
        let mut has_digits = false;

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                has_digits = true;
                number.push(ch);
                self.advance();
            } else if ch == '.' && !is_float {
                is_float = true;
                number.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        if !has_digits {
            return Err(LexError::MalformedNumber { position: start });
        }

        let value = if is_float {
            number.parse::<f64>().ok().map(Number::Float)
        } else {
            match number.parse::<i64>() {
                Ok(n) => Some(Number::Integer(n)),
                // Digit runs past the i64 range behave as doubles, the way
                // oversized literals do in the chat runtimes this replaces.
                Err(_) => number.parse::<f64>().ok().map(Number::Float),
            }
        };

        value
            .map(Token::Number)
            .ok_or(LexError::MalformedNumber { position: start })
    }

    /// Scan the whole input into a token sequence.
    ///
    /// Whitespace separates tokens and is otherwise ignored. The first
    /// character outside the arithmetic alphabet aborts the scan.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();

            let Some(ch) = self.current_char() else {
                break;
            };

            let token = match ch {
                '+' => {
                    self.advance();
                    Token::Plus
                }
                '-' => {
                    self.advance();
                    Token::Minus
                }
                '*' => {
                    self.advance();
                    Token::Star
                }
                '/' => {
                    self.advance();
                    Token::Slash
                }
                '(' => {
                    self.advance();
                    Token::LParen
                }
                ')' => {
                    self.advance();
                    Token::RParen
                }
                ch if ch.is_ascii_digit() || ch == '.' => self.read_number()?,
                ch => {
                    return Err(LexError::InvalidCharacter {
                        ch,
                        position: self.position,
                    });
                }
            };

            tokens.push(token);
        }

        Ok(tokens)
    }
}

#[test]
fn test_expression_tokens() {
    let tokens = Lexer::new("3*(4+5)").tokenize().unwrap();
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
fn test_lone_decimal_point() {
    let err = Lexer::new(".").tokenize().unwrap_err();
    assert_eq!(err, LexError::MalformedNumber { position: 0 });
}
