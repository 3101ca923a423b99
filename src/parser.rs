use std::fmt;

use crate::ast::{BinOp, Expr, Token};

/// Errors raised while parsing a token sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParseError {
    /// An unmatched `(`, or a stray `)` where an operand belongs.
    UnbalancedParentheses,

    /// An operator with no operand to act on, e.g. `2++2` or a trailing `+`.
    MalformedExpression { found: Option<Token> },

    /// A complete expression was parsed but tokens remain, e.g. `2+2)3`.
    UnexpectedTrailingInput { token: Token },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnbalancedParentheses => {
                write!(f, "Unbalanced parentheses in expression")
            }
            ParseError::MalformedExpression { found: Some(token) } => {
                write!(f, "Expected an operand, got '{}'", token)
            }
            ParseError::MalformedExpression { found: None } => {
                write!(f, "Expected an operand, got end of input")
            }
            ParseError::UnexpectedTrailingInput { token } => {
                write!(f, "Extra tokens after expression, starting at '{}'", token)
            }
        }
    }
}

impl std::error::Error for ParseError {}

pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser {
            tokens,
            position: 0,
        }
    }

    fn current(&self) -> Option<Token> {
        self.tokens.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    /// Parse a complete expression. Every token must be consumed; leftovers
    /// after a well-formed prefix are an error, not ignored.
    pub fn parse(mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_expression()?;

        if let Some(token) = self.current() {
            return Err(ParseError::UnexpectedTrailingInput { token });
        }

        Ok(expr)
    }

    /// expression := term (('+' | '-') term)*
    fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_term()?;

        loop {
            let op = match self.current() {
                Some(Token::Plus) => BinOp::Add,
                Some(Token::Minus) => BinOp::Subtract,
                _ => break,
            };

            self.advance();
            let right = self.parse_term()?;

            left = Expr::BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// term := factor (('*' | '/') factor)*
    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_factor()?;

        loop {
            let op = match self.current() {
                Some(Token::Star) => BinOp::Multiply,
                Some(Token::Slash) => BinOp::Divide,
                _ => break,
            };

            self.advance();
            let right = self.parse_factor()?;

            left = Expr::BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// factor := '-' factor | NUMBER | '(' expression ')'
    fn parse_factor(&mut self) -> Result<Expr, ParseError> {
        match self.current() {
            Some(Token::Number(n)) => {
                self.advance();
                Ok(Expr::Literal(n))
            }

            // Unary minus (for negative numbers/negation), right-recursive
            Some(Token::Minus) => {
                self.advance();
                let operand = self.parse_factor()?;
                Ok(Expr::UnaryMinus(Box::new(operand)))
            }

            Some(Token::LParen) => {
                self.advance();
                let expr = self.parse_expression()?;

                match self.current() {
                    Some(Token::RParen) => {
                        self.advance();
                        Ok(expr)
                    }
                    _ => Err(ParseError::UnbalancedParentheses),
                }
            }

            // A ')' where an operand belongs is a balance problem, not a
            // missing operand: it covers both `()` and a leading `)`.
            Some(Token::RParen) => Err(ParseError::UnbalancedParentheses),

            found => Err(ParseError::MalformedExpression { found }),
        }
    }
}
