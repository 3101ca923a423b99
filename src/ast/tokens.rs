use std::fmt;

use crate::value::Number;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    // Literals
    /// Integer or floating-point number
    ///
    /// Digit runs that overflow `i64` are parsed as floats, matching how
    /// oversized literals behave on platforms with only double-precision
    /// numbers.
    ///
    /// # Examples
    /// ```text
    /// 42
    /// 3.14
    /// .5
    /// ```
    Number(Number),

    // Operators
    /// Addition (`+`)
    Plus,

    /// Subtraction (`-`)
    ///
    /// Also the unary minus sign. The lexer does not distinguish the two;
    /// the parser decides from position.
    Minus,

    /// Multiplication (`*`)
    Star,

    /// Division (`/`)
    Slash,

    // Delimiters
    /// Left parenthesis for grouping
    LParen,

    /// Right parenthesis
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(Number::Integer(n)) => write!(f, "{}", n),
            Token::Number(Number::Float(n)) => write!(f, "{}", n),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Star => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
        }
    }
}
