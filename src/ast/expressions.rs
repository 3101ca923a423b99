use crate::ast::BinOp;
use crate::value::Number;

/// Abstract Syntax Tree node representing a parsed arithmetic expression.
///
/// The AST is the internal representation of a candidate expression after
/// parsing. It captures structure and precedence for evaluation; grouping
/// parentheses from the source survive only as tree shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Literal number
    ///
    /// # Examples
    /// ```text
    /// 42
    /// 3.14
    /// ```
    Literal(Number),

    /// Binary operation over two subexpressions
    ///
    /// # Example
    /// ```text
    /// 3*(4+5)
    /// ```
    BinaryOp {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// Unary negation
    ///
    /// A prefix `-` where an operand is expected, e.g. `-5` or `-(2+3)`.
    UnaryMinus(Box<Expr>),
}
