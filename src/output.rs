//! User-facing formatting for arithmetic replies.
//!
//! This module turns evaluated expressions into the fixed Spanish sentences
//! the assistant answers with. Every user-visible string lives here; the
//! rest of the pipeline reports errors in developer terms and renders no
//! text of its own.
//!
//! # Features
//!
//! - **Canonical expressions** via [`canonical()`] - whitespace-free form
//!   with only the parentheses precedence requires
//! - **Number rendering** via [`render_number()`] - integers without a
//!   decimal point, floats rounded to two decimals only at this boundary
//! - **Stable error replies** - one fixed sentence per failing stage
//!
//! # Examples
//!
//! ```
//! use cuanto::{Lexer, Number, Parser, output};
//!
//! let tokens = Lexer::new("3 * (4+5)").tokenize().unwrap();
//! let expr = Parser::new(tokens).parse().unwrap();
//!
//! assert_eq!(output::canonical(&expr), "3*(4+5)");
//! assert_eq!(output::render_number(Number::Float(10.0 / 3.0)), "3.33");
//! ```

use rust_decimal::{Decimal, RoundingStrategy, prelude::FromPrimitive};

use crate::{
    ast::{BinOp, Expr},
    reply::ArithmeticError,
    value::Number,
};

/// Reply for candidate text that fails lexing.
pub const INVALID_EXPRESSION_REPLY: &str =
    "La expresión matemática no es válida. Solo se permiten números y los operadores +, -, *, /.";

/// Reply for token sequences that fail parsing.
pub const INVALID_OPERATION_REPLY: &str =
    "Hubo un error al calcular. Por favor, verifica que la operación sea válida";

/// Reply for expressions that fail during evaluation.
pub const UNSOLVED_OPERATION_REPLY: &str =
    "No pude resolver la operación matemática. Por favor, verifica el formato.";

/// The success sentence, quoting the canonical expression and the rendered
/// result.
pub fn success_message(expr: &Expr, value: Number) -> String {
    format!(
        "El resultado de {} es {}",
        canonical(expr),
        render_number(value)
    )
}

/// The fixed reply sentence for a failed pipeline stage.
///
/// One sentence per stage: every lexing failure reads the same, as does
/// every parsing failure and every evaluation failure. The developer-facing
/// detail stays in the error value and the logs.
pub fn failure_message(error: &ArithmeticError) -> &'static str {
    match error {
        ArithmeticError::Lex(_) => INVALID_EXPRESSION_REPLY,
        ArithmeticError::Parse(_) => INVALID_OPERATION_REPLY,
        ArithmeticError::Eval(_) => UNSOLVED_OPERATION_REPLY,
    }
}

/// Reconstructs the expression from its tree, parenthesized only where
/// precedence demands.
///
/// Grouping parentheses from the source survive as tree shape, so `(2+2)`
/// prints as `2+2` while `3*(4+5)` keeps its parentheses. The printed form
/// parses back to the same tree.
pub fn canonical(expr: &Expr) -> String {
    match expr {
        Expr::Literal(value) => render_literal(*value),
        Expr::UnaryMinus(operand) => {
            if precedence(operand) < 3 {
                format!("-({})", canonical(operand))
            } else {
                format!("-{}", canonical(operand))
            }
        }
        Expr::BinaryOp { op, left, right } => {
            let prec = match op {
                BinOp::Add | BinOp::Subtract => 1,
                BinOp::Multiply | BinOp::Divide => 2,
            };

            let left_text = if precedence(left) < prec {
                format!("({})", canonical(left))
            } else {
                canonical(left)
            };

            // Right operands of - and / keep parens at equal precedence:
            // 2-(3-1) is not 2-3-1.
            let group_right = precedence(right) < prec
                || (precedence(right) == prec && matches!(op, BinOp::Subtract | BinOp::Divide));
            let right_text = if group_right {
                format!("({})", canonical(right))
            } else {
                canonical(right)
            };

            format!("{}{}{}", left_text, op.symbol(), right_text)
        }
    }
}

/// Renders a result for display: integers bare, floats rounded to two
/// decimals with trailing zeros trimmed, so `10/4` reads `2.5` and `10/2`
/// reads `5`.
pub fn render_number(value: Number) -> String {
    match value {
        Number::Integer(n) => n.to_string(),
        Number::Float(n) => match Decimal::from_f64(n) {
            Some(d) => d
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
                .normalize()
                .to_string(),
            // Outside the decimal range; the full digit form still displays.
            None => n.to_string(),
        },
    }
}

/// Literals print at full precision. Rounding a quoted operand would
/// misreport what was asked.
fn render_literal(value: Number) -> String {
    match value {
        Number::Integer(n) => n.to_string(),
        Number::Float(n) => n.to_string(),
    }
}

/// Binding strength used to decide which subtrees need parentheses.
fn precedence(expr: &Expr) -> u8 {
    match expr {
        Expr::BinaryOp {
            op: BinOp::Add | BinOp::Subtract,
            ..
        } => 1,
        Expr::BinaryOp {
            op: BinOp::Multiply | BinOp::Divide,
            ..
        } => 2,
        Expr::UnaryMinus(_) => 3,
        Expr::Literal(_) => 4,
    }
}

#[test]
fn test_right_operand_keeps_parens_under_subtraction() {
    let tokens = crate::lexer::Lexer::new("2-(3-1)").tokenize().unwrap();
    let expr = crate::parser::Parser::new(tokens).parse().unwrap();
    assert_eq!(canonical(&expr), "2-(3-1)");
}

#[test]
fn test_redundant_parens_dropped() {
    let tokens = crate::lexer::Lexer::new("((2+2))").tokenize().unwrap();
    let expr = crate::parser::Parser::new(tokens).parse().unwrap();
    assert_eq!(canonical(&expr), "2+2");
}
