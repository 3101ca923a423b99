use rust_decimal::prelude::ToPrimitive;

use crate::{
    ast::{BinOp, Expr},
    value::Number,
};

/// Errors that can occur during expression evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    /// Division by zero
    DivisionByZero,

    /// Result outside the representable numeric range
    NumericOverflow,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvalError::DivisionByZero => write!(f, "Division by zero"),
            EvalError::NumericOverflow => {
                write!(f, "Numeric overflow: result outside the representable range")
            }
        }
    }
}

impl std::error::Error for EvalError {}

/// Evaluates an expression tree depth-first.
///
/// Literal nodes yield their value, unary minus negates its operand, and
/// binary nodes evaluate both operands before applying the operator. Whole
/// results stay integers; mixed integer/float operations go through exact
/// decimal arithmetic so that `2.5*2` comes back as the integer `5`.
///
/// No rounding happens here. Chained divisions keep full precision and the
/// formatter rounds once at the end.
///
/// # Examples
///
/// ```
/// use cuanto::{Lexer, Number, Parser, evaluator};
///
/// let tokens = Lexer::new("3*(4+5)").tokenize().unwrap();
/// let expr = Parser::new(tokens).parse().unwrap();
///
/// assert_eq!(evaluator::eval(&expr), Ok(Number::Integer(27)));
/// ```
///
/// A divisor that works out to zero is reported, not propagated as a float
/// infinity:
///
/// ```
/// use cuanto::{Lexer, Parser, evaluator, evaluator::EvalError};
///
/// let tokens = Lexer::new("10/(2-2)").tokenize().unwrap();
/// let expr = Parser::new(tokens).parse().unwrap();
///
/// assert_eq!(evaluator::eval(&expr), Err(EvalError::DivisionByZero));
/// ```
pub fn eval(expr: &Expr) -> Result<Number, EvalError> {
    match expr {
        Expr::Literal(value) => match value {
            // A digit run long enough to parse as infinity is already
            // outside the representable range.
            Number::Float(f) if !f.is_finite() => Err(EvalError::NumericOverflow),
            _ => Ok(*value),
        },
        Expr::UnaryMinus(operand) => negate(eval(operand)?),
        Expr::BinaryOp { op, left, right } => {
            let left = eval(left)?;
            let right = eval(right)?;
            apply_binop(*op, left, right)
        }
    }
}

fn negate(value: Number) -> Result<Number, EvalError> {
    match value {
        Number::Integer(n) => n
            .checked_neg()
            .map(Number::Integer)
            .ok_or(EvalError::NumericOverflow),
        Number::Float(n) => Ok(Number::Float(-n)),
    }
}

fn apply_binop(op: BinOp, left: Number, right: Number) -> Result<Number, EvalError> {
    match op {
        BinOp::Add => match (left, right) {
            (Number::Integer(a), Number::Integer(b)) => a
                .checked_add(b)
                .map(Number::Integer)
                .ok_or(EvalError::NumericOverflow),
            (Number::Float(a), Number::Float(b)) => finite(a + b),
            (a, b) => {
                if let (Some(ad), Some(bd)) = (a.to_decimal(), b.to_decimal())
                    && let Some(rd) = ad.checked_add(bd)
                {
                    if rd.is_integer()
                        && let Some(r) = rd.to_i64()
                    {
                        return Ok(Number::Integer(r));
                    } else if let Some(r) = rd.to_f64() {
                        return Ok(Number::Float(r));
                    }
                }
                finite(a.as_f64() + b.as_f64())
            }
        },
        BinOp::Subtract => match (left, right) {
            (Number::Integer(a), Number::Integer(b)) => a
                .checked_sub(b)
                .map(Number::Integer)
                .ok_or(EvalError::NumericOverflow),
            (Number::Float(a), Number::Float(b)) => finite(a - b),
            (a, b) => {
                if let (Some(ad), Some(bd)) = (a.to_decimal(), b.to_decimal())
                    && let Some(rd) = ad.checked_sub(bd)
                {
                    if rd.is_integer()
                        && let Some(r) = rd.to_i64()
                    {
                        return Ok(Number::Integer(r));
                    } else if let Some(r) = rd.to_f64() {
                        return Ok(Number::Float(r));
                    }
                }
                finite(a.as_f64() - b.as_f64())
            }
        },
        BinOp::Multiply => match (left, right) {
            (Number::Integer(a), Number::Integer(b)) => a
                .checked_mul(b)
                .map(Number::Integer)
                .ok_or(EvalError::NumericOverflow),
            (Number::Float(a), Number::Float(b)) => finite(a * b),
            (a, b) => {
                if let (Some(ad), Some(bd)) = (a.to_decimal(), b.to_decimal())
                    && let Some(rd) = ad.checked_mul(bd)
                {
                    if rd.is_integer()
                        && let Some(r) = rd.to_i64()
                    {
                        return Ok(Number::Integer(r));
                    } else if let Some(r) = rd.to_f64() {
                        return Ok(Number::Float(r));
                    }
                }
                finite(a.as_f64() * b.as_f64())
            }
        },
        BinOp::Divide => {
            // The divisor is checked before anything is computed, whatever
            // its numeric type.
            if right.is_zero() {
                return Err(EvalError::DivisionByZero);
            }

            match (left, right) {
                (Number::Integer(a), Number::Integer(b)) => {
                    // Check if division is exact; if not, return Float
                    match a.checked_rem(b) {
                        Some(0) => a
                            .checked_div(b)
                            .map(Number::Integer)
                            .ok_or(EvalError::NumericOverflow),
                        Some(_) => finite(a as f64 / b as f64),
                        // i64::MIN / -1 has no representable quotient
                        None => Err(EvalError::NumericOverflow),
                    }
                }
                (Number::Float(a), Number::Float(b)) => finite(a / b),
                (a, b) => {
                    if let (Some(ad), Some(bd)) = (a.to_decimal(), b.to_decimal())
                        && let Some(rd) = ad.checked_div(bd)
                    {
                        if rd.is_integer()
                            && let Some(r) = rd.to_i64()
                        {
                            return Ok(Number::Integer(r));
                        } else if let Some(r) = rd.to_f64() {
                            return Ok(Number::Float(r));
                        }
                    }
                    finite(a.as_f64() / b.as_f64())
                }
            }
        }
    }
}

/// Float results must stay finite; infinities and NaN count as overflow.
fn finite(result: f64) -> Result<Number, EvalError> {
    if result.is_finite() {
        Ok(Number::Float(result))
    } else {
        Err(EvalError::NumericOverflow)
    }
}

#[test]
fn test_mixed_types_reintegralize() {
    let expr = Expr::BinaryOp {
        op: BinOp::Multiply,
        left: Box::new(Expr::Literal(Number::Float(2.5))),
        right: Box::new(Expr::Literal(Number::Integer(2))),
    };
    assert_eq!(eval(&expr), Ok(Number::Integer(5)));
}

#[test]
fn test_min_over_minus_one_overflows() {
    let expr = Expr::BinaryOp {
        op: BinOp::Divide,
        left: Box::new(Expr::Literal(Number::Integer(i64::MIN))),
        right: Box::new(Expr::Literal(Number::Integer(-1))),
    };
    assert_eq!(eval(&expr), Err(EvalError::NumericOverflow));
}

#[test]
fn test_negating_min_overflows() {
    let expr = Expr::UnaryMinus(Box::new(Expr::Literal(Number::Integer(i64::MIN))));
    assert_eq!(eval(&expr), Err(EvalError::NumericOverflow));
}
