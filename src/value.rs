use rust_decimal::{Decimal, prelude::FromPrimitive};

/// A numeric value flowing through the arithmetic pipeline.
///
/// # Type Preservation
///
/// The pipeline preserves the distinction between integers and floats:
/// - Arithmetic operations maintain integer types when results are whole
/// - Mixed operations intelligently preserve integers when mathematically valid
/// - High-precision decimal arithmetic prevents floating-point errors
///
/// So "2+2" answers 4, never 4.0, while "10/4" answers 2.5.
///
/// # Examples
///
/// ```
/// use cuanto::Number;
///
/// let whole = Number::Integer(42);
/// let fractional = Number::Float(2.5);
///
/// assert!(!whole.is_zero());
/// assert_eq!(fractional.as_f64(), 2.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Integer number (preserved separately from floats)
    Integer(i64),

    /// Floating-point number
    Float(f64),
}

impl Number {
    /// Check whether the value is exactly zero in either representation.
    pub fn is_zero(&self) -> bool {
        match self {
            Number::Integer(n) => *n == 0,
            Number::Float(n) => *n == 0.0,
        }
    }

    /// Get as float
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(n) => *n as f64,
            Number::Float(n) => *n,
        }
    }

    /// Exact decimal form, when the value fits the decimal range.
    pub fn to_decimal(&self) -> Option<Decimal> {
        match self {
            Number::Integer(n) => Decimal::from_i64(*n),
            Number::Float(n) => Decimal::from_f64(*n),
        }
    }
}
