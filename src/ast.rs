//! # Cuanto - Abstract Syntax Tree
//!
//! This module defines the Abstract Syntax Tree (AST) for the restricted
//! arithmetic grammar the assistant answers questions about. The grammar is
//! deliberately tiny: numbers, the four basic operators, unary minus, and
//! parentheses. Anything else is rejected before it can be evaluated.
//!
//! ## Architecture Overview
//!
//! The AST module is organized into focused submodules:
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[expressions]** - Expression nodes (literals, binary operations, negation)
//! - **[operators]** - The four binary operators
//!
//! ## Quick Start
//!
//! ```text
//! cuánto es 3 * (4+5)
//! ```
//!
//! After intent matching and normalization, the candidate expression
//! `3*(4+5)` lexes to `[3, *, (, 4, +, 5, )]` and parses to:
//!
//! ```text
//! BinaryOp(Multiply, Literal(3), BinaryOp(Add, Literal(4), Literal(5)))
//! ```
//!
//! ## The Grammar
//!
//! ```text
//! expression := term (('+' | '-') term)*
//! term       := factor (('*' | '/') factor)*
//! factor     := '-' factor | NUMBER | '(' expression ')'
//! ```
//!
//! Standard precedence: `*` and `/` bind tighter than `+` and `-`, operators
//! at the same level associate left, parentheses group, and unary minus is
//! right-recursive (`--5` is allowed). There are no identifiers, calls, or
//! assignments in the grammar, so nothing outside basic arithmetic can be
//! expressed, no matter what the incoming message contains.
//!
//! ### Type System
//!
//! Numbers distinguish integers from floats, with arithmetic that preserves
//! integer types when results are whole (see [`crate::value::Number`]).
pub mod tokens;
pub mod expressions;
pub mod operators;

pub use tokens::Token;
pub use expressions::Expr;
pub use operators::BinOp;
