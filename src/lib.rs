pub mod ast;
pub mod cli;
pub mod evaluator;
pub mod intent;
pub mod lexer;
pub mod normalize;
pub mod output;
pub mod parser;
pub mod reply;
pub mod value;

pub use ast::{BinOp, Expr, Token};
pub use evaluator::EvalError;
pub use lexer::{LexError, Lexer};
pub use parser::{ParseError, Parser};
pub use reply::{ArithmeticError, Reply, ReplyKind, respond, solve};
pub use value::Number;
