//! Reply routing for incoming messages.
//!
//! One entry point, [`respond`], takes the raw utterance and always comes
//! back with text: an arithmetic answer when a trigger phrase is present, a
//! greeting when the message reads as one, and an echo acknowledgement for
//! everything else. Arithmetic failures are folded into their fixed reply
//! sentences here; no error ever escapes to the caller.

use std::fmt;

use tracing::{debug, info, warn};

use crate::{
    ast::Expr,
    evaluator::{self, EvalError},
    intent::{self, TriggerMatch},
    lexer::{LexError, Lexer},
    normalize, output,
    parser::{ParseError, Parser},
    value::Number,
};

/// Reply when the message is a greeting with no arithmetic request.
const GREETING_REPLY: &str = "¡Hola! ¿En qué puedo ayudarte?";

/// The branch that produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKind {
    /// An arithmetic question, answered or refused with a fixed sentence
    Arithmetic,
    /// A greeting with no arithmetic request
    Greeting,
    /// Anything else, acknowledged by echoing the message back
    Echo,
}

impl fmt::Display for ReplyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplyKind::Arithmetic => write!(f, "arithmetic"),
            ReplyKind::Greeting => write!(f, "greeting"),
            ReplyKind::Echo => write!(f, "echo"),
        }
    }
}

/// A routed reply: the response text and the branch that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub kind: ReplyKind,
}

/// Any failure between the lexer and the formatter.
#[derive(Debug, Clone, PartialEq)]
pub enum ArithmeticError {
    /// The candidate text could not be tokenized
    Lex(LexError),
    /// The token sequence is not a well-formed expression
    Parse(ParseError),
    /// The expression could not be computed
    Eval(EvalError),
}

impl fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArithmeticError::Lex(e) => write!(f, "Lex error: {}", e),
            ArithmeticError::Parse(e) => write!(f, "Parse error: {}", e),
            ArithmeticError::Eval(e) => write!(f, "Evaluation error: {}", e),
        }
    }
}

impl std::error::Error for ArithmeticError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ArithmeticError::Lex(e) => Some(e),
            ArithmeticError::Parse(e) => Some(e),
            ArithmeticError::Eval(e) => Some(e),
        }
    }
}

impl From<LexError> for ArithmeticError {
    fn from(error: LexError) -> Self {
        ArithmeticError::Lex(error)
    }
}

impl From<ParseError> for ArithmeticError {
    fn from(error: ParseError) -> Self {
        ArithmeticError::Parse(error)
    }
}

impl From<EvalError> for ArithmeticError {
    fn from(error: EvalError) -> Self {
        ArithmeticError::Eval(error)
    }
}

/// Lexes, parses, and evaluates a bare arithmetic expression.
///
/// Returns the parsed tree alongside the value so callers can quote the
/// canonical expression in their output.
pub fn solve(expression: &str) -> Result<(Expr, Number), ArithmeticError> {
    let tokens = Lexer::new(expression).tokenize()?;
    let expr = Parser::new(tokens).parse()?;
    let value = evaluator::eval(&expr)?;
    Ok((expr, value))
}

/// Produces the reply for one incoming message.
///
/// Total over all inputs: every message gets reply text. An arithmetic
/// trigger takes priority over a greeting, so "hola, cuánto es 2+2" is
/// answered as arithmetic.
pub fn respond(message: &str) -> Reply {
    if let Some(trigger) = intent::find_trigger(message) {
        let text = answer_arithmetic(message, &trigger);
        info!("Message routed as {}", ReplyKind::Arithmetic);
        return Reply {
            text,
            kind: ReplyKind::Arithmetic,
        };
    }

    if intent::is_greeting(message) {
        info!("Message routed as {}", ReplyKind::Greeting);
        return Reply {
            text: GREETING_REPLY.to_string(),
            kind: ReplyKind::Greeting,
        };
    }

    info!("Message routed as {}", ReplyKind::Echo);
    Reply {
        text: format!("He recibido tu mensaje: '{}'. ¿En qué puedo ayudarte?", message),
        kind: ReplyKind::Echo,
    }
}

fn answer_arithmetic(message: &str, trigger: &TriggerMatch) -> String {
    let candidate = normalize::candidate_expression(message, trigger);
    debug!(
        "Trigger '{}' found, candidate expression '{}'",
        &message[trigger.start..trigger.end],
        candidate
    );

    match solve(&candidate) {
        Ok((expr, value)) => output::success_message(&expr, value),
        Err(error) => {
            warn!("Arithmetic request failed: {} (candidate: '{}')", error, candidate);
            output::failure_message(&error).to_string()
        }
    }
}
