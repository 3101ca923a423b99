//! Evaluate a bare expression, bypassing intent matching

use super::CliError;
use crate::{output, reply};

/// Evaluates a raw arithmetic expression and renders `{expression} = {value}`.
///
/// This is the debugging surface: the trigger phrase and reply sentences
/// are skipped, and failures surface as developer-facing errors instead of
/// the fixed Spanish replies.
pub fn execute_eval(expression: &str) -> Result<String, CliError> {
    let (expr, value) = reply::solve(expression)?;

    Ok(format!(
        "{} = {}",
        output::canonical(&expr),
        output::render_number(value)
    ))
}
