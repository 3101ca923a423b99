//! Candidate expression extraction.
//!
//! Once a trigger phrase has been found, this stage turns the remaining
//! message text into something the lexer can scan: lowercased, freed of
//! repeated trigger phrases, spelled-out operators translated to symbols,
//! question/exclamation marks and whitespace dropped. Nothing here decides
//! whether the result is valid arithmetic; that is the lexer's job.

use std::sync::LazyLock;

use regex::Regex;

use crate::intent::{self, TriggerMatch};

/// Spelled-out operator words and their symbols. Whole words only, so a
/// word like "porcentaje" or a run like "2más2" is left alone rather than
/// corrupted.
static OPERATOR_WORDS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [("más", "+"), ("menos", "-"), ("por", "*"), ("entre", "/")]
        .iter()
        .map(|(word, symbol)| (Regex::new(&format!(r"\b{}\b", word)).unwrap(), *symbol))
        .collect()
});

/// Builds the normalized candidate expression from an utterance and the
/// trigger span located by intent matching.
///
/// The candidate is everything after the trigger phrase. Word translation
/// runs before punctuation and whitespace are stripped, while word
/// boundaries are still intact.
pub fn candidate_expression(utterance: &str, trigger: &TriggerMatch) -> String {
    let mut text = utterance[trigger.end..].to_lowercase();

    // A repeated cue phrase later in the message is noise, not an operand.
    for regex in intent::TRIGGERS.iter() {
        text = regex.replace_all(&text, "").into_owned();
    }

    for (regex, symbol) in OPERATOR_WORDS.iter() {
        text = regex.replace_all(&text, *symbol).into_owned();
    }

    text.chars()
        .filter(|ch| !ch.is_whitespace() && !matches!(ch, '¿' | '?' | '!' | '¡'))
        .collect()
}

#[test]
fn test_operator_words_translate_as_whole_words() {
    let trigger = TriggerMatch { start: 0, end: 0 };
    assert_eq!(candidate_expression("2 más 2", &trigger), "2+2");
    assert_eq!(candidate_expression("10 entre 2", &trigger), "10/2");
    // "entremos" contains "entre" but is not an operator
    assert_eq!(candidate_expression("entremos", &trigger), "entremos");
}

#[test]
fn test_punctuation_and_whitespace_stripped() {
    let trigger = TriggerMatch { start: 0, end: 0 };
    assert_eq!(candidate_expression("¿ 3 * (4+5) ?!", &trigger), "3*(4+5)");
}
