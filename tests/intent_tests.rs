// tests/intent_tests.rs

use cuanto::intent::{find_trigger, is_greeting};
use cuanto::normalize::candidate_expression;

/// Runs the full intent + normalization front half: locate the trigger,
/// then extract the candidate expression after it.
fn candidate(message: &str) -> String {
    let trigger = find_trigger(message).unwrap();
    candidate_expression(message, &trigger)
}

// ============================================================================
// Trigger Detection
// ============================================================================

#[test]
fn test_trigger_cuanto_es() {
    let message = "¿cuánto es 2+2?";
    let trigger = find_trigger(message).unwrap();
    assert_eq!(&message[trigger.start..trigger.end], "cuánto es");
}

#[test]
fn test_trigger_is_case_insensitive() {
    let message = "CUÁNTO ES 5*5";
    let trigger = find_trigger(message).unwrap();
    assert_eq!(&message[trigger.start..trigger.end], "CUÁNTO ES");
}

#[test]
fn test_trigger_tolerates_missing_accent() {
    let message = "cuanto es 1+1";
    let trigger = find_trigger(message).unwrap();
    assert_eq!(&message[trigger.start..trigger.end], "cuanto es");
}

#[test]
fn test_trigger_allows_extra_spaces_inside_phrase() {
    assert!(find_trigger("cuánto   es 2+2").is_some());
    assert!(find_trigger("resultado   de 2+2").is_some());
}

#[test]
fn test_trigger_matches_mid_message() {
    let message = "hola, cuánto es 2+2";
    let trigger = find_trigger(message).unwrap();
    assert_eq!(&message[trigger.start..trigger.end], "cuánto es");
}

#[test]
fn test_all_trigger_phrases() {
    assert!(find_trigger("calcula 2+2").is_some());
    assert!(find_trigger("resuelve 2+2").is_some());
    assert!(find_trigger("dame el resultado de 2+2").is_some());
}

#[test]
fn test_earliest_trigger_wins() {
    let message = "calcula el resultado de 2+2";
    let trigger = find_trigger(message).unwrap();
    assert_eq!(&message[trigger.start..trigger.end], "calcula");
}

#[test]
fn test_no_trigger_in_plain_chat() {
    assert!(find_trigger("qué hora es").is_none());
    assert!(find_trigger("hola, cómo estás").is_none());
    assert!(find_trigger("2+2").is_none());
}

// ============================================================================
// Greeting Detection
// ============================================================================

#[test]
fn test_greeting_phrases() {
    assert!(is_greeting("hola"));
    assert!(is_greeting("Hola, ¿qué tal?"));
    assert!(is_greeting("buenos días"));
    assert!(is_greeting("muy buenas tardes"));
    assert!(is_greeting("buenas noches"));
}

#[test]
fn test_non_greetings() {
    assert!(!is_greeting("qué hora es"));
    assert!(!is_greeting("adiós"));
    assert!(!is_greeting("2+2"));
}

// ============================================================================
// Candidate Extraction
// ============================================================================

#[test]
fn test_candidate_is_text_after_trigger() {
    assert_eq!(candidate("¿Cuánto es 2 más 2?"), "2+2");
}

#[test]
fn test_candidate_translates_operator_words() {
    assert_eq!(candidate("calcula 5 por 3"), "5*3");
    assert_eq!(candidate("dime el resultado de 10 entre 2"), "10/2");
    assert_eq!(candidate("cuánto es 7 menos 4"), "7-4");
}

#[test]
fn test_candidate_keeps_symbols_and_parens() {
    assert_eq!(candidate("cuanto es 3 * (4+5)"), "3*(4+5)");
}

#[test]
fn test_candidate_drops_repeated_cue_phrases() {
    assert_eq!(candidate("cuánto es cuánto es 2+2"), "2+2");
}

#[test]
fn test_candidate_empty_when_nothing_follows() {
    assert_eq!(candidate("¿cuánto es?"), "");
}
