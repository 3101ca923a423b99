//! Arithmetic intent detection.
//!
//! Decides whether an incoming message is asking for arithmetic at all, and
//! where the trigger phrase sits so the normalizer can slice out the
//! candidate expression. Detection is pure pattern matching over a fixed
//! table; no message content is interpreted here.

use std::sync::LazyLock;

use regex::Regex;

/// Trigger phrases, compiled once. Matching is case-insensitive and
/// tolerates the unaccented "cuanto". Selection is earliest match wins,
/// with the longer phrase breaking ties at the same offset.
pub(crate) static TRIGGERS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)cu[aá]nto\s+es",
        r"(?i)calcula",
        r"(?i)resuelve",
        r"(?i)resultado\s+de",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

/// Greeting cues, checked only after no arithmetic trigger matched.
const GREETINGS: [&str; 4] = ["hola", "buenos días", "buenas tardes", "buenas noches"];

/// Where a trigger phrase matched inside an utterance, as byte offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerMatch {
    pub start: usize,
    pub end: usize,
}

/// Finds the arithmetic trigger in `utterance`, if any.
///
/// Triggers match anywhere in the message, so "hola, cuánto es 2+2" still
/// counts as an arithmetic question. When several trigger phrases appear,
/// the earliest one wins; at the same start offset the longest literal
/// wins, keeping the choice independent of table order.
pub fn find_trigger(utterance: &str) -> Option<TriggerMatch> {
    let mut best: Option<TriggerMatch> = None;

    for regex in TRIGGERS.iter() {
        if let Some(m) = regex.find(utterance) {
            let candidate = TriggerMatch {
                start: m.start(),
                end: m.end(),
            };

            let better = match best {
                None => true,
                Some(current) => {
                    candidate.start < current.start
                        || (candidate.start == current.start && candidate.end > current.end)
                }
            };

            if better {
                best = Some(candidate);
            }
        }
    }

    best
}

/// Whether the message reads as a greeting.
pub fn is_greeting(utterance: &str) -> bool {
    let lowered = utterance.to_lowercase();
    GREETINGS.iter().any(|greeting| lowered.contains(greeting))
}
