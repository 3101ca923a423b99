//! Route a message through the assistant and render the reply

use serde_json::json;

use crate::reply::{self, Reply};

/// Options for the respond command
#[derive(Debug, Clone, Default)]
pub struct RespondOptions {
    /// The incoming message to interpret
    pub message: String,
    /// Wrap the reply in a JSON envelope
    pub json: bool,
}

/// Executes the reply router over one message.
///
/// Routing is total, so this cannot fail: invalid arithmetic comes back as
/// its fixed reply sentence, not as an error. With `json` set, the reply is
/// wrapped in the `{"response": ...}` envelope bridges expect, extended
/// with the routing kind.
pub fn execute_respond(options: &RespondOptions) -> String {
    let Reply { text, kind } = reply::respond(&options.message);

    if options.json {
        json!({ "response": text, "kind": kind.to_string() }).to_string()
    } else {
        text
    }
}
