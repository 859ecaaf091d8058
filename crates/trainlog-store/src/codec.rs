//! Text encoding shared by the store adapters.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;
use trainlog_core::ports::LoadOutcome;
use trainlog_core::Result;

const INDENT: &[u8] = b"    ";

/// Pretty-print a document with four-space indentation and a trailing newline
pub(crate) fn encode(document: &Value) -> Result<String> {
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
    document.serialize(&mut serializer)?;
    buffer.push(b'\n');

    // serde_json only ever emits UTF-8
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Parse stored text, reporting unparseable content as corrupt
pub(crate) fn decode(text: &str) -> LoadOutcome {
    match serde_json::from_str(text) {
        Ok(document) => LoadOutcome::Found(document),
        Err(e) => LoadOutcome::Corrupt { reason: e.to_string() },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_encode_uses_four_space_indent() {
        let text = encode(&json!({"workouts": {"2025-05-01": []}})).unwrap();
        assert_eq!(text, "{\n    \"workouts\": {\n        \"2025-05-01\": []\n    }\n}\n");
    }

    #[test]
    fn test_encode_keeps_key_order() {
        let text = encode(&json!({"name": "Squat", "sets": 4, "reps": 8, "weight": null})).unwrap();
        let name = text.find("name").unwrap();
        let sets = text.find("sets").unwrap();
        let reps = text.find("reps").unwrap();
        let weight = text.find("weight").unwrap();
        assert!(name < sets && sets < reps && reps < weight);
    }

    #[test]
    fn test_encode_writes_utf8() {
        let text = encode(&json!({"name": "Pritūpimai"})).unwrap();
        assert!(text.contains("Pritūpimai"));
    }

    #[test]
    fn test_decode_reports_corrupt_text() {
        assert!(matches!(decode("{\"workouts\": "), LoadOutcome::Corrupt { .. }));
        assert!(matches!(decode(""), LoadOutcome::Corrupt { .. }));
        assert_eq!(decode("{}"), LoadOutcome::Found(json!({})));
    }
}
