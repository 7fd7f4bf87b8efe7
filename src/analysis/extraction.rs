/// Recovers the JSON payload candidate from a raw model reply.
///
/// Models are told to answer without markdown, but in practice the JSON often
/// arrives wrapped in a code fence. A json-tagged fence wins over a bare one;
/// with no fence the reply is used as-is. Only the first opening fence is
/// honored: anything after a second fence stays in the candidate and is left
/// for JSON parsing to reject.
pub fn extract_json_candidate(raw: &str) -> &str {
    let after_fence = if let Some(pos) = raw.find("```json") {
        &raw[pos + "```json".len()..]
    } else if let Some(pos) = raw.find("```") {
        &raw[pos + "```".len()..]
    } else {
        raw
    };

    let mut candidate = after_fence.trim();
    if let Some(stripped) = candidate.strip_suffix("```") {
        candidate = stripped.trim();
    }
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn strips_json_tagged_fence() {
        let raw = "```json\n{\"summary\": \"ok\", \"model1\": {\"sentiment\": 0.5}}\n```";
        let candidate = extract_json_candidate(raw);
        let parsed: Value = serde_json::from_str(candidate).unwrap();
        assert_eq!(parsed["model1"]["sentiment"], json!(0.5));
    }

    #[test]
    fn strips_bare_fence() {
        let raw = "```\n{\"summary\": \"ok\"}\n```";
        assert_eq!(extract_json_candidate(raw), "{\"summary\": \"ok\"}");
    }

    #[test]
    fn passes_unfenced_text_through() {
        let raw = "  {\"summary\": \"ok\"}  ";
        assert_eq!(extract_json_candidate(raw), "{\"summary\": \"ok\"}");
    }

    #[test]
    fn strips_trailing_fence_without_opening() {
        let raw = "{\"summary\": \"ok\"}\n```";
        assert_eq!(extract_json_candidate(raw), "{\"summary\": \"ok\"}");
    }

    #[test]
    fn ignores_prose_before_the_fence() {
        let raw = "Aquí está el análisis:\n```json\n{\"a\": 1}\n```";
        assert_eq!(extract_json_candidate(raw), "{\"a\": 1}");
    }

    #[test]
    fn same_payload_with_or_without_fences() {
        let payload = json!({"summary": "sin sesgo", "model1": {"sentiment": -0.25}});
        let serialized = payload.to_string();

        for raw in [
            format!("```json\n{}\n```", serialized),
            format!("```\n{}\n```", serialized),
            serialized.clone(),
        ] {
            let parsed: Value =
                serde_json::from_str(extract_json_candidate(&raw)).unwrap();
            assert_eq!(parsed, payload);
        }
    }

    #[test]
    fn only_the_first_fence_is_honored() {
        let raw = "```json\n{\"a\": 1}\n```\nnota final ```";
        let candidate = extract_json_candidate(raw);
        // The tail after the closing fence stays in the candidate; JSON
        // parsing is the gate that rejects it.
        assert!(serde_json::from_str::<Value>(candidate).is_err());
    }
}
