//! End-to-end checks for the reply-processing half of the pipeline: fence
//! stripping followed by schema validation, using canned model replies.

use sesgo::analysis::extraction::extract_json_candidate;
use sesgo::analysis::schema::validate_analysis;
use sesgo::analysis::types::{AnalysisMode, AnalysisRequest, ModelEntry};
use sesgo::error::AnalysisError;

fn entry(label: &str, response: &str) -> ModelEntry {
    ModelEntry {
        label: label.to_string(),
        response: response.to_string(),
    }
}

fn process(raw_reply: &str, request: &AnalysisRequest) -> Result<sesgo::analysis::types::AnalysisResult, AnalysisError> {
    let candidate = extract_json_candidate(raw_reply);
    validate_analysis(candidate, &request.entry_keys())
}

#[test]
fn single_mode_happy_path() {
    let request = AnalysisRequest::new(
        "¿Qué opinas de la economía?".to_string(),
        vec![entry("modelA", "Todo va excelente, el gobierno es brillante")],
    )
    .unwrap();
    assert_eq!(request.mode(), AnalysisMode::Single);

    let raw_reply = "```json\n{\"summary\":\"Muy positivo y de derecha\",\"model1\":{\"sentiment\":0.8,\"political_orientation\":0.6,\"adjectives\":[\"excelente\",\"brillante\"],\"main_topics\":[\"economía\"]}}\n```";

    let result = process(raw_reply, &request).unwrap();
    assert_eq!(result.summary, "Muy positivo y de derecha");

    let analysis = &result.analyses["model1"];
    assert_eq!(analysis.sentiment, 0.8);
    assert_eq!(analysis.political_orientation, 0.6);
    assert_eq!(analysis.adjectives, vec!["excelente", "brillante"]);
    assert_eq!(analysis.main_topics, vec!["economía"]);
}

#[test]
fn missing_orientation_is_a_schema_failure() {
    let request = AnalysisRequest::new(
        "¿Qué opinas de la economía?".to_string(),
        vec![entry("modelA", "Todo va excelente")],
    )
    .unwrap();

    let raw_reply = "```json\n{\"summary\":\"Positivo\",\"model1\":{\"sentiment\":0.8,\"adjectives\":[\"excelente\"]}}\n```";

    let err = process(raw_reply, &request).unwrap_err();
    match err {
        AnalysisError::InvalidField { field, label } => {
            assert_eq!(field, "political_orientation");
            assert_eq!(label, "model1");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn comparative_reply_without_model2_is_rejected() {
    let request = AnalysisRequest::new(
        "¿Qué opinas de la economía?".to_string(),
        vec![
            entry("modelA", "Todo va excelente"),
            entry("modelB", "Todo va pésimo"),
        ],
    )
    .unwrap();
    assert_eq!(request.mode(), AnalysisMode::Comparative);

    let raw_reply = "{\"summary\":\"x\",\"model1\":{\"sentiment\":0.8,\"political_orientation\":0.6}}";

    let err = process(raw_reply, &request).unwrap_err();
    match err {
        AnalysisError::MissingModel { label } => assert_eq!(label, "model2"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn fence_wrapping_never_changes_the_parsed_payload() {
    let request = AnalysisRequest::new(
        "¿Pregunta?".to_string(),
        vec![entry("modelA", "texto")],
    )
    .unwrap();

    let payload = "{\"summary\":\"neutral\",\"model1\":{\"sentiment\":0.0,\"political_orientation\":0.0}}";

    let plain = process(payload, &request).unwrap();
    let tagged = process(&format!("```json\n{}\n```", payload), &request).unwrap();
    let bare = process(&format!("```\n{}\n```", payload), &request).unwrap();

    assert_eq!(plain, tagged);
    assert_eq!(plain, bare);
}

#[test]
fn garbage_reply_is_a_typed_decode_error() {
    let request = AnalysisRequest::new(
        "¿Pregunta?".to_string(),
        vec![entry("modelA", "texto")],
    )
    .unwrap();

    let err = process("not json at all", &request).unwrap_err();
    assert!(matches!(err, AnalysisError::JsonDecode(_)));
}
