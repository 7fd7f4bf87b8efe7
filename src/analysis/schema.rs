use serde_json::Value;
use std::collections::BTreeMap;

use crate::analysis::types::{AnalysisResult, ModelAnalysis};
use crate::error::AnalysisError;

/// Parses a JSON candidate and checks it against the per-model schema.
///
/// Every expected entry key must be present and carry numeric `sentiment` and
/// `political_orientation` values; a failure on any entry invalidates the
/// whole reply. The adjective/topic lists drive nothing downstream, so they
/// are taken as-is and default to empty when missing or malformed.
pub fn validate_analysis(
    candidate: &str,
    entry_keys: &[String],
) -> Result<AnalysisResult, AnalysisError> {
    let parsed: Value = serde_json::from_str(candidate)?;

    let mut analyses = BTreeMap::new();
    for key in entry_keys {
        let entry = parsed.get(key).ok_or_else(|| AnalysisError::MissingModel {
            label: key.clone(),
        })?;
        analyses.insert(key.clone(), parse_model_analysis(entry, key)?);
    }

    let summary = parsed
        .get("summary")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    Ok(AnalysisResult { summary, analyses })
}

fn parse_model_analysis(entry: &Value, label: &str) -> Result<ModelAnalysis, AnalysisError> {
    Ok(ModelAnalysis {
        sentiment: number_field(entry, "sentiment", label)?,
        political_orientation: number_field(entry, "political_orientation", label)?,
        magnitude: entry.get("magnitude").and_then(Value::as_f64),
        adjectives: string_list(entry, "adjectives"),
        main_topics: string_list(entry, "main_topics"),
    })
}

fn number_field(entry: &Value, field: &'static str, label: &str) -> Result<f64, AnalysisError> {
    entry
        .get(field)
        .and_then(Value::as_f64)
        .ok_or_else(|| AnalysisError::InvalidField {
            field,
            label: label.to_string(),
        })
}

fn string_list(entry: &Value, field: &str) -> Vec<String> {
    entry
        .get(field)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
