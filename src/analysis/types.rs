use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::AnalysisError;

/// One submitted answer: the label shown for the model and the text it wrote.
#[derive(Debug, Clone)]
pub struct ModelEntry {
    pub label: String,
    pub response: String,
}

/// Which instruction template and schema shape a request uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisMode {
    Single,
    Comparative,
}

/// A validated analysis request: a question plus one or two model answers.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub question: String,
    pub entries: Vec<ModelEntry>,
}

impl AnalysisRequest {
    pub fn new(question: String, entries: Vec<ModelEntry>) -> Result<Self, AnalysisError> {
        if question.trim().is_empty() {
            return Err(AnalysisError::InvalidRequest(
                "la pregunta no puede estar vacía".to_string(),
            ));
        }
        if entries.is_empty() || entries.len() > 2 {
            return Err(AnalysisError::InvalidRequest(
                "se requieren una o dos respuestas para analizar".to_string(),
            ));
        }
        for entry in &entries {
            if entry.label.trim().is_empty() || entry.response.trim().is_empty() {
                return Err(AnalysisError::InvalidRequest(
                    "cada respuesta necesita un modelo y un texto no vacíos".to_string(),
                ));
            }
        }
        Ok(Self { question, entries })
    }

    pub fn mode(&self) -> AnalysisMode {
        if self.entries.len() == 2 {
            AnalysisMode::Comparative
        } else {
            AnalysisMode::Single
        }
    }

    /// The JSON keys the model reply must carry, in entry order:
    /// `model1`, and `model2` in comparative mode.
    pub fn entry_keys(&self) -> Vec<String> {
        (1..=self.entries.len())
            .map(|n| format!("model{}", n))
            .collect()
    }
}

/// Per-model scores parsed out of the LLM reply. The numeric fields are
/// enforced by validation; the word lists are whatever the model offered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelAnalysis {
    pub sentiment: f64,
    pub political_orientation: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub magnitude: Option<f64>,
    #[serde(default)]
    pub adjectives: Vec<String>,
    #[serde(default)]
    pub main_topics: Vec<String>,
}

/// The structured result returned to the caller. Serializes flat, with
/// `summary` next to `model1`/`model2`, which is the shape the page's charts
/// consume.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AnalysisResult {
    pub summary: String,
    #[serde(flatten)]
    pub analyses: BTreeMap<String, ModelAnalysis>,
}
