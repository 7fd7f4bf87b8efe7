// Declare submodules
pub mod extraction;
pub mod schema;
pub mod types;

use tracing::{debug, error, info};

use crate::error::AnalysisError;
use crate::llm::generate_llm_response;
use crate::prompt;
use crate::{LLMParams, TARGET_ANALYSIS};

use types::{AnalysisRequest, AnalysisResult};

/// Runs the full pipeline for one request: build the mode-dependent prompt,
/// ask the model, strip any code fencing, and validate the reply against the
/// expected per-model schema.
///
/// Single and comparative requests follow the same path; only the template
/// and the set of expected entry keys differ. The raw model reply is logged
/// on failure and never returned to the caller.
pub async fn run_analysis(
    request: &AnalysisRequest,
    params: &LLMParams,
) -> Result<AnalysisResult, AnalysisError> {
    let prompt_text = prompt::analysis_prompt(&request.question, &request.entries);
    debug!(
        target: TARGET_ANALYSIS,
        "Built {:?} prompt for {} entries",
        request.mode(),
        request.entries.len()
    );

    let raw_reply = match generate_llm_response(&prompt_text, params).await {
        Some(reply) => reply,
        None => {
            error!(target: TARGET_ANALYSIS, "Model produced no reply for question: {}", request.question);
            return Err(AnalysisError::ModelUnavailable);
        }
    };

    let candidate = extraction::extract_json_candidate(&raw_reply);
    match schema::validate_analysis(candidate, &request.entry_keys()) {
        Ok(result) => {
            info!(
                target: TARGET_ANALYSIS,
                "Validated analysis for {} entries",
                result.analyses.len()
            );
            Ok(result)
        }
        Err(e) => {
            error!(
                target: TARGET_ANALYSIS,
                "Failed to validate model reply: {}. Raw reply: {}",
                e, raw_reply
            );
            Err(e)
        }
    }
}
