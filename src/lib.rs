pub mod analysis;
pub mod config;
pub mod error;
pub mod llm;
pub mod logging;
pub mod prompt;
pub mod server;

use async_openai::{config::OpenAIConfig, Client as OpenAIClient};
use ollama_rs::Ollama;

pub const TARGET_WEB_REQUEST: &str = "web_request";
pub const TARGET_LLM_REQUEST: &str = "llm_request";
pub const TARGET_ANALYSIS: &str = "analysis";

#[derive(Clone, Debug)]
pub enum LLMClient {
    Ollama(Ollama),
    OpenAI(OpenAIClient<OpenAIConfig>),
}

/// Everything the invoker needs for one generation call. Built once per
/// process from [`config::AppConfig`] and shared by value across requests.
#[derive(Clone)]
pub struct LLMParams {
    pub llm_client: LLMClient,
    pub model: String,
    pub temperature: f32,
}
