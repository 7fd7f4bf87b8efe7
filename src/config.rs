use anyhow::{bail, Result};
use async_openai::{config::OpenAIConfig, Client as OpenAIClient};
use ollama_rs::Ollama;
use std::env;

use crate::{LLMClient, LLMParams};

/// Gemini's OpenAI-compatible endpoint; the chat client points here instead
/// of api.openai.com.
const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/openai";

const DEFAULT_MODEL: &str = "gemini-2.0-flash-001";
const DEFAULT_PORT: u16 = 8000;

/// Process-wide configuration, read from the environment once at startup and
/// immutable afterwards.
///
/// - `GOOGLE_API_KEY`: required unless `LLM_TYPE=ollama`; the process refuses
///   to start without it.
/// - `ANALYSIS_MODEL`: model identifier (default `gemini-2.0-flash-001`).
/// - `LLM_TEMPERATURE`: sampling temperature (default 0.0).
/// - `LLM_TYPE`: `ollama` to target a local instance via `OLLAMA_HOST` /
///   `OLLAMA_PORT` instead of the hosted endpoint.
/// - `PORT`: listening port (default 8000).
#[derive(Clone)]
pub struct AppConfig {
    pub model: String,
    pub temperature: f32,
    pub port: u16,
    pub llm_client: LLMClient,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let llm_type = env::var("LLM_TYPE").unwrap_or_else(|_| "gemini".to_string());

        let llm_client = match llm_type.as_str() {
            "ollama" => {
                let host = env::var("OLLAMA_HOST").unwrap_or_else(|_| "localhost".to_string());
                let port: u16 = env::var("OLLAMA_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(11434);
                LLMClient::Ollama(Ollama::new(host, port))
            }
            _ => {
                let api_key = match env::var("GOOGLE_API_KEY") {
                    Ok(key) if !key.trim().is_empty() => key,
                    _ => bail!("GOOGLE_API_KEY no está definida en las variables de entorno"),
                };
                let config = OpenAIConfig::new()
                    .with_api_key(api_key)
                    .with_api_base(GEMINI_API_BASE);
                LLMClient::OpenAI(OpenAIClient::with_config(config))
            }
        };

        let model = env::var("ANALYSIS_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let temperature: f32 = env::var("LLM_TEMPERATURE")
            .unwrap_or_else(|_| "0.0".to_string())
            .parse()
            .unwrap_or(0.0);

        let port: u16 = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Ok(Self {
            model,
            temperature,
            port,
            llm_client,
        })
    }

    /// The invoker parameters shared by every request.
    pub fn llm_params(&self) -> LLMParams {
        LLMParams {
            llm_client: self.llm_client.clone(),
            model: self.model.clone(),
            temperature: self.temperature,
        }
    }
}
