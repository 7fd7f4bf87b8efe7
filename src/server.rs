use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde::Deserialize;
use serde_json::json;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::analysis::run_analysis;
use crate::analysis::types::{AnalysisRequest, AnalysisResult, ModelEntry};
use crate::config::AppConfig;
use crate::error::AnalysisError;
use crate::TARGET_WEB_REQUEST;

static INDEX_HTML: &str = include_str!("../static/index.html");

/// Form payload for `POST /analyze`. The second model/response pair is
/// optional; the request degrades to single mode unless both are present and
/// non-empty.
#[derive(Debug, Deserialize)]
pub struct AnalyzeForm {
    pub question: String,
    pub response1: String,
    pub model1: String,
    #[serde(default)]
    pub response2: Option<String>,
    #[serde(default)]
    pub model2: Option<String>,
}

impl TryFrom<AnalyzeForm> for AnalysisRequest {
    type Error = AnalysisError;

    fn try_from(form: AnalyzeForm) -> Result<Self, Self::Error> {
        let mut entries = vec![ModelEntry {
            label: form.model1,
            response: form.response1,
        }];

        if let (Some(model2), Some(response2)) = (form.model2, form.response2) {
            if !model2.trim().is_empty() && !response2.trim().is_empty() {
                entries.push(ModelEntry {
                    label: model2,
                    response: response2,
                });
            }
        }

        AnalysisRequest::new(form.question, entries)
    }
}

/// Binds the listener and runs the Axum server until shutdown.
pub async fn serve(config: AppConfig) -> anyhow::Result<()> {
    let port = config.port;
    let app = router(config);

    let addr = format!("0.0.0.0:{}", port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server running on http://{}", addr);

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

pub fn router(config: AppConfig) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/analyze", post(analyze))
        .with_state(config)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({ "status": "healthy" }))
}

async fn analyze(
    State(config): State<AppConfig>,
    Form(form): Form<AnalyzeForm>,
) -> Result<Json<AnalysisResult>, AnalysisError> {
    let request = AnalysisRequest::try_from(form)?;
    let result = run_analysis(&request, &config.llm_params()).await?;
    Ok(Json(result))
}

impl IntoResponse for AnalysisError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            AnalysisError::InvalidRequest(reason) => (StatusCode::BAD_REQUEST, reason.clone()),
            AnalysisError::ModelUnavailable => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error al procesar el análisis".to_string(),
            ),
            AnalysisError::JsonDecode(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error al procesar la respuesta del modelo".to_string(),
            ),
            AnalysisError::MissingModel { .. } | AnalysisError::InvalidField { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Formato de respuesta inválido del modelo".to_string(),
            ),
        };

        warn!(target: TARGET_WEB_REQUEST, "Analysis request failed: {}", self);
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
