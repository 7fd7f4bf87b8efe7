use thiserror::Error;

/// Failure taxonomy for one analysis request. Every variant maps to a stable
/// client-facing `detail` message in the HTTP layer; raw model output is only
/// ever logged server-side.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("solicitud inválida: {0}")]
    InvalidRequest(String),

    #[error("el modelo no devolvió ninguna respuesta")]
    ModelUnavailable,

    #[error("la respuesta del modelo no es JSON válido: {0}")]
    JsonDecode(#[from] serde_json::Error),

    #[error("falta el análisis de {label} en la respuesta")]
    MissingModel { label: String },

    #[error("campo {field} inválido o ausente para {label}")]
    InvalidField { field: &'static str, label: String },
}
