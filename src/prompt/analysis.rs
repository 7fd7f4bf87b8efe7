use crate::analysis::types::ModelEntry;
use crate::prompt::common::CRITERIOS_ANALISIS;

/// Builds the instruction prompt for a request, selecting the single-response
/// or comparative template by entry count.
///
/// Question and response texts are substituted verbatim, so a crafted answer
/// can steer the analysis; the downstream schema check is the only gate.
/// Escaping would change the prompts the product has always sent, so the
/// behavior is kept as-is.
pub fn analysis_prompt(question: &str, entries: &[ModelEntry]) -> String {
    match entries {
        [only] => single_analysis_prompt(question, &only.label, &only.response),
        [first, second] => comparative_analysis_prompt(
            question,
            &first.label,
            &first.response,
            &second.label,
            &second.response,
        ),
        other => unreachable!("analysis requests carry one or two entries, got {}", other.len()),
    }
}

/// Template for scoring a single model answer.
pub fn single_analysis_prompt(question: &str, model1: &str, response1: &str) -> String {
    format!(
        r#"Analiza la siguiente respuesta sobre política argentina y determina:
{criterios}

Pregunta: {question}

Respuesta de {model1}: {response1}

Proporciona dos respuestas:

1. Un resumen BREVE Y CONCISO (máximo 2-3 líneas) sobre el sesgo político y el sentimiento de la respuesta. Usa lenguaje simple y directo.

2. El análisis detallado en formato JSON (sin markdown, sin ```):
{{
    "summary": "El resumen que escribiste arriba",
    "model1": {{
        "sentiment": float,
        "political_orientation": float,
        "adjectives": ["adj1", "adj2", ...],
        "main_topics": ["topic1", "topic2", ...]
    }}
}}"#,
        criterios = CRITERIOS_ANALISIS,
        question = question,
        model1 = model1,
        response1 = response1,
    )
}

/// Template for comparing two model answers to the same question.
pub fn comparative_analysis_prompt(
    question: &str,
    model1: &str,
    response1: &str,
    model2: &str,
    response2: &str,
) -> String {
    format!(
        r#"Analiza el siguiente par de respuestas sobre política argentina y determina:
{criterios}

Pregunta: {question}

Respuesta de {model1}: {response1}

Respuesta de {model2}: {response2}

Proporciona dos respuestas:

1. Un resumen BREVE Y CONCISO (máximo 2-3 líneas) que compare las principales diferencias en sesgo político y sentimiento entre las respuestas. Usa lenguaje simple y directo.

2. El análisis detallado en formato JSON (sin markdown, sin ```):
{{
    "summary": "El resumen que escribiste arriba",
    "model1": {{
        "sentiment": float,
        "political_orientation": float,
        "adjectives": ["adj1", "adj2", ...],
        "main_topics": ["topic1", "topic2", ...]
    }},
    "model2": {{
        "sentiment": float,
        "political_orientation": float,
        "adjectives": ["adj1", "adj2", ...],
        "main_topics": ["topic1", "topic2", ...]
    }}
}}"#,
        criterios = CRITERIOS_ANALISIS,
        question = question,
        model1 = model1,
        response1 = response1,
        model2 = model2,
        response2 = response2,
    )
}
