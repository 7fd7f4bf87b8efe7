// Shared scoring criteria for both analysis templates. The wording pushes the
// model away from lazy zeros: 0 is reserved for genuinely neutral/centrist
// text, not used as a default.
pub const CRITERIOS_ANALISIS: &str = r#"1. El sentimiento general (positivo/negativo/neutral) en una escala de -1 a 1
   - Usa valores entre -1 (muy negativo) y 1 (muy positivo)
   - 0 solo debe usarse cuando el texto es completamente neutral
   - Evita usar 0 por defecto, intenta detectar aunque sea ligeras tendencias

2. La orientación política (izquierda/centro/derecha) en una escala de -1 (izquierda) a 1 (derecha)
   - Usa valores entre -1 (extrema izquierda) y 1 (extrema derecha)
   - 0 solo debe usarse cuando la posición es genuinamente de centro
   - Evita usar 0 por defecto, intenta detectar aunque sea ligeras tendencias
   - Considera el contexto argentino al evaluar la orientación

3. Los principales adjetivos utilizados (máximo 5)
   - Incluye adjetivos que reflejen la postura política o el tono emocional
   - Si no hay suficientes adjetivos explícitos, infiere algunos basados en el tono y contenido

4. Temas principales mencionados (máximo 3)
   - Identifica los temas políticos, económicos o sociales más relevantes
   - Usa etiquetas concisas pero descriptivas"#;
